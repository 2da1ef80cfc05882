//! # Export Pipeline
//!
//! Turns the currently rendered template output into a single-page
//! printable artifact. The browser- or platform-specific plumbing (a
//! hidden iframe, an offscreen webview, a rasterizer) lives behind the
//! [`StagingSurface`] trait; this module owns the sequencing contract:
//!
//! 1. mount the rendered markup on the staging surface,
//! 2. wait for asynchronously loaded presentation resources (fonts), then
//!    a short fixed settle delay; measuring before they are ready would
//!    make the fit computation wrong,
//! 3. measure the content's natural height,
//! 4. if it exceeds the logical page, apply a uniform scale so the whole
//!    document fits on one page (never crop, never clip),
//! 5. invoke the surface's print.
//!
//! Triggering is idempotent: a second [`ExportPipeline::begin`] while a
//! job is in flight is a no-op until [`ExportPipeline::finish`] (or a
//! failure) returns the pipeline to ready. The staging surface is
//! released on every path (completion, failure, or skip) so repeated
//! exports never leak a staging resource.

use std::time::Duration;

use crate::error::Result;
use crate::render::{RenderedResume, PAGE_HEIGHT};

/// Settle delay after resources report ready, before measuring.
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);

/// A host-provided offscreen render target for export.
///
/// Implementations stage the rendered markup away from the live view,
/// report when presentation resources are loaded, measure, and print.
/// `release` must be safe to call at any point, including after a failed
/// `mount`.
pub trait StagingSurface {
    /// Stage the rendered markup, reproducing all styling applied to the
    /// live rendering.
    fn mount(&mut self, rendered: &RenderedResume) -> Result<()>;

    /// Block (or cooperatively wait) until fonts and other asynchronous
    /// presentation resources are ready.
    fn wait_resources_ready(&mut self) -> Result<()>;

    /// Let layout settle for a fixed delay before measurement.
    fn settle(&mut self, delay: Duration) -> Result<()>;

    /// The staged content's natural height in logical px.
    fn content_height(&mut self) -> Result<f64>;

    /// Uniformly scale the staged content (aspect ratio preserved) so it
    /// fits the logical page.
    fn apply_page_fit(&mut self, scale: f64) -> Result<()>;

    /// Hand the staged content to the host's print path. May return
    /// before the host-side print dialog completes; the host signals
    /// completion through [`ExportPipeline::finish`].
    fn print(&mut self) -> Result<()>;

    /// Tear down the staging resource. Idempotent.
    fn release(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportOutcome {
    /// The job was staged and printing was invoked. `scale` is 1.0 when
    /// the content fit the page naturally.
    Started { scale: f64 },
    /// Another export is in flight; this trigger was ignored.
    Skipped,
}

pub struct ExportPipeline<S: StagingSurface> {
    surface: S,
    settle: Duration,
    in_flight: bool,
}

impl<S: StagingSurface> ExportPipeline<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            settle: SETTLE_DELAY,
            in_flight: false,
        }
    }

    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle = delay;
        self
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Stage, fit, and print the rendered document. No-op while a
    /// previous job is still in flight. On any failure the surface is
    /// released and the pipeline returns to ready state; no partial
    /// artifact is produced.
    pub fn begin(&mut self, rendered: &RenderedResume) -> Result<ExportOutcome> {
        if self.in_flight {
            return Ok(ExportOutcome::Skipped);
        }
        self.in_flight = true;

        match self.run(rendered) {
            Ok(scale) => Ok(ExportOutcome::Started { scale }),
            Err(e) => {
                self.surface.release();
                self.in_flight = false;
                Err(e)
            }
        }
    }

    /// Host signal that the print invocation has completed (or its dialog
    /// was dismissed). Releases the staging surface and re-arms the
    /// pipeline.
    pub fn finish(&mut self) {
        self.surface.release();
        self.in_flight = false;
    }

    fn run(&mut self, rendered: &RenderedResume) -> Result<f64> {
        self.surface.mount(rendered)?;
        self.surface.wait_resources_ready()?;
        self.surface.settle(self.settle)?;

        let height = self.surface.content_height()?;
        let page_height = f64::from(PAGE_HEIGHT);
        let scale = if height > page_height {
            page_height / height
        } else {
            1.0
        };
        if scale < 1.0 {
            self.surface.apply_page_fit(scale)?;
        }

        self.surface.print()?;
        Ok(scale)
    }
}
