//! # Template Renderers
//!
//! Four pure functions mapping `(document, accent color)` to a fully
//! laid-out visual document. The same output serves the live preview and
//! the export pipeline, which is why the contract is strict:
//!
//! - **Pure and deterministic**: no side effects, no internal state, no
//!   access to the session; identical inputs always produce identical
//!   markup. Export fidelity depends on this matching the preview exactly.
//! - **Empty sections render nothing**: a section with zero entries emits
//!   no header; a section with entries renders even when every field in an
//!   entry is blank.
//! - **Shared formatting**: date tokens go through
//!   [`format::format_date`] / [`format::date_range`]; no template
//!   reimplements them. Current experience entries always read "Present".
//! - **Profile image**: rendered only when both the display toggle is on
//!   and a payload is stored; otherwise nothing, never a broken image.
//!   The executive and minimal layouts are imageless by design.
//! - **Fixed logical page**: output is sized to [`PAGE_WIDTH`] ×
//!   [`PAGE_HEIGHT`] (US Letter at 96 dpi) and does not paginate; overflow
//!   is the export pipeline's job.
//!
//! The root element carries [`PRINT_AREA_ID`] so the export step can look
//! up and capture the rendered surface in isolation from the rest of the
//! host UI.

mod bold;
mod executive;
pub mod format;
mod html;
mod minimal;
mod modern;

use crate::model::{ResumeDocument, TemplateName};

pub use format::{contact_items, date_range, format_date, hex_to_rgba};

/// Logical page width in px (US Letter at 96 dpi).
pub const PAGE_WIDTH: u32 = 816;
/// Logical page height in px (US Letter at 96 dpi).
pub const PAGE_HEIGHT: u32 = 1056;
/// The id on the rendered root element, the capture target for export.
pub const PRINT_AREA_ID: &str = "resume-print-area";

/// A rendered document: self-contained, inline-styled markup sized to the
/// logical page, with the print-area root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedResume {
    pub template: TemplateName,
    pub html: String,
}

/// Render `document` with the given template and accent color.
pub fn render(document: &ResumeDocument, template: TemplateName, accent: &str) -> RenderedResume {
    let accent = html::esc(accent);
    let body = match template {
        TemplateName::Executive => executive::render(document, &accent),
        TemplateName::Modern => modern::render(document, &accent),
        TemplateName::Minimal => minimal::render(document, &accent),
        TemplateName::Bold => bold::render(document, &accent),
    };
    RenderedResume {
        template,
        html: format!("<div id=\"{}\">{}</div>", PRINT_AREA_ID, body),
    }
}
