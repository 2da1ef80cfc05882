//! # Resume Session: the Document Store
//!
//! [`ResumeSession`] owns the single writable [`ResumeDocument`] and
//! [`Settings`] for the running session. Every mutation and every read for
//! rendering goes through it; that centralization is what guarantees
//! persistence scheduling and re-render triggering are never missed.
//!
//! ## Lifecycle
//!
//! ```text
//! Unhydrated ──hydrate()──▶ Ready
//! ```
//!
//! A new session holds the built-in seed document so the host can render
//! immediately. While unhydrated, mutations are accepted but persistence
//! is suppressed; writing back defaults before stored data has had a
//! chance to load would overwrite any existing saved data. `hydrate()`
//! replaces document and settings wholesale with whatever the persistence
//! adapter restores, then enters `Ready`.
//!
//! ## Snapshots
//!
//! The document lives behind an `Rc`. Each mutation clones the current
//! value, applies the change, and installs a fresh `Rc`. Readers holding
//! the previous snapshot are never invalidated mid-read, and a host can
//! detect change by pointer comparison ([`Rc::ptr_eq`]) without any
//! signaling machinery.
//!
//! ## Persistence driving
//!
//! Document mutations schedule a debounced save ([`crate::debounce`]);
//! the host polls [`ResumeSession::tick`] from its event loop (or calls
//! [`ResumeSession::tick_at`] with its own clock). The save reads the
//! *current* snapshot when the timer fires, never a stale capture.
//! Settings changes are discrete, so they write through immediately
//! instead. A storage write failure never disturbs the in-memory state:
//! edits stay live for the session even if they cannot persist.

mod entries;

use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::debounce::SaveTimer;
use crate::defaults;
use crate::error::Result;
use crate::model::{EditorSection, PersonalInfoPatch, ResumeDocument, Settings, TemplateName};
use crate::render::{self, RenderedResume};
use crate::store::{FsBackend, PersistenceAdapter, StorageBackend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Rendering from built-in defaults; persistence suppressed.
    Unhydrated,
    /// Stored state loaded; mutations schedule persistence.
    Ready,
}

pub struct ResumeSession<B: StorageBackend> {
    adapter: PersistenceAdapter<B>,
    document: Rc<ResumeDocument>,
    settings: Settings,
    phase: SessionPhase,
    timer: SaveTimer,
    // Editor-only ephemeral state, never persisted
    zoom: u32,
    active_section: EditorSection,
}

impl ResumeSession<FsBackend> {
    /// Session backed by the OS-appropriate per-user data directory.
    pub fn at_default_root() -> Result<Self> {
        Ok(Self::new(FsBackend::at_default_root()?))
    }
}

impl<B: StorageBackend> ResumeSession<B> {
    pub fn new(backend: B) -> Self {
        Self {
            adapter: PersistenceAdapter::new(backend),
            document: Rc::new(defaults::seed_document()),
            settings: defaults::default_settings(),
            phase: SessionPhase::Unhydrated,
            timer: SaveTimer::default(),
            zoom: 100,
            active_section: EditorSection::default(),
        }
    }

    /// Override the debounce idle gap (default 400 ms).
    pub fn with_save_gap(mut self, gap: Duration) -> Self {
        self.timer = SaveTimer::new(gap);
        self
    }

    // --- Reads ---

    /// The current document snapshot. Cheap to clone; compare with
    /// [`Rc::ptr_eq`] against an earlier snapshot to detect change.
    pub fn document(&self) -> Rc<ResumeDocument> {
        Rc::clone(&self.document)
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn active_section(&self) -> EditorSection {
        self.active_section
    }

    /// Render the current document with the active template and accent.
    pub fn render_active(&self) -> RenderedResume {
        render::render(
            &self.document,
            self.settings.template,
            &self.settings.accent_color,
        )
    }

    // --- Lifecycle ---

    /// Replace document and settings wholesale with the stored state and
    /// enter `Ready`. Any edits made while unhydrated are discarded, and
    /// any pending save is dropped with them.
    pub fn hydrate(&mut self) {
        let loaded = self.adapter.load();
        self.document = Rc::new(loaded.document);
        self.settings = loaded.settings;
        self.timer.cancel();
        self.phase = SessionPhase::Ready;
    }

    // --- Persistence driving ---

    /// Fire the pending save if its idle gap has elapsed. Returns whether
    /// a write happened. Hosts poll this from their event loop.
    pub fn tick(&mut self) -> Result<bool> {
        self.tick_at(Instant::now())
    }

    /// Clock-injected variant of [`Self::tick`].
    pub fn tick_at(&mut self, now: Instant) -> Result<bool> {
        if !self.timer.is_due(now) {
            return Ok(false);
        }
        self.timer.cancel();
        // Reads the snapshot current at fire time, not at schedule time.
        self.adapter.save_document(&self.document)?;
        Ok(true)
    }

    /// Force a pending save to fire now (host shutdown). No-op when
    /// nothing is pending.
    pub fn flush(&mut self) -> Result<bool> {
        if !self.timer.cancel() {
            return Ok(false);
        }
        self.adapter.save_document(&self.document)?;
        Ok(true)
    }

    /// Drop any pending save without writing (host unmount).
    pub fn cancel_pending_save(&mut self) -> bool {
        self.timer.cancel()
    }

    pub fn has_pending_save(&self) -> bool {
        self.timer.is_pending()
    }

    // --- Personal info & profile image ---

    pub fn update_personal_info(&mut self, patch: PersonalInfoPatch) {
        self.mutate(|doc| patch.apply(&mut doc.personal_info));
    }

    /// Store the image payload (a data URI). Independent of the display
    /// toggle; an empty string clears the stored image.
    pub fn set_profile_image(&mut self, data_uri: String) {
        self.mutate(|doc| doc.profile_image = data_uri);
    }

    /// Flip the display toggle, regardless of whether an image is stored.
    pub fn toggle_profile_image(&mut self) {
        self.mutate(|doc| doc.show_profile_image = !doc.show_profile_image);
    }

    // --- Presentation settings (write-through, not debounced) ---

    pub fn set_template(&mut self, template: TemplateName) {
        self.settings.template = template;
        self.persist_settings();
    }

    pub fn set_accent_color(&mut self, hex: String) {
        self.settings.accent_color = hex;
        self.persist_settings();
    }

    // --- Ephemeral editor state ---

    pub fn set_zoom(&mut self, percent: u32) {
        self.zoom = percent;
    }

    pub fn set_active_section(&mut self, section: EditorSection) {
        self.active_section = section;
    }

    // --- Internals ---

    /// Apply a change to a fresh clone of the document and install it as
    /// the new snapshot, scheduling the debounced save when hydrated.
    pub(crate) fn mutate(&mut self, f: impl FnOnce(&mut ResumeDocument)) {
        let mut next = (*self.document).clone();
        f(&mut next);
        self.document = Rc::new(next);
        if self.phase == SessionPhase::Ready {
            self.timer.schedule(Instant::now());
        }
    }

    fn persist_settings(&mut self) {
        if self.phase != SessionPhase::Ready {
            return;
        }
        // A failed write leaves the in-memory setting live for the
        // session; there is no retry and no user-facing error.
        let _ = self.adapter.save_settings(&self.settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemBackend, StorageKey};

    fn ready_session() -> ResumeSession<MemBackend> {
        let mut session = ResumeSession::new(MemBackend::new());
        session.hydrate();
        session
    }

    fn fire(session: &mut ResumeSession<MemBackend>) {
        let later = Instant::now() + Duration::from_secs(5);
        session.tick_at(later).unwrap();
    }

    #[test]
    fn test_fresh_session_renders_seed_before_hydration() {
        let session = ResumeSession::new(MemBackend::new());
        assert_eq!(session.phase(), SessionPhase::Unhydrated);
        assert_eq!(session.document().personal_info.full_name, "Jordan Mitchell");
        assert_eq!(session.document().experience.len(), 2);
        assert_eq!(session.settings().template, TemplateName::Executive);
        assert_eq!(session.settings().accent_color, "#2563eb");
        assert_eq!(session.zoom(), 100);
        assert_eq!(session.active_section(), EditorSection::Personal);
    }

    #[test]
    fn test_hydration_over_empty_storage_keeps_seed() {
        let mut session = ResumeSession::new(MemBackend::new());
        let before = session.document();
        session.hydrate();
        assert_eq!(session.phase(), SessionPhase::Ready);
        assert_eq!(*session.document(), *before);
        assert_eq!(*session.settings(), Settings::default());
    }

    #[test]
    fn test_mutations_before_hydration_never_persist() {
        let mut session = ResumeSession::new(MemBackend::new());
        session.update_personal_info(PersonalInfoPatch {
            full_name: Some("Too Early".to_string()),
            ..Default::default()
        });

        assert!(!session.has_pending_save());
        fire(&mut session);
        assert_eq!(
            session.adapter.backend().write_count(StorageKey::Document),
            0
        );
    }

    #[test]
    fn test_hydration_replaces_unhydrated_edits_wholesale() {
        let backend = MemBackend::new();
        backend.preload(
            StorageKey::Document,
            r#"{"personalInfo":{"fullName":"Saved Person"},
                "experience":[],"education":[],"skills":[],"projects":[],
                "showProfileImage":false}"#,
        );
        let mut session = ResumeSession::new(backend);

        session.update_personal_info(PersonalInfoPatch {
            full_name: Some("Pre-hydration Edit".to_string()),
            ..Default::default()
        });
        session.hydrate();

        assert_eq!(session.document().personal_info.full_name, "Saved Person");
        assert!(session.document().experience.is_empty());
    }

    #[test]
    fn test_debounce_coalesces_rapid_mutations_into_one_write() {
        let mut session = ready_session();

        for i in 0..10 {
            session.update_personal_info(PersonalInfoPatch {
                summary: Some(format!("draft {}", i)),
                ..Default::default()
            });
        }

        // Nothing fires before the idle gap elapses
        session.tick_at(Instant::now()).unwrap();
        assert_eq!(
            session.adapter.backend().write_count(StorageKey::Document),
            0
        );

        fire(&mut session);
        assert_eq!(
            session.adapter.backend().write_count(StorageKey::Document),
            1
        );

        // The write reflects the last mutation, not an intermediate state
        let raw = session
            .adapter
            .backend()
            .read(StorageKey::Document)
            .unwrap()
            .unwrap();
        assert!(raw.contains("draft 9"));
        assert!(!raw.contains("draft 8"));
    }

    #[test]
    fn test_tick_without_pending_save_is_noop() {
        let mut session = ready_session();
        assert!(!session.tick().unwrap());
    }

    #[test]
    fn test_flush_forces_pending_save() {
        let mut session = ready_session();
        session.toggle_profile_image();

        assert!(session.flush().unwrap());
        assert_eq!(
            session.adapter.backend().write_count(StorageKey::Document),
            1
        );
        // Flush consumed the slot
        assert!(!session.flush().unwrap());
    }

    #[test]
    fn test_cancel_pending_save_drops_write() {
        let mut session = ready_session();
        session.toggle_profile_image();

        assert!(session.cancel_pending_save());
        fire(&mut session);
        assert_eq!(
            session.adapter.backend().write_count(StorageKey::Document),
            0
        );
    }

    #[test]
    fn test_write_failure_keeps_edits_in_memory() {
        let mut session = ready_session();
        session.update_personal_info(PersonalInfoPatch {
            full_name: Some("Still Here".to_string()),
            ..Default::default()
        });

        session.adapter.backend().set_simulate_write_error(true);
        let later = Instant::now() + Duration::from_secs(5);
        assert!(session.tick_at(later).is_err());

        assert_eq!(session.document().personal_info.full_name, "Still Here");
    }

    #[test]
    fn test_snapshot_identity_changes_on_mutation() {
        let mut session = ready_session();
        let before = session.document();

        session.toggle_profile_image();
        let after = session.document();

        assert!(!Rc::ptr_eq(&before, &after));
        // The earlier snapshot is untouched
        assert!(!before.show_profile_image);
        assert!(after.show_profile_image);
    }

    #[test]
    fn test_settings_write_through_is_not_debounced() {
        let mut session = ready_session();
        session.set_template(TemplateName::Bold);
        session.set_accent_color("#dc2626".to_string());

        assert_eq!(
            session.adapter.backend().write_count(StorageKey::Settings),
            2
        );
        assert!(!session.has_pending_save());

        let raw = session
            .adapter
            .backend()
            .read(StorageKey::Settings)
            .unwrap()
            .unwrap();
        assert!(raw.contains("\"bold\""));
        assert!(raw.contains("#dc2626"));
    }

    #[test]
    fn test_settings_write_failure_keeps_value_live() {
        let mut session = ready_session();
        session.adapter.backend().set_simulate_write_error(true);

        session.set_template(TemplateName::Minimal);
        assert_eq!(session.settings().template, TemplateName::Minimal);
    }

    #[test]
    fn test_profile_image_independent_of_toggle() {
        let mut session = ready_session();

        session.set_profile_image("data:image/png;base64,AA".to_string());
        assert!(!session.document().show_profile_image);

        session.toggle_profile_image();
        assert!(session.document().show_profile_image);

        session.set_profile_image(String::new());
        // Display stays on with no image stored
        assert!(session.document().show_profile_image);
        assert!(session.document().profile_image.is_empty());
    }

    #[test]
    fn test_zoom_and_section_are_ephemeral() {
        let mut session = ready_session();
        session.set_zoom(140);
        session.set_active_section(EditorSection::Skills);

        assert_eq!(session.zoom(), 140);
        assert_eq!(session.active_section(), EditorSection::Skills);
        // No persistence scheduled or written, to any entry
        assert!(!session.has_pending_save());
        for key in StorageKey::ALL {
            assert_eq!(session.adapter.backend().write_count(key), 0);
        }
    }

    #[test]
    fn test_render_active_follows_settings() {
        let mut session = ready_session();
        session.set_template(TemplateName::Minimal);
        session.set_accent_color("#be185d".to_string());

        let rendered = session.render_active();
        assert_eq!(rendered.template, TemplateName::Minimal);
        assert!(rendered.html.contains("#be185d"));
        assert!(rendered.html.contains("Jordan Mitchell"));
    }
}
