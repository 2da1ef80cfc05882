//! # Persistence Adapter
//!
//! Save/restore of (document minus image, image, settings) as the three
//! independent entries described in [`super`]. This is the only module
//! that knows the stored schema; the session calls it and nothing else
//! does.
//!
//! ## Recovery policy
//!
//! `load` never fails. Empty storage (first run), unparseable JSON, or a
//! backend read error all fall back silently to the built-in seed document
//! and default settings; a zero-account local tool prefers silent
//! defaulting over surfaced errors.
//!
//! ## Schema tolerance
//!
//! Stored document JSON written by an older version may be missing fields
//! that exist in the current model. Any missing top-level field is
//! back-filled from the seed document (so `showProfileImage` becomes
//! `false`, `profileImage` stays empty, and sections come back as the seed
//! sections, matching what the original shapes always contained). Unknown
//! extra fields are ignored. Loading an old shape twice yields the same
//! result.

use serde::{Deserialize, Serialize};

use super::backend::{StorageBackend, StorageKey};
use crate::defaults;
use crate::error::Result;
use crate::model::{
    Education, Experience, PersonalInfo, Project, ResumeDocument, Settings, SkillGroup,
};

/// What a `load` produced: always a complete document and settings,
/// regardless of what storage held.
#[derive(Debug, Clone)]
pub struct LoadedState {
    pub document: ResumeDocument,
    pub settings: Settings,
}

/// The document entry's wire shape: the document with `profileImage`
/// excluded. The image lives in its own entry so keystroke-driven
/// autosaves never rewrite a large payload.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DocumentEntry<'a> {
    personal_info: &'a PersonalInfo,
    experience: &'a [Experience],
    education: &'a [Education],
    skills: &'a [SkillGroup],
    projects: &'a [Project],
    show_profile_image: bool,
}

/// Deserialization helper tolerating older stored shapes: every field is
/// optional, and missing ones back-fill from the seed document.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredDocument {
    #[serde(default)]
    personal_info: Option<PersonalInfo>,
    #[serde(default)]
    experience: Option<Vec<Experience>>,
    #[serde(default)]
    education: Option<Vec<Education>>,
    #[serde(default)]
    skills: Option<Vec<SkillGroup>>,
    #[serde(default)]
    projects: Option<Vec<Project>>,
    #[serde(default)]
    show_profile_image: Option<bool>,
}

impl StoredDocument {
    fn into_document(self, seed: ResumeDocument) -> ResumeDocument {
        ResumeDocument {
            personal_info: self.personal_info.unwrap_or(seed.personal_info),
            experience: self.experience.unwrap_or(seed.experience),
            education: self.education.unwrap_or(seed.education),
            skills: self.skills.unwrap_or(seed.skills),
            projects: self.projects.unwrap_or(seed.projects),
            profile_image: String::new(),
            show_profile_image: self.show_profile_image.unwrap_or(seed.show_profile_image),
        }
    }
}

pub struct PersistenceAdapter<B: StorageBackend> {
    backend: B,
}

impl<B: StorageBackend> PersistenceAdapter<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Restore document and settings from storage. Infallible: any missing
    /// or corrupted entry falls back to its built-in default. The image
    /// entry is merged in independently of whether the document entry
    /// parsed.
    pub fn load(&self) -> LoadedState {
        let mut document = match self.backend.read(StorageKey::Document) {
            Ok(Some(raw)) => match serde_json::from_str::<StoredDocument>(&raw) {
                Ok(stored) => stored.into_document(defaults::seed_document()),
                Err(_) => defaults::seed_document(),
            },
            _ => defaults::seed_document(),
        };

        document.profile_image = self
            .backend
            .read(StorageKey::ProfileImage)
            .ok()
            .flatten()
            .unwrap_or_default();

        let settings = match self.backend.read(StorageKey::Settings) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_default(),
            _ => Settings::default(),
        };

        LoadedState { document, settings }
    }

    /// Write the document entry (image excluded) and the image entry. The
    /// two writes are independent: a quota failure on one never corrupts
    /// the other. An empty image removes the entry rather than storing an
    /// orphaned empty value.
    pub fn save_document(&self, document: &ResumeDocument) -> Result<()> {
        let entry = DocumentEntry {
            personal_info: &document.personal_info,
            experience: &document.experience,
            education: &document.education,
            skills: &document.skills,
            projects: &document.projects,
            show_profile_image: document.show_profile_image,
        };
        let json = serde_json::to_string(&entry)?;

        let doc_result = self.backend.write(StorageKey::Document, &json);

        let image_result = if document.profile_image.is_empty() {
            self.backend.remove(StorageKey::ProfileImage)
        } else {
            self.backend
                .write(StorageKey::ProfileImage, &document.profile_image)
        };

        doc_result.and(image_result)
    }

    /// Write the settings entry.
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let json = serde_json::to_string(settings)?;
        self.backend.write(StorageKey::Settings, &json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TemplateName;
    use crate::store::mem_backend::MemBackend;

    fn adapter() -> PersistenceAdapter<MemBackend> {
        PersistenceAdapter::new(MemBackend::new())
    }

    #[test]
    fn test_first_run_loads_seed() {
        let state = adapter().load();
        assert_eq!(state.document, defaults::seed_document());
        assert_eq!(state.settings, Settings::default());
    }

    #[test]
    fn test_corrupted_document_falls_back_to_seed() {
        let a = adapter();
        a.backend().preload(StorageKey::Document, "{not json");
        a.backend().preload(StorageKey::Settings, "also not json");

        let state = a.load();
        assert_eq!(state.document, defaults::seed_document());
        assert_eq!(state.settings, Settings::default());
    }

    #[test]
    fn test_image_merged_even_when_document_entry_missing() {
        let a = adapter();
        a.backend()
            .preload(StorageKey::ProfileImage, "data:image/png;base64,AA");

        let state = a.load();
        assert_eq!(state.document.profile_image, "data:image/png;base64,AA");
        // Rest of the document is the seed
        assert_eq!(state.document.personal_info.full_name, "Jordan Mitchell");
    }

    #[test]
    fn test_document_entry_excludes_image() {
        let a = adapter();
        let mut doc = defaults::seed_document();
        doc.profile_image = "data:image/png;base64,AA".to_string();

        a.save_document(&doc).unwrap();

        let raw = a.backend().read(StorageKey::Document).unwrap().unwrap();
        assert!(!raw.contains("profileImage"));
        assert!(a.backend().contains(StorageKey::ProfileImage));
    }

    #[test]
    fn test_empty_image_removes_entry() {
        let a = adapter();
        a.backend().preload(StorageKey::ProfileImage, "stale");

        a.save_document(&defaults::seed_document()).unwrap();
        assert!(!a.backend().contains(StorageKey::ProfileImage));
    }

    #[test]
    fn test_roundtrip() {
        let a = adapter();
        let mut doc = defaults::seed_document();
        doc.personal_info.full_name = "Robin Chen".to_string();
        doc.experience[0].highlights.push("One more thing".to_string());
        doc.profile_image = "data:image/png;base64,AA".to_string();
        doc.show_profile_image = true;
        let settings = Settings {
            template: TemplateName::Bold,
            accent_color: "#dc2626".to_string(),
        };

        a.save_document(&doc).unwrap();
        a.save_settings(&settings).unwrap();

        let state = a.load();
        assert_eq!(state.document, doc);
        assert_eq!(state.settings, settings);
    }

    #[test]
    fn test_legacy_shape_backfills_and_is_idempotent() {
        let a = adapter();
        // An old stored shape: no showProfileImage, no projects yet.
        a.backend().preload(
            StorageKey::Document,
            r#"{
                "personalInfo": {"fullName": "Old Timer"},
                "experience": [],
                "education": [],
                "skills": []
            }"#,
        );

        let first = a.load();
        assert_eq!(first.document.personal_info.full_name, "Old Timer");
        assert!(!first.document.show_profile_image);
        assert!(first.document.profile_image.is_empty());
        // Missing sections back-fill from the seed
        assert_eq!(first.document.projects, defaults::seed_document().projects);
        // Present-but-empty sections stay empty
        assert!(first.document.experience.is_empty());

        let second = a.load();
        assert_eq!(second.document, first.document);
    }

    #[test]
    fn test_unknown_stored_fields_are_ignored() {
        let a = adapter();
        a.backend().preload(
            StorageKey::Document,
            r#"{"personalInfo": {"fullName": "X"}, "futureFeature": {"a": 1}}"#,
        );
        let state = a.load();
        assert_eq!(state.document.personal_info.full_name, "X");
    }

    #[test]
    fn test_write_failure_surfaces_but_leaves_prior_entries() {
        let a = adapter();
        a.save_settings(&Settings::default()).unwrap();

        a.backend().set_simulate_write_error(true);
        assert!(a.save_document(&defaults::seed_document()).is_err());
        assert!(a
            .save_settings(&Settings {
                template: TemplateName::Modern,
                accent_color: "#059669".to_string(),
            })
            .is_err());

        a.backend().set_simulate_write_error(false);
        let state = a.load();
        assert_eq!(state.settings, Settings::default());
    }
}
