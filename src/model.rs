//! # Domain Model: Resume Document and Patches
//!
//! The core data structures for resumepad: [`ResumeDocument`] and its
//! sub-entities, the closed [`TemplateName`] enumeration, persisted
//! [`Settings`], and one patch type per repeatable entity kind.
//!
//! ## Wire format
//!
//! Every type serializes with camelCase field names so that the stored JSON
//! matches the format the storage entries have always used
//! (`personalInfo`, `startDate`, `showProfileImage`, ...). Fields added in
//! later schema versions carry `#[serde(default)]` so that older stored
//! shapes keep loading; unknown extra fields are ignored.
//!
//! ## Patch semantics
//!
//! Each `*Patch` type is the entity's field set marked all-optional. Merges
//! are shallow: a `Some` field overwrites, a `None` field retains the prior
//! value. Sequences (`highlights`, `items`) are replaced wholesale: a patch
//! carries the complete new sequence, never a delta. Per-element edits go
//! through the session's highlight operations instead.
//!
//! Entity ids are assigned at creation by [`crate::ident::create_id`] and
//! are never reassigned; they are the sole correlation key for updates and
//! removals and are deliberately absent from the patch types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub summary: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Experience {
    /// A blank entry with the given id, as appended by `add_experience`.
    pub fn new(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    #[serde(default)]
    pub institution: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub field: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub gpa: String,
}

impl Education {
    pub fn new(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillGroup {
    pub id: String,
    #[serde(default)]
    pub category: String,
    /// Free-text skill tokens. Insertion order is preserved and duplicates
    /// are not deduplicated.
    #[serde(default)]
    pub items: Vec<String>,
}

impl SkillGroup {
    pub fn new(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

impl Project {
    pub fn new(id: String) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }
}

/// The single canonical document instance. All five top-level sections are
/// always present; a freshly loaded document is never missing a field.
///
/// `profile_image` is a string-encoded payload (typically a base64 data
/// URI). It is persisted in its own storage entry, not in the document
/// entry, and is independent of the `show_profile_image` display toggle:
/// an image may be stored while display is off, and display may be on with
/// no image stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    #[serde(default)]
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub profile_image: String,
    #[serde(default)]
    pub show_profile_image: bool,
}

/// The closed set of visual templates. Adding a fifth means extending this
/// enum and supplying a renderer that satisfies the contract in
/// [`crate::render`]; this is not a plugin system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateName {
    Executive,
    Modern,
    Minimal,
    Bold,
}

impl TemplateName {
    pub const ALL: [TemplateName; 4] = [
        TemplateName::Executive,
        TemplateName::Modern,
        TemplateName::Minimal,
        TemplateName::Bold,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::Executive => "executive",
            TemplateName::Modern => "modern",
            TemplateName::Minimal => "minimal",
            TemplateName::Bold => "bold",
        }
    }
}

impl Default for TemplateName {
    fn default() -> Self {
        TemplateName::Executive
    }
}

/// Which editor panel section is open. Ephemeral UI state, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditorSection {
    Personal,
    Experience,
    Education,
    Skills,
    Projects,
}

impl Default for EditorSection {
    fn default() -> Self {
        EditorSection::Personal
    }
}

/// Persisted presentation settings: the active template and accent color.
/// Stored in their own entry, written through on change rather than
/// debounced (settings changes are discrete, not keystroke-driven).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub template: TemplateName,
    #[serde(default = "default_accent")]
    pub accent_color: String,
}

fn default_accent() -> String {
    crate::defaults::DEFAULT_ACCENT.to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            template: TemplateName::default(),
            accent_color: default_accent(),
        }
    }
}

// --- Patch types ---

#[derive(Debug, Clone, Default)]
pub struct PersonalInfoPatch {
    pub full_name: Option<String>,
    pub title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
}

impl PersonalInfoPatch {
    pub fn apply(self, info: &mut PersonalInfo) {
        merge(&mut info.full_name, self.full_name);
        merge(&mut info.title, self.title);
        merge(&mut info.email, self.email);
        merge(&mut info.phone, self.phone);
        merge(&mut info.location, self.location);
        merge(&mut info.website, self.website);
        merge(&mut info.summary, self.summary);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExperiencePatch {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub current: Option<bool>,
    pub description: Option<String>,
    /// Replaces the whole sequence when present (no deep merge).
    pub highlights: Option<Vec<String>>,
}

impl ExperiencePatch {
    pub fn apply(self, exp: &mut Experience) {
        merge(&mut exp.company, self.company);
        merge(&mut exp.position, self.position);
        merge(&mut exp.start_date, self.start_date);
        merge(&mut exp.end_date, self.end_date);
        merge(&mut exp.current, self.current);
        merge(&mut exp.description, self.description);
        merge(&mut exp.highlights, self.highlights);
    }
}

#[derive(Debug, Clone, Default)]
pub struct EducationPatch {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub gpa: Option<String>,
}

impl EducationPatch {
    pub fn apply(self, edu: &mut Education) {
        merge(&mut edu.institution, self.institution);
        merge(&mut edu.degree, self.degree);
        merge(&mut edu.field, self.field);
        merge(&mut edu.start_date, self.start_date);
        merge(&mut edu.end_date, self.end_date);
        merge(&mut edu.gpa, self.gpa);
    }
}

#[derive(Debug, Clone, Default)]
pub struct SkillGroupPatch {
    pub category: Option<String>,
    /// Replaces the whole sequence when present (no deep merge).
    pub items: Option<Vec<String>>,
}

impl SkillGroupPatch {
    pub fn apply(self, group: &mut SkillGroup) {
        merge(&mut group.category, self.category);
        merge(&mut group.items, self.items);
    }
}

#[derive(Debug, Clone, Default)]
pub struct ProjectPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    /// Replaces the whole sequence when present (no deep merge).
    pub highlights: Option<Vec<String>>,
}

impl ProjectPatch {
    pub fn apply(self, proj: &mut Project) {
        merge(&mut proj.name, self.name);
        merge(&mut proj.description, self.description);
        merge(&mut proj.url, self.url);
        merge(&mut proj.highlights, self.highlights);
    }
}

fn merge<T>(slot: &mut T, value: Option<T>) {
    if let Some(v) = value {
        *slot = v;
    }
}
