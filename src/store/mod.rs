//! # Storage Layer
//!
//! Durable client-side storage for the resume document, its profile image,
//! and the presentation settings, as three independent logical entries
//! rather than one blob:
//!
//! 1. **Document entry**: the JSON document with `profileImage` excluded.
//! 2. **Image entry**: the raw image payload string, present only when an
//!    image is set.
//! 3. **Settings entry**: `{template, accentColor}`.
//!
//! Splitting keeps keystroke-driven autosaves from rewriting a large image
//! payload on every fire and keeps any single entry under backends'
//! per-entry size limits.
//!
//! The split between "how" and "what" mirrors the rest of the crate:
//! [`backend::StorageBackend`] is raw keyed string I/O (filesystem in
//! production via [`fs_backend::FsBackend`], memory in tests via
//! [`mem_backend::MemBackend`]), while [`persist::PersistenceAdapter`]
//! owns the schema: serialization, back-fill of older stored shapes, and
//! the fall-back-to-seed recovery policy.
//!
//! ## Storage layout (FsBackend)
//!
//! ```text
//! <root>/
//! ├── resume.json         # Document entry
//! ├── profile-image.txt   # Image entry (absent when no image is set)
//! └── settings.json       # Settings entry
//! ```

pub mod backend;
pub mod fs_backend;
pub mod mem_backend;
pub mod persist;

pub use backend::{StorageBackend, StorageKey};
pub use fs_backend::FsBackend;
pub use mem_backend::MemBackend;
pub use persist::{LoadedState, PersistenceAdapter};
