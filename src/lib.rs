//! # ResumePad Architecture
//!
//! ResumePad is a **host-agnostic resume editing engine**. It owns the
//! document model, the persistence layer, the debounced save machinery,
//! and the template renderers; the hosting shell (a desktop webview, a
//! browser bridge, a CLI) only drives it and displays what it returns.
//!
//! That distinction shapes the whole crate and should guide all
//! development.
//!
//! ## The Layer Stack
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Host Shell (not in this crate)                             │
//! │  - Displays rendered HTML, drives edits, owns the clock     │
//! │  - The ONLY place that knows about windows/webviews/timers  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Layer (session/)                                   │
//! │  - One editing session: document, settings, view state      │
//! │  - Typed mutations, hydration, debounced persistence        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                ┌─────────────┴─────────────┐
//!                ▼                           ▼
//! ┌───────────────────────────┐ ┌───────────────────────────────┐
//! │  Render Layer (render/)   │ │  Storage Layer (store/)       │
//! │  - Pure template fns      │ │  - Abstract StorageBackend    │
//! │  - Document + accent in,  │ │  - FsBackend (production),    │
//! │    HTML string out        │ │    MemBackend (testing)       │
//! └───────────────────────────┘ └───────────────────────────────┘
//! ```
//!
//! ## Key Principle: No Clock or I/O Assumptions in Core
//!
//! The session never sleeps, spawns, or schedules. Debounce is a passive
//! deadline ([`debounce::SaveTimer`]) that the host polls via
//! [`session::ResumeSession::tick`]. Renderers are pure functions.
//! Storage goes through the [`store::StorageBackend`] trait. This means
//! the same core can serve a webview bridge, a test harness, or a
//! headless exporter without modification.
//!
//! ## Testing Strategy
//!
//! 1. **Session** (`session/`): the lion's share of testing, against
//!    `MemBackend` with synthetic instants fed to `tick_at`.
//! 2. **Storage** (`store/`): `FsBackend` against `tempfile` temp dirs;
//!    persistence semantics against `MemBackend` write counts.
//! 3. **Render** (`render/`): string-level assertions on the produced
//!    markup, shared contract checks across all four templates.
//!
//! ## Module Overview
//!
//! - [`session`]: The editing session, entry point for all operations
//! - [`model`]: Core data types (`ResumeDocument`, sections, patches)
//! - [`store`]: Storage abstraction, backends, persistence adapter
//! - [`render`]: The four resume templates and shared formatting
//! - [`export`]: Single-page print/export pipeline
//! - [`debounce`]: Passive save timer
//! - [`defaults`]: Seed document and preset accent colors
//! - [`ident`]: Entry id generation
//! - [`error`]: Error types

pub mod debounce;
pub mod defaults;
pub mod error;
pub mod export;
pub mod ident;
pub mod model;
pub mod render;
pub mod session;
pub mod store;
