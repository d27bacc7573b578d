//! Version switcher navigation for documentation sites
//!
//! This crate builds the version-selector dropdown a documentation site shows
//! in its navbar: the collapsed label, the link target, and one entry per
//! documentation version, each linking to the same page in that version when
//! it exists there.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │    Site     │────▶│   Navbar    │◀────│    Prefs    │
//! │ (versions)  │     │ (dropdown)  │     │ (selection) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!        │                   │
//!        ▼                   ▼
//! ┌─────────────┐     ┌─────────────┐
//! │   Config    │     │  Renderer   │
//! │ (instances) │     │   (HTML)    │
//! └─────────────┘     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`]: site configuration and data directory resolution
//! - [`site`]: version/document data model and the docs context provider
//! - [`prefs`]: preferred-version persistence (in-memory and SQLite)
//! - [`navbar`]: navbar item model, dropdown composition, HTML rendering

pub mod config;
pub mod navbar;
pub mod prefs;
pub mod site;
