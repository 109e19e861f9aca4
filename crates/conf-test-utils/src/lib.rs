//! Shared test utilities for the folder configuration workspace.
//!
//! Dev-dependency only; never published.
//!
//! # Modules
//!
//! - [`schemas`]: fixed fake schema registries
//! - [`folder`]: [`TestFolder`](folder::TestFolder) builder for on-disk folder layouts

pub mod folder;
pub mod schemas;
