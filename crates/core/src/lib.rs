//! Core types for the CineDB catalog.
//!
//! This crate defines the strictly-typed record model shared by every other
//! crate in the workspace:
//! - [`Movie`]: one catalog record with the fixed field set
//! - [`MovieDraft`] / [`MoviePatch`]: create and partial-update payloads
//! - [`CatalogError`] / [`Result`]: the error taxonomy

pub mod error;
pub mod record;

pub use error::{CatalogError, Result};
pub use record::{Movie, MovieDraft, MoviePatch};
