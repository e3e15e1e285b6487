//! Public types for the CineDB API.
//!
//! This module re-exports types from internal crates with a clean public interface.

// ============================================================================
// Public API types - these are what users should use
// ============================================================================

// Record model and payloads
pub use cinedb_core::{Movie, MovieDraft, MoviePatch};

// Error handling
pub use cinedb_core::{CatalogError, Result};

// Store configuration
pub use cinedb_store::{LoadPolicy, StoreConfig};

// Query types
pub use cinedb_engine::{RankKey, SearchFilter, DEFAULT_TOP_N};

// Mutation outcomes
pub use cinedb_engine::{DeleteSelector, MutationOutcome, MutationStatus};
