//! Record Store for the CineDB catalog.
//!
//! Single source of truth for the live collection: one JSON document on
//! disk, loaded and normalized once at open, held in memory behind a
//! read-write lock for the process lifetime, and rewritten in full on every
//! mutation.
//!
//! # Concurrency
//!
//! Readers take the shared lock and may run concurrently. Mutations take the
//! exclusive lock for the whole read-modify-write-persist sequence, so they
//! serialize against each other and appear atomic to readers.

pub mod config;
pub mod store;

pub use config::{LoadPolicy, StoreConfig};
pub use store::CatalogStore;
