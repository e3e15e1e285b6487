//! Query engine and mutation pipeline for the CineDB catalog.
//!
//! Two facades over a shared [`CatalogStore`]:
//! - [`CatalogQueries`]: read-only views — predicate filtering, ranked
//!   top-N extraction, scalar aggregates. Queries never fail; an empty
//!   result is a valid outcome.
//! - [`CatalogMutations`]: create / partial-update / delete, each one
//!   read-modify-write-persist sequence under the store's exclusive lock.
//!
//! Both facades are stateless: they hold only an `Arc<CatalogStore>`, so
//! clones are cheap and every instance sees the same data.
//!
//! [`CatalogStore`]: cinedb_store::CatalogStore

pub mod mutation;
pub mod query;

pub use mutation::{CatalogMutations, DeleteSelector, MutationOutcome, MutationStatus};
pub use query::{CatalogQueries, RankKey, SearchFilter, DEFAULT_TOP_N};
