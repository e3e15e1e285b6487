//! CineDB: an embedded movie catalog engine.
//!
//! A fixed-schema collection of records held in memory, backed by one flat
//! JSON document, exposing filtered queries, ranked top-N views, scalar
//! aggregates, and create/update/delete mutations. The network, query
//! language, and conversational front ends are external collaborators; they
//! call through [`Catalog`].
//!
//! # Example
//!
//! ```ignore
//! use cinedb::{Catalog, SearchFilter, StoreConfig};
//!
//! let catalog = Catalog::open(StoreConfig::at("catalog.json"))?;
//!
//! let hits = catalog.search(&SearchFilter::new().year(2008).min_rating(8.0), None);
//! let best = catalog.top_rated(Some(5));
//! ```

pub mod types;

pub use types::*;

use std::path::PathBuf;
use std::sync::Arc;

pub use cinedb_core::{Movie, MovieDraft, MoviePatch, Result};
pub use cinedb_engine::{CatalogMutations, CatalogQueries, DeleteSelector, MutationOutcome, RankKey, SearchFilter};
pub use cinedb_store::{CatalogStore, StoreConfig};

/// Handle combining the record store, query engine, and mutation pipeline.
///
/// `Clone` is cheap: every clone shares the same store, so mutations made
/// through one handle are visible through all of them.
#[derive(Debug, Clone)]
pub struct Catalog {
    store: Arc<CatalogStore>,
    queries: CatalogQueries,
    mutations: CatalogMutations,
}

impl Catalog {
    /// Open the catalog: load and normalize the backing document once.
    pub fn open(config: StoreConfig) -> Result<Self> {
        let store = Arc::new(CatalogStore::open(config)?);
        Ok(Self {
            queries: CatalogQueries::new(store.clone()),
            mutations: CatalogMutations::new(store.clone()),
            store,
        })
    }

    /// Open with the default load policy at the given path.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        Self::open(StoreConfig::at(path))
    }

    /// Shared store handle, for callers composing their own facades.
    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// True when the catalog holds no records.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Id the next create would assign.
    pub fn next_id(&self) -> u64 {
        self.store.next_id()
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Full collection in store order, optionally sliced by offset then limit.
    pub fn movies(&self, offset: Option<usize>, limit: Option<usize>) -> Vec<Movie> {
        self.queries.all(offset, limit)
    }

    /// Single record by id.
    pub fn movie(&self, id: u64) -> Option<Movie> {
        self.queries.get(id)
    }

    /// Single record by case-insensitive exact title.
    pub fn movie_by_title(&self, title: &str) -> Option<Movie> {
        self.queries.get_by_title(title)
    }

    /// AND-combined predicate search.
    pub fn search(&self, filter: &SearchFilter, limit: Option<usize>) -> Vec<Movie> {
        self.queries.search(filter, limit)
    }

    /// Ranked top-N under an arbitrary key.
    pub fn top_n(&self, key: RankKey, limit: Option<usize>) -> Vec<Movie> {
        self.queries.top_n(key, limit)
    }

    pub fn top_rated(&self, limit: Option<usize>) -> Vec<Movie> {
        self.queries.top_rated(limit)
    }

    pub fn top_revenue(&self, limit: Option<usize>) -> Vec<Movie> {
        self.queries.top_revenue(limit)
    }

    pub fn latest(&self, limit: Option<usize>) -> Vec<Movie> {
        self.queries.latest(limit)
    }

    pub fn earliest(&self, limit: Option<usize>) -> Vec<Movie> {
        self.queries.earliest(limit)
    }

    pub fn longest(&self, limit: Option<usize>) -> Vec<Movie> {
        self.queries.longest(limit)
    }

    pub fn most_voted(&self, limit: Option<usize>) -> Vec<Movie> {
        self.queries.most_voted(limit)
    }

    pub fn by_director(&self, director: &str) -> Vec<Movie> {
        self.queries.by_director(director)
    }

    pub fn by_actor(&self, actor: &str) -> Vec<Movie> {
        self.queries.by_actor(actor)
    }

    pub fn by_year(&self, year: i32) -> Vec<Movie> {
        self.queries.by_year(year)
    }

    pub fn by_genre(&self, genre: &str) -> Vec<Movie> {
        self.queries.by_genre(genre)
    }

    pub fn average_rating_by_genre(&self, genre: &str) -> f64 {
        self.queries.average_rating_by_genre(genre)
    }

    pub fn count_by_director(&self, director: &str) -> usize {
        self.queries.count_by_director(director)
    }

    pub fn revenue_by_year(&self, year: i32) -> f64 {
        self.queries.revenue_by_year(year)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Create a record; the store assigns its id.
    pub fn create(&self, draft: MovieDraft) -> Result<MutationOutcome> {
        self.mutations.create(draft)
    }

    /// Merge the patch's supplied fields into the record with the given id.
    pub fn update(&self, id: u64, patch: &MoviePatch) -> Result<MutationOutcome> {
        self.mutations.update(id, patch)
    }

    /// Delete by selector (id or title; title wins when both are given).
    pub fn delete(&self, selector: &DeleteSelector) -> Result<MutationOutcome> {
        self.mutations.delete(selector)
    }
}
