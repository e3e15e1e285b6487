//! Create / partial-update / delete against the shared store.
//!
//! Every mutation holds the store's exclusive lock for the whole
//! read-modify-write-persist sequence. Expected conditions (target not
//! found, missing identifier) are outcome variants, never errors; the only
//! hard error is persistence I/O failure, which means the in-memory change
//! is not durable.

use std::sync::Arc;

use tracing::debug;

use cinedb_core::{Movie, MovieDraft, MoviePatch, Result};
use cinedb_store::CatalogStore;

/// How a mutation concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationStatus {
    /// The mutation ran and was persisted.
    Applied,
    /// The target record does not exist.
    NotFound,
    /// Delete was called with neither an id nor a title.
    MissingIdentifier,
}

/// Outcome of a mutation: the affected record (if any), a status, and a
/// human-readable message.
#[derive(Debug, Clone, PartialEq)]
pub struct MutationOutcome {
    /// Created, updated, or removed record; `None` unless the mutation
    /// applied.
    pub movie: Option<Movie>,
    pub status: MutationStatus,
    pub message: String,
}

impl MutationOutcome {
    fn applied(movie: Movie, message: impl Into<String>) -> Self {
        Self {
            movie: Some(movie),
            status: MutationStatus::Applied,
            message: message.into(),
        }
    }

    fn not_found(message: impl Into<String>) -> Self {
        Self {
            movie: None,
            status: MutationStatus::NotFound,
            message: message.into(),
        }
    }

    fn missing_identifier() -> Self {
        Self {
            movie: None,
            status: MutationStatus::MissingIdentifier,
            message: "either id or title must be provided".to_string(),
        }
    }

    /// True when the mutation applied.
    pub fn succeeded(&self) -> bool {
        self.status == MutationStatus::Applied
    }
}

/// Identifies the record a delete targets: id, title, or both.
///
/// When both are given the title wins, matching the historical front end.
/// Title matching is case-insensitive and exact; with duplicate titles only
/// the first match in store order is removed.
#[derive(Debug, Clone, Default)]
pub struct DeleteSelector {
    pub id: Option<u64>,
    pub title: Option<String>,
}

impl DeleteSelector {
    pub fn by_id(id: u64) -> Self {
        Self {
            id: Some(id),
            title: None,
        }
    }

    pub fn by_title(title: impl Into<String>) -> Self {
        Self {
            id: None,
            title: Some(title.into()),
        }
    }
}

/// Mutation facade over a shared [`CatalogStore`].
///
/// Stateless: holds only the store reference; `Clone` is cheap and all
/// instances serialize through the same lock.
#[derive(Debug, Clone)]
pub struct CatalogMutations {
    store: Arc<CatalogStore>,
}

impl CatalogMutations {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Assign the next id, append the record, persist.
    ///
    /// The id is recomputed from the live collection under the write lock,
    /// so deleting the highest-id record releases its id to the next create.
    pub fn create(&self, draft: MovieDraft) -> Result<MutationOutcome> {
        let mut movies = self.store.write();
        let id = CatalogStore::next_id_in(&movies);
        let movie = draft.into_movie(id);
        movies.push(movie.clone());
        self.store.persist(&movies)?;
        debug!(id, "movie created");
        Ok(MutationOutcome::applied(movie, "movie created"))
    }

    /// Merge the patch's supplied fields into the record with the given id.
    pub fn update(&self, id: u64, patch: &MoviePatch) -> Result<MutationOutcome> {
        let mut movies = self.store.write();
        let Some(pos) = movies.iter().position(|m| m.id == id) else {
            return Ok(MutationOutcome::not_found(format!("movie {id} not found")));
        };
        patch.apply(&mut movies[pos]);
        let updated = movies[pos].clone();
        self.store.persist(&movies)?;
        debug!(id, "movie updated");
        Ok(MutationOutcome::applied(updated, "movie updated"))
    }

    /// Remove the first record matching the selector, persist, and return it.
    pub fn delete(&self, selector: &DeleteSelector) -> Result<MutationOutcome> {
        let mut movies = self.store.write();

        let pos = if let Some(title) = selector.title.as_deref().filter(|t| !t.is_empty()) {
            movies.iter().position(|m| m.title_equals(title))
        } else if let Some(id) = selector.id {
            movies.iter().position(|m| m.id == id)
        } else {
            return Ok(MutationOutcome::missing_identifier());
        };

        let Some(pos) = pos else {
            return Ok(MutationOutcome::not_found("movie not found"));
        };

        let removed = movies.remove(pos);
        self.store.persist(&movies)?;
        debug!(id = removed.id, "movie deleted");
        Ok(MutationOutcome::applied(removed, "movie deleted"))
    }
}
