//! The catalog store: load, hold, persist.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info, warn};

use cinedb_core::{CatalogError, Movie, Result};

use crate::config::{LoadPolicy, StoreConfig};

/// Owner of the live collection and its backing document.
///
/// The collection keeps document order (insertion order, not id order); that
/// order is the tiebreaker every stable sort and first-match scan relies on.
#[derive(Debug)]
pub struct CatalogStore {
    config: StoreConfig,
    movies: RwLock<Vec<Movie>>,
}

impl CatalogStore {
    /// Open the store: parse and normalize the backing document once.
    ///
    /// A missing document yields an empty collection. A malformed document
    /// yields an empty collection under [`LoadPolicy::FailOpen`] (logged
    /// distinctly from the missing case) or an error under
    /// [`LoadPolicy::Strict`].
    pub fn open(config: StoreConfig) -> Result<Self> {
        let movies = load(&config)?;
        info!(path = %config.path.display(), count = movies.len(), "catalog opened");
        Ok(Self {
            config,
            movies: RwLock::new(movies),
        })
    }

    /// Path of the backing document.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    /// Shared access to the collection for the duration of a query.
    pub fn read(&self) -> RwLockReadGuard<'_, Vec<Movie>> {
        self.movies.read()
    }

    /// Exclusive access for a mutation. The caller holds this guard across
    /// the whole read-modify-write sequence and calls [`persist`] before
    /// releasing it, so concurrent mutations serialize and readers never
    /// observe a half-applied change.
    ///
    /// [`persist`]: CatalogStore::persist
    pub fn write(&self) -> RwLockWriteGuard<'_, Vec<Movie>> {
        self.movies.write()
    }

    /// Clone of the current collection, taken under the shared lock.
    pub fn snapshot(&self) -> Vec<Movie> {
        self.movies.read().clone()
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.movies.read().len()
    }

    /// True when the collection holds no records.
    pub fn is_empty(&self) -> bool {
        self.movies.read().is_empty()
    }

    /// Next id to assign: `max(id) + 1`, or 1 on an empty collection.
    ///
    /// Recomputed fresh on every create, never cached. Deleting the
    /// highest-id record therefore releases its id for the next create;
    /// that reuse is the documented historical behavior.
    pub fn next_id(&self) -> u64 {
        Self::next_id_in(&self.movies.read())
    }

    /// [`next_id`] over a collection the caller already holds a lock on.
    ///
    /// [`next_id`]: CatalogStore::next_id
    pub fn next_id_in(movies: &[Movie]) -> u64 {
        movies.iter().map(|m| m.id).max().map_or(1, |max| max + 1)
    }

    /// Serialize the full collection back to the backing document.
    ///
    /// Whole-document overwrite in place: no temp file, no rename, no
    /// write-ahead log. A crash mid-write can corrupt the document; that is
    /// accepted for this store's scope and pinned by the test suite rather
    /// than papered over. I/O failure here is the one hard error a mutation
    /// can surface.
    pub fn persist(&self, movies: &[Movie]) -> Result<()> {
        let body = serde_json::to_vec_pretty(movies)?;
        fs::write(&self.config.path, body)
            .map_err(|source| CatalogError::io(&self.config.path, source))?;
        debug!(count = movies.len(), "catalog persisted");
        Ok(())
    }
}

/// Parse the backing document according to the configured load policy.
fn load(config: &StoreConfig) -> Result<Vec<Movie>> {
    let raw = match fs::read(&config.path) {
        Ok(raw) => raw,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path = %config.path.display(), "backing document missing, starting empty");
            return Ok(Vec::new());
        }
        Err(err) => match config.load_policy {
            LoadPolicy::FailOpen => {
                warn!(path = %config.path.display(), error = %err,
                      "backing document unreadable, starting empty");
                return Ok(Vec::new());
            }
            LoadPolicy::Strict => return Err(CatalogError::io(&config.path, err)),
        },
    };

    match serde_json::from_slice::<Vec<Movie>>(&raw) {
        Ok(movies) => Ok(movies),
        Err(err) => match config.load_policy {
            LoadPolicy::FailOpen => {
                warn!(path = %config.path.display(), error = %err,
                      "backing document malformed, starting empty");
                Ok(Vec::new())
            }
            LoadPolicy::Strict => Err(CatalogError::Malformed(err)),
        },
    }
}
