//! Read-only views over the store's current snapshot.
//!
//! Every operation is a pure function of the collection and its arguments.
//! String predicates match case-insensitively; `year` is exact. Predicates
//! combine with AND semantics: a record must satisfy every supplied
//! predicate, and omitted predicates are not applied.

use std::sync::Arc;

use cinedb_core::Movie;
use cinedb_store::CatalogStore;

/// Default count for ranked top-N queries.
pub const DEFAULT_TOP_N: usize = 10;

/// Year substituted for records without one under [`RankKey::Earliest`],
/// so they sort last in ascending order.
const MISSING_YEAR_LAST: i32 = 9999;

// =============================================================================
// Filtering
// =============================================================================

/// A set of independently combinable filter predicates.
///
/// Empty-string `title`/`director`/`actor` and an empty `genres` list are
/// treated as absent predicates, matching the historical front-end behavior.
#[derive(Debug, Clone, Default)]
pub struct SearchFilter {
    /// Case-insensitive substring match on the title.
    pub title: Option<String>,
    /// Match if ANY requested genre is present in the record's genre list.
    pub genres: Vec<String>,
    /// Exact release-year equality.
    pub year: Option<i32>,
    /// Case-insensitive substring match on the director.
    pub director: Option<String>,
    /// Case-insensitive substring match against any element of `actors`.
    pub actor: Option<String>,
    /// Inclusive lower rating bound.
    pub min_rating: Option<f64>,
    /// Inclusive upper rating bound.
    pub max_rating: Option<f64>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn genre(mut self, genre: impl Into<String>) -> Self {
        self.genres.push(genre.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn director(mut self, director: impl Into<String>) -> Self {
        self.director = Some(director.into());
        self
    }

    pub fn actor(mut self, actor: impl Into<String>) -> Self {
        self.actor = Some(actor.into());
        self
    }

    pub fn min_rating(mut self, min: f64) -> Self {
        self.min_rating = Some(min);
        self
    }

    pub fn max_rating(mut self, max: f64) -> Self {
        self.max_rating = Some(max);
        self
    }

    /// True when the record satisfies every supplied predicate.
    pub fn matches(&self, movie: &Movie) -> bool {
        if let Some(needle) = non_empty(&self.title) {
            if !contains_ci(&movie.title, needle) {
                return false;
            }
        }

        if !self.genres.is_empty() {
            let any = self.genres.iter().any(|wanted| {
                movie
                    .genre
                    .iter()
                    .any(|have| have.to_lowercase() == wanted.to_lowercase())
            });
            if !any {
                return false;
            }
        }

        if let Some(year) = self.year {
            if movie.year != Some(year) {
                return false;
            }
        }

        if let Some(needle) = non_empty(&self.director) {
            if !contains_ci(&movie.director, needle) {
                return false;
            }
        }

        if let Some(needle) = non_empty(&self.actor) {
            if !movie.actors.iter().any(|actor| contains_ci(actor, needle)) {
                return false;
            }
        }

        if let Some(min) = self.min_rating {
            if movie.rating < min {
                return false;
            }
        }

        if let Some(max) = self.max_rating {
            if movie.rating > max {
                return false;
            }
        }

        true
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

// =============================================================================
// Ranking
// =============================================================================

/// Sort key for ranked top-N queries.
///
/// Missing numeric keys coalesce to 0, except [`RankKey::Earliest`] which
/// coalesces a missing year to 9999 so undated records sort last. Every key
/// sorts descending except `Earliest`. Sorts are stable: records with equal
/// keys keep their relative store order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKey {
    Rating,
    Revenue,
    /// Newest release year first.
    Latest,
    /// Oldest release year first (the only ascending key).
    Earliest,
    Runtime,
    Votes,
}

impl RankKey {
    fn value(self, movie: &Movie) -> f64 {
        match self {
            RankKey::Rating => movie.rating,
            RankKey::Revenue => movie.revenue,
            RankKey::Latest => f64::from(movie.year.unwrap_or(0)),
            RankKey::Earliest => f64::from(movie.year.unwrap_or(MISSING_YEAR_LAST)),
            RankKey::Runtime => f64::from(movie.runtime.unwrap_or(0)),
            RankKey::Votes => movie.votes as f64,
        }
    }

    fn ascending(self) -> bool {
        matches!(self, RankKey::Earliest)
    }
}

// =============================================================================
// Pure functions over a snapshot
// =============================================================================

/// Filter the collection, preserving store order.
pub fn search(movies: &[Movie], filter: &SearchFilter) -> Vec<Movie> {
    movies.iter().filter(|m| filter.matches(m)).cloned().collect()
}

/// Slice the collection: `offset` applied before `limit`, no clamping.
///
/// An offset beyond the collection length yields an empty result; a limit
/// larger than the remainder returns all remaining records.
pub fn page(movies: &[Movie], offset: Option<usize>, limit: Option<usize>) -> Vec<Movie> {
    let skipped = movies.iter().skip(offset.unwrap_or(0));
    match limit {
        Some(limit) => skipped.take(limit).cloned().collect(),
        None => skipped.cloned().collect(),
    }
}

/// Stable sort-and-truncate over the full collection.
pub fn top_n(movies: &[Movie], key: RankKey, limit: usize) -> Vec<Movie> {
    let mut ranked = movies.to_vec();
    if key.ascending() {
        ranked.sort_by(|a, b| key.value(a).total_cmp(&key.value(b)));
    } else {
        ranked.sort_by(|a, b| key.value(b).total_cmp(&key.value(a)));
    }
    ranked.truncate(limit);
    ranked
}

/// Mean rating across records carrying the genre; 0.0 when none match.
pub fn average_rating_by_genre(movies: &[Movie], genre: &str) -> f64 {
    let filter = SearchFilter::new().genre(genre);
    let matched: Vec<&Movie> = movies.iter().filter(|m| filter.matches(m)).collect();
    if matched.is_empty() {
        return 0.0;
    }
    matched.iter().map(|m| m.rating).sum::<f64>() / matched.len() as f64
}

/// Count of records whose director substring-matches the given name.
pub fn count_by_director(movies: &[Movie], director: &str) -> usize {
    let filter = SearchFilter::new().director(director);
    movies.iter().filter(|m| filter.matches(m)).count()
}

/// Total revenue across records released in the given year; 0.0 when none.
pub fn revenue_by_year(movies: &[Movie], year: i32) -> f64 {
    movies
        .iter()
        .filter(|m| m.year == Some(year))
        .map(|m| m.revenue)
        .sum()
}

// =============================================================================
// Facade
// =============================================================================

/// Read-only facade over a shared [`CatalogStore`].
///
/// Stateless: holds only the store reference, so `Clone` is cheap and all
/// instances observe the same collection. Each method takes the shared lock
/// once and computes against that snapshot.
#[derive(Debug, Clone)]
pub struct CatalogQueries {
    store: Arc<CatalogStore>,
}

impl CatalogQueries {
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self { store }
    }

    /// Full collection in store order, optionally sliced.
    pub fn all(&self, offset: Option<usize>, limit: Option<usize>) -> Vec<Movie> {
        page(&self.store.read(), offset, limit)
    }

    /// Single record by id.
    pub fn get(&self, id: u64) -> Option<Movie> {
        self.store.read().iter().find(|m| m.id == id).cloned()
    }

    /// First record whose title matches case-insensitively and exactly.
    pub fn get_by_title(&self, title: &str) -> Option<Movie> {
        self.store
            .read()
            .iter()
            .find(|m| m.title_equals(title))
            .cloned()
    }

    /// AND-combined predicate search, optionally truncated.
    pub fn search(&self, filter: &SearchFilter, limit: Option<usize>) -> Vec<Movie> {
        let mut results = search(&self.store.read(), filter);
        if let Some(limit) = limit {
            results.truncate(limit);
        }
        results
    }

    /// Ranked top-N; `limit` defaults to [`DEFAULT_TOP_N`].
    pub fn top_n(&self, key: RankKey, limit: Option<usize>) -> Vec<Movie> {
        top_n(&self.store.read(), key, limit.unwrap_or(DEFAULT_TOP_N))
    }

    pub fn top_rated(&self, limit: Option<usize>) -> Vec<Movie> {
        self.top_n(RankKey::Rating, limit)
    }

    pub fn top_revenue(&self, limit: Option<usize>) -> Vec<Movie> {
        self.top_n(RankKey::Revenue, limit)
    }

    pub fn latest(&self, limit: Option<usize>) -> Vec<Movie> {
        self.top_n(RankKey::Latest, limit)
    }

    pub fn earliest(&self, limit: Option<usize>) -> Vec<Movie> {
        self.top_n(RankKey::Earliest, limit)
    }

    pub fn longest(&self, limit: Option<usize>) -> Vec<Movie> {
        self.top_n(RankKey::Runtime, limit)
    }

    pub fn most_voted(&self, limit: Option<usize>) -> Vec<Movie> {
        self.top_n(RankKey::Votes, limit)
    }

    pub fn by_director(&self, director: &str) -> Vec<Movie> {
        self.search(&SearchFilter::new().director(director), None)
    }

    pub fn by_actor(&self, actor: &str) -> Vec<Movie> {
        self.search(&SearchFilter::new().actor(actor), None)
    }

    pub fn by_year(&self, year: i32) -> Vec<Movie> {
        self.search(&SearchFilter::new().year(year), None)
    }

    pub fn by_genre(&self, genre: &str) -> Vec<Movie> {
        self.search(&SearchFilter::new().genre(genre), None)
    }

    pub fn average_rating_by_genre(&self, genre: &str) -> f64 {
        average_rating_by_genre(&self.store.read(), genre)
    }

    pub fn count_by_director(&self, director: &str) -> usize {
        count_by_director(&self.store.read(), director)
    }

    pub fn revenue_by_year(&self, year: i32) -> f64 {
        revenue_by_year(&self.store.read(), year)
    }
}
