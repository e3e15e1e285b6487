//! The movie record and its input payloads.
//!
//! The backing document historically stored `genre` and `actors` either as a
//! list of strings or as one comma-joined string. That looseness is handled
//! exactly once, at the deserialization boundary: both shapes are accepted on
//! read, normalized into a list of trimmed non-empty tokens, and written back
//! out as lists. Everything past this module works with strictly-typed
//! records.

use serde::{Deserialize, Deserializer, Serialize};

/// One catalog record.
///
/// `id` is unique across live records and assigned by the store on create;
/// it is never client-supplied. `rating`, `votes`, and `revenue` default to
/// zero when absent from the document, so every record participates in
/// rating-bounded filters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default, deserialize_with = "string_or_list")]
    pub genre: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub director: String,
    #[serde(default, deserialize_with = "string_or_list")]
    pub actors: Vec<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub votes: u64,
    #[serde(default)]
    pub revenue: f64,
}

impl Movie {
    /// Case-insensitive exact title comparison, the matching rule used for
    /// title lookups and delete-by-title.
    pub fn title_equals(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }
}

/// Create payload: every record field except `id`, all required.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDraft {
    pub title: String,
    pub year: i32,
    pub genre: Vec<String>,
    pub description: String,
    pub director: String,
    pub actors: Vec<String>,
    pub runtime: u32,
    pub rating: f64,
    pub votes: u64,
    pub revenue: f64,
}

impl MovieDraft {
    /// Promote the draft to a full record under the given id.
    pub fn into_movie(self, id: u64) -> Movie {
        Movie {
            id,
            title: self.title,
            year: Some(self.year),
            genre: self.genre,
            description: self.description,
            director: self.director,
            actors: self.actors,
            runtime: Some(self.runtime),
            rating: self.rating,
            votes: self.votes,
            revenue: self.revenue,
        }
    }
}

/// Partial-update payload: every record field except `id`, all optional.
///
/// `None` means "leave the field untouched". There is no way to null out an
/// existing value through a patch; that mirrors the non-null merge rule of
/// the update operation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoviePatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub year: Option<i32>,
    #[serde(default)]
    pub genre: Option<Vec<String>>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub director: Option<String>,
    #[serde(default)]
    pub actors: Option<Vec<String>>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub votes: Option<u64>,
    #[serde(default)]
    pub revenue: Option<f64>,
}

impl MoviePatch {
    /// Merge every supplied field into the record, leaving the rest intact.
    pub fn apply(&self, movie: &mut Movie) {
        if let Some(title) = &self.title {
            movie.title = title.clone();
        }
        if let Some(year) = self.year {
            movie.year = Some(year);
        }
        if let Some(genre) = &self.genre {
            movie.genre = genre.clone();
        }
        if let Some(description) = &self.description {
            movie.description = description.clone();
        }
        if let Some(director) = &self.director {
            movie.director = director.clone();
        }
        if let Some(actors) = &self.actors {
            movie.actors = actors.clone();
        }
        if let Some(runtime) = self.runtime {
            movie.runtime = Some(runtime);
        }
        if let Some(rating) = self.rating {
            movie.rating = rating;
        }
        if let Some(votes) = self.votes {
            movie.votes = votes;
        }
        if let Some(revenue) = self.revenue {
            movie.revenue = revenue;
        }
    }

    /// True when no field is supplied (the patch is a no-op).
    pub fn is_empty(&self) -> bool {
        self == &MoviePatch::default()
    }
}

/// Accepted document shapes for `genre`/`actors`.
#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    Joined(String),
    List(Vec<String>),
}

/// Split a comma-joined value into trimmed, non-empty tokens.
fn split_tokens(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<StringOrList>::deserialize(deserializer)?;
    Ok(match raw {
        None => Vec::new(),
        Some(StringOrList::Joined(joined)) => split_tokens(&joined),
        Some(StringOrList::List(items)) => items,
    })
}
