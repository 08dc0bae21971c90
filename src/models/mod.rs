use serde::{Deserialize, Serialize};

/// Canonical title/id pair chosen from the first search hit
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedTitle {
    pub id: u64,
    pub title: String,
}

// ============================================================================
// Backend response types
// ============================================================================

/// Response from GET /search_movie
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SearchHit {
    pub id: u64,
    pub original_title: String,
}

/// Response from GET /poster
#[derive(Debug, Clone, Deserialize)]
pub struct PosterResponse {
    #[serde(default)]
    pub results: Vec<PosterHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PosterHit {
    #[serde(default)]
    pub poster_path: Option<String>,
}

/// Response from GET /movie_details
///
/// Every field is optional at the wire level; the provider omits or nulls
/// fields for obscure titles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub poster_path: Option<String>,
    #[serde(default)]
    pub genres: Vec<Genre>,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub vote_average: f64,
    #[serde(default)]
    pub vote_count: u64,
    #[serde(default)]
    pub release_date: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Genre {
    pub name: String,
}

/// Response from GET /movie_cast
///
/// Four parallel sequences; index `i` across all four describes one cast
/// member. The backend stringifies numeric person ids.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MovieCast {
    pub cast_ids: Vec<String>,
    pub cast_names: Vec<String>,
    pub cast_chars: Vec<String>,
    pub cast_profiles: Vec<String>,
}

impl MovieCast {
    /// True when all four sequences have equal length.
    pub fn is_aligned(&self) -> bool {
        let n = self.cast_ids.len();
        self.cast_names.len() == n && self.cast_chars.len() == n && self.cast_profiles.len() == n
    }

    pub fn len(&self) -> usize {
        self.cast_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cast_ids.is_empty()
    }
}

/// Response from GET /person
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PersonDetails {
    #[serde(default)]
    pub birthday: Option<String>,
    #[serde(default)]
    pub biography: Option<String>,
    #[serde(default)]
    pub place_of_birth: Option<String>,
}

/// Per-person sequences accumulated from /person lookups, aligned with
/// the cast sequences by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CastDetails {
    pub cast_bdays: Vec<String>,
    pub cast_bios: Vec<String>,
    pub cast_places: Vec<String>,
}

// ============================================================================
// Render payload
// ============================================================================

/// Flattened payload POSTed to the rendering endpoint.
///
/// The rendering backend expects every list-valued field pre-serialized as
/// a JSON string, not as a nested array. `rec_movies[i]` and
/// `rec_posters[i]` refer to the same recommended title; a missing poster
/// is an empty string, never an omitted entry.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RenderPayload {
    pub title: String,
    pub cast_ids: String,
    pub cast_names: String,
    pub cast_chars: String,
    pub cast_profiles: String,
    pub cast_bdays: String,
    pub cast_bios: String,
    pub cast_places: String,
    pub imdb_id: String,
    pub poster: String,
    pub genres: String,
    pub overview: String,
    pub rating: f64,
    pub vote_count: String,
    pub release_date: String,
    pub runtime: String,
    pub status: String,
    pub rec_movies: String,
    pub rec_posters: String,
}
