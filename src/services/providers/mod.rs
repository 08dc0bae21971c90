/// Recommendation backend abstraction
///
/// The similarity engine, movie metadata, person data, and server-side
/// rendering all live behind one backend service; this trait captures the
/// seven HTTP contracts the pipeline depends on so stages can be driven
/// against a mock in tests.
use crate::{
    error::AppResult,
    models::{MovieCast, MovieDetails, PersonDetails, PosterResponse, RenderPayload, SearchResponse},
};

pub mod http;

/// Trait for the recommendation backend
///
/// One method per backend endpoint. The pipeline treats the backend as an
/// opaque collaborator: no call carries retry or timeout policy of its own.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationBackend: Send + Sync {
    /// Search for a movie by free-text title.
    async fn search_movie(&self, title: &str) -> AppResult<SearchResponse>;

    /// Request similar-movie titles for a canonical title.
    ///
    /// The response is raw text, not JSON: either a sentinel phrase for
    /// unknown titles or a `---`-delimited title list.
    async fn similarity(&self, title: &str) -> AppResult<String>;

    /// Fetch movie details by id.
    async fn movie_details(&self, id: u64) -> AppResult<MovieDetails>;

    /// Fetch the cast sequences for a movie id.
    async fn movie_cast(&self, id: u64) -> AppResult<MovieCast>;

    /// Fetch person details by (stringified) person id.
    async fn person(&self, id: &str) -> AppResult<PersonDetails>;

    /// Search for a poster path by title.
    async fn poster_search(&self, title: &str) -> AppResult<PosterResponse>;

    /// Submit the assembled payload and receive the rendered HTML fragment.
    async fn render(&self, payload: &RenderPayload) -> AppResult<String>;
}
