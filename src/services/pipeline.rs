/// Recommendation pipeline
///
/// One fixed sequence of backend calls per submitted title:
/// resolve → similarity → enrichment → render. Data flows strictly
/// forward; every run builds its state fresh and discards it once the
/// markup is produced.
use std::sync::Arc;

use crate::{
    error::{AppError, AppResult},
    services::{enrichment, providers::RecommendationBackend, render, resolve, similarity},
};

/// Pipeline stages, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Resolve,
    Similarity,
    Enrichment,
    Render,
}

impl Stage {
    /// Generic user-facing message for a hard failure in this stage.
    /// Original error detail is logged, never shown.
    pub fn alert_message(&self) -> &'static str {
        match self {
            Stage::Resolve => "Invalid Request",
            Stage::Similarity => "Error fetching recommendations",
            Stage::Enrichment | Stage::Render => "Error loading movie details",
        }
    }
}

/// Why a run stopped short of rendered markup.
#[derive(Debug)]
pub enum RunError {
    /// Soft failure: the search had no hits, or the recommender does not
    /// know the title. Becomes the Fail view state, never an alert.
    NotFound,
    /// Hard failure in one stage; aborts the run.
    Failed { stage: Stage, source: AppError },
}

pub struct RecommendationPipeline {
    backend: Arc<dyn RecommendationBackend>,
    image_base: String,
}

impl RecommendationPipeline {
    pub fn new(backend: Arc<dyn RecommendationBackend>, image_base: String) -> Self {
        Self { backend, image_base }
    }

    /// Runs the full pipeline for one submitted title and returns the
    /// rendered HTML fragment.
    pub async fn run(&self, title: &str) -> Result<String, RunError> {
        let backend = self.backend.as_ref();

        let resolved = stage(Stage::Resolve, resolve::resolve_title(backend, title).await)?;
        let rec_movies = stage(
            Stage::Similarity,
            similarity::fetch_similar(backend, &resolved.title).await,
        )?;
        let payload = stage(
            Stage::Enrichment,
            enrichment::build_payload(backend, &self.image_base, &resolved, rec_movies).await,
        )?;
        let html = stage(Stage::Render, render::render_page(backend, &payload).await)?;

        Ok(html)
    }
}

fn stage<T>(stage: Stage, result: AppResult<T>) -> Result<T, RunError> {
    result.map_err(|source| match source {
        AppError::NotFound(reason) => {
            tracing::info!(%reason, "Run ended without a match");
            RunError::NotFound
        }
        source => {
            tracing::error!(error = %source, ?stage, "Pipeline stage failed");
            RunError::Failed { stage, source }
        }
    })
}
