use std::sync::Arc;

use crate::config::Config;
use crate::services::pipeline::RecommendationPipeline;
use crate::services::providers::RecommendationBackend;
use crate::session::Session;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub session: Arc<Session>,
}

impl AppState {
    /// Creates application state over the given backend.
    pub fn new(backend: Arc<dyn RecommendationBackend>, config: &Config) -> Self {
        let pipeline = RecommendationPipeline::new(backend, config.image_base_url.clone());
        Self {
            session: Arc::new(Session::new(pipeline)),
        }
    }
}
