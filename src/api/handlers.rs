use axum::{extract::State, http::StatusCode, response::Html, Json};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::session::SubmitOutcome;
use crate::view::ViewSnapshot;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub title: String,
}

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Runs one pipeline submission for the given title.
///
/// Success returns the backend-rendered fragment verbatim; the embedding
/// page replaces its results container with it, clears the input and
/// scrolls to the top, as the reference client did on injection.
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendRequest>,
) -> AppResult<Html<String>> {
    match state.session.submit(&request.title).await {
        SubmitOutcome::Rendered(html) => Ok(Html(html)),
        SubmitOutcome::Rejected => Err(AppError::InvalidInput(
            "No movie name provided".to_string(),
        )),
        SubmitOutcome::NotFound => Err(AppError::NotFound(
            "Sorry! Try another movie name".to_string(),
        )),
        SubmitOutcome::Alert { message } => Err(AppError::Backend(message.to_string())),
        SubmitOutcome::Superseded => Err(AppError::Superseded(
            "A newer request replaced this one".to_string(),
        )),
    }
}

/// Current view snapshot: visibility flags, injected markup, delays.
pub async fn view(State(state): State<AppState>) -> Json<ViewSnapshot> {
    Json(state.session.view().await)
}
