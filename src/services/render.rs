use crate::{error::AppResult, models::RenderPayload, services::providers::RecommendationBackend};

/// Submits the assembled payload to the rendering endpoint and returns
/// the HTML fragment verbatim. The fragment is opaque to this layer; the
/// rendering backend is trusted with its content.
pub async fn render_page(
    backend: &dyn RecommendationBackend,
    payload: &RenderPayload,
) -> AppResult<String> {
    let html = backend.render(payload).await?;
    tracing::info!(title = %payload.title, bytes = html.len(), "Recommendation page rendered");
    Ok(html)
}
