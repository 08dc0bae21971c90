use crate::{
    error::{AppError, AppResult},
    models::ResolvedTitle,
    services::providers::RecommendationBackend,
};

/// Resolves free-text input to a canonical movie id and title.
///
/// Always picks the first search hit; there is no ranking or
/// disambiguation. Zero hits is a soft not-found, surfaced as the Fail
/// view state by the caller.
pub async fn resolve_title(
    backend: &dyn RecommendationBackend,
    title: &str,
) -> AppResult<ResolvedTitle> {
    let search = backend.search_movie(title).await?;
    let hit = search
        .results
        .into_iter()
        .next()
        .ok_or_else(|| AppError::NotFound(format!("No results for '{}'", title)))?;

    tracing::info!(query = %title, id = hit.id, resolved = %hit.original_title, "Title resolved");

    Ok(ResolvedTitle {
        id: hit.id,
        title: hit.original_title,
    })
}
