use crate::{
    error::{AppError, AppResult},
    services::providers::RecommendationBackend,
};

/// Literal substring the backend embeds in its text response when a title
/// is unknown to the recommender. Matched by containment, not as a
/// structured code; a legitimate title containing this phrase would be
/// misclassified, which is the backend's contract as it stands.
pub const NOT_FOUND_SENTINEL: &str = "not in our database";

/// Delimiter between titles in the similarity response.
pub const TITLE_DELIMITER: &str = "---";

/// Requests the similar-movie list for a resolved title.
///
/// The sentinel phrase is a soft not-found; anything else is split into
/// an ordered recommendation list.
pub async fn fetch_similar(
    backend: &dyn RecommendationBackend,
    title: &str,
) -> AppResult<Vec<String>> {
    let text = backend.similarity(title).await?;

    if text.contains(NOT_FOUND_SENTINEL) {
        return Err(AppError::NotFound(format!(
            "'{}' is not known to the recommender",
            title
        )));
    }

    let titles = split_titles(&text);
    tracing::info!(title = %title, recommendations = titles.len(), "Similar titles fetched");
    Ok(titles)
}

/// Splits the raw similarity response on the literal delimiter.
///
/// Empty segments are kept: a trailing delimiter yields a trailing empty
/// title. Order is significant, it drives poster lookups and display.
pub fn split_titles(text: &str) -> Vec<String> {
    text.split(TITLE_DELIMITER).map(str::to_string).collect()
}
