/// HTTP implementation of the recommendation backend
///
/// Thin reqwest client over the backend's seven endpoints. Query parameters
/// go through `.query()` so titles are percent-encoded; non-success statuses
/// become backend errors carrying the status and body.
use reqwest::Client as HttpClient;
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    models::{MovieCast, MovieDetails, PersonDetails, PosterResponse, RenderPayload, SearchResponse},
    services::providers::RecommendationBackend,
};

#[derive(Clone)]
pub struct HttpBackend {
    http_client: HttpClient,
    api_url: String,
}

impl HttpBackend {
    pub fn new(api_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            api_url,
        }
    }

    async fn check_status(response: reqwest::Response) -> AppResult<reqwest::Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Backend(format!(
                "Backend returned status {}: {}",
                status, body
            )));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl RecommendationBackend for HttpBackend {
    async fn search_movie(&self, title: &str) -> AppResult<SearchResponse> {
        let url = format!("{}/search_movie", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("title", title)])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let search: SearchResponse = response.json().await?;
        tracing::debug!(title = %title, results = search.results.len(), "Movie search completed");
        Ok(search)
    }

    async fn similarity(&self, title: &str) -> AppResult<String> {
        let url = format!("{}/similarity", self.api_url);
        let response = self
            .http_client
            .post(&url)
            .json(&json!({ "name": title }))
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        // Raw text by contract, sentinel and all
        Ok(response.text().await?)
    }

    async fn movie_details(&self, id: u64) -> AppResult<MovieDetails> {
        let url = format!("{}/movie_details", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("id", id)])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    async fn movie_cast(&self, id: u64) -> AppResult<MovieCast> {
        let url = format!("{}/movie_cast", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("id", id)])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    async fn person(&self, id: &str) -> AppResult<PersonDetails> {
        let url = format!("{}/person", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("id", id)])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    async fn poster_search(&self, title: &str) -> AppResult<PosterResponse> {
        let url = format!("{}/poster", self.api_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("title", title)])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        Ok(response.json().await?)
    }

    async fn render(&self, payload: &RenderPayload) -> AppResult<String> {
        let url = format!("{}/recommend", self.api_url);
        let response = self.http_client.post(&url).json(payload).send().await?;
        let response = Self::check_status(response).await?;

        let html = response.text().await?;
        tracing::debug!(title = %payload.title, bytes = html.len(), "Markup received");
        Ok(html)
    }
}
