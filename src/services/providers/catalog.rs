use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{CatalogHit, TrackCandidate},
    services::providers::CatalogSearch,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("songstream-api/", env!("CARGO_PKG_VERSION"));

/// Catalog search API client
///
/// Built once at startup and shared read-only by all request tasks.
#[derive(Clone)]
pub struct CatalogClient {
    http_client: HttpClient,
    base_url: String,
}

impl CatalogClient {
    pub fn new(base_url: String) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::SearchFailed(format!("failed to build catalog client: {e}")))?;

        Ok(Self {
            http_client,
            base_url,
        })
    }
}

#[async_trait::async_trait]
impl CatalogSearch for CatalogClient {
    async fn search_songs(&self, query: &str, limit: usize) -> AppResult<Vec<TrackCandidate>> {
        let url = format!("{}/api/v1/search", self.base_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("q", query), ("type", "song"), ("sort_by", "relevance")])
            .send()
            .await
            .map_err(AppError::from_search_transport)?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::SearchFailed(format!(
                "catalog returned status {status}: {body}"
            )));
        }

        let hits: Vec<CatalogHit> = response
            .json()
            .await
            .map_err(|e| AppError::SearchFailed(format!("invalid catalog response: {e}")))?;

        let candidates: Vec<TrackCandidate> = hits
            .into_iter()
            .filter_map(CatalogHit::into_candidate)
            .take(limit)
            .collect();

        tracing::info!(
            query = %query,
            results = candidates.len(),
            "catalog search completed"
        );

        Ok(candidates)
    }
}
