use std::time::Duration;

use reqwest::Client as HttpClient;

use crate::{
    error::{AppError, AppResult},
    models::{ResolvedVideo, VideoPage},
    services::providers::ResolveStreams,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
const USER_AGENT: &str = concat!("songstream-api/", env!("CARGO_PKG_VERSION"));

/// Title the resolution service serves for unavailable or region-blocked
/// items instead of failing the request
const PLACEHOLDER_TITLE: &str = "YouTube";

/// Stream resolution API client
///
/// Holds a primary and a fallback endpoint, tried in that fixed order. An
/// attempt counts as resolved only when the returned title is present and
/// not the generic placeholder; everything else moves on to the next
/// endpoint. No further retry policy exists.
#[derive(Clone)]
pub struct ResolverClient {
    http_client: HttpClient,
    endpoints: Vec<String>,
}

impl ResolverClient {
    pub fn new(primary_url: String, fallback_url: String) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Stream(format!("failed to build resolver client: {e}")))?;

        Ok(Self {
            http_client,
            endpoints: vec![primary_url, fallback_url],
        })
    }

    async fn try_endpoint(&self, base_url: &str, video_id: &str) -> AppResult<VideoPage> {
        let url = format!("{base_url}/api/v1/videos/{video_id}");

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Stream(e.to_string()))?;

        if !response.status().is_success() {
            return Err(AppError::Stream(format!(
                "resolver returned status {}",
                response.status()
            )));
        }

        response
            .json::<VideoPage>()
            .await
            .map_err(|e| AppError::Stream(format!("invalid resolver response: {e}")))
    }
}

#[async_trait::async_trait]
impl ResolveStreams for ResolverClient {
    async fn resolve(&self, video_id: &str) -> AppResult<ResolvedVideo> {
        for base_url in &self.endpoints {
            match self.try_endpoint(base_url, video_id).await {
                Ok(page) if !page.title.is_empty() && page.title != PLACEHOLDER_TITLE => {
                    tracing::debug!(
                        endpoint = %base_url,
                        video_id = %video_id,
                        formats = page.adaptive_formats.len() + page.format_streams.len(),
                        "stream resolution succeeded"
                    );
                    return Ok(page.into_resolved(video_id));
                }
                Ok(_) => {
                    tracing::warn!(
                        endpoint = %base_url,
                        video_id = %video_id,
                        "resolver returned a placeholder item"
                    );
                }
                Err(e) => {
                    tracing::warn!(
                        endpoint = %base_url,
                        video_id = %video_id,
                        error = %e,
                        "resolver attempt failed"
                    );
                }
            }
        }

        Err(AppError::VideoNotFound)
    }
}
