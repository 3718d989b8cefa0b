//! reqwest implementation of [`LyricsService`].
//!
//! One POST per call, JSON in and out. No retries and no timeout: the
//! transport's own limits are the only bound.

use async_trait::async_trait;
use log::{debug, info, warn};

use super::service::{FetchError, GENERIC_FAILURE_MESSAGE, LyricsService};
use crate::core::config::{DEFAULT_BASE_URL, DEFAULT_ENDPOINT};
use crate::core::types::{ApiErrorBody, LyricsRequest, LyricsResponse, SubmissionInput};

pub struct HttpLyricsService {
    url: String,
    client: reqwest::Client,
}

impl HttpLyricsService {
    /// Builds a service posting to `base_url` + `endpoint`.
    ///
    /// # Example
    /// ```no_run
    /// use songvocab::api::{HttpLyricsService, LyricsService};
    /// use songvocab::core::types::SubmissionInput;
    /// # async fn demo() {
    /// let service = HttpLyricsService::new(None, None);
    /// let query = SubmissionInput::parse("Alors on danse").unwrap();
    /// match service.fetch(&query).await {
    ///     Ok(response) => println!("{} words", response.vocabulary.len()),
    ///     Err(e) => eprintln!("Error: {e}"),
    /// }
    /// # }
    /// ```
    pub fn new(base_url: Option<String>, endpoint: Option<String>) -> Self {
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let endpoint = endpoint.unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self {
            url: join_url(&base_url, &endpoint),
            client: reqwest::Client::new(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Joins base and path with exactly one slash between them.
pub fn join_url(base_url: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

#[async_trait]
impl LyricsService for HttpLyricsService {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch(&self, query: &SubmissionInput) -> Result<LyricsResponse, FetchError> {
        info!("POST {} (query={:?})", self.url, query.as_str());

        // `.json()` sets Content-Type: application/json
        let response = self
            .client
            .post(&self.url)
            .json(&LyricsRequest::from(query))
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        debug!("Lyrics service response status: {}", status);

        if !status.is_success() {
            // Unreadable or non-JSON bodies fall back to the generic message
            let body = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<ApiErrorBody>(&body)
                .ok()
                .and_then(|b| b.message().map(str::to_string))
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            warn!("Lyrics service error: {} - {}", status.as_u16(), message);
            return Err(FetchError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        let parsed: LyricsResponse = serde_json::from_slice(&body).map_err(|e| {
            warn!("Malformed lyrics response ({} bytes): {}", body.len(), e);
            FetchError::Malformed(e.to_string())
        })?;

        info!(
            "Received lyrics ({} bytes) and {} vocabulary entries",
            parsed.lyrics.len(),
            parsed.vocabulary.len()
        );
        Ok(parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(
            join_url("http://localhost:8000", "/api/agent"),
            "http://localhost:8000/api/agent"
        );
        assert_eq!(
            join_url("http://localhost:8000/", "api/agent"),
            "http://localhost:8000/api/agent"
        );
        assert_eq!(
            join_url("http://host/prefix/", "/api/agent"),
            "http://host/prefix/api/agent"
        );
    }

    #[test]
    fn test_new_uses_defaults() {
        let service = HttpLyricsService::new(None, None);
        assert_eq!(service.url(), "http://localhost:8000/api/agent");
        assert_eq!(service.name(), "http");
    }
}
