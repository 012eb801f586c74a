//! HTTP client for the news API `top-headlines` endpoint.

use std::time::Duration;

use reqwest::Client;
use tracing::{debug, error, info};
use url::Url;
use zeroize::Zeroize;

use super::messages::{ApiErrorBody, TopHeadlines};
use crate::errors::{ServiceError, ServiceResult};

/// Default endpoint for top headlines
pub const DEFAULT_NEWS_API_URL: &str = "https://newsapi.org/v2/top-headlines";

const USER_AGENT: &str = concat!("newsreel/", env!("CARGO_PKG_VERSION"));

/// Fetches top headlines for one country.
pub struct NewsClient {
    http: Client,
    endpoint: Url,
    api_key: String,
    country: String,
}

impl std::fmt::Debug for NewsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewsClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("api_key", &"[REDACTED]")
            .field("country", &self.country)
            .finish()
    }
}

impl Drop for NewsClient {
    fn drop(&mut self) {
        self.api_key.zeroize();
    }
}

impl NewsClient {
    /// Create a client for `endpoint`.
    ///
    /// # Errors
    /// Returns [`ServiceError::InvalidInput`] when the endpoint is not an
    /// absolute http(s) URL, or [`ServiceError::Http`] if the HTTP client
    /// cannot be built.
    pub fn new(
        api_key: &str,
        endpoint: &str,
        country: &str,
        timeout: Duration,
    ) -> ServiceResult<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|e| ServiceError::InvalidInput(format!("Invalid news API URL: {}", e)))?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(ServiceError::InvalidInput(format!(
                "News API URL must use http or https, got {}",
                endpoint.scheme()
            )));
        }

        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            endpoint,
            api_key: api_key.to_string(),
            country: country.to_string(),
        })
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    /// GET `<endpoint>?country=<country>&apiKey=<key>` and parse the result.
    pub async fn top_headlines(&self) -> ServiceResult<TopHeadlines> {
        debug!(endpoint = %self.endpoint, country = %self.country, "Fetching top headlines");

        let response = self
            .http
            .get(self.endpoint.clone())
            .query(&[
                ("country", self.country.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.describe())
                .unwrap_or_else(|_| body.chars().take(200).collect());
            error!(status = %status, detail = %detail, "News API returned an error status");
            return Err(ServiceError::News(format!("HTTP {}: {}", status, detail)));
        }

        let headlines: TopHeadlines = serde_json::from_str(&body)
            .map_err(|e| ServiceError::News(format!("Malformed response: {}", e)))?;

        if headlines.status != "ok" {
            let detail = serde_json::from_str::<ApiErrorBody>(&body)
                .map(|b| b.describe())
                .unwrap_or_else(|_| headlines.status.clone());
            return Err(ServiceError::News(detail));
        }

        info!(
            total_results = headlines.total_results,
            articles = headlines.articles.len(),
            "Fetched top headlines"
        );
        Ok(headlines)
    }
}
