use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::Config;
use crate::error::{Error, Result};

pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Value shipped in the sample environment file; never a real key
pub const PLACEHOLDER_API_KEY: &str = "your_actual_tmdb_api_key_here";

pub const DEFAULT_RETRIES: u32 = 3;

/// Inline "No Image" graphic shown when an item has no artwork
pub const PLACEHOLDER_IMAGE: &str = "data:image/svg+xml;base64,PHN2ZyB3aWR0aD0iMzAwIiBoZWlnaHQ9IjQ1MCIgdmlld0JveD0iMCAwIDMwMCA0NTAiIGZpbGw9Im5vbmUiIHhtbG5zPSJodHRwOi8vd3d3LnczLm9yZy8yMDAwL3N2ZyI+PHJlY3Qgd2lkdGg9IjMwMCIgaGVpZ2h0PSI0NTAiIGZpbGw9IiMxMTExMTEiLz48dGV4dCB4PSI1MCUiIHk9IjUwJSIgZG9taW5hbnQtYmFzZWxpbmU9ImNlbnRyYWwiIHRleHQtYW5jaG9yPSJtaWRkbGUiIGZpbGw9IiM2NjY2NjYiIGZvbnQtc2l6ZT0iMTgiPk5vIEltYWdlPC90ZXh0Pjwvc3ZnPg==";

const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    W300,
    #[default]
    W500,
    W780,
    W1280,
    Original,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::W300 => "w300",
            ImageSize::W500 => "w500",
            ImageSize::W780 => "w780",
            ImageSize::W1280 => "w1280",
            ImageSize::Original => "original",
        }
    }
}

/// Resolve an artwork path fragment to a full URL, or the placeholder graphic
pub fn image_url(path: Option<&str>, size: ImageSize) -> String {
    match path.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), path),
        None => PLACEHOLDER_IMAGE.to_string(),
    }
}

/// Delay before the attempt following `attempt` (1-based): `base * attempt`
pub fn backoff_delay(base: Duration, attempt: u32) -> Duration {
    base * attempt
}

/// Structural plausibility check for an API key
pub fn is_plausible_api_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && key.len() > 10 && key != PLACEHOLDER_API_KEY
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestOptions {
    /// Total number of attempts, at least one is always made
    pub retries: u32,
    /// Bound applied to each individual attempt
    pub timeout: Option<Duration>,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            retries: DEFAULT_RETRIES,
            timeout: None,
        }
    }
}

/// GET client for the TMDB v3 API with bounded retry
#[derive(Clone)]
pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    retry_delay: Duration,
}

impl TmdbClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into().trim().to_string(),
            base_url: TMDB_BASE_URL.to_string(),
            retry_delay: DEFAULT_RETRY_DELAY,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.tmdb_api_key.clone()).with_base_url(config.tmdb_base_url.clone())
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Unit of the linear backoff between attempts
    pub fn with_retry_delay(mut self, retry_delay: Duration) -> Self {
        self.retry_delay = retry_delay;
        self
    }

    pub fn is_configured(&self) -> bool {
        is_plausible_api_key(&self.api_key)
    }

    pub async fn get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<T> {
        self.get_with(endpoint, RequestOptions::default()).await
    }

    /// Fetch `endpoint` (path plus optional query string) and decode the JSON body.
    ///
    /// Fails with `Error::Configuration` before any network attempt when no
    /// usable key is configured. Non-2xx responses, transport failures and
    /// timeouts are retried until `options.retries` attempts are spent.
    pub async fn get_with<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<T> {
        if !self.is_configured() {
            tracing::warn!(endpoint, "TMDB API key is not configured or invalid");
            return Err(Error::Configuration(
                "TMDB API key is not configured or invalid".to_string(),
            ));
        }

        let url = self.url_for(endpoint);
        let attempts = options.retries.max(1);
        let mut attempt = 1;

        loop {
            tracing::debug!(endpoint, attempt, attempts, "Fetching from TMDB");

            match self.attempt::<T>(&url, options.timeout).await {
                Ok(data) => {
                    tracing::debug!(endpoint, attempt, "Fetched from TMDB");
                    return Ok(data);
                }
                Err(e) if e.is_retryable() && attempt < attempts => {
                    let delay = backoff_delay(self.retry_delay, attempt);
                    tracing::warn!(
                        endpoint,
                        attempt,
                        error = %e,
                        delay_ms = delay.as_millis() as u64,
                        "TMDB request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => {
                    tracing::error!(endpoint, attempt, error = %e, "TMDB request failed");
                    return Err(e);
                }
            }
        }
    }

    fn url_for(&self, endpoint: &str) -> String {
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!(
            "{}{}{}api_key={}",
            self.base_url,
            endpoint,
            separator,
            urlencoding::encode(&self.api_key)
        )
    }

    async fn attempt<T: DeserializeOwned>(&self, url: &str, timeout: Option<Duration>) -> Result<T> {
        match timeout {
            Some(limit) => tokio::time::timeout(limit, self.send(url))
                .await
                .map_err(|_| Error::Timeout(limit))?,
            None => self.send(url).await,
        }
    }

    async fn send<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Error::Upstream {
                status: response.status().as_u16(),
            });
        }

        response
            .json()
            .await
            .map_err(|e| Error::Network(format!("invalid response body: {}", e)))
    }
}
