use std::time::Duration;

use super::{DblpError, SearchPage, SearchResponse};

/// Public DBLP publication search endpoint.
pub const DEFAULT_API_URL: &str = "https://dblp.org/search/publ/api";

/// Result cap sent as the `h` parameter.
pub const DEFAULT_MAX_HITS: u32 = 1000;

/// Connection settings for the search endpoint
#[derive(Debug, Clone)]
pub struct DblpConfig {
    /// Search endpoint URL
    pub api_url: String,
    /// Maximum number of hits requested per query
    pub max_hits: u32,
    /// Per-request timeout (None keeps the transport default)
    pub timeout: Option<Duration>,
}

impl Default for DblpConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            max_hits: DEFAULT_MAX_HITS,
            timeout: None,
        }
    }
}

/// Thin client over the DBLP search API.
///
/// Cheap to clone; the underlying `reqwest::Client` shares its connection pool.
#[derive(Debug, Clone)]
pub struct DblpClient {
    http: reqwest::Client,
    config: DblpConfig,
}

impl DblpClient {
    pub fn new(config: DblpConfig) -> Result<Self, DblpError> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
        })
    }

    pub fn config(&self) -> &DblpConfig {
        &self.config
    }

    /// Run one search query against the configured endpoint.
    pub async fn search(&self, query: &str) -> Result<SearchPage, DblpError> {
        log::debug!("DBLP search: q={query} h={}", self.config.max_hits);

        let max_hits = self.config.max_hits.to_string();
        let request = self.http.get(&self.config.api_url).query(&[
            ("q", query),
            ("h", max_hits.as_str()),
            ("format", "json"),
        ]);
        Self::execute(request).await
    }

    /// Fetch a caller-built search URL as-is.
    pub async fn fetch_url(&self, url: &str) -> Result<SearchPage, DblpError> {
        log::debug!("DBLP fetch: {url}");
        Self::execute(self.http.get(url)).await
    }

    async fn execute(request: reqwest::RequestBuilder) -> Result<SearchPage, DblpError> {
        let response = request.send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let decoded: SearchResponse = serde_json::from_slice(&body)?;
        decoded.into_page()
    }
}
