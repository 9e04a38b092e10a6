use crate::endpoint::build_search_url;
use crate::error::{Error, Result};
use crate::models::EpisodeResult;
use crate::options::SearchRequest;
use crate::response::{ResponseSchema, decode_response};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct ClientConfig {
    pub base_url: String,
    pub response_schema: ResponseSchema,
    pub timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            response_schema: ResponseSchema::default(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

/// Issues search calls. Cheap to clone, clones share the connection pool.
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    base_url: String,
    schema: ResponseSchema,
}

impl SearchClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        // Fail on a bad base url now rather than on the first search
        build_search_url(&config.base_url, &SearchRequest::default())?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs.max(1)))
            .build()?;

        info!(base_url = %config.base_url, "Search client ready");

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            schema: config.response_schema,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// One GET against the endpoint. No retries.
    #[instrument(skip(self, request), fields(query = %request.query))]
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<EpisodeResult>> {
        let url = build_search_url(&self.base_url, request)?;
        debug!(%url, "Sending search request");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }

        let body = response.bytes().await?;
        let entries = decode_response(&body, self.schema)?;
        debug!(count = entries.len(), "Search response decoded");

        Ok(entries)
    }
}
