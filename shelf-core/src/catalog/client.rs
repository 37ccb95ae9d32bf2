use crate::config::{CatalogConfig, SEARCH_PATH};
use crate::error::CatalogError;
use log::debug;
use reqwest::Url;
use std::sync::{Arc, Mutex};
use time::OffsetDateTime;

const USER_AGENT: &str = "shelf-core/0.1";
const ACCEPT: &str = "application/json";
const MAX_API_HISTORY: usize = 100;

#[derive(Debug, Clone)]
pub struct ApiCall {
    pub url: String,
    pub timestamp: OffsetDateTime,
    pub status_code: u16,
    pub success: bool,
}

/// HTTP client for the catalog search endpoint.
///
/// Cloning is cheap and clones share the same call history.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    client: reqwest::Client,
    config: CatalogConfig,
    history: Arc<Mutex<Vec<ApiCall>>>,
}

impl CatalogClient {
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(USER_AGENT),
        );
        headers.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static(ACCEPT),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(CatalogClient {
            client,
            config,
            history: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Build `<base>/api/v1/search?text=..&startIndex=..&maxResults=..`.
    ///
    /// A path prefix on the base URL is kept: `http://host/books` searches
    /// `http://host/books/api/v1/search`.
    pub fn search_url(&self, text: &str) -> Result<Url, CatalogError> {
        let mut base = Url::parse(&self.config.base_url)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", self.config.base_url, e)))?;
        if !base.path().ends_with('/') {
            let prefix = format!("{}/", base.path());
            base.set_path(&prefix);
        }
        let mut url = base
            .join(SEARCH_PATH)
            .map_err(|e| CatalogError::InvalidUrl(format!("{}: {}", self.config.base_url, e)))?;

        url.query_pairs_mut()
            .append_pair("text", text)
            .append_pair("startIndex", &self.config.start_index.to_string())
            .append_pair("maxResults", &self.config.max_results.to_string());

        Ok(url)
    }

    /// Send a GET and hand back the response if the status is 2xx.
    pub async fn call(&self, url: Url) -> Result<reqwest::Response, CatalogError> {
        debug!("calling catalog API: {}", url);

        let timestamp = OffsetDateTime::now_utc();
        match self.client.get(url.clone()).send().await {
            Ok(response) => {
                let status = response.status();
                self.record(ApiCall {
                    url: url.to_string(),
                    timestamp,
                    status_code: status.as_u16(),
                    success: status.is_success(),
                });

                if !status.is_success() {
                    return Err(CatalogError::Status {
                        code: status.as_u16(),
                        url: url.to_string(),
                    });
                }
                Ok(response)
            }
            Err(e) => {
                self.record(ApiCall {
                    url: url.to_string(),
                    timestamp,
                    status_code: 0, // no response at all
                    success: false,
                });
                Err(CatalogError::Network(e))
            }
        }
    }

    fn record(&self, call: ApiCall) {
        if let Ok(mut history) = self.history.lock() {
            history.push(call);
            if history.len() > MAX_API_HISTORY {
                let excess = history.len() - MAX_API_HISTORY;
                history.drain(0..excess);
            }
        }
    }

    /// Get the API call history for debugging purposes
    pub fn call_history(&self) -> Vec<ApiCall> {
        self.history
            .lock()
            .map(|history| history.clone())
            .unwrap_or_default()
    }

    pub fn clear_call_history(&self) {
        if let Ok(mut history) = self.history.lock() {
            history.clear();
        }
    }
}
