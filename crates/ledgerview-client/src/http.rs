//! reqwest-backed implementation of [`LedgerApiTrait`]

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::ClientError;
use crate::types::{GroupPageResponse, LedgerPageResponse};
use crate::LedgerApiTrait;

/// HTTP client for the ledger backend
#[derive(Debug, Clone)]
pub struct HttpLedgerApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpLedgerApi {
    /// Create a client against `base_url` with the given timeouts
    pub fn new(base_url: &str, timeout_secs: u64, connect_timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(connect_timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// URL for one page of the ledger collection
    fn ledgers_url(&self, page: u32, page_size: u32) -> String {
        format!(
            "{}/ledgers/?page={}&page_size={}",
            self.base_url, page, page_size
        )
    }

    /// Resolve a listing path or `next` link against the base URL.
    /// Absolute `next` links are used verbatim.
    fn resolve_url(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else if url.starts_with('/') {
            format!("{}{}", self.base_url, url)
        } else {
            format!("{}/{}", self.base_url, url)
        }
    }

    /// GET `url` and decode the JSON body
    async fn get_json<R: DeserializeOwned>(&self, url: &str) -> Result<R, ClientError> {
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<R>().await.map_err(|e| ClientError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl LedgerApiTrait for HttpLedgerApi {
    async fn fetch_ledger_page(
        &self,
        page: u32,
        page_size: u32,
    ) -> Result<LedgerPageResponse, ClientError> {
        let url = self.ledgers_url(page, page_size);
        self.get_json(&url).await
    }

    async fn fetch_group_page(&self, url: &str) -> Result<GroupPageResponse, ClientError> {
        let url = self.resolve_url(url);
        self.get_json(&url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledgers_url() {
        let api = HttpLedgerApi::new("http://backend/api", 30, 10);
        assert_eq!(
            api.ledgers_url(2, 10),
            "http://backend/api/ledgers/?page=2&page_size=10"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let api = HttpLedgerApi::new("http://backend/api/", 30, 10);
        assert_eq!(
            api.ledgers_url(1, 25),
            "http://backend/api/ledgers/?page=1&page_size=25"
        );
    }

    #[test]
    fn test_resolve_url_absolute_kept() {
        let api = HttpLedgerApi::new("http://backend/api", 30, 10);
        assert_eq!(
            api.resolve_url("http://backend/api/main-groups/?page=2"),
            "http://backend/api/main-groups/?page=2"
        );
    }

    #[test]
    fn test_resolve_url_path_joined() {
        let api = HttpLedgerApi::new("http://backend/api", 30, 10);
        assert_eq!(
            api.resolve_url("/main-groups/"),
            "http://backend/api/main-groups/"
        );
        assert_eq!(
            api.resolve_url("main-groups/"),
            "http://backend/api/main-groups/"
        );
    }
}
