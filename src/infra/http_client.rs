use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::app::ports::RecordSource;
use crate::config::ApiConfig;
use crate::error::{CatalogError, Result};
use crate::infra::payload::{error_message, parse_list_payload};

/// `RecordSource` backed by the museum's REST API.
pub struct ReqwestRecordSource {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestRecordSource {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

#[async_trait]
impl RecordSource for ReqwestRecordSource {
    async fn fetch_list(&self, path: &str) -> Result<Vec<Value>> {
        let url = self.url(path);
        tracing::debug!(%url, "fetching list");

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        let bytes = resp.bytes().await?;
        if !status.is_success() {
            let message = error_message(&bytes)
                .map(|reason| format!("GET {} returned {}: {}", url, status, reason))
                .unwrap_or_else(|| format!("GET {} returned {}", url, status));
            return Err(CatalogError::Api { message });
        }

        parse_list_payload(&bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let config = ApiConfig {
            base_url: "http://museo.local:3000/".to_string(),
            timeout_seconds: 5,
        };
        let source = ReqwestRecordSource::new(&config).unwrap();
        assert_eq!(
            source.url("/api/vistas/obras-arte"),
            "http://museo.local:3000/api/vistas/obras-arte"
        );
    }
}
