use crate::ports::outbound::{AssetTransport, QueryEndpoint};
use crate::shared::error::AssetError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// HttpAssetTransport adapter for querying the ledger gateway over HTTP
///
/// This adapter implements the AssetTransport port with an async reqwest
/// client. It makes exactly one request per call; retrying is up to the
/// caller.
pub struct HttpAssetTransport {
    client: reqwest::Client,
}

impl HttpAssetTransport {
    /// Creates a transport with the default timeout
    pub fn new() -> Result<Self> {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("ledger-license-export/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client })
    }
}

// Note: no Default implementation; client creation can fail and must be handled.

#[async_trait]
impl AssetTransport for HttpAssetTransport {
    async fn get(&self, endpoint: &QueryEndpoint) -> std::result::Result<String, AssetError> {
        let url = endpoint.url();
        let transport_error = |message: String| AssetError::Transport {
            endpoint: url.clone(),
            message,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(transport_error(format!(
                "Request failed with status code {}",
                status.as_u16()
            )));
        }

        response
            .text()
            .await
            .map_err(|e| transport_error(e.to_string()))
    }
}
