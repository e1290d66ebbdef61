use super::QueryEndpoint;
use crate::shared::error::AssetError;
use async_trait::async_trait;

/// AssetTransport port for reaching the ledger query service
///
/// This port abstracts the HTTP call so the query client can be exercised
/// without a network. It returns the body untouched; envelope decoding is
/// not the transport's concern.
#[async_trait]
pub trait AssetTransport: Send + Sync {
    /// Issues one GET against `endpoint` and returns the response body
    ///
    /// # Errors
    /// Returns `AssetError::Transport` when the connection fails, times out,
    /// or the service answers with a non-success status. The error message
    /// is the transport's own text.
    async fn get(&self, endpoint: &QueryEndpoint) -> Result<String, AssetError>;
}
