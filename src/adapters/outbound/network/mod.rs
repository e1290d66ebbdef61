/// Network adapters for external API calls
mod http_asset_transport;

pub use http_asset_transport::{HttpAssetTransport, DEFAULT_TIMEOUT_SECS};
