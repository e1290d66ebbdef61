/// Mock implementations for testing
mod mock_asset_transport;
mod mock_progress_reporter;

pub use mock_asset_transport::MockAssetTransport;
pub use mock_progress_reporter::MockProgressReporter;
