/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (query service, object URLs,
/// console, file system).
pub mod artifact_presenter;
pub mod artifact_store;
pub mod asset_transport;
pub mod progress_reporter;
pub mod query_endpoint;

pub use artifact_presenter::ArtifactPresenter;
pub use artifact_store::ArtifactStore;
pub use asset_transport::AssetTransport;
pub use progress_reporter::ProgressReporter;
pub use query_endpoint::QueryEndpoint;
