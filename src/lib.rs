//! ledger-license-export - fetch a license agreement from a ledger query service
//!
//! This library retrieves the active license record from a ledger-backed
//! query gateway, tolerates the envelope and schema variants the gateway has
//! shipped over time, and exports the record as a downloadable artifact.
//! It follows hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`asset_retrieval`): canonical record, decoding and normalization rules, fetch lifecycle
//! - **Application Layer** (`application`): query and export use cases, the download view
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use ledger_license_export::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let use_case = QueryAssetUseCase::new(
//!     HttpAssetTransport::new()?,
//!     ConsoleProgressReporter::new(),
//!     EnvelopeDecoder::new(),
//! );
//! let view = AssetView::new(
//!     QueryEndpoint::default(),
//!     use_case,
//!     ExportArtifactUseCase::new(SessionArtifactStore::new()),
//! );
//!
//! view.activate().await;
//! if let FetchState::Success(Some(_)) = view.state() {
//!     let artifact = view.export_artifact()?;
//!     println!("{}", artifact.uri());
//! }
//! view.unmount();
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod asset_retrieval;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::ConsoleProgressReporter;
    pub use crate::adapters::outbound::filesystem::{ArtifactFileWriter, StdoutPresenter};
    pub use crate::adapters::outbound::memory::SessionArtifactStore;
    pub use crate::adapters::outbound::network::HttpAssetTransport;
    pub use crate::application::read_models::DownloadAffordance;
    pub use crate::application::use_cases::{ExportArtifactUseCase, QueryAssetUseCase};
    pub use crate::application::views::AssetView;
    pub use crate::asset_retrieval::domain::{
        ArtifactBlob, ArtifactRef, Attributes, FetchResult, FetchState, LicenseAsset,
        LocalArtifact, RawRecord,
    };
    pub use crate::asset_retrieval::services::{
        ArtifactExporter, DecodeStrategy, EnvelopeDecoder, FetchStateMachine, RecordNormalizer,
    };
    pub use crate::ports::inbound::AssetViewPort;
    pub use crate::ports::outbound::{
        ArtifactPresenter, ArtifactStore, AssetTransport, ProgressReporter, QueryEndpoint,
    };
    pub use crate::shared::error::{AssetError, ExitCode};
    pub use crate::shared::Result;
}
