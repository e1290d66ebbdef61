use crate::asset_retrieval::domain::{ArtifactRef, FetchState};
use crate::shared::error::AssetError;
use async_trait::async_trait;

/// AssetViewPort - Inbound port for the download view
///
/// The presentation layer drives one view instance through this interface.
/// Views run on a single cooperative task, so the futures are not `Send`.
#[async_trait(?Send)]
pub trait AssetViewPort {
    /// Activation hook: starts the first fetch. Returns `false` if no
    /// query was issued (already active or unmounted).
    async fn activate(&self) -> bool;

    /// Re-issues the query after an error. Ignored unless in the error state.
    async fn retry(&self) -> bool;

    /// Re-issues the query after a success. Ignored unless in the success state.
    async fn refetch(&self) -> bool;

    /// Current lifecycle state
    fn state(&self) -> FetchState;

    /// Produces the deliverable for the active asset
    ///
    /// # Errors
    /// Returns `AssetError::ArtifactUnavailable` unless a non-empty fetch
    /// has succeeded.
    fn export_artifact(&self) -> Result<ArtifactRef, AssetError>;

    /// Tears the view down: pending results are dropped and ephemeral
    /// artifacts reclaimed.
    fn unmount(&self);
}
