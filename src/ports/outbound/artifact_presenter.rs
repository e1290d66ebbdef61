use crate::asset_retrieval::domain::{ArtifactBlob, ArtifactRef};
use crate::shared::Result;

/// ArtifactPresenter port for turning an artifact into a user-facing download
///
/// This port abstracts the delivery destination (stdout, a directory, ...).
pub trait ArtifactPresenter {
    /// Delivers `artifact`
    ///
    /// # Arguments
    /// * `artifact` - The reference produced by the export
    /// * `content` - The stored blob for a local reference, `None` for an external link
    ///
    /// # Errors
    /// Returns an error if:
    /// - A local reference arrives without content
    /// - Writing to the destination fails
    fn present(&self, artifact: &ArtifactRef, content: Option<&ArtifactBlob>) -> Result<()>;
}
