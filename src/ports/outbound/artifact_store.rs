use crate::asset_retrieval::domain::ArtifactBlob;

/// ArtifactStore port for session-scoped object references
///
/// Mirrors the browser's object URL facility: content goes in, an
/// ephemeral URI comes out, and the URI stays valid until it is revoked or
/// the session ends. Nothing is persisted.
pub trait ArtifactStore: Send + Sync {
    /// Stores `blob` and returns a fresh URI for it
    fn create(&self, blob: ArtifactBlob) -> String;

    /// Returns the content behind a live URI
    fn read(&self, uri: &str) -> Option<ArtifactBlob>;

    /// Reclaims a URI. Returns `false` if it was not live.
    fn revoke(&self, uri: &str) -> bool;

    /// Number of URIs currently live
    fn live_count(&self) -> usize;
}
