use crate::asset_retrieval::domain::{ArtifactPayload, ArtifactRef, LicenseAsset, LocalArtifact};
use crate::asset_retrieval::services::ArtifactExporter;
use crate::ports::outbound::ArtifactStore;
use crate::shared::error::AssetError;
use chrono::Utc;
use std::cell::RefCell;

/// ExportArtifactUseCase - produces the deliverable for an asset
///
/// Owns at most one live ephemeral reference. A new export reclaims the
/// previous reference before issuing another, and `release` reclaims it
/// when the view goes away, so references never pile up in the store.
///
/// # Type Parameters
/// * `S` - ArtifactStore implementation
pub struct ExportArtifactUseCase<S> {
    store: S,
    live_uri: RefCell<Option<String>>,
}

impl<S: ArtifactStore> ExportArtifactUseCase<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            live_uri: RefCell::new(None),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// URI of the reference this use case currently owns
    pub fn live_uri(&self) -> Option<String> {
        self.live_uri.borrow().clone()
    }

    /// Exports `asset`, superseding any earlier reference
    pub fn export(&self, asset: &LicenseAsset) -> Result<ArtifactRef, AssetError> {
        let payload = ArtifactExporter::prepare(asset)?;
        self.release();

        match payload {
            ArtifactPayload::ExternalLink(uri) => Ok(ArtifactRef::External { uri }),
            ArtifactPayload::Document(blob) => {
                let filename = blob.filename.clone();
                let content_type = blob.content_type.clone();
                let size_bytes = blob.bytes.len();

                let uri = self.store.create(blob);
                *self.live_uri.borrow_mut() = Some(uri.clone());

                Ok(ArtifactRef::Local(LocalArtifact {
                    uri,
                    filename,
                    content_type,
                    size_bytes,
                    created_at: Utc::now(),
                }))
            }
        }
    }

    /// Reclaims the owned reference, if any
    pub fn release(&self) {
        if let Some(uri) = self.live_uri.borrow_mut().take() {
            self.store.revoke(&uri);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::memory::SessionArtifactStore;
    use crate::asset_retrieval::domain::Attributes;

    fn asset(identifier: &str, link: Option<&str>) -> LicenseAsset {
        LicenseAsset::new(
            identifier.to_string(),
            Some("Alice".to_string()),
            link.map(String::from),
            Attributes::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_export_external_link_creates_no_blob() {
        let use_case = ExportArtifactUseCase::new(SessionArtifactStore::new());

        let artifact = use_case
            .export(&asset("D9", Some("https://x/doc.pdf")))
            .unwrap();

        assert_eq!(
            artifact,
            ArtifactRef::External {
                uri: "https://x/doc.pdf".to_string()
            }
        );
        assert_eq!(use_case.store().live_count(), 0);
        assert_eq!(use_case.live_uri(), None);
    }

    #[test]
    fn test_export_local_document_is_readable() {
        let use_case = ExportArtifactUseCase::new(SessionArtifactStore::new());
        let original = asset("A1", None);

        let ArtifactRef::Local(local) = use_case.export(&original).unwrap() else {
            panic!("expected local artifact");
        };

        assert_eq!(local.filename, "asset_A1.json");
        assert_eq!(local.content_type, "application/json");
        let blob = use_case.store().read(&local.uri).unwrap();
        assert_eq!(blob.bytes.len(), local.size_bytes);
        let parsed: LicenseAsset = serde_json::from_slice(&blob.bytes).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn test_new_export_revokes_previous_reference() {
        let use_case = ExportArtifactUseCase::new(SessionArtifactStore::new());

        let first = use_case.export(&asset("A1", None)).unwrap();
        let second = use_case.export(&asset("A1", None)).unwrap();

        assert_ne!(first.uri(), second.uri());
        assert!(use_case.store().read(first.uri()).is_none());
        assert!(use_case.store().read(second.uri()).is_some());
        assert_eq!(use_case.store().live_count(), 1);
    }

    #[test]
    fn test_external_export_also_releases_previous_reference() {
        let use_case = ExportArtifactUseCase::new(SessionArtifactStore::new());

        use_case.export(&asset("A1", None)).unwrap();
        use_case
            .export(&asset("D9", Some("https://x/doc.pdf")))
            .unwrap();

        assert_eq!(use_case.store().live_count(), 0);
    }

    #[test]
    fn test_release_reclaims_reference() {
        let use_case = ExportArtifactUseCase::new(SessionArtifactStore::new());
        let artifact = use_case.export(&asset("A1", None)).unwrap();

        use_case.release();
        assert!(use_case.store().read(artifact.uri()).is_none());
        assert_eq!(use_case.live_uri(), None);

        // Second release is a no-op
        use_case.release();
        assert_eq!(use_case.store().live_count(), 0);
    }
}
