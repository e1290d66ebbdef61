use crate::asset_retrieval::domain::{ArtifactBlob, ArtifactPayload, LicenseAsset};
use crate::shared::error::AssetError;
use crate::shared::security::sanitize_file_stem;

const DOCUMENT_CONTENT_TYPE: &str = "application/json";

/// ArtifactExporter - decides what a download of an asset delivers
///
/// Decision rule, in order:
/// 1. A record with an external link is delivered as that link, untouched.
/// 2. Anything else is serialized to canonical JSON and handed back as an
///    in-memory document named `asset_{identifier}.json`.
///
/// Storing the document and issuing its ephemeral reference is the
/// caller's job (see `ExportArtifactUseCase`).
pub struct ArtifactExporter;

impl ArtifactExporter {
    pub fn prepare(asset: &LicenseAsset) -> Result<ArtifactPayload, AssetError> {
        if let Some(link) = asset.external_link() {
            return Ok(ArtifactPayload::ExternalLink(link.to_string()));
        }

        let bytes = Self::render_document(asset)?;
        Ok(ArtifactPayload::Document(ArtifactBlob::new(
            Self::filename_for(asset.identifier()),
            DOCUMENT_CONTENT_TYPE,
            bytes,
        )))
    }

    /// Suggested download name for a synthesized document
    pub fn filename_for(identifier: &str) -> String {
        format!("asset_{}.json", sanitize_file_stem(identifier))
    }

    fn render_document(asset: &LicenseAsset) -> Result<Vec<u8>, AssetError> {
        let mut bytes =
            serde_json::to_vec_pretty(asset).map_err(|e| AssetError::ArtifactUnavailable {
                reason: format!("failed to serialize asset {}: {}", asset.identifier(), e),
            })?;
        bytes.push(b'\n');
        Ok(bytes)
    }
}
