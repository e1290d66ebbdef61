use crate::shared::error::AssetError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One decoded record exactly as the query service sent it
pub type RawRecord = serde_json::Map<String, serde_json::Value>;

/// Schema-specific fields carried alongside the canonical ones.
///
/// Key order is irrelevant to the record; a BTreeMap keeps exported
/// documents stable across runs.
pub type Attributes = BTreeMap<String, serde_json::Value>;

/// LicenseAsset value object - the canonical license record
///
/// Built by the record normalizer regardless of which schema version the
/// service used. Immutable: a new fetch produces a new value.
/// Deserialization goes through `LicenseAsset::new`, so a blank identifier
/// is rejected there too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "LicenseAssetFields")]
pub struct LicenseAsset {
    identifier: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    owner: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    external_link: Option<String>,
    #[serde(default)]
    attributes: Attributes,
}

/// Unvalidated wire shape of a serialized `LicenseAsset`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LicenseAssetFields {
    identifier: String,
    #[serde(default)]
    owner: Option<String>,
    #[serde(default)]
    external_link: Option<String>,
    #[serde(default)]
    attributes: Attributes,
}

impl TryFrom<LicenseAssetFields> for LicenseAsset {
    type Error = AssetError;

    fn try_from(fields: LicenseAssetFields) -> Result<Self, Self::Error> {
        LicenseAsset::new(
            fields.identifier,
            fields.owner,
            fields.external_link,
            fields.attributes,
        )
    }
}

impl LicenseAsset {
    pub fn new(
        identifier: String,
        owner: Option<String>,
        external_link: Option<String>,
        attributes: Attributes,
    ) -> Result<Self, AssetError> {
        if identifier.trim().is_empty() {
            return Err(AssetError::Validation {
                message: "Asset identifier cannot be empty".to_string(),
            });
        }

        Ok(Self {
            identifier,
            owner,
            external_link,
            attributes,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn external_link(&self) -> Option<&str> {
        self.external_link.as_deref()
    }

    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Label shown on the download affordance: the holder when known,
    /// otherwise the identifier.
    pub fn display_name(&self) -> &str {
        self.owner.as_deref().unwrap_or(&self.identifier)
    }
}
