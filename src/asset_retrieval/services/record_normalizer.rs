use crate::asset_retrieval::domain::{Attributes, LicenseAsset, RawRecord};
use crate::asset_retrieval::policies::{FieldAliases, LogicalField};
use crate::shared::error::AssetError;

/// RecordNormalizer - maps one raw record onto the canonical `LicenseAsset`
///
/// Canonical fields are pulled out through the `FieldAliases` rule table.
/// Every key left over, including keys no deployment has sent before,
/// becomes an attribute with its decoded JSON type intact.
pub struct RecordNormalizer;

impl RecordNormalizer {
    /// # Errors
    /// Returns `AssetError::UnusableIdentifier` when an identifier alias is
    /// present but none qualifies, and `AssetError::Schema` when no alias is
    /// present at all.
    pub fn normalize(mut record: RawRecord) -> Result<LicenseAsset, AssetError> {
        let identifier = FieldAliases::take(LogicalField::Identifier, &mut record)
            .ok_or_else(|| Self::schema_error(&record))?;
        let external_link = FieldAliases::take(LogicalField::ExternalLink, &mut record);
        let owner = FieldAliases::take(LogicalField::Owner, &mut record);

        let attributes: Attributes = record.into_iter().collect();

        LicenseAsset::new(identifier, owner, external_link, attributes)
    }

    fn schema_error(record: &RawRecord) -> AssetError {
        if let Some((alias, value)) = FieldAliases::first_present(LogicalField::Identifier, record)
        {
            return AssetError::UnusableIdentifier {
                alias: alias.to_string(),
                found: FieldAliases::describe_value(value).to_string(),
            };
        }

        let mut keys: Vec<&str> = record.keys().map(String::as_str).collect();
        keys.sort_unstable();

        AssetError::Schema {
            expected: FieldAliases::describe(LogicalField::Identifier),
            present: if keys.is_empty() {
                "(none)".to_string()
            } else {
                keys.join(", ")
            },
        }
    }
}
