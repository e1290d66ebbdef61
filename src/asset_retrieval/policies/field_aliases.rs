use crate::asset_retrieval::domain::RawRecord;
use serde_json::Value;

/// Logical fields of the canonical record that the service has named
/// differently across deployments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalField {
    Identifier,
    Owner,
    ExternalLink,
}

impl LogicalField {
    /// Wire keys for this field, most preferred first
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            LogicalField::Identifier => &["assetID", "documentID", "pdfID"],
            LogicalField::Owner => &["owner"],
            LogicalField::ExternalLink => &["link", "documentLink"],
        }
    }

    /// Reads a wire value as this field's text, if it qualifies.
    ///
    /// Identifiers may arrive as numbers; every field rejects blank text.
    fn accept(self, value: &Value) -> Option<String> {
        match (self, value) {
            (_, Value::String(text)) if !text.trim().is_empty() => Some(text.clone()),
            (LogicalField::Identifier, Value::Number(number)) => Some(number.to_string()),
            _ => None,
        }
    }
}

/// FieldAliases policy - alias rule table for schema drift
///
/// Three incompatible record shapes have been observed upstream
/// (`assetID`/`color`/`size`, `documentID`/`documentLink`/`serialNumber`,
/// and a `pdfID`/`link` variant). Each logical field probes its aliases in
/// order and takes the first qualifying one.
///
/// Only the consumed key is removed from the record; any other alias of
/// the same field stays behind as an ordinary attribute.
pub struct FieldAliases;

impl FieldAliases {
    /// Removes and returns the first qualifying alias of `field`
    pub fn take(field: LogicalField, record: &mut RawRecord) -> Option<String> {
        let (key, text) = field.aliases().iter().find_map(|alias| {
            record
                .get(*alias)
                .and_then(|value| field.accept(value))
                .map(|text| (*alias, text))
        })?;

        record.remove(key);
        Some(text)
    }

    /// First alias of `field` present in `record`, qualifying or not
    pub fn first_present<'a>(
        field: LogicalField,
        record: &'a RawRecord,
    ) -> Option<(&'static str, &'a Value)> {
        field
            .aliases()
            .iter()
            .find_map(|alias| record.get(*alias).map(|value| (*alias, value)))
    }

    /// Short description of a value that failed to qualify, for diagnostics
    pub fn describe_value(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(text) if text.is_empty() => "an empty string",
            Value::String(_) => "a blank string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }

    /// Comma separated alias list, for diagnostics
    pub fn describe(field: LogicalField) -> String {
        field.aliases().join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(value: Value) -> RawRecord {
        match value {
            Value::Object(map) => map,
            _ => panic!("test record must be an object"),
        }
    }

    #[test]
    fn test_take_identifier_prefers_first_alias() {
        let mut raw = record(json!({"documentID": "D9", "assetID": "A1"}));

        let identifier = FieldAliases::take(LogicalField::Identifier, &mut raw);
        assert_eq!(identifier.as_deref(), Some("A1"));
        assert!(!raw.contains_key("assetID"));
        assert_eq!(raw["documentID"], "D9");
    }

    #[test]
    fn test_take_identifier_falls_back_to_later_alias() {
        let mut raw = record(json!({"pdfID": "P3", "owner": "Bob"}));
        assert_eq!(
            FieldAliases::take(LogicalField::Identifier, &mut raw).as_deref(),
            Some("P3")
        );
    }

    #[test]
    fn test_take_identifier_accepts_numbers() {
        let mut raw = record(json!({"assetID": 42}));
        assert_eq!(
            FieldAliases::take(LogicalField::Identifier, &mut raw).as_deref(),
            Some("42")
        );
    }

    #[test]
    fn test_take_skips_unqualified_values() {
        let mut raw = record(json!({"assetID": null, "documentID": "", "pdfID": "P1"}));

        let identifier = FieldAliases::take(LogicalField::Identifier, &mut raw);
        assert_eq!(identifier.as_deref(), Some("P1"));
        assert!(raw.contains_key("assetID"));
        assert!(raw.contains_key("documentID"));
    }

    #[test]
    fn test_take_link_does_not_accept_numbers() {
        let mut raw = record(json!({"link": 7}));
        assert_eq!(FieldAliases::take(LogicalField::ExternalLink, &mut raw), None);
        assert_eq!(raw["link"], 7);
    }

    #[test]
    fn test_take_missing_field() {
        let mut raw = record(json!({"color": "red"}));
        assert_eq!(FieldAliases::take(LogicalField::Owner, &mut raw), None);
        assert_eq!(raw.len(), 1);
    }

    #[test]
    fn test_take_rejects_whitespace_only_text() {
        let mut raw = record(json!({"assetID": "   "}));
        assert_eq!(FieldAliases::take(LogicalField::Identifier, &mut raw), None);
        assert_eq!(raw["assetID"], "   ");
    }

    #[test]
    fn test_first_present_ignores_qualification() {
        let raw = record(json!({"documentID": "", "pdfID": "P1"}));
        let (alias, value) = FieldAliases::first_present(LogicalField::Identifier, &raw).unwrap();
        assert_eq!(alias, "documentID");
        assert_eq!(FieldAliases::describe_value(value), "an empty string");

        let empty = record(json!({"color": "red"}));
        assert!(FieldAliases::first_present(LogicalField::Identifier, &empty).is_none());
    }

    #[test]
    fn test_describe() {
        assert_eq!(
            FieldAliases::describe(LogicalField::Identifier),
            "assetID, documentID, pdfID"
        );
        assert_eq!(
            FieldAliases::describe(LogicalField::ExternalLink),
            "link, documentLink"
        );
    }
}
