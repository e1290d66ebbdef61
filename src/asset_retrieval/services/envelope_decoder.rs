use crate::asset_retrieval::domain::RawRecord;
use crate::shared::error::AssetError;
use serde_json::Value;

/// Marker some deployments put in front of the serialized record list
pub const DEFAULT_ENVELOPE_PREFIX: &str = "Response: ";

/// Maximum number of characters of a rejected body kept for diagnostics
const SNIPPET_LIMIT: usize = 120;

/// One way of reading a response body as a record list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeStrategy {
    /// The body is a JSON array of objects
    RawArray,
    /// The body is text, possibly a JSON string literal, holding one of
    /// `prefixes` followed by a JSON array
    PrefixedString { prefixes: Vec<String> },
}

impl DecodeStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            DecodeStrategy::RawArray => "raw-array",
            DecodeStrategy::PrefixedString { .. } => "prefixed-string",
        }
    }

    /// Attempts this strategy, returning a short reason on mismatch
    pub fn decode(&self, body: &str) -> Result<Vec<RawRecord>, String> {
        match self {
            DecodeStrategy::RawArray => {
                let value: Value = serde_json::from_str(body.trim()).map_err(|e| e.to_string())?;
                records_from_value(value)
            }
            DecodeStrategy::PrefixedString { prefixes } => {
                // A JSON client sees a string-typed response as a quoted literal;
                // a plain text response arrives as-is.
                let (text, quoted) = match serde_json::from_str::<Value>(body.trim()) {
                    Ok(Value::String(inner)) => (inner, true),
                    _ => (body.trim_start().to_string(), false),
                };

                let stripped = prefixes
                    .iter()
                    .find_map(|prefix| text.strip_prefix(prefix.as_str()));

                let payload = match stripped {
                    Some(rest) => rest,
                    None if quoted => text.as_str(),
                    None => return Err("no known envelope prefix".to_string()),
                };

                let value: Value =
                    serde_json::from_str(payload.trim()).map_err(|e| e.to_string())?;
                records_from_value(value)
            }
        }
    }
}

/// EnvelopeDecoder - turns a response body into raw records
///
/// The upstream service changed its wire format between deployments without
/// a version flag, so strategies are tried in order until one matches.
#[derive(Debug, Clone)]
pub struct EnvelopeDecoder {
    strategies: Vec<DecodeStrategy>,
}

impl EnvelopeDecoder {
    /// Raw array first, then the `"Response: "` prefixed string
    pub fn new() -> Self {
        Self::with_prefixes(vec![DEFAULT_ENVELOPE_PREFIX.to_string()])
    }

    pub fn with_prefixes(prefixes: Vec<String>) -> Self {
        Self::with_strategies(vec![
            DecodeStrategy::RawArray,
            DecodeStrategy::PrefixedString { prefixes },
        ])
    }

    pub fn with_strategies(strategies: Vec<DecodeStrategy>) -> Self {
        Self { strategies }
    }

    /// Decodes `body` with the first strategy that accepts it
    ///
    /// # Errors
    /// Returns `AssetError::Decode` carrying a truncated snippet of the body
    /// and each strategy's rejection reason when none matches.
    pub fn decode(&self, body: &str) -> Result<Vec<RawRecord>, AssetError> {
        let mut rejections = Vec::with_capacity(self.strategies.len());

        for strategy in &self.strategies {
            match strategy.decode(body) {
                Ok(records) => return Ok(records),
                Err(reason) => rejections.push(format!("{}: {}", strategy.name(), reason)),
            }
        }

        Err(AssetError::Decode {
            snippet: truncate_snippet(body),
            details: rejections.join("; "),
        })
    }
}

impl Default for EnvelopeDecoder {
    fn default() -> Self {
        Self::new()
    }
}

fn records_from_value(value: Value) -> Result<Vec<RawRecord>, String> {
    let items = match value {
        Value::Array(items) => items,
        other => return Err(format!("expected a JSON array, found {}", kind_of(&other))),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(map) => Ok(map),
            other => Err(format!(
                "element {} is {}, not an object",
                index,
                kind_of(&other)
            )),
        })
        .collect()
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Shortens a body for log output, cutting on a char boundary
pub(crate) fn truncate_snippet(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(SNIPPET_LIMIT) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}
