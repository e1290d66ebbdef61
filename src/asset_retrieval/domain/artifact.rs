use chrono::{DateTime, Utc};
use serde::Serialize;

/// What the exporter decided to hand over for an asset
#[derive(Debug, Clone, PartialEq)]
pub enum ArtifactPayload {
    /// The record already points at a hosted document
    ExternalLink(String),
    /// A document synthesized from the record, still to be stored
    Document(ArtifactBlob),
}

/// In-memory file content waiting for an ephemeral reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactBlob {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ArtifactBlob {
    pub fn new(filename: String, content_type: &str, bytes: Vec<u8>) -> Self {
        Self {
            filename,
            content_type: content_type.to_string(),
            bytes,
        }
    }
}

/// A session-scoped reference to a stored blob
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalArtifact {
    pub uri: String,
    /// Suggested download filename
    pub filename: String,
    pub content_type: String,
    pub size_bytes: usize,
    pub created_at: DateTime<Utc>,
}

/// Deliverable handed to the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArtifactRef {
    External { uri: String },
    Local(LocalArtifact),
}

impl ArtifactRef {
    /// The URI the presentation layer turns into a download action
    pub fn uri(&self) -> &str {
        match self {
            ArtifactRef::External { uri } => uri,
            ArtifactRef::Local(local) => &local.uri,
        }
    }

    pub fn is_local(&self) -> bool {
        matches!(self, ArtifactRef::Local(_))
    }
}
