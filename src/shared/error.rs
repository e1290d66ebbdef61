use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts tell an unavailable agreement apart from a
/// failed fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Artifact delivered (or fetch succeeded when export was skipped)
    Success = 0,
    /// The service answered with zero records
    AgreementUnavailable = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (fetch ended in the error state, config or file I/O failure)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::AgreementUnavailable => write!(f, "Agreement Unavailable (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while retrieving and exporting a license asset.
///
/// The first five variants form the retrieval taxonomy. They never escape
/// the query client: it folds them into a `FetchResult`.
#[derive(Debug, Error)]
pub enum AssetError {
    /// Network or connection failure. Displays the transport text unchanged.
    #[error("{message}")]
    Transport { endpoint: String, message: String },

    #[error("Response body matches no known envelope: {details}\nBody: {snippet}")]
    Decode { snippet: String, details: String },

    #[error("Record has no recognized identifier field (expected one of: {expected})\nKeys present: {present}")]
    Schema { expected: String, present: String },

    #[error("Identifier field '{alias}' is present but holds {found} (expected non-blank text or a number)")]
    UnusableIdentifier { alias: String, found: String },

    #[error("The query service returned no records")]
    EmptyResult,

    #[error("No artifact available: {reason}")]
    ArtifactUnavailable { reason: String },

    #[error("Failed to write artifact: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    ArtifactWrite { path: PathBuf, details: String },

    /// Validation error for configuration and value objects
    #[error("Validation error: {message}")]
    Validation { message: String },
}
