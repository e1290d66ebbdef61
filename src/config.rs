//! Configuration file support for ledger-license-export.
//!
//! Provides YAML-based configuration through `ledger-license-export.config.yml`
//! files, including data structures, file loading, validation and merging
//! with command-line overrides.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::outbound::network::DEFAULT_TIMEOUT_SECS;
use crate::asset_retrieval::services::DEFAULT_ENVELOPE_PREFIX;
use crate::ports::outbound::QueryEndpoint;
use crate::shared::security::{validate_file_size, validate_not_symlink, MAX_CONFIG_FILE_SIZE};
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "ledger-license-export.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub base_url: Option<String>,
    pub channel_id: Option<String>,
    pub chaincode_id: Option<String>,
    pub function: Option<String>,
    pub timeout_secs: Option<u64>,
    pub envelope_prefixes: Option<Vec<String>>,
    pub output_dir: Option<String>,
    pub retries: Option<u32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_not_symlink(path, "read").with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let metadata = std::fs::metadata(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    validate_file_size(metadata.len(), path, MAX_CONFIG_FILE_SIZE)?;

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref prefixes) = config.envelope_prefixes {
        for (i, prefix) in prefixes.iter().enumerate() {
            if prefix.is_empty() {
                bail!(
                    "Invalid config: envelope_prefixes[{}] must not be empty.\n\n\
                     💡 Hint: List the literal text that precedes the record array (e.g., \"Response: \").",
                    i
                );
            }
        }
    }

    if config.timeout_secs == Some(0) {
        bail!("Invalid config: timeout_secs must be greater than 0.");
    }

    if let Some(ref base_url) = config.base_url {
        if !has_http_scheme(base_url) {
            bail!(
                "Invalid config: base_url must start with http:// or https:// (got '{}').",
                base_url
            );
        }
    }

    Ok(())
}

fn has_http_scheme(base_url: &str) -> bool {
    base_url.starts_with("http://") || base_url.starts_with("https://")
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Values given on the command line; they win over the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub channel_id: Option<String>,
    pub chaincode_id: Option<String>,
    pub function: Option<String>,
    pub timeout_secs: Option<u64>,
    pub output_dir: Option<String>,
    pub retries: Option<u32>,
}

/// Effective settings after merging flags, config file and defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub endpoint: QueryEndpoint,
    pub timeout: Duration,
    pub envelope_prefixes: Vec<String>,
    pub output_dir: Option<PathBuf>,
    pub retries: u32,
}

impl Settings {
    /// Precedence: command line, then config file, then built-in defaults.
    pub fn resolve(overrides: Overrides, config: ConfigFile) -> Self {
        let defaults = QueryEndpoint::default();

        let endpoint = QueryEndpoint::new(
            overrides
                .base_url
                .or(config.base_url)
                .unwrap_or(defaults.base_url),
            overrides
                .channel_id
                .or(config.channel_id)
                .unwrap_or(defaults.channel_id),
            overrides
                .chaincode_id
                .or(config.chaincode_id)
                .unwrap_or(defaults.chaincode_id),
            overrides
                .function
                .or(config.function)
                .unwrap_or(defaults.function),
        );

        let timeout_secs = overrides
            .timeout_secs
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Self {
            endpoint,
            timeout: Duration::from_secs(timeout_secs),
            envelope_prefixes: config
                .envelope_prefixes
                .unwrap_or_else(|| vec![DEFAULT_ENVELOPE_PREFIX.to_string()]),
            output_dir: overrides.output_dir.or(config.output_dir).map(PathBuf::from),
            retries: overrides.retries.or(config.retries).unwrap_or(0),
        }
    }

    /// Checks values that may have bypassed config file validation.
    pub fn validate(&self) -> Result<()> {
        if !has_http_scheme(&self.endpoint.base_url) {
            bail!(
                "Invalid base URL: must start with http:// or https:// (got '{}').\n\n\
                 💡 Hint: Pass a full URL such as --base-url http://localhost:3000",
                self.endpoint.base_url
            );
        }
        Ok(())
    }
}
