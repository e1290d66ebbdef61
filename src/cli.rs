use clap::Parser;
use ledger_license_export::config::Overrides;

/// Download a copy of your license agreement from the ledger query service
#[derive(Parser, Debug)]
#[command(name = "ledger-license-export")]
#[command(version)]
#[command(about = "Download a copy of your license agreement from the ledger query service", long_about = None)]
pub struct Args {
    /// Base URL of the query gateway (default: http://localhost:3000)
    #[arg(short, long)]
    pub base_url: Option<String>,

    /// Channel to query (default: mychannel)
    #[arg(long = "channel")]
    pub channel_id: Option<String>,

    /// Chaincode to query (default: basic)
    #[arg(long = "chaincode")]
    pub chaincode_id: Option<String>,

    /// Chaincode function to invoke (default: GetAllAssets)
    #[arg(long)]
    pub function: Option<String>,

    /// Directory to save the agreement into (if not specified, outputs to stdout)
    #[arg(short, long)]
    pub output_dir: Option<String>,

    /// Number of retries after a failed fetch
    #[arg(short, long)]
    pub retries: Option<u32>,

    /// Request timeout in seconds
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,

    /// Path to a config file (defaults to ./ledger-license-export.config.yml if present)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Only fetch and show the agreement; do not export it
    #[arg(long)]
    pub no_export: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Flag values that override the config file
    pub fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            channel_id: self.channel_id.clone(),
            chaincode_id: self.chaincode_id.clone(),
            function: self.function.clone(),
            timeout_secs: self.timeout,
            output_dir: self.output_dir.clone(),
            retries: self.retries,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["ledger-license-export"]).unwrap();
        assert!(args.base_url.is_none());
        assert!(args.output_dir.is_none());
        assert!(!args.no_export);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "ledger-license-export",
            "--base-url",
            "http://gateway:3000",
            "--channel",
            "licensing",
            "--chaincode",
            "agreements",
            "--function",
            "ReadAsset",
            "-o",
            "out",
            "-r",
            "2",
            "-t",
            "5",
            "--no-export",
        ])
        .unwrap();

        let overrides = args.overrides();
        assert_eq!(overrides.base_url.as_deref(), Some("http://gateway:3000"));
        assert_eq!(overrides.channel_id.as_deref(), Some("licensing"));
        assert_eq!(overrides.chaincode_id.as_deref(), Some("agreements"));
        assert_eq!(overrides.function.as_deref(), Some("ReadAsset"));
        assert_eq!(overrides.output_dir.as_deref(), Some("out"));
        assert_eq!(overrides.retries, Some(2));
        assert_eq!(overrides.timeout_secs, Some(5));
        assert!(args.no_export);
    }

    #[test]
    fn test_parse_rejects_zero_timeout() {
        assert!(Args::try_parse_from(["ledger-license-export", "-t", "0"]).is_err());
    }

    #[test]
    fn test_parse_rejects_non_numeric_retries() {
        assert!(Args::try_parse_from(["ledger-license-export", "-r", "many"]).is_err());
    }
}
