use crate::asset_retrieval::domain::{FetchResult, LicenseAsset};
use crate::asset_retrieval::services::{EnvelopeDecoder, RecordNormalizer};
use crate::ports::outbound::{AssetTransport, ProgressReporter, QueryEndpoint};
use crate::shared::error::AssetError;

/// QueryAssetUseCase - the query client
///
/// Issues one GET, decodes the envelope, normalizes the first record and
/// folds every outcome into a `FetchResult`. No error escapes this
/// boundary. There is no caching and no retry here; retries are driven by
/// the view's state machine.
///
/// # Type Parameters
/// * `T` - AssetTransport implementation
/// * `PR` - ProgressReporter implementation
pub struct QueryAssetUseCase<T, PR> {
    transport: T,
    progress_reporter: PR,
    decoder: EnvelopeDecoder,
}

impl<T, PR> QueryAssetUseCase<T, PR>
where
    T: AssetTransport,
    PR: ProgressReporter,
{
    /// Creates a new QueryAssetUseCase with injected dependencies
    pub fn new(transport: T, progress_reporter: PR, decoder: EnvelopeDecoder) -> Self {
        Self {
            transport,
            progress_reporter,
            decoder,
        }
    }

    pub fn progress_reporter(&self) -> &PR {
        &self.progress_reporter
    }

    /// Fetches the active asset from `endpoint`
    ///
    /// # Returns
    /// * `Success` with the first record, normalized
    /// * `Empty` when the service returned no records
    /// * `Failure` with the error text on transport, decode or schema errors
    pub async fn fetch_asset(&self, endpoint: &QueryEndpoint) -> FetchResult {
        match self.try_fetch(endpoint).await {
            Ok(asset) => FetchResult::Success(asset),
            Err(AssetError::EmptyResult) => {
                self.progress_reporter
                    .report(&format!("ℹ️  No records returned by {}", endpoint));
                FetchResult::Empty
            }
            Err(error) => {
                self.report_failure(endpoint, &error);
                FetchResult::Failure(error.to_string())
            }
        }
    }

    async fn try_fetch(&self, endpoint: &QueryEndpoint) -> Result<LicenseAsset, AssetError> {
        let body = self.transport.get(endpoint).await?;
        let records = self.decoder.decode(&body)?;

        let record_count = records.len();
        let first = records.into_iter().next().ok_or(AssetError::EmptyResult)?;
        if record_count > 1 {
            self.progress_reporter.report(&format!(
                "ℹ️  {} records returned; only the first is surfaced",
                record_count
            ));
        }

        RecordNormalizer::normalize(first)
    }

    fn report_failure(&self, endpoint: &QueryEndpoint, error: &AssetError) {
        let kind = match error {
            AssetError::Transport { .. } => "Transport error",
            AssetError::Decode { .. } => "Decode error",
            AssetError::Schema { .. } | AssetError::UnusableIdentifier { .. } => "Schema error",
            _ => "Error",
        };
        self.progress_reporter.report_error(&format!(
            "⚠️  {} while querying {}: {}",
            kind, endpoint, error
        ));
    }
}
