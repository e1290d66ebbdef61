use super::LicenseAsset;

/// Outcome of one query against the ledger service
#[derive(Debug, Clone, PartialEq)]
pub enum FetchResult {
    /// No answer yet
    Pending,
    Success(LicenseAsset),
    /// The service answered with a well-formed, empty record list
    Empty,
    /// Transport, decode or schema failure, carrying the user-facing reason
    Failure(String),
}

impl FetchResult {
    pub fn is_failure(&self) -> bool {
        matches!(self, FetchResult::Failure(_))
    }
}

/// Lifecycle state of a view's fetch, as seen by the presentation layer
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchState {
    #[default]
    Idle,
    Loading,
    /// `None` is the empty outcome: fetched fine, nothing to export
    Success(Option<LicenseAsset>),
    Error(String),
}

impl FetchState {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    /// The active asset, only present after a successful, non-empty fetch
    pub fn asset(&self) -> Option<&LicenseAsset> {
        match self {
            FetchState::Success(asset) => asset.as_ref(),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            FetchState::Idle => "idle",
            FetchState::Loading => "loading",
            FetchState::Success(_) => "success",
            FetchState::Error(_) => "error",
        }
    }
}

/// Identifies one transition into `Loading`.
///
/// A completion carrying an outdated ticket belongs to a query the view no
/// longer waits for and is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FetchTicket(u64);

impl FetchTicket {
    pub(crate) fn new(generation: u64) -> Self {
        Self(generation)
    }

    pub fn generation(&self) -> u64 {
        self.0
    }
}
