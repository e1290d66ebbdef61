use crate::asset_retrieval::domain::{FetchResult, FetchState, FetchTicket};

/// FetchStateMachine - lifecycle of one view's fetch
///
/// ```text
/// Idle ──start──▶ Loading ──Success/Empty──▶ Success ──refetch──▶ Loading
///                   │  ▲
///             Failure  └──retry── Error
///                   ▼
///                 Error
/// ```
///
/// Entering `Loading` hands out a `FetchTicket`; only the current ticket may
/// complete the fetch. Requests that would re-enter `Loading` while already
/// loading are ignored, so at most one query is ever in flight. After
/// `dispose` every transition is ignored.
#[derive(Debug, Default)]
pub struct FetchStateMachine {
    state: FetchState,
    generation: u64,
    disposed: bool,
}

impl FetchStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// `Idle → Loading`
    pub fn start(&mut self) -> Option<FetchTicket> {
        match self.state {
            FetchState::Idle => self.enter_loading(),
            _ => None,
        }
    }

    /// `Error → Loading`
    pub fn retry(&mut self) -> Option<FetchTicket> {
        match self.state {
            FetchState::Error(_) => self.enter_loading(),
            _ => None,
        }
    }

    /// `Success → Loading`, the explicit re-fetch
    pub fn refetch(&mut self) -> Option<FetchTicket> {
        match self.state {
            FetchState::Success(_) => self.enter_loading(),
            _ => None,
        }
    }

    /// Applies the query outcome for `ticket`.
    ///
    /// Returns `false` when the outcome was discarded: stale ticket, not
    /// loading, disposed, or a `Pending` result.
    pub fn complete(&mut self, ticket: FetchTicket, result: FetchResult) -> bool {
        if self.disposed
            || !self.state.is_loading()
            || ticket.generation() != self.generation
        {
            return false;
        }

        self.state = match result {
            FetchResult::Pending => return false,
            FetchResult::Success(asset) => FetchState::Success(Some(asset)),
            FetchResult::Empty => FetchState::Success(None),
            FetchResult::Failure(reason) => FetchState::Error(reason),
        };
        true
    }

    /// Marks the owning view as gone. Later completions are dropped.
    pub fn dispose(&mut self) {
        self.disposed = true;
    }

    fn enter_loading(&mut self) -> Option<FetchTicket> {
        if self.disposed {
            return None;
        }
        self.generation += 1;
        self.state = FetchState::Loading;
        Some(FetchTicket::new(self.generation))
    }
}
