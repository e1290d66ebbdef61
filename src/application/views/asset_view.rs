use crate::application::read_models::DownloadAffordance;
use crate::application::use_cases::{ExportArtifactUseCase, QueryAssetUseCase};
use crate::asset_retrieval::domain::{ArtifactRef, FetchState, FetchTicket};
use crate::asset_retrieval::services::FetchStateMachine;
use crate::ports::inbound::AssetViewPort;
use crate::ports::outbound::{ArtifactStore, AssetTransport, ProgressReporter, QueryEndpoint};
use crate::shared::error::AssetError;
use async_trait::async_trait;
use std::cell::RefCell;

/// AssetView - one active download view
///
/// Binds the fetch state machine to the query client and the exporter.
/// A view lives on a single cooperative task: the transport call is the
/// only await point, and the state machine is never borrowed across it.
/// That is what lets a retry issued mid-flight see `Loading` and back off,
/// and lets an unmount mid-flight drop the late result.
///
/// # Type Parameters
/// * `T` - AssetTransport implementation
/// * `PR` - ProgressReporter implementation
/// * `S` - ArtifactStore implementation
pub struct AssetView<T, PR, S>
where
    S: ArtifactStore,
{
    endpoint: QueryEndpoint,
    query: QueryAssetUseCase<T, PR>,
    exporter: ExportArtifactUseCase<S>,
    machine: RefCell<FetchStateMachine>,
}

impl<T, PR, S> AssetView<T, PR, S>
where
    T: AssetTransport,
    PR: ProgressReporter,
    S: ArtifactStore,
{
    /// Creates an inactive view. Nothing is fetched until `activate`.
    pub fn new(
        endpoint: QueryEndpoint,
        query: QueryAssetUseCase<T, PR>,
        exporter: ExportArtifactUseCase<S>,
    ) -> Self {
        Self {
            endpoint,
            query,
            exporter,
            machine: RefCell::new(FetchStateMachine::new()),
        }
    }

    pub fn exporter(&self) -> &ExportArtifactUseCase<S> {
        &self.exporter
    }

    /// Read model for the download control
    pub fn affordance(&self) -> DownloadAffordance {
        DownloadAffordance::from_state(self.machine.borrow().state())
    }

    async fn run(&self, ticket: Option<FetchTicket>) -> bool {
        let Some(ticket) = ticket else {
            return false;
        };

        let reporter = self.query.progress_reporter();
        reporter.report_waiting(&format!("🔍 Querying {}", self.endpoint));

        let result = self.query.fetch_asset(&self.endpoint).await;

        let applied = self.machine.borrow_mut().complete(ticket, result);
        if applied {
            reporter.report_completion(&format!(
                "✅ Fetch finished: {}",
                self.machine.borrow().state().name()
            ));
        } else {
            reporter.report("ℹ️  Discarded a query result that no longer applies");
        }
        true
    }
}

#[async_trait(?Send)]
impl<T, PR, S> AssetViewPort for AssetView<T, PR, S>
where
    T: AssetTransport,
    PR: ProgressReporter,
    S: ArtifactStore,
{
    async fn activate(&self) -> bool {
        let ticket = self.machine.borrow_mut().start();
        self.run(ticket).await
    }

    async fn retry(&self) -> bool {
        let ticket = self.machine.borrow_mut().retry();
        self.run(ticket).await
    }

    async fn refetch(&self) -> bool {
        let ticket = self.machine.borrow_mut().refetch();
        self.run(ticket).await
    }

    fn state(&self) -> FetchState {
        self.machine.borrow().state().clone()
    }

    fn export_artifact(&self) -> Result<ArtifactRef, AssetError> {
        let machine = self.machine.borrow();
        if machine.is_disposed() {
            return Err(AssetError::ArtifactUnavailable {
                reason: "the view has been unmounted".to_string(),
            });
        }

        match machine.state() {
            FetchState::Success(Some(asset)) => self.exporter.export(asset),
            FetchState::Success(None) => Err(AssetError::ArtifactUnavailable {
                reason: "no agreement available".to_string(),
            }),
            FetchState::Error(message) => Err(AssetError::ArtifactUnavailable {
                reason: format!("the last fetch failed: {}", message),
            }),
            FetchState::Idle | FetchState::Loading => Err(AssetError::ArtifactUnavailable {
                reason: "the agreement is still loading".to_string(),
            }),
        }
    }

    fn unmount(&self) {
        self.machine.borrow_mut().dispose();
        self.exporter.release();
    }
}

impl<T, PR, S> Drop for AssetView<T, PR, S>
where
    S: ArtifactStore,
{
    fn drop(&mut self) {
        self.exporter.release();
    }
}
