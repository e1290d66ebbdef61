/// In-process adapters holding session-scoped state
mod session_artifact_store;

pub use session_artifact_store::SessionArtifactStore;
