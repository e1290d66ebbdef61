mod artifact_exporter;
mod envelope_decoder;
mod fetch_state_machine;
mod record_normalizer;

pub use artifact_exporter::ArtifactExporter;
pub use envelope_decoder::{DecodeStrategy, EnvelopeDecoder, DEFAULT_ENVELOPE_PREFIX};
pub use fetch_state_machine::FetchStateMachine;
pub use record_normalizer::RecordNormalizer;
