/// Filesystem adapters for artifact delivery
mod artifact_writer;

pub use artifact_writer::{ArtifactFileWriter, StdoutPresenter};
