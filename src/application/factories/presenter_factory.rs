use crate::adapters::outbound::filesystem::{ArtifactFileWriter, StdoutPresenter};
use crate::ports::outbound::ArtifactPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    Stdout,
    Directory(PathBuf),
}

impl PresenterType {
    /// Directory delivery when an output directory is configured, stdout otherwise
    pub fn for_output_dir(output_dir: Option<PathBuf>) -> Self {
        output_dir.map_or(PresenterType::Stdout, PresenterType::Directory)
    }
}

/// Factory for creating artifact presenters
///
/// This factory encapsulates the creation logic for different presenter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use ledger_license_export::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::Stdout);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn ArtifactPresenter> {
        match presenter_type {
            PresenterType::Stdout => Box::new(StdoutPresenter::new()),
            PresenterType::Directory(path) => Box::new(ArtifactFileWriter::new(path)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_output_dir() {
        assert_eq!(PresenterType::for_output_dir(None), PresenterType::Stdout);
        assert_eq!(
            PresenterType::for_output_dir(Some(PathBuf::from("out"))),
            PresenterType::Directory(PathBuf::from("out"))
        );
    }

    #[test]
    fn test_create_presenters() {
        let stdout = PresenterFactory::create(PresenterType::Stdout);
        assert!(std::mem::size_of_val(&stdout) > 0);

        let directory = PresenterFactory::create(PresenterType::Directory(PathBuf::from("/tmp")));
        assert!(std::mem::size_of_val(&directory) > 0);
    }
}
