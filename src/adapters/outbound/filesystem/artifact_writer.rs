use crate::asset_retrieval::domain::{ArtifactBlob, ArtifactRef};
use crate::ports::outbound::ArtifactPresenter;
use crate::shared::error::AssetError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// ArtifactFileWriter adapter for saving artifacts into a directory
///
/// This adapter implements the ArtifactPresenter port for file output.
/// A local artifact is written under its suggested filename; an external
/// link has nothing to materialize and is printed to stdout instead.
pub struct ArtifactFileWriter {
    output_dir: PathBuf,
}

impl ArtifactFileWriter {
    pub fn new(output_dir: PathBuf) -> Self {
        Self { output_dir }
    }

    fn write_error(path: &Path, details: String) -> anyhow::Error {
        AssetError::ArtifactWrite {
            path: path.to_path_buf(),
            details,
        }
        .into()
    }

    /// Security validation before writing:
    /// - The output directory must exist and be a directory
    /// - Neither the directory nor an existing target may be a symlink
    fn validate_target(&self, target: &Path) -> Result<()> {
        if !self.output_dir.is_dir() {
            return Err(Self::write_error(
                target,
                format!(
                    "Output directory does not exist: {}",
                    self.output_dir.display()
                ),
            ));
        }

        validate_not_symlink(&self.output_dir, "write")
            .map_err(|e| Self::write_error(target, e.to_string()))?;

        if target.exists() {
            validate_not_symlink(target, "write")
                .map_err(|e| Self::write_error(target, e.to_string()))?;
        }

        Ok(())
    }
}

impl ArtifactPresenter for ArtifactFileWriter {
    fn present(&self, artifact: &ArtifactRef, content: Option<&ArtifactBlob>) -> Result<()> {
        let local = match artifact {
            ArtifactRef::External { uri } => {
                println!("{}", uri);
                eprintln!("🔗 Agreement is hosted externally: {}", uri);
                return Ok(());
            }
            ArtifactRef::Local(local) => local,
        };

        let target = self.output_dir.join(&local.filename);
        let blob = content.ok_or_else(|| {
            Self::write_error(
                &target,
                format!("No content available for {}", local.uri),
            )
        })?;

        self.validate_target(&target)?;

        fs::write(&target, &blob.bytes).map_err(|e| Self::write_error(&target, e.to_string()))?;

        eprintln!("✅ Agreement saved: {}", target.display());
        Ok(())
    }
}

/// StdoutPresenter adapter for writing artifacts to stdout
///
/// Prints the document body of a local artifact, or the link of an
/// external one.
pub struct StdoutPresenter;

impl StdoutPresenter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for StdoutPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl ArtifactPresenter for StdoutPresenter {
    fn present(&self, artifact: &ArtifactRef, content: Option<&ArtifactBlob>) -> Result<()> {
        let bytes = match (artifact, content) {
            (ArtifactRef::External { uri }, _) => format!("{}\n", uri).into_bytes(),
            (ArtifactRef::Local(_), Some(blob)) => blob.bytes.clone(),
            (ArtifactRef::Local(local), None) => {
                anyhow::bail!("No content available for {}", local.uri)
            }
        };

        io::stdout()
            .write_all(&bytes)
            .map_err(|e| anyhow::anyhow!("Failed to write to stdout: {}", e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset_retrieval::domain::LocalArtifact;
    use chrono::Utc;
    use tempfile::TempDir;

    fn local_artifact() -> (ArtifactRef, ArtifactBlob) {
        let blob = ArtifactBlob::new(
            "asset_A1.json".to_string(),
            "application/json",
            br#"{"identifier":"A1"}"#.to_vec(),
        );
        let artifact = ArtifactRef::Local(LocalArtifact {
            uri: "blob:test/1".to_string(),
            filename: blob.filename.clone(),
            content_type: blob.content_type.clone(),
            size_bytes: blob.bytes.len(),
            created_at: Utc::now(),
        });
        (artifact, blob)
    }

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let (artifact, blob) = local_artifact();

        let writer = ArtifactFileWriter::new(temp_dir.path().to_path_buf());
        writer.present(&artifact, Some(&blob)).unwrap();

        let written = fs::read(temp_dir.path().join("asset_A1.json")).unwrap();
        assert_eq!(written, blob.bytes);
    }

    #[test]
    fn test_file_writer_missing_directory() {
        let (artifact, blob) = local_artifact();

        let writer = ArtifactFileWriter::new(PathBuf::from("/nonexistent/directory"));
        let result = writer.present(&artifact, Some(&blob));

        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Output directory does not exist"));
    }

    #[test]
    fn test_file_writer_requires_content() {
        let temp_dir = TempDir::new().unwrap();
        let (artifact, _) = local_artifact();

        let writer = ArtifactFileWriter::new(temp_dir.path().to_path_buf());
        let result = writer.present(&artifact, None);
        assert!(format!("{}", result.unwrap_err()).contains("No content available"));
    }

    #[test]
    fn test_file_writer_external_link_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let writer = ArtifactFileWriter::new(temp_dir.path().to_path_buf());

        let artifact = ArtifactRef::External {
            uri: "https://x/doc.pdf".to_string(),
        };
        writer.present(&artifact, None).unwrap();
        assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink_target() {
        let temp_dir = TempDir::new().unwrap();
        let real = temp_dir.path().join("real.json");
        fs::write(&real, "old").unwrap();
        std::os::unix::fs::symlink(&real, temp_dir.path().join("asset_A1.json")).unwrap();
        let (artifact, blob) = local_artifact();

        let writer = ArtifactFileWriter::new(temp_dir.path().to_path_buf());
        let result = writer.present(&artifact, Some(&blob));

        assert!(format!("{}", result.unwrap_err()).contains("symbolic link"));
        assert_eq!(fs::read_to_string(&real).unwrap(), "old");
    }

    #[test]
    fn test_stdout_presenter_success() {
        let presenter = StdoutPresenter::new();
        let (artifact, blob) = local_artifact();
        assert!(presenter.present(&artifact, Some(&blob)).is_ok());
        assert!(presenter.present(&artifact, None).is_err());
    }
}
