//! File export

use std::path::{Path, PathBuf};

use dialgen_core::prelude::*;

/// Write exported text to a file and report where it landed
#[trait_variant::make(Exporter: Send)]
pub trait LocalExporter {
    async fn export(&self, directory: &Path, file_name: &str, content: &str) -> Result<PathBuf>;
}

/// Exporter writing UTF-8 files with `tokio::fs`
#[derive(Debug, Clone, Default)]
pub struct FsExporter;

impl FsExporter {
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for FsExporter {
    async fn export(&self, directory: &Path, file_name: &str, content: &str) -> Result<PathBuf> {
        tokio::fs::create_dir_all(directory)
            .await
            .map_err(|e| Error::export(format!("cannot create {}: {}", directory.display(), e)))?;

        let path = directory.join(file_name);
        tokio::fs::write(&path, content)
            .await
            .map_err(|e| Error::export(format!("cannot write {}: {}", path.display(), e)))?;

        debug!("Wrote {} bytes to {}", content.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_export_writes_file() {
        let temp = tempdir().unwrap();
        let path = Exporter::export(
            &FsExporter::new(),
            temp.path(),
            "Japan_2_1.txt",
            "+81 90 1234 5678\n+81 80 1234 5678",
        )
        .await
        .unwrap();

        assert_eq!(path, temp.path().join("Japan_2_1.txt"));
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "+81 90 1234 5678\n+81 80 1234 5678");
    }

    #[tokio::test]
    async fn test_export_creates_directory() {
        let temp = tempdir().unwrap();
        let dir = temp.path().join("a").join("b");
        let path = Exporter::export(&FsExporter::new(), &dir, "x.txt", "1")
            .await
            .unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_export_into_file_path_fails() {
        let temp = tempdir().unwrap();
        let blocker = temp.path().join("blocker");
        std::fs::write(&blocker, "").unwrap();

        let result = Exporter::export(&FsExporter::new(), &blocker, "x.txt", "1").await;
        assert!(matches!(result, Err(Error::Export { .. })));
    }
}
