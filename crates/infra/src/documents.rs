// crates/infra/src/documents.rs
use std::path::Path;

use toolchain_ports::documents::DocumentStore;
use toolchain_shared_kernel::{InfrastructureError, Result};
use tracing::debug;

use crate::persistence::{FileReader, FileWriter};

/// `DocumentStore` backed by the local filesystem.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsDocumentStore;

impl FsDocumentStore {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentStore for FsDocumentStore {
    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn read_text(&self, path: &Path) -> Result<String> {
        std::fs::read_to_string(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source }.into())
    }

    fn read_existing(&self, path: &Path) -> Result<Option<String>> {
        let bytes = FileReader::read_if_exists(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source })?;
        // Content that is not UTF-8 can never equal a composed fragment; report it as
        // absent so callers rewrite it.
        Ok(bytes.and_then(|b| String::from_utf8(b).ok()))
    }

    fn write_text(&self, path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            FileWriter::ensure_dir(parent)
                .map_err(|source| InfrastructureError::CreateDir { path: parent.to_path_buf(), source })?;
        }
        FileWriter::atomic_write(path, contents.as_bytes())
            .map_err(|source| InfrastructureError::FileWrite { path: path.to_path_buf(), source })?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote document");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn read_existing_distinguishes_absent_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("case.fpp");
        let store = FsDocumentStore::new();

        assert_eq!(store.read_existing(&path).unwrap(), None);
        fs::write(&path, "#:set CODE=\"simulation\"\n").unwrap();
        assert_eq!(store.read_existing(&path).unwrap().as_deref(), Some("#:set CODE=\"simulation\"\n"));
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("src").join("common").join("case.fpp");
        let store = FsDocumentStore::new();

        store.write_text(&path, "content\n").unwrap();
        assert!(store.is_file(&path));
        assert_eq!(store.read_text(&path).unwrap(), "content\n");
    }

    #[test]
    fn directories_are_not_files() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!FsDocumentStore::new().is_file(dir.path()));
    }

    #[test]
    fn read_failures_name_the_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.json");
        let err = FsDocumentStore::new().read_text(&missing).unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
