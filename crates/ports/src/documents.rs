// crates/ports/src/documents.rs
use std::path::Path;

use toolchain_shared_kernel::Result;

/// Port for the text files the case loader reads and the fragment emitter writes.
pub trait DocumentStore {
    /// Whether `path` names an existing regular file.
    fn is_file(&self, path: &Path) -> bool;

    fn read_text(&self, path: &Path) -> Result<String>;

    /// Current content of `path`, or `None` when nothing is there yet.
    fn read_existing(&self, path: &Path) -> Result<Option<String>>;

    /// Replace the content of `path`, creating missing parent directories.
    fn write_text(&self, path: &Path, contents: &str) -> Result<()>;
}
