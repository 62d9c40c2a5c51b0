// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use toolchain_shared_kernel::Result;

/// Port for listing and reading the source files of a directory.
pub trait SourceTree {
    /// Source-like files directly inside `dir`, sorted by path.
    ///
    /// A missing directory yields an empty list rather than an error.
    fn source_files(&self, dir: &Path) -> Result<Vec<PathBuf>>;

    /// Full text of a source file.
    fn read_source(&self, path: &Path) -> Result<String>;
}
