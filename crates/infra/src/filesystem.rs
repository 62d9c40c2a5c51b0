// crates/infra/src/filesystem.rs
use std::{
    fs,
    path::{Path, PathBuf},
};

use globset::{Glob, GlobMatcher};
use ignore::{DirEntry, WalkBuilder};
use toolchain_ports::filesystem::SourceTree;
use toolchain_shared_kernel::{InfraResult, InfrastructureError, Result};
use tracing::{debug, warn};

use crate::persistence::FileReader;

/// File names with an extension containing an `f` (`.f90`, `.fpp`, `.f`, ...).
pub const DEFAULT_SOURCE_PATTERN: &str = "*.*f*";

/// Filesystem adapter implementing the `SourceTree` port.
///
/// Only the immediate, non-hidden files of a directory are considered; a file is a
/// source when its name matches the configured glob.
#[derive(Debug, Clone)]
pub struct GlobSourceTree {
    matcher: GlobMatcher,
}

impl GlobSourceTree {
    pub fn new(pattern: &str) -> InfraResult<Self> {
        let glob = Glob::new(pattern).map_err(|err| InfrastructureError::InvalidPattern {
            pattern: pattern.to_string(),
            details: err.to_string(),
        })?;
        Ok(Self { matcher: glob.compile_matcher() })
    }

    pub fn pattern(&self) -> &str {
        self.matcher.glob().glob()
    }

    fn matches_name(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.matcher.is_match(Path::new(name)))
    }

    /// Regular files count, and so do links to them. A dangling link that matches the
    /// pattern is kept so reading it reports the broken path.
    fn is_source_entry(entry: &DirEntry) -> bool {
        match entry.file_type() {
            Some(kind) if kind.is_file() => true,
            Some(kind) if kind.is_symlink() => match fs::metadata(entry.path()) {
                Ok(meta) => meta.is_file(),
                Err(err) => {
                    warn!(path = %entry.path().display(), error = %err, "source link does not resolve");
                    true
                }
            },
            _ => false,
        }
    }
}

impl SourceTree for GlobSourceTree {
    fn source_files(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        if !dir.is_dir() {
            debug!(dir = %dir.display(), "directory missing, nothing to count");
            return Ok(Vec::new());
        }

        let walker = WalkBuilder::new(dir)
            .standard_filters(false)
            .hidden(true)
            .follow_links(false)
            .max_depth(Some(1))
            .build();

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|err| InfrastructureError::DirectoryRead {
                path: dir.to_path_buf(),
                details: err.to_string(),
            })?;
            if entry.depth() == 0 || !self.matches_name(entry.path()) {
                continue;
            }
            if Self::is_source_entry(&entry) {
                files.push(entry.into_path());
            }
        }

        files.sort();
        Ok(files)
    }

    fn read_source(&self, path: &Path) -> Result<String> {
        FileReader::read_lossy(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source }.into())
    }
}
