use std::{borrow::Cow, path::PathBuf};

use serde::Serialize;
use toolchain_shared_kernel::LineCount;

use crate::analytics::sort_by_lines;

/// Non-blank line count of a single source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileLineCount {
    pub path: PathBuf,
    pub lines: LineCount,
}

impl FileLineCount {
    pub fn new(path: impl Into<PathBuf>, lines: LineCount) -> Self {
        Self { path: path.into(), lines }
    }

    /// Base name used when listing the file under its directory.
    pub fn file_name(&self) -> Cow<'_, str> {
        self.path
            .file_name()
            .map_or_else(|| self.path.to_string_lossy(), |name| name.to_string_lossy())
    }
}

/// Line counts of the matched files in one directory, largest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryReport {
    pub directory_name: String,
    pub files: Vec<FileLineCount>,
    pub total: LineCount,
}

impl DirectoryReport {
    /// Build a report whose subtotal is the sum of exactly the counts recorded per file.
    pub fn from_files(directory_name: impl Into<String>, mut files: Vec<FileLineCount>) -> Self {
        sort_by_lines(&mut files);
        let total = files.iter().map(|f| f.lines).sum();
        Self { directory_name: directory_name.into(), files, total }
    }

    pub fn empty(directory_name: impl Into<String>) -> Self {
        Self::from_files(directory_name, Vec::new())
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Per-directory reports in processing order plus the grand total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountSummary {
    pub directories: Vec<DirectoryReport>,
    pub total: LineCount,
}

impl CountSummary {
    pub fn from_reports(directories: Vec<DirectoryReport>) -> Self {
        let total = directories.iter().map(|d| d.total).sum();
        Self { directories, total }
    }

    pub fn directory(&self, name: &str) -> Option<&DirectoryReport> {
        self.directories.iter().find(|d| d.directory_name == name)
    }
}
