use std::path::Path;

use toolchain_domain::{CountSummary, DirectoryReport, FileLineCount, analytics::count_non_blank_lines};
use toolchain_ports::filesystem::SourceTree;
use toolchain_shared_kernel::{ErrorContext, Result};
use tracing::debug;

/// Directory of code shared by every target. Always counted, and counted first.
pub const COMMON_DIRECTORY: &str = "common";

/// Counts non-blank lines of the source files under `<source_root>/<directory>`.
pub struct CountLines<'a> {
    tree: &'a dyn SourceTree,
}

impl<'a> CountLines<'a> {
    pub fn new(tree: &'a dyn SourceTree) -> Self {
        Self { tree }
    }

    /// Count the shared directory followed by each target, in the order given.
    pub fn run<S: AsRef<str>>(&self, source_root: &Path, targets: &[S]) -> Result<CountSummary> {
        let reports = directories(targets)
            .into_iter()
            .map(|name| self.count_directory(source_root, name))
            .collect::<Result<Vec<_>>>()?;
        Ok(CountSummary::from_reports(reports))
    }

    fn count_directory(&self, source_root: &Path, name: &str) -> Result<DirectoryReport> {
        let dir = source_root.join(name);
        let paths = self.tree.source_files(&dir)?;
        debug!(dir = %dir.display(), files = paths.len(), "counting directory");

        let mut files = Vec::with_capacity(paths.len());
        for path in paths {
            let text = self
                .tree
                .read_source(&path)
                .with_context(|| format!("counting lines in {name}"))?;
            let lines = count_non_blank_lines(&text);
            files.push(FileLineCount::new(path, lines));
        }

        Ok(DirectoryReport::from_files(name, files))
    }
}

/// Shared directory first, then targets without repeats.
fn directories<S: AsRef<str>>(targets: &[S]) -> Vec<&str> {
    let mut names = vec![COMMON_DIRECTORY];
    for target in targets {
        let target = target.as_ref();
        if names.contains(&target) {
            debug!(directory = target, "directory already listed, skipping repeat");
        } else {
            names.push(target);
        }
    }
    names
}
