// src/app.rs
use std::io::Write;

use anyhow::{Context, Result};
use toolchain_domain::TargetName;
use toolchain_infra::{FsDocumentStore, GlobSourceTree, InterpreterRunner};
use toolchain_usecase::{CountLines, EmitCase, LoadCase};
use tracing::debug;

use crate::{
    config::{Config, Job},
    presentation,
};

/// Execute the configured job, writing its report to `out`.
pub fn run(config: &Config, out: &mut dyn Write) -> Result<()> {
    debug!(root = %config.root.display(), job = ?config.job, "starting");
    match &config.job {
        Job::Count { targets, pattern } => {
            let tree = GlobSourceTree::new(pattern)?;
            let summary = CountLines::new(&tree).run(&config.source_root(), targets.as_slice())?;
            presentation::print_count(out, &summary, config.format).context("writing line count report")?;
        }
        Job::Load { input, interpreter } => {
            let documents = FsDocumentStore::new();
            let runner = InterpreterRunner::new(interpreter);
            let loaded = LoadCase::new(&documents, &runner).run(input)?;
            presentation::print_input(out, &loaded, config.format).context("writing case report")?;
        }
        Job::Generate { input, interpreter, target, output } => {
            let target = TargetName::new(target.as_str())?;
            let documents = FsDocumentStore::new();
            let runner = InterpreterRunner::new(interpreter);
            let loaded = LoadCase::new(&documents, &runner).run(input)?;
            let outcome = EmitCase::new(&documents).run(loaded.case_dict(), &target, output)?;
            presentation::print_emit(out, outcome, output).context("writing generate report")?;
        }
    }
    Ok(())
}
