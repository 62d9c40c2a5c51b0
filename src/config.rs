// src/config.rs
use std::path::{Path, PathBuf};

use tracing::level_filters::LevelFilter;

use crate::cli::{Args, Command};

/// Directory under the project root holding one subdirectory per target.
pub const SOURCE_DIR: &str = "src";
/// Fragment location relative to the source directory.
pub const FRAGMENT_PATH: [&str; 2] = ["common", "case.fpp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

/// What a single invocation does, with every default already resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Job {
    Count { targets: Vec<String>, pattern: String },
    Load { input: PathBuf, interpreter: String },
    Generate { input: PathBuf, interpreter: String, target: String, output: PathBuf },
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub root: PathBuf,
    pub format: OutputFormat,
    pub log_level: LevelFilter,
    pub job: Job,
}

impl Config {
    pub fn source_root(&self) -> PathBuf {
        source_root(&self.root)
    }
}

fn source_root(root: &Path) -> PathBuf {
    root.join(SOURCE_DIR)
}

/// Default location of the generated case fragment for a project rooted at `root`.
pub fn default_fragment_path(root: &Path) -> PathBuf {
    FRAGMENT_PATH.iter().fold(source_root(root), |path, part| path.join(part))
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let job = match args.command {
            Command::Count(count) => Job::Count { targets: count.targets, pattern: count.pattern },
            Command::Load(load) => Job::Load { input: load.input, interpreter: load.interpreter },
            Command::Generate(generate) => Job::Generate {
                input: generate.load.input,
                interpreter: generate.load.interpreter,
                target: generate.target,
                output: generate.output.unwrap_or_else(|| default_fragment_path(&args.root)),
            },
        };

        Self {
            format: args.format.into(),
            log_level: log_level(args.verbose, args.quiet),
            root: args.root,
            job,
        }
    }
}
