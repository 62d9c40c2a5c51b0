// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};
use toolchain_infra::{DEFAULT_INTERPRETER, DEFAULT_SOURCE_PATTERN};

use super::value_enum::CliOutputFormat;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "toolchain",
    version = crate::VERSION,
    about = "Source line counts and case fragment generation for the simulation build"
)]
pub struct Args {
    /// Project root; sources are read from `<ROOT>/src`
    #[arg(long, global = true, env = "TOOLCHAIN_ROOT", default_value = ".", value_hint = ValueHint::DirPath)]
    pub root: PathBuf,

    /// Report format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: CliOutputFormat,

    /// More log output (repeatable). `RUST_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Count non-blank source lines of the shared code and the given targets
    Count(CountArgs),
    /// Load a case input file and print the case dictionary
    Load(LoadArgs),
    /// Load a case input file and write the case fragment for a target
    Generate(GenerateArgs),
}

#[derive(clap::Args, Debug)]
pub struct CountArgs {
    /// Target directories under `<ROOT>/src`, counted after `common`
    pub targets: Vec<String>,

    /// File name glob selecting source files
    #[arg(long, default_value = DEFAULT_SOURCE_PATTERN)]
    pub pattern: String,
}

#[derive(clap::Args, Debug)]
pub struct LoadArgs {
    /// Case input: a `.json` document or a `.py` script printing one
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Program used to run `.py` case inputs
    #[arg(long, env = "TOOLCHAIN_PYTHON", default_value = DEFAULT_INTERPRETER)]
    pub interpreter: String,
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub load: LoadArgs,

    /// Target the fragment is generated for
    #[arg(long, short)]
    pub target: String,

    /// Fragment path [default: <ROOT>/src/common/case.fpp]
    #[arg(long, short, value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}
