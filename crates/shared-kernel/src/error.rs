// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum ToolchainError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<ToolchainError>,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

impl ToolchainError {
    /// The case-configuration failure behind this error, looking through any added context.
    pub fn config(&self) -> Option<&ConfigError> {
        match self {
            Self::Context { source, .. } => source.config(),
            Self::Config(err) => Some(err),
            Self::Domain(_) | Self::Infrastructure(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ToolchainError>;

/// Failures while turning a case input file into a case dictionary.
///
/// Every variant is fatal to the run and is meant to be shown to the user verbatim.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Input file '{path}' does not exist. Please check the path is valid.")]
    NotFound { path: PathBuf },

    #[error(
        "Input file {path} terminated with a non-zero exit code ({status}). Please make sure running the \
         file doesn't produce any errors and that it prints only the case dictionary to standard output."
    )]
    NonZeroExit { path: PathBuf, status: String },

    #[error("Input file {path} could not be started with '{program}': {source}")]
    ScriptLaunch {
        path: PathBuf,
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "Unrecognized input file format for '{path}'. Only .py and .json files are supported. \
         Please check the README and the sample cases."
    )]
    UnrecognizedFormat { path: PathBuf },

    #[error("Input file {path} did not produce valid JSON. It should only print the case dictionary.\n\n{source}\n")]
    InvalidJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid target name '{name}': {reason}")]
    InvalidTargetName { name: String, reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create directory '{path}': {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to resolve absolute path of '{path}': {source}")]
    ResolvePath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to list directory '{path}': {details}")]
    DirectoryRead { path: PathBuf, details: String },

    #[error("Invalid source pattern '{pattern}': {details}")]
    InvalidPattern { pattern: String, details: String },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<ToolchainError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| ToolchainError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| ToolchainError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
