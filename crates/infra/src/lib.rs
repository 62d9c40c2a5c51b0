// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod documents;
pub mod filesystem;
pub mod persistence;
pub mod process;

pub use documents::FsDocumentStore;
pub use filesystem::{DEFAULT_SOURCE_PATTERN, GlobSourceTree};
pub use process::{DEFAULT_INTERPRETER, InterpreterRunner};
