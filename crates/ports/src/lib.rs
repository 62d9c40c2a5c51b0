//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Source directory scanning and reading
//! - [`documents`]: Case documents and generated fragments on disk
//! - [`process`]: Running case scripts and capturing their output
//!
//! These ports allow the domain and use case layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod documents;
pub mod filesystem;
pub mod process;
