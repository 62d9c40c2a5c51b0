//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! This crate coordinates domain logic and port implementations:
//!
//! - [`count`]: non-blank line totals for the shared and target source directories
//! - [`load`]: turning a `.py` or `.json` case input into an [`InputFile`](toolchain_domain::InputFile)
//! - [`emit`]: writing the case fragment when its content changed
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod count;
pub mod emit;
pub mod load;

pub use count::{COMMON_DIRECTORY, CountLines};
pub use emit::{EmitCase, EmitOutcome};
pub use load::LoadCase;
