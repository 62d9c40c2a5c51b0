#![allow(clippy::multiple_crate_versions)]

pub mod analytics;
pub mod case;
pub mod fragment;
pub mod model;

pub use case::{CaseDictionary, CaseFormat, InputFile};
pub use fragment::{TargetName, compose_fragment, fragment_is_current};
pub use model::{CountSummary, DirectoryReport, FileLineCount};
