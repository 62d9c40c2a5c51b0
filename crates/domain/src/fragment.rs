//! Generated build-input fragment describing the case to run.

pub mod literal;

use std::fmt;

use serde::Serialize;
use toolchain_shared_kernel::{DomainError, DomainResult};

pub use literal::{PythonDict, PythonLiteral};

use crate::case::CaseDictionary;

/// Comment block opening every generated fragment.
pub const FRAGMENT_HEADER: &str = "! This file was generated by the case toolchain to\n! describe the case one wishes to run.\n";

/// Name of the build target a fragment is generated for.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TargetName(String);

impl TargetName {
    /// The name is embedded in a double-quoted directive, so it must be a single
    /// non-empty line without double quotes.
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let reason = if name.trim().is_empty() {
            Some("must not be empty")
        } else if name.contains('"') {
            Some("must not contain double quotes")
        } else if name.contains(['\n', '\r']) {
            Some("must be a single line")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidTargetName { name, reason: reason.to_string() }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TargetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl CaseDictionary {
    /// The dictionary as a Python dict literal.
    pub fn to_python_literal(&self) -> String {
        PythonDict(self.as_map()).to_string()
    }
}

/// Full text of the fragment for `case` built as `target`.
pub fn compose_fragment(case: &CaseDictionary, target: &TargetName) -> String {
    format!(
        "{FRAGMENT_HEADER}\n#:set CASE={case}\n#:set CODE=\"{target}\"\n\n",
        case = case.to_python_literal(),
    )
}

/// Whether the fragment already on disk (if any) is exactly `composed`.
pub fn fragment_is_current(existing: Option<&str>, composed: &str) -> bool {
    existing.is_some_and(|content| content == composed)
}
