use std::path::{Path, PathBuf};

use serde::Serialize;

use super::CaseDictionary;

/// A loaded case input. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputFile {
    filename: PathBuf,
    case_dirpath: PathBuf,
    #[serde(rename = "case")]
    case_dict: CaseDictionary,
}

impl InputFile {
    /// `case_dirpath` is expected to be the absolute directory holding `filename`.
    pub fn new(filename: impl Into<PathBuf>, case_dirpath: impl Into<PathBuf>, case_dict: CaseDictionary) -> Self {
        Self { filename: filename.into(), case_dirpath: case_dirpath.into(), case_dict }
    }

    pub fn filename(&self) -> &Path {
        &self.filename
    }

    pub fn case_dirpath(&self) -> &Path {
        &self.case_dirpath
    }

    pub fn case_dict(&self) -> &CaseDictionary {
        &self.case_dict
    }
}
