use std::path::Path;

/// How a case input file yields its JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseFormat {
    /// Executed; its standard output is the document.
    Script,
    /// Read as-is.
    Json,
}

impl CaseFormat {
    pub const SCRIPT_SUFFIX: &'static str = ".py";
    pub const JSON_SUFFIX: &'static str = ".json";

    /// Pick the format from the file name suffix. `None` when the suffix is not supported.
    pub fn detect(path: &Path) -> Option<Self> {
        let name = path.to_string_lossy();
        if name.ends_with(Self::SCRIPT_SUFFIX) {
            Some(Self::Script)
        } else if name.ends_with(Self::JSON_SUFFIX) {
            Some(Self::Json)
        } else {
            None
        }
    }
}
