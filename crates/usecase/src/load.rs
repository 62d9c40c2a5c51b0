use std::path::{Path, PathBuf};

use toolchain_domain::{CaseDictionary, CaseFormat, InputFile};
use toolchain_ports::{documents::DocumentStore, process::ProgramRunner};
use toolchain_shared_kernel::{ConfigError, InfrastructureError, Result};
use tracing::{debug, info};

/// Loads a case input file into an [`InputFile`].
///
/// `.json` inputs are read directly. `.py` inputs are executed and their
/// standard output is taken as the JSON document.
pub struct LoadCase<'a> {
    documents: &'a dyn DocumentStore,
    runner: &'a dyn ProgramRunner,
}

impl<'a> LoadCase<'a> {
    pub fn new(documents: &'a dyn DocumentStore, runner: &'a dyn ProgramRunner) -> Self {
        Self { documents, runner }
    }

    pub fn run(&self, filename: &Path) -> Result<InputFile> {
        if !self.documents.is_file(filename) {
            return Err(ConfigError::NotFound { path: filename.to_path_buf() }.into());
        }

        let format = CaseFormat::detect(filename)
            .ok_or_else(|| ConfigError::UnrecognizedFormat { path: filename.to_path_buf() })?;
        debug!(path = %filename.display(), ?format, "loading case input");

        let document = match format {
            CaseFormat::Script => self.script_output(filename)?,
            CaseFormat::Json => self.documents.read_text(filename)?,
        };

        let case_dict = CaseDictionary::from_json_str(&document)
            .map_err(|source| ConfigError::InvalidJson { path: filename.to_path_buf(), source })?;
        info!(path = %filename.display(), keys = case_dict.len(), "loaded case");

        Ok(InputFile::new(filename, case_dirpath(filename)?, case_dict))
    }

    fn script_output(&self, script: &Path) -> Result<String> {
        let output = self.runner.run(script)?;
        if !output.status.success() {
            return Err(ConfigError::NonZeroExit {
                path: script.to_path_buf(),
                status: output.status.describe(),
            }
            .into());
        }
        Ok(output.stdout)
    }
}

/// Absolute directory holding `filename`.
fn case_dirpath(filename: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(filename)
        .map_err(|source| InfrastructureError::ResolvePath { path: filename.to_path_buf(), source })?;
    Ok(absolute.parent().map_or_else(|| absolute.clone(), Path::to_path_buf))
}

#[cfg(test)]
mod tests {
    use std::{
        cell::Cell,
        collections::BTreeMap,
        io,
    };

    use serde_json::json;
    use toolchain_ports::process::{ExitStatus, ProgramOutput};

    use super::*;

    #[derive(Default)]
    struct StubDocuments {
        files: BTreeMap<PathBuf, String>,
    }

    impl StubDocuments {
        fn with(mut self, path: &str, text: &str) -> Self {
            self.files.insert(PathBuf::from(path), text.to_string());
            self
        }
    }

    impl DocumentStore for StubDocuments {
        fn is_file(&self, path: &Path) -> bool {
            self.files.contains_key(path)
        }

        fn read_text(&self, path: &Path) -> Result<String> {
            self.files.get(path).cloned().ok_or_else(|| {
                InfrastructureError::FileRead {
                    path: path.to_path_buf(),
                    source: io::Error::from(io::ErrorKind::NotFound),
                }
                .into()
            })
        }

        fn read_existing(&self, path: &Path) -> Result<Option<String>> {
            Ok(self.files.get(path).cloned())
        }

        fn write_text(&self, _path: &Path, _contents: &str) -> Result<()> {
            unreachable!("loading never writes")
        }
    }

    struct StubRunner {
        output: ProgramOutput,
        calls: Cell<usize>,
    }

    impl StubRunner {
        fn printing(stdout: &str, status: ExitStatus) -> Self {
            Self { output: ProgramOutput::new(stdout, status), calls: Cell::new(0) }
        }
    }

    impl ProgramRunner for StubRunner {
        fn run(&self, _script: &Path) -> Result<ProgramOutput> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.output.clone())
        }
    }

    fn never_run() -> StubRunner {
        StubRunner::printing("", ExitStatus::Code(0))
    }

    #[test]
    fn json_input_is_parsed() {
        let docs = StubDocuments::default().with("cases/shock/case.json", r#"{"a": 1}"#);
        let runner = never_run();
        let input = LoadCase::new(&docs, &runner).run(Path::new("cases/shock/case.json")).expect("loads");

        assert_eq!(serde_json::to_value(input.case_dict()).unwrap(), json!({"a": 1}));
        assert_eq!(input.filename(), Path::new("cases/shock/case.json"));
        assert!(input.case_dirpath().is_absolute());
        assert!(input.case_dirpath().ends_with("cases/shock"));
        assert_eq!(runner.calls.get(), 0);
    }

    #[test]
    fn script_output_is_parsed() {
        let docs = StubDocuments::default().with("case.py", "print('ignored')");
        let runner = StubRunner::printing("{\"m\": 49, \"n\": 0}\n", ExitStatus::Code(0));
        let input = LoadCase::new(&docs, &runner).run(Path::new("case.py")).expect("loads");

        assert_eq!(input.case_dict().get("m"), Some(&json!(49)));
        assert_eq!(runner.calls.get(), 1);
    }

    #[test]
    fn missing_input_does_not_exist() {
        let docs = StubDocuments::default();
        let runner = never_run();
        let err = LoadCase::new(&docs, &runner).run(Path::new("nope.json")).unwrap_err();

        assert!(matches!(err.config(), Some(ConfigError::NotFound { .. })));
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn other_suffixes_are_unrecognized() {
        let docs = StubDocuments::default().with("x.txt", "{}");
        let runner = never_run();
        let err = LoadCase::new(&docs, &runner).run(Path::new("x.txt")).unwrap_err();

        assert!(matches!(err.config(), Some(ConfigError::UnrecognizedFormat { .. })));
        assert!(err.to_string().contains("Unrecognized"));
    }

    #[test]
    fn failing_script_reports_non_zero_exit() {
        let docs = StubDocuments::default().with("case.py", "");
        let runner = StubRunner::printing("{\"a\": 1}", ExitStatus::Code(1));
        let err = LoadCase::new(&docs, &runner).run(Path::new("case.py")).unwrap_err();

        assert!(matches!(err.config(), Some(ConfigError::NonZeroExit { .. })));
        let message = err.to_string();
        assert!(message.contains("non-zero exit code"));
        assert!(message.contains("exit code 1"));
    }

    #[test]
    fn invalid_json_includes_parser_diagnostic() {
        let docs = StubDocuments::default().with("case.json", "{\"a\": 1,}");
        let runner = never_run();
        let err = LoadCase::new(&docs, &runner).run(Path::new("case.json")).unwrap_err();

        let diagnostic = serde_json::from_str::<serde_json::Value>("{\"a\": 1,}").unwrap_err().to_string();
        assert!(matches!(err.config(), Some(ConfigError::InvalidJson { .. })));
        assert!(err.to_string().contains(&diagnostic));
    }

    #[test]
    fn script_printing_extra_text_is_invalid_json() {
        let docs = StubDocuments::default().with("case.py", "");
        let runner = StubRunner::printing("debug: hi\n{\"a\": 1}", ExitStatus::Code(0));
        let err = LoadCase::new(&docs, &runner).run(Path::new("case.py")).unwrap_err();

        assert!(err.to_string().contains("did not produce valid JSON"));
    }
}
