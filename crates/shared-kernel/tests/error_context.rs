// crates/shared-kernel/tests/error_context.rs
use std::{io, path::PathBuf};

use toolchain_shared_kernel::{ConfigError, ErrorContext, InfrastructureError, ToolchainError};

fn boom() -> std::result::Result<(), InfrastructureError> {
    Err(InfrastructureError::FileRead {
        path: PathBuf::from("src/common/m_rhs.fpp"),
        source: io::Error::other("root-io"),
    })
}

#[test]
fn context_wraps_and_formats() {
    let err = boom().context("counting common").unwrap_err();

    let display = err.to_string();
    assert!(display.contains("counting common"));
    assert!(display.contains("Infrastructure error:"));
    assert!(display.contains("m_rhs.fpp"));
}

#[test]
fn config_errors_display_verbatim() {
    let err = ToolchainError::from(ConfigError::NotFound { path: PathBuf::from("case.json") });
    assert_eq!(
        err.to_string(),
        "Input file 'case.json' does not exist. Please check the path is valid."
    );
}

#[test]
fn config_is_found_through_context() {
    let result: std::result::Result<(), ConfigError> =
        Err(ConfigError::UnrecognizedFormat { path: PathBuf::from("x.txt") });
    let err = result.with_context(|| "loading x.txt".to_string()).unwrap_err();

    assert!(matches!(err.config(), Some(ConfigError::UnrecognizedFormat { .. })));
    assert!(err.to_string().contains("Unrecognized"));
}

#[test]
fn invalid_json_carries_parser_diagnostic() {
    let source = serde_json::from_str::<serde_json::Value>("{\"a\": }").unwrap_err();
    let diagnostic = source.to_string();
    let err = ConfigError::InvalidJson { path: PathBuf::from("case.py"), source };

    let message = err.to_string();
    assert!(message.contains("did not produce valid JSON"));
    assert!(message.contains(&diagnostic));
}
