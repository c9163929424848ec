//! Error types and handling for Stager
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Filesystem and manifest-parse errors abort the whole run; a manifest
//! missing a required field is not an error value at all, it is recovered
//! locally in the loader with a diagnostic line.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for Stager operations
#[derive(Error, Diagnostic, Debug)]
pub enum StagerError {
    // File system errors
    #[error("Directory not found: {path}")]
    #[diagnostic(
        code(stager::fs::dir_not_found),
        help("Check that the path exists and is readable")
    )]
    DirectoryNotFound { path: String },

    #[error("Failed to read directory: {path}")]
    #[diagnostic(code(stager::fs::read_dir_failed))]
    DirectoryReadFailed { path: String, reason: String },

    #[error("Failed to read file: {path}")]
    #[diagnostic(code(stager::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}")]
    #[diagnostic(code(stager::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(stager::fs::io_error))]
    IoError { message: String },

    // CLI errors
    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(stager::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Manifest errors
    #[error("Failed to parse manifest: {path}")]
    #[diagnostic(
        code(stager::manifest::parse_failed),
        help("The manifest must be a valid JSON object with \"name\" and \"main\" fields")
    )]
    ManifestParseFailed { path: String, reason: String },
}

impl From<std::io::Error> for StagerError {
    fn from(err: std::io::Error) -> Self {
        StagerError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, StagerError>;
