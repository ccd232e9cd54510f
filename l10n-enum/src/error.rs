//! All error types for the l10n-enum crate.
//!
//! Parsing is lenient by default, so in practice only I/O failures surface
//! unless strict mode or validation is requested.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed entry `{content}`")]
    MalformedLine { line: usize, content: String },

    #[error("line {line}: unsupported placeholder `{specifier}` in `{key}`")]
    UnsupportedPlaceholder {
        line: usize,
        key: String,
        specifier: String,
    },

    #[error("duplicate case `{case_name}` generated for key `{key}` (first seen on line {first_line})")]
    DuplicateCase {
        key: String,
        case_name: String,
        first_line: usize,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Creates a new configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Error::InvalidConfig(message.into())
    }
}
