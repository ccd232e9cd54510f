//! Reports about input that lenient parsing tolerates silently.

use std::fmt::Display;

use serde::Serialize;

use crate::{error::Error, placeholder::UnsupportedSpecifier};

/// A finding tied to a line of the parsed input.
///
/// Line numbers are 1-based; entries added directly through
/// [`crate::EnumBuilder::add_entry`] have no source line and report `0`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub line: usize,
    #[serde(flatten)]
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DiagnosticKind {
    /// A non-blank, non-comment line that is not a `"key" = "value";` entry.
    MalformedLine { content: String },
    /// A `%<n>$` specifier; its argument index is ignored.
    PositionalPlaceholder { key: String, specifier: String },
    /// A `%%` escape; it is not recognized as a literal percent sign.
    EscapedPercent { key: String },
    /// A key whose case name was already generated for an earlier entry.
    DuplicateCase {
        key: String,
        case_name: String,
        first_line: usize,
    },
}

impl Diagnostic {
    pub(crate) fn malformed_line(line: usize, content: &str) -> Self {
        Diagnostic {
            line,
            kind: DiagnosticKind::MalformedLine {
                content: content.to_string(),
            },
        }
    }

    pub(crate) fn unsupported_specifier(
        line: usize,
        key: &str,
        specifier: &UnsupportedSpecifier,
    ) -> Self {
        let kind = match specifier {
            UnsupportedSpecifier::EscapedPercent => DiagnosticKind::EscapedPercent {
                key: key.to_string(),
            },
            UnsupportedSpecifier::Positional { specifier, .. } => {
                DiagnosticKind::PositionalPlaceholder {
                    key: key.to_string(),
                    specifier: specifier.clone(),
                }
            }
        };
        Diagnostic { line, kind }
    }

    /// Converts the finding into the error strict mode reports for it.
    pub fn into_error(self) -> Error {
        let line = self.line;
        match self.kind {
            DiagnosticKind::MalformedLine { content } => Error::MalformedLine { line, content },
            DiagnosticKind::PositionalPlaceholder { key, specifier } => {
                Error::UnsupportedPlaceholder {
                    line,
                    key,
                    specifier,
                }
            }
            DiagnosticKind::EscapedPercent { key } => Error::UnsupportedPlaceholder {
                line,
                key,
                specifier: "%%".to_string(),
            },
            DiagnosticKind::DuplicateCase {
                key,
                case_name,
                first_line,
            } => Error::DuplicateCase {
                key,
                case_name,
                first_line,
            },
        }
    }
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {}: ", self.line)?;
        match &self.kind {
            DiagnosticKind::MalformedLine { content } => {
                write!(f, "skipped malformed line `{}`", content)
            }
            DiagnosticKind::PositionalPlaceholder { key, specifier } => write!(
                f,
                "positional placeholder `{}` in `{}` is treated as unordered",
                specifier, key
            ),
            DiagnosticKind::EscapedPercent { key } => {
                write!(f, "`%%` in `{}` is not treated as a literal percent", key)
            }
            DiagnosticKind::DuplicateCase {
                key,
                case_name,
                first_line,
            } if *first_line == 0 => write!(
                f,
                "key `{}` generates case `{}` already generated for an added entry",
                key, case_name
            ),
            DiagnosticKind::DuplicateCase {
                key,
                case_name,
                first_line,
            } => write!(
                f,
                "key `{}` generates case `{}` already generated on line {}",
                key, case_name, first_line
            ),
        }
    }
}
