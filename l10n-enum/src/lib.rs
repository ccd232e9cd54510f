#![forbid(unsafe_code)]
//! Type-safe Swift accessors for Apple `.strings` localization files.
//!
//! Every `"key" = "translation";` line becomes a case of a generated Swift
//! enum. The printf-style placeholders of the translation (`%@`, `%d`, `%f`,
//! ...) become the case's payload, so call sites pass correctly typed
//! arguments instead of raw string keys.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use l10n_enum::{DEFAULT_ENUM_NAME, EnumBuilder};
//!
//! let mut builder = EnumBuilder::new();
//! builder.parse_file("en.lproj/Localizable.strings")?;
//! std::fs::write("L10n.swift", builder.build(DEFAULT_ENUM_NAME))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! For `"greeting" = "Hello %@, you have %d messages";` the generated enum
//! contains `case greeting(String, Int)`, and `tr(.greeting("Ann", 3))`
//! looks up `"greeting"` with `NSLocalizedString` and formats it.
//!
//! # Limitations
//!
//! Positional specifiers (`%2$@`) are not reordered and `%%` is not treated
//! as a literal percent. Parsing stays lenient by default; see
//! [`ParseOptions`] and [`EnumBuilder::diagnostics`] for opting into reports
//! or hard failures.

pub mod builder;
pub mod diagnostics;
pub mod entry;
pub mod error;
pub mod identifier;
pub mod options;
pub mod placeholder;
pub mod render;

// Re-export most used types for easy consumption
pub use crate::{
    builder::{DEFAULT_ENUM_NAME, EnumBuilder},
    diagnostics::{Diagnostic, DiagnosticKind},
    entry::Entry,
    error::Error,
    identifier::swift_identifier,
    options::ParseOptions,
    placeholder::{
        PlaceholderType, UnsupportedSpecifier, types_from_format_string, unsupported_specifiers,
    },
    render::case_name,
};
