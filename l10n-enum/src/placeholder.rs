//! Placeholder classification and format string scanning.
//!
//! Translations use printf-style specifiers (`%@`, `%d`, `%f`, ...). Only the
//! specifier character matters for the generated payload types; flags,
//! widths and length modifiers in between are skipped.

use std::fmt::Display;

use serde::Serialize;

/// The value kind a placeholder expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PlaceholderType {
    String,
    Float,
    Integer,
}

impl PlaceholderType {
    /// Classifies a single specifier character, or `None` if it does not end
    /// a placeholder.
    pub fn from_format_char(c: char) -> Option<Self> {
        match c {
            '@' => Some(PlaceholderType::String),
            'f' => Some(PlaceholderType::Float),
            'd' | 'i' | 'u' => Some(PlaceholderType::Integer),
            _ => None,
        }
    }

    /// The Swift type used for this placeholder in a generated case payload.
    pub fn swift_type(&self) -> &'static str {
        match self {
            PlaceholderType::String => "String",
            PlaceholderType::Float => "Float",
            PlaceholderType::Integer => "Int",
        }
    }
}

impl Display for PlaceholderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.swift_type())
    }
}

/// Returns the placeholder types of a format string in occurrence order.
///
/// `"I give %d apples to %@"` gives `[Integer, String]`.
///
/// After a `%`, characters are consumed until one classifies as a
/// placeholder type. Positional indices (`%1$@`) are therefore read as
/// plain placeholders and `%%` does not escape anything.
pub fn types_from_format_string(format: &str) -> Vec<PlaceholderType> {
    let mut types = Vec::new();
    let mut awaiting_specifier = false;

    for c in format.chars() {
        if c == '%' {
            awaiting_specifier = true;
        } else if awaiting_specifier {
            if let Some(kind) = PlaceholderType::from_format_char(c) {
                types.push(kind);
                awaiting_specifier = false;
            }
        }
    }

    types
}

/// A specifier the scanner reads incorrectly, reported by diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum UnsupportedSpecifier {
    /// A literal percent sign, `%%`.
    EscapedPercent,
    /// An explicit argument index such as `%2$@`.
    Positional { index: usize, specifier: String },
}

impl UnsupportedSpecifier {
    pub fn specifier(&self) -> &str {
        match self {
            UnsupportedSpecifier::EscapedPercent => "%%",
            UnsupportedSpecifier::Positional { specifier, .. } => specifier,
        }
    }
}

/// Finds the `%%` escapes and positional specifiers in a format string.
pub fn unsupported_specifiers(format: &str) -> Vec<UnsupportedSpecifier> {
    let bytes = format.as_bytes();
    let mut i = 0;
    let mut out = Vec::new();

    while i < bytes.len() {
        if bytes[i] != b'%' {
            i += 1;
            continue;
        }
        if i + 1 < bytes.len() && bytes[i + 1] == b'%' {
            out.push(UnsupportedSpecifier::EscapedPercent);
            i += 2;
            continue;
        }

        let start_digits = i + 1;
        let mut j = start_digits;
        while j < bytes.len() && bytes[j].is_ascii_digit() {
            j += 1;
        }
        if j > start_digits && j < bytes.len() && bytes[j] == b'$' {
            let index = format[start_digits..j].parse::<usize>().unwrap_or(0);
            let mut end = j + 1;
            // Include the type character when it directly follows, e.g. `%2$@`.
            if end < bytes.len() && (bytes[end].is_ascii_alphabetic() || bytes[end] == b'@') {
                end += 1;
            }
            out.push(UnsupportedSpecifier::Positional {
                index,
                specifier: format[i..end].to_string(),
            });
            i = end;
            continue;
        }

        i += 1;
    }

    out
}
