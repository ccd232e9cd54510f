//! A single `"key" = "translation";` line of a `.strings` file.

use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;
use serde::Serialize;

use crate::placeholder::{PlaceholderType, types_from_format_string};

lazy_static! {
    // Anchored at line start; anything after the closing `";` is ignored.
    static ref ENTRY_LINE: Regex =
        Regex::new(r#"^"([^"]+)"[ \t]*=[ \t]*"(.*)";"#).expect("entry line pattern is valid");
}

/// One parsed resource entry: its lookup key and the placeholder types of its
/// translation, in order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    key: String,
    types: Vec<PlaceholderType>,
}

impl Entry {
    /// The key becomes the lookup key of the generated source. Bare quotes
    /// are escaped there, but backslash escapes are copied as they are, so
    /// they must also be valid Swift escapes (`\U0041` is not).
    pub fn new(key: impl Into<String>, types: Vec<PlaceholderType>) -> Self {
        Entry {
            key: key.into(),
            types,
        }
    }

    /// Parses one line of a `.strings` file.
    ///
    /// Returns `None` for anything that is not a single-line entry: blank
    /// lines, comments, indented or otherwise malformed lines. The key and
    /// translation are taken verbatim, escape sequences are left untouched.
    ///
    /// ```rust
    /// use l10n_enum::{Entry, PlaceholderType};
    ///
    /// let entry = Entry::from_line(r#""hello" = "Hello %@!";"#).unwrap();
    /// assert_eq!(entry.key(), "hello");
    /// assert_eq!(entry.types(), &[PlaceholderType::String]);
    /// ```
    pub fn from_line(line: &str) -> Option<Self> {
        let (key, translation) = split_line(line)?;
        Some(Entry::new(key, types_from_format_string(translation)))
    }

    /// The unsanitized key, used verbatim as the localization lookup key.
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn types(&self) -> &[PlaceholderType] {
        &self.types
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Entry {{ key: {}, types: [{}] }}",
            self.key,
            self.types
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

/// Splits a line into its raw key and translation text.
pub(crate) fn split_line(line: &str) -> Option<(&str, &str)> {
    let captures = ENTRY_LINE.captures(line)?;
    let key = captures.get(1)?.as_str();
    let translation = captures.get(2)?.as_str();
    Some((key, translation))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_entry() {
        let entry = Entry::from_line(r#""hello" = "Hello %@!";"#).unwrap();
        assert_eq!(entry.key(), "hello");
        assert_eq!(entry.types(), &[PlaceholderType::String]);
    }

    #[test]
    fn test_parse_without_placeholders() {
        let entry = Entry::from_line(r#""farewell" = "Goodbye";"#).unwrap();
        assert_eq!(entry.key(), "farewell");
        assert!(entry.types().is_empty());
    }

    #[test]
    fn test_parse_flexible_spacing() {
        assert!(Entry::from_line(r#""a"="b";"#).is_some());
        assert!(Entry::from_line("\"a\"\t=\t\"b\";").is_some());
        assert!(Entry::from_line(r#""a"   =   "b";"#).is_some());
    }

    #[test]
    fn test_trailing_content_is_ignored() {
        let entry = Entry::from_line(r#""count" = "%d items"; // plural later"#).unwrap();
        assert_eq!(entry.key(), "count");
        assert_eq!(entry.types(), &[PlaceholderType::Integer]);
    }

    #[test]
    fn test_key_is_not_sanitized_or_unescaped() {
        let entry = Entry::from_line(r#""alert.title-main" = "Say \"%@\"";"#).unwrap();
        assert_eq!(entry.key(), "alert.title-main");
        assert_eq!(entry.types(), &[PlaceholderType::String]);
    }

    #[test]
    fn test_non_entries_are_skipped() {
        for line in [
            "",
            "   ",
            "// comment",
            "/* block comment */",
            r#"  "indented" = "value";"#,
            r#""missing" = "semicolon""#,
            r#""no_equals" "value";"#,
            r#"key = "unquoted";"#,
            r#""" = "empty key";"#,
        ] {
            assert!(Entry::from_line(line).is_none(), "line {:?}", line);
        }
    }

    #[test]
    fn test_greedy_translation() {
        let (key, translation) = split_line(r#""a" = "x"; "b" = "%d";"#).unwrap();
        assert_eq!(key, "a");
        assert_eq!(translation, r#"x"; "b" = "%d"#);
    }

    #[test]
    fn test_display() {
        let entry = Entry::new(
            "greeting",
            vec![PlaceholderType::String, PlaceholderType::Integer],
        );
        assert_eq!(
            entry.to_string(),
            "Entry { key: greeting, types: [String, Int] }"
        );
    }
}
