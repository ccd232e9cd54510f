//! Conversion of arbitrary keys into Swift identifiers.

const SWIFT_RESERVED_WORDS: &[&str] = &[
    "Any",
    "Protocol",
    "Self",
    "Type",
    "as",
    "associatedtype",
    "await",
    "break",
    "case",
    "catch",
    "class",
    "continue",
    "default",
    "defer",
    "deinit",
    "do",
    "else",
    "enum",
    "extension",
    "fallthrough",
    "false",
    "fileprivate",
    "for",
    "func",
    "guard",
    "if",
    "import",
    "in",
    "init",
    "inout",
    "internal",
    "is",
    "let",
    "nil",
    "open",
    "operator",
    "precedencegroup",
    "private",
    "protocol",
    "public",
    "repeat",
    "rethrows",
    "return",
    "self",
    "static",
    "struct",
    "subscript",
    "super",
    "switch",
    "throw",
    "throws",
    "true",
    "try",
    "typealias",
    "var",
    "where",
    "while",
];

/// Turns `text` into a bare Swift identifier.
///
/// Every character that is not alphanumeric or `_`, and every character in
/// `forbidden`, splits the text; the pieces are joined in lower camel case.
/// The result is never empty, never starts with a digit and never collides
/// with a reserved word.
///
/// ```rust
/// use l10n_enum::swift_identifier;
///
/// assert_eq!(swift_identifier("alert.title", ""), "alertTitle");
/// assert_eq!(swift_identifier("user_name", "_"), "userName");
/// assert_eq!(swift_identifier("user_name", ""), "user_name");
/// assert_eq!(swift_identifier("2fa-code", "_"), "_2faCode");
/// ```
pub fn swift_identifier(text: &str, forbidden: &str) -> String {
    let is_separator = |c: char| !(c.is_alphanumeric() || c == '_') || forbidden.contains(c);

    let mut identifier = String::with_capacity(text.len());
    for (index, part) in text
        .split(is_separator)
        .filter(|part| !part.is_empty())
        .enumerate()
    {
        if index == 0 {
            identifier.push_str(part);
        } else {
            identifier.push_str(&upper_first(part));
        }
    }

    if !identifier.chars().any(char::is_alphanumeric) {
        identifier.push_str("unnamed");
    }

    match identifier.chars().next() {
        Some(first) if is_identifier_head(first) => {}
        _ => identifier.insert(0, '_'),
    }

    if SWIFT_RESERVED_WORDS.contains(&identifier.as_str()) {
        identifier.insert(0, '_');
    }

    identifier
}

/// Letters and `_`, minus the combining marks Swift only accepts after the
/// first character.
fn is_identifier_head(c: char) -> bool {
    (c.is_alphabetic() || c == '_') && !is_combining_mark(c)
}

fn is_combining_mark(c: char) -> bool {
    matches!(
        c,
        '\u{0300}'..='\u{036f}'
            | '\u{1dc0}'..='\u{1dff}'
            | '\u{20d0}'..='\u{20ff}'
            | '\u{fe20}'..='\u{fe2f}'
    )
}

fn upper_first(part: &str) -> String {
    let mut chars = part.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    // Multi-char mappings (`ΐ`) can yield combining marks; keep those as-is.
    let mut upper = first.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(single), None) => std::iter::once(single).chain(chars).collect(),
        _ => part.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_identifier_is_unchanged() {
        assert_eq!(swift_identifier("greeting", "_"), "greeting");
        assert_eq!(swift_identifier("L10n", ""), "L10n");
        assert_eq!(swift_identifier("alertTitle", "_"), "alertTitle");
    }

    #[test]
    fn test_separators_become_camel_case() {
        assert_eq!(swift_identifier("alert.title", "_"), "alertTitle");
        assert_eq!(swift_identifier("settings-screen title", "_"), "settingsScreenTitle");
        assert_eq!(swift_identifier("a..b", "_"), "aB");
        assert_eq!(swift_identifier(".leading", "_"), "leading");
    }

    #[test]
    fn test_forbidden_underscore() {
        assert_eq!(swift_identifier("user_name", "_"), "userName");
        assert_eq!(swift_identifier("user_name", ""), "user_name");
        assert_eq!(swift_identifier("_hidden_", "_"), "hidden");
        assert_eq!(swift_identifier("_hidden_", ""), "_hidden_");
    }

    #[test]
    fn test_leading_digit_is_prefixed() {
        assert_eq!(swift_identifier("2fa", "_"), "_2fa");
        assert_eq!(swift_identifier("404.title", "_"), "_404Title");
    }

    #[test]
    fn test_empty_and_symbol_only_input() {
        assert_eq!(swift_identifier("", "_"), "unnamed");
        assert_eq!(swift_identifier("...", "_"), "unnamed");
        assert_eq!(swift_identifier("_", ""), "_unnamed");
    }

    #[test]
    fn test_reserved_words_are_prefixed() {
        assert_eq!(swift_identifier("default", "_"), "_default");
        assert_eq!(swift_identifier("self", "_"), "_self");
        assert_eq!(swift_identifier("class.name", "_"), "className");
        assert_eq!(swift_identifier("Type", "_"), "_Type");
        assert_eq!(swift_identifier("Protocol", "_"), "_Protocol");
        assert_eq!(swift_identifier("type", "_"), "type");
    }

    #[test]
    fn test_combining_mark_cannot_start() {
        assert_eq!(swift_identifier("\u{0345}x", "_"), "_\u{0345}x");
        assert_eq!(swift_identifier("e\u{0345}", "_"), "e\u{0345}");
    }

    #[test]
    fn test_unicode_letters_are_kept() {
        assert_eq!(swift_identifier("größe", "_"), "größe");
        assert_eq!(swift_identifier("über.größe", "_"), "überGröße");
    }
}
