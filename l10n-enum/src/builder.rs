//! Accumulates `.strings` entries and renders them as a Swift enum.
//!
//! # Example
//!
//! ```rust
//! use l10n_enum::{DEFAULT_ENUM_NAME, EnumBuilder};
//!
//! let mut builder = EnumBuilder::new();
//! builder.parse_str(r#""greeting" = "Hello %@, you have %d messages";"#)?;
//! let swift = builder.build(DEFAULT_ENUM_NAME);
//! assert!(swift.contains("case greeting(String, Int)"));
//! # Ok::<(), l10n_enum::Error>(())
//! ```

use std::{collections::HashMap, fs::File, io::Read, path::Path};

use crate::{
    diagnostics::{Diagnostic, DiagnosticKind},
    entry::{Entry, split_line},
    error::Error,
    options::ParseOptions,
    placeholder::{types_from_format_string, unsupported_specifiers},
    render::{Template, case_name},
};

/// Enum name used when the caller has no preference.
pub const DEFAULT_ENUM_NAME: &str = "L10n";

#[derive(Debug, Clone, PartialEq, Eq)]
struct SourcedEntry {
    /// Index of the `parse_*` or `add_entry` call that produced the entry.
    source: usize,
    /// 1-based line in the parsed content, `0` when added directly.
    line: usize,
    entry: Entry,
}

#[derive(Debug, Clone, Default)]
pub struct EnumBuilder {
    entries: Vec<SourcedEntry>,
    parse_diagnostics: Vec<(usize, Diagnostic)>,
    options: ParseOptions,
    sources: usize,
}

impl EnumBuilder {
    /// Creates an empty builder with lenient parsing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder with the given parse options.
    pub fn with_options(options: ParseOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Appends an entry. Duplicates are kept.
    pub fn add_entry(&mut self, entry: Entry) {
        let source = self.next_source();
        self.entries.push(SourcedEntry {
            source,
            line: 0,
            entry,
        });
    }

    /// The accumulated entries, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().map(|sourced| &sourced.entry)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reads and parses a `.strings` file.
    ///
    /// UTF-16 files with a byte order mark are decoded; anything else must
    /// be UTF-8.
    pub fn parse_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        log::debug!("reading {}", path.display());
        let file = File::open(path)?;
        self.parse_reader(file)
    }

    /// Decodes and parses `.strings` content from any reader.
    pub fn parse_reader<R: Read>(&mut self, reader: R) -> Result<(), Error> {
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(reader);

        let mut decoded = String::new();
        decoder.read_to_string(&mut decoded)?;

        self.parse_str(&decoded)
    }

    /// Parses `.strings` content line by line, adding every entry found.
    ///
    /// Lines that are not entries are skipped. In strict mode the first
    /// malformed line or unsupported specifier is returned as an error and no
    /// entry of `content` is added.
    pub fn parse_str(&mut self, content: &str) -> Result<(), Error> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut entries = Vec::new();
        let mut diagnostics = Vec::new();
        let mut in_block_comment = false;

        let source = self.sources;

        for (index, line) in lines(content).enumerate() {
            let line_number = index + 1;

            let Some((key, translation)) = split_line(line) else {
                if !is_blank_or_comment(line, &mut in_block_comment) {
                    diagnostics.push(Diagnostic::malformed_line(line_number, line));
                }
                continue;
            };

            for specifier in unsupported_specifiers(translation) {
                diagnostics.push(Diagnostic::unsupported_specifier(
                    line_number,
                    key,
                    &specifier,
                ));
            }

            let entry = Entry::new(key, types_from_format_string(translation));
            log::trace!("line {}: {}", line_number, entry);
            entries.push(SourcedEntry {
                source,
                line: line_number,
                entry,
            });
        }

        if self.options.strict {
            if let Some(first) = diagnostics.into_iter().next() {
                return Err(first.into_error());
            }
        } else {
            for diagnostic in &diagnostics {
                log::debug!("{}", diagnostic);
            }
            self.parse_diagnostics
                .extend(diagnostics.into_iter().map(|d| (source, d)));
        }

        log::debug!("parsed {} entries", entries.len());
        self.next_source();
        self.entries.extend(entries);
        Ok(())
    }

    /// Renders the Swift source for the current entries.
    ///
    /// Nothing is validated; calling this repeatedly without adding entries
    /// yields identical output.
    pub fn build(&self, enum_name: &str) -> String {
        log::debug!(
            "rendering enum `{}` with {} cases",
            enum_name,
            self.entries.len()
        );
        Template::new(enum_name, self.entries()).render()
    }

    /// Everything lenient parsing tolerated, plus duplicate case names.
    ///
    /// Findings are grouped by the call that added their input, in call
    /// order, and ordered by line within each group.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        let mut diagnostics = self.parse_diagnostics.clone();
        diagnostics.extend(self.sourced_duplicate_cases());
        diagnostics.sort_by_key(|(source, diagnostic)| (*source, diagnostic.line));
        diagnostics
            .into_iter()
            .map(|(_, diagnostic)| diagnostic)
            .collect()
    }

    /// Fails on the first key whose case name was already generated.
    pub fn validate(&self) -> Result<(), Error> {
        match self.sourced_duplicate_cases().into_iter().next() {
            Some((_, duplicate)) => Err(duplicate.into_error()),
            None => Ok(()),
        }
    }

    fn next_source(&mut self) -> usize {
        let source = self.sources;
        self.sources += 1;
        source
    }

    fn sourced_duplicate_cases(&self) -> Vec<(usize, Diagnostic)> {
        let mut first_seen = HashMap::<String, usize>::new();
        let mut duplicates = Vec::new();

        for sourced in &self.entries {
            let name = case_name(sourced.entry.key());
            match first_seen.get(&name) {
                Some(&first_line) => duplicates.push((
                    sourced.source,
                    Diagnostic {
                        line: sourced.line,
                        kind: DiagnosticKind::DuplicateCase {
                            key: sourced.entry.key().to_string(),
                            case_name: name,
                            first_line,
                        },
                    },
                )),
                None => {
                    first_seen.insert(name, sourced.line);
                }
            }
        }

        duplicates
    }
}

fn is_line_break(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{0b}' | '\u{0c}' | '\u{85}' | '\u{2028}' | '\u{2029}')
}

/// Splits at every newline character; `\r\n` counts as one break.
///
/// Like [`str::lines`], a trailing break does not produce an empty last line.
fn lines(content: &str) -> impl Iterator<Item = &str> {
    let mut rest = Some(content);
    std::iter::from_fn(move || {
        let text = rest?;
        let Some(at) = text.find(is_line_break) else {
            rest = None;
            return (!text.is_empty()).then_some(text);
        };
        let mut next = at + text[at..].chars().next()?.len_utf8();
        if text[at..].starts_with("\r\n") {
            next += 1;
        }
        rest = Some(&text[next..]);
        Some(&text[..at])
    })
}

/// Tracks `/* ... */` blocks across lines; `//` comments are single-line.
fn is_blank_or_comment(line: &str, in_block_comment: &mut bool) -> bool {
    let trimmed = line.trim();

    if *in_block_comment {
        if trimmed.contains("*/") {
            *in_block_comment = false;
        }
        return true;
    }

    if trimmed.is_empty() || trimmed.starts_with("//") {
        return true;
    }

    if let Some(rest) = trimmed.strip_prefix("/*") {
        if !rest.contains("*/") {
            *in_block_comment = true;
        }
        return true;
    }

    false
}
