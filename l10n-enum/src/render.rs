//! Swift source rendering.
//!
//! The output is produced by a fixed, ordered list of sections. Each section
//! writes whole lines through [`SourceWriter`], so indentation and line
//! endings are uniform and the output is fully determined by the entries.

use indoc::indoc;

use crate::{entry::Entry, identifier::swift_identifier};

const HEADER: &str = indoc! {"
    // AUTO-GENERATED FILE, DO NOT EDIT

    import Foundation
"};

type Section = fn(&Template<'_>, &mut SourceWriter);

const SECTIONS: [Section; 4] = [header, declaration, string_extension, free_function];

/// One enum case and the entry it was generated from.
pub(crate) struct Case<'a> {
    pub(crate) name: String,
    pub(crate) entry: &'a Entry,
}

impl<'a> Case<'a> {
    pub(crate) fn new(entry: &'a Entry) -> Self {
        Case {
            name: case_name(entry.key()),
            entry,
        }
    }

    fn arity(&self) -> usize {
        self.entry.types().len()
    }

    /// `case greeting(String, Int)`
    fn declaration(&self) -> String {
        if self.arity() == 0 {
            return format!("case {}", self.name);
        }
        let types = self
            .entry
            .types()
            .iter()
            .map(|kind| kind.swift_type())
            .collect::<Vec<_>>();
        format!("case {}({})", self.name, types.join(", "))
    }

    /// `case .greeting(let p0, let p1):`
    fn pattern(&self) -> String {
        if self.arity() == 0 {
            return format!("case .{}:", self.name);
        }
        let bindings = parameters(self.arity())
            .map(|p| format!("let {}", p))
            .collect::<Vec<_>>();
        format!("case .{}({}):", self.name, bindings.join(", "))
    }

    /// `return L10n.tr("greeting", p0, p1)`
    fn lookup(&self, enum_name: &str) -> String {
        let mut arguments = vec![string_literal(self.entry.key())];
        arguments.extend(parameters(self.arity()));
        format!("return {}.tr({})", enum_name, arguments.join(", "))
    }
}

/// The enum case name generated for a key.
///
/// `_` separates words here, so `user_name` becomes `userName`.
pub fn case_name(key: &str) -> String {
    swift_identifier(key, "_")
}

/// Quotes a key as a Swift string literal.
///
/// Backslash escapes are kept so the literal denotes the same key as the
/// `.strings` source; bare quotes and a dangling backslash are escaped.
fn string_literal(key: &str) -> String {
    let mut literal = String::with_capacity(key.len() + 2);
    literal.push('"');
    let mut escaped = false;
    for c in key.chars() {
        if c == '"' && !escaped {
            literal.push('\\');
        }
        escaped = c == '\\' && !escaped;
        literal.push(c);
    }
    if escaped {
        literal.push('\\');
    }
    literal.push('"');
    literal
}

fn parameters(count: usize) -> impl Iterator<Item = String> {
    (0..count).map(|i| format!("p{}", i))
}

/// Everything the sections need to render one enum.
pub(crate) struct Template<'a> {
    enum_name: String,
    cases: Vec<Case<'a>>,
}

impl<'a> Template<'a> {
    pub(crate) fn new<I>(enum_name: &str, entries: I) -> Self
    where
        I: IntoIterator<Item = &'a Entry>,
    {
        Template {
            enum_name: swift_identifier(enum_name, ""),
            cases: entries.into_iter().map(Case::new).collect(),
        }
    }

    pub(crate) fn render(&self) -> String {
        let mut writer = SourceWriter::default();
        for (index, section) in SECTIONS.iter().enumerate() {
            if index > 0 {
                writer.blank();
            }
            section(self, &mut writer);
        }
        writer.finish()
    }
}

fn header(_: &Template<'_>, out: &mut SourceWriter) {
    out.raw(HEADER);
}

fn declaration(template: &Template<'_>, out: &mut SourceWriter) {
    out.line(0, &format!("enum {} {{", template.enum_name));
    for case in &template.cases {
        out.line(1, &case.declaration());
    }
    out.line(0, "}");
}

fn string_extension(template: &Template<'_>, out: &mut SourceWriter) {
    let name = &template.enum_name;
    out.line(
        0,
        &format!("extension {} : CustomStringConvertible {{", name),
    );
    out.line(1, "var description : String { return self.string }");
    out.blank();

    out.line(1, "var string : String {");
    out.line(2, "switch self {");
    for case in &template.cases {
        out.line(3, &case.pattern());
        out.line(4, &case.lookup(name));
    }
    out.line(2, "}");
    out.line(1, "}");
    out.blank();

    lookup_helper(out);
    out.line(0, "}");
}

fn lookup_helper(out: &mut SourceWriter) {
    out.line(
        1,
        "private static func tr(_ key: String, _ args: CVarArg...) -> String {",
    );
    out.line(2, "let format = NSLocalizedString(key, comment: \"\")");
    out.line(
        2,
        "return String(format: format, locale: Locale.current, arguments: args)",
    );
    out.line(1, "}");
}

fn free_function(template: &Template<'_>, out: &mut SourceWriter) {
    out.line(
        0,
        &format!("func tr(_ key: {}) -> String {{", template.enum_name),
    );
    out.line(1, "return key.string");
    out.line(0, "}");
}

/// Line-oriented output buffer, indenting with tabs.
#[derive(Default)]
struct SourceWriter {
    out: String,
}

impl SourceWriter {
    fn line(&mut self, depth: usize, text: &str) {
        for _ in 0..depth {
            self.out.push('\t');
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }

    fn raw(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn finish(self) -> String {
        self.out
    }
}
