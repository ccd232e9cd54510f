use l10n_enum::{DEFAULT_ENUM_NAME, EnumBuilder, Error, ParseOptions, PlaceholderType};
use std::fs;
use tempfile::TempDir;

const CONTENT: &str = "/* Greeting */\n\"greeting\" = \"Hello %@!\";\n\"count\" = \"%d items\";\n";

#[test]
fn test_parse_utf8_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Localizable.strings");
    fs::write(&path, CONTENT).unwrap();

    let mut builder = EnumBuilder::new();
    builder.parse_file(&path).unwrap();

    let entries = builder.entries().collect::<Vec<_>>();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].key(), "greeting");
    assert_eq!(entries[1].types(), &[PlaceholderType::Integer]);
}

#[test]
fn test_parse_utf16le_file_with_bom() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Localizable.strings");

    let mut bytes = vec![0xFF, 0xFE];
    for unit in CONTENT.encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    fs::write(&path, bytes).unwrap();

    let mut builder = EnumBuilder::new();
    builder.parse_file(&path).unwrap();

    assert_eq!(builder.len(), 2);
    assert!(builder.build(DEFAULT_ENUM_NAME).contains("case greeting(String)"));
}

#[test]
fn test_missing_file_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("missing.strings");

    let mut builder = EnumBuilder::new();
    let error = builder.parse_file(&path).unwrap_err();
    assert!(matches!(error, Error::Io(_)));
    assert!(builder.is_empty());
}

#[test]
fn test_invalid_utf8_is_an_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("broken.strings");
    fs::write(&path, [b'"', 0xC3, 0x28, b'"']).unwrap();

    let mut builder = EnumBuilder::new();
    assert!(matches!(builder.parse_file(&path), Err(Error::Io(_))));
}

#[test]
fn test_strict_file_parse_reports_line() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("Localizable.strings");
    fs::write(&path, "\"ok\" = \"fine\";\n\"sale\" = \"50%% off\";\n").unwrap();

    let mut builder = EnumBuilder::with_options(ParseOptions::new().with_strict(true));
    let error = builder.parse_file(&path).unwrap_err();
    assert_eq!(
        error.to_string(),
        "line 2: unsupported placeholder `%%` in `sale`"
    );
}

#[test]
fn test_multiple_files_accumulate() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("First.strings");
    let second = temp_dir.path().join("Second.strings");
    fs::write(&first, "\"a\" = \"A\";\n").unwrap();
    fs::write(&second, "\"b\" = \"%f\";\n").unwrap();

    let mut builder = EnumBuilder::new();
    builder.parse_file(&first).unwrap();
    builder.parse_file(&second).unwrap();

    let keys = builder.entries().map(|e| e.key()).collect::<Vec<_>>();
    assert_eq!(keys, vec!["a", "b"]);
}
