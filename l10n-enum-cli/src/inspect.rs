use l10n_enum::{Diagnostic, EnumBuilder, Error, ParseOptions, PlaceholderType, case_name};
use serde::Serialize;

/// JSON view of a parsed `.strings` file.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport {
    pub entries: Vec<InspectedEntry>,
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Debug, Clone, Serialize)]
pub struct InspectedEntry {
    pub key: String,
    pub case_name: String,
    pub types: Vec<PlaceholderType>,
}

pub fn inspect_file(input: &str, strict: bool) -> Result<InspectReport, Error> {
    let mut builder = EnumBuilder::with_options(ParseOptions::new().with_strict(strict));
    builder.parse_file(input)?;

    let entries = builder
        .entries()
        .map(|entry| InspectedEntry {
            key: entry.key().to_string(),
            case_name: case_name(entry.key()),
            types: entry.types().to_vec(),
        })
        .collect();

    Ok(InspectReport {
        entries,
        diagnostics: builder.diagnostics(),
    })
}

/// Run the inspect command: print parsed entries and diagnostics as JSON.
pub fn run_inspect_command(input: &str, strict: bool) -> Result<(), String> {
    let report = inspect_file(input, strict).map_err(|e| format!("Error reading {}: {}", input, e))?;
    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| format!("Error serializing to JSON: {}", e))?;
    println!("{}", json);
    Ok(())
}
