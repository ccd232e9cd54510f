use std::fs;

use l10n_enum::{Diagnostic, EnumBuilder, Error, ParseOptions};

use crate::config::GenerateSettings;

/// The rendered Swift source and what was noticed while producing it.
#[derive(Debug, Clone)]
pub struct Generated {
    pub source: String,
    pub case_count: usize,
    pub diagnostics: Vec<Diagnostic>,
}

/// Parses the input file and renders it, without writing anything.
pub fn generate_swift(settings: &GenerateSettings) -> Result<Generated, Error> {
    let mut builder = EnumBuilder::with_options(ParseOptions::new().with_strict(settings.strict));
    builder.parse_file(&settings.input)?;
    if settings.strict {
        builder.validate()?;
    }

    Ok(Generated {
        source: builder.build(&settings.enum_name),
        case_count: builder.len(),
        diagnostics: builder.diagnostics(),
    })
}

/// Run the generate command: write the Swift enum to the output file or stdout.
pub fn run_generate_command(settings: &GenerateSettings) -> Result<(), String> {
    let generated = generate_swift(settings)
        .map_err(|e| format!("Error generating from {}: {}", settings.input, e))?;

    if settings.warnings {
        for diagnostic in &generated.diagnostics {
            eprintln!("warning: {}", diagnostic);
        }
    }

    match &settings.output {
        Some(output_path) => {
            fs::write(output_path, &generated.source)
                .map_err(|e| format!("Error writing to {}: {}", output_path, e))?;
            println!(
                "✅ Generated enum {} with {} case(s): {}",
                settings.enum_name, generated.case_count, output_path
            );
        }
        None => print!("{}", generated.source),
    }

    Ok(())
}
