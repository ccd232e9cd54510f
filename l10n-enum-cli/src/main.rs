use clap::{Parser, Subcommand};
use l10n_enum_cli::{
    Config, GenerateSettings, generate::run_generate_command, inspect::run_inspect_command,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate a Swift enum from a .strings file.
    Generate {
        /// The .strings file to read
        #[arg(short, long)]
        input: String,

        /// The Swift file to write (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,

        /// Name of the generated enum [default: L10n]
        #[arg(short = 'n', long)]
        enum_name: Option<String>,

        /// Fail on malformed lines, unsupported placeholders and duplicate cases
        #[arg(long)]
        strict: bool,

        /// Print diagnostics to stderr
        #[arg(short, long)]
        warnings: bool,

        /// Optional TOML config file
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Print the entries parsed from a .strings file as JSON.
    Inspect {
        /// The .strings file to read
        #[arg(short, long)]
        input: String,

        /// Fail on malformed lines and unsupported placeholders
        #[arg(long)]
        strict: bool,
    },
}

fn main() {
    let args = Args::parse();

    let result = match args.commands {
        Commands::Generate {
            input,
            output,
            enum_name,
            strict,
            warnings,
            config,
        } => load_config(config.as_deref())
            .and_then(|config| {
                GenerateSettings::resolve(input, output, enum_name, strict, warnings, config.as_ref())
                    .map_err(|e| e.to_string())
            })
            .and_then(|settings| run_generate_command(&settings)),
        Commands::Inspect { input, strict } => run_inspect_command(&input, strict),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&str>) -> Result<Option<Config>, String> {
    path.map(|path| Config::load(path).map_err(|e| format!("Error reading {}: {}", path, e)))
        .transpose()
}
