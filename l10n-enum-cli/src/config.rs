//! Optional TOML configuration for the `generate` command.
//!
//! ```toml
//! enum_name = "Strings"
//! strict = true
//! warnings = true
//! ```
//!
//! Command-line flags take precedence over the file.

use std::{fs, path::Path};

use l10n_enum::{DEFAULT_ENUM_NAME, Error};
use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub enum_name: Option<String>,
    pub strict: Option<bool>,
    pub warnings: Option<bool>,
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, Error> {
        toml::from_str(content).map_err(|e| Error::invalid_config(e.to_string()))
    }
}

/// Fully resolved options for one `generate` run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateSettings {
    pub input: String,
    pub output: Option<String>,
    pub enum_name: String,
    pub strict: bool,
    pub warnings: bool,
}

impl GenerateSettings {
    /// Merges command-line values over the config file over defaults.
    ///
    /// `strict` and `warnings` are switches: either source can enable them.
    pub fn resolve(
        input: String,
        output: Option<String>,
        enum_name: Option<String>,
        strict: bool,
        warnings: bool,
        config: Option<&Config>,
    ) -> Result<Self, Error> {
        let config = config.cloned().unwrap_or_default();

        let enum_name = enum_name
            .or(config.enum_name)
            .unwrap_or_else(|| DEFAULT_ENUM_NAME.to_string());
        if enum_name.trim().is_empty() {
            return Err(Error::invalid_config("enum name must not be empty"));
        }

        Ok(GenerateSettings {
            input,
            output,
            enum_name,
            strict: strict || config.strict.unwrap_or(false),
            warnings: warnings || config.warnings.unwrap_or(false),
        })
    }
}
