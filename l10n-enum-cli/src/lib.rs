//! CLI library for testing purposes

pub mod config;
pub mod generate;
pub mod inspect;

pub use config::{Config, GenerateSettings};
pub use generate::{Generated, generate_swift};
pub use inspect::{InspectReport, inspect_file};
