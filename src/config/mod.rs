#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::render::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "small-idioms")]
#[command(about = "Runs short demonstrations of idiomatic data derivation")]
pub struct CliConfig {
    /// Snippets to run, in order (default: all)
    #[arg(short, long = "snippet", value_delimiter = ',')]
    pub snippets: Vec<String>,

    /// Path to a TOML file overriding the literal inputs
    #[arg(short, long)]
    pub config: Option<String>,

    /// Output format: text, json or csv
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// List available snippets and exit
    #[arg(long)]
    pub list: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn output_format(&self) -> Result<OutputFormat> {
        self.format.parse()
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_one_of("format", &self.format.to_ascii_lowercase(), &OutputFormat::NAMES)?;

        if let Some(config) = &self.config {
            validation::validate_path("config", config)?;
        }

        if let Some(output) = &self.output {
            validation::validate_path("output", output)?;
        }

        for name in &self.snippets {
            validation::validate_non_empty_string("snippet", name)?;
        }

        Ok(())
    }
}
