pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::{cli::LocalStorage, CliConfig};

pub use config::toml_config::TomlConfig;
pub use core::{render::OutputFormat, runner::SnippetRunner};
pub use domain::model::{SnippetInputs, SnippetReport};
pub use utils::error::{IdiomError, Result};
