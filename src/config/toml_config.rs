use crate::domain::model::{SnippetInputs, Stock};
use crate::utils::error::{IdiomError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU64;
use std::path::Path;
use std::sync::OnceLock;

/// Input overrides loaded from a TOML file. Every key is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub inputs: InputsConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputsConfig {
    pub lengths: Option<Vec<i64>>,
    pub numbers: Option<Vec<i64>>,
    pub matrix: Option<Vec<Vec<i64>>>,
    pub stock: Option<Stock>,
    pub order: Option<Vec<String>>,
    pub batch_size: Option<u64>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid"))
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置；讀取失敗視為配置錯誤
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| IdiomError::ConfigParseError {
                field: "config".to_string(),
                message: format!("{}: {}", path.display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| IdiomError::ConfigParseError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// Overlays the configured values onto the defaults.
    pub fn resolve(&self) -> Result<SnippetInputs> {
        self.validate()?;

        let defaults = SnippetInputs::default();
        let inputs = self.inputs.clone();

        let batch_size = match inputs.batch_size {
            Some(size) => NonZeroU64::new(size).ok_or_else(|| IdiomError::InvalidConfigValueError {
                field: "inputs.batch_size".to_string(),
                value: size.to_string(),
                reason: "Batch size must be at least 1".to_string(),
            })?,
            None => defaults.batch_size,
        };

        let resolved = SnippetInputs {
            lengths: inputs.lengths.unwrap_or(defaults.lengths),
            numbers: inputs.numbers.unwrap_or(defaults.numbers),
            matrix: inputs.matrix.unwrap_or(defaults.matrix),
            stock: inputs.stock.unwrap_or(defaults.stock),
            order: inputs.order.unwrap_or(defaults.order),
            batch_size,
        };

        tracing::debug!("Resolved inputs: {:?}", resolved);
        Ok(resolved)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(size) = self.inputs.batch_size {
            validation::validate_positive_number("inputs.batch_size", size, 1)?;
        }

        if let Some(order) = &self.inputs.order {
            for (index, name) in order.iter().enumerate() {
                validation::validate_non_empty_string(&format!("inputs.order[{}]", index), name)?;
            }
        }

        if let Some(stock) = &self.inputs.stock {
            for name in stock.keys() {
                validation::validate_non_empty_string("inputs.stock", name)?;
            }
        }

        Ok(())
    }
}
