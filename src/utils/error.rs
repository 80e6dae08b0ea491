use thiserror::Error;

#[derive(Error, Debug)]
pub enum IdiomError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Empty input: {what} must contain at least one value")]
    EmptyInput { what: String },

    #[error("Arithmetic overflow computing {what}")]
    ArithmeticOverflow { what: String },

    #[error("Unknown snippet: {name}")]
    UnknownSnippet { name: String },

    #[error("Configuration parse error in '{field}': {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Bad flags or config; nothing ran.
    Config,
    /// A snippet rejected its inputs.
    Snippet,
    /// Rendering or writing output failed.
    Output,
}

impl IdiomError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            IdiomError::ConfigParseError { .. }
            | IdiomError::InvalidConfigValueError { .. }
            | IdiomError::UnknownSnippet { .. } => ErrorSeverity::Config,
            IdiomError::EmptyInput { .. } | IdiomError::ArithmeticOverflow { .. } => {
                ErrorSeverity::Snippet
            }
            IdiomError::IoError(_)
            | IdiomError::SerializationError(_)
            | IdiomError::CsvError(_) => ErrorSeverity::Output,
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Config => 1,
            ErrorSeverity::Snippet => 2,
            ErrorSeverity::Output => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            IdiomError::EmptyInput { what } => {
                format!("Cannot summarize '{}': the list is empty", what)
            }
            IdiomError::ArithmeticOverflow { what } => {
                format!("The {} does not fit in a 64-bit integer", what)
            }
            IdiomError::UnknownSnippet { name } => {
                format!("No snippet named '{}'. Run with --list to see them all", name)
            }
            IdiomError::ConfigParseError { field, message } => {
                format!("Could not read configuration ({}): {}", field, message)
            }
            IdiomError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is not valid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, IdiomError>;
