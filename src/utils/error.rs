use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("Cannot open input file '{}': {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cannot write results to '{}': {source}", .path.display())]
    OutputError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot write to console: {0}")]
    ConsoleError(#[source] std::io::Error),

    #[error("No valid data to process.")]
    NoValidData,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Output,
    Data,
    Configuration,
}

impl AggregateError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            AggregateError::FileAccess { .. } | AggregateError::IoError(_) => ErrorCategory::Input,
            AggregateError::OutputError { .. } | AggregateError::ConsoleError(_) => {
                ErrorCategory::Output
            }
            AggregateError::NoValidData => ErrorCategory::Data,
            AggregateError::ConfigError { .. }
            | AggregateError::InvalidConfigValueError { .. }
            | AggregateError::ConfigValidationError { .. } => ErrorCategory::Configuration,
        }
    }

    /// 給終端使用者看的訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            AggregateError::NoValidData => self.to_string(),
            AggregateError::FileAccess { .. }
            | AggregateError::OutputError { .. }
            | AggregateError::ConsoleError(_) => self.to_string(),
            AggregateError::IoError(e) => format!("Failed to read input: {}", e),
            _ => format!("Invalid configuration: {}", self),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Input => "Check that the input file exists, is readable and is UTF-8 text",
            ErrorCategory::Output => "Check write permissions for the output directory",
            ErrorCategory::Data => "Make sure the input file contains at least one valid number per line",
            ErrorCategory::Configuration => "Review the command line flags and the TOML configuration file",
        }
    }

    /// 所有致命錯誤一律以 1 結束
    pub fn exit_code(&self) -> i32 {
        1
    }
}

pub type Result<T> = std::result::Result<T, AggregateError>;
