use crate::utils::error::{AggregateError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let path_str = path.to_string_lossy();

    if path_str.is_empty() {
        return Err(AggregateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path_str.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path_str.contains('\0') {
        return Err(AggregateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path_str.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸出檔名只能是單一檔名，目錄由 output.directory 決定
pub fn validate_file_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains('/') || name.contains('\\') || name.contains('\0') {
        return Err(AggregateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "File name must not contain path separators".to_string(),
        });
    }

    Ok(())
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(AggregateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unknown log level. Valid levels: {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(AggregateError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}
