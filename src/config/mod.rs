#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use toml_config::TomlConfig;

use crate::core::ConfigProvider;
use crate::domain::model::Utility;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_file_name, validate_log_level, validate_path, Validate,
};
use std::path::{Path, PathBuf};

/// Resolved run settings.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub input_file: PathBuf,
    pub output_dir: PathBuf,
    pub statistics_file: String,
    pub conversion_file: String,
    pub word_count_file: String,
    pub log_level: Option<String>,
    pub verbose: bool,
    pub monitor: bool,
}

impl Settings {
    pub fn new(input_file: impl Into<PathBuf>) -> Self {
        Self {
            input_file: input_file.into(),
            output_dir: PathBuf::from("."),
            statistics_file: Utility::Statistics.default_output_file().to_string(),
            conversion_file: Utility::Conversion.default_output_file().to_string(),
            word_count_file: Utility::WordCount.default_output_file().to_string(),
            log_level: None,
            verbose: false,
            monitor: false,
        }
    }

    pub fn with_toml(mut self, toml: &TomlConfig) -> Self {
        if let Some(directory) = &toml.output.directory {
            self.output_dir = directory.clone();
        }
        if let Some(name) = &toml.output.statistics_file {
            self.statistics_file = name.clone();
        }
        if let Some(name) = &toml.output.conversion_file {
            self.conversion_file = name.clone();
        }
        if let Some(name) = &toml.output.word_count_file {
            self.word_count_file = name.clone();
        }
        if let Some(level) = toml.log_level() {
            self.log_level = Some(level.to_string());
        }
        self.monitor |= toml.monitoring_enabled();
        self
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_monitoring(mut self, enabled: bool) -> Self {
        self.monitor = enabled;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn output_file_name(&self, utility: Utility) -> &str {
        match utility {
            Utility::Statistics => &self.statistics_file,
            Utility::Conversion => &self.conversion_file,
            Utility::WordCount => &self.word_count_file,
        }
    }
}

impl ConfigProvider for Settings {
    fn input_path(&self) -> &Path {
        &self.input_file
    }

    fn output_path(&self, utility: Utility) -> PathBuf {
        crate::core::writer::output_file(&self.output_dir, self.output_file_name(utility))
    }

    fn monitoring_enabled(&self) -> bool {
        self.monitor
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("input_file", &self.input_file)?;
        validate_path("output_dir", &self.output_dir)?;
        validate_file_name("output.statistics_file", &self.statistics_file)?;
        validate_file_name("output.conversion_file", &self.conversion_file)?;
        validate_file_name("output.word_count_file", &self.word_count_file)?;
        if let Some(level) = &self.log_level {
            validate_log_level("logging.level", level)?;
        }
        Ok(())
    }
}
