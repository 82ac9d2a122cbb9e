use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
pub struct CliConfig {
    /// Text file with one record per line
    pub input_file: PathBuf,

    /// Optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory for the results file (defaults to the current directory)
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log process CPU and memory after each stage")]
    pub monitor: bool,
}

impl CliConfig {
    /// 命令列 > TOML > 預設值
    pub fn load_settings(&self) -> Result<Settings> {
        let mut settings = Settings::new(&self.input_file);

        if let Some(path) = &self.config {
            let toml = TomlConfig::from_file(path)?;
            settings = settings.with_toml(&toml);
        }

        if let Some(dir) = &self.output_dir {
            settings = settings.with_output_dir(dir);
        }

        if self.monitor {
            settings = settings.with_monitoring(true);
        }

        Ok(settings.with_verbose(self.verbose))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ConfigProvider;
    use crate::domain::model::Utility;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_positional_input() {
        let cli = CliConfig::try_parse_from(["compute_statistics", "data.txt"]).unwrap();
        assert_eq!(cli.input_file, PathBuf::from("data.txt"));
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_missing_or_extra_arguments_are_rejected() {
        assert!(CliConfig::try_parse_from(["compute_statistics"]).is_err());
        assert!(CliConfig::try_parse_from(["compute_statistics", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn test_cli_flags_override_toml() {
        let mut toml_file = NamedTempFile::new().unwrap();
        write!(
            toml_file,
            "[output]\ndirectory = \"from-toml\"\nconversion_file = \"conv.txt\"\n"
        )
        .unwrap();

        let cli = CliConfig::try_parse_from([
            "convert_numbers",
            "numbers.txt",
            "--config",
            toml_file.path().to_str().unwrap(),
            "--output-dir",
            "from-cli",
        ])
        .unwrap();

        let settings = cli.load_settings().unwrap();
        assert_eq!(
            settings.output_path(Utility::Conversion),
            PathBuf::from("from-cli").join("conv.txt")
        );
    }
}
