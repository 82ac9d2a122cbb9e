use crate::app::pipelines::{ConversionPipeline, StatisticsPipeline, WordCountPipeline};
use crate::config::Settings;
use crate::core::etl::EtlEngine;
use crate::core::writer::AppendFileSink;
use crate::core::ConfigProvider;
use crate::domain::model::{RunSummary, Utility};
use crate::utils::error::Result;

/// Runs one utility end to end: read, parse, aggregate, write.
pub fn run_utility(utility: Utility, settings: &Settings) -> Result<RunSummary> {
    let sink = AppendFileSink::new(settings.output_path(utility));
    let monitor = settings.monitoring_enabled();

    match utility {
        Utility::Statistics => {
            EtlEngine::new_with_monitoring(StatisticsPipeline::from_config(settings), sink, monitor)
                .run()
        }
        Utility::Conversion => {
            EtlEngine::new_with_monitoring(ConversionPipeline::from_config(settings), sink, monitor)
                .run()
        }
        Utility::WordCount => {
            EtlEngine::new_with_monitoring(WordCountPipeline::from_config(settings), sink, monitor)
                .run()
        }
    }
}

#[cfg(feature = "cli")]
pub use cli::{exit_on_usage_error, parse_cli, run_cli};

#[cfg(feature = "cli")]
mod cli {
    use super::run_utility;
    use crate::config::{CliConfig, Settings};
    use crate::domain::model::Utility;
    use crate::utils::error::AggregateError;
    use crate::utils::logger;
    use crate::utils::validation::Validate;
    use anyhow::Context;
    use clap::error::ErrorKind;
    use clap::{CommandFactory, FromArgMatches};

    /// 解析單一工具的命令列；參數錯誤以狀態碼 1 結束
    pub fn parse_cli(utility: Utility) -> CliConfig {
        let command = CliConfig::command()
            .name(utility.program_name())
            .about(about(utility));

        let matches = command
            .try_get_matches()
            .unwrap_or_else(|e| exit_on_usage_error(e, &utility.usage()));

        CliConfig::from_arg_matches(&matches)
            .unwrap_or_else(|e| exit_on_usage_error(e, &utility.usage()))
    }

    pub fn exit_on_usage_error(err: clap::Error, usage: &str) -> ! {
        match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                let _ = err.print();
                eprintln!("{}", usage);
                std::process::exit(1);
            }
        }
    }

    fn about(utility: Utility) -> &'static str {
        match utility {
            Utility::Statistics => "Compute mean, median, mode, variance and standard deviation",
            Utility::Conversion => "Convert integers to binary and hexadecimal",
            Utility::WordCount => "Count the occurrences of each distinct word",
        }
    }

    fn load_validated(cli: &CliConfig) -> anyhow::Result<Settings> {
        let settings = cli
            .load_settings()
            .context("Failed to load configuration")?;
        settings.validate().context("Invalid configuration")?;
        Ok(settings)
    }

    /// Returns the process exit code.
    pub fn run_cli(utility: Utility, cli: CliConfig) -> i32 {
        let settings = match load_validated(&cli) {
            Ok(settings) => settings,
            Err(e) => {
                eprintln!("❌ {:#}", e);
                return match e.downcast_ref::<AggregateError>() {
                    Some(cause) => {
                        eprintln!("💡 {}", cause.recovery_suggestion());
                        cause.exit_code()
                    }
                    None => 1,
                };
            }
        };

        logger::init_cli_logger(settings.verbose, settings.log_level.as_deref());
        tracing::debug!("Settings: {:?}", settings);

        match run_utility(utility, &settings) {
            Ok(summary) => {
                tracing::info!(
                    "📁 {} records ({} rejected) -> {} in {:?}",
                    summary.records,
                    summary.rejected,
                    summary.output_path.display(),
                    summary.elapsed
                );
                0
            }
            Err(e) => {
                tracing::error!(
                    "❌ {} run failed: {} (Category: {:?})",
                    utility,
                    e,
                    e.category()
                );
                tracing::debug!("💡 Recovery suggestion: {}", e.recovery_suggestion());

                eprintln!("{}", e.user_friendly_message());
                if matches!(e, AggregateError::FileAccess { .. }) {
                    eprintln!("{}", utility.usage());
                }
                e.exit_code()
            }
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::core::ConfigProvider;
        use clap::Parser;
        use std::io::Write;
        use std::path::PathBuf;
        use tempfile::NamedTempFile;

        fn cli_with_config(toml: &str) -> (CliConfig, NamedTempFile) {
            let mut file = NamedTempFile::new().unwrap();
            write!(file, "{}", toml).unwrap();
            let path = file.path().to_string_lossy().to_string();
            let cli =
                CliConfig::try_parse_from(["compute_statistics", "data.txt", "--config", &path])
                    .unwrap();
            (cli, file)
        }

        #[test]
        fn test_bad_toml_level_keeps_its_cause() {
            let (cli, _file) = cli_with_config("[logging]\nlevel = \"chatty\"\n");

            let err = load_validated(&cli).unwrap_err();
            let rendered = format!("{:#}", err);

            assert!(rendered.starts_with("Failed to load configuration: "));
            assert!(rendered.contains("logging.level"));
            assert!(err.downcast_ref::<AggregateError>().is_some());
        }

        #[test]
        fn test_empty_input_path_fails_validation() {
            let cli = CliConfig {
                input_file: PathBuf::new(),
                config: None,
                output_dir: None,
                verbose: false,
                monitor: false,
            };

            let err = load_validated(&cli).unwrap_err();
            let rendered = format!("{:#}", err);

            assert!(rendered.starts_with("Invalid configuration: "));
            assert!(rendered.contains("input_file"));
        }

        #[test]
        fn test_unreadable_config_is_a_load_failure() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("missing.toml");
            let cli = CliConfig::try_parse_from([
                "compute_statistics",
                "data.txt",
                "--config",
                &path.to_string_lossy(),
            ])
            .unwrap();

            let err = load_validated(&cli).unwrap_err();
            assert!(format!("{:#}", err).starts_with("Failed to load configuration: "));
        }

        #[test]
        fn test_valid_config_loads() {
            let (cli, _file) = cli_with_config("[monitoring]\nenabled = true\n");
            let settings = load_validated(&cli).unwrap();
            assert!(settings.monitoring_enabled());
        }
    }
}
