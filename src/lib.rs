pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::pipelines::{ConversionPipeline, StatisticsPipeline, WordCountPipeline};
pub use app::run_utility;
pub use config::{Settings, TomlConfig};
pub use crate::core::{etl::EtlEngine, writer::AppendFileSink};
pub use domain::model::{ResultSet, ResultValue, RunSummary, Utility};
pub use utils::error::{AggregateError, Result};
