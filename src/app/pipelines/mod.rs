pub mod conversion_pipeline;
pub mod statistics_pipeline;
pub mod word_count_pipeline;

pub use conversion_pipeline::ConversionPipeline;
pub use statistics_pipeline::StatisticsPipeline;
pub use word_count_pipeline::WordCountPipeline;
