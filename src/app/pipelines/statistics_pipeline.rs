use crate::core::parser::{collect_records, parse_float};
use crate::core::reader::read_lines;
use crate::core::statistics::summarize;
use crate::core::{ConfigProvider, Extraction, Pipeline, ResultSet, ResultValue};
use crate::domain::model::Utility;
use crate::utils::error::{AggregateError, Result};
use std::path::PathBuf;

pub struct StatisticsPipeline {
    input: PathBuf,
}

impl StatisticsPipeline {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.input_path())
    }
}

impl Pipeline for StatisticsPipeline {
    type Record = f64;

    fn utility(&self) -> Utility {
        Utility::Statistics
    }

    fn extract(&self) -> Result<Extraction<f64>> {
        collect_records(read_lines(&self.input)?, parse_float)
    }

    fn transform(&self, records: Vec<f64>) -> Result<ResultSet> {
        // 沒有有效資料就中止，不寫任何輸出
        if records.is_empty() {
            return Err(AggregateError::NoValidData);
        }

        let summary = summarize(&records);

        let mut results = ResultSet::new();
        results.push(
            "Filename",
            ResultValue::Text(self.input.display().to_string()),
        );
        results.push("Mean", ResultValue::Number(summary.mean));
        results.push("Median", ResultValue::Number(summary.median));
        results.push("Mode", summary.mode.into());
        results.push("Standard Deviation", ResultValue::Number(summary.std_dev));
        results.push("Variance", ResultValue::Number(summary.variance));
        Ok(results)
    }
}
