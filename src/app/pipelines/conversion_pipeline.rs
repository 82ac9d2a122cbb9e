use crate::core::conversion::convert;
use crate::core::parser::{collect_records, parse_int};
use crate::core::reader::read_lines;
use crate::core::{ConfigProvider, Extraction, Pipeline, ResultSet, ResultValue};
use crate::domain::model::Utility;
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct ConversionPipeline {
    input: PathBuf,
}

impl ConversionPipeline {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.input_path())
    }
}

impl Pipeline for ConversionPipeline {
    type Record = i64;

    fn utility(&self) -> Utility {
        Utility::Conversion
    }

    fn extract(&self) -> Result<Extraction<i64>> {
        collect_records(read_lines(&self.input)?, parse_int)
    }

    /// 空輸入合法，只會留下計時行
    fn transform(&self, records: Vec<i64>) -> Result<ResultSet> {
        let mut results = ResultSet::new();
        for number in records {
            results.push("Number", ResultValue::Conversion(convert(number)));
        }
        Ok(results)
    }
}
