pub mod conversion;
pub mod etl;
pub mod frequency;
pub mod parser;
pub mod reader;
pub mod statistics;
pub mod word_count;
pub mod writer;

pub use crate::domain::model::{Extraction, InvalidLine, ResultSet, ResultValue};
pub use crate::domain::ports::{ConfigProvider, Pipeline, ResultSink};
pub use crate::utils::error::Result;
