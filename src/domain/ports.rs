use crate::domain::model::{Extraction, InvalidLine, OutputLayout, ResultSet, Utility};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

/// Where results end up: console echo plus an append-only results file.
pub trait ResultSink {
    /// Console-only diagnostic for a rejected line.
    fn report_invalid(&mut self, invalid: &InvalidLine) -> Result<()>;
    fn write_results(&mut self, results: &ResultSet, leading_blank_line: bool) -> Result<()>;
    /// Final line written without a trailing newline.
    fn write_trailer(&mut self, line: &str) -> Result<()>;
    fn location(&self) -> PathBuf;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &Path;
    fn output_path(&self, utility: Utility) -> PathBuf;
    fn monitoring_enabled(&self) -> bool;
}

pub trait Pipeline {
    type Record;

    fn utility(&self) -> Utility;

    fn layout(&self) -> OutputLayout {
        self.utility().layout()
    }

    fn extract(&self) -> Result<Extraction<Self::Record>>;
    fn transform(&self, records: Vec<Self::Record>) -> Result<ResultSet>;
}
