use crate::core::parser::collect_tokens;
use crate::core::reader::read_lines;
use crate::core::word_count::count_words;
use crate::core::{ConfigProvider, Extraction, Pipeline, ResultSet, ResultValue};
use crate::domain::model::Utility;
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct WordCountPipeline {
    input: PathBuf,
}

impl WordCountPipeline {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.input_path())
    }
}

impl Pipeline for WordCountPipeline {
    type Record = String;

    fn utility(&self) -> Utility {
        Utility::WordCount
    }

    fn extract(&self) -> Result<Extraction<String>> {
        collect_tokens(read_lines(&self.input)?)
    }

    fn transform(&self, records: Vec<String>) -> Result<ResultSet> {
        let counts = count_words(records);

        let mut results = ResultSet::new();
        for (word, count) in counts.iter() {
            results.push(word.clone(), ResultValue::Count(count));
        }
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_counts_words_across_lines() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "the cat\n\nThe cat sat.\n  the  \n").unwrap();
        let pipeline = WordCountPipeline::new(file.path());

        let extraction = pipeline.extract().unwrap();
        assert!(extraction.rejected.is_empty());

        let results = pipeline.transform(extraction.records).unwrap();
        assert_eq!(
            results.lines(),
            vec!["the: 2", "cat: 2", "The: 1", "sat.: 1"]
        );
    }

    #[test]
    fn test_empty_file_has_no_entries() {
        let file = NamedTempFile::new().unwrap();
        let pipeline = WordCountPipeline::new(file.path());

        let extraction = pipeline.extract().unwrap();
        assert!(pipeline.transform(extraction.records).unwrap().is_empty());
    }
}
