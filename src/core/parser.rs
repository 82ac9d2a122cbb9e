use crate::domain::model::{Extraction, InvalidLine};
use crate::utils::error::Result;
use std::str::FromStr;

pub fn parse_float(line: &str) -> std::result::Result<f64, InvalidLine> {
    parse_trimmed(line)
}

pub fn parse_int(line: &str) -> std::result::Result<i64, InvalidLine> {
    parse_trimmed(line)
}

fn parse_trimmed<T>(line: &str) -> std::result::Result<T, InvalidLine>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let text = line.trim();
    text.parse::<T>().map_err(|e| InvalidLine {
        text: text.to_string(),
        reason: e.to_string(),
    })
}

/// Whitespace-separated tokens; blank lines yield nothing.
pub fn tokenize(line: &str) -> impl Iterator<Item = &str> {
    line.split_whitespace()
}

/// Parses one record per line, keeping rejected lines aside instead of
/// failing. Read errors stay fatal.
pub fn collect_records<I, T, F>(lines: I, parse: F) -> Result<Extraction<T>>
where
    I: IntoIterator<Item = std::io::Result<String>>,
    F: Fn(&str) -> std::result::Result<T, InvalidLine>,
{
    let mut extraction = Extraction::default();

    for line in lines {
        let line = line?;
        extraction.lines_read += 1;

        match parse(&line) {
            Ok(record) => extraction.records.push(record),
            Err(invalid) => {
                tracing::debug!("Rejected line {}: {}", extraction.lines_read, invalid);
                extraction.rejected.push(invalid);
            }
        }
    }

    Ok(extraction)
}

pub fn collect_tokens<I>(lines: I) -> Result<Extraction<String>>
where
    I: IntoIterator<Item = std::io::Result<String>>,
{
    let mut extraction = Extraction::default();

    for line in lines {
        let line = line?;
        extraction.lines_read += 1;
        extraction
            .records
            .extend(tokenize(&line).map(str::to_string));
    }

    Ok(extraction)
}
