use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// The three line-record aggregations shipped by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Utility {
    Statistics,
    Conversion,
    WordCount,
}

impl Utility {
    pub fn default_output_file(&self) -> &'static str {
        match self {
            Utility::Statistics => "StatisticsResults.txt",
            Utility::Conversion => "ConversionResults.txt",
            Utility::WordCount => "WordCountResults.txt",
        }
    }

    pub fn program_name(&self) -> &'static str {
        match self {
            Utility::Statistics => "compute_statistics",
            Utility::Conversion => "convert_numbers",
            Utility::WordCount => "word_count",
        }
    }

    pub fn usage(&self) -> String {
        format!("Usage: {} fileWithData.txt", self.program_name())
    }

    /// 各工具計時範圍與輸出排版
    pub fn layout(&self) -> OutputLayout {
        match self {
            Utility::Statistics => OutputLayout {
                timing: TimingScope::Aggregation,
                elapsed: ElapsedPlacement::Entry,
                leading_blank_line: false,
            },
            Utility::Conversion => OutputLayout {
                timing: TimingScope::AggregationAndWrite,
                elapsed: ElapsedPlacement::Trailer,
                leading_blank_line: false,
            },
            Utility::WordCount => OutputLayout {
                timing: TimingScope::WholeRun,
                elapsed: ElapsedPlacement::Trailer,
                leading_blank_line: true,
            },
        }
    }
}

impl fmt::Display for Utility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Utility::Statistics => "statistics",
            Utility::Conversion => "conversion",
            Utility::WordCount => "word-count",
        };
        f.write_str(name)
    }
}

/// Which stages the reported elapsed time covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimingScope {
    Aggregation,
    AggregationAndWrite,
    WholeRun,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElapsedPlacement {
    /// Appended to the result set as the last `Execution Time` entry.
    Entry,
    /// Written after the entries as a bare line without a trailing newline.
    Trailer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputLayout {
    pub timing: TimingScope,
    pub elapsed: ElapsedPlacement,
    pub leading_blank_line: bool,
}

/// A line that could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Error parsing line '{text}': {reason}")]
pub struct InvalidLine {
    pub text: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<R> {
    pub records: Vec<R>,
    pub rejected: Vec<InvalidLine>,
    pub lines_read: usize,
}

impl<R> Default for Extraction<R> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            rejected: Vec::new(),
            lines_read: 0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conversion {
    pub number: i64,
    pub binary: String,
    pub hexadecimal: String,
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Binary: {}, Hexadecimal: {}",
            self.number, self.binary, self.hexadecimal
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultValue {
    Number(f64),
    Numbers(Vec<f64>),
    Text(String),
    Count(usize),
    Conversion(Conversion),
}

impl fmt::Display for ResultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultValue::Number(value) => f.write_str(&format_number(*value)),
            ResultValue::Numbers(values) => {
                let rendered: Vec<String> = values.iter().map(|v| format_number(*v)).collect();
                write!(f, "[{}]", rendered.join(", "))
            }
            ResultValue::Text(text) => f.write_str(text),
            ResultValue::Count(count) => write!(f, "{}", count),
            ResultValue::Conversion(conversion) => write!(f, "{}", conversion),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntry {
    pub label: String,
    pub value: ResultValue,
}

impl fmt::Display for ResultEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

/// Ordered `label -> value` results. Labels may repeat (one conversion
/// entry per input number), insertion order is the write order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    entries: Vec<ResultEntry>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, label: impl Into<String>, value: ResultValue) {
        self.entries.push(ResultEntry {
            label: label.into(),
            value,
        });
    }

    /// First entry carrying `label`.
    pub fn get(&self, label: &str) -> Option<&ResultValue> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.value)
    }

    pub fn entries(&self) -> &[ResultEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn lines(&self) -> Vec<String> {
        self.entries.iter().map(ToString::to_string).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub utility: Utility,
    pub output_path: PathBuf,
    pub records: usize,
    pub rejected: usize,
    pub entries: usize,
    pub elapsed: Duration,
}

pub const EXECUTION_TIME_LABEL: &str = "Execution Time";

pub fn format_elapsed(elapsed: Duration) -> String {
    format!("{:.2} seconds", elapsed.as_secs_f64())
}

/// Renders a float the way the results files have always shown them:
/// whole values keep a `.0`, tiny and huge magnitudes switch to `1e-05` /
/// `1e+16` style exponents.
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let scientific = format!("{:e}", value);
    if let Some((mantissa, exponent)) = scientific.split_once('e') {
        if let Ok(exponent) = exponent.parse::<i32>() {
            if !(-4..16).contains(&exponent) {
                let sign = if exponent < 0 { '-' } else { '+' };
                return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
            }
        }
    }

    let plain = value.to_string();
    if plain.contains('.') {
        plain
    } else {
        format!("{}.0", plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_keeps_decimal_point() {
        assert_eq!(format_number(3.0), "3.0");
        assert_eq!(format_number(-12.0), "-12.0");
        assert_eq!(format_number(2.5), "2.5");
        assert_eq!(format_number(0.0), "0.0");
        assert_eq!(format_number(1.6666666666666667), "1.6666666666666667");
    }

    #[test]
    fn test_format_number_exponents() {
        assert_eq!(format_number(1e16), "1e+16");
        assert_eq!(format_number(1.5e20), "1.5e+20");
        assert_eq!(format_number(0.00001), "1e-05");
        assert_eq!(format_number(0.0001), "0.0001");
        assert_eq!(format_number(1e15), "1000000000000000.0");
    }

    #[test]
    fn test_format_number_special_values() {
        assert_eq!(format_number(f64::NAN), "nan");
        assert_eq!(format_number(f64::INFINITY), "inf");
        assert_eq!(format_number(f64::NEG_INFINITY), "-inf");
    }

    #[test]
    fn test_result_value_display() {
        assert_eq!(ResultValue::Numbers(vec![1.0, 2.5]).to_string(), "[1.0, 2.5]");
        assert_eq!(ResultValue::Count(4).to_string(), "4");

        let conversion = ResultValue::Conversion(Conversion {
            number: 10,
            binary: "1010".to_string(),
            hexadecimal: "A".to_string(),
        });
        assert_eq!(conversion.to_string(), "10, Binary: 1010, Hexadecimal: A");
    }

    #[test]
    fn test_result_set_preserves_insertion_order() {
        let mut results = ResultSet::new();
        results.push("Mean", ResultValue::Number(2.5));
        results.push("Mode", ResultValue::Number(1.0));
        results.push("Mean", ResultValue::Number(9.0));

        assert_eq!(results.len(), 3);
        assert_eq!(results.get("Mean"), Some(&ResultValue::Number(2.5)));
        assert_eq!(results.lines(), vec!["Mean: 2.5", "Mode: 1.0", "Mean: 9.0"]);
    }

    #[test]
    fn test_invalid_line_diagnostic() {
        let invalid = InvalidLine {
            text: "abc".to_string(),
            reason: "invalid float literal".to_string(),
        };
        assert_eq!(
            invalid.to_string(),
            "Error parsing line 'abc': invalid float literal"
        );
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::from_millis(1234)), "1.23 seconds");
        assert_eq!(format_elapsed(Duration::ZERO), "0.00 seconds");
    }
}
