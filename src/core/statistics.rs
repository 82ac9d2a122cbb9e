use crate::core::frequency::OrderedCounter;
use crate::domain::model::ResultValue;
use std::hash::{Hash, Hasher};

/// Mode of a sample: a single value, or every value tied at the top count.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Single(f64),
    Tied(Vec<f64>),
}

impl From<Mode> for ResultValue {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Single(value) => ResultValue::Number(value),
            Mode::Tied(values) => ResultValue::Numbers(values),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub median: f64,
    pub mode: Mode,
    pub variance: f64,
    pub std_dev: f64,
}

/// `-0.0` and `0.0` share a key, as do all NaNs. The counter keeps the
/// first key it sees, so the reported value is the first one in the input.
#[derive(Debug, Clone, Copy)]
struct FloatKey {
    bits: u64,
    value: f64,
}

impl FloatKey {
    fn new(value: f64) -> Self {
        let bits = if value == 0.0 {
            0.0f64.to_bits()
        } else if value.is_nan() {
            f64::NAN.to_bits()
        } else {
            value.to_bits()
        };
        FloatKey { bits, value }
    }
}

impl PartialEq for FloatKey {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl Eq for FloatKey {}

impl Hash for FloatKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits.hash(state);
    }
}

pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

pub fn median(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

pub fn mode(data: &[f64]) -> Mode {
    let counter: OrderedCounter<FloatKey> = data.iter().copied().map(FloatKey::new).collect();
    let mut modes: Vec<f64> = counter.most_common().into_iter().map(|k| k.value).collect();

    if modes.len() == 1 {
        Mode::Single(modes.remove(0))
    } else {
        Mode::Tied(modes)
    }
}

/// Sample variance (n - 1), zero for fewer than two values.
pub fn variance(data: &[f64], mean: f64) -> f64 {
    if data.len() <= 1 {
        return 0.0;
    }
    let squared: f64 = data.iter().map(|x| (x - mean).powi(2)).sum();
    squared / (data.len() - 1) as f64
}

pub fn std_dev(variance: f64) -> f64 {
    variance.sqrt()
}

pub fn summarize(data: &[f64]) -> Summary {
    let mean = mean(data);
    let variance = variance(data, mean);

    Summary {
        mean,
        median: median(data),
        mode: mode(data),
        variance,
        std_dev: std_dev(variance),
    }
}
