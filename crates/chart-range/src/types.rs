// File: crates/chart-range/src/types.rs
// Summary: Shared types (scalar values, axis and data type tags).

use chrono::NaiveDateTime;

/// Axis domain kind. Only `Discrete` changes how ranges are folded; the other
/// two are numeric and differ in how intervals are measured.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AxisType {
    #[default]
    Continuous,
    Logarithmic,
    Discrete,
}

impl AxisType {
    #[inline]
    pub const fn is_discrete(self) -> bool {
        matches!(self, AxisType::Discrete)
    }
}

/// Type of the data plotted along an axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DataType {
    #[default]
    Numeric,
    DateTime,
    String,
}

/// A single argument or value as supplied by a point.
/// Contract: numeric math only ever sees `Number` and `DateTime` (as epoch millis).
#[derive(Clone, Debug, PartialEq)]
pub enum Scalar {
    Number(f64),
    DateTime(NaiveDateTime),
    Text(String),
}

impl Scalar {
    /// Numeric form: numbers as-is, date-times as UTC epoch milliseconds, text has none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Scalar::Number(v) => Some(*v),
            Scalar::DateTime(t) => Some(t.and_utc().timestamp_millis() as f64),
            Scalar::Text(_) => None,
        }
    }

    pub fn data_type(&self) -> DataType {
        match self {
            Scalar::Number(_) => DataType::Numeric,
            Scalar::DateTime(_) => DataType::DateTime,
            Scalar::Text(_) => DataType::String,
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self { Scalar::Number(v) }
}

impl From<NaiveDateTime> for Scalar {
    fn from(t: NaiveDateTime) -> Self { Scalar::DateTime(t) }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self { Scalar::Text(s.to_string()) }
}

impl From<String> for Scalar {
    fn from(s: String) -> Self { Scalar::Text(s) }
}
