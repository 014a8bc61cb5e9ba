// File: crates/chart-range/src/range.rs
// Summary: Range descriptors and the per-axis-type folding strategy.

use log::trace;

use crate::axis::AxisInfo;
use crate::types::{AxisType, DataType, Scalar};

/// Numeric extent of a continuous (or logarithmic) axis.
/// Contract: `min <= max` whenever both are set from non-NaN input.
#[derive(Clone, Debug, PartialEq)]
pub struct ContinuousRange {
    pub axis_type: AxisType,
    pub data_type: DataType,
    pub min: Option<f64>,
    pub max: Option<f64>,
    /// Smallest non-zero spacing seen between consecutive arguments.
    pub interval: Option<f64>,
    pub prev_value: Option<f64>,
}

/// Category set of a discrete axis.
#[derive(Clone, Debug, PartialEq)]
pub struct DiscreteRange {
    pub data_type: DataType,
    pub categories: Vec<Scalar>,
}

/// Range descriptor produced by the calculator. `Empty` has neither bounds nor categories.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Range {
    #[default]
    Empty,
    Continuous(ContinuousRange),
    Discrete(DiscreteRange),
}

impl Range {
    /// Fresh range for one calculation: discrete axes start with no
    /// categories, others with `min = max = first`.
    pub fn initial(axis_type: AxisType, data_type: DataType, first: Option<f64>) -> Self {
        if axis_type.is_discrete() {
            Range::Discrete(DiscreteRange { data_type, categories: Vec::new() })
        } else {
            Range::Continuous(ContinuousRange {
                axis_type,
                data_type,
                min: first,
                max: first,
                interval: None,
                prev_value: None,
            })
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Range::Empty)
    }

    pub fn min(&self) -> Option<f64> {
        match self {
            Range::Continuous(r) => r.min,
            _ => None,
        }
    }

    pub fn max(&self) -> Option<f64> {
        match self {
            Range::Continuous(r) => r.max,
            _ => None,
        }
    }

    pub fn interval(&self) -> Option<f64> {
        match self {
            Range::Continuous(r) => r.interval,
            _ => None,
        }
    }

    pub fn categories(&self) -> &[Scalar] {
        match self {
            Range::Discrete(r) => &r.categories,
            _ => &[],
        }
    }

    /// Drop repeated categories, keeping the first occurrence of each.
    pub fn dedup_categories(&mut self) {
        if let Range::Discrete(r) = self {
            let mut unique: Vec<Scalar> = Vec::with_capacity(r.categories.len());
            for c in r.categories.drain(..) {
                if !unique.contains(&c) {
                    unique.push(c);
                }
            }
            r.categories = unique;
        }
    }
}

/// How points are folded into a range; picked once per axis and call.
pub enum RangeFolder<'a> {
    Discrete,
    Continuous,
    /// Continuous folding that also tracks the minimal argument interval.
    Interval(&'a dyn AxisInfo),
}

impl<'a> RangeFolder<'a> {
    pub fn new(axis_type: AxisType, axis: Option<&'a dyn AxisInfo>) -> Self {
        match (axis_type, axis) {
            (AxisType::Discrete, _) => RangeFolder::Discrete,
            (_, Some(axis)) => RangeFolder::Interval(axis),
            (_, None) => RangeFolder::Continuous,
        }
    }

    pub fn fold_value(&self, range: &mut Range, value: &Scalar) {
        self.fold(range, value, value);
    }

    pub fn fold(&self, range: &mut Range, min: &Scalar, max: &Scalar) {
        match (self, range) {
            (RangeFolder::Discrete, Range::Discrete(r)) => {
                if min != max {
                    r.categories.push(max.clone());
                }
                r.categories.push(min.clone());
            }
            (RangeFolder::Continuous, Range::Continuous(r)) => {
                fold_bounds(r, min.as_f64(), max.as_f64());
            }
            (RangeFolder::Interval(axis), Range::Continuous(r)) => {
                let Some(value) = min.as_f64() else {
                    trace!("skipping non-numeric argument {:?}", min);
                    return;
                };
                let interval = axis.calculate_interval(value, r.prev_value);
                r.interval = merge_interval(r.interval, interval);
                r.prev_value = Some(value);
                fold_bounds(r, Some(value), Some(value));
            }
            _ => {}
        }
    }
}

fn fold_bounds(r: &mut ContinuousRange, min: Option<f64>, max: Option<f64>) {
    match min {
        Some(v) => r.min = Some(match r.min { Some(cur) if cur < v => cur, _ => v }),
        None => trace!("skipping non-numeric lower value"),
    }
    match max {
        Some(v) => r.max = Some(match r.max { Some(cur) if cur > v => cur, _ => v }),
        None => trace!("skipping non-numeric upper value"),
    }
}

/// Keep the smaller interval; zero or NaN candidates leave the running one.
fn merge_interval(running: Option<f64>, new: Option<f64>) -> Option<f64> {
    let candidate = match (running, new) {
        (Some(r), Some(n)) => Some(if r < n { r } else { n }),
        (None, n) => n,
        (r, None) => r,
    };
    candidate.filter(|c| *c != 0.0 && !c.is_nan()).or(running)
}
