// File: crates/chart-range/src/axis.rs
// Summary: Axis model with type, viewport window and interval measurement.

use crate::types::AxisType;

/// Visible window on an axis. Either bound may be absent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl Viewport {
    pub const fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    pub const fn unbounded() -> Self {
        Self { min: None, max: None }
    }

    pub const fn between(min: f64, max: f64) -> Self {
        Self { min: Some(min), max: Some(max) }
    }

    /// Viewport filter: only the bounds that are present are checked.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        self.min.map_or(true, |min| value >= min) && self.max.map_or(true, |max| value <= max)
    }

    /// True when `value` lies past the upper bound (if there is one).
    #[inline]
    pub fn is_past_max(&self, value: f64) -> bool {
        self.max.is_some_and(|max| value > max)
    }
}

/// What the range calculator needs from an axis.
pub trait AxisInfo {
    fn viewport(&self) -> Viewport;
    /// Spacing between `value` and the previous argument; `None` without a previous value.
    fn calculate_interval(&self, value: f64, prev: Option<f64>) -> Option<f64>;
}

#[derive(Clone, Debug)]
pub struct Axis {
    pub label: String,
    pub axis_type: AxisType,
    pub log_base: f64,
    pub viewport: Viewport,
}

impl Axis {
    pub fn new(label: impl Into<String>, axis_type: AxisType) -> Self {
        Self { label: label.into(), axis_type, log_base: 10.0, viewport: Viewport::unbounded() }
    }

    pub fn continuous(label: impl Into<String>) -> Self {
        Self::new(label, AxisType::Continuous)
    }

    pub fn logarithmic(label: impl Into<String>, base: f64) -> Self {
        let mut a = Self::new(label, AxisType::Logarithmic);
        a.log_base = base;
        a
    }

    pub fn discrete(label: impl Into<String>) -> Self {
        Self::new(label, AxisType::Discrete)
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }
}

impl AxisInfo for Axis {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn calculate_interval(&self, value: f64, prev: Option<f64>) -> Option<f64> {
        let prev = prev?;
        let delta = match self.axis_type {
            AxisType::Logarithmic => value.log(self.log_base) - prev.log(self.log_base),
            _ => value - prev,
        };
        Some(delta.abs())
    }
}
