// File: crates/chart-range/src/series.rs
// Summary: Point and series model consumed by the range calculator.

use crate::axis::{Axis, AxisInfo};
use crate::types::{AxisType, DataType, Scalar};

/// One data point. Range-type points carry a lower value in `min_value`;
/// `value` is the upper one.
#[derive(Clone, Debug, PartialEq)]
pub struct Point {
    pub argument: Scalar,
    pub value: Option<Scalar>,
    pub min_value: Option<Scalar>,
    range: bool,
}

impl Point {
    pub fn new(argument: impl Into<Scalar>, value: impl Into<Scalar>) -> Self {
        Self { argument: argument.into(), value: Some(value.into()), min_value: None, range: false }
    }

    /// Range point spanning `[low, high]`.
    pub fn range(argument: impl Into<Scalar>, low: impl Into<Scalar>, high: impl Into<Scalar>) -> Self {
        Self {
            argument: argument.into(),
            value: Some(high.into()),
            min_value: Some(low.into()),
            range: true,
        }
    }

    /// A gap: the argument exists but there is nothing to plot.
    pub fn empty(argument: impl Into<Scalar>) -> Self {
        Self { argument: argument.into(), value: None, min_value: None, range: false }
    }

    pub fn is_range(&self) -> bool { self.range }

    pub fn has_value(&self) -> bool {
        self.value.is_some() && (!self.range || self.min_value.is_some())
    }

    pub fn min_value(&self) -> Option<&Scalar> {
        if self.range { self.min_value.as_ref() } else { self.value.as_ref() }
    }

    pub fn max_value(&self) -> Option<&Scalar> {
        self.value.as_ref()
    }
}

/// Everything the range calculator reads from a series.
pub trait SeriesSource {
    fn points(&self) -> &[Point];
    fn argument_axis_type(&self) -> AxisType;
    fn value_axis_type(&self) -> AxisType;
    fn argument_type(&self) -> DataType;
    fn value_type(&self) -> DataType;
    /// Seed for the value range; `None` lets the first folded value set it.
    fn value_range_initial_value(&self) -> Option<f64>;
    fn argument_axis(&self) -> Option<&dyn AxisInfo>;
    fn value_axis(&self) -> Option<&dyn AxisInfo>;
}

#[derive(Clone, Debug, Default)]
pub struct Series {
    pub points: Vec<Point>,
    pub argument_axis_type: AxisType,
    pub value_axis_type: AxisType,
    pub argument_type: DataType,
    pub value_type: DataType,
    pub initial_value: Option<f64>,
    pub argument_axis: Option<Axis>,
    pub value_axis: Option<Axis>,
}

impl Series {
    /// Continuous axes, data types inferred from the first point.
    pub fn new(points: Vec<Point>) -> Self {
        let argument_type = points.first().map(|p| p.argument.data_type()).unwrap_or_default();
        let value_type = points
            .iter()
            .find_map(|p| p.max_value())
            .map(Scalar::data_type)
            .unwrap_or_default();
        Self { points, argument_type, value_type, ..Self::default() }
    }

    pub fn with_data(data: &[(f64, f64)]) -> Self {
        Self::new(data.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Range series from `(argument, low, high)` triples.
    pub fn with_ranges(data: &[(f64, f64, f64)]) -> Self {
        Self::new(data.iter().map(|&(x, lo, hi)| Point::range(x, lo, hi)).collect())
    }

    pub fn with_initial_value(mut self, value: f64) -> Self {
        self.initial_value = Some(value);
        self
    }

    /// Attach the argument axis; its type becomes the argument axis type.
    pub fn with_argument_axis(mut self, axis: Axis) -> Self {
        self.argument_axis_type = axis.axis_type;
        self.argument_axis = Some(axis);
        self
    }

    /// Attach the value axis; its type becomes the value axis type.
    pub fn with_value_axis(mut self, axis: Axis) -> Self {
        self.value_axis_type = axis.axis_type;
        self.value_axis = Some(axis);
        self
    }
}

impl SeriesSource for Series {
    fn points(&self) -> &[Point] { &self.points }
    fn argument_axis_type(&self) -> AxisType { self.argument_axis_type }
    fn value_axis_type(&self) -> AxisType { self.value_axis_type }
    fn argument_type(&self) -> DataType { self.argument_type }
    fn value_type(&self) -> DataType { self.value_type }
    fn value_range_initial_value(&self) -> Option<f64> { self.initial_value }

    fn argument_axis(&self) -> Option<&dyn AxisInfo> {
        self.argument_axis.as_ref().map(|a| a as &dyn AxisInfo)
    }

    fn value_axis(&self) -> Option<&dyn AxisInfo> {
        self.value_axis.as_ref().map(|a| a as &dyn AxisInfo)
    }
}
