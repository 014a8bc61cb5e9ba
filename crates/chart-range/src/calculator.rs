// File: crates/chart-range/src/calculator.rs
// Summary: Argument/value/viewport range calculation over a series' ordered points.

use log::debug;

use crate::axis::Viewport;
use crate::range::{Range, RangeFolder};
use crate::series::{Point, SeriesSource};
use crate::types::Scalar;

/// Ranges for one series: full argument extent, full value extent, and the
/// value extent inside the argument viewport.
#[derive(Clone, Debug, PartialEq)]
pub struct RangeData {
    pub arg: Range,
    pub val: Range,
    pub viewport: Range,
}

/// Compute argument, value and viewport ranges in a single pass.
pub fn get_range_data<S: SeriesSource + ?Sized>(series: &S) -> RangeData {
    let points = series.points();
    let arg_axis = if points.len() > 1 { series.argument_axis() } else { None };
    let arg_folder = RangeFolder::new(series.argument_axis_type(), arg_axis);
    let val_folder = RangeFolder::new(series.value_axis_type(), None);
    let mut reducer = ViewportReducer::new(series);

    let first_arg = points.first().and_then(|p| p.argument.as_f64());
    let initial_val = initial_value(series);
    let mut data = RangeData {
        arg: Range::initial(series.argument_axis_type(), series.argument_type(), first_arg),
        val: Range::initial(series.value_axis_type(), series.value_type(), initial_val),
        viewport: Range::initial(series.value_axis_type(), series.value_type(), initial_val),
    };

    for (index, point) in points.iter().enumerate() {
        arg_folder.fold_value(&mut data.arg, &point.argument);
        if !point.has_value() {
            continue;
        }
        if let (Some(lo), Some(hi)) = (point.min_value(), point.max_value()) {
            val_folder.fold(&mut data.val, lo, hi);
        }
        reducer.reduce(&mut data.viewport, points, index);
    }

    data.arg.dedup_categories();
    data.val.dedup_categories();
    data.viewport.dedup_categories();

    debug!(
        "range data over {} points ({:?}/{:?}): arg [{:?}, {:?}], val [{:?}, {:?}], viewport [{:?}, {:?}]",
        points.len(),
        series.argument_axis_type(),
        series.value_axis_type(),
        data.arg.min(),
        data.arg.max(),
        data.val.min(),
        data.val.max(),
        data.viewport.min(),
        data.viewport.max(),
    );
    data
}

/// Value range inside the argument viewport. Discrete axes have no numeric
/// window, so either axis being discrete yields `Range::Empty`.
pub fn get_viewport<S: SeriesSource + ?Sized>(series: &S) -> Range {
    if series.argument_axis_type().is_discrete() || series.value_axis_type().is_discrete() {
        return Range::Empty;
    }
    let points = series.points();
    let mut reducer = ViewportReducer::new(series);
    let mut range = Range::initial(series.value_axis_type(), series.value_type(), initial_value(series));
    for index in 0..points.len() {
        reducer.reduce(&mut range, points, index);
        if reducer.end_calc {
            break;
        }
    }
    range
}

/// Values that matter for auto-scaling the visible window: min/max values of
/// points inside the argument viewport and of their immediate outside
/// neighbours, followed by the value viewport's own (truthy) bounds.
pub fn get_points_in_viewport<S: SeriesSource + ?Sized>(series: &S) -> Vec<f64> {
    let arg_viewport = series.argument_axis().map(|a| a.viewport()).unwrap_or_default();
    let val_viewport = series.value_axis().map(|a| a.viewport()).unwrap_or_default();
    let points = series.points();
    let in_arg = |p: &Point| argument_in_viewport(&arg_viewport, &p.argument);

    let mut values = Vec::new();
    for (index, point) in points.iter().enumerate() {
        if in_arg(point) {
            push_point_values(&mut values, point, &val_viewport);
            continue;
        }
        if points.get(index + 1).is_some_and(in_arg) {
            push_point_values(&mut values, point, &val_viewport);
        }
        if index > 0 && in_arg(&points[index - 1]) {
            push_point_values(&mut values, point, &val_viewport);
        }
    }

    // zero counts as an absent bound here
    let truthy = |v: &f64| *v != 0.0 && !v.is_nan();
    if let Some(min) = val_viewport.min.filter(truthy) {
        values.push(min);
    }
    if let Some(max) = val_viewport.max.filter(truthy) {
        values.push(max);
    }
    values
}

fn initial_value<S: SeriesSource + ?Sized>(series: &S) -> Option<f64> {
    if series.points().is_empty() { None } else { series.value_range_initial_value() }
}

fn argument_in_viewport(viewport: &Viewport, argument: &Scalar) -> bool {
    match argument.as_f64() {
        Some(a) => viewport.contains(a),
        None => viewport.min.is_none() && viewport.max.is_none(),
    }
}

fn push_point_values(values: &mut Vec<f64>, point: &Point, viewport: &Viewport) {
    let lo = point.min_value().and_then(Scalar::as_f64);
    let hi = point.max_value().and_then(Scalar::as_f64);
    if let Some(lo) = lo.filter(|v| viewport.contains(*v)) {
        values.push(lo);
    }
    if hi != lo {
        if let Some(hi) = hi.filter(|v| viewport.contains(*v)) {
            values.push(hi);
        }
    }
}

/// Folds values of points inside the argument viewport, plus values
/// interpolated at the viewport bounds where the series enters or leaves it.
struct ViewportReducer<'a> {
    folder: RangeFolder<'a>,
    viewport: Viewport,
    start_calc: bool,
    end_calc: bool,
}

impl<'a> ViewportReducer<'a> {
    fn new<S: SeriesSource + ?Sized>(series: &S) -> Self {
        Self {
            folder: RangeFolder::new(series.value_axis_type(), None),
            viewport: series.argument_axis().map(|a| a.viewport()).unwrap_or_default(),
            start_calc: false,
            end_calc: false,
        }
    }

    fn reduce(&mut self, range: &mut Range, points: &[Point], index: usize) {
        if self.end_calc {
            return;
        }
        let point = &points[index];
        if !point.has_value() {
            return;
        }
        let prev = index.checked_sub(1).map(|i| &points[i]);

        if argument_in_viewport(&self.viewport, &point.argument) {
            if !self.start_calc {
                self.start_calc = true;
                self.fold_boundary(range, point, prev, self.viewport.min);
            }
            if let (Some(lo), Some(hi)) = (point.min_value(), point.max_value()) {
                self.folder.fold(range, lo, hi);
            }
        } else if point.argument.as_f64().is_some_and(|a| self.viewport.is_past_max(a)) {
            if !self.start_calc {
                self.fold_boundary(range, point, prev, self.viewport.min);
            }
            self.end_calc = true;
            self.fold_boundary(range, point, prev, self.viewport.max);
        }
    }

    fn fold_boundary(&self, range: &mut Range, point: &Point, prev: Option<&Point>, bound: Option<f64>) {
        let value = match interpolate(point, prev, bound) {
            Some(v) => Scalar::Number(v),
            None => match &point.value {
                Some(v) => v.clone(),
                None => return,
            },
        };
        self.folder.fold_value(range, &value);
    }
}

/// Linear interpolation of the value at argument `bound` between `prev` and `point`.
/// Equal arguments give a non-finite result, which is folded as-is.
fn interpolate(point: &Point, prev: Option<&Point>, bound: Option<f64>) -> Option<f64> {
    let x = bound?;
    let prev = prev?;
    let x1 = prev.argument.as_f64()?;
    let y1 = prev.value.as_ref()?.as_f64()?;
    let x2 = point.argument.as_f64()?;
    let y2 = point.value.as_ref()?.as_f64()?;
    Some((x - x1) * (y2 - y1) / (x2 - x1) + y1)
}
