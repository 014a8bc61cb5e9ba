// File: crates/chart-range/src/lib.rs
// Summary: Core library entry point; exports range/viewport calculation, numeric helpers and themes.

pub mod math;
pub mod types;
pub mod axis;
pub mod series;
pub mod range;
pub mod calculator;
pub mod theme;

pub use types::{AxisType, DataType, Scalar};
pub use axis::{Axis, AxisInfo, Viewport};
pub use series::{Point, Series, SeriesSource};
pub use range::{ContinuousRange, DiscreteRange, Range};
pub use calculator::{get_points_in_viewport, get_range_data, get_viewport, RangeData};
pub use theme::{register_ios_theme, Rgba, Theme, ThemeError, ThemeRegistry, ThemeSink};
