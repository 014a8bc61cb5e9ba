// File: crates/chart-range/tests/range_data.rs
// Purpose: Validate argument/value range reduction for continuous and discrete axes.

use chart_range::{get_range_data, Axis, AxisType, DataType, Point, Range, Scalar, Series};
use chrono::NaiveDate;

#[test]
fn continuous_value_range_tracks_min_and_max() {
    let series = Series::with_data(&[(1.0, 5.0), (2.0, 10.0), (3.0, 2.0)]);
    let data = get_range_data(&series);

    assert_eq!(data.val.min(), Some(2.0));
    assert_eq!(data.val.max(), Some(10.0));
    assert_eq!(data.arg.min(), Some(1.0));
    assert_eq!(data.arg.max(), Some(3.0));
    // no argument axis, no interval tracking
    assert_eq!(data.arg.interval(), None);
}

#[test]
fn empty_series_has_unset_bounds() {
    let series = Series::new(Vec::new()).with_initial_value(0.0);
    let data = get_range_data(&series);
    assert_eq!(data.arg.min(), None);
    assert_eq!(data.arg.max(), None);
    assert_eq!(data.val.min(), None);
    assert_eq!(data.viewport.max(), None);

    let discrete = Series::new(Vec::new()).with_argument_axis(Axis::discrete("cat"));
    let data = get_range_data(&discrete);
    assert!(matches!(data.arg, Range::Discrete(_)));
    assert!(data.arg.categories().is_empty());
}

#[test]
fn single_point_collapses_range() {
    let series = Series::with_data(&[(4.0, 7.5)]).with_argument_axis(Axis::continuous("x"));
    let data = get_range_data(&series);
    assert_eq!(data.val.min(), Some(7.5));
    assert_eq!(data.val.max(), Some(7.5));
    assert_eq!(data.arg.min(), Some(4.0));
    assert_eq!(data.arg.max(), Some(4.0));
    // one point: the axis is not consulted for intervals
    assert_eq!(data.arg.interval(), None);
}

#[test]
fn argument_axis_yields_smallest_interval() {
    let series = Series::with_data(&[(1.0, 5.0), (3.0, 10.0), (4.0, 2.0), (8.0, 1.0)])
        .with_argument_axis(Axis::continuous("x"));
    let data = get_range_data(&series);
    assert_eq!(data.arg.interval(), Some(1.0));
    match &data.arg {
        Range::Continuous(r) => assert_eq!(r.prev_value, Some(8.0)),
        other => panic!("expected continuous range, got {other:?}"),
    }
}

#[test]
fn zero_interval_is_ignored() {
    let series = Series::with_data(&[(1.0, 1.0), (1.0, 2.0), (3.0, 3.0)])
        .with_argument_axis(Axis::continuous("x"));
    let data = get_range_data(&series);
    assert_eq!(data.arg.interval(), Some(2.0));
}

#[test]
fn logarithmic_axis_measures_interval_in_log_space() {
    let series = Series::with_data(&[(1.0, 1.0), (10.0, 2.0), (1000.0, 3.0)])
        .with_argument_axis(Axis::logarithmic("x", 10.0));
    let data = get_range_data(&series);
    assert_eq!(data.arg.interval(), Some(1.0));
    assert_eq!(data.arg.max(), Some(1000.0));
}

#[test]
fn discrete_arguments_are_deduplicated() {
    let series = Series::new(vec![
        Point::new("a", 1.0),
        Point::new("b", 2.0),
        Point::new("a", 3.0),
    ])
    .with_argument_axis(Axis::discrete("cat"));
    let data = get_range_data(&series);

    assert_eq!(data.arg.categories(), &[Scalar::from("a"), Scalar::from("b")]);
    assert_eq!(data.val.min(), Some(1.0));
    assert_eq!(data.val.max(), Some(3.0));
    match &data.arg {
        Range::Discrete(r) => assert_eq!(r.data_type, DataType::String),
        other => panic!("expected discrete range, got {other:?}"),
    }
}

#[test]
fn discrete_value_axis_collects_range_ends() {
    let series = Series::new(vec![Point::range(1.0, 2.0, 5.0), Point::range(2.0, 5.0, 5.0)])
        .with_value_axis(Axis::discrete("val"));
    let data = get_range_data(&series);
    assert_eq!(data.val.categories(), &[Scalar::from(5.0), Scalar::from(2.0)]);
}

#[test]
fn initial_value_seeds_value_range() {
    let series = Series::with_data(&[(0.0, 5.0), (1.0, 10.0)]).with_initial_value(0.0);
    let data = get_range_data(&series);
    assert_eq!(data.val.min(), Some(0.0));
    assert_eq!(data.val.max(), Some(10.0));
}

#[test]
fn points_without_value_only_extend_arguments() {
    let series = Series::new(vec![Point::new(1.0, 4.0), Point::empty(9.0), Point::new(2.0, 6.0)]);
    let data = get_range_data(&series);
    assert_eq!(data.arg.max(), Some(9.0));
    assert_eq!(data.val.min(), Some(4.0));
    assert_eq!(data.val.max(), Some(6.0));
}

#[test]
fn range_points_contribute_both_ends() {
    let series = Series::with_ranges(&[(1.0, 2.0, 6.0), (2.0, -1.0, 3.0)]);
    assert!(series.points.iter().all(Point::is_range));
    assert!(!Point::new(1.0, 2.0).is_range());
    let data = get_range_data(&series);
    assert_eq!(data.val.min(), Some(-1.0));
    assert_eq!(data.val.max(), Some(6.0));
}

#[test]
fn datetime_arguments_use_epoch_millis() {
    let day = |d: u32| NaiveDate::from_ymd_opt(2024, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let series = Series::new(vec![
        Point::new(day(1), 1.0),
        Point::new(day(2), 2.0),
        Point::new(day(4), 3.0),
    ])
    .with_argument_axis(Axis::continuous("time"));
    let data = get_range_data(&series);

    assert_eq!(data.arg.min(), Scalar::from(day(1)).as_f64());
    assert_eq!(data.arg.max(), Scalar::from(day(4)).as_f64());
    assert_eq!(data.arg.interval(), Some(86_400_000.0));
    match &data.arg {
        Range::Continuous(r) => {
            assert_eq!(r.data_type, DataType::DateTime);
            assert_eq!(r.axis_type, AxisType::Continuous);
        }
        other => panic!("expected continuous range, got {other:?}"),
    }
}
