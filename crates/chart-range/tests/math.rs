// File: crates/chart-range/tests/math.rs
// Purpose: Validate numeric helpers (sign, clamping, precision and rounding).

use chart_range::math::{adjust, fit_into_range, get_precision, in_range, js_number_string, sign};

#[test]
fn sign_of_zero_and_nonzero() {
    assert_eq!(sign(0.0), 0.0);
    assert_eq!(sign(-0.0), 0.0);
    assert_eq!(sign(42.5), 1.0);
    assert_eq!(sign(-3.5), -1.0);
    assert_eq!(sign(f64::INFINITY), 1.0);
    assert!(sign(f64::NAN).is_nan());
}

#[test]
fn fit_into_range_clamps_with_both_bounds() {
    assert_eq!(fit_into_range(5.0, Some(0.0), Some(3.0)), 3.0);
    assert_eq!(fit_into_range(2.0, Some(0.0), Some(3.0)), 2.0);
    // zero is a real bound
    assert_eq!(fit_into_range(-1.0, Some(0.0), Some(3.0)), 0.0);
    assert_eq!(fit_into_range(7.0, Some(-2.0), Some(0.0)), 0.0);
}

#[test]
fn fit_into_range_synthesizes_missing_bound() {
    assert_eq!(fit_into_range(5.0, None, Some(3.0)), 3.0);
    assert_eq!(fit_into_range(1.0, None, Some(3.0)), 1.0);
    assert_eq!(fit_into_range(-5.0, Some(0.0), None), 0.0);
    assert_eq!(fit_into_range(7.0, Some(0.0), None), 7.0);
    assert_eq!(fit_into_range(4.0, None, None), 4.0);
    assert_eq!(fit_into_range(5.0, Some(f64::NAN), Some(3.0)), 3.0);
    assert!(fit_into_range(f64::NAN, Some(0.0), Some(1.0)).is_nan());
}

#[test]
fn in_range_is_inclusive() {
    assert!(in_range(1.0, 1.0, 2.0));
    assert!(in_range(2.0, 1.0, 2.0));
    assert!(!in_range(2.1, 1.0, 2.0));
    assert!(!in_range(0.9, 1.0, 2.0));
}

#[test]
fn number_strings_switch_to_exponent_outside_display_window() {
    assert_eq!(js_number_string(123.0), "123");
    assert_eq!(js_number_string(0.000001), "0.000001");
    assert_eq!(js_number_string(1.5e-7), "1.5e-7");
    assert_eq!(js_number_string(1e21), "1e+21");
    assert_eq!(js_number_string(0.0), "0");
    assert_eq!(js_number_string(f64::NAN), "NaN");
}

#[test]
fn precision_counts_fraction_digits_before_exponent() {
    assert_eq!(get_precision(10.0), 0);
    assert_eq!(get_precision(0.01), 2);
    assert_eq!(get_precision(0.123456789), 9);
    assert_eq!(get_precision(1.5e-7), 1);
    assert_eq!(get_precision(1e-7), 0);
    assert_eq!(get_precision(1.25e21), 2);
}

#[test]
fn adjust_rounds_to_seven_or_fifteen_digits() {
    assert_eq!(adjust(1.0 / 3.0, Some(0.01)), 0.3333333);
    assert_eq!(adjust(0.1 + 0.2, Some(0.1)), 0.3);
    assert_eq!(adjust(123.456789, None), 123.4568);
    assert_eq!(adjust(1.0 / 3.0, Some(0.123456789)), 0.333333333333333);
    assert_eq!(adjust(f64::INFINITY, Some(0.5)), f64::INFINITY);
}

#[test]
fn adjust_rounds_exact_ties_away_from_zero() {
    assert_eq!(adjust(12345665.0, None), 12345670.0);
    assert_eq!(adjust(-12345665.0, None), -12345670.0);
    assert_eq!(adjust(1.5, None), 1.5);
    // 0.125 has an exact binary form, so the tie is real
    assert_eq!(chart_range::math::to_precision(0.125, 2), 0.13);
    // 0.35 is stored slightly below the tie and rounds down
    assert_eq!(chart_range::math::to_precision(0.35, 1), 0.3);
}
