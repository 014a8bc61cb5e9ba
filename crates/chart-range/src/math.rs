// File: crates/chart-range/src/math.rs
// Summary: Numeric helpers (sign, clamping, inclusive range test, precision-aware rounding).

/// Sign of `value`: `0.0` for zero (either sign), `±1.0` otherwise. NaN stays NaN.
pub fn sign(value: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    value.signum()
}

/// Clamp `value` into `[min, max]`.
///
/// A bound that is `None` or NaN is treated as missing and synthesized from
/// `value` and the other bound, so the interval never inverts. Zero is a
/// present bound.
pub fn fit_into_range(value: f64, min: Option<f64>, max: Option<f64>) -> f64 {
    if value.is_nan() {
        return f64::NAN;
    }
    let min = min.filter(|m| !m.is_nan());
    let max = max.filter(|m| !m.is_nan());

    let lo = match (min, max) {
        (Some(lo), _) => lo,
        (None, Some(hi)) => value.min(hi),
        (None, None) => value,
    };
    let hi = match (max, min) {
        (Some(hi), _) => hi,
        (None, Some(_)) => value.max(lo),
        (None, None) => value,
    };
    value.max(lo).min(hi)
}

/// Inclusive membership test: `min <= value <= max`.
#[inline]
pub fn in_range(value: f64, min: f64, max: f64) -> bool {
    value >= min && value <= max
}

/// Round `value` to suppress floating-point noise left by interval arithmetic.
///
/// Uses 15 significant digits when `interval` carries more than 7 fractional
/// digits, 7 otherwise. A missing or NaN interval counts as zero.
pub fn adjust(value: f64, interval: Option<f64>) -> f64 {
    let interval = interval.filter(|i| !i.is_nan()).unwrap_or(0.0);
    let digits = if get_precision(interval) > 7 { 15 } else { 7 };
    to_precision(value, digits)
}

/// Number of digits after the decimal point in the shortest decimal form of
/// `value`. Digits of an exponent suffix are not counted.
pub fn get_precision(value: f64) -> usize {
    let text = js_number_string(value);
    match text.split_once('.') {
        None => 0,
        Some((_, fraction)) => fraction.find('e').unwrap_or(fraction.len()),
    }
}

/// Round to `digits` significant digits and parse back. Exact decimal ties
/// round away from zero.
pub fn to_precision(value: f64, digits: usize) -> f64 {
    if !value.is_finite() || digits == 0 {
        return value;
    }
    let target = if is_decimal_tie(value, digits) {
        // one ulp further from zero tips the tie outward
        f64::from_bits(value.to_bits() + 1)
    } else {
        value
    };
    format!("{:.*e}", digits - 1, target).parse::<f64>().unwrap_or(value)
}

/// True when the exact decimal expansion of `value` is `5000…` past the
/// `digits`-th significant digit.
fn is_decimal_tie(value: f64, digits: usize) -> bool {
    if value == 0.0 {
        return false;
    }
    // 800 fractional digits cover every f64 expansion exactly
    let exact = format!("{:.800e}", value.abs());
    let mantissa = exact.split_once('e').map_or(exact.as_str(), |(m, _)| m);
    let sig: Vec<u8> = mantissa.bytes().filter(u8::is_ascii_digit).collect();
    match sig.get(digits) {
        Some(b'5') => sig[digits + 1..].iter().all(|&d| d == b'0'),
        _ => false,
    }
}

/// Shortest round-trip decimal string, switching to exponent notation outside
/// `[1e-6, 1e21)` the way browser number formatting does.
pub fn js_number_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }
    let abs = value.abs();
    if abs < 1e-6 || abs >= 1e21 {
        let s = format!("{:e}", value);
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{}", value)
}
