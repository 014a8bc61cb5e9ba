// File: crates/demo/src/main.rs
// Summary: Demo loads a CSV series, applies an optional argument viewport and prints range data.

use anyhow::{Context, Result};
use chart_range::{get_points_in_viewport, get_range_data, get_viewport, Axis, Point, Range, Scalar, Series, Viewport};
use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    env_logger::init();

    // Usage: constellation-demo <csv> [arg_min|-] [arg_max|-]
    let mut args = std::env::args().skip(1);
    let raw = args.next().unwrap_or_else(|| "series.csv".to_string());
    let arg_min = args.next().map(|s| parse_bound(&s)).transpose()?.flatten();
    let arg_max = args.next().map(|s| parse_bound(&s)).transpose()?.flatten();

    let (path, used_alt) = resolve_path(&raw)?;
    info!("Using input file: {}", path.display());
    if used_alt {
        info!("  (extension swapped between .csv/.cvs)");
    }

    let points = load_points_csv(&path)
        .with_context(|| format!("failed to load CSV '{}'", path.display()))?;
    if points.is_empty() {
        anyhow::bail!("no points loaded, check headers/delimiter.");
    }
    info!("Loaded {} points", points.len());

    let viewport = Viewport::new(arg_min, arg_max);
    let series = Series::new(points)
        .with_argument_axis(Axis::continuous("Argument").with_viewport(viewport))
        .with_value_axis(Axis::continuous("Value"));
    let arg_label = series.argument_axis.as_ref().map_or("argument", |a| a.label.as_str());
    let val_label = series.value_axis.as_ref().map_or("value", |a| a.label.as_str());

    let data = get_range_data(&series);
    println!("{arg_label}: {}", describe(&data.arg));
    println!("{val_label}: {}", describe(&data.val));
    println!("{val_label} (visible): {}", describe(&get_viewport(&series)));

    let visible = get_points_in_viewport(&series);
    println!("{} auto-scale values in viewport {:?}..{:?}", visible.len(), viewport.min, viewport.max);
    Ok(())
}

fn describe(range: &Range) -> String {
    match range {
        Range::Empty => "empty".to_string(),
        Range::Continuous(r) => format!("[{:?}, {:?}] interval {:?}", r.min, r.max, r.interval),
        Range::Discrete(r) => format!("{} categories", r.categories.len()),
    }
}

/// `-` (or an empty string) leaves the bound open.
fn parse_bound(s: &str) -> Result<Option<f64>> {
    let s = s.trim();
    if s.is_empty() || s == "-" {
        return Ok(None);
    }
    parse_argument(s)
        .and_then(|a| a.as_f64())
        .map(Some)
        .with_context(|| format!("invalid viewport bound '{s}'"))
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

/// Load a CSV into points. `low`/`high` columns make range points; otherwise
/// `value`/`close` is used. Rows without a value become gaps.
fn load_points_csv(path: &Path) -> Result<Vec<Point>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect::<Vec<_>>();
    info!("Headers: {:?}", headers);

    let idx = |names: &[&str]| -> Option<usize> {
        headers.iter().position(|h| names.contains(&h.as_str()))
    };

    let i_time = idx(&["time", "timestamp", "open_time", "date", "datetime", "x", "argument"]);
    let i_low = idx(&["low", "l", "min"]);
    let i_high = idx(&["high", "h", "max"]);
    let i_value = idx(&["value", "close", "c", "y"]);

    let ranged = i_low.is_some() && i_high.is_some();
    if !ranged && i_value.is_none() {
        warn!("Could not find low/high or value/close columns; every row will be a gap.");
    }

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let parse = |i: Option<usize>| -> Option<f64> {
            i.and_then(|ix| rec.get(ix)).and_then(|s| s.trim().parse::<f64>().ok())
        };

        let argument = i_time
            .and_then(|ix| rec.get(ix))
            .and_then(parse_argument)
            .unwrap_or(Scalar::Number(row as f64));

        let point = if ranged {
            match (parse(i_low), parse(i_high)) {
                (Some(lo), Some(hi)) => Point::range(argument, lo, hi),
                _ => Point::empty(argument),
            }
        } else {
            match parse(i_value) {
                Some(v) => Point::new(argument, v),
                None => Point::empty(argument),
            }
        };
        out.push(point);
    }
    Ok(out)
}

/// Numbers stay numeric; common date/time layouts become date-times.
fn parse_argument(s: &str) -> Option<Scalar> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<f64>() {
        return Some(Scalar::Number(n));
    }
    for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(t) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Scalar::DateTime(t));
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(Scalar::DateTime)
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}
