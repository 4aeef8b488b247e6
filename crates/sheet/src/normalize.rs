//! Cell cleaning.

use crate::cell::RawCell;
use chrono::{Duration, NaiveDateTime, Timelike};
use scorebook_core::CellValue;

/// Lower-cased text that means "no value".
const NULL_MARKERS: [&str; 5] = ["", "na", "n/a", "null", "-"];

fn at_midnight(value: &NaiveDateTime) -> bool {
    value.num_seconds_from_midnight() == 0 && value.nanosecond() == 0
}

fn iso_datetime(value: &NaiveDateTime) -> String {
    if value.nanosecond() == 0 {
        value.format("%Y-%m-%dT%H:%M:%S").to_string()
    } else {
        value.format("%Y-%m-%dT%H:%M:%S%.6f").to_string()
    }
}

fn elapsed(value: &Duration) -> String {
    let total = value.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    format!(
        "{sign}{:02}:{:02}:{:02}",
        total / 3600,
        total % 3600 / 60,
        total % 60
    )
}

/// Convert a raw cell into its canonical JSON-safe form.
///
/// Never fails:
/// - blank text and the markers `NA`, `N/A`, `null`, `-` become null
/// - other text is trimmed
/// - date-times at midnight collapse to `YYYY-MM-DD`
/// - floats are rounded to two decimals, whole results become integers
/// - booleans and error cells keep their text
pub fn clean_value(cell: &RawCell) -> CellValue {
    match cell {
        RawCell::Empty => CellValue::Null,
        RawCell::String(s) => {
            let trimmed = s.trim();
            if NULL_MARKERS.contains(&trimmed.to_lowercase().as_str()) {
                CellValue::Null
            } else {
                CellValue::String(trimmed.to_string())
            }
        }
        RawCell::DateTime(dt) if at_midnight(dt) => {
            CellValue::String(dt.date().format("%Y-%m-%d").to_string())
        }
        RawCell::DateTime(dt) => CellValue::String(iso_datetime(dt)),
        RawCell::Date(d) => CellValue::String(d.format("%Y-%m-%d").to_string()),
        RawCell::Time(t) => CellValue::String(t.format("%H:%M:%S").to_string()),
        RawCell::Duration(d) => CellValue::String(elapsed(d)),
        RawCell::Float(f) => CellValue::rounded(*f),
        RawCell::Int(i) => CellValue::Int(*i),
        RawCell::Bool(b) => CellValue::String(b.to_string()),
        RawCell::Error(e) => CellValue::String(e.clone()),
    }
}
