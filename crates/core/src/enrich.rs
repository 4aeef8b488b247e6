//! Derived statistics for datasets produced by the offline generator.
//!
//! None of this runs on upload: an uploaded workbook is stored exactly as
//! parsed.

use crate::dataset::{Dataset, Section};
use crate::value::{CellValue, Record};

const ID_FIELDS: [&str; 2] = ["PlayerID", "MatchID"];

fn number(record: &Record, field: &str) -> Option<f64> {
    record.get(field).and_then(CellValue::as_number)
}

fn fill_rate(
    record: &mut Record,
    target: &str,
    numerator: &str,
    denominator: &str,
    scale: f64,
) -> bool {
    if number(record, target).is_some() {
        return false;
    }
    let Some(divisor) = number(record, denominator).filter(|d| *d > 0.0) else {
        return false;
    };
    let Some(runs) = number(record, numerator) else {
        return false;
    };
    record.insert(target.to_string(), CellValue::rounded(runs / divisor * scale));
    true
}

/// Fill `Strike Rate` from `Runs` and `Balls` where it is blank or not numeric.
///
/// Returns the number of rows filled.
pub fn fill_strike_rates(dataset: &mut Dataset) -> usize {
    dataset
        .batting
        .iter_mut()
        .map(|record| fill_rate(record, "Strike Rate", "Runs", "Balls", 100.0))
        .filter(|filled| *filled)
        .count()
}

/// Fill `Economy` from `Bowl Runs` and `Overs` where it is blank or not numeric.
///
/// Returns the number of rows filled.
pub fn fill_economies(dataset: &mut Dataset) -> usize {
    dataset
        .bowling
        .iter_mut()
        .map(|record| fill_rate(record, "Economy", "Bowl Runs", "Overs", 1.0))
        .filter(|filled| *filled)
        .count()
}

/// Store every `PlayerID` and `MatchID` as a string.
pub fn stringify_ids(dataset: &mut Dataset) {
    for section in Section::ALL {
        for record in dataset.section_mut(section) {
            for field in ID_FIELDS {
                if let Some(value) = record.get_mut(field) {
                    if matches!(value, CellValue::Int(_) | CellValue::Float(_)) {
                        *value = CellValue::String(value.to_string());
                    }
                }
            }
        }
    }
}

/// Apply every derived-statistics pass used by the generator.
pub fn enrich(dataset: &mut Dataset) {
    let strike_rates = fill_strike_rates(dataset);
    let economies = fill_economies(dataset);
    stringify_ids(dataset);
    tracing::debug!(strike_rates, economies, "Filled derived statistics");
}
