use crate::cell::RawCell;
use crate::normalize::clean_value;
use scorebook_core::{Record, ValidationError, ValidationResult};

/// Field name for a header cell, or `None` when the column is unnamed.
///
/// Text headers are trimmed and then renamed. Other header cells use their
/// cleaned textual form.
fn header_name(cell: &RawCell, rename: &[(&str, &str)]) -> Option<String> {
    let name = match cell {
        RawCell::String(s) => s.trim().to_string(),
        other => clean_value(other).key()?,
    };
    if name.is_empty() {
        return None;
    }
    let renamed = rename
        .iter()
        .find(|(from, _)| *from == name)
        .map_or(name, |(_, to)| (*to).to_string());
    Some(renamed)
}

/// Convert a sheet's rows into records keyed by the header row.
///
/// The first row holds headers. Unnamed columns are skipped, every value
/// goes through [`clean_value`], and rows whose values are all null are
/// dropped. The remaining rows keep their source order.
///
/// # Errors
///
/// Returns [`ValidationError::MissingColumns`] naming every required header
/// absent from the renamed header row. An empty sheet is not checked.
pub fn sheet_to_records(
    sheet: &str,
    rows: &[Vec<RawCell>],
    rename: &[(&str, &str)],
    required: &[&str],
) -> ValidationResult<Vec<Record>> {
    let Some((header_row, data_rows)) = rows.split_first() else {
        return Ok(Vec::new());
    };

    let headers: Vec<Option<String>> = header_row
        .iter()
        .map(|cell| header_name(cell, rename))
        .collect();

    let missing: Vec<String> = required
        .iter()
        .filter(|column| !headers.iter().flatten().any(|h| h.as_str() == **column))
        .map(|column| (*column).to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::missing_columns(sheet, missing));
    }

    let mut records = Vec::with_capacity(data_rows.len());
    for row in data_rows {
        let mut record = Record::with_capacity(headers.len());
        let mut has_values = false;
        for (header, cell) in headers.iter().zip(row) {
            let Some(header) = header else {
                continue;
            };
            let value = clean_value(cell);
            has_values |= !value.is_null();
            record.insert(header.clone(), value);
        }
        if has_values {
            records.push(record);
        }
    }

    Ok(records)
}
