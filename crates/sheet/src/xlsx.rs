use crate::cell::RawCell;
use crate::sheets::SHEETS;
use crate::tabulate::sheet_to_records;
use calamine::{Data, Range, Reader, Xlsx, XlsxError};
use scorebook_core::{validate_dataset, Dataset, ValidationError, ValidationResult};
use std::io::Cursor;
use tracing::{debug, info};

fn unreadable(err: XlsxError) -> ValidationError {
    debug!(error = %err, "Failed to read workbook");
    ValidationError::UnreadableWorkbook
}

/// Cells of `range` laid out from `A1`.
///
/// calamine trims leading blank rows and columns; they are put back so the
/// header row is always the sheet's first row.
fn anchored_rows(range: &Range<Data>) -> Vec<Vec<RawCell>> {
    let (top, left) = range.start().unwrap_or((0, 0));
    let (top, left) = (top as usize, left as usize);
    let width = left + range.width();

    let mut rows = vec![vec![RawCell::Empty; width]; top];
    rows.extend(range.rows().map(|row| {
        let mut cells = vec![RawCell::Empty; left];
        cells.extend(row.iter().map(RawCell::from));
        cells
    }));
    rows
}

/// Parse an Excel workbook (`.xlsx`, `.xlsm`, `.xltx`, `.xltm`) into a
/// validated dataset.
///
/// Formula cells contribute their cached values. Every sheet in [`SHEETS`]
/// must be present; extra sheets are ignored.
///
/// # Errors
///
/// Returns [`ValidationError::UnreadableWorkbook`] for bytes that are not a
/// workbook, the first missing sheet or missing column set, or the first
/// referential failure from [`validate_dataset`].
pub fn parse_workbook_bytes(bytes: &[u8]) -> ValidationResult<Dataset> {
    let mut workbook: Xlsx<Cursor<&[u8]>> = Xlsx::new(Cursor::new(bytes)).map_err(unreadable)?;
    let sheet_names = workbook.sheet_names();

    let mut dataset = Dataset::template();
    for spec in &SHEETS {
        if !sheet_names.iter().any(|name| name == spec.name) {
            return Err(ValidationError::missing_sheet(spec.name));
        }

        let range = workbook.worksheet_range(spec.name).map_err(unreadable)?;
        let rows = anchored_rows(&range);

        let records = sheet_to_records(spec.name, &rows, spec.rename, spec.required)?;
        debug!(sheet = spec.name, records = records.len(), "Parsed sheet");
        *dataset.section_mut(spec.section) = records;
    }

    validate_dataset(&dataset)?;
    info!(
        matches = dataset.matches.len(),
        players = dataset.players.len(),
        "Parsed workbook"
    );
    Ok(dataset)
}
