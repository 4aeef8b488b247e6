//! Workbook parsing for scorebook
//!
//! Turns the team's statistics workbook into a validated [`Dataset`]:
//! cells are cleaned, header rows become field names, and the seven
//! required sheets are checked against each other.
//!
//! # Examples
//!
//! ```
//! use scorebook_sheet::{sheet_to_records, RawCell};
//!
//! let rows = vec![
//!     vec![RawCell::from(" PlayerID "), RawCell::from("Player Name")],
//!     vec![RawCell::from("P1"), RawCell::from("  Arun  ")],
//!     vec![RawCell::Empty, RawCell::from("n/a")],
//! ];
//!
//! let records = sheet_to_records("Players", &rows, &[], &["PlayerID"]).unwrap();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0]["Player Name"].as_str(), Some("Arun"));
//! ```
//!
//! [`Dataset`]: scorebook_core::Dataset

mod cell;
mod normalize;
mod sheets;
mod tabulate;
mod xlsx;

/// Re-export raw cell type.
pub use cell::RawCell;
/// Re-export the cell normalizer.
pub use normalize::clean_value;
/// Re-export per-sheet configuration.
pub use sheets::{SheetSpec, SHEETS};
/// Re-export the sheet tabulator.
pub use tabulate::sheet_to_records;
/// Re-export the workbook parser.
pub use xlsx::parse_workbook_bytes;
