//! Error types for scorebook.

use thiserror::Error;

/// Result type for workbook parsing and dataset validation.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Result type for dataset persistence.
pub type StoreResult<T> = Result<T, StoreError>;

/// Reasons an uploaded workbook is rejected.
///
/// Every variant is terminal for the request that produced it. The message
/// is shown to the uploader verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The bytes are not a readable OOXML workbook.
    #[error("Unable to read Excel workbook.")]
    UnreadableWorkbook,

    /// One of the required sheets is absent.
    #[error("Workbook is missing required sheet '{sheet}'.")]
    MissingSheet { sheet: String },

    /// The header row lacks required columns (listed in required order).
    #[error("Sheet '{sheet}' is missing required columns: {}.", .columns.join(", "))]
    MissingColumns { sheet: String, columns: Vec<String> },

    #[error("Matches sheet must include at least one entry.")]
    NoMatches,

    #[error("Players sheet must include at least one entry.")]
    NoPlayers,

    /// A fact record points at a match that does not exist.
    #[error("{section} entry references unknown MatchID '{value}'.")]
    UnknownMatch { section: String, value: String },

    /// A fact record points at a player that does not exist.
    #[error("{section} entry references unknown PlayerID '{value}'.")]
    UnknownPlayer { section: String, value: String },

    /// Players without a career stats row, sorted.
    #[error("Player_Career_Stats sheet is missing records for: {}", .players.join(", "))]
    MissingCareerStats { players: Vec<String> },
}

impl ValidationError {
    /// Create a missing-sheet error.
    pub fn missing_sheet(sheet: impl Into<String>) -> Self {
        Self::MissingSheet {
            sheet: sheet.into(),
        }
    }

    /// Create a missing-columns error.
    pub fn missing_columns(sheet: impl Into<String>, columns: Vec<String>) -> Self {
        Self::MissingColumns {
            sheet: sheet.into(),
            columns,
        }
    }
}

/// Errors raised while reading or writing the persisted dataset.
#[derive(Debug, Error)]
pub enum StoreError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
