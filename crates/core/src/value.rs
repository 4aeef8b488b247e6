//! Normalized cell values.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of a sheet, keyed by (renamed) header, in source column order.
pub type Record = IndexMap<String, CellValue>;

/// A cleaned, JSON-safe cell value.
///
/// Serialized untagged, so a record reads as a plain JSON object of scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Blank, placeholder (`NA`, `-`, ...) or absent.
    Null,

    /// Integer value (64-bit).
    Int(i64),

    /// Float value, at most two decimals once normalized.
    Float(f64),

    /// Trimmed text.
    String(String),
}

impl CellValue {
    /// Round to two decimals, collapsing whole results to [`CellValue::Int`].
    ///
    /// Rounding works on the exact binary value, ties to even, so `1.115`
    /// (stored just below the tie) gives `1.11` and `0.125` gives `0.12`.
    /// Non-finite input has no JSON form and becomes [`CellValue::Null`].
    #[must_use]
    pub fn rounded(value: f64) -> Self {
        if !value.is_finite() {
            return Self::Null;
        }
        let rounded = format!("{value:.2}").parse::<f64>().unwrap_or(value);
        if rounded.fract() == 0.0 && rounded.abs() < 9.0e15 {
            Self::Int(rounded as i64)
        } else {
            Self::Float(rounded)
        }
    }

    /// Check if value is null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get the value as a string slice.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric reading of the value, parsing numeric text.
    #[must_use]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::String(s) => s.trim().parse::<f64>().ok().filter(|f| f.is_finite()),
            Self::Null => None,
        }
    }

    /// Textual identity used to compare IDs across sheets.
    ///
    /// Returns `None` for null and empty strings.
    #[must_use]
    pub fn key(&self) -> Option<String> {
        match self {
            Self::Null => None,
            Self::String(s) if s.is_empty() => None,
            other => Some(other.to_string()),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}
