//! # scorebook-core
//!
//! Core types for the scorebook service.
//!
//! This crate provides:
//! - The normalized cell value and record types
//! - The [`Dataset`] document and its sections
//! - Cross-sheet referential validation
//! - The on-disk [`DatasetStore`]
//! - Derived statistics used by the offline generator

/// Derived statistics and ID normalization for generated datasets.
pub mod enrich;
/// Dataset document types.
pub mod dataset;
/// Error types and result aliases.
pub mod error;
/// Persisted, cached dataset storage.
pub mod store;
/// Cross-sheet referential integrity checks.
pub mod validate;
/// Normalized cell values.
pub mod value;

/// Re-export dataset types.
pub use dataset::{Dataset, Meta, Section};
/// Re-export core error types.
pub use error::{StoreError, StoreResult, ValidationError, ValidationResult};
/// Re-export the dataset store.
pub use store::DatasetStore;
/// Re-export the validator entry point.
pub use validate::validate_dataset;
/// Re-export value types.
pub use value::{CellValue, Record};
