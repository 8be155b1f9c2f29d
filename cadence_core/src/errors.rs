//! # Error Types
//!
//! Structured error types for cadence_core. Each variant carries enough
//! context to understand and fix the problem programmatically, and all
//! variants serialize cleanly to JSON for CLI/API consumers.
//!
//! ## Example
//!
//! ```rust
//! use cadence_core::errors::{CalcError, CalcResult};
//!
//! fn validate_diameter(diameter_mm: f64) -> CalcResult<()> {
//!     if diameter_mm <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "diameter_mm",
//!             diameter_mm.to_string(),
//!             "Diameter must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for cadence_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by downstream consumers.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A standard-value table was constructed with no entries
    #[error("Empty standard table: '{table}' has no entries, nearest-match lookup is undefined")]
    EmptyTable { table: String },

    /// Calculation failed (inconsistent geometry, no solution, etc.)
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an EmptyTable error
    pub fn empty_table(table: impl Into<String>) -> Self {
        CalcError::EmptyTable {
            table: table.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::EmptyTable { .. } => "EMPTY_TABLE",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
        }
    }
}
