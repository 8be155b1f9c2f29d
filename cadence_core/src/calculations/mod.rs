//! # Watch Component Calculations
//!
//! This module contains all component calculation types. Each calculation
//! follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable, with `validate()`)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Calculations never mutate shared state: standard tables are injected as
//! read-only references and every function is a pure map from input to
//! result.
//!
//! ## Available Calculations
//!
//! - [`hairspring`] - Hairspring stiffness with NIHS 35-10 matching
//! - [`mainspring`] - Mainspring dimensioning for a target power reserve
//! - [`arbor`] - Barrel arbor sizing per NIHS 11-02
//! - [`ratio`] - Gear-ratio divisor search

pub mod arbor;
pub mod hairspring;
pub mod mainspring;
pub mod ratio;

use serde::{Deserialize, Serialize};

// Re-export commonly used types
pub use arbor::{ArborInput, ArborResult};
pub use hairspring::{HairspringInput, HairspringResult};
pub use mainspring::{MainspringInput, MainspringMaterial, MainspringResult};
pub use ratio::{RatioMatch, RatioSearchInput, RatioSearchResult};

/// Round to a fixed number of decimal places (half away from zero).
///
/// Reported dimensions follow drawing conventions, so results are rounded
/// at an explicit, configured precision rather than printed raw.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    (value * scale).round() / scale
}

/// Enum wrapper for all calculation types.
///
/// This allows storing heterogeneous calculations in a single collection
/// while maintaining type safety and clean serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Hairspring stiffness calculation
    Hairspring(HairspringInput),
    /// Mainspring dimensioning calculation
    Mainspring(MainspringInput),
    /// Barrel arbor sizing calculation
    Arbor(ArborInput),
    /// Gear-ratio divisor search
    RatioSearch(RatioSearchInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Hairspring(h) => &h.label,
            CalculationItem::Mainspring(m) => &m.label,
            CalculationItem::Arbor(a) => &a.label,
            CalculationItem::RatioSearch(r) => &r.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Hairspring(_) => "Hairspring",
            CalculationItem::Mainspring(_) => "Mainspring",
            CalculationItem::Arbor(_) => "Arbor",
            CalculationItem::RatioSearch(_) => "RatioSearch",
        }
    }
}
