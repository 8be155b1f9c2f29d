//! # Barrel Arbor Sizing
//!
//! Derives the barrel arbor core diameter from the mainspring thickness.
//!
//! The classical proportion is `d3 = 21 * e1` (arbor core diameter as a
//! multiple of the spring thickness). NIHS 11-02 then requires the result
//! to be rounded **down** to the nearest 0.10 mm so the arbor lands on a
//! catalogue dimension; rounding up would overstress the spring's inner
//! coil.
//!
//! ## Example
//!
//! ```rust
//! use cadence_core::calculations::arbor::{calculate, ArborInput};
//!
//! let input = ArborInput {
//!     label: "Cal. 01 arbor".to_string(),
//!     mainspring_thickness_mm: 0.13,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.arbor_diameter_mm, 2.7);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::round_to;
use crate::errors::{CalcError, CalcResult};

/// Arbor core diameter as a multiple of spring thickness
pub const ARBOR_THICKNESS_RATIO: f64 = 21.0;

/// NIHS 11-02 catalogue step for arbor diameters (mm)
pub const ARBOR_STEP_MM: f64 = 0.10;

/// Input parameters for barrel arbor sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Cal. 01 arbor",
///   "mainspring_thickness_mm": 0.13
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArborInput {
    /// User label for this calculation (e.g., "Cal. 01 arbor")
    pub label: String,

    /// Mainspring strip thickness e1 in mm
    pub mainspring_thickness_mm: f64,
}

impl ArborInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        if !self.mainspring_thickness_mm.is_finite() || self.mainspring_thickness_mm <= 0.0 {
            return Err(CalcError::invalid_input(
                "mainspring_thickness_mm",
                self.mainspring_thickness_mm.to_string(),
                "Must be finite and positive",
            ));
        }
        Ok(())
    }
}

/// Results from barrel arbor sizing.
///
/// ## JSON Example
///
/// ```json
/// {
///   "raw_diameter_mm": 2.73,
///   "arbor_diameter_mm": 2.7
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArborResult {
    /// Proportional diameter 21 x e1 before catalogue rounding (mm)
    pub raw_diameter_mm: f64,

    /// Arbor core diameter d3 rounded down to the NIHS 11-02 step (mm)
    pub arbor_diameter_mm: f64,
}

/// Calculate the barrel arbor core diameter.
///
/// # Arguments
///
/// * `input` - Mainspring thickness
///
/// # Returns
///
/// * `Ok(ArborResult)` - Raw and catalogue-rounded arbor diameter
/// * `Err(CalcError)` - If the thickness is invalid
pub fn calculate(input: &ArborInput) -> CalcResult<ArborResult> {
    input.validate()?;

    let raw = ARBOR_THICKNESS_RATIO * input.mainspring_thickness_mm;
    // Round down onto the 0.10 mm catalogue grid, never up.
    let stepped = (raw / ARBOR_STEP_MM).floor() * ARBOR_STEP_MM;

    Ok(ArborResult {
        raw_diameter_mm: round_to(raw, 2),
        arbor_diameter_mm: round_to(stepped, 2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arbor(thickness_mm: f64) -> ArborInput {
        ArborInput {
            label: "Test arbor".to_string(),
            mainspring_thickness_mm: thickness_mm,
        }
    }

    #[test]
    fn test_standard_thickness() {
        let result = calculate(&arbor(0.13)).unwrap();
        // 21 * 0.13 = 2.73, down to 2.7
        assert_eq!(result.raw_diameter_mm, 2.73);
        assert_eq!(result.arbor_diameter_mm, 2.7);
    }

    #[test]
    fn test_exact_catalogue_value_unchanged() {
        let result = calculate(&arbor(0.10)).unwrap();
        // 21 * 0.10 = 2.1, already on the grid
        assert_eq!(result.arbor_diameter_mm, 2.1);
    }

    #[test]
    fn test_rounds_down_not_to_nearest() {
        let result = calculate(&arbor(0.128)).unwrap();
        // 21 * 0.128 = 2.688: nearest grid value is 2.7, but the rule
        // rounds down to 2.6.
        assert_eq!(result.arbor_diameter_mm, 2.6);
    }

    #[test]
    fn test_invalid_thickness() {
        assert!(calculate(&arbor(0.0)).is_err());
        assert!(calculate(&arbor(-0.1)).is_err());
        assert!(calculate(&arbor(f64::NAN)).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = arbor(0.13);
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: ArborInput = serde_json::from_str(&json).unwrap();
        assert_eq!(
            input.mainspring_thickness_mm,
            roundtrip.mainspring_thickness_mm
        );
    }
}
