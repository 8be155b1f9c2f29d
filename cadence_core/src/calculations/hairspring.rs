//! # Hairspring Stiffness Calculation
//!
//! Computes the elastic torque and stiffness of a flat balance spring from
//! the balance inertia, spring geometry, and beat frequency, then matches
//! the stiffness against the NIHS 35-10 standard table.
//!
//! ## Derivation
//!
//! Works in CGS units as on the standard worksheet:
//!
//! - Elastic torque `M = I * 4 * pi^2 * f^2` (mg.cm^2.s^-2/rad)
//! - Stiffness `K = M * (D^2 - d^2)` with diameters in cm (dyne.cm^2/rad)
//! - Table-unit stiffness `K_t = K * 10^-3` (10^-2 N.mm^3/rad)
//!
//! The result reports both the raw computed stiffness and the closest
//! NIHS 35-10 value; the raw number is never discarded, since the delta
//! between the two tells the regleur how far off-catalogue the design is.
//!
//! ## Example
//!
//! ```rust
//! use cadence_core::calculations::hairspring::{calculate, HairspringInput};
//!
//! let input = HairspringInput {
//!     label: "Cal. 01 balance".to_string(),
//!     balance_inertia_mg_cm2: 12.5,
//!     outer_diameter_mm: 6.0,
//!     inner_diameter_mm: 1.3,
//!     frequency_hz: 4.0,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.nihs_standard_stiffness, 2.65);
//! ```

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::standards::nihs_35_10_stiffness;
use crate::units::{BeatsPerHour, Centimeters, Hertz, Millimeters};

/// Input parameters for a hairspring stiffness calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Cal. 01 balance",
///   "balance_inertia_mg_cm2": 12.5,
///   "outer_diameter_mm": 6.0,
///   "inner_diameter_mm": 1.3,
///   "frequency_hz": 4.0
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HairspringInput {
    /// User label for this calculation (e.g., "Cal. 01 balance")
    pub label: String,

    /// Moment of inertia of the balance wheel in mg.cm^2
    pub balance_inertia_mg_cm2: f64,

    /// Outer diameter of the hairspring coil in mm
    pub outer_diameter_mm: f64,

    /// Inner diameter at the collet attachment in mm
    pub inner_diameter_mm: f64,

    /// Balance frequency in Hz (4 Hz = 28,800 vph, 5 Hz = 36,000 vph)
    pub frequency_hz: f64,
}

impl HairspringInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("balance_inertia_mg_cm2", self.balance_inertia_mg_cm2),
            ("outer_diameter_mm", self.outer_diameter_mm),
            ("inner_diameter_mm", self.inner_diameter_mm),
            ("frequency_hz", self.frequency_hz),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(CalcError::invalid_input(
                    field,
                    value.to_string(),
                    "Must be finite and positive",
                ));
            }
        }
        if self.inner_diameter_mm >= self.outer_diameter_mm {
            return Err(CalcError::invalid_input(
                "inner_diameter_mm",
                self.inner_diameter_mm.to_string(),
                "Inner (collet) diameter must be smaller than the outer diameter",
            ));
        }
        Ok(())
    }

    /// Beat rate in vibrations per hour for the configured frequency.
    pub fn beat_rate_vph(&self) -> f64 {
        BeatsPerHour::from(Hertz(self.frequency_hz)).value()
    }
}

/// Results from a hairspring stiffness calculation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "elastic_torque": 7895.68,
///   "stiffness_dyne_cm2": 2709.01,
///   "stiffness_table_units": 2.709,
///   "nihs_standard_stiffness": 2.65
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HairspringResult {
    /// Elastic torque M in mg.cm^2.s^-2/rad
    pub elastic_torque: f64,

    /// Computed stiffness K in dyne.cm^2/rad
    pub stiffness_dyne_cm2: f64,

    /// Computed stiffness in the NIHS table unit (10^-2 N.mm^3/rad)
    pub stiffness_table_units: f64,

    /// Closest permitted value from the NIHS 35-10 table (10^-2 N.mm^3/rad)
    pub nihs_standard_stiffness: f64,
}

impl HairspringResult {
    /// Relative deviation of the computed stiffness from the matched
    /// standard value (positive when the design is stiffer than catalogue).
    pub fn deviation_from_standard(&self) -> f64 {
        (self.stiffness_table_units - self.nihs_standard_stiffness) / self.nihs_standard_stiffness
    }
}

/// Calculate hairspring stiffness and its nearest NIHS 35-10 value.
///
/// # Arguments
///
/// * `input` - Balance and spring parameters
///
/// # Returns
///
/// * `Ok(HairspringResult)` - Torque, stiffness, and the matched standard value
/// * `Err(CalcError)` - If inputs are invalid
pub fn calculate(input: &HairspringInput) -> CalcResult<HairspringResult> {
    input.validate()?;

    // CGS worksheet: diameters enter the stiffness term in cm.
    let outer_cm = Centimeters::from(Millimeters(input.outer_diameter_mm)).value();
    let inner_cm = Centimeters::from(Millimeters(input.inner_diameter_mm)).value();
    let f = input.frequency_hz;

    let elastic_torque = input.balance_inertia_mg_cm2 * 4.0 * PI * PI * f * f;
    let stiffness_dyne_cm2 = elastic_torque * (outer_cm * outer_cm - inner_cm * inner_cm);
    let stiffness_table_units = stiffness_dyne_cm2 * 1e-3;

    let nihs_standard_stiffness = nihs_35_10_stiffness().nearest(stiffness_table_units)?;

    Ok(HairspringResult {
        elastic_torque,
        stiffness_dyne_cm2,
        stiffness_table_units,
        nihs_standard_stiffness,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn worksheet_input() -> HairspringInput {
        HairspringInput {
            label: "Test balance".to_string(),
            balance_inertia_mg_cm2: 12.5,
            outer_diameter_mm: 6.0,
            inner_diameter_mm: 1.3,
            frequency_hz: 4.0,
        }
    }

    #[test]
    fn test_elastic_torque() {
        let result = calculate(&worksheet_input()).unwrap();
        // M = 12.5 * 4 * pi^2 * 16 = 7895.68
        assert!((result.elastic_torque - 7895.68).abs() < 0.01);
    }

    #[test]
    fn test_stiffness_and_standard_match() {
        let result = calculate(&worksheet_input()).unwrap();
        // K = M * (0.6^2 - 0.13^2) = M * 0.3431 = 2709.01 dyne.cm^2/rad
        assert!((result.stiffness_dyne_cm2 - 2709.01).abs() < 0.01);
        assert!((result.stiffness_table_units - 2.709).abs() < 0.001);
        // 2.709 sits between 2.65 and 2.80; 2.65 is closer.
        assert_eq!(result.nihs_standard_stiffness, 2.65);
    }

    #[test]
    fn test_raw_value_reported_alongside_match() {
        let result = calculate(&worksheet_input()).unwrap();
        assert!(result.stiffness_table_units != result.nihs_standard_stiffness);
        assert!(result.deviation_from_standard() > 0.0);
    }

    #[test]
    fn test_beat_rate() {
        assert_eq!(worksheet_input().beat_rate_vph(), 28_800.0);
    }

    #[test]
    fn test_invalid_inertia() {
        let mut input = worksheet_input();
        input.balance_inertia_mg_cm2 = -1.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_collet_larger_than_coil_rejected() {
        let mut input = worksheet_input();
        input.inner_diameter_mm = 7.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = worksheet_input();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: HairspringInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.frequency_hz, roundtrip.frequency_hz);
        assert_eq!(input.outer_diameter_mm, roundtrip.outer_diameter_mm);
    }
}
