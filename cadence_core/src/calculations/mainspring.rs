//! # Mainspring Dimensioning
//!
//! Sizes the mainspring of an automatic movement (thickness, length, width)
//! from the barrel geometry and the target power reserve.
//!
//! ## Rules of thumb
//!
//! These are the classical barrel proportion rules, scaled for power
//! reserves beyond the traditional 48 hours:
//!
//! - `length = D_barrel * (45 + (reserve - 48) / 24 * 5) * material_factor`
//! - `thickness = D_barrel / 87 * material_factor`
//! - `width = barrel_depth - lid_thickness - 0.1 mm clearance`
//!
//! The material factor is an explicit, enumerated choice (see
//! [`MainspringMaterial`]) rather than a bare multiplier, so a calculation
//! always states what alloy it was sized for.
//!
//! ## Example
//!
//! ```rust
//! use cadence_core::calculations::mainspring::{
//!     calculate, MainspringInput, MainspringMaterial,
//! };
//!
//! let input = MainspringInput {
//!     label: "Cal. 01 barrel".to_string(),
//!     barrel_inner_diameter_mm: 11.6,
//!     barrel_depth_mm: 1.63,
//!     lid_thickness_mm: 0.2,
//!     power_reserve_hours: 72.0,
//!     material: MainspringMaterial::Nivaflex,
//!     round_decimals: 2,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.thickness_mm, 0.13);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::round_to;
use crate::errors::{CalcError, CalcResult};

/// Radial clearance left between spring width and the barrel cavity (mm)
pub const WIDTH_CLEARANCE_MM: f64 = 0.1;

/// Default rounding precision for reported dimensions (decimal places)
pub const DEFAULT_ROUND_DECIMALS: u32 = 2;

/// Mainspring alloy selection.
///
/// The factor scales the classical proportion rules: modern cobalt alloys
/// tolerate a thinner, shorter spring for the same torque.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "alloy")]
pub enum MainspringMaterial {
    /// Elinvar-type alloy (factor 1.0)
    #[default]
    Elinvar,
    /// 1095 carbon steel, vintage-style blued spring (factor 1.0)
    CarbonSteel1095,
    /// Nivaflex cobalt alloy (factor 0.95)
    Nivaflex,
    /// User-supplied factor for other alloys
    Custom { factor: f64 },
}

impl MainspringMaterial {
    /// The sizing factor applied to thickness and length.
    pub fn factor(&self) -> f64 {
        match self {
            MainspringMaterial::Elinvar => 1.0,
            MainspringMaterial::CarbonSteel1095 => 1.0,
            MainspringMaterial::Nivaflex => 0.95,
            MainspringMaterial::Custom { factor } => *factor,
        }
    }

    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            MainspringMaterial::Elinvar => "Elinvar",
            MainspringMaterial::CarbonSteel1095 => "1095 carbon steel",
            MainspringMaterial::Nivaflex => "Nivaflex",
            MainspringMaterial::Custom { .. } => "Custom",
        }
    }
}

impl std::fmt::Display for MainspringMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Input parameters for mainspring dimensioning.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Cal. 01 barrel",
///   "barrel_inner_diameter_mm": 11.6,
///   "barrel_depth_mm": 1.63,
///   "lid_thickness_mm": 0.2,
///   "power_reserve_hours": 72.0,
///   "material": { "alloy": "Nivaflex" },
///   "round_decimals": 2
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainspringInput {
    /// User label for this calculation (e.g., "Cal. 01 barrel")
    pub label: String,

    /// Inner diameter of the barrel in mm
    pub barrel_inner_diameter_mm: f64,

    /// Inner depth of the barrel in mm
    pub barrel_depth_mm: f64,

    /// Thickness of the barrel lid in mm
    pub lid_thickness_mm: f64,

    /// Target power reserve in hours (48 is the classical baseline)
    pub power_reserve_hours: f64,

    /// Spring alloy, fixing the sizing factor
    pub material: MainspringMaterial,

    /// Decimal places for the reported dimensions (default 2)
    pub round_decimals: u32,
}

impl Default for MainspringInput {
    fn default() -> Self {
        Self {
            label: String::new(),
            barrel_inner_diameter_mm: 0.0,
            barrel_depth_mm: 0.0,
            lid_thickness_mm: 0.0,
            power_reserve_hours: 48.0,
            material: MainspringMaterial::default(),
            round_decimals: DEFAULT_ROUND_DECIMALS,
        }
    }
}

impl MainspringInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("barrel_inner_diameter_mm", self.barrel_inner_diameter_mm),
            ("barrel_depth_mm", self.barrel_depth_mm),
            ("lid_thickness_mm", self.lid_thickness_mm),
            ("power_reserve_hours", self.power_reserve_hours),
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
        let factor = self.material.factor();
        if !factor.is_finite() || factor <= 0.0 {
            return Err(CalcError::invalid_input(
                "material",
                factor.to_string(),
                "Material factor must be finite and positive",
            ));
        }
        if self.round_decimals > 9 {
            return Err(CalcError::invalid_input(
                "round_decimals",
                self.round_decimals.to_string(),
                "Rounding precision above 9 decimal places is not meaningful",
            ));
        }
        Ok(())
    }
}

/// Results from mainspring dimensioning.
///
/// ## JSON Example
///
/// ```json
/// {
///   "thickness_mm": 0.13,
///   "length_mm": 551.0,
///   "width_mm": 1.33
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainspringResult {
    /// Spring strip thickness e in mm
    pub thickness_mm: f64,

    /// Developed spring length in mm
    pub length_mm: f64,

    /// Spring strip width (height) in mm
    pub width_mm: f64,
}

/// Calculate mainspring dimensions for a target power reserve.
///
/// # Arguments
///
/// * `input` - Barrel geometry, power reserve, and alloy
///
/// # Returns
///
/// * `Ok(MainspringResult)` - Rounded spring dimensions
/// * `Err(CalcError)` - If inputs are invalid or the barrel leaves no room
///   for the spring width
pub fn calculate(input: &MainspringInput) -> CalcResult<MainspringResult> {
    input.validate()?;

    let factor = input.material.factor();
    let diameter = input.barrel_inner_diameter_mm;

    // Length rule extends the classical 45x diameter for reserves past 48 h.
    let reserve_term = 45.0 + (input.power_reserve_hours - 48.0) / 24.0 * 5.0;
    let length = diameter * reserve_term * factor;

    let thickness = diameter / 87.0 * factor;

    let width = input.barrel_depth_mm - input.lid_thickness_mm - WIDTH_CLEARANCE_MM;
    if width <= 0.0 {
        return Err(CalcError::calculation_failed(
            "mainspring",
            format!(
                "Barrel depth {} mm minus lid {} mm leaves no room for the spring",
                input.barrel_depth_mm, input.lid_thickness_mm
            ),
        ));
    }

    Ok(MainspringResult {
        thickness_mm: round_to(thickness, input.round_decimals),
        length_mm: round_to(length, input.round_decimals),
        width_mm: round_to(width, input.round_decimals),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn automatic_72h() -> MainspringInput {
        MainspringInput {
            label: "Test barrel".to_string(),
            barrel_inner_diameter_mm: 11.6,
            barrel_depth_mm: 1.63,
            lid_thickness_mm: 0.2,
            power_reserve_hours: 72.0,
            material: MainspringMaterial::Nivaflex,
            round_decimals: 2,
        }
    }

    #[test]
    fn test_automatic_72h_dimensions() {
        let result = calculate(&automatic_72h()).unwrap();
        // length = 11.6 * (45 + 5) * 0.95 = 551.0
        assert_eq!(result.length_mm, 551.0);
        // thickness = 11.6 / 87 * 0.95 = 0.1267 -> 0.13
        assert_eq!(result.thickness_mm, 0.13);
        // width = 1.63 - 0.2 - 0.1 = 1.33
        assert_eq!(result.width_mm, 1.33);
    }

    #[test]
    fn test_classical_48h_baseline() {
        let mut input = automatic_72h();
        input.power_reserve_hours = 48.0;
        input.material = MainspringMaterial::Elinvar;
        let result = calculate(&input).unwrap();
        // Baseline rule: length = 45 x barrel diameter.
        assert_eq!(result.length_mm, 522.0);
    }

    #[test]
    fn test_material_factors() {
        assert_eq!(MainspringMaterial::Elinvar.factor(), 1.0);
        assert_eq!(MainspringMaterial::CarbonSteel1095.factor(), 1.0);
        assert_eq!(MainspringMaterial::Nivaflex.factor(), 0.95);
        assert_eq!(MainspringMaterial::Custom { factor: 0.9 }.factor(), 0.9);
    }

    #[test]
    fn test_shallow_barrel_rejected() {
        let mut input = automatic_72h();
        input.barrel_depth_mm = 0.25;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_invalid_custom_factor() {
        let mut input = automatic_72h();
        input.material = MainspringMaterial::Custom { factor: 0.0 };
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_serialization() {
        let input = automatic_72h();
        let json = serde_json::to_string_pretty(&input).unwrap();
        let roundtrip: MainspringInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.material, roundtrip.material);
        assert_eq!(input.power_reserve_hours, roundtrip.power_reserve_hours);
    }
}
