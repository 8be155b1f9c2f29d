//! # Gear-Ratio Divisor Search
//!
//! Scans a range of candidate divisors and reports those that divide a
//! target value to an exact integer at a configured rounding precision.
//!
//! Typical use: a train wheel must turn `x` times per hour; which pinion
//! counts (or module multiples) between `a` and `b` give a whole-number
//! mating wheel? The search is a plain bounded linear scan, deterministic
//! for a given configuration.
//!
//! ## Example
//!
//! ```rust
//! use cadence_core::calculations::ratio::{calculate, RatioSearchInput};
//!
//! let input = RatioSearchInput {
//!     label: "Minute train".to_string(),
//!     divisor_min: 4.0,
//!     divisor_max: 20.0,
//!     target: 60.0,
//!     increment: 0.5,
//!     round_decimals: 3,
//! };
//! let result = calculate(&input).unwrap();
//! assert_eq!(result.matches[0].divisor, 5.0);
//! assert_eq!(result.matches[0].quotient, 12.0);
//! ```

use serde::{Deserialize, Serialize};

use crate::calculations::round_to;
use crate::errors::{CalcError, CalcResult};

/// Upper bound on scan steps, guarding against degenerate increments
const MAX_SCAN_STEPS: f64 = 10_000_000.0;

/// Input parameters for a divisor search.
///
/// ## JSON Example
///
/// ```json
/// {
///   "label": "Minute train",
///   "divisor_min": 4.0,
///   "divisor_max": 20.0,
///   "target": 60.0,
///   "increment": 0.01,
///   "round_decimals": 3
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioSearchInput {
    /// User label for this calculation (e.g., "Minute train")
    pub label: String,

    /// Lower bound of the divisor range (exclusive; the scan starts one
    /// increment above it)
    pub divisor_min: f64,

    /// Upper bound of the divisor range (inclusive)
    pub divisor_max: f64,

    /// Value being divided (e.g., turns per hour)
    pub target: f64,

    /// Step between candidate divisors; must be at least one step of the
    /// `round_decimals` grid so every scan step advances
    pub increment: f64,

    /// Decimal places candidates and quotients are rounded to before the
    /// integer test
    pub round_decimals: u32,
}

impl RatioSearchInput {
    /// Validate input parameters.
    pub fn validate(&self) -> CalcResult<()> {
        let positive = [
            ("divisor_min", self.divisor_min),
            ("divisor_max", self.divisor_max),
            ("target", self.target),
            ("increment", self.increment),
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
        if self.divisor_max <= self.divisor_min {
            return Err(CalcError::invalid_input(
                "divisor_max",
                self.divisor_max.to_string(),
                "Range upper bound must exceed the lower bound",
            ));
        }
        if self.round_decimals > 9 {
            return Err(CalcError::invalid_input(
                "round_decimals",
                self.round_decimals.to_string(),
                "Rounding precision above 9 decimal places is not meaningful",
            ));
        }
        // Candidates advance on the rounded grid. An increment finer than
        // one grid step can round back onto the previous candidate, and the
        // scan would never terminate.
        let grid_step = 10f64.powi(-(self.round_decimals as i32));
        if self.increment < grid_step {
            return Err(CalcError::invalid_input(
                "increment",
                self.increment.to_string(),
                "Increment is finer than the rounding grid, the scan cannot advance",
            ));
        }
        let steps = (self.divisor_max - self.divisor_min) / self.increment;
        if steps > MAX_SCAN_STEPS {
            return Err(CalcError::invalid_input(
                "increment",
                self.increment.to_string(),
                "Increment is too fine for the given range",
            ));
        }
        Ok(())
    }
}

/// One divisor that yields an integer quotient.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RatioMatch {
    /// The divisor c
    pub divisor: f64,
    /// The integer quotient target / c
    pub quotient: f64,
}

/// Results from a divisor search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RatioSearchResult {
    /// All matches in ascending divisor order
    pub matches: Vec<RatioMatch>,
}

impl RatioSearchResult {
    /// Whether any divisor in the range produced an integer quotient.
    pub fn has_matches(&self) -> bool {
        !self.matches.is_empty()
    }
}

/// Scan the divisor range and collect integer-quotient divisors.
///
/// # Arguments
///
/// * `input` - Range, target, and rounding configuration
///
/// # Returns
///
/// * `Ok(RatioSearchResult)` - Matches in ascending divisor order (possibly empty)
/// * `Err(CalcError)` - If the configuration is invalid
pub fn calculate(input: &RatioSearchInput) -> CalcResult<RatioSearchResult> {
    input.validate()?;

    let mut matches = Vec::new();
    let mut candidate = input.divisor_min;
    loop {
        // Re-round each step so accumulated float error cannot drift the
        // candidate off the intended grid.
        candidate = round_to(candidate + input.increment, input.round_decimals);
        if candidate > input.divisor_max {
            break;
        }
        let quotient = round_to(input.target / candidate, input.round_decimals);
        if quotient.fract() == 0.0 {
            matches.push(RatioMatch {
                divisor: candidate,
                quotient,
            });
        }
    }

    Ok(RatioSearchResult { matches })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minute_train() -> RatioSearchInput {
        RatioSearchInput {
            label: "Test train".to_string(),
            divisor_min: 4.0,
            divisor_max: 20.0,
            target: 60.0,
            increment: 0.5,
            round_decimals: 3,
        }
    }

    #[test]
    fn test_finds_exact_divisors() {
        let result = calculate(&minute_train()).unwrap();
        let divisors: Vec<f64> = result.matches.iter().map(|m| m.divisor).collect();
        assert_eq!(divisors, vec![5.0, 6.0, 7.5, 10.0, 12.0, 15.0, 20.0]);

        let quotients: Vec<f64> = result.matches.iter().map(|m| m.quotient).collect();
        assert_eq!(quotients, vec![12.0, 10.0, 8.0, 6.0, 5.0, 4.0, 3.0]);
    }

    #[test]
    fn test_lower_bound_excluded_upper_included() {
        let result = calculate(&minute_train()).unwrap();
        // 60 / 4 = 15 is an integer, but the scan starts above the lower bound.
        assert!(result.matches.iter().all(|m| m.divisor > 4.0));
        // The upper bound itself is tested.
        assert!(result.matches.iter().any(|m| m.divisor == 20.0));
    }

    #[test]
    fn test_rounded_near_integer_counts() {
        let input = RatioSearchInput {
            label: "Fine scan".to_string(),
            divisor_min: 6.6,
            divisor_max: 6.7,
            target: 60.0,
            increment: 0.001,
            round_decimals: 3,
        };
        let result = calculate(&input).unwrap();
        // 60 / 6.667 = 8.99955, which rounds to 9.0 at 3 decimals.
        assert!(result
            .matches
            .iter()
            .any(|m| m.divisor == 6.667 && m.quotient == 9.0));
    }

    #[test]
    fn test_no_matches_is_ok() {
        let input = RatioSearchInput {
            label: "Empty".to_string(),
            divisor_min: 7.0,
            divisor_max: 7.4,
            target: 61.0,
            increment: 0.1,
            round_decimals: 3,
        };
        let result = calculate(&input).unwrap();
        assert!(!result.has_matches());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut input = minute_train();
        input.divisor_max = 2.0;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_degenerate_increment_rejected() {
        let mut input = minute_train();
        input.increment = 1e-12;
        assert!(calculate(&input).is_err());
    }

    #[test]
    fn test_increment_finer_than_rounding_grid_rejected() {
        let mut input = minute_train();
        // At 3 decimals, a 0.0001 step rounds back onto the previous
        // candidate; validation must reject it or the scan never advances.
        input.increment = 0.0001;
        let err = calculate(&input).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        // Exactly one grid step always advances and must terminate.
        input.increment = 0.001;
        let result = calculate(&input).unwrap();
        assert!(result.has_matches());
    }

    #[test]
    fn test_serialization() {
        let input = minute_train();
        let json = serde_json::to_string(&input).unwrap();
        let roundtrip: RatioSearchInput = serde_json::from_str(&json).unwrap();
        assert_eq!(input.target, roundtrip.target);
        assert_eq!(input.increment, roundtrip.increment);
    }
}
