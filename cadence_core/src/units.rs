//! # Unit Types
//!
//! Type-safe wrappers for the units used in watch component design. These
//! provide compile-time safety against unit confusion while remaining
//! lightweight (just f64 wrappers).
//!
//! ## Design Philosophy
//!
//! We use simple newtype wrappers rather than a full units library because:
//! - Watchmaking worksheets use a small, consistent set of units
//! - We want JSON serialization to be clean (just numbers)
//! - Minimal runtime overhead
//!
//! ## Units
//!
//! - Length: millimeters (mm), centimeters (cm)
//! - Frequency: hertz (Hz), beats per hour (vph = Hz x 7200)
//!
//! Note that watchmaking drawings quote lengths in mm while the CGS
//! stiffness derivation works in cm, so the mm/cm conversion carries
//! real weight here.
//!
//! ## Example
//!
//! ```rust
//! use cadence_core::units::{Millimeters, Centimeters, Hertz, BeatsPerHour};
//!
//! let outer_diameter = Millimeters(6.0);
//! let in_cm: Centimeters = outer_diameter.into();
//! assert_eq!(in_cm.0, 0.6);
//!
//! let beat: BeatsPerHour = Hertz(4.0).into();
//! assert_eq!(beat.0, 28_800.0);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in centimeters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Centimeters(pub f64);

impl From<Millimeters> for Centimeters {
    fn from(mm: Millimeters) -> Self {
        Centimeters(mm.0 / 10.0)
    }
}

// ============================================================================
// Frequency Units
// ============================================================================

/// Balance frequency in hertz (full oscillations per second)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hertz(pub f64);

/// Balance beat rate in vibrations per hour (vph)
///
/// One oscillation is two beats, so vph = Hz x 7200
/// (4 Hz = 28,800 vph, 5 Hz = 36,000 vph).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BeatsPerHour(pub f64);

impl From<Hertz> for BeatsPerHour {
    fn from(hz: Hertz) -> Self {
        BeatsPerHour(hz.0 * 7200.0)
    }
}

impl From<BeatsPerHour> for Hertz {
    fn from(vph: BeatsPerHour) -> Self {
        Hertz(vph.0 / 7200.0)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Centimeters);
impl_arithmetic!(Hertz);
impl_arithmetic!(BeatsPerHour);
