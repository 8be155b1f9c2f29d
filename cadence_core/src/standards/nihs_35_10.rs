//! NIHS 35-10 Standard Hairspring Stiffness Values
//!
//! The NIHS 35-10 standard defines the discrete permitted values for
//! hairspring stiffness K, in units of 10^-2 N.mm^3/rad. A computed
//! stiffness is not usable directly: the workshop orders the nearest
//! catalogued spring, so the useful output is "closest standard value"
//! alongside the raw number.
//!
//! The table is a Renard-style preferred-number series: 40 mantissas
//! replicated across five decades (x0.01 through x100), 200 entries total.
//!
//! ## Example
//!
//! ```rust
//! use cadence_core::standards::nihs_35_10_stiffness;
//!
//! let table = nihs_35_10_stiffness();
//! let standard_k = table.nearest(2.709).unwrap();
//! assert_eq!(standard_k, 2.65);
//! ```

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::errors::{CalcError, CalcResult};

/// The NIHS 35-10 stiffness values as printed in the standard: one row per
/// mantissa, five decade columns (x0.01, x0.1, x1, x10, x100).
///
/// Transcribed as literals rather than computed as mantissa x decade so
/// that every entry is bit-exact with the published figure (2.24 x 100
/// does not round to 224.0 in f64).
pub const STIFFNESS_VALUES: [f64; 200] = [
    0.0100, 0.100, 1.00, 10.0, 100.0,
    0.0106, 0.106, 1.06, 10.6, 106.0,
    0.0112, 0.112, 1.12, 11.2, 112.0,
    0.0118, 0.118, 1.18, 11.8, 118.0,
    0.0125, 0.125, 1.25, 12.5, 125.0,
    0.0132, 0.132, 1.32, 13.2, 132.0,
    0.0140, 0.140, 1.40, 14.0, 140.0,
    0.0150, 0.150, 1.50, 15.0, 150.0,
    0.0160, 0.160, 1.60, 16.0, 160.0,
    0.0170, 0.170, 1.70, 17.0, 170.0,
    0.0180, 0.180, 1.80, 18.0, 180.0,
    0.0190, 0.190, 1.90, 19.0, 190.0,
    0.0200, 0.200, 2.00, 20.0, 200.0,
    0.0212, 0.212, 2.12, 21.2, 212.0,
    0.0224, 0.224, 2.24, 22.4, 224.0,
    0.0236, 0.236, 2.36, 23.6, 236.0,
    0.0250, 0.250, 2.50, 25.0, 250.0,
    0.0265, 0.265, 2.65, 26.5, 265.0,
    0.0280, 0.280, 2.80, 28.0, 280.0,
    0.0300, 0.300, 3.00, 30.0, 300.0,
    0.0315, 0.315, 3.15, 31.5, 315.0,
    0.0335, 0.335, 3.35, 33.5, 335.0,
    0.0355, 0.355, 3.55, 35.5, 355.0,
    0.0375, 0.375, 3.75, 37.5, 375.0,
    0.0400, 0.400, 4.00, 40.0, 400.0,
    0.0425, 0.425, 4.25, 42.5, 425.0,
    0.0450, 0.450, 4.50, 45.0, 450.0,
    0.0475, 0.475, 4.75, 47.5, 475.0,
    0.0500, 0.500, 5.00, 50.0, 500.0,
    0.0530, 0.530, 5.30, 53.0, 530.0,
    0.0560, 0.560, 5.60, 56.0, 560.0,
    0.0600, 0.600, 6.00, 60.0, 600.0,
    0.0630, 0.630, 6.30, 63.0, 630.0,
    0.0670, 0.670, 6.70, 67.0, 670.0,
    0.0710, 0.710, 7.10, 71.0, 710.0,
    0.0750, 0.750, 7.50, 75.0, 750.0,
    0.0800, 0.800, 8.00, 80.0, 800.0,
    0.0850, 0.850, 8.50, 85.0, 850.0,
    0.0900, 0.900, 9.00, 90.0, 900.0,
    0.0950, 0.950, 9.50, 95.0, 950.0,
];

/// An immutable table of standardized reference magnitudes with
/// nearest-match lookup.
///
/// Models a published standard: the entry set is fixed at construction and
/// no insertion or removal is exposed. The table is unit-agnostic; the unit
/// is whatever the caller computed its query value in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StandardValueTable {
    /// Human-readable standard designation (e.g., "NIHS 35-10")
    name: String,
    /// Entries in the table's defined order. Ties in `nearest` resolve to
    /// the earliest entry in this order.
    values: Vec<f64>,
}

impl StandardValueTable {
    /// Build a table from a sequence of strictly positive magnitudes.
    ///
    /// The given order becomes the table's defined order for tie-breaking.
    /// Fails with [`CalcError::EmptyTable`] for an empty sequence and
    /// [`CalcError::InvalidInput`] for non-finite or non-positive entries.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> CalcResult<Self> {
        let name = name.into();
        if values.is_empty() {
            return Err(CalcError::empty_table(name));
        }
        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() || v <= 0.0 {
                return Err(CalcError::invalid_input(
                    format!("values[{}]", i),
                    v.to_string(),
                    "Standard values must be finite and strictly positive",
                ));
            }
        }
        Ok(Self { name, values })
    }

    /// The standard designation this table models.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in the table's defined order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always false for a constructed table; kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Return the entry closest to `target` by absolute difference.
    ///
    /// Scans entries in the table's defined order and updates only on
    /// strict improvement, so the earliest of several equidistant entries
    /// wins. Targets outside the table's span return the nearest edge
    /// entry. Non-finite targets fail with [`CalcError::InvalidInput`].
    pub fn nearest(&self, target: f64) -> CalcResult<f64> {
        if !target.is_finite() {
            return Err(CalcError::invalid_input(
                "target",
                target.to_string(),
                "Lookup target must be finite",
            ));
        }
        let (&first, rest) = self
            .values
            .split_first()
            .ok_or_else(|| CalcError::empty_table(self.name.clone()))?;

        let mut best = first;
        let mut best_distance = (first - target).abs();
        for &candidate in rest {
            let distance = (candidate - target).abs();
            if distance < best_distance {
                best = candidate;
                best_distance = distance;
            }
        }
        Ok(best)
    }
}

/// The full NIHS 35-10 stiffness table, sorted ascending. With an ascending
/// order, an exact tie between two distinct standard values resolves to the
/// smaller one.
static NIHS_35_10: Lazy<StandardValueTable> = Lazy::new(|| {
    let mut values = STIFFNESS_VALUES.to_vec();
    values.sort_by(f64::total_cmp);
    // Literal is non-empty and strictly positive, so construction cannot fail.
    StandardValueTable::new("NIHS 35-10", values)
        .unwrap_or_else(|e| panic!("NIHS 35-10 table literal invalid: {}", e))
});

/// Process-wide NIHS 35-10 stiffness table in 10^-2 N.mm^3/rad.
///
/// Constructed once on first use and shared read-only; safe to hand to
/// concurrent callers since the table never mutates after construction.
pub fn nihs_35_10_stiffness() -> &'static StandardValueTable {
    &NIHS_35_10
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> StandardValueTable {
        StandardValueTable::new("test", vec![1.0, 10.0, 100.0]).unwrap()
    }

    #[test]
    fn test_empty_table_rejected() {
        let err = StandardValueTable::new("empty", vec![]).unwrap_err();
        assert_eq!(err.error_code(), "EMPTY_TABLE");
    }

    #[test]
    fn test_nonpositive_entries_rejected() {
        assert!(StandardValueTable::new("bad", vec![1.0, 0.0]).is_err());
        assert!(StandardValueTable::new("bad", vec![1.0, -2.5]).is_err());
        assert!(StandardValueTable::new("bad", vec![f64::NAN]).is_err());
        assert!(StandardValueTable::new("bad", vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn test_exact_match() {
        let table = nihs_35_10_stiffness();
        for &entry in table.values() {
            assert_eq!(table.nearest(entry).unwrap(), entry);
        }
    }

    #[test]
    fn test_true_minimizer() {
        let table = nihs_35_10_stiffness();
        for target in [0.0333, 0.71, 2.709, 47.3, 227.07] {
            let best = table.nearest(target).unwrap();
            for &entry in table.values() {
                assert!((best - target).abs() <= (entry - target).abs());
            }
        }
    }

    #[test]
    fn test_determinism() {
        let table = small_table();
        let a = table.nearest(5.5).unwrap();
        let b = table.nearest(5.5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_tie_break_first_entry_wins() {
        let table = StandardValueTable::new("tie", vec![1.0, 3.0]).unwrap();
        // 2.0 is equidistant from both entries; first in table order wins.
        assert_eq!(table.nearest(2.0).unwrap(), 1.0);

        // Reversed order flips the winner.
        let reversed = StandardValueTable::new("tie", vec![3.0, 1.0]).unwrap();
        assert_eq!(reversed.nearest(2.0).unwrap(), 3.0);
    }

    #[test]
    fn test_out_of_range_clamps_to_edges() {
        let table = small_table();
        assert_eq!(table.nearest(0.001).unwrap(), 1.0);
        assert_eq!(table.nearest(1000.0).unwrap(), 100.0);
        // Negative and zero targets are legal queries.
        assert_eq!(table.nearest(-5.0).unwrap(), 1.0);
        assert_eq!(table.nearest(0.0).unwrap(), 1.0);
    }

    #[test]
    fn test_non_finite_target_rejected() {
        let table = small_table();
        assert!(table.nearest(f64::NAN).is_err());
        assert!(table.nearest(f64::INFINITY).is_err());
        assert!(table.nearest(f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_nihs_table_shape() {
        let table = nihs_35_10_stiffness();
        assert_eq!(table.len(), 200);
        assert_eq!(table.name(), "NIHS 35-10");

        // Ascending across decade boundaries (9.5 in one decade sits below
        // 1.0 in the next).
        let values = table.values();
        for pair in values.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert_eq!(values[0], 0.01);
        assert_eq!(values[199], 950.0);
    }

    #[test]
    fn test_nihs_end_to_end_lookup() {
        let table = nihs_35_10_stiffness();
        // 227.07 sits between 224 and 236; 224 is 3.07 away, 236 is 8.93.
        assert_eq!(table.nearest(227.07).unwrap(), 224.0);
    }
}
