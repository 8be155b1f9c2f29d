//! # cadence_core - Watch Component Design Calculation Engine
//!
//! `cadence_core` is the computational heart of Cadence, providing the
//! component-sizing calculations used when designing a mechanical watch
//! movement: hairspring stiffness, mainspring geometry, barrel arbor
//! sizing, and gear-ratio searches. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **Standards-Aware**: Computed quantities are matched onto published
//!   industry tables (NIHS 35-10, NIHS 11-02), and both the raw and the
//!   matched value are always reported
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
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
//!
//! let result = calculate(&input).unwrap();
//! println!(
//!     "K = {:.3}, standard = {}",
//!     result.stiffness_table_units, result.nihs_standard_stiffness
//! );
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - All component calculation types
//! - [`standards`] - Industry standard tables and nearest-match lookup
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod errors;
pub mod standards;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use errors::{CalcError, CalcResult};
pub use standards::{nihs_35_10_stiffness, StandardValueTable};
