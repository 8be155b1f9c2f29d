//! # Industry Standard Tables
//!
//! Published watch-industry standards as immutable lookup tables.
//!
//! A computed physical quantity (a stiffness, a diameter) is rarely the
//! number that gets ordered or machined: the standards define the discrete
//! permitted values, and design work rounds onto them. This module holds
//! those tables and the nearest-match lookup they share.
//!
//! ## Standards
//!
//! - **NIHS 35-10**: permitted hairspring stiffness values
//!   (see [`nihs_35_10`])
//! - **NIHS 11-02**: barrel arbor diameter rounding rule (applied in
//!   [`crate::calculations::arbor`]; it is a rounding step, not a table)

pub mod nihs_35_10;

pub use nihs_35_10::{nihs_35_10_stiffness, StandardValueTable, STIFFNESS_VALUES};
