//! Structural checks on generated curves

/// Lattice coverage and step validation
pub mod lattice;

pub use lattice::{LatticeCoverage, steps_are_unit};
