//! Hilbert curve construction
//!
//! Expands the L-system grammar to a recursion order and walks the result
//! with a turtle to produce the curve's vertices.

/// Hilbert curve point generation
pub mod generator;
/// Instruction alphabet and rewriting rules
pub mod grammar;
/// Heading arithmetic and turtle interpretation
pub mod turtle;

pub use generator::{generate, generate_lattice, point_count};
