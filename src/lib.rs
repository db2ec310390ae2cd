//! Hilbert curve construction by L-system turtle interpretation, and image tiling
//!
//! The curve generator rewrites the grammar `A -> +BF-AFA-FB+`,
//! `B -> -AF+BFB+FA-` to a recursion order and walks the resulting string as
//! turtle instructions, yielding the curve's vertices. The tiler center-crops
//! an image to a square and cuts it into a grid whose tiles can be revisited
//! in row-major or Hilbert order.

#![forbid(unsafe_code)]

/// Connectivity and coverage checks on generated paths
pub mod analysis;
/// L-system expansion and turtle interpretation
pub mod curve;
/// Input/output operations and error handling
pub mod io;
/// Points, tile extraction, and grid traversal
pub mod spatial;

pub use curve::generate;
pub use io::error::{HilbertError, Result};
pub use spatial::{Point, tile_image, tile_path};
