//! Geometry and grid handling
//!
//! This module contains spatial-related functionality including:
//! - Points produced by the curve generator
//! - Square cropping and tile extraction
//! - Hilbert-order traversal of tile grids

/// Hilbert-order traversal of square grids
pub mod ordering;
/// Curve points
pub mod point;
/// Image cropping and tile extraction
pub mod tiles;

pub use point::Point;
pub use tiles::{CropRegion, Tile, TileGrid, TileOptions, tile_image, tile_path};
