//! Square cropping and grid decomposition of raster images
//!
//! Images are converted to RGBA, center-cropped to a square, and cut into an
//! R×C grid of equally sized tiles. Tile sizes use floor division, so pixels
//! left over when the side does not divide evenly are dropped.

use crate::io::configuration::{CROP_PREFIX, DEFAULT_CROP_EXTENSION};
use crate::io::error::{HilbertError, Result, invalid_argument};
use crate::io::image::{load_image, save_tile};
use crate::spatial::ordering::hilbert_cells;
use image::{DynamicImage, RgbaImage, imageops};
use ndarray::Array2;
use std::path::{Path, PathBuf};

/// Centered square region of an image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    /// Pixels skipped on the left edge
    pub left: u32,
    /// Pixels skipped on the top edge
    pub top: u32,
    /// Side length of the square
    pub side: u32,
}

impl CropRegion {
    /// Largest centered square fitting a `width × height` image
    pub const fn centered(width: u32, height: u32) -> Self {
        let side = if width < height { width } else { height };
        Self {
            left: (width - side) / 2,
            top: (height - side) / 2,
            side,
        }
    }
}

/// A sub-image and its position in the grid
#[derive(Debug, Clone)]
pub struct Tile {
    /// Grid row, counted from the top
    pub row: usize,
    /// Grid column, counted from the left
    pub col: usize,
    /// Top-left pixel of the tile inside the cropped square
    pub origin: (u32, u32),
    /// Tile pixels
    pub image: RgbaImage,
}

impl Tile {
    /// File name used when the tile is persisted
    pub fn file_name(&self, extension: &str) -> String {
        format!("{CROP_PREFIX}_{}_{}.{extension}", self.row, self.col)
    }
}

/// Controls the optional persistence of tiles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileOptions {
    /// Write each tile to `output_dir` after cutting
    pub save_crops: bool,
    /// Directory receiving tile files
    pub output_dir: PathBuf,
    /// Image format extension of tile files
    pub extension: String,
}

impl Default for TileOptions {
    fn default() -> Self {
        Self {
            save_crops: false,
            output_dir: PathBuf::from("."),
            extension: DEFAULT_CROP_EXTENSION.to_string(),
        }
    }
}

/// Tiles of one image in row-major order, with the grid geometry
#[derive(Debug)]
pub struct TileGrid {
    rows: usize,
    cols: usize,
    tile_width: u32,
    tile_height: u32,
    crop: CropRegion,
    tiles: Vec<Tile>,
    write_failures: Vec<HilbertError>,
}

impl TileGrid {
    /// Number of grid rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of grid columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Pixel width shared by every tile
    pub const fn tile_width(&self) -> u32 {
        self.tile_width
    }

    /// Pixel height shared by every tile
    pub const fn tile_height(&self) -> u32 {
        self.tile_height
    }

    /// Square region of the source that was partitioned
    pub const fn crop(&self) -> CropRegion {
        self.crop
    }

    /// Tiles in row-major order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Take ownership of the tiles
    pub fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }

    /// Tile at a grid position
    pub fn get(&self, row: usize, col: usize) -> Option<&Tile> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get(row * self.cols + col)
    }

    /// Total number of tiles
    pub const fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the grid holds no tiles
    pub const fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Errors raised while persisting tiles
    pub fn write_failures(&self) -> &[HilbertError] {
        &self.write_failures
    }

    /// Row-major index of each tile laid out as the grid
    pub fn index_grid(&self) -> Array2<usize> {
        let cols = self.cols;
        Array2::from_shape_fn((self.rows, self.cols), |(row, col)| row * cols + col)
    }

    /// Tiles in the order the Hilbert curve visits the grid
    ///
    /// # Errors
    ///
    /// Returns an error if the grid is not square with a power-of-two side
    pub fn in_hilbert_order(&self) -> Result<Vec<&Tile>> {
        Ok(hilbert_cells(self.rows, self.cols)?
            .into_iter()
            .filter_map(|(row, col)| self.get(row, col))
            .collect())
    }

    /// Write every tile to `dir`, collecting failures instead of stopping
    ///
    /// `on_saved` receives the number of tiles processed so far. Returns the
    /// number of tiles written successfully.
    pub fn save_crops<F: FnMut(usize)>(
        &mut self,
        dir: &Path,
        extension: &str,
        mut on_saved: F,
    ) -> usize {
        let mut saved = 0;
        for (index, tile) in self.tiles.iter().enumerate() {
            match save_tile(tile, dir, extension) {
                Ok(_) => saved += 1,
                Err(error) => {
                    log::warn!("{error}");
                    self.write_failures.push(error);
                }
            }
            on_saved(index + 1);
        }
        saved
    }
}

/// Cut an image into a `rows × cols` grid of equal tiles
///
/// # Errors
///
/// Returns an error if `rows` or `cols` is zero. A grid finer than the cropped
/// square yields zero-sized tiles. Failures to save crops are collected in the
/// returned grid rather than reported here.
pub fn tile_image(
    image: &DynamicImage,
    rows: u32,
    cols: u32,
    options: &TileOptions,
) -> Result<TileGrid> {
    if rows == 0 {
        return Err(invalid_argument("rows", &rows, &"must be at least 1"));
    }
    if cols == 0 {
        return Err(invalid_argument("cols", &cols, &"must be at least 1"));
    }

    let rgba = image.to_rgba8();
    let crop = CropRegion::centered(rgba.width(), rgba.height());

    let tile_width = crop.side / cols;
    let tile_height = crop.side / rows;

    let mut tiles = Vec::with_capacity(rows as usize * cols as usize);
    for row in 0..rows {
        for col in 0..cols {
            let origin = (col * tile_width, row * tile_height);
            let pixels = imageops::crop_imm(
                &rgba,
                crop.left + origin.0,
                crop.top + origin.1,
                tile_width,
                tile_height,
            )
            .to_image();
            tiles.push(Tile {
                row: row as usize,
                col: col as usize,
                origin,
                image: pixels,
            });
        }
    }

    let mut grid = TileGrid {
        rows: rows as usize,
        cols: cols as usize,
        tile_width,
        tile_height,
        crop,
        tiles,
        write_failures: Vec::new(),
    };

    if options.save_crops {
        grid.save_crops(&options.output_dir, &options.extension, |_| {});
    }

    Ok(grid)
}

/// Load an image from disk and cut it into tiles
///
/// # Errors
///
/// Returns an error if the image cannot be decoded or the grid is invalid
pub fn tile_path<P: AsRef<Path>>(
    path: P,
    rows: u32,
    cols: u32,
    options: &TileOptions,
) -> Result<TileGrid> {
    if rows == 0 {
        return Err(invalid_argument("rows", &rows, &"must be at least 1"));
    }
    if cols == 0 {
        return Err(invalid_argument("cols", &cols, &"must be at least 1"));
    }
    let image = load_image(path)?;
    tile_image(&image, rows, cols, options)
}
