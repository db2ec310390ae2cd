//! Image loading, tile persistence, and grid assembly

use crate::io::error::{HilbertError, Result, invalid_argument};
use crate::spatial::tiles::Tile;
use image::{DynamicImage, RgbaImage, imageops};
use std::path::{Path, PathBuf};

/// Open and decode an image file
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, or not a decodable image
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage> {
    let path_buf = path.as_ref().to_path_buf();
    image::open(&path_buf).map_err(|e| HilbertError::ImageLoad {
        path: path_buf,
        source: e,
    })
}

/// Write a tile as `crop_{row}_{col}.{extension}` inside `dir`
///
/// # Errors
///
/// Returns an error if the tile cannot be encoded or written
pub fn save_tile(tile: &Tile, dir: &Path, extension: &str) -> Result<PathBuf> {
    let path = dir.join(tile.file_name(extension));
    match tile.image.save(&path) {
        Ok(()) => Ok(path),
        Err(source) => Err(HilbertError::TileWrite { path, source }),
    }
}

/// Place a sequence of tiles into a `rows × cols` canvas
///
/// The i-th tile lands in the i-th row-major slot, regardless of the grid
/// position it was cut from. Feeding tiles in row-major order rebuilds the
/// cropped square; feeding them in curve order lays the curve's walk out
/// line by line.
///
/// # Errors
///
/// Returns an error if the number of tiles differs from `rows * cols` or the
/// tiles do not share one size
pub fn assemble<'a, I>(tiles: I, rows: u32, cols: u32) -> Result<RgbaImage>
where
    I: IntoIterator<Item = &'a Tile>,
{
    let tiles: Vec<&Tile> = tiles.into_iter().collect();
    let expected = rows as usize * cols as usize;
    if tiles.len() != expected || expected == 0 {
        return Err(invalid_argument(
            "tiles",
            &tiles.len(),
            &format!("expected {expected} tiles for a {rows}x{cols} grid"),
        ));
    }

    let (tile_width, tile_height) = tiles
        .first()
        .map_or((0, 0), |tile| tile.image.dimensions());
    if tiles
        .iter()
        .any(|tile| tile.image.dimensions() != (tile_width, tile_height))
    {
        return Err(invalid_argument(
            "tiles",
            &tiles.len(),
            &"all tiles must share the same dimensions",
        ));
    }

    let mut canvas = RgbaImage::new(cols * tile_width, rows * tile_height);
    for (index, tile) in tiles.iter().enumerate() {
        let slot_row = (index / cols as usize) as u32;
        let slot_col = (index % cols as usize) as u32;
        imageops::replace(
            &mut canvas,
            &tile.image,
            i64::from(slot_col * tile_width),
            i64::from(slot_row * tile_height),
        );
    }

    Ok(canvas)
}

/// Save an image, creating parent directories as needed
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_image(image: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| HilbertError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(output_path).map_err(|e| HilbertError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
