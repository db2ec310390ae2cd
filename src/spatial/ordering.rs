//! Hilbert-order traversal of square tile grids
//!
//! A `2^k × 2^k` grid is walked by the order-`k` curve: curve `x` selects the
//! column and curve `y` counts rows upward from the bottom edge, matching the
//! curve as drawn with the y axis pointing up.

use crate::curve::generate_lattice;
use crate::io::error::{Result, invalid_argument};
use ndarray::Array2;

/// Grid cells as `(row, col)` in the order the Hilbert curve visits them
///
/// # Errors
///
/// Returns an error if the grid is not square or its side is not a power of two
pub fn hilbert_cells(rows: usize, cols: usize) -> Result<Vec<(usize, usize)>> {
    if rows == 0 {
        return Err(invalid_argument("rows", &rows, &"must be at least 1"));
    }
    if rows != cols {
        return Err(invalid_argument(
            "cols",
            &cols,
            &format!("must equal rows ({rows}) for curve traversal"),
        ));
    }
    if !rows.is_power_of_two() {
        return Err(invalid_argument(
            "rows",
            &rows,
            &"must be a power of two for curve traversal",
        ));
    }
    if rows == 1 {
        return Ok(vec![(0, 0)]);
    }

    let order = rows.trailing_zeros();
    generate_lattice(order)?
        .into_iter()
        .map(|[x, y]| {
            let col =
                usize::try_from(x).map_err(|error| invalid_argument("cols", &cols, &error))?;
            let height =
                usize::try_from(y).map_err(|error| invalid_argument("rows", &rows, &error))?;
            let row = rows
                .checked_sub(height + 1)
                .ok_or_else(|| invalid_argument("rows", &rows, &"curve left the grid"))?;
            Ok((row, col))
        })
        .collect()
}

/// Step index at which the curve visits each cell
///
/// # Errors
///
/// Returns an error under the same conditions as [`hilbert_cells`]
pub fn traversal_ranks(rows: usize, cols: usize) -> Result<Array2<usize>> {
    let cells = hilbert_cells(rows, cols)?;
    let mut ranks = Array2::zeros((rows, cols));
    for (rank, cell) in cells.into_iter().enumerate() {
        if let Some(slot) = ranks.get_mut(cell) {
            *slot = rank;
        }
    }
    Ok(ranks)
}
