//! Hilbert curve point generation

use crate::curve::grammar::LSystem;
use crate::curve::turtle::Turtle;
use crate::io::error::{Result, invalid_argument};
use crate::spatial::point::Point;
use num_traits::Float;
use std::fmt::Debug;

/// Generate the order-`order` Hilbert curve as an ordered list of points
///
/// The first point is `start`, kept exactly as given; each following point
/// lies one `step_size` away from its predecessor along a single axis in the
/// `z = 0` plane.
///
/// # Errors
///
/// Returns an error if `order` is zero or `step_size` is not a positive,
/// finite number
pub fn generate<T: Float + Debug>(
    order: u32,
    start: Point<T>,
    step_size: T,
) -> Result<Vec<Point<T>>> {
    if !(step_size > T::zero() && step_size.is_finite()) {
        return Err(invalid_argument(
            "step_size",
            &format!("{step_size:?}"),
            &"must be positive and finite",
        ));
    }

    let lattice = generate_lattice(order)?;
    let plane = Point::planar(start.x, start.y);
    Ok(lattice
        .iter()
        .enumerate()
        .map(|(index, &cell)| {
            if index == 0 {
                start
            } else {
                plane.offset(cell, step_size)
            }
        })
        .collect())
}

/// Generate the curve on the integer lattice, starting at the origin
///
/// # Errors
///
/// Returns an error if `order` is zero
pub fn generate_lattice(order: u32) -> Result<Vec<[i64; 2]>> {
    let instructions = LSystem::hilbert().expand(order)?;
    Ok(Turtle::trace(&instructions))
}

/// Exact number of points produced for `order`, `None` on overflow
pub const fn point_count(order: u32) -> Option<usize> {
    4usize.checked_pow(order)
}
