//! Connectivity and coverage checks for lattice paths

use crate::spatial::point::Point;
use bitvec::prelude::*;
use num_traits::Float;

/// Occupancy of a path's bounding box on the integer lattice
#[derive(Clone, Debug)]
pub struct LatticeCoverage {
    min: [i64; 2],
    width: usize,
    height: usize,
    occupancy: BitVec,
    visited_cells: usize,
    revisits: usize,
    connected: bool,
}

impl LatticeCoverage {
    /// Analyze a path of lattice points
    pub fn from_path(path: &[[i64; 2]]) -> Self {
        let Some(&first) = path.first() else {
            return Self {
                min: [0, 0],
                width: 0,
                height: 0,
                occupancy: BitVec::new(),
                visited_cells: 0,
                revisits: 0,
                connected: true,
            };
        };

        let (min, max) = path.iter().fold((first, first), |(lo, hi), &[x, y]| {
            ([lo[0].min(x), lo[1].min(y)], [hi[0].max(x), hi[1].max(y)])
        });
        let width = (max[0] - min[0] + 1) as usize;
        let height = (max[1] - min[1] + 1) as usize;

        let mut occupancy = bitvec![0; width * height];
        let mut visited_cells = 0;
        let mut revisits = 0;
        for &[x, y] in path {
            let index = (y - min[1]) as usize * width + (x - min[0]) as usize;
            if occupancy.get(index).is_some_and(|bit| *bit) {
                revisits += 1;
            } else {
                occupancy.set(index, true);
                visited_cells += 1;
            }
        }

        // Every move must be a single unit step along one axis
        let connected = path.windows(2).all(|pair| match pair {
            [[ax, ay], [bx, by]] => (bx - ax).abs() + (by - ay).abs() == 1,
            _ => true,
        });

        Self {
            min,
            width,
            height,
            occupancy,
            visited_cells,
            revisits,
            connected,
        }
    }

    /// Bounding box size as `(width, height)` in cells
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Lower-left corner of the bounding box
    pub const fn min(&self) -> [i64; 2] {
        self.min
    }

    /// Number of cells in the bounding box
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// Number of distinct cells on the path
    pub const fn visited_cells(&self) -> usize {
        self.visited_cells
    }

    /// Number of times the path re-entered a cell
    pub const fn revisits(&self) -> usize {
        self.revisits
    }

    /// Whether consecutive points are unit steps apart
    pub const fn is_connected(&self) -> bool {
        self.connected
    }

    /// Whether the path visits a cell
    pub fn is_visited(&self, [x, y]: [i64; 2]) -> bool {
        let (dx, dy) = (x - self.min[0], y - self.min[1]);
        if dx < 0 || dy < 0 || dx as usize >= self.width || dy as usize >= self.height {
            return false;
        }
        self.occupancy
            .get(dy as usize * self.width + dx as usize)
            .is_some_and(|bit| *bit)
    }

    /// Whether the path covers its square bounding box exactly once
    pub const fn is_space_filling(&self) -> bool {
        self.width > 0
            && self.width == self.height
            && self.connected
            && self.revisits == 0
            && self.visited_cells == self.area()
    }
}

/// Whether consecutive points differ by `step` along exactly one axis
///
/// Differences are compared within `tolerance` to absorb rounding.
pub fn steps_are_unit<T: Float>(points: &[Point<T>], step: T, tolerance: T) -> bool {
    let near = |value: T, target: T| (value - target).abs() <= tolerance;
    points.windows(2).all(|pair| match pair {
        [a, b] => {
            let deltas = [(b.x - a.x).abs(), (b.y - a.y).abs(), (b.z - a.z).abs()];
            let moving = deltas.iter().filter(|&&d| near(d, step)).count();
            let still = deltas.iter().filter(|&&d| near(d, T::zero())).count();
            moving == 1 && still == 2
        }
        _ => true,
    })
}
