//! Three-component points consumed by drawing front ends

use num_traits::Float;

/// A point in the curve plane with a `z` component for 3D consumers
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point<T = f64> {
    /// Horizontal coordinate
    pub x: T,
    /// Vertical coordinate
    pub y: T,
    /// Depth; zero for every curve point after the start
    pub z: T,
}

impl<T: Float> Point<T> {
    /// Create a point from all three coordinates
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Create a point in the `z = 0` plane
    pub fn planar(x: T, y: T) -> Self {
        Self::new(x, y, T::zero())
    }

    /// The origin
    pub fn origin() -> Self {
        Self::planar(T::zero(), T::zero())
    }

    /// Translate by a lattice offset scaled by `step`, keeping `z`
    pub fn offset(self, lattice: [i64; 2], step: T) -> Self {
        let [dx, dy] = lattice;
        // Casting an i64 to a float type cannot fail, only round
        let dx = T::from(dx).unwrap_or_else(T::nan);
        let dy = T::from(dy).unwrap_or_else(T::nan);
        Self::new(self.x + dx * step, self.y + dy * step, self.z)
    }

    /// Sum of absolute coordinate differences
    pub fn manhattan_distance(self, other: Self) -> T {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }

    /// Coordinates as `[x, y, z]`
    pub const fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T> From<[T; 3]> for Point<T> {
    fn from([x, y, z]: [T; 3]) -> Self {
        Self { x, y, z }
    }
}
