//! Turtle interpretation of instruction strings on the integer lattice

use crate::curve::grammar::{Symbol, count_forward};

/// Cardinal heading of the turtle
///
/// Discriminants follow counter-clockwise order starting East, so a right
/// turn increments and a left turn decrements modulo 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Heading {
    /// Positive x
    #[default]
    East = 0,
    /// Positive y
    North = 1,
    /// Negative x
    West = 2,
    /// Negative y
    South = 3,
}

impl Heading {
    /// Heading index in `0..4`
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Heading for any integer, wrapped into `0..4`
    pub const fn from_index(index: i64) -> Self {
        match index.rem_euclid(4) {
            0 => Self::East,
            1 => Self::North,
            2 => Self::West,
            _ => Self::South,
        }
    }

    /// Heading after a right turn
    pub const fn turn_right(self) -> Self {
        Self::from_index(self.index() as i64 + 1)
    }

    /// Heading after a left turn
    pub const fn turn_left(self) -> Self {
        Self::from_index(self.index() as i64 - 1)
    }

    /// Lattice offset of a single forward move
    pub const fn unit(self) -> [i64; 2] {
        match self {
            Self::East => [1, 0],
            Self::North => [0, 1],
            Self::West => [-1, 0],
            Self::South => [0, -1],
        }
    }
}

/// Position and heading of a turtle walking the integer lattice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turtle {
    position: [i64; 2],
    heading: Heading,
}

impl Default for Turtle {
    fn default() -> Self {
        Self::new()
    }
}

impl Turtle {
    /// Turtle at the origin facing East
    pub const fn new() -> Self {
        Self {
            position: [0, 0],
            heading: Heading::East,
        }
    }

    /// Current lattice position
    pub const fn position(&self) -> [i64; 2] {
        self.position
    }

    /// Current heading
    pub const fn heading(&self) -> Heading {
        self.heading
    }

    /// Execute one symbol, returning the new position if the turtle moved
    pub const fn apply(&mut self, symbol: Symbol) -> Option<[i64; 2]> {
        match symbol {
            Symbol::Forward => {
                let [dx, dy] = self.heading.unit();
                self.position = [self.position[0] + dx, self.position[1] + dy];
                Some(self.position)
            }
            Symbol::TurnRight => {
                self.heading = self.heading.turn_right();
                None
            }
            Symbol::TurnLeft => {
                self.heading = self.heading.turn_left();
                None
            }
            Symbol::A | Symbol::B | Symbol::Other(_) => None,
        }
    }

    /// Walk an instruction string from the origin
    ///
    /// The returned path starts with the origin and gains one lattice point
    /// per forward move, so its length is known before the walk begins.
    pub fn trace(instructions: &str) -> Vec<[i64; 2]> {
        let mut path = Vec::with_capacity(count_forward(instructions) + 1);
        let mut turtle = Self::new();
        path.push(turtle.position);
        path.extend(
            instructions
                .chars()
                .filter_map(|c| turtle.apply(Symbol::from(c))),
        );
        path
    }
}
