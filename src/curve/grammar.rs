//! L-system alphabet and string rewriting
//!
//! The Hilbert curve is encoded as a two-rule grammar over `{A, B, F, +, -}`.
//! Each pass replaces every non-terminal with its production while terminals
//! are copied through unchanged, so the instruction string for a given order
//! is always rebuilt from the seed.

use crate::io::configuration::{HILBERT_AXIOM, RULE_A, RULE_B};
use crate::io::error::{Result, invalid_argument};

/// One character of an instruction string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// First non-terminal placeholder
    A,
    /// Second non-terminal placeholder
    B,
    /// Move one step along the current heading
    Forward,
    /// Turn right by a quarter turn
    TurnRight,
    /// Turn left by a quarter turn
    TurnLeft,
    /// Character outside the alphabet, ignored by interpreters
    Other(char),
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        match c {
            'A' => Self::A,
            'B' => Self::B,
            'F' => Self::Forward,
            '+' => Self::TurnRight,
            '-' => Self::TurnLeft,
            other => Self::Other(other),
        }
    }
}

impl Symbol {
    /// Whether the symbol survives rewriting unchanged
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::A | Self::B)
    }
}

/// Two-rule rewriting system with a fixed seed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LSystem {
    axiom: String,
    rule_a: String,
    rule_b: String,
}

impl Default for LSystem {
    fn default() -> Self {
        Self::hilbert()
    }
}

impl LSystem {
    /// Create a grammar from a seed and the productions for `A` and `B`
    pub fn new(
        axiom: impl Into<String>,
        rule_a: impl Into<String>,
        rule_b: impl Into<String>,
    ) -> Self {
        Self {
            axiom: axiom.into(),
            rule_a: rule_a.into(),
            rule_b: rule_b.into(),
        }
    }

    /// The Hilbert curve grammar
    pub fn hilbert() -> Self {
        Self::new(HILBERT_AXIOM, RULE_A, RULE_B)
    }

    /// Seed string used at order 1
    pub fn axiom(&self) -> &str {
        &self.axiom
    }

    /// Apply a single substitution pass
    pub fn rewrite(&self, current: &str) -> String {
        let non_terminals = current
            .chars()
            .filter(|&c| !Symbol::from(c).is_terminal())
            .count();
        let growth = self.rule_a.len().max(self.rule_b.len());
        let mut next = String::with_capacity(current.len() + non_terminals * growth);

        for c in current.chars() {
            match Symbol::from(c) {
                Symbol::A => next.push_str(&self.rule_a),
                Symbol::B => next.push_str(&self.rule_b),
                _ => next.push(c),
            }
        }

        next
    }

    /// Expand the seed to the given order
    ///
    /// Order 1 returns the seed itself; every further order adds one
    /// substitution pass.
    ///
    /// # Errors
    ///
    /// Returns an error if `order` is zero
    pub fn expand(&self, order: u32) -> Result<String> {
        if order < 1 {
            return Err(invalid_argument("order", &order, &"must be at least 1"));
        }

        let mut current = self.axiom.clone();
        for _ in 1..order {
            current = self.rewrite(&current);
        }

        log::debug!("expanded grammar to order {order}: {} symbols", current.len());
        Ok(current)
    }
}

/// Number of forward moves in an instruction string
pub fn count_forward(instructions: &str) -> usize {
    instructions
        .chars()
        .filter(|&c| Symbol::from(c) == Symbol::Forward)
        .count()
}
