use std::fmt;

use serde::{Deserialize, Serialize};

/// A grid cell as `(row, col)`.
///
/// Serialized as a two-element array `[row, col]` so scenario files stay compact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "(i32, i32)", into = "(i32, i32)")]
pub struct Coord {
    pub row: i32,
    pub col: i32,
}

impl Coord {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// `self + step`, or `None` if either component leaves the `i32` range.
    #[inline]
    pub fn checked_add(self, step: Coord) -> Option<Coord> {
        Some(Coord::new(
            self.row.checked_add(step.row)?,
            self.col.checked_add(step.col)?,
        ))
    }

    /// `other - self` per component, widened so it never overflows.
    #[inline]
    pub fn delta_to(self, other: Coord) -> (i64, i64) {
        (
            i64::from(other.row) - i64::from(self.row),
            i64::from(other.col) - i64::from(self.col),
        )
    }

    /// True if `other` is exactly one knight move away.
    #[inline]
    pub fn is_knight_step_to(self, other: Coord) -> bool {
        let (dr, dc) = self.delta_to(other);
        matches!((dr.abs(), dc.abs()), (2, 1) | (1, 2))
    }
}

impl From<(i32, i32)> for Coord {
    #[inline]
    fn from((row, col): (i32, i32)) -> Self {
        Coord::new(row, col)
    }
}

impl From<Coord> for (i32, i32) {
    #[inline]
    fn from(c: Coord) -> Self {
        (c.row, c.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// The 8 knight offsets, in the fixed order every generator in this crate uses.
pub const KNIGHT_STEPS: [Coord; 8] = [
    Coord { row: 2, col: 1 },
    Coord { row: 2, col: -1 },
    Coord { row: -2, col: 1 },
    Coord { row: -2, col: -1 },
    Coord { row: 1, col: 2 },
    Coord { row: 1, col: -2 },
    Coord { row: -1, col: 2 },
    Coord { row: -1, col: -2 },
];
