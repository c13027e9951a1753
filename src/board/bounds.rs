use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::error::SearchError;

/// An inclusive rectangle `row_min..=row_max` × `col_min..=col_max`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Bounds {
    pub row_min: i32,
    pub row_max: i32,
    pub col_min: i32,
    pub col_max: i32,
}

impl Bounds {
    pub fn new(
        row_min: i32,
        row_max: i32,
        col_min: i32,
        col_max: i32,
    ) -> Result<Self, SearchError> {
        let b = Self {
            row_min,
            row_max,
            col_min,
            col_max,
        };
        b.validate()?;
        Ok(b)
    }

    /// Reject inverted ranges and rectangles whose cell count does not fit in `usize`
    /// (deserialized bounds skip [`Bounds::new`]).
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.row_min > self.row_max || self.col_min > self.col_max {
            return Err(SearchError::InvalidScenario {
                reason: format!(
                    "bounds are inverted: rows {}..={}, cols {}..={}",
                    self.row_min, self.row_max, self.col_min, self.col_max
                ),
            });
        }
        if self.cell_count().is_none() {
            return Err(SearchError::InvalidScenario {
                reason: format!(
                    "bounds cover too many cells: rows {}..={}, cols {}..={}",
                    self.row_min, self.row_max, self.col_min, self.col_max
                ),
            });
        }
        Ok(())
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        (self.row_min..=self.row_max).contains(&c.row)
            && (self.col_min..=self.col_max).contains(&c.col)
    }

    /// Number of cells, or `None` if it does not fit in `usize`. Inverted ranges are empty.
    pub fn cell_count(&self) -> Option<usize> {
        let rows = (i64::from(self.row_max) - i64::from(self.row_min) + 1).max(0) as u64;
        let cols = (i64::from(self.col_max) - i64::from(self.col_min) + 1).max(0) as u64;
        usize::try_from(rows.checked_mul(cols)?).ok()
    }

    /// All cells inside the bounds, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        (self.row_min..=self.row_max).flat_map(move |row| {
            (self.col_min..=self.col_max).map(move |col| Coord::new(row, col))
        })
    }
}
