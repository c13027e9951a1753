use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;

/// An unordered set of cells with O(1) membership (forbidden cells, limited cells).
///
/// Serialized as a sorted array of `[row, col]` pairs; duplicates collapse on load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Coord>", into = "Vec<Coord>")]
pub struct CoordSet(FxHashSet<Coord>);

impl CoordSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, c: Coord) -> bool {
        self.0.contains(&c)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Cells in ascending `(row, col)` order.
    pub fn sorted(&self) -> Vec<Coord> {
        let mut v: Vec<Coord> = self.0.iter().copied().collect();
        v.sort_unstable();
        v
    }
}

impl FromIterator<Coord> for CoordSet {
    fn from_iter<I: IntoIterator<Item = Coord>>(iter: I) -> Self {
        CoordSet(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[Coord; N]> for CoordSet {
    fn from(cells: [Coord; N]) -> Self {
        cells.into_iter().collect()
    }
}

impl From<Vec<Coord>> for CoordSet {
    fn from(cells: Vec<Coord>) -> Self {
        cells.into_iter().collect()
    }
}

impl From<CoordSet> for Vec<Coord> {
    fn from(set: CoordSet) -> Self {
        set.sorted()
    }
}
