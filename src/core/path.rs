use serde::{Deserialize, Serialize};

use crate::core::coord::Coord;
use crate::error::SearchError;

/// A knight path: a non-empty sequence of cells, each one knight step from the previous.
///
/// Paths never change after construction; [`Path::extended`] builds a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coord>", into = "Vec<Coord>")]
pub struct Path(Vec<Coord>);

impl Path {
    /// The one-element path a search starts from.
    #[inline]
    pub fn start(cell: Coord) -> Self {
        Path(vec![cell])
    }

    /// Build a path from raw cells, checking it is non-empty and knight-connected.
    pub fn from_cells(cells: Vec<Coord>) -> Result<Self, SearchError> {
        if cells.is_empty() {
            return Err(SearchError::shape("a path needs at least one cell"));
        }
        if let Some(w) = cells.windows(2).find(|w| !w[0].is_knight_step_to(w[1])) {
            return Err(SearchError::shape(format!(
                "{} -> {} is not a knight move",
                w[0], w[1]
            )));
        }
        Ok(Path(cells))
    }

    #[inline]
    pub fn cells(&self) -> &[Coord] {
        &self.0
    }

    #[inline]
    pub fn first(&self) -> Coord {
        self.0[0]
    }

    #[inline]
    pub fn last(&self) -> Coord {
        self.0[self.0.len() - 1]
    }

    /// Number of cells (moves + 1).
    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed path.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// A new path equal to `self` with `cell` appended.
    ///
    /// The caller guarantees `cell` is a knight step from [`Path::last`].
    pub fn extended(&self, cell: Coord) -> Path {
        let mut cells = Vec::with_capacity(self.0.len() + 1);
        cells.extend_from_slice(&self.0);
        cells.push(cell);
        Path(cells)
    }
}

impl TryFrom<Vec<Coord>> for Path {
    type Error = SearchError;

    fn try_from(cells: Vec<Coord>) -> Result<Self, Self::Error> {
        Path::from_cells(cells)
    }
}

impl From<Path> for Vec<Coord> {
    fn from(p: Path) -> Self {
        p.0
    }
}

impl AsRef<[Coord]> for Path {
    fn as_ref(&self) -> &[Coord] {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_disconnected_cells() {
        assert!(matches!(
            Path::from_cells(vec![]),
            Err(SearchError::InvalidInputShape { .. })
        ));
        assert!(matches!(
            Path::from_cells(vec![Coord::new(1, 1), Coord::new(1, 2)]),
            Err(SearchError::InvalidInputShape { .. })
        ));
        let p = Path::from_cells(vec![Coord::new(1, 1), Coord::new(3, 2)]).unwrap();
        assert_eq!(p.first(), Coord::new(1, 1));
        assert_eq!(p.last(), Coord::new(3, 2));
    }

    #[test]
    fn far_apart_cells_at_the_i32_edges_are_not_knight_connected() {
        let cells = vec![Coord::new(i32::MAX, 0), Coord::new(i32::MIN, 0)];
        assert!(matches!(
            Path::from_cells(cells),
            Err(SearchError::InvalidInputShape { .. })
        ));
        let edge = vec![Coord::new(i32::MAX, 0), Coord::new(i32::MAX - 2, 1)];
        assert_eq!(Path::from_cells(edge).unwrap().len(), 2);
    }

    #[test]
    fn serializes_as_nested_arrays() {
        let p = Path::from_cells(vec![Coord::new(1, 1), Coord::new(2, 3)]).unwrap();
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, "[[1,1],[2,3]]");
        let back: Path = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
        assert!(serde_json::from_str::<Path>("[[1,1],[1,2]]").is_err());
    }
}
