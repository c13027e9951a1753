//! One-step path extension.
//!
//! Output order is fixed: children are grouped by parent (in input order), and each group
//! follows [`crate::core::coord::KNIGHT_STEPS`]. Enumeration results inherit this order.

use serde_json::Value;

use crate::core::coord::Coord;
use crate::core::path::Path;
use crate::error::SearchError;
use crate::rules::movegen::knight_moves;

/// Anything the extender accepts: a start cell, one path, or a whole generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathInput {
    Cell(Coord),
    Path(Path),
    Paths(Vec<Path>),
}

impl PathInput {
    /// Normalize to a generation (a bare cell becomes a one-element path).
    pub fn into_generation(self) -> Vec<Path> {
        match self {
            PathInput::Cell(c) => vec![Path::start(c)],
            PathInput::Path(p) => vec![p],
            PathInput::Paths(ps) => ps,
        }
    }

    /// Classify untyped JSON: `[r, c]`, `[[r, c], ...]` or `[[[r, c], ...], ...]`.
    ///
    /// An empty top-level array is an empty generation. Components must be integers that fit
    /// in `i32`; consecutive cells are compared without overflow.
    pub fn from_json(v: &Value) -> Result<Self, SearchError> {
        let items = v
            .as_array()
            .ok_or_else(|| SearchError::shape(format!("expected an array, got {}", kind(v))))?;

        if let Some(c) = coord_from_json(v) {
            return Ok(PathInput::Cell(c));
        }
        if items.is_empty() {
            return Ok(PathInput::Paths(Vec::new()));
        }
        if let Some(cells) = cells_from_json(items) {
            return Path::from_cells(cells).map(PathInput::Path);
        }
        if items.iter().all(Value::is_array) {
            let mut paths = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                let inner = item.as_array().map(Vec::as_slice).unwrap_or_default();
                let cells = cells_from_json(inner).ok_or_else(|| {
                    SearchError::shape(format!("path {i} is not an array of [row, col] pairs"))
                })?;
                let path = Path::from_cells(cells)
                    .map_err(|e| SearchError::shape(format!("path {i}: {e}")))?;
                paths.push(path);
            }
            return Ok(PathInput::Paths(paths));
        }
        Err(SearchError::shape(
            "expected a cell, a path of cells, or a list of paths",
        ))
    }
}

impl From<Coord> for PathInput {
    fn from(c: Coord) -> Self {
        PathInput::Cell(c)
    }
}

impl From<Path> for PathInput {
    fn from(p: Path) -> Self {
        PathInput::Path(p)
    }
}

impl From<Vec<Path>> for PathInput {
    fn from(ps: Vec<Path>) -> Self {
        PathInput::Paths(ps)
    }
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn coord_from_json(v: &Value) -> Option<Coord> {
    match v.as_array()?.as_slice() {
        [r, c] => {
            let row = i32::try_from(r.as_i64()?).ok()?;
            let col = i32::try_from(c.as_i64()?).ok()?;
            Some(Coord::new(row, col))
        }
        _ => None,
    }
}

fn cells_from_json(items: &[Value]) -> Option<Vec<Coord>> {
    if items.is_empty() {
        return None;
    }
    items.iter().map(coord_from_json).collect()
}

/// The 8 one-move extensions of `path`, in knight-step order.
///
/// Fails with [`SearchError::CoordinateOverflow`] when the last cell sits within a knight
/// move of the `i32` limits.
#[inline]
pub fn children(path: &Path) -> Result<impl Iterator<Item = Path> + '_, SearchError> {
    let moves = knight_moves(path.last())?;
    Ok(moves.into_iter().map(move |c| path.extended(c)))
}

/// Every child of every path, unfiltered (`8 * generation.len()` paths).
pub fn extend_generation(generation: &[Path]) -> Result<Vec<Path>, SearchError> {
    let mut out = Vec::with_capacity(generation.len().saturating_mul(8));
    for p in generation {
        out.extend(children(p)?);
    }
    Ok(out)
}

pub fn extend(input: impl Into<PathInput>) -> Result<Vec<Path>, SearchError> {
    extend_generation(&input.into().into_generation())
}
