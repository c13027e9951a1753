use crate::core::cellset::CoordSet;
use crate::core::coord::Coord;
use crate::error::SearchError;

/// Number of path positions (with repetition) that land in `targets`.
#[inline]
pub fn count_hits(path: &[Coord], targets: &CoordSet) -> usize {
    path.iter().filter(|&&c| targets.contains(c)).count()
}

/// A cap on how often a path may visit a set of limited cells.
#[derive(Debug, Clone, Copy)]
pub struct VisitCap<'a> {
    targets: &'a CoordSet,
    max: u32,
}

impl<'a> VisitCap<'a> {
    pub fn new(targets: &'a CoordSet, max: u32) -> Result<Self, SearchError> {
        if max == 0 {
            return Err(SearchError::cap_config("cap must be a positive integer"));
        }
        Ok(Self { targets, max })
    }

    /// Build a cap from optional halves: both or neither must be given.
    pub fn from_parts(
        targets: Option<&'a CoordSet>,
        max: Option<u32>,
    ) -> Result<Option<Self>, SearchError> {
        match (targets, max) {
            (None, None) => Ok(None),
            (Some(t), Some(m)) => Self::new(t, m).map(Some),
            (Some(_), None) => Err(SearchError::cap_config("limited cells given without a cap")),
            (None, Some(_)) => Err(SearchError::cap_config("cap given without limited cells")),
        }
    }

    #[inline]
    pub fn allows(&self, path: &[Coord]) -> bool {
        count_hits(path, self.targets) <= self.max as usize
    }
}
