//! Path filters: the per-step predicate that decides which extended paths survive.
//!
//! A filter sees the whole path, so checks are stated over every cell. All filters are
//! total: an empty path is accepted by every primitive here.
//!
//! Any `Fn(&[Coord]) -> bool` is a filter, so ad-hoc closures work alongside the named
//! primitives below.

use crate::board::bounds::Bounds;
use crate::core::cellset::CoordSet;
use crate::core::coord::Coord;

pub trait PathFilter {
    fn accepts(&self, path: &[Coord]) -> bool;

    /// Both filters must accept.
    fn and<G: PathFilter>(self, other: G) -> Both<Self, G>
    where
        Self: Sized,
    {
        Both(self, other)
    }
}

impl<F> PathFilter for F
where
    F: Fn(&[Coord]) -> bool,
{
    #[inline]
    fn accepts(&self, path: &[Coord]) -> bool {
        self(path)
    }
}

/// True iff every cell lies inside `bounds`.
#[inline]
pub fn in_bounds(path: &[Coord], bounds: &Bounds) -> bool {
    path.iter().all(|&c| bounds.contains(c))
}

/// True iff some cell of the path is in `forbidden`.
#[inline]
pub fn any_forbidden_hit(path: &[Coord], forbidden: &CoordSet) -> bool {
    path.iter().any(|&c| forbidden.contains(c))
}

/// True iff the path returns to the cell it occupied two moves earlier.
pub fn has_immediate_return(path: &[Coord]) -> bool {
    path.windows(3).any(|w| w[0] == w[2])
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl PathFilter for AcceptAll {
    #[inline]
    fn accepts(&self, _path: &[Coord]) -> bool {
        true
    }
}

#[derive(Debug, Clone, Copy)]
pub struct InBounds(pub Bounds);

impl PathFilter for InBounds {
    #[inline]
    fn accepts(&self, path: &[Coord]) -> bool {
        in_bounds(path, &self.0)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AvoidsForbidden<'a>(pub &'a CoordSet);

impl PathFilter for AvoidsForbidden<'_> {
    #[inline]
    fn accepts(&self, path: &[Coord]) -> bool {
        !any_forbidden_hit(path, self.0)
    }
}

/// Rejects back-and-forth moves (`a -> b -> a`).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoImmediateReturn;

impl PathFilter for NoImmediateReturn {
    #[inline]
    fn accepts(&self, path: &[Coord]) -> bool {
        !has_immediate_return(path)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Both<A, B>(pub A, pub B);

impl<A: PathFilter, B: PathFilter> PathFilter for Both<A, B> {
    #[inline]
    fn accepts(&self, path: &[Coord]) -> bool {
        self.0.accepts(path) && self.1.accepts(path)
    }
}

/// The standard board predicate: stay inside `bounds` and off every `forbidden` cell.
pub fn board_filter(bounds: Bounds, forbidden: &CoordSet) -> Both<InBounds, AvoidsForbidden<'_>> {
    InBounds(bounds).and(AvoidsForbidden(forbidden))
}
