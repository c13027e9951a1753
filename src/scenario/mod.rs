//! Scenario layer: glue between the pure enumerator and a concrete board.
//!
//! A [`Scenario`] bundles:
//! - the board rectangle ([`Bounds`]) and the forbidden (missing) cells
//! - the limited cells and their visit cap (both or neither)
//! - the step count and an optional back-and-forth ban
//! - explicit budgets via [`ResourceLimits`]
//!
//! The effective filter of a scenario is always "inside the bounds and off every forbidden
//! cell", optionally tightened by [`NoImmediateReturn`].

use crate::board::bounds::Bounds;
use crate::core::cellset::CoordSet;
use crate::core::coord::Coord;
use crate::error::SearchError;
use crate::filter::{board_filter, AvoidsForbidden, Both, InBounds, NoImmediateReturn, PathFilter};
use crate::search::enumerate::{enumerate_with, EnumerateOptions, Enumeration};
use crate::search::resources::ResourceLimits;
use crate::search::visits::VisitCap;

#[derive(Debug, Clone)]
/// A fully specified enumeration configuration.
///
/// `Scenario::validate()` checks invariants such as bounds orientation and cap pairing.
pub struct Scenario {
    pub name: String,
    pub bounds: Bounds,
    pub forbidden: CoordSet,
    pub limited: Option<CoordSet>,
    pub cap: Option<u32>,
    pub steps: usize,
    pub no_immediate_return: bool,
    pub limits: ResourceLimits,
}

/// The filter a scenario applies at every step.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioFilter<'a> {
    board: Both<InBounds, AvoidsForbidden<'a>>,
    no_immediate_return: bool,
}

impl PathFilter for ScenarioFilter<'_> {
    #[inline]
    fn accepts(&self, path: &[Coord]) -> bool {
        self.board.accepts(path) && (!self.no_immediate_return || NoImmediateReturn.accepts(path))
    }
}

impl Scenario {
    /// Validate scenario invariants. Intended to be called by CLIs/tests before running.
    pub fn validate(&self) -> Result<(), SearchError> {
        self.bounds.validate()?;
        self.visit_cap()?;
        Ok(())
    }

    pub fn visit_cap(&self) -> Result<Option<VisitCap<'_>>, SearchError> {
        VisitCap::from_parts(self.limited.as_ref(), self.cap)
    }

    pub fn filter(&self) -> ScenarioFilter<'_> {
        ScenarioFilter {
            board: board_filter(self.bounds, &self.forbidden),
            no_immediate_return: self.no_immediate_return,
        }
    }

    /// Enumerate all paths of `self.steps` moves from `start` under this scenario.
    pub fn paths_from(&self, start: Coord, parallel: bool) -> Result<Enumeration, SearchError> {
        let opts = EnumerateOptions {
            limits: self.limits,
            parallel,
        };
        enumerate_with(start, self.steps, self.visit_cap()?, &self.filter(), &opts)
    }

    pub fn with_steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_cap(mut self, cap: Option<u32>) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_limits(mut self, limits: ResourceLimits) -> Self {
        self.limits = limits;
        self
    }
}
