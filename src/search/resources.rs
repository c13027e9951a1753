//! Resource tracking and allocation guards for path enumeration.
//!
//! Each step can multiply the generation by 8. To avoid hard OOM aborts, the enumerator uses:
//! - counter-based budgets ([`ResourceLimits`])
//! - `try_reserve` wrappers to surface allocation failures as [`SearchError`]

use serde::{Deserialize, Serialize};

use crate::error::SearchError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Search budgets.
///
/// - `max_paths`: largest generation (surviving paths after one step) admitted
/// - `max_extensions`: total candidate children generated over a whole enumeration
pub struct ResourceLimits {
    pub max_paths: usize,
    pub max_extensions: u64,
}

impl ResourceLimits {
    /// No budget at all; only allocation failure can stop the search.
    pub const fn unbounded() -> Self {
        Self {
            max_paths: usize::MAX,
            max_extensions: u64::MAX,
        }
    }
}

impl Default for ResourceLimits {
    fn default() -> Self {
        Self {
            max_paths: 20_000_000,
            max_extensions: 500_000_000,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
/// Running counters tracked during an enumeration.
pub struct ResourceCounts {
    pub extensions: u64,
    pub peak_paths: u64,
    pub steps: u64,
}

#[derive(Debug, Clone)]
pub struct ResourceTracker {
    limits: ResourceLimits,
    counts: ResourceCounts,
}

impl ResourceTracker {
    #[inline]
    pub fn new(limits: ResourceLimits) -> Self {
        Self {
            limits,
            counts: ResourceCounts::default(),
        }
    }

    #[inline]
    pub fn counts(&self) -> ResourceCounts {
        self.counts
    }

    /// Account for `delta` generated children (before filtering).
    pub fn bump_extensions(
        &mut self,
        stage: &'static str,
        delta: usize,
    ) -> Result<(), SearchError> {
        self.counts.extensions = self.counts.extensions.saturating_add(delta as u64);
        Self::check(stage, "extensions", self.counts.extensions, self.limits.max_extensions)
    }

    /// Record a finished step whose surviving generation has `len` paths.
    pub fn record_generation(
        &mut self,
        stage: &'static str,
        len: usize,
    ) -> Result<(), SearchError> {
        self.counts.steps += 1;
        self.counts.peak_paths = self.counts.peak_paths.max(len as u64);
        Self::check(stage, "paths", len as u64, self.limits.max_paths as u64)
    }

    fn check(
        stage: &'static str,
        metric: &'static str,
        observed: u64,
        limit: u64,
    ) -> Result<(), SearchError> {
        if observed > limit {
            return Err(SearchError::LimitExceeded {
                stage,
                metric,
                limit,
                observed,
            });
        }
        Ok(())
    }

    pub fn try_reserve_vec<T>(
        &self,
        stage: &'static str,
        structure: &'static str,
        v: &mut Vec<T>,
        additional: usize,
    ) -> Result<(), SearchError> {
        v.try_reserve(additional)
            .map_err(|_| SearchError::AllocationFailed { stage, structure })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exceeding_a_budget_reports_the_metric() {
        let mut t = ResourceTracker::new(ResourceLimits {
            max_paths: 10,
            max_extensions: 16,
        });
        t.bump_extensions("test", 16).unwrap();
        t.record_generation("test", 10).unwrap();
        match t.bump_extensions("test", 1) {
            Err(SearchError::LimitExceeded {
                metric, observed, ..
            }) => {
                assert_eq!(metric, "extensions");
                assert_eq!(observed, 17);
            }
            other => panic!("unexpected: {other:?}"),
        }
        assert!(t.record_generation("test", 11).is_err());
        assert_eq!(t.counts().peak_paths, 11);
        assert_eq!(t.counts().steps, 2);
    }
}
