//! Breadth-first knight path enumeration with per-step pruning.
//!
//! Each step extends every surviving path by all 8 knight moves and immediately drops the
//! children that fail the filter or the visit cap, so only one pruned generation is alive
//! at a time.

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::core::cellset::CoordSet;
use crate::core::coord::Coord;
use crate::core::path::Path;
use crate::error::SearchError;
use crate::filter::PathFilter;
use crate::search::extend::children;
use crate::search::resources::{ResourceCounts, ResourceLimits, ResourceTracker};
use crate::search::visits::VisitCap;

#[derive(Debug, Clone, Copy)]
pub struct EnumerateOptions {
    pub limits: ResourceLimits,
    /// Extend and filter each generation on the rayon pool. Output order is unchanged.
    pub parallel: bool,
}

impl Default for EnumerateOptions {
    fn default() -> Self {
        Self {
            limits: ResourceLimits::unbounded(),
            parallel: false,
        }
    }
}

/// The final generation plus the counters gathered while producing it.
#[derive(Debug, Clone)]
pub struct Enumeration {
    pub paths: Vec<Path>,
    pub counts: ResourceCounts,
}

/// All paths of exactly `steps` knight moves from `start` that pass `filter` at every step
/// and (when `targets`/`cap` are given) visit `targets` at most `cap` times.
///
/// `targets` and `cap` must be given together, and `cap` must be positive. A surviving path
/// that reaches within a knight move of the `i32` limits stops the search with
/// [`SearchError::CoordinateOverflow`].
pub fn enumerate<F>(
    start: Coord,
    steps: usize,
    targets: Option<&CoordSet>,
    cap: Option<u32>,
    filter: &F,
) -> Result<Vec<Path>, SearchError>
where
    F: PathFilter + Sync,
{
    let cap = VisitCap::from_parts(targets, cap)?;
    Ok(enumerate_with(start, steps, cap, filter, &EnumerateOptions::default())?.paths)
}

pub fn enumerate_with<F>(
    start: Coord,
    steps: usize,
    cap: Option<VisitCap<'_>>,
    filter: &F,
    opts: &EnumerateOptions,
) -> Result<Enumeration, SearchError>
where
    F: PathFilter + Sync,
{
    let mut tracker = ResourceTracker::new(opts.limits);
    let root = Path::start(start);

    if !filter.accepts(root.cells()) {
        debug!(%start, "start cell rejected by filter");
        return Ok(Enumeration {
            paths: Vec::new(),
            counts: tracker.counts(),
        });
    }

    let keep = |p: &Path| filter.accepts(p.cells()) && cap.map_or(true, |c| c.allows(p.cells()));

    let mut generation = vec![root];
    for step in 1..=steps {
        if generation.is_empty() {
            break;
        }
        tracker.bump_extensions("enumerate", generation.len().saturating_mul(8))?;

        let next: Vec<Path> = if opts.parallel {
            let groups = generation
                .par_iter()
                .map(|p| -> Result<Vec<Path>, SearchError> {
                    Ok(children(p)?.filter(|c| keep(c)).collect())
                })
                .collect::<Result<Vec<_>, _>>()?;
            groups.into_iter().flatten().collect()
        } else {
            let mut next = Vec::new();
            tracker.try_reserve_vec("enumerate", "generation", &mut next, generation.len())?;
            for p in &generation {
                next.extend(children(p)?.filter(|c| keep(c)));
            }
            next
        };

        tracker.record_generation("enumerate", next.len())?;
        trace!(%start, step, paths = next.len(), "generation");
        generation = next;
    }

    debug!(
        %start,
        steps,
        paths = generation.len(),
        extensions = tracker.counts().extensions,
        "enumeration finished"
    );
    Ok(Enumeration {
        paths: generation,
        counts: tracker.counts(),
    })
}
