//! Whole-board survey: run a scenario from every cell inside its bounds and sum the counts.

use serde::Serialize;
use tracing::{debug, info};

use crate::core::coord::Coord;
use crate::error::SearchError;
use crate::scenario::Scenario;
use crate::search::resources::ResourceTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StartCount {
    pub start: Coord,
    pub paths: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyReport {
    pub scenario: String,
    pub steps: usize,
    pub cap: Option<u32>,
    /// One entry per cell in the bounds, row by row (zero counts included).
    pub per_start: Vec<StartCount>,
    pub total: usize,
    pub extensions: u64,
}

impl SurveyReport {
    pub fn count_for(&self, start: Coord) -> Option<usize> {
        self.per_start.iter().find(|s| s.start == start).map(|s| s.paths)
    }
}

pub fn survey(scn: &Scenario, parallel: bool) -> Result<SurveyReport, SearchError> {
    scn.validate()?;

    // One enumeration per start cell: a rectangle wider than the path budget is refused
    // before any work is done.
    let cells = scn.bounds.cell_count().unwrap_or(usize::MAX);
    if cells > scn.limits.max_paths {
        return Err(SearchError::LimitExceeded {
            stage: "survey",
            metric: "start cells",
            limit: scn.limits.max_paths as u64,
            observed: cells as u64,
        });
    }
    let tracker = ResourceTracker::new(scn.limits);
    let mut per_start = Vec::new();
    tracker.try_reserve_vec("survey", "per_start", &mut per_start, cells)?;
    let mut total = 0usize;
    let mut extensions = 0u64;

    for start in scn.bounds.cells() {
        let run = scn.paths_from(start, parallel)?;
        let n = run.paths.len();
        debug!(scenario = %scn.name, %start, paths = n, "survey start");
        total += n;
        extensions = extensions.saturating_add(run.counts.extensions);
        per_start.push(StartCount { start, paths: n });
    }

    info!(scenario = %scn.name, steps = scn.steps, total, "survey finished");
    Ok(SurveyReport {
        scenario: scn.name.clone(),
        steps: scn.steps,
        cap: scn.cap,
        per_start,
        total,
        extensions,
    })
}
