//! JSON scenario files.
//!
//! ```json
//! {
//!   "scenario": {
//!     "name": "keypad",
//!     "bounds": { "row_min": 1, "row_max": 4, "col_min": 1, "col_max": 5 },
//!     "forbidden": [[4, 1], [4, 5]],
//!     "limited": [[1, 1], [1, 5], [2, 4], [3, 5]],
//!     "cap": 2,
//!     "steps": 9
//!   }
//! }
//! ```
//!
//! `limited` and `cap` are optional but must appear together. `no_immediate_return` and
//! `limits` default to off and [`ResourceLimits::default`].

use std::path::Path as FsPath;

use serde::{Deserialize, Serialize};

use crate::board::bounds::Bounds;
use crate::core::cellset::CoordSet;
use crate::error::SearchError;
use crate::scenario::Scenario;
use crate::search::resources::ResourceLimits;

fn default_name() -> String {
    "custom".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScenarioSpec {
    #[serde(default = "default_name")]
    pub name: String,
    pub bounds: Bounds,
    #[serde(default)]
    pub forbidden: CoordSet,
    #[serde(default)]
    pub limited: Option<CoordSet>,
    /// Signed so that zero/negative caps are reported as cap errors, not parse errors.
    #[serde(default)]
    pub cap: Option<i64>,
    pub steps: usize,
    #[serde(default)]
    pub no_immediate_return: bool,
    #[serde(default)]
    pub limits: ResourceLimits,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct InputFile {
    pub scenario: ScenarioSpec,
}

impl ScenarioSpec {
    pub fn build(&self) -> Result<Scenario, SearchError> {
        let cap = match self.cap {
            None => None,
            Some(c) if c <= 0 => {
                return Err(SearchError::cap_config(format!(
                    "cap must be a positive integer, got {c}"
                )))
            }
            Some(c) => Some(u32::try_from(c).map_err(|_| {
                SearchError::cap_config(format!("cap {c} is out of range"))
            })?),
        };

        let scn = Scenario {
            name: self.name.clone(),
            bounds: self.bounds,
            forbidden: self.forbidden.clone(),
            limited: self.limited.clone(),
            cap,
            steps: self.steps,
            no_immediate_return: self.no_immediate_return,
            limits: self.limits,
        };
        scn.validate()?;
        Ok(scn)
    }
}

pub fn parse_scenario(json: &str) -> Result<Scenario, SearchError> {
    let input: InputFile = serde_json::from_str(json).map_err(|e| SearchError::InvalidScenario {
        reason: format!("invalid JSON: {e}"),
    })?;
    input.scenario.build()
}

pub fn load_scenario(path: &FsPath) -> Result<Scenario, SearchError> {
    let text = std::fs::read_to_string(path).map_err(|e| SearchError::Io {
        stage: "load_scenario",
        path: path.display().to_string(),
        error: e.to_string(),
    })?;
    parse_scenario(&text)
}
