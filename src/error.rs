use thiserror::Error;

use crate::core::coord::Coord;

#[derive(Debug, Error)]
/// Structured errors returned by path construction, enumeration and scenario loading.
pub enum SearchError {
    /// Visit-cap targets and cap were only partially given, or the cap is not positive.
    #[error("invalid cap configuration: {reason}")]
    InvalidCapConfiguration { reason: String },
    /// A path-like argument is neither a coordinate, a path, nor a collection of paths.
    #[error("invalid input shape: {reason}")]
    InvalidInputShape { reason: String },
    /// A numbered knight direction outside `1..=8`.
    #[error("invalid knight direction {direction} (expected 1..=8)")]
    InvalidDirection { direction: u8 },
    /// A knight move from `cell` would leave the `i32` coordinate range.
    #[error("knight move from {cell} leaves the i32 coordinate range")]
    CoordinateOverflow { cell: Coord },
    /// The scenario is internally inconsistent (e.g. inverted bounds, malformed config).
    #[error("invalid scenario: {reason}")]
    InvalidScenario { reason: String },
    /// A configured resource limit was exceeded.
    #[error("limit exceeded at {stage}: {metric} (limit={limit}, observed={observed})")]
    LimitExceeded {
        stage: &'static str,
        metric: &'static str,
        limit: u64,
        observed: u64,
    },
    /// A `try_reserve` allocation failed for the next generation.
    #[error("allocation failed at {stage} for {structure}")]
    AllocationFailed {
        stage: &'static str,
        structure: &'static str,
    },
    /// I/O failure while reading a scenario file.
    #[error("io error at {stage} for {path}: {error}")]
    Io {
        stage: &'static str,
        path: String,
        error: String,
    },
}

impl SearchError {
    pub(crate) fn cap_config(reason: impl Into<String>) -> Self {
        SearchError::InvalidCapConfiguration {
            reason: reason.into(),
        }
    }

    pub(crate) fn shape(reason: impl Into<String>) -> Self {
        SearchError::InvalidInputShape {
            reason: reason.into(),
        }
    }
}
