//! Low-level value types shared by every layer:
//!
//! - [`coord`]: `(row, col)` cells and the fixed knight step table.
//! - [`path`]: non-empty, knight-connected cell sequences.
//! - [`cellset`]: hash-backed cell sets used for forbidden and limited cells.

pub mod cellset;
pub mod coord;
pub mod path;
