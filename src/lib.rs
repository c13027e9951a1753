//! Enumerate knight paths on a bounded grid, skipping forbidden cells and capping visits to
//! a set of limited cells.

pub mod board;
pub mod config;
pub mod core;
pub mod error;
pub mod filter;
pub mod rules;
pub mod scenario;
pub mod scenarios;
pub mod search;
