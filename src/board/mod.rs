//! The rectangular board a search is confined to.

pub mod bounds;
