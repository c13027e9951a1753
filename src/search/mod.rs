//! Path search: extension, visit caps, enumeration, budgets and the whole-board survey.

pub mod enumerate;
pub mod extend;
pub mod resources;
pub mod survey;
pub mod visits;
