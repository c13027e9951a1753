//! Move rules for a lone knight.

pub mod movegen;
