// src/dag/mod.rs

//! Curriculum graph and tiered layout.
//!
//! - [`graph`] holds the immutable DAG of learning units, with tier
//!   membership precomputed into an id -> row index map.
//! - [`layout`] assigns deterministic 2D coordinates to every unit,
//!   row by row.

pub mod graph;
pub mod layout;

pub use graph::{CurriculumGraph, FALLBACK_GROUP_SIZE, TierRow, UnitMeta};
pub use layout::{LayoutParams, Point, layout_units};
