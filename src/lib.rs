// src/lib.rs

//! Learning progress graph engine.
//!
//! Models a curriculum as a DAG of learning units, derives per-unit
//! completed/unlocked state from persisted completion signals, computes a
//! deterministic tiered layout for visualization, and synthesizes
//! achievement badges from aggregate progress.

pub mod config;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod logging;
pub mod progress;

use std::path::Path;

use tracing::info;

use crate::config::loader::{load_default, load_from_path};

pub use crate::dag::{CurriculumGraph, LayoutParams, Point, TierRow, UnitMeta};
pub use crate::engine::{Achievement, Engine, Snapshot, UnitState};
pub use crate::errors::{LearnmapError, Result};
pub use crate::progress::{AssessmentAggregate, MemoryStore, ProgressStore, UnitSignal};

/// High-level entry point used by embedding hosts.
///
/// This wires together:
/// - curriculum loading
/// - semantic validation (via graph construction)
/// - engine setup with default layout geometry
///
/// A configuration error here is fatal for the feature: no engine is
/// returned, and the host should surface "unavailable" instead of a
/// partially computed graph.
pub fn load_engine(path: impl AsRef<Path>) -> Result<Engine> {
    let cfg = load_from_path(path)?;
    let engine = Engine::from_config(&cfg)?;
    info!(
        units = engine.graph().len(),
        tiers = engine.graph().tier_rows().len(),
        "curriculum loaded"
    );
    Ok(engine)
}

/// Build an engine over the curriculum bundled with the crate.
pub fn default_engine() -> Result<Engine> {
    let cfg = load_default()?;
    Engine::from_config(&cfg)
}
