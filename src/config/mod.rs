// src/config/mod.rs

//! Curriculum configuration loading and validation.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a curriculum file from disk or the embedded default (`loader.rs`).
//! - Validate structural invariants like prerequisite acyclicity
//!   (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_default, load_from_path};
pub use model::{CurriculumFile, Difficulty, PathSection, TierConfig, UnitConfig, UnitKind};
pub use validate::validate_config;
