// src/errors.rs

//! Crate-wide error types.
//!
//! Configuration problems are fatal: no engine is constructed, which is the
//! "unavailable" signal consumers rely on instead of a partially built graph.
//! Per-record signal problems are *not* errors; they are recovered locally in
//! `progress::signal` and never surface here.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LearnmapError {
    /// Catch-all for curriculum configuration problems that don't have a
    /// dedicated variant (empty unit set, evergreen units with
    /// prerequisites, ...).
    #[error("configuration error: {0}")]
    Config(String),

    /// A unit lists a prerequisite id that does not exist in the unit set.
    /// Such a unit could never unlock, so this is rejected at load time.
    #[error("unit '{unit}' has unknown prerequisite '{prerequisite}'")]
    UnknownPrerequisite { unit: String, prerequisite: String },

    /// Two units share the same id.
    #[error("duplicate unit id '{0}'")]
    DuplicateUnit(String),

    /// A unit appears in more than one tier of the tier table.
    #[error("unit '{unit}' appears in both tier '{first}' and tier '{second}'")]
    DuplicateTierMembership {
        unit: String,
        first: String,
        second: String,
    },

    /// The prerequisite relation contains a cycle, which makes unlocking
    /// undecidable.
    #[error("cycle detected in prerequisite graph involving unit '{0}'")]
    PrerequisiteCycle(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, LearnmapError>;
