// src/config/loader.rs

use std::fs;
use std::path::Path;

use crate::config::model::CurriculumFile;
use crate::config::validate::validate_config;
use crate::errors::Result;

/// The curriculum shipped with the crate: the 19-unit AI-agent learning path
/// across four progressive tiers plus additional resources.
const DEFAULT_CURRICULUM: &str = include_str!("default_curriculum.toml");

/// Load a curriculum file from a given path and return the raw
/// `CurriculumFile`.
///
/// This only performs TOML deserialization; it does **not** perform semantic
/// validation (prerequisite references, tier table consistency, acyclicity).
/// Use [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<CurriculumFile> {
    let contents = fs::read_to_string(path.as_ref())?;
    let curriculum: CurriculumFile = toml::from_str(&contents)?;
    Ok(curriculum)
}

/// Load a curriculum file from path and run semantic validation.
///
/// This is the recommended entry point for the rest of the crate:
///
/// - Reads TOML.
/// - Applies defaults (handled by `serde` + `Default` impls).
/// - Checks for:
///   - duplicate unit ids,
///   - unknown prerequisite references,
///   - tier table consistency,
///   - prerequisite cycles.
pub fn load_and_validate(path: impl AsRef<Path>) -> Result<CurriculumFile> {
    let curriculum = load_from_path(&path)?;
    validate_config(&curriculum)?;
    Ok(curriculum)
}

/// Load the embedded default curriculum.
///
/// Like [`load_from_path`], this only deserializes; the bundled file goes
/// through the same validation as any other input when an engine is built
/// over it (and a test pins that it validates cleanly).
pub fn load_default() -> Result<CurriculumFile> {
    let curriculum: CurriculumFile = toml::from_str(DEFAULT_CURRICULUM)?;
    Ok(curriculum)
}
