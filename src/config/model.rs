// src/config/model.rs

use serde::Deserialize;

/// Top-level curriculum definition as read from a TOML file.
///
/// This is a direct mapping of the curriculum format:
///
/// ```toml
/// [path]
/// id = "comprehensive-path"
/// title = "Complete AI Agent Mastery"
/// recommended_order = ["agent-architecture", "agent-security"]
///
/// [[tier]]
/// label = "Fundamentals"
/// units = ["agent-architecture", "agent-security"]
///
/// [[unit]]
/// id = "agent-architecture"
/// title = "Agent Architecture & Lifecycle"
/// prerequisites = []
/// ```
///
/// `[[unit]]` is an array-of-tables so the file's declaration order is
/// preserved; that order is the canonical stable ordering of the curriculum
/// (used for layout fallback grouping and recommendation fallback).
#[derive(Debug, Clone, Deserialize)]
pub struct CurriculumFile {
    /// Path-level metadata and the recommendation order from `[path]`.
    #[serde(default)]
    pub path: PathSection,

    /// Ordered tier table from `[[tier]]`.
    #[serde(default, rename = "tier")]
    pub tiers: Vec<TierConfig>,

    /// All learning units from `[[unit]]`, in declaration order.
    #[serde(default, rename = "unit")]
    pub units: Vec<UnitConfig>,
}

/// `[path]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PathSection {
    /// Stable identifier for the curriculum path.
    #[serde(default)]
    pub id: String,

    /// Display title.
    #[serde(default)]
    pub title: String,

    /// Display description.
    #[serde(default)]
    pub description: String,

    /// Total preference ordering over unit ids, used only to pick the single
    /// "next step" recommendation. Gaps are tolerated: units missing from
    /// this list can still unlock and complete normally.
    #[serde(default)]
    pub recommended_order: Vec<String>,
}

/// One `[[tier]]` entry: an ordered group of unit ids sharing a layout row.
#[derive(Debug, Clone, Deserialize)]
pub struct TierConfig {
    /// Display label, e.g. `"Fundamentals"`.
    pub label: String,

    /// Pedagogical tier number: 1..N for ordered curriculum tiers, 0 for
    /// ungrouped/additional resources. If omitted, the 1-based position of
    /// this entry in the tier table is used.
    #[serde(default)]
    pub rank: Option<u32>,

    /// Member unit ids, in intra-tier display order.
    #[serde(default)]
    pub units: Vec<String>,
}

impl TierConfig {
    /// Effective pedagogical rank given this tier's 0-based position in the
    /// tier table.
    pub fn effective_rank(&self, position: usize) -> u32 {
        self.rank.unwrap_or(position as u32 + 1)
    }
}

/// One `[[unit]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct UnitConfig {
    /// Unique stable identifier (string key).
    pub id: String,

    /// Display title.
    #[serde(default)]
    pub title: String,

    /// Display description.
    #[serde(default)]
    pub description: String,

    /// Difficulty label for display.
    #[serde(default)]
    pub difficulty: Difficulty,

    /// Free-form estimated time, e.g. `"25-35 min"`.
    #[serde(default)]
    pub estimated_time: String,

    /// Unit ids that must be completed before this unit unlocks.
    /// Empty means the unit is always eligible for unlocking.
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Skill tags for display.
    #[serde(default)]
    pub skills: Vec<String>,

    /// Navigation route of the content this unit points at.
    #[serde(default)]
    pub route: String,

    /// What kind of unit this is; drives classification and unlocking.
    #[serde(default)]
    pub kind: UnitKind,
}

impl UnitConfig {
    /// Whether this unit is unlocked unconditionally at graph construction
    /// time, bypassing the unlock resolver.
    pub fn is_evergreen(&self) -> bool {
        self.kind.is_evergreen()
    }
}

/// Kind of a learning unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitKind {
    /// Ordinary curriculum unit: classified by completion ratio, unlocked by
    /// the resolver.
    Concept,
    /// Evergreen reference/community entry: always unlocked, classified by
    /// completion ratio.
    Resource,
    /// The distinguished quiz unit: always unlocked, classified from the
    /// assessment aggregate. At most one per curriculum.
    Assessment,
}

impl Default for UnitKind {
    fn default() -> Self {
        UnitKind::Concept
    }
}

impl UnitKind {
    pub fn is_evergreen(&self) -> bool {
        !matches!(self, UnitKind::Concept)
    }
}

/// Difficulty label, display-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Beginner
    }
}
