// src/dag/graph.rs

use std::collections::HashMap;

use tracing::warn;

use crate::config::model::{CurriculumFile, Difficulty, UnitKind};
use crate::config::validate::validate_config;
use crate::errors::Result;

/// Number of units per synthetic row when a unit is absent from every
/// declared tier and layout has to fall back to index-based grouping.
pub const FALLBACK_GROUP_SIZE: usize = 5;

/// Immutable per-unit data carried through the graph.
///
/// Everything here comes from static configuration; the derived runtime
/// fields (`completion_ratio`, `completed`, `unlocked`, coordinates) live in
/// [`crate::engine::Snapshot`] and are recomputed on every evaluation pass.
#[derive(Debug, Clone)]
pub struct UnitMeta {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub estimated_time: String,
    /// Direct prerequisites: units that must be completed before this one
    /// unlocks.
    pub prerequisites: Vec<String>,
    pub skills: Vec<String>,
    pub route: String,
    pub kind: UnitKind,
}

impl UnitMeta {
    /// Evergreen units are unlocked unconditionally at graph-construction
    /// time and bypass the unlock resolver.
    pub fn is_evergreen(&self) -> bool {
        self.kind.is_evergreen()
    }
}

/// One horizontal row of the layout: a declared tier, or a synthetic
/// fallback group for units missing from the tier table.
#[derive(Debug, Clone)]
pub struct TierRow {
    /// Display label; `None` for purely synthetic rows.
    pub label: Option<String>,
    /// Pedagogical tier number (0 = ungrouped/additional resources).
    pub rank: u32,
    /// Member unit ids in intra-row display order.
    pub members: Vec<String>,
}

/// In-memory curriculum graph keyed by unit id.
///
/// Built once from a validated [`CurriculumFile`] and immutable afterwards.
/// The tier membership lookup is precomputed into a `unit id -> row index`
/// map here so layout never scans the membership lists.
#[derive(Debug, Clone)]
pub struct CurriculumGraph {
    units: Vec<UnitMeta>,
    index: HashMap<String, usize>,
    rows: Vec<TierRow>,
    row_index: HashMap<String, usize>,
    rank_of: HashMap<String, u32>,
    recommended_order: Vec<String>,
}

impl CurriculumGraph {
    /// Build a curriculum graph from a configuration.
    ///
    /// Validation runs first; an engine can therefore never be constructed
    /// over an inconsistent curriculum (unknown prerequisites, duplicate
    /// tier membership, prerequisite cycles).
    pub fn from_config(cfg: &CurriculumFile) -> Result<Self> {
        validate_config(cfg)?;

        let units: Vec<UnitMeta> = cfg
            .units
            .iter()
            .map(|u| UnitMeta {
                id: u.id.clone(),
                title: u.title.clone(),
                description: u.description.clone(),
                difficulty: u.difficulty,
                estimated_time: u.estimated_time.clone(),
                prerequisites: u.prerequisites.clone(),
                skills: u.skills.clone(),
                route: u.route.clone(),
                kind: u.kind,
            })
            .collect();

        let index: HashMap<String, usize> = units
            .iter()
            .enumerate()
            .map(|(i, u)| (u.id.clone(), i))
            .collect();

        // First pass: declared tiers become rows in table order.
        let mut rows: Vec<TierRow> = Vec::new();
        let mut row_index: HashMap<String, usize> = HashMap::new();
        let mut rank_of: HashMap<String, u32> = HashMap::new();

        for (t, tier) in cfg.tiers.iter().enumerate() {
            let rank = tier.effective_rank(t);
            for member in tier.units.iter() {
                row_index.insert(member.clone(), t);
                rank_of.insert(member.clone(), rank);
            }
            rows.push(TierRow {
                label: Some(tier.label.clone()),
                rank,
                members: tier.units.clone(),
            });
        }

        // Second pass: units absent from every tier fall back to a synthetic
        // row derived from their position index. The row index shares the
        // declared row space, so a fallback unit may join an existing row.
        // Pedagogically these units stay ungrouped (rank 0).
        for (idx, unit) in units.iter().enumerate() {
            if row_index.contains_key(&unit.id) {
                continue;
            }
            let row = idx / FALLBACK_GROUP_SIZE;
            while rows.len() <= row {
                rows.push(TierRow {
                    label: None,
                    rank: 0,
                    members: Vec::new(),
                });
            }
            warn!(
                unit = %unit.id,
                row,
                "unit missing from tier table; assigned to fallback layout row"
            );
            rows[row].members.push(unit.id.clone());
            row_index.insert(unit.id.clone(), row);
            rank_of.insert(unit.id.clone(), 0);
        }

        Ok(Self {
            units,
            index,
            rows,
            row_index,
            rank_of,
            recommended_order: cfg.path.recommended_order.clone(),
        })
    }

    /// All units in declaration order (the canonical stable order).
    pub fn units(&self) -> &[UnitMeta] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Look up a unit by id.
    pub fn get(&self, id: &str) -> Option<&UnitMeta> {
        self.index.get(id).map(|&i| &self.units[i])
    }

    /// Direct prerequisites of a unit.
    pub fn prerequisites_of(&self, id: &str) -> &[String] {
        self.get(id).map(|u| u.prerequisites.as_slice()).unwrap_or(&[])
    }

    /// Ordered layout rows (declared tiers first, then any synthetic rows
    /// beyond the declared table).
    pub fn tier_rows(&self) -> &[TierRow] {
        &self.rows
    }

    /// 0-based layout row index of a unit. Every unit has one, by
    /// construction.
    pub fn row_of(&self, id: &str) -> Option<usize> {
        self.row_index.get(id).copied()
    }

    /// Pedagogical tier number of a unit (0 = ungrouped/additional).
    pub fn tier_rank(&self, id: &str) -> u32 {
        self.rank_of.get(id).copied().unwrap_or(0)
    }

    /// The total preference ordering used for "next step" tie-breaking.
    pub fn recommended_order(&self) -> &[String] {
        &self.recommended_order
    }

    /// The distinguished assessment unit, if the curriculum has one.
    pub fn assessment_unit(&self) -> Option<&UnitMeta> {
        self.units.iter().find(|u| u.kind == UnitKind::Assessment)
    }
}
