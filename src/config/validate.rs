// src/config/validate.rs

use std::collections::{HashMap, HashSet};

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::warn;

use crate::config::model::{CurriculumFile, UnitKind};
use crate::errors::{LearnmapError, Result};

/// Run semantic validation against a loaded curriculum.
///
/// This checks:
/// - there is at least one unit
/// - unit ids are unique
/// - all `prerequisites` refer to existing units (and not the unit itself)
/// - evergreen units (resource/assessment) declare no prerequisites
/// - there is at most one assessment unit
/// - no unit appears in more than one tier, and tier members exist
/// - the prerequisite graph has no cycles
///
/// It also emits `warn!` diagnostics for tolerated configuration gaps:
/// - units absent from every declared tier (layout falls back to synthetic
///   grouping)
/// - unknown or duplicate ids in `recommended_order`
pub fn validate_config(cfg: &CurriculumFile) -> Result<()> {
    ensure_has_units(cfg)?;
    validate_unit_ids(cfg)?;
    validate_prerequisites(cfg)?;
    validate_kinds(cfg)?;
    validate_tiers(cfg)?;
    check_recommended_order(cfg);
    validate_dag(cfg)?;
    Ok(())
}

fn ensure_has_units(cfg: &CurriculumFile) -> Result<()> {
    if cfg.units.is_empty() {
        return Err(LearnmapError::Config(
            "curriculum must contain at least one [[unit]] entry".to_string(),
        ));
    }
    Ok(())
}

fn validate_unit_ids(cfg: &CurriculumFile) -> Result<()> {
    let mut seen = HashSet::new();
    for unit in cfg.units.iter() {
        if !seen.insert(unit.id.as_str()) {
            return Err(LearnmapError::DuplicateUnit(unit.id.clone()));
        }
    }
    Ok(())
}

fn validate_prerequisites(cfg: &CurriculumFile) -> Result<()> {
    let ids: HashSet<&str> = cfg.units.iter().map(|u| u.id.as_str()).collect();

    for unit in cfg.units.iter() {
        for prereq in unit.prerequisites.iter() {
            if !ids.contains(prereq.as_str()) {
                return Err(LearnmapError::UnknownPrerequisite {
                    unit: unit.id.clone(),
                    prerequisite: prereq.clone(),
                });
            }
            if prereq == &unit.id {
                return Err(LearnmapError::Config(format!(
                    "unit '{}' cannot list itself as a prerequisite",
                    unit.id
                )));
            }
        }
    }
    Ok(())
}

fn validate_kinds(cfg: &CurriculumFile) -> Result<()> {
    let mut assessment: Option<&str> = None;

    for unit in cfg.units.iter() {
        if unit.is_evergreen() && !unit.prerequisites.is_empty() {
            return Err(LearnmapError::Config(format!(
                "evergreen unit '{}' must not declare prerequisites",
                unit.id
            )));
        }
        if unit.kind == UnitKind::Assessment {
            if let Some(first) = assessment {
                return Err(LearnmapError::Config(format!(
                    "at most one assessment unit is allowed (found '{}' and '{}')",
                    first, unit.id
                )));
            }
            assessment = Some(&unit.id);
        }
    }
    Ok(())
}

fn validate_tiers(cfg: &CurriculumFile) -> Result<()> {
    let ids: HashSet<&str> = cfg.units.iter().map(|u| u.id.as_str()).collect();

    // unit id -> label of the tier that already claimed it
    let mut membership: HashMap<&str, &str> = HashMap::new();

    for tier in cfg.tiers.iter() {
        for member in tier.units.iter() {
            if !ids.contains(member.as_str()) {
                return Err(LearnmapError::Config(format!(
                    "tier '{}' references unknown unit '{}'",
                    tier.label, member
                )));
            }
            if let Some(first) = membership.insert(member.as_str(), tier.label.as_str()) {
                return Err(LearnmapError::DuplicateTierMembership {
                    unit: member.clone(),
                    first: first.to_string(),
                    second: tier.label.clone(),
                });
            }
        }
    }

    for unit in cfg.units.iter() {
        if !membership.contains_key(unit.id.as_str()) {
            warn!(
                unit = %unit.id,
                "unit is missing from every declared tier; layout will fall back to synthetic grouping"
            );
        }
    }

    Ok(())
}

fn check_recommended_order(cfg: &CurriculumFile) {
    let ids: HashSet<&str> = cfg.units.iter().map(|u| u.id.as_str()).collect();
    let mut seen = HashSet::new();

    for id in cfg.path.recommended_order.iter() {
        if !ids.contains(id.as_str()) {
            warn!(unit = %id, "recommended_order references unknown unit; entry will never match");
        }
        if !seen.insert(id.as_str()) {
            warn!(unit = %id, "recommended_order lists unit more than once");
        }
    }
}

fn validate_dag(cfg: &CurriculumFile) -> Result<()> {
    // Build a petgraph graph from the units and their prerequisites.
    //
    // Edge direction: prerequisite -> unit
    // For:
    //   [[unit]]
    //   id = "b"
    //   prerequisites = ["a"]
    // we add edge a -> b.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for unit in cfg.units.iter() {
        graph.add_node(unit.id.as_str());
    }

    for unit in cfg.units.iter() {
        for prereq in unit.prerequisites.iter() {
            graph.add_edge(prereq.as_str(), unit.id.as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(LearnmapError::PrerequisiteCycle(
            cycle.node_id().to_string(),
        )),
    }
}
