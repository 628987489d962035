#![allow(dead_code)]

use learnmap::config::{
    CurriculumFile, Difficulty, PathSection, TierConfig, UnitConfig, UnitKind,
};

pub fn unit(id: &str, prerequisites: &[&str]) -> UnitConfig {
    unit_of_kind(id, prerequisites, UnitKind::Concept)
}

pub fn unit_of_kind(id: &str, prerequisites: &[&str], kind: UnitKind) -> UnitConfig {
    UnitConfig {
        id: id.into(),
        title: String::new(),
        description: String::new(),
        difficulty: Difficulty::Beginner,
        estimated_time: String::new(),
        prerequisites: prerequisites.iter().map(|s| s.to_string()).collect(),
        skills: Vec::new(),
        route: String::new(),
        kind,
    }
}

pub fn tier(label: &str, units: &[&str]) -> TierConfig {
    TierConfig {
        label: label.into(),
        rank: None,
        units: units.iter().map(|s| s.to_string()).collect(),
    }
}

pub fn curriculum(
    units: Vec<UnitConfig>,
    tiers: Vec<TierConfig>,
    recommended_order: &[&str],
) -> CurriculumFile {
    CurriculumFile {
        path: PathSection {
            id: "test-path".into(),
            title: String::new(),
            description: String::new(),
            recommended_order: recommended_order.iter().map(|s| s.to_string()).collect(),
        },
        tiers,
        units,
    }
}

/// The canonical three-unit chain: `a` has no prerequisites, `b` requires
/// `a`, `c` requires both.
pub fn chain() -> CurriculumFile {
    curriculum(
        vec![
            unit("a", &[]),
            unit("b", &["a"]),
            unit("c", &["a", "b"]),
        ],
        vec![tier("Core", &["a", "b", "c"])],
        &["a", "b", "c"],
    )
}
