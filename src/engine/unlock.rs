// src/engine/unlock.rs

use std::collections::HashMap;

use tracing::warn;

use crate::dag::graph::CurriculumGraph;

/// Compute the `unlocked` flag for every unit from already-classified
/// `completed` flags.
///
/// A unit is unlocked when its prerequisite set is empty or every
/// prerequisite is completed. Only direct prerequisites are consulted, so
/// evaluation order does not matter; the caller guarantees the two passes
/// are separated (classify-all, then resolve-all). Evergreen units bypass
/// the computation entirely: they are unlocked by construction.
pub fn resolve_unlocks(
    graph: &CurriculumGraph,
    completed: &HashMap<String, bool>,
) -> HashMap<String, bool> {
    let mut unlocked = HashMap::with_capacity(graph.len());

    for unit in graph.units() {
        let value = if unit.is_evergreen() {
            true
        } else {
            prerequisites_satisfied(graph, &unit.id, completed)
        };
        unlocked.insert(unit.id.clone(), value);
    }

    unlocked
}

fn prerequisites_satisfied(
    graph: &CurriculumGraph,
    unit_id: &str,
    completed: &HashMap<String, bool>,
) -> bool {
    for prereq in graph.prerequisites_of(unit_id) {
        match completed.get(prereq.as_str()) {
            Some(true) => {}
            Some(false) => return false,
            None => {
                // Should not happen since the config is validated; a missing
                // prerequisite can never be satisfied.
                warn!(
                    unit = %unit_id,
                    prerequisite = %prereq,
                    "prerequisite missing from classified unit set"
                );
                return false;
            }
        }
    }
    true
}
