// src/engine/recommend.rs

use crate::engine::evaluate::UnitState;

/// Select the single next-recommended unit.
///
/// Scans `recommended_order` and returns the first id that is currently
/// unlocked and not completed. If no ordered id qualifies (e.g. the order
/// list has gaps), falls back to the first unlocked-and-incomplete unit in
/// declaration order. Returns `None` when no unit is both unlocked and
/// incomplete; the curriculum is either fully completed or fully locked.
pub fn recommend_next(recommended_order: &[String], units: &[UnitState]) -> Option<String> {
    for id in recommended_order {
        if let Some(unit) = units.iter().find(|u| &u.id == id) {
            if unit.unlocked && !unit.completed {
                return Some(unit.id.clone());
            }
        }
    }

    units
        .iter()
        .find(|u| u.unlocked && !u.completed)
        .map(|u| u.id.clone())
}
