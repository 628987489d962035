// src/progress/store.rs

use std::collections::HashMap;

use serde_json::{Value, json};

/// Read interface over the persisted-progress collaborator.
///
/// One logical record per unit plus one aggregate record for assessments.
/// Records are schemaless JSON; decoding into typed signals happens in
/// [`crate::progress::signal`]. The store is read-only from the engine's
/// perspective; completion-tracking lives with the units' own
/// collaborators, not here.
pub trait ProgressStore {
    /// Raw record for one unit, or `None` when the unit was never attempted.
    fn read_unit(&self, unit_id: &str) -> Option<Value>;

    /// Raw assessment aggregate record, or `None` when no assessment was
    /// ever attempted.
    fn read_assessment(&self) -> Option<Value>;
}

/// In-memory [`ProgressStore`] for tests and embedding hosts that manage
/// persistence themselves.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    units: HashMap<String, Value>,
    assessment: Option<Value>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw unit record.
    pub fn set_unit(&mut self, unit_id: impl Into<String>, record: Value) {
        self.units.insert(unit_id.into(), record);
    }

    /// Insert a well-formed completion-ratio record for a unit.
    pub fn set_ratio(&mut self, unit_id: impl Into<String>, ratio: f64) {
        self.set_unit(unit_id, json!({ "completion_ratio": ratio }));
    }

    /// Insert a raw assessment aggregate record.
    pub fn set_assessment(&mut self, record: Value) {
        self.assessment = Some(record);
    }

    /// Insert a well-formed assessment aggregate record.
    pub fn set_assessment_aggregate(&mut self, scores: &[f64], total_count: u32, average_score: f64) {
        self.assessment = Some(json!({
            "scores": scores,
            "total_count": total_count,
            "average_score": average_score,
        }));
    }
}

impl ProgressStore for MemoryStore {
    fn read_unit(&self, unit_id: &str) -> Option<Value> {
        self.units.get(unit_id).cloned()
    }

    fn read_assessment(&self) -> Option<Value> {
        self.assessment.clone()
    }
}
