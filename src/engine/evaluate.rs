// src/engine/evaluate.rs

use std::collections::HashMap;

use tracing::debug;

use crate::config::model::{CurriculumFile, UnitKind};
use crate::dag::graph::CurriculumGraph;
use crate::dag::layout::{LayoutParams, Point, layout_units};
use crate::engine::achievements::{Achievement, compute_achievements};
use crate::engine::classify::{Classification, classify_assessment, classify_unit};
use crate::engine::recommend::recommend_next;
use crate::engine::unlock::resolve_unlocks;
use crate::errors::Result;
use crate::progress::signal::{AssessmentAggregate, UnitSignal};
use crate::progress::store::ProgressStore;

/// Derived state of one unit after an evaluation pass.
#[derive(Debug, Clone, PartialEq)]
pub struct UnitState {
    pub id: String,
    pub completion_ratio: f64,
    pub completed: bool,
    pub unlocked: bool,
    pub x: f64,
    pub y: f64,
}

/// Coherent result of one full evaluation pass, consumed by the
/// presentation layer as a unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Per-unit state in declaration order.
    pub units: Vec<UnitState>,
    /// Aggregate completion percentage in `[0, 100]`.
    pub total_progress: f64,
    /// Id of the next-recommended unit, if any unit is unlocked and
    /// incomplete.
    pub recommended: Option<String>,
    /// All currently earned achievement badges.
    pub achievements: Vec<Achievement>,
}

impl Snapshot {
    /// Look up one unit's state by id.
    pub fn unit(&self, id: &str) -> Option<&UnitState> {
        self.units.iter().find(|u| u.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.units.iter().filter(|u| u.completed).count()
    }
}

/// The evaluation engine: an immutable curriculum graph plus layout
/// geometry.
///
/// [`Engine::evaluate`] is a pure function of the graph and the store
/// contents: it holds no interior mutability and derives everything fresh
/// on each call, so two passes over unchanged store input yield identical
/// snapshots, and concurrent use is governed entirely by the borrow rules.
#[derive(Debug, Clone)]
pub struct Engine {
    graph: CurriculumGraph,
    layout: LayoutParams,
}

impl Engine {
    /// Build an engine from a curriculum configuration with default layout
    /// geometry. Fails on any configuration error; no partially usable
    /// engine is ever produced.
    pub fn from_config(cfg: &CurriculumFile) -> Result<Self> {
        Ok(Self {
            graph: CurriculumGraph::from_config(cfg)?,
            layout: LayoutParams::default(),
        })
    }

    /// Replace the layout geometry.
    pub fn with_layout(mut self, layout: LayoutParams) -> Self {
        self.layout = layout;
        self
    }

    pub fn graph(&self) -> &CurriculumGraph {
        &self.graph
    }

    pub fn layout_params(&self) -> &LayoutParams {
        &self.layout
    }

    /// Run one full evaluation pass: classify every unit, resolve unlocks,
    /// lay out coordinates, then derive the recommendation and achievements.
    pub fn evaluate(&self, store: &dyn ProgressStore) -> Snapshot {
        debug!(units = self.graph.len(), "starting evaluation pass");

        // The aggregate record is decoded once and shared by the assessment
        // classifier and the quiz achievement checks.
        let aggregate = AssessmentAggregate::from_record(store.read_assessment().as_ref());

        // Pass 1: classify every unit.
        let classifications: Vec<Classification> = self
            .graph
            .units()
            .iter()
            .map(|unit| match unit.kind {
                UnitKind::Assessment => classify_assessment(aggregate.as_ref()),
                UnitKind::Concept | UnitKind::Resource => {
                    let record = store.read_unit(&unit.id);
                    classify_unit(&UnitSignal::from_record(&unit.id, record.as_ref()))
                }
            })
            .collect();

        // Pass 2: resolve unlocks from the completed flags.
        let completed: HashMap<String, bool> = self
            .graph
            .units()
            .iter()
            .zip(classifications.iter())
            .map(|(unit, c)| (unit.id.clone(), c.completed))
            .collect();
        let unlocked = resolve_unlocks(&self.graph, &completed);

        // Pass 3: deterministic tiered layout.
        let positions = layout_units(&self.graph, &self.layout);

        let units: Vec<UnitState> = self
            .graph
            .units()
            .iter()
            .zip(classifications.iter())
            .map(|(unit, c)| {
                let position = positions
                    .get(&unit.id)
                    .copied()
                    .unwrap_or(Point { x: 0.0, y: 0.0 });
                UnitState {
                    id: unit.id.clone(),
                    completion_ratio: c.completion_ratio,
                    completed: c.completed,
                    unlocked: unlocked.get(&unit.id).copied().unwrap_or(false),
                    x: position.x,
                    y: position.y,
                }
            })
            .collect();

        // Pass 4: aggregates.
        let completed_count = units.iter().filter(|u| u.completed).count();
        let total_progress = if units.is_empty() {
            0.0
        } else {
            100.0 * completed_count as f64 / units.len() as f64
        };
        let recommended = recommend_next(self.graph.recommended_order(), &units);
        let achievements = compute_achievements(completed_count, units.len(), aggregate.as_ref());

        debug!(
            completed = completed_count,
            recommended = recommended.as_deref(),
            achievements = achievements.len(),
            "evaluation pass complete"
        );

        Snapshot {
            units,
            total_progress,
            recommended,
            achievements,
        }
    }
}
