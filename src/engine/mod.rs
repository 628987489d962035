// src/engine/mod.rs

//! Evaluation engine for the progress graph.
//!
//! One pass runs in four stages over the immutable curriculum graph:
//! - classify every unit from its stored signal (`classify`)
//! - resolve unlocks from the classified `completed` flags (`unlock`)
//! - lay out deterministic coordinates (`dag::layout`)
//! - derive the next-step recommendation and achievement badges
//!   (`recommend`, `achievements`)
//!
//! The whole pass is synchronous and side-effect free apart from reading
//! the progress store.

pub mod achievements;
pub mod classify;
pub mod evaluate;
pub mod recommend;
pub mod unlock;

pub use achievements::{
    Achievement, HIGH_SCORE_COUNT, HIGH_SCORE_THRESHOLD, PERFECT_SCORE, STREAK_THRESHOLD,
    compute_achievements,
};
pub use classify::{
    ASSESSMENT_MIN_ATTEMPTS, ASSESSMENT_MIN_AVERAGE, COMPLETION_THRESHOLD, Classification,
    classify_assessment, classify_unit,
};
pub use evaluate::{Engine, Snapshot, UnitState};
pub use recommend::recommend_next;
pub use unlock::resolve_unlocks;
