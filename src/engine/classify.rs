// src/engine/classify.rs

use crate::progress::signal::{AssessmentAggregate, UnitSignal};

/// Completion ratio at or above which an ordinary unit counts as completed.
/// Fixed policy constant, not configurable per unit.
pub const COMPLETION_THRESHOLD: f64 = 80.0;

/// Minimum completed attempts for the assessment unit to count as completed.
pub const ASSESSMENT_MIN_ATTEMPTS: usize = 3;

/// Minimum average score for the assessment unit to count as completed.
pub const ASSESSMENT_MIN_AVERAGE: f64 = 70.0;

/// Verdict of the completion classifier for one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Classification {
    /// Normalized completion percentage in `[0, 100]`.
    pub completion_ratio: f64,
    pub completed: bool,
}

/// Classify an ordinary (concept or resource) unit from its signal.
///
/// Pure: invoked once per unit per evaluation pass.
pub fn classify_unit(signal: &UnitSignal) -> Classification {
    let completion_ratio = signal.ratio();
    Classification {
        completion_ratio,
        completed: completion_ratio >= COMPLETION_THRESHOLD,
    }
}

/// Classify the distinguished assessment unit from the aggregate statistics.
///
/// Completed requires at least [`ASSESSMENT_MIN_ATTEMPTS`] attempts with an
/// average of [`ASSESSMENT_MIN_AVERAGE`] or better. The completion ratio is
/// `min(100, 100 * completed_count / total_count)`. With no aggregate, or an
/// aggregate reporting zero available assessments, the unit reads as
/// not-started regardless of any attempt entries.
pub fn classify_assessment(aggregate: Option<&AssessmentAggregate>) -> Classification {
    let not_started = Classification {
        completion_ratio: 0.0,
        completed: false,
    };

    let Some(agg) = aggregate else {
        return not_started;
    };
    if agg.total_count == 0 {
        return not_started;
    }

    let completed = agg.completed_count() >= ASSESSMENT_MIN_ATTEMPTS
        && agg.average_score >= ASSESSMENT_MIN_AVERAGE;
    let completion_ratio =
        (100.0 * agg.completed_count() as f64 / agg.total_count as f64).min(100.0);

    Classification {
        completion_ratio,
        completed,
    }
}
