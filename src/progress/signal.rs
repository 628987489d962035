// src/progress/signal.rs

use serde_json::Value;
use tracing::warn;

/// Per-unit completion signal decoded from a raw store record.
///
/// Absence ("never attempted") is an explicit variant rather than a null
/// check, so the absent-means-zero default is a testable branch. Malformed
/// records also land here, on `Unset`, after a `warn!`; one corrupt record
/// must not prevent computing state for every other unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitSignal {
    /// No usable record: the unit was never attempted.
    Unset,
    /// A completion ratio in `[0, 100]`.
    Ratio(f64),
}

impl UnitSignal {
    /// The effective completion ratio, with `Unset` reading as 0.
    pub fn ratio(&self) -> f64 {
        match self {
            UnitSignal::Unset => 0.0,
            UnitSignal::Ratio(r) => *r,
        }
    }

    /// Decode a raw unit record of the shape `{"completion_ratio": <number>}`.
    ///
    /// - absent record: `Unset` (never attempted)
    /// - missing/ill-typed field, or non-finite number: `Unset` with a `warn!`
    /// - finite number outside `[0, 100]`: clamped with a `warn!`
    pub fn from_record(unit_id: &str, record: Option<&Value>) -> Self {
        let Some(value) = record else {
            return UnitSignal::Unset;
        };

        let Some(ratio) = value.get("completion_ratio").and_then(Value::as_f64) else {
            warn!(
                unit = %unit_id,
                "malformed unit signal record; treating as never attempted"
            );
            return UnitSignal::Unset;
        };

        if !ratio.is_finite() {
            warn!(
                unit = %unit_id,
                "non-finite completion ratio in unit signal record; treating as never attempted"
            );
            return UnitSignal::Unset;
        }

        if !(0.0..=100.0).contains(&ratio) {
            warn!(
                unit = %unit_id,
                ratio,
                "completion ratio outside [0, 100]; clamping"
            );
            return UnitSignal::Ratio(ratio.clamp(0.0, 100.0));
        }

        UnitSignal::Ratio(ratio)
    }
}

/// Summary statistics for the distinguished assessment unit.
///
/// `scores` carries one entry per completed attempt; the attempt count used
/// everywhere is `scores.len()`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssessmentAggregate {
    /// Score of each completed attempt, each in `[0, 100]`.
    pub scores: Vec<f64>,
    /// Total number of assessments available.
    pub total_count: u32,
    /// Average score across completed attempts.
    pub average_score: f64,
}

impl AssessmentAggregate {
    pub fn completed_count(&self) -> usize {
        self.scores.len()
    }

    /// Number of attempts scoring at or above `threshold`.
    pub fn attempts_scoring_at_least(&self, threshold: f64) -> usize {
        self.scores.iter().filter(|s| **s >= threshold).count()
    }

    /// Decode the aggregate record of the shape
    /// `{"scores": [..], "total_count": <int>, "average_score": <number>}`.
    ///
    /// Returns `None` when the record is absent or not an object (treated as
    /// "no assessment activity"). Individual malformed fields default
    /// field-wise: a bad `total_count` does not discard valid `scores`.
    pub fn from_record(record: Option<&Value>) -> Option<Self> {
        let value = record?;
        let Some(obj) = value.as_object() else {
            warn!("malformed assessment aggregate record; treating as absent");
            return None;
        };

        let scores = match obj.get("scores") {
            None => Vec::new(),
            Some(Value::Array(entries)) => entries
                .iter()
                .filter_map(|entry| match entry.as_f64() {
                    Some(score) if score.is_finite() => Some(score.clamp(0.0, 100.0)),
                    _ => {
                        warn!("skipping malformed assessment attempt score");
                        None
                    }
                })
                .collect(),
            Some(_) => {
                warn!("assessment aggregate 'scores' is not an array; defaulting to empty");
                Vec::new()
            }
        };

        let total_count = match obj.get("total_count") {
            None => 0,
            Some(v) => match v.as_u64() {
                Some(n) => u32::try_from(n).unwrap_or(u32::MAX),
                None => {
                    warn!("assessment aggregate 'total_count' is not an integer; defaulting to 0");
                    0
                }
            },
        };

        let average_score = match obj.get("average_score") {
            None => 0.0,
            Some(v) => match v.as_f64() {
                Some(avg) if avg.is_finite() => avg.clamp(0.0, 100.0),
                _ => {
                    warn!("assessment aggregate 'average_score' is not a number; defaulting to 0");
                    0.0
                }
            },
        };

        Some(Self {
            scores,
            total_count,
            average_score,
        })
    }
}
