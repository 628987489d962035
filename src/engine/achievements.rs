// src/engine/achievements.rs

use crate::progress::signal::AssessmentAggregate;

/// Completed-unit count that earns "Learning Streak".
pub const STREAK_THRESHOLD: usize = 3;

/// Attempt score that counts as a high score.
pub const HIGH_SCORE_THRESHOLD: f64 = 90.0;

/// High-scoring attempts needed for "High Achiever".
pub const HIGH_SCORE_COUNT: usize = 3;

/// A perfect attempt score.
pub const PERFECT_SCORE: f64 = 100.0;

/// A derived achievement badge. Ephemeral: recomputed on every evaluation
/// pass and never persisted. As long as the underlying completion signals
/// persist, an earned badge cannot be lost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Achievement {
    pub title: String,
    pub description: String,
}

fn achievement(title: &str, description: &str) -> Achievement {
    Achievement {
        title: title.to_string(),
        description: description.to_string(),
    }
}

/// Derive the achievement list from aggregate progress.
///
/// The checks are independent thresholds evaluated in a fixed order; every
/// check that passes contributes a badge, not just the highest. Quiz badges
/// require the assessment aggregate to be present at all.
pub fn compute_achievements(
    completed_count: usize,
    total_units: usize,
    aggregate: Option<&AssessmentAggregate>,
) -> Vec<Achievement> {
    let mut achievements = Vec::new();

    if completed_count >= 1 {
        achievements.push(achievement("First Steps", "Completed your first section"));
    }
    if completed_count >= STREAK_THRESHOLD {
        achievements.push(achievement("Learning Streak", "Completed 3 sections"));
    }
    if total_units > 0 && completed_count == total_units {
        achievements.push(achievement("Journey Complete", "Mastered all sections"));
    }

    if let Some(agg) = aggregate {
        if agg.completed_count() >= 1 {
            achievements.push(achievement("Quiz Taker", "Completed your first quiz"));
        }
        if agg.attempts_scoring_at_least(HIGH_SCORE_THRESHOLD) >= HIGH_SCORE_COUNT {
            achievements.push(achievement("High Achiever", "Scored 90%+ on 3 quizzes"));
        }
        if agg.scores.iter().any(|s| *s == PERFECT_SCORE) {
            achievements.push(achievement("Perfect Score", "Achieved 100% on a quiz"));
        }
    }

    achievements
}
