use learnmap::engine::compute_achievements;
use learnmap::progress::AssessmentAggregate;

fn titles(completed: usize, total: usize, agg: Option<&AssessmentAggregate>) -> Vec<String> {
    compute_achievements(completed, total, agg)
        .into_iter()
        .map(|a| a.title)
        .collect()
}

fn aggregate(scores: &[f64]) -> AssessmentAggregate {
    let average = if scores.is_empty() {
        0.0
    } else {
        scores.iter().sum::<f64>() / scores.len() as f64
    };
    AssessmentAggregate {
        scores: scores.to_vec(),
        total_count: 10,
        average_score: average,
    }
}

#[test]
fn no_progress_earns_nothing() {
    assert!(titles(0, 19, None).is_empty());
}

#[test]
fn completion_count_thresholds() {
    assert_eq!(titles(1, 19, None), vec!["First Steps"]);
    assert_eq!(titles(2, 19, None), vec!["First Steps"]);
    assert_eq!(titles(3, 19, None), vec!["First Steps", "Learning Streak"]);
    assert_eq!(
        titles(19, 19, None),
        vec!["First Steps", "Learning Streak", "Journey Complete"]
    );
}

#[test]
fn quiz_badges_require_the_aggregate_to_be_present() {
    // Plenty of completed units, but no assessment activity at all.
    assert!(!titles(5, 19, None).contains(&"Quiz Taker".to_string()));

    let one_attempt = aggregate(&[50.0]);
    let earned = titles(0, 19, Some(&one_attempt));
    assert_eq!(earned, vec!["Quiz Taker"]);
}

#[test]
fn high_achiever_needs_three_high_scores() {
    let two_high = aggregate(&[92.0, 95.0, 50.0]);
    assert!(!titles(0, 19, Some(&two_high)).contains(&"High Achiever".to_string()));

    let three_high = aggregate(&[92.0, 95.0, 90.0, 50.0]);
    assert!(titles(0, 19, Some(&three_high)).contains(&"High Achiever".to_string()));
}

#[test]
fn perfect_score_needs_an_exact_hundred() {
    let close = aggregate(&[99.9, 99.9]);
    assert!(!titles(0, 19, Some(&close)).contains(&"Perfect Score".to_string()));

    let perfect = aggregate(&[100.0]);
    let earned = titles(0, 19, Some(&perfect));
    assert!(earned.contains(&"Perfect Score".to_string()));
    assert!(earned.contains(&"Quiz Taker".to_string()));
}

#[test]
fn achievements_grow_monotonically_with_progress() {
    let progressions = [
        (0, None),
        (1, None),
        (3, Some(aggregate(&[80.0]))),
        (5, Some(aggregate(&[95.0, 91.0, 100.0]))),
        (19, Some(aggregate(&[95.0, 91.0, 100.0, 90.0]))),
    ];

    let mut previous: Vec<String> = Vec::new();
    for (completed, agg) in progressions {
        let current = titles(completed, 19, agg.as_ref());
        for title in &previous {
            assert!(
                current.contains(title),
                "'{title}' disappeared as progress increased"
            );
        }
        previous = current;
    }
}
