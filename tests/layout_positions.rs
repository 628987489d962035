mod common;

use std::error::Error;

use common::{curriculum, tier, unit};
use learnmap::LayoutParams;
use learnmap::dag::{CurriculumGraph, layout_units};

type TestResult = Result<(), Box<dyn Error>>;

#[test]
fn three_unit_tier_matches_reference_coordinates() -> TestResult {
    let cfg = curriculum(
        vec![unit("a", &[]), unit("b", &[]), unit("c", &[])],
        vec![tier("Core", &["a", "b", "c"])],
        &[],
    );
    let graph = CurriculumGraph::from_config(&cfg)?;

    // width 1200, padding 100: spacing = (1200 - 200) / 4 = 250
    let positions = layout_units(&graph, &LayoutParams::default());

    assert_eq!(positions["a"].x, 350.0);
    assert_eq!(positions["b"].x, 600.0);
    assert_eq!(positions["c"].x, 850.0);

    // first tier row sits at padding + start offset
    assert_eq!(positions["a"].y, 140.0);
    assert_eq!(positions["b"].y, 140.0);
    assert_eq!(positions["c"].y, 140.0);

    Ok(())
}

#[test]
fn tier_rows_sit_at_fixed_vertical_intervals() -> TestResult {
    let cfg = curriculum(
        vec![unit("a", &[]), unit("b", &[]), unit("c", &[])],
        vec![
            tier("First", &["a"]),
            tier("Second", &["b"]),
            tier("Third", &["c"]),
        ],
        &[],
    );
    let graph = CurriculumGraph::from_config(&cfg)?;

    let positions = layout_units(&graph, &LayoutParams::default());

    assert_eq!(positions["a"].y, 140.0);
    assert_eq!(positions["b"].y, 280.0);
    assert_eq!(positions["c"].y, 420.0);

    // A lone unit is centered.
    assert_eq!(positions["a"].x, 600.0);

    Ok(())
}

#[test]
fn intra_tier_positions_are_strictly_increasing_and_collision_free() -> TestResult {
    let ids = ["u1", "u2", "u3", "u4", "u5"];
    let cfg = curriculum(
        ids.iter().map(|id| unit(id, &[])).collect(),
        vec![tier("Wide", &ids)],
        &[],
    );
    let graph = CurriculumGraph::from_config(&cfg)?;

    let params = LayoutParams::default();
    let positions = layout_units(&graph, &params);

    let xs: Vec<f64> = ids.iter().map(|id| positions[*id].x).collect();
    let k = xs.len();
    let min_gap = (params.canvas_width - 2.0 * params.padding) / (k as f64 + 2.0);

    for pair in xs.windows(2) {
        assert!(pair[1] > pair[0]);
        assert!(pair[1] - pair[0] >= min_gap);
    }

    Ok(())
}

#[test]
fn layout_is_deterministic() -> TestResult {
    let cfg = curriculum(
        vec![unit("a", &[]), unit("b", &["a"]), unit("c", &["b"])],
        vec![tier("Core", &["a", "b"]), tier("More", &["c"])],
        &[],
    );
    let graph = CurriculumGraph::from_config(&cfg)?;

    let params = LayoutParams::default();
    let first = layout_units(&graph, &params);
    let second = layout_units(&graph, &params);

    assert_eq!(first, second);

    Ok(())
}

#[test]
fn units_missing_from_the_tier_table_fall_back_to_index_grouping() -> TestResult {
    // No tier table at all: units land in synthetic rows of five.
    let ids = ["u0", "u1", "u2", "u3", "u4", "u5", "u6"];
    let cfg = curriculum(ids.iter().map(|id| unit(id, &[])).collect(), vec![], &[]);
    let graph = CurriculumGraph::from_config(&cfg)?;

    let positions = layout_units(&graph, &LayoutParams::default());

    for id in &ids[..5] {
        assert_eq!(positions[*id].y, 140.0);
    }
    for id in &ids[5..] {
        assert_eq!(positions[*id].y, 280.0);
    }

    // Second row has two members: spacing = 1000 / 3.
    assert!((positions["u5"].x - (100.0 + 1000.0 / 3.0)).abs() < 1e-9);
    assert!((positions["u6"].x - (100.0 + 2000.0 / 3.0)).abs() < 1e-9);

    Ok(())
}

#[test]
fn fallback_units_joining_a_declared_row_keep_spacing_collision_free() -> TestResult {
    // "c" is missing from the tier table; its position index (2) puts it in
    // row 0 next to the declared members, and the row spacing accounts for
    // all three occupants.
    let cfg = curriculum(
        vec![unit("a", &[]), unit("b", &[]), unit("c", &[])],
        vec![tier("Core", &["a", "b"])],
        &[],
    );
    let graph = CurriculumGraph::from_config(&cfg)?;

    let positions = layout_units(&graph, &LayoutParams::default());

    assert_eq!(positions["a"].x, 350.0);
    assert_eq!(positions["b"].x, 600.0);
    assert_eq!(positions["c"].x, 850.0);
    assert_eq!(positions["c"].y, 140.0);

    Ok(())
}

#[test]
fn custom_canvas_geometry_flows_through_the_formula() -> TestResult {
    let cfg = curriculum(
        vec![unit("a", &[]), unit("b", &[])],
        vec![tier("Core", &["a", "b"])],
        &[],
    );
    let graph = CurriculumGraph::from_config(&cfg)?;

    let params = LayoutParams {
        canvas_width: 900.0,
        canvas_height: 600.0,
        padding: 50.0,
        tier_height: 100.0,
        tier_start_offset: 25.0,
    };
    let positions = layout_units(&graph, &params);

    // spacing = (900 - 100) / 3
    assert!((positions["a"].x - (50.0 + 800.0 / 3.0)).abs() < 1e-9);
    assert!((positions["b"].x - (50.0 + 1600.0 / 3.0)).abs() < 1e-9);
    assert_eq!(positions["a"].y, 75.0);

    Ok(())
}
