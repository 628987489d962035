// src/dag/layout.rs

use std::collections::HashMap;

use crate::dag::graph::CurriculumGraph;

/// A computed 2D position for one unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Canvas geometry for the tiered layout.
///
/// Defaults match the visualization this engine was built for: a 1200x800
/// canvas with 100px padding, 140px between tier rows and the first row 40px
/// below the top padding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    pub canvas_width: f64,
    /// Overall canvas height. Not used by the row formula (rows sit at fixed
    /// vertical intervals); consumers size their viewport from it.
    pub canvas_height: f64,
    pub padding: f64,
    /// Vertical distance between consecutive tier rows.
    pub tier_height: f64,
    /// Offset of the first tier row below the top padding.
    pub tier_start_offset: f64,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            canvas_width: 1200.0,
            canvas_height: 800.0,
            padding: 100.0,
            tier_height: 140.0,
            tier_start_offset: 40.0,
        }
    }
}

impl LayoutParams {
    fn tier_start_y(&self) -> f64 {
        self.padding + self.tier_start_offset
    }

    fn usable_width(&self) -> f64 {
        self.canvas_width - 2.0 * self.padding
    }
}

/// Assign deterministic coordinates to every unit.
///
/// Units are grouped by their precomputed layout row; the `t`-th row sits at
/// `y = tier_start_y + t * tier_height`, and the `j`-th of its `k` members at
/// `x = padding + (j + 1) * usable_width / (k + 1)`. This centers each row
/// and keeps members of a row from colliding regardless of `k`.
///
/// The result is a pure function of (tier membership, intra-row order,
/// canvas geometry): identical inputs always yield identical coordinates.
pub fn layout_units(graph: &CurriculumGraph, params: &LayoutParams) -> HashMap<String, Point> {
    let mut positions = HashMap::with_capacity(graph.len());

    for (t, row) in graph.tier_rows().iter().enumerate() {
        let k = row.members.len();
        if k == 0 {
            continue;
        }
        let node_spacing = params.usable_width() / (k as f64 + 1.0);
        let y = params.tier_start_y() + t as f64 * params.tier_height;

        for (j, id) in row.members.iter().enumerate() {
            let x = params.padding + (j as f64 + 1.0) * node_spacing;
            positions.insert(id.clone(), Point { x, y });
        }
    }

    positions
}
