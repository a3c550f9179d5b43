//! Radial mindmap layout: one center topic, branches evenly on a circle.

use std::f64::consts::{FRAC_PI_2, TAU};

use super::{FlowOptions, LayoutConnector, LayoutNode, LayoutResult, MindmapSpec, Point};

/// Branch circle radius as a fraction of the shorter canvas side
pub const RADIUS_FACTOR: f64 = 0.32;

/// Connectors stop this many node widths short of the branch center.
pub const ARROW_CLEARANCE_FACTOR: f64 = 0.6;

/// Shortest visible spoke (px). The clearance shrinks before a spoke gets
/// shorter than this, so a crowded canvas never yields an inward arrow.
pub const MIN_SPOKE_LENGTH: f64 = 12.0;

const CENTER_INDEX: usize = 0;

pub(super) fn layout(spec: &MindmapSpec, o: &FlowOptions) -> LayoutResult {
    let center = LayoutNode::new(
        &spec.center,
        (o.width - o.node_width) / 2.0,
        (o.height - o.node_height) / 2.0,
        o,
    )
    .clamped(o);
    let c = center.center();
    let radius = RADIUS_FACTOR * o.width.min(o.height);
    let k = spec.branches.len();

    let mut nodes = vec![center];
    let mut angles = Vec::with_capacity(k);
    for (j, label) in spec.branches.iter().enumerate() {
        // Clockwise from the top; y grows downward.
        let angle = -FRAC_PI_2 + TAU * j as f64 / k as f64;
        let bx = c.x + radius * angle.cos();
        let by = c.y + radius * angle.sin();
        nodes.push(
            LayoutNode::new(label, bx - o.node_width / 2.0, by - o.node_height / 2.0, o)
                .with_rotation(j + 1)
                .with_level(1)
                .clamped(o),
        );
        angles.push(angle);
    }

    let connectors = nodes
        .iter()
        .enumerate()
        .skip(1)
        .zip(angles)
        .map(|((index, branch), nominal)| {
            let b = branch.center();
            // Clamping may have moved the branch; aim at where it ended up.
            let angle = if (b.x - c.x).hypot(b.y - c.y) > f64::EPSILON {
                (b.y - c.y).atan2(b.x - c.x)
            } else {
                nominal
            };
            let (sin, cos) = angle.sin_cos();
            let dist = (b.x - c.x).hypot(b.y - c.y);
            let rim = Point::new(c.x + cos * o.node_width / 2.0, c.y + sin * o.node_height / 2.0);
            let rim_dist = (rim.x - c.x).hypot(rim.y - c.y);
            // Branch overlapping the center node: run the spoke from the center point.
            let (start, start_dist) = if dist - rim_dist >= MIN_SPOKE_LENGTH {
                (rim, rim_dist)
            } else {
                (c, 0.0)
            };
            let clearance = (ARROW_CLEARANCE_FACTOR * o.node_width)
                .min(dist - start_dist - MIN_SPOKE_LENGTH)
                .max(0.0);
            let end = Point::new(b.x - cos * clearance, b.y - sin * clearance);
            LayoutConnector::new(CENTER_INDEX, start, index, end)
        })
        .collect();

    LayoutResult {
        nodes,
        connectors,
        ..LayoutResult::default()
    }
}
