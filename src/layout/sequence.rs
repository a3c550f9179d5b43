//! Label-sequence layouts: linear, zigzag, vertical, arc and outline.

use super::{
    spread, FlowOptions, LayoutConnector, LayoutNode, LayoutResult, Point, ARC_SWEEP, PAD,
};

/// Off-axis jitter, a 3-cycle by index
const JITTER: [f64; 3] = [0.0, -10.0, 10.0];

/// Horizontal offset per outline level (px)
pub const INDENT_WIDTH: f64 = 40.0;

/// Deepest outline level; deeper levels are clamped.
pub const MAX_OUTLINE_LEVEL: i64 = 4;

pub(super) fn single(label: &str, o: &FlowOptions) -> LayoutResult {
    let node = LayoutNode::new(
        label,
        (o.width - o.node_width) / 2.0,
        (o.height - o.node_height) / 2.0,
        o,
    )
    .clamped(o);
    LayoutResult {
        nodes: vec![node],
        ..LayoutResult::default()
    }
}

pub(super) fn linear(labels: &[String], o: &FlowOptions) -> LayoutResult {
    let n = labels.len();
    let base_y = (o.height - o.node_height) / 2.0;
    let nodes: Vec<LayoutNode> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = spread(n, i, PAD, o.width - PAD - o.node_width);
            LayoutNode::new(label, x, base_y + JITTER[i % 3], o)
                .with_rotation(i)
                .clamped(o)
        })
        .collect();
    let connectors = chain_horizontal(&nodes, o.gap);
    LayoutResult {
        nodes,
        connectors,
        ..LayoutResult::default()
    }
}

pub(super) fn zigzag(labels: &[String], o: &FlowOptions) -> LayoutResult {
    let n = labels.len();
    let top_y = PAD;
    let bottom_y = (o.height - PAD - o.node_height).max(top_y);
    let nodes: Vec<LayoutNode> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let x = spread(n, i, PAD, o.width - PAD - o.node_width);
            let y = if i % 2 == 0 { top_y } else { bottom_y };
            LayoutNode::new(label, x, y, o).with_rotation(i).clamped(o)
        })
        .collect();
    let connectors = chain_horizontal(&nodes, o.gap);
    LayoutResult {
        nodes,
        connectors,
        ..LayoutResult::default()
    }
}

pub(super) fn vertical(labels: &[String], o: &FlowOptions) -> LayoutResult {
    let n = labels.len();
    let base_x = (o.width - o.node_width) / 2.0;
    let nodes: Vec<LayoutNode> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let y = spread(n, i, PAD, o.height - PAD - o.node_height);
            LayoutNode::new(label, base_x + JITTER[i % 3], y, o)
                .with_rotation(i)
                .clamped(o)
        })
        .collect();
    let connectors = chain_vertical(&nodes, o.gap);
    LayoutResult {
        nodes,
        connectors,
        ..LayoutResult::default()
    }
}

/// Nodes on the upper part of an ellipse centred below the canvas. Index 0
/// sits at angle `ARC_SWEEP` (leftmost), the last index at angle 0.
pub(super) fn arc(labels: &[String], o: &FlowOptions) -> LayoutResult {
    let n = labels.len();
    let cx = o.width / 2.0;
    let rx = ((o.width - 2.0 * PAD - o.node_width) / 2.0).max(0.0);
    let cy = o.height + o.node_height / 2.0;
    // Apex node touches the top padding.
    let ry = (cy - PAD - o.node_height / 2.0).max(0.0);

    let nodes: Vec<LayoutNode> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let theta = ARC_SWEEP - spread(n, i, 0.0, ARC_SWEEP);
            let center = Point::new(cx + rx * theta.cos(), cy - ry * theta.sin());
            LayoutNode::new(
                label,
                center.x - o.node_width / 2.0,
                center.y - o.node_height / 2.0,
                o,
            )
            .with_rotation(i)
            .clamped(o)
        })
        .collect();
    let connectors = chain_horizontal(&nodes, o.gap);
    LayoutResult {
        nodes,
        connectors,
        ..LayoutResult::default()
    }
}

/// Top-to-bottom list indented by level. Each node connects to the node
/// listed before it, whatever the levels of the two nodes.
pub(super) fn outline(labels: &[String], levels: &[i64], o: &FlowOptions) -> LayoutResult {
    let n = labels.len();
    // Rows shrink to keep the last one on the canvas.
    let row_height = if n > 1 {
        ((o.height - 2.0 * PAD - o.node_height) / (n - 1) as f64)
            .min(o.node_height + o.gap)
            .max(0.0)
    } else {
        0.0
    };

    let nodes: Vec<LayoutNode> = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let level = levels
                .get(i)
                .copied()
                .unwrap_or(0)
                .clamp(0, MAX_OUTLINE_LEVEL) as usize;
            let x = PAD + level as f64 * INDENT_WIDTH;
            let y = PAD + i as f64 * row_height;
            LayoutNode::new(label, x, y, o)
                .with_rotation(i)
                .with_level(level)
                .clamped(o)
        })
        .collect();

    let connectors = nodes
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let start = pair[0].bottom_center();
            let end = pair[1].top_center();
            let mid_y = (start.y + end.y) / 2.0;
            let mut connector = LayoutConnector::new(i, start, i + 1, end);
            if (start.x - end.x).abs() > f64::EPSILON {
                connector = connector.with_waypoints(vec![
                    Point::new(start.x, mid_y),
                    Point::new(end.x, mid_y),
                ]);
            }
            connector
        })
        .collect();

    LayoutResult {
        nodes,
        connectors,
        ..LayoutResult::default()
    }
}

/// Right edge of node i to left edge of node i+1, inset by half the gap so
/// arrowheads stay clear of the borders.
fn chain_horizontal(nodes: &[LayoutNode], gap: f64) -> Vec<LayoutConnector> {
    let inset = gap / 2.0;
    nodes
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let start = pair[0].right_center();
            let end = pair[1].left_center();
            LayoutConnector::new(
                i,
                Point::new(start.x + inset, start.y),
                i + 1,
                Point::new(end.x - inset, end.y),
            )
        })
        .collect()
}

/// Bottom edge of node i to top edge of node i+1, inset by half the gap.
fn chain_vertical(nodes: &[LayoutNode], gap: f64) -> Vec<LayoutConnector> {
    let inset = gap / 2.0;
    nodes
        .windows(2)
        .enumerate()
        .map(|(i, pair)| {
            let start = pair[0].bottom_center();
            let end = pair[1].top_center();
            LayoutConnector::new(
                i,
                Point::new(start.x, start.y + inset),
                i + 1,
                Point::new(end.x, end.y - inset),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_linear_spans_padding() {
        let o = FlowOptions::new(1100.0, 200.0);
        let result = linear(&labels(&["Get bread", "Add spread", "Serve"]), &o);
        assert_eq!(result.nodes.len(), 3);
        assert_eq!(result.connectors.len(), 2);
        assert_eq!(result.nodes[0].x, PAD);
        assert_eq!(result.nodes[2].x, 1100.0 - PAD - o.node_width);
        assert_eq!(result.nodes[1].y - result.nodes[0].y, JITTER[1]);
    }

    #[test]
    fn test_linear_connectors_are_inset() {
        let o = FlowOptions::new(1100.0, 300.0);
        let result = linear(&labels(&["a", "b"]), &o);
        let c = &result.connectors[0];
        assert_eq!(c.from_x, result.nodes[0].x + o.node_width + o.gap / 2.0);
        assert_eq!(c.to_x, result.nodes[1].x - o.gap / 2.0);
        assert_eq!(c.from_y, result.nodes[0].center().y);
        assert!(c.waypoints.is_none());
    }

    #[test]
    fn test_zigzag_alternates_rows() {
        let o = FlowOptions::new(1100.0, 400.0);
        let result = zigzag(&labels(&["a", "b", "c", "d"]), &o);
        assert_eq!(result.nodes[0].y, result.nodes[2].y);
        assert_eq!(result.nodes[1].y, result.nodes[3].y);
        assert!(result.nodes[1].y > result.nodes[0].y);
        assert_eq!(result.connectors[1].from, 1);
        assert_eq!(result.connectors[1].to, 2);
    }

    #[test]
    fn test_vertical_runs_bottom_to_top() {
        let o = FlowOptions::new(400.0, 800.0);
        let result = vertical(&labels(&["a", "b", "c"]), &o);
        assert_eq!(result.nodes[0].y, PAD);
        assert_eq!(result.nodes[2].y, 800.0 - PAD - o.node_height);
        let c = &result.connectors[0];
        assert_eq!(c.from_y, result.nodes[0].y + o.node_height + o.gap / 2.0);
        assert_eq!(c.to_y, result.nodes[1].y - o.gap / 2.0);
    }

    #[test]
    fn test_arc_sweeps_left_to_right() {
        let o = FlowOptions::new(1100.0, 500.0);
        let result = arc(&labels(&["a", "b", "c", "d", "e"]), &o);
        for pair in result.nodes.windows(2) {
            assert!(pair[1].x > pair[0].x);
        }
        // The middle of the sweep is higher than both ends.
        assert!(result.nodes[2].y < result.nodes[0].y);
        assert!(result.nodes[2].y < result.nodes[4].y);
    }

    #[test]
    fn test_outline_indents_and_chains() {
        let o = FlowOptions::new(800.0, 900.0);
        let result = outline(&labels(&["a", "b", "c", "d"]), &[0, 1, 9, -2], &o);
        let xs: Vec<f64> = result.nodes.iter().map(|n| n.x).collect();
        assert_eq!(xs, vec![PAD, PAD + INDENT_WIDTH, PAD + 4.0 * INDENT_WIDTH, PAD]);
        assert_eq!(result.nodes[2].level, 4);
        // Chained in list order regardless of level.
        let pairs: Vec<(usize, usize)> = result.connectors.iter().map(|c| (c.from, c.to)).collect();
        assert_eq!(pairs, vec![(0, 1), (1, 2), (2, 3)]);
        assert!(result.connectors[0].waypoints.is_some());
    }

    #[test]
    fn test_outline_row_pitch() {
        // Room to spare: fixed pitch of one node plus the gap.
        let roomy = FlowOptions::new(800.0, 900.0);
        let result = outline(&labels(&["a", "b", "c"]), &[], &roomy);
        for pair in result.nodes.windows(2) {
            assert_eq!(pair[1].y - pair[0].y, roomy.node_height + roomy.gap);
        }

        // Too many rows for the canvas: the pitch shrinks so the last row still fits.
        let tight = FlowOptions::default();
        let names: Vec<String> = (0..8).map(|i| format!("step {i}")).collect();
        let result = outline(&names, &[], &tight);
        let pitch = result.nodes[1].y - result.nodes[0].y;
        assert!(pitch < tight.node_height + tight.gap);
        let last = result.nodes.last().unwrap();
        assert!(last.y + tight.node_height <= tight.height - PAD + 1e-9);
    }

    #[test]
    fn test_outline_missing_levels_default_to_zero() {
        let o = FlowOptions::default();
        let result = outline(&labels(&["a", "b"]), &[], &o);
        assert!(result.nodes.iter().all(|n| n.level == 0 && n.x == PAD));
        assert!(result.connectors[0].waypoints.is_none());
    }
}
