//! Fishbone (cause-and-effect) layout.
//!
//! The theme node sits at the right edge on a horizontal spine. Causes
//! above and below the spine are spread along it, each joined to the spine
//! by one straight rib leaning `RIB_ANGLE` radians toward the head.

use super::{
    FishboneSpec, FlowOptions, LayoutConnector, LayoutNode, LayoutResult, Point, Segment, PAD,
};

/// Rib tilt from vertical (radians)
pub const RIB_ANGLE: f64 = 0.55;

/// Ribs stop this far short of the spine so the arrowhead stays visible.
const SPINE_CLEARANCE: f64 = 4.0;

const THEME_INDEX: usize = 0;

pub(super) fn layout(spec: &FishboneSpec, o: &FlowOptions) -> LayoutResult {
    let tan = RIB_ANGLE.tan();
    let spine_y = o.height / 2.0;
    let theme = LayoutNode::new(
        &spec.theme,
        o.width - PAD - o.node_width,
        (o.height - o.node_height) / 2.0,
        o,
    )
    .clamped(o);

    let top_y = PAD;
    let bottom_y = (o.height - PAD - o.node_height).max(top_y);
    // Vertical extent of a rib, identical above and below the spine.
    let rise = (spine_y - SPINE_CLEARANCE - (top_y + o.node_height)).max(0.0);
    let lean = rise * tan;

    // Spine x-range the rib feet are spread over.
    let lo = PAD + o.node_width / 2.0 + lean;
    let hi = (theme.x - o.gap).max(lo);
    let foot_x = |slot: usize, count: usize| lo + (slot as f64 + 0.5) * (hi - lo) / count as f64;

    let mut nodes = vec![theme.clone()];
    let mut connectors = Vec::new();

    let p = spec.causes_top.len();
    for (j, label) in spec.causes_top.iter().enumerate() {
        let index = nodes.len();
        let node_x = foot_x(j, p) - lean - o.node_width / 2.0;
        let node = LayoutNode::new(label, node_x, top_y, o)
            .with_rotation(index)
            .with_level(1)
            .clamped(o);
        let start = node.bottom_center();
        let dy = (spine_y - SPINE_CLEARANCE - start.y).max(0.0);
        let end = Point::new(start.x + dy * tan, start.y + dy);
        connectors.push(LayoutConnector::new(index, start, THEME_INDEX, end));
        nodes.push(node);
    }

    let q = spec.causes_bottom.len();
    for (j, label) in spec.causes_bottom.iter().enumerate() {
        let index = nodes.len();
        let node_x = foot_x(j, q) - lean - o.node_width / 2.0;
        let node = LayoutNode::new(label, node_x, bottom_y, o)
            .with_rotation(index)
            .with_level(1)
            .clamped(o);
        let start = node.top_center();
        let dy = (start.y - spine_y - SPINE_CLEARANCE).max(0.0);
        let end = Point::new(start.x + dy * tan, start.y - dy);
        connectors.push(LayoutConnector::new(index, start, THEME_INDEX, end));
        nodes.push(node);
    }

    let spine = Segment {
        from: Point::new(PAD, spine_y),
        to: theme.left_center(),
    };

    LayoutResult {
        nodes,
        connectors,
        guides: vec![spine],
    }
}
