//! Flow layout engine.
//!
//! Pure geometry: given labels (or a tree, fishbone or mindmap description)
//! and a [`LayoutKind`], compute node rectangles and connector segments.
//! Nothing here knows about colors, element types or SVG.
//!
//! Every layout clamps its node rectangles into the canvas first and only
//! then derives connectors from the final rectangles, so connector
//! endpoints always sit on node anchors.

mod fishbone;
mod mindmap;
mod sequence;
mod tree;

use std::f64::consts::PI;
use std::fmt;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Inner canvas padding shared by all layouts (px)
pub const PAD: f64 = 20.0;

/// Cosmetic tilt cycle handed to node adapters. Never used in position math.
const ROTATION_HINTS: [f64; 5] = [-2.0, 1.5, -1.0, 2.5, -1.5];

/// Arc layouts sweep 171 degrees.
pub const ARC_SWEEP: f64 = PI * 0.95;

/// A 2D point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One positioned node. Purely geometric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub label: String,
    /// Small cosmetic tilt in degrees (within ±4)
    pub rotation_hint_deg: f64,
    /// Indent level, tree depth, or 0 for flat layouts
    pub level: usize,
}

impl LayoutNode {
    fn new(label: &str, x: f64, y: f64, options: &FlowOptions) -> Self {
        Self {
            x,
            y,
            width: options.node_width,
            height: options.node_height,
            label: label.to_string(),
            rotation_hint_deg: 0.0,
            level: 0,
        }
    }

    fn with_rotation(mut self, index: usize) -> Self {
        self.rotation_hint_deg = rotation_hint(index);
        self
    }

    fn with_level(mut self, level: usize) -> Self {
        self.level = level;
        self
    }

    /// Move the rectangle so it lies inside the canvas wherever it fits.
    fn clamped(mut self, options: &FlowOptions) -> Self {
        self.x = self.x.clamp(0.0, (options.width - self.width).max(0.0));
        self.y = self.y.clamp(0.0, (options.height - self.height).max(0.0));
        self
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    pub fn top_center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y)
    }

    pub fn bottom_center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height)
    }

    pub fn left_center(&self) -> Point {
        Point::new(self.x, self.y + self.height / 2.0)
    }

    pub fn right_center(&self) -> Point {
        Point::new(self.x + self.width, self.y + self.height / 2.0)
    }
}

/// A routed edge between two nodes, referenced by index into
/// [`LayoutResult::nodes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConnector {
    pub from: usize,
    pub to: usize,
    pub from_x: f64,
    pub from_y: f64,
    pub to_x: f64,
    pub to_y: f64,
    /// Bend points, only for hierarchical layouts
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub waypoints: Option<Vec<Point>>,
}

impl LayoutConnector {
    fn new(from: usize, start: Point, to: usize, end: Point) -> Self {
        Self {
            from,
            to,
            from_x: start.x,
            from_y: start.y,
            to_x: end.x,
            to_y: end.y,
            waypoints: None,
        }
    }

    fn with_waypoints(mut self, waypoints: Vec<Point>) -> Self {
        self.waypoints = Some(waypoints);
        self
    }

    pub fn start(&self) -> Point {
        Point::new(self.from_x, self.from_y)
    }

    pub fn end(&self) -> Point {
        Point::new(self.to_x, self.to_y)
    }
}

/// An undirected decorative line, such as a fishbone spine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Output of one layout call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub nodes: Vec<LayoutNode>,
    pub connectors: Vec<LayoutConnector>,
    #[serde(default)]
    pub guides: Vec<Segment>,
}

impl LayoutResult {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Bounding box of all nodes as `(min_x, min_y, max_x, max_y)`.
    pub fn bounds(&self) -> Option<(f64, f64, f64, f64)> {
        let first = self.nodes.first()?;
        let init = (first.x, first.y, first.x + first.width, first.y + first.height);
        Some(self.nodes.iter().fold(init, |(x0, y0, x1, y1), n| {
            (
                x0.min(n.x),
                y0.min(n.y),
                x1.max(n.x + n.width),
                y1.max(n.y + n.height),
            )
        }))
    }
}

/// Layout strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    Linear,
    Zigzag,
    Vertical,
    Arc,
    Outline,
    OrgChart,
    Fishbone,
    Mindmap,
}

impl LayoutKind {
    pub const ALL: [LayoutKind; 8] = [
        LayoutKind::Linear,
        LayoutKind::Zigzag,
        LayoutKind::Vertical,
        LayoutKind::Arc,
        LayoutKind::Outline,
        LayoutKind::OrgChart,
        LayoutKind::Fishbone,
        LayoutKind::Mindmap,
    ];

    /// Parse a layout name. Unknown names fall back to [`LayoutKind::Linear`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().replace(|c: char| c == '-' || c == '_', "").as_str() {
            "linear" => Self::Linear,
            "zigzag" => Self::Zigzag,
            "vertical" => Self::Vertical,
            "arc" => Self::Arc,
            "outline" => Self::Outline,
            "orgchart" => Self::OrgChart,
            "fishbone" => Self::Fishbone,
            "mindmap" => Self::Mindmap,
            _ => {
                warn!(layout = name; "Unknown layout kind, falling back to linear");
                Self::Linear
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Zigzag => "zigzag",
            Self::Vertical => "vertical",
            Self::Arc => "arc",
            Self::Outline => "outline",
            Self::OrgChart => "orgchart",
            Self::Fishbone => "fishbone",
            Self::Mindmap => "mindmap",
        }
    }
}

impl fmt::Display for LayoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A rooted tree for org charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub label: String,
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: TreeNode) -> Self {
        self.children.push(child);
        self
    }
}

/// Cause-and-effect description: a theme plus causes above and below the spine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FishboneSpec {
    pub theme: String,
    #[serde(default)]
    pub causes_top: Vec<String>,
    #[serde(default)]
    pub causes_bottom: Vec<String>,
}

/// A center topic with branches radiating around it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MindmapSpec {
    pub center: String,
    #[serde(default)]
    pub branches: Vec<String>,
}

/// Layout input: a flat label list or one of the structured shapes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowInput {
    Labels {
        labels: Vec<String>,
        /// Outline indent levels, parallel to `labels`
        #[serde(default)]
        levels: Option<Vec<i64>>,
    },
    Tree(TreeNode),
    Fishbone(FishboneSpec),
    Mindmap(MindmapSpec),
}

impl FlowInput {
    pub fn labels<S: Into<String>>(labels: impl IntoIterator<Item = S>) -> Self {
        Self::Labels {
            labels: labels.into_iter().map(Into::into).collect(),
            levels: None,
        }
    }

    pub fn outline<S: Into<String>>(labels: impl IntoIterator<Item = S>, levels: Vec<i64>) -> Self {
        Self::Labels {
            labels: labels.into_iter().map(Into::into).collect(),
            levels: Some(levels),
        }
    }

    pub fn mindmap<S: Into<String>>(center: S, branches: impl IntoIterator<Item = S>) -> Self {
        Self::Mindmap(MindmapSpec {
            center: center.into(),
            branches: branches.into_iter().map(Into::into).collect(),
        })
    }

    pub fn fishbone<S: Into<String>>(
        theme: S,
        causes_top: impl IntoIterator<Item = S>,
        causes_bottom: impl IntoIterator<Item = S>,
    ) -> Self {
        Self::Fishbone(FishboneSpec {
            theme: theme.into(),
            causes_top: causes_top.into_iter().map(Into::into).collect(),
            causes_bottom: causes_bottom.into_iter().map(Into::into).collect(),
        })
    }

    /// All labels in reading order: tree in pre-order, fishbone causes
    /// before the theme, mindmap center before its branches.
    pub fn flatten_labels(&self) -> Vec<String> {
        match self {
            Self::Labels { labels, .. } => labels.clone(),
            Self::Tree(root) => tree::flatten(root)
                .into_iter()
                .map(|n| n.label.to_string())
                .collect(),
            Self::Fishbone(spec) => spec
                .causes_top
                .iter()
                .chain(&spec.causes_bottom)
                .chain(std::iter::once(&spec.theme))
                .cloned()
                .collect(),
            Self::Mindmap(spec) => std::iter::once(&spec.center)
                .chain(&spec.branches)
                .cloned()
                .collect(),
        }
    }
}

/// Canvas and node geometry for a layout call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowOptions {
    pub width: f64,
    pub height: f64,
    pub node_width: f64,
    pub node_height: f64,
    /// Spacing reserved between a connector end and a node border
    pub gap: f64,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            width: 1100.0,
            height: 400.0,
            node_width: 160.0,
            node_height: 110.0,
            gap: 28.0,
        }
    }
}

impl FlowOptions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_node_size(mut self, node_width: f64, node_height: f64) -> Self {
        self.node_width = node_width;
        self.node_height = node_height;
        self
    }

    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }
}

/// Compute node rectangles and connectors for `input` laid out as `kind`.
///
/// Never fails. Empty label lists give an empty result. When the input
/// shape does not match the kind (labels for an org chart, a tree for an
/// arc, ...) the flattened labels are laid out linearly.
pub fn compute_flow_layout(input: &FlowInput, kind: LayoutKind, options: &FlowOptions) -> LayoutResult {
    let result = match (kind, input) {
        (
            LayoutKind::Linear
            | LayoutKind::Zigzag
            | LayoutKind::Vertical
            | LayoutKind::Arc
            | LayoutKind::Outline,
            FlowInput::Labels { labels, .. },
        ) if labels.len() == 1 => {
            sequence::single(&labels[0], options)
        }
        (LayoutKind::Linear, FlowInput::Labels { labels, .. }) => sequence::linear(labels, options),
        (LayoutKind::Zigzag, FlowInput::Labels { labels, .. }) => sequence::zigzag(labels, options),
        (LayoutKind::Vertical, FlowInput::Labels { labels, .. }) => {
            sequence::vertical(labels, options)
        }
        (LayoutKind::Arc, FlowInput::Labels { labels, .. }) => sequence::arc(labels, options),
        (LayoutKind::Outline, FlowInput::Labels { labels, levels }) => {
            sequence::outline(labels, levels.as_deref().unwrap_or(&[]), options)
        }
        (LayoutKind::OrgChart, FlowInput::Tree(root)) => tree::orgchart(root, options),
        (LayoutKind::Fishbone, FlowInput::Fishbone(spec)) => fishbone::layout(spec, options),
        (LayoutKind::Mindmap, FlowInput::Mindmap(spec)) => mindmap::layout(spec, options),
        (kind, input) => {
            warn!(layout = kind.name(); "Input shape does not match layout kind, using linear");
            let labels = input.flatten_labels();
            match labels.len() {
                1 => sequence::single(&labels[0], options),
                _ => sequence::linear(&labels, options),
            }
        }
    };

    debug!(
        layout = kind.name(),
        nodes_len = result.nodes.len(),
        connectors_len = result.connectors.len();
        "Flow layout computed",
    );
    result
}

fn rotation_hint(index: usize) -> f64 {
    ROTATION_HINTS[index % ROTATION_HINTS.len()]
}

/// Position of item `index` of `count` spread evenly over `[lo, hi]`.
/// A single item sits in the middle.
fn spread(count: usize, index: usize, lo: f64, hi: f64) -> f64 {
    if count <= 1 {
        (lo + hi) / 2.0
    } else {
        lo + (hi - lo) * index as f64 / (count - 1) as f64
    }
}
