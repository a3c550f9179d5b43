//! Org-chart layout: one row per tree depth, parents linked to children
//! with stepped connectors.

use super::{spread, FlowOptions, LayoutConnector, LayoutNode, LayoutResult, Point, TreeNode, PAD};

/// A tree node flattened to pre-order position.
#[derive(Debug, Clone, PartialEq)]
pub(super) struct FlatNode<'a> {
    pub label: &'a str,
    pub depth: usize,
    pub parent: Option<usize>,
}

/// Pre-order flattening with an explicit stack. A parent's index is always
/// smaller than its children's.
pub(super) fn flatten(root: &TreeNode) -> Vec<FlatNode<'_>> {
    let mut flat = Vec::new();
    let mut stack: Vec<(&TreeNode, usize, Option<usize>)> = vec![(root, 0, None)];

    while let Some((node, depth, parent)) = stack.pop() {
        let index = flat.len();
        flat.push(FlatNode {
            label: &node.label,
            depth,
            parent,
        });
        // Reversed so the first child is popped first.
        for child in node.children.iter().rev() {
            stack.push((child, depth + 1, Some(index)));
        }
    }
    flat
}

pub(super) fn orgchart(root: &TreeNode, o: &FlowOptions) -> LayoutResult {
    let flat = flatten(root);
    let row_count = flat.iter().map(|n| n.depth).max().unwrap_or(0) + 1;

    let mut rows: Vec<Vec<usize>> = vec![Vec::new(); row_count];
    for (index, node) in flat.iter().enumerate() {
        rows[node.depth].push(index);
    }

    // Slot of each node within its row, indexed like `flat`.
    let mut slots = vec![(0usize, 0usize); flat.len()];
    for row in &rows {
        for (slot, &index) in row.iter().enumerate() {
            slots[index] = (slot, row.len());
        }
    }

    let usable_width = o.width - 2.0 * PAD;
    let nodes: Vec<LayoutNode> = flat
        .iter()
        .enumerate()
        .map(|(index, node)| {
            let (slot, row_len) = slots[index];
            let slot_width = usable_width / row_len as f64;
            let x = PAD + (slot as f64 + 0.5) * slot_width - o.node_width / 2.0;
            let y = spread(row_count, node.depth, PAD, o.height - PAD - o.node_height);
            LayoutNode::new(node.label, x, y, o)
                .with_rotation(index)
                .with_level(node.depth)
                .clamped(o)
        })
        .collect();

    let connectors = flat
        .iter()
        .enumerate()
        .filter_map(|(index, node)| node.parent.map(|parent| (parent, index)))
        .map(|(parent, child)| {
            let start = nodes[parent].bottom_center();
            let end = nodes[child].top_center();
            let mid_y = (start.y + end.y) / 2.0;
            LayoutConnector::new(parent, start, child, end).with_waypoints(vec![
                Point::new(start.x, mid_y),
                Point::new(end.x, mid_y),
            ])
        })
        .collect();

    LayoutResult {
        nodes,
        connectors,
        ..LayoutResult::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> TreeNode {
        TreeNode::new("CEO")
            .with_child(
                TreeNode::new("CTO")
                    .with_child(TreeNode::new("Eng"))
                    .with_child(TreeNode::new("QA")),
            )
            .with_child(TreeNode::new("CFO").with_child(TreeNode::new("Finance")))
    }

    #[test]
    fn test_flatten_pre_order() {
        let tree = sample_tree();
        let flat = flatten(&tree);
        let labels: Vec<_> = flat.iter().map(|n| n.label).collect();
        assert_eq!(labels, vec!["CEO", "CTO", "Eng", "QA", "CFO", "Finance"]);
        assert_eq!(flat[2].parent, Some(1));
        assert_eq!(flat[4].parent, Some(0));
        assert_eq!(flat[5].depth, 2);
    }

    #[test]
    fn test_orgchart_rows_and_edges() {
        let o = FlowOptions::new(1100.0, 600.0);
        let result = orgchart(&sample_tree(), &o);
        assert_eq!(result.nodes.len(), 6);
        assert_eq!(result.connectors.len(), 5);
        for c in &result.connectors {
            assert_eq!(result.nodes[c.from].level + 1, result.nodes[c.to].level);
            assert_eq!(c.start(), result.nodes[c.from].bottom_center());
            assert_eq!(c.end(), result.nodes[c.to].top_center());
            assert_eq!(c.waypoints.as_ref().map(Vec::len), Some(2));
        }
        // Same depth, same row.
        assert_eq!(result.nodes[1].y, result.nodes[4].y);
        assert_eq!(result.nodes[0].y, PAD);
        assert_eq!(result.nodes[5].y, 600.0 - PAD - o.node_height);
    }

    #[test]
    fn test_root_only_is_centered() {
        let o = FlowOptions::new(800.0, 400.0);
        let result = orgchart(&TreeNode::new("Solo"), &o);
        assert_eq!(result.nodes.len(), 1);
        assert!(result.connectors.is_empty());
        assert_eq!(result.nodes[0].center(), Point::new(400.0, 200.0));
    }

    #[test]
    fn test_deep_tree_does_not_recurse() {
        let mut tree = TreeNode::new("leaf");
        for depth in 0..2_000 {
            tree = TreeNode::new(format!("n{depth}")).with_child(tree);
        }
        let flat = flatten(&tree);
        assert_eq!(flat.len(), 2_001);
        assert_eq!(flat.last().map(|n| n.depth), Some(2_000));
    }
}
