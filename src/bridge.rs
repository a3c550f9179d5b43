//! Flow-elements bridge: turns a layout into scene elements.
//!
//! Layout geometry stays in [`crate::layout`]; this module only decides how
//! nodes and connectors become typed [`Element`]s, so the same layouts can
//! drive sticky notes, cards or any custom registered type.

use log::{debug, warn};
use serde_json::{json, Value};

use crate::layout::{compute_flow_layout, FlowInput, FlowOptions, LayoutKind, LayoutNode, LayoutResult};
use crate::types::{Element, Props};

/// Computes the props of a node element from its layout node.
pub type NodePropsFn = Box<dyn Fn(&LayoutNode) -> Props + Send + Sync>;

/// Builds node and connector elements from a flow layout.
pub struct FlowElementsBuilder {
    node_type: String,
    node_props: Option<NodePropsFn>,
    connector_type: String,
}

impl FlowElementsBuilder {
    /// A builder emitting `node_type` nodes joined by `connector` elements.
    pub fn new(node_type: impl Into<String>) -> Self {
        Self {
            node_type: node_type.into(),
            node_props: None,
            connector_type: "connector".to_string(),
        }
    }

    pub fn with_node_props<F>(mut self, node_props: F) -> Self
    where
        F: Fn(&LayoutNode) -> Props + Send + Sync + 'static,
    {
        self.node_props = Some(Box::new(node_props));
        self
    }

    pub fn with_connector_type(mut self, connector_type: impl Into<String>) -> Self {
        self.connector_type = connector_type.into();
        self
    }

    /// Lay `input` out and convert the result.
    pub fn build(&self, input: &FlowInput, kind: LayoutKind, options: &FlowOptions) -> Vec<Element> {
        self.elements_from_layout(&compute_flow_layout(input, kind, options))
    }

    /// Convert an already computed layout.
    ///
    /// Output order: all nodes, then connectors, then guides. Connectors that
    /// reference a node index outside the layout are dropped.
    pub fn elements_from_layout(&self, layout: &LayoutResult) -> Vec<Element> {
        let mut elements = Vec::with_capacity(
            layout.nodes.len() + layout.connectors.len() + layout.guides.len(),
        );

        for node in &layout.nodes {
            elements.push(
                Element::new(self.node_type.as_str(), node.x, node.y)
                    .with_size(node.width, node.height)
                    .with_props(self.props_for(node)),
            );
        }

        let node_count = layout.nodes.len();
        let mut dropped = 0;
        for connector in &layout.connectors {
            if connector.from >= node_count || connector.to >= node_count {
                warn!(
                    from = connector.from,
                    to = connector.to,
                    nodes = node_count;
                    "Dropping connector with a missing endpoint node",
                );
                dropped += 1;
                continue;
            }
            let mut element = Element::new(self.connector_type.as_str(), connector.from_x, connector.from_y)
                .with_prop("to_x", connector.to_x)
                .with_prop("to_y", connector.to_y);
            if let Some(waypoints) = &connector.waypoints {
                let points: Vec<Value> = waypoints.iter().map(|p| json!([p.x, p.y])).collect();
                element = element.with_prop("waypoints", points);
            }
            elements.push(element);
        }

        for guide in &layout.guides {
            elements.push(
                Element::new(self.connector_type.as_str(), guide.from.x, guide.from.y)
                    .with_prop("to_x", guide.to.x)
                    .with_prop("to_y", guide.to.y)
                    .with_prop("arrow", false),
            );
        }

        debug!(
            node_type = self.node_type.as_str(),
            elements = elements.len(),
            dropped = dropped;
            "Built flow elements",
        );
        elements
    }

    fn props_for(&self, node: &LayoutNode) -> Props {
        match &self.node_props {
            Some(f) => f(node),
            None if self.node_type == "postit" => postit_props(node),
            None => Props::new(),
        }
    }
}

impl std::fmt::Debug for FlowElementsBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowElementsBuilder")
            .field("node_type", &self.node_type)
            .field("node_props", &self.node_props.is_some())
            .field("connector_type", &self.connector_type)
            .finish()
    }
}

/// Default props for sticky-note nodes.
pub fn postit_props(node: &LayoutNode) -> Props {
    let mut props = Props::new();
    props.insert("label".to_string(), node.label.clone().into());
    props.insert("rotation_deg".to_string(), node.rotation_hint_deg.into());
    props
}

/// Shorthand for the common case: default props, `connector` edges.
pub fn build_flow_elements(
    input: &FlowInput,
    kind: LayoutKind,
    options: &FlowOptions,
    node_type: &str,
) -> Vec<Element> {
    FlowElementsBuilder::new(node_type).build(input, kind, options)
}
