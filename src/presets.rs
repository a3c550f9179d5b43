//! Named, canned scenes.
//!
//! [`BUILTIN_PRESETS`] is built once on first use and never mutated, so it
//! can be shared by concurrent renders.

use std::collections::HashMap;

use lazy_static::lazy_static;
use serde_json::json;

use crate::bridge::build_flow_elements;
use crate::layout::{FlowInput, FlowOptions, LayoutKind, TreeNode};
use crate::types::{Element, SceneSpec};

lazy_static! {
    /// Every built-in preset, keyed by name.
    pub static ref BUILTIN_PRESETS: PresetTable = PresetTable::builtin();
}

/// A read-only map from preset name to scene.
#[derive(Debug, Clone, Default)]
pub struct PresetTable {
    scenes: HashMap<String, SceneSpec>,
}

impl PresetTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a preset, returning the scene it replaced.
    pub fn insert(&mut self, name: impl Into<String>, spec: SceneSpec) -> Option<SceneSpec> {
        self.scenes.insert(name.into(), spec)
    }

    pub fn get(&self, name: &str) -> Option<&SceneSpec> {
        self.scenes.get(name)
    }

    /// Preset names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.scenes.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// The table behind [`BUILTIN_PRESETS`].
    pub fn builtin() -> Self {
        let mut table = Self::new();

        let sandwich = ["Get bread", "Add spread", "Add filling", "Close it", "Serve"];
        table.insert(
            "postit_flow",
            flow_scene(FlowInput::labels(sandwich), LayoutKind::Linear, FlowOptions::new(1100.0, 240.0)),
        );
        table.insert(
            "postit_flow_zigzag",
            flow_scene(
                FlowInput::labels(["Sign up", "Verify email", "Pick a plan", "Invite team", "Ship"]),
                LayoutKind::Zigzag,
                FlowOptions::new(1100.0, 400.0),
            ),
        );
        table.insert(
            "postit_flow_vertical",
            flow_scene(
                FlowInput::labels(["Report bug", "Reproduce", "Fix", "Release"]),
                LayoutKind::Vertical,
                FlowOptions::new(400.0, 640.0),
            ),
        );
        table.insert(
            "postit_flow_arc",
            flow_scene(
                FlowInput::labels(["Idea", "Research", "Prototype", "Test", "Launch"]),
                LayoutKind::Arc,
                FlowOptions::new(1100.0, 480.0),
            ),
        );
        table.insert(
            "postit_flow_outline",
            flow_scene(
                FlowInput::outline(
                    ["Launch plan", "Marketing", "Blog post", "Newsletter", "Engineering", "Release notes"],
                    vec![0, 1, 2, 2, 1, 2],
                ),
                LayoutKind::Outline,
                FlowOptions::new(700.0, 760.0).with_node_size(180.0, 90.0),
            ),
        );
        let org = TreeNode::new("CEO")
            .with_child(
                TreeNode::new("CTO")
                    .with_child(TreeNode::new("Platform"))
                    .with_child(TreeNode::new("Apps")),
            )
            .with_child(TreeNode::new("CFO").with_child(TreeNode::new("Finance")))
            .with_child(TreeNode::new("COO"));
        table.insert(
            "postit_flow_orgchart",
            flow_scene(
                FlowInput::Tree(org),
                LayoutKind::OrgChart,
                FlowOptions::new(1100.0, 560.0).with_node_size(150.0, 90.0),
            ),
        );
        table.insert(
            "postit_flow_fishbone",
            flow_scene(
                FlowInput::fishbone(
                    "Late deliveries",
                    ["Traffic", "Bad routes", "Old vans"],
                    ["Understaffed", "Late orders"],
                ),
                LayoutKind::Fishbone,
                FlowOptions::new(1100.0, 560.0).with_node_size(140.0, 80.0),
            ),
        );
        table.insert(
            "postit_flow_mindmap",
            flow_scene(
                FlowInput::mindmap("Trip", ["Flights", "Hotel", "Packing", "Budget", "Itinerary"]),
                LayoutKind::Mindmap,
                FlowOptions::new(900.0, 640.0).with_node_size(140.0, 90.0),
            ),
        );

        table.insert("support_chat", support_chat());
        table.insert("checkout", checkout());
        table.insert("ticket_tracking", ticket_tracking());
        table.insert("account_modal", account_modal());
        table
    }
}

fn flow_scene(input: FlowInput, kind: LayoutKind, options: FlowOptions) -> SceneSpec {
    SceneSpec::new(options.width, options.height)
        .with_elements(build_flow_elements(&input, kind, &options, "postit"))
}

fn window(title: &str, url: &str, width: f64, height: f64) -> Element {
    Element::new("browser_window", 20.0, 20.0)
        .with_size(width - 40.0, height - 40.0)
        .with_prop("title", title)
        .with_prop("url", url)
}

fn support_chat() -> SceneSpec {
    SceneSpec::new(900.0, 620.0).with_elements([
        window("Support", "help.example.com/chat", 900.0, 620.0),
        Element::new("app_header", 20.0, 56.0)
            .with_size(860.0, 64.0)
            .with_prop("title", "Helpdesk")
            .with_prop("subtitle", "Typically replies in 2 minutes")
            .with_prop("initials", "HD"),
        Element::new("card", 48.0, 148.0)
            .with_size(360.0, 150.0)
            .with_prop("title", "Order #4821")
            .with_prop("badge", "Shipped")
            .with_prop("body", "Two items, arriving Thursday. Tracking updates every few hours."),
        Element::new("status_pill", 48.0, 320.0)
            .with_prop("label", "Agent online")
            .with_prop("status", "success"),
        Element::new("chat_panel", 440.0, 148.0)
            .with_size(412.0, 430.0)
            .with_prop("title", "Chat with Sam")
            .with_prop(
                "messages",
                json!([
                    {"role": "user", "text": "Where is my order?"},
                    {"role": "assistant", "text": "It left the warehouse this morning and should arrive Thursday."},
                    {"role": "user", "text": "Great, thanks!"},
                ]),
            ),
    ])
}

fn checkout() -> SceneSpec {
    SceneSpec::new(900.0, 620.0).with_elements([
        window("Checkout", "shop.example.com/checkout", 900.0, 620.0),
        Element::new("progress_bar", 60.0, 80.0)
            .with_size(780.0, 40.0)
            .with_prop("label", "Step 2 of 3")
            .with_prop("value", 0.66),
        Element::new("form", 60.0, 140.0)
            .with_size(380.0, 380.0)
            .with_prop("title", "Payment details")
            .with_prop(
                "fields",
                json!([
                    {"label": "Name on card", "value": "Alex Kim"},
                    {"label": "Card number", "placeholder": "1234 5678 9012 3456"},
                    "Expiry",
                ]),
            )
            .with_prop("submit", "Pay $42.00"),
        Element::new("transaction", 470.0, 140.0)
            .with_prop("merchant", "Coffee beans")
            .with_prop("amount", 18.5)
            .with_prop("date", "Today"),
        Element::new("transaction", 470.0, 214.0)
            .with_prop("merchant", "Grinder")
            .with_prop("amount", 23.5)
            .with_prop("date", "Today")
            .with_prop("status", "pending"),
        Element::new("toast", 520.0, 520.0)
            .with_prop("message", "Card saved")
            .with_prop("variant", "success"),
    ])
}

fn ticket_tracking() -> SceneSpec {
    SceneSpec::new(900.0, 560.0).with_elements([
        window("Tickets", "support.example.com/tickets/118", 900.0, 560.0),
        Element::new("app_header", 20.0, 56.0)
            .with_size(860.0, 64.0)
            .with_prop("title", "Ticket #118")
            .with_prop("subtitle", "Printer on floor 3 is jammed"),
        Element::new("ticket_status", 60.0, 150.0)
            .with_size(780.0, 72.0)
            .with_prop("steps", json!(["Opened", "Triaged", "In progress", "Resolved"]))
            .with_prop("current", 2),
        Element::new("card", 60.0, 260.0)
            .with_size(380.0, 160.0)
            .with_prop("title", "Latest update")
            .with_prop("body", "A technician is on the way with a replacement roller.")
            .with_prop("accent", true),
        Element::new("skeleton", 470.0, 270.0)
            .with_size(360.0, 120.0)
            .with_prop("lines", 4),
        Element::new("status_pill", 60.0, 450.0)
            .with_prop("label", "In progress")
            .with_prop("status", "active"),
    ])
}

fn account_modal() -> SceneSpec {
    SceneSpec::new(900.0, 560.0).with_elements([
        window("Settings", "app.example.com/settings/account", 900.0, 560.0),
        Element::new("card", 60.0, 90.0)
            .with_size(780.0, 120.0)
            .with_prop("title", "Account")
            .with_prop("body", "alex@example.com, member since 2021"),
        Element::new("skeleton", 60.0, 240.0)
            .with_size(780.0, 100.0),
        Element::new("modal", 240.0, 200.0)
            .with_prop("title", "Delete account?")
            .with_prop("body", "All projects and files will be removed. This cannot be undone.")
            .with_prop("confirm", "Delete")
            .with_prop("destructive", true),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_names() {
        let names = BUILTIN_PRESETS.names();
        assert_eq!(names.len(), 12);
        assert!(names.contains(&"postit_flow"));
        assert!(names.contains(&"account_modal"));
    }

    #[test]
    fn test_postit_flow_shape() {
        let spec = BUILTIN_PRESETS.get("postit_flow").unwrap();
        let postits = spec.elements.iter().filter(|e| e.kind == "postit").count();
        let connectors = spec.elements.iter().filter(|e| e.kind == "connector").count();
        assert_eq!((postits, connectors), (5, 4));
    }

    #[test]
    fn test_insert_replaces() {
        let mut table = PresetTable::new();
        assert!(table.insert("a", SceneSpec::new(1.0, 1.0)).is_none());
        let old = table.insert("a", SceneSpec::new(2.0, 2.0)).unwrap();
        assert_eq!(old.width, 1.0);
        assert_eq!(table.len(), 1);
        assert!(table.get("b").is_none());
    }
}
