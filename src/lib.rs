//! flowscene - Render declarative scenes to SVG and lay out flow diagrams
//!
//! A scene is a canvas size plus an ordered list of typed elements. Each
//! element type is drawn by an adapter looked up in a [`Registry`]; the
//! flow layout engine computes node rectangles and connectors that the
//! [`bridge`] turns back into scene elements.
//!
//! # Example
//!
//! ```rust
//! use flowscene::{build_flow_elements, render, FlowInput, FlowOptions, LayoutKind, RenderConfig, SceneSpec};
//!
//! let options = FlowOptions::new(1100.0, 240.0);
//! let input = FlowInput::labels(["Get bread", "Add spread", "Serve"]);
//! let elements = build_flow_elements(&input, LayoutKind::Linear, &options, "postit");
//! let scene = SceneSpec::new(options.width, options.height).with_elements(elements);
//!
//! let svg = render(&scene, &RenderConfig::default()).unwrap();
//! assert_eq!(svg.matches(r#"<g class="postit">"#).count(), 3);
//! ```
//!
//! # Layouts
//!
//! - Sequences: linear, zigzag, vertical, arc, outline
//! - Trees: orgchart
//! - Structured: fishbone, mindmap

pub mod bridge;
pub mod config;
pub mod error;
pub mod layout;
pub mod presets;
pub mod svg;
pub mod types;

use lazy_static::lazy_static;

pub use bridge::{build_flow_elements, FlowElementsBuilder};
pub use config::RenderConfig;
pub use error::SceneError;
pub use layout::{
    compute_flow_layout, FlowInput, FlowOptions, LayoutConnector, LayoutKind, LayoutNode,
    LayoutResult, TreeNode,
};
pub use presets::{PresetTable, BUILTIN_PRESETS};
pub use svg::{render_preset, render_scene, ColorScheme, Registry, ThemeTokens};
pub use types::{Element, Props, SceneSpec};

lazy_static! {
    static ref BUILTIN_REGISTRY: Registry = Registry::with_builtins();
}

/// Render a scene using the built-in element types.
///
/// Use [`render_scene`] with your own [`Registry`] to add custom types.
pub fn render(spec: &SceneSpec, config: &RenderConfig) -> Result<String, SceneError> {
    render_scene(spec, config, &BUILTIN_REGISTRY)
}

/// Render one of the [`BUILTIN_PRESETS`] by name.
///
/// # Example
/// ```rust
/// let svg = flowscene::render_builtin_preset("postit_flow_mindmap", &Default::default()).unwrap();
/// assert!(svg.starts_with("<svg"));
/// ```
pub fn render_builtin_preset(name: &str, config: &RenderConfig) -> Result<String, SceneError> {
    render_preset(name, config, &BUILTIN_REGISTRY, &BUILTIN_PRESETS)
}
