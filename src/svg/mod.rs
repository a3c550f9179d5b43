//! SVG side of the crate: element registry, built-in adapters and the
//! scene renderer.
//!
//! Pure string building, no DOM manipulation.

pub mod adapters;
mod registry;
mod renderer;
pub mod styles;
mod theme;
pub mod util;

pub use adapters::{parse_waypoints, BUILTIN_TYPES, POSTIT_PALETTE};
pub use registry::{Adapter, Registry};
pub use renderer::{render_preset, render_scene};
pub use theme::{
    rgba, ColorScheme, ThemeTokens, ACCENT_GRADIENT_ID, ARROW_MARKER_ID, SHADOW_FILTER_ID,
};
