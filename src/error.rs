//! Error types for scene rendering.
//!
//! Layout never fails: degenerate input yields an empty [`LayoutResult`].
//! Everything that can go wrong while turning a scene into SVG surfaces
//! here as a [`SceneError`].
//!
//! [`LayoutResult`]: crate::layout::LayoutResult

use thiserror::Error;

/// The main error type for scene operations.
#[derive(Debug, Error)]
pub enum SceneError {
    /// An element names a type that has no adapter in the registry.
    #[error("unknown element type `{0}`")]
    UnknownType(String),

    /// A preset name that is not in the preset table.
    #[error("unknown preset `{0}`")]
    UnknownPreset(String),

    /// The scene itself is unusable (for example a zero-sized canvas).
    #[error("invalid scene: {0}")]
    InvalidScene(String),

    /// An adapter rejected the props of one element.
    #[error("invalid props for `{element}` element: {message}")]
    InvalidProp { element: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl SceneError {
    /// Create an `InvalidProp` error for an element type.
    pub fn invalid_prop(element: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidProp {
            element: element.into(),
            message: message.into(),
        }
    }
}
