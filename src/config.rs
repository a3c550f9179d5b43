//! Render-time configuration.
//!
//! [`RenderConfig`] implements [`serde::Deserialize`] so callers can load it
//! from JSON alongside their scenes. Theme tokens are derived from it once
//! per render call.
//!
//! # Example
//!
//! ```
//! # use flowscene::config::RenderConfig;
//! let config = RenderConfig::from_json(r#"{"transparent": true}"#).unwrap();
//! assert!(config.transparent());
//! assert!(config.shadows());
//! ```

use serde::Deserialize;

use crate::error::SceneError;
use crate::svg::{ColorScheme, ThemeTokens};

/// Options that apply to a whole render.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Color scheme the theme tokens are derived from.
    scheme: ColorScheme,

    /// Skip the background rect so the SVG composes over any page.
    transparent: bool,

    /// Emit a real drop shadow; when off the shadow filter is an identity.
    shadows: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            scheme: ColorScheme::default(),
            transparent: false,
            shadows: true,
        }
    }
}

impl RenderConfig {
    /// Creates a configuration using the given scheme and default options.
    pub fn new(scheme: ColorScheme) -> Self {
        Self {
            scheme,
            ..Self::default()
        }
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_transparent(mut self, transparent: bool) -> Self {
        self.transparent = transparent;
        self
    }

    pub fn with_shadows(mut self, shadows: bool) -> Self {
        self.shadows = shadows;
        self
    }

    pub fn scheme(&self) -> &ColorScheme {
        &self.scheme
    }

    pub fn transparent(&self) -> bool {
        self.transparent
    }

    pub fn shadows(&self) -> bool {
        self.shadows
    }

    /// Derive the theme tokens for one render.
    pub fn tokens(&self) -> ThemeTokens {
        ThemeTokens::from_scheme(&self.scheme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RenderConfig::default();
        assert!(!config.transparent());
        assert!(config.shadows());
        assert_eq!(config.scheme(), &ColorScheme::light());
    }

    #[test]
    fn test_nested_scheme_from_json() {
        let config =
            RenderConfig::from_json(r##"{"scheme": {"error": "#FF0000"}, "shadows": false}"##)
                .unwrap();
        assert!(!config.shadows());
        assert_eq!(config.tokens().accent_error, "#FF0000");
        assert_eq!(config.tokens().accent_success, ColorScheme::light().success);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(matches!(
            RenderConfig::from_json("{"),
            Err(SceneError::Json(_))
        ));
    }
}
