//! Theme system: flattens a caller's color scheme into style tokens.
//!
//! Architecture:
//!   - [`ColorScheme`] is the external input. Every field is optional on the
//!     wire and falls back to the light scheme.
//!   - [`ThemeTokens`] is the flat, immutable token set that adapters read.
//!   - [`ThemeTokens::defs`] renders the shared `<defs>` content (shadow
//!     filter, accent gradient, arrowhead marker).

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::styles::ArrowHead;
use super::util::escape_xml;

lazy_static! {
    static ref RE_HEX_COLOR: Regex =
        Regex::new(r"^#(?:([0-9a-fA-F]{6})|([0-9a-fA-F]{3}))$").unwrap();
}

/// Id of the drop-shadow filter in the shared `<defs>` block.
pub const SHADOW_FILTER_ID: &str = "fs-shadow";
/// Id of the accent gradient in the shared `<defs>` block.
pub const ACCENT_GRADIENT_ID: &str = "fs-accent-gradient";
/// Id of the arrowhead marker in the shared `<defs>` block.
pub const ARROW_MARKER_ID: &str = "fs-arrow";

/// Caller-supplied color scheme.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    /// Brand / accent color
    pub primary: String,
    /// Page and card background
    pub background: String,
    /// Secondary surface (title bars, input fields)
    pub background_secondary: String,
    pub text: String,
    pub text_secondary: String,
    pub text_tertiary: String,
    /// Hairline borders and dividers
    pub border: String,
    /// Control outlines
    pub border_strong: String,
    pub success: String,
    pub error: String,
    pub font_family: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self::light()
    }
}

impl ColorScheme {
    pub fn light() -> Self {
        Self {
            primary: "#4F46E5".to_string(),
            background: "#FFFFFF".to_string(),
            background_secondary: "#F4F4F7".to_string(),
            text: "#1F2330".to_string(),
            text_secondary: "#5B6172".to_string(),
            text_tertiary: "#9096A6".to_string(),
            border: "#E4E6EC".to_string(),
            border_strong: "#C9CDD6".to_string(),
            success: "#16A34A".to_string(),
            error: "#DC2626".to_string(),
            font_family: "Inter, system-ui, sans-serif".to_string(),
        }
    }

    pub fn dark() -> Self {
        Self {
            primary: "#818CF8".to_string(),
            background: "#15171E".to_string(),
            background_secondary: "#1F222B".to_string(),
            text: "#ECEDF1".to_string(),
            text_secondary: "#A8ADBB".to_string(),
            text_tertiary: "#6E7383".to_string(),
            border: "#2B2F3A".to_string(),
            border_strong: "#3D4250".to_string(),
            success: "#22C55E".to_string(),
            error: "#F87171".to_string(),
            font_family: "Inter, system-ui, sans-serif".to_string(),
        }
    }

    /// Look up a built-in scheme by name (`light` or `dark`).
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "light" | "default" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            _ => None,
        }
    }
}

/// Flat style tokens consumed by adapters. Derived once per render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ThemeTokens {
    pub surface_primary: String,
    pub surface_secondary: String,
    pub text_primary: String,
    pub text_secondary: String,
    pub text_tertiary: String,
    pub border_light: String,
    pub border_medium: String,
    pub accent_primary: String,
    pub accent_success: String,
    pub accent_error: String,
    pub font_family: String,
    /// Translucent text color used for drop shadows
    pub shadow_color: String,
    /// Light tint of the accent for highlighted surfaces
    pub accent_tint: String,
}

impl Default for ThemeTokens {
    fn default() -> Self {
        Self::from_scheme(&ColorScheme::default())
    }
}

impl ThemeTokens {
    /// Flatten a color scheme into tokens. Values are copied verbatim; only
    /// the derived translucent colors need a parseable hex input.
    pub fn from_scheme(scheme: &ColorScheme) -> Self {
        Self {
            surface_primary: scheme.background.clone(),
            surface_secondary: scheme.background_secondary.clone(),
            text_primary: scheme.text.clone(),
            text_secondary: scheme.text_secondary.clone(),
            text_tertiary: scheme.text_tertiary.clone(),
            border_light: scheme.border.clone(),
            border_medium: scheme.border_strong.clone(),
            accent_primary: scheme.primary.clone(),
            accent_success: scheme.success.clone(),
            accent_error: scheme.error.clone(),
            font_family: scheme.font_family.clone(),
            shadow_color: rgba(&scheme.text, 0.18)
                .unwrap_or_else(|| "rgba(0,0,0,0.18)".to_string()),
            accent_tint: rgba(&scheme.primary, 0.12)
                .unwrap_or_else(|| "rgba(79,70,229,0.12)".to_string()),
        }
    }

    /// Shared `<defs>` content: drop-shadow filter, accent gradient and
    /// arrowhead marker. With `shadows` off the filter is an identity so
    /// `filter="url(#fs-shadow)"` references stay valid.
    pub fn defs(&self, shadows: bool) -> String {
        let filter = if shadows {
            format!(
                r#"  <filter id="{SHADOW_FILTER_ID}" x="-20%" y="-20%" width="140%" height="150%">
    <feDropShadow dx="0" dy="3" stdDeviation="4" flood-color="{}" />
  </filter>"#,
                escape_xml(&self.shadow_color)
            )
        } else {
            format!(
                r#"  <filter id="{SHADOW_FILTER_ID}">
    <feOffset dx="0" dy="0" />
  </filter>"#
            )
        };

        let w = ArrowHead::WIDTH;
        let h = ArrowHead::HEIGHT;
        format!(
            r#"{filter}
  <linearGradient id="{ACCENT_GRADIENT_ID}" x1="0" y1="0" x2="1" y2="1">
    <stop offset="0%" stop-color="{accent}" />
    <stop offset="100%" stop-color="{tint}" />
  </linearGradient>
  <marker id="{ARROW_MARKER_ID}" markerWidth="{w}" markerHeight="{h}" refX="{w}" refY="{half_h}" orient="auto" markerUnits="userSpaceOnUse">
    <polygon points="0 0, {w} {half_h}, 0 {h}" fill="{arrow}" />
  </marker>"#,
            accent = escape_xml(&self.accent_primary),
            tint = escape_xml(&self.accent_tint),
            arrow = escape_xml(&self.text_secondary),
            half_h = h / 2.0,
        )
    }
}

/// Convert `#RGB` / `#RRGGBB` to an `rgba(...)` string with the given alpha.
pub fn rgba(color: &str, alpha: f64) -> Option<String> {
    let caps = RE_HEX_COLOR.captures(color.trim())?;
    let (r, g, b) = if let Some(long) = caps.get(1) {
        let s = long.as_str();
        (
            u8::from_str_radix(&s[0..2], 16).ok()?,
            u8::from_str_radix(&s[2..4], 16).ok()?,
            u8::from_str_radix(&s[4..6], 16).ok()?,
        )
    } else {
        let s = caps.get(2)?.as_str();
        let digit = |i: usize| u8::from_str_radix(&s[i..i + 1], 16).ok().map(|v| v * 17);
        (digit(0)?, digit(1)?, digit(2)?)
    };
    Some(format!("rgba({r},{g},{b},{alpha})"))
}
