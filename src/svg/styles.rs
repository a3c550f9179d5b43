//! Font metrics and styling constants shared by the built-in adapters.
//!
//! Calibrated for Inter with fallback to system UI fonts.

/// Average character width in px at the given font size and weight
pub fn estimate_text_width(text: &str, font_size: f64, font_weight: u32) -> f64 {
    // Heavier weights are slightly wider.
    let width_ratio = if font_weight >= 600 {
        0.58
    } else if font_weight >= 500 {
        0.55
    } else {
        0.52
    };
    text.chars().count() as f64 * font_size * width_ratio
}

/// Greedy word wrap against the estimated text width.
///
/// A single word longer than `max_width` gets a line of its own rather than
/// being split. At most `max_lines` lines are returned; overflow is folded
/// into the last line with an ellipsis.
pub fn wrap_text(
    text: &str,
    max_width: f64,
    font_size: f64,
    font_weight: u32,
    max_lines: usize,
) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if current.is_empty()
            || estimate_text_width(&candidate, font_size, font_weight) <= max_width
        {
            current = candidate;
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }

    if max_lines > 0 && lines.len() > max_lines {
        lines.truncate(max_lines);
        if let Some(last) = lines.last_mut() {
            last.push('…');
        }
    }
    lines
}

/// Fixed font sizes used by the adapters (in px)
pub struct FontSizes;

impl FontSizes {
    pub const TITLE: f64 = 16.0;
    pub const BODY: f64 = 13.0;
    pub const CAPTION: f64 = 11.0;
    pub const POSTIT: f64 = 15.0;
    pub const AMOUNT: f64 = 20.0;
}

/// Font weights per text role
pub struct FontWeights;

impl FontWeights {
    pub const TITLE: u32 = 600;
    pub const BODY: u32 = 400;
    pub const LABEL: u32 = 500;
}

/// Stroke widths per element role (in px)
pub struct StrokeWidths;

impl StrokeWidths {
    pub const OUTLINE: f64 = 1.0;
    pub const DIVIDER: f64 = 0.75;
    pub const CONNECTOR: f64 = 2.0;
}

/// Corner radii (in px)
pub struct Radii;

impl Radii {
    pub const WINDOW: f64 = 12.0;
    pub const CARD: f64 = 10.0;
    pub const CONTROL: f64 = 6.0;
    pub const POSTIT: f64 = 4.0;
}

/// Arrow head dimensions
pub struct ArrowHead;

impl ArrowHead {
    pub const WIDTH: f64 = 10.0;
    pub const HEIGHT: f64 = 7.0;
}

/// Vertical shift applied to all text elements for font-agnostic centering.
pub const TEXT_BASELINE_SHIFT: &str = "0.35em";
