//! Sticky-note primitive used by the flow presets.

use crate::error::SceneError;
use crate::svg::styles::{wrap_text, FontSizes, FontWeights, Radii};
use crate::svg::theme::{ThemeTokens, SHADOW_FILTER_ID};
use crate::svg::util::{escape_xml, fmt_num, text_block, Anchor, TextStyle};
use crate::types::Element;

/// Note colors, picked by `color_index` when no explicit `color` is given.
pub const POSTIT_PALETTE: [&str; 5] = ["#FFE58A", "#FFC9DE", "#BDEBFF", "#C8F5C2", "#E3D4FF"];

const POSTIT_SIZE: (f64, f64) = (160.0, 110.0);
const FOLD: f64 = 16.0;
const INK: &str = "#2B2B2B";
const LINE_HEIGHT: f64 = 19.0;
const TEXT_INSET: f64 = 14.0;
const MAX_LINES: usize = 4;

fn note_color(el: &Element) -> &str {
    if let Some(color) = el.str_prop("color") {
        return color;
    }
    let index = el.f64_prop("color_index").unwrap_or(0.0).max(0.0) as usize;
    POSTIT_PALETTE[index % POSTIT_PALETTE.len()]
}

/// A tilted note with a folded bottom-right corner and a centered label.
///
/// Rotation happens about the note center so layout rectangles stay valid.
pub(super) fn postit(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let label = el.require_str("label")?;
    let rotation = el.f64_prop("rotation_deg").unwrap_or(0.0);
    let (x, y) = (el.x, el.y);
    let w = el.width_or(POSTIT_SIZE.0);
    let h = el.height_or(POSTIT_SIZE.1);
    let (cx, cy) = (x + w / 2.0, y + h / 2.0);
    let fill = escape_xml(note_color(el));
    let r = Radii::POSTIT;

    // Outline with the bottom-right corner cut off for the fold.
    let body = format!(
        "M{} {} H{} Q{} {} {} {} V{} L{} {} H{} Q{} {} {} {} V{} Q{} {} {} {} Z",
        fmt_num(x + r),
        fmt_num(y),
        fmt_num(x + w - r),
        fmt_num(x + w),
        fmt_num(y),
        fmt_num(x + w),
        fmt_num(y + r),
        fmt_num(y + h - FOLD),
        fmt_num(x + w - FOLD),
        fmt_num(y + h),
        fmt_num(x + r),
        fmt_num(x),
        fmt_num(y + h),
        fmt_num(x),
        fmt_num(y + h - r),
        fmt_num(y + r),
        fmt_num(x),
        fmt_num(y),
        fmt_num(x + r),
        fmt_num(y),
    );
    let fold = format!(
        "M{} {} L{} {} L{} {} Z",
        fmt_num(x + w),
        fmt_num(y + h - FOLD),
        fmt_num(x + w - FOLD),
        fmt_num(y + h - FOLD),
        fmt_num(x + w - FOLD),
        fmt_num(y + h),
    );
    let fold_fill = escape_xml(&tokens.shadow_color);

    let lines = wrap_text(
        label,
        w - 2.0 * TEXT_INSET,
        FontSizes::POSTIT,
        FontWeights::LABEL,
        MAX_LINES,
    );
    let label_svg = text_block(
        cx,
        cy,
        &lines,
        LINE_HEIGHT,
        TextStyle {
            size: FontSizes::POSTIT,
            weight: FontWeights::LABEL,
            fill: INK,
            anchor: Anchor::Middle,
        },
    );

    Ok(format!(
        r#"<g transform="rotate({} {} {})">
<path d="{body}" fill="{fill}" filter="url(#{SHADOW_FILTER_ID})" />
<path d="{fold}" fill="{fold_fill}" />
{label_svg}
</g>"#,
        fmt_num(rotation),
        fmt_num(cx),
        fmt_num(cy),
    ))
}

#[cfg(test)]
mod tests {
    use super::super::render_builtin;
    use super::POSTIT_PALETTE;
    use crate::types::Element;

    fn note(label: &str) -> Element {
        Element::new("postit", 10.0, 20.0)
            .with_size(160.0, 110.0)
            .with_prop("label", label)
    }

    #[test]
    fn test_postit_rotates_about_center() {
        let out = render_builtin(&note("Get bread").with_prop("rotation_deg", -2)).unwrap();
        assert!(out.starts_with(r#"<g transform="rotate(-2 90 75)">"#));
        assert!(out.contains(">Get bread<"));
        assert!(out.contains(POSTIT_PALETTE[0]));
    }

    #[test]
    fn test_postit_color_selection() {
        let indexed = render_builtin(&note("a").with_prop("color_index", 7)).unwrap();
        assert!(indexed.contains(POSTIT_PALETTE[2]));
        let explicit = render_builtin(&note("a").with_prop("color", "#ABCDEF")).unwrap();
        assert!(explicit.contains("#ABCDEF"));
    }

    #[test]
    fn test_postit_color_is_escaped() {
        let out = render_builtin(&note("a").with_prop("color", r#"red" onload="x"#)).unwrap();
        assert!(!out.contains(r#"onload=""#));
        assert!(out.contains("red&quot; onload=&quot;x"));
    }

    #[test]
    fn test_postit_wraps_long_labels() {
        let out = render_builtin(&note("Confirm the delivery window with the customer by phone")).unwrap();
        assert!(out.matches("<tspan").count() > 1);
        assert!(!out.contains(r#"class="postit""#));
    }

    #[test]
    fn test_postit_requires_label() {
        assert!(render_builtin(&Element::new("postit", 0.0, 0.0)).is_err());
    }
}
