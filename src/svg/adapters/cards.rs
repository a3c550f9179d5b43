//! Cards and card-like building blocks: content card, app header,
//! skeleton placeholder lines and free-standing text labels.

use crate::error::SceneError;
use crate::layout::Point;
use crate::svg::styles::{wrap_text, FontSizes, FontWeights, Radii, StrokeWidths};
use crate::svg::theme::{ThemeTokens, ACCENT_GRADIENT_ID, SHADOW_FILTER_ID};
use crate::svg::util::{circle, line, rect, text, text_block, Anchor, TextStyle};
use crate::types::Element;

const CARD_SIZE: (f64, f64) = (320.0, 160.0);
const HEADER_SIZE: (f64, f64) = (800.0, 64.0);
const SKELETON_SIZE: (f64, f64) = (300.0, 80.0);
const CARD_PADDING: f64 = 20.0;
const BODY_LINE_HEIGHT: f64 = 18.0;
/// Width of skeleton bars relative to the element, cycled per line
const SKELETON_WIDTHS: [f64; 3] = [1.0, 0.85, 0.6];

pub(super) fn card(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let title = el.require_str("title")?;
    let (x, y) = (el.x, el.y);
    let w = el.width_or(CARD_SIZE.0);
    let h = el.height_or(CARD_SIZE.1);
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        r#"<g filter="url(#{SHADOW_FILTER_ID})">{}</g>"#,
        rect(x, y, w, h, Radii::CARD, &tokens.surface_primary, &tokens.border_light)
    ));
    if el.bool_prop("accent").unwrap_or(false) {
        parts.push(rect(x, y + 12.0, 4.0, h - 24.0, 2.0, &tokens.accent_primary, "none"));
    }

    parts.push(text(
        x + CARD_PADDING,
        y + CARD_PADDING + FontSizes::TITLE / 2.0,
        title,
        TextStyle {
            size: FontSizes::TITLE,
            weight: FontWeights::TITLE,
            fill: &tokens.text_primary,
            anchor: Anchor::Start,
        },
    ));

    if let Some(badge) = el.str_prop("badge") {
        parts.push(text(
            x + w - CARD_PADDING,
            y + CARD_PADDING + FontSizes::TITLE / 2.0,
            badge,
            TextStyle {
                size: FontSizes::CAPTION,
                weight: FontWeights::LABEL,
                fill: &tokens.accent_primary,
                anchor: Anchor::End,
            },
        ));
    }

    if let Some(body) = el.str_prop("body") {
        let body_top = y + CARD_PADDING + FontSizes::TITLE + 16.0;
        let max_lines = ((y + h - CARD_PADDING - body_top) / BODY_LINE_HEIGHT).floor().max(1.0) as usize;
        let lines = wrap_text(
            body,
            w - 2.0 * CARD_PADDING,
            FontSizes::BODY,
            FontWeights::BODY,
            max_lines,
        );
        let center_y = body_top + BODY_LINE_HEIGHT * (lines.len() as f64 - 1.0) / 2.0 + BODY_LINE_HEIGHT / 2.0;
        parts.push(text_block(
            x + CARD_PADDING,
            center_y,
            &lines,
            BODY_LINE_HEIGHT,
            TextStyle {
                size: FontSizes::BODY,
                weight: FontWeights::BODY,
                fill: &tokens.text_secondary,
                anchor: Anchor::Start,
            },
        ));
    }

    Ok(parts.join("\n"))
}

pub(super) fn app_header(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let title = el.require_str("title")?;
    let (x, y) = (el.x, el.y);
    let w = el.width_or(HEADER_SIZE.0);
    let h = el.height_or(HEADER_SIZE.1);
    let mid = y + h / 2.0;
    let mut parts: Vec<String> = Vec::new();

    parts.push(rect(x, y, w, h, 0.0, &tokens.surface_primary, "none"));
    parts.push(line(
        Point::new(x, y + h),
        Point::new(x + w, y + h),
        &tokens.border_light,
        StrokeWidths::DIVIDER,
    ));
    parts.push(rect(
        x + 20.0,
        mid - 16.0,
        32.0,
        32.0,
        8.0,
        &format!("url(#{ACCENT_GRADIENT_ID})"),
        "none",
    ));

    let title_style = TextStyle {
        size: FontSizes::TITLE,
        weight: FontWeights::TITLE,
        fill: &tokens.text_primary,
        anchor: Anchor::Start,
    };
    match el.str_prop("subtitle") {
        Some(subtitle) => {
            parts.push(text(x + 64.0, mid - 9.0, title, title_style));
            parts.push(text(
                x + 64.0,
                mid + 11.0,
                subtitle,
                TextStyle {
                    size: FontSizes::CAPTION,
                    weight: FontWeights::BODY,
                    fill: &tokens.text_tertiary,
                    anchor: Anchor::Start,
                },
            ));
        }
        None => parts.push(text(x + 64.0, mid, title, title_style)),
    }

    if let Some(initials) = el.str_prop("initials") {
        let cx = x + w - 36.0;
        parts.push(circle(cx, mid, 16.0, &tokens.accent_tint, None));
        parts.push(text(
            cx,
            mid,
            initials,
            TextStyle {
                size: FontSizes::CAPTION,
                weight: FontWeights::TITLE,
                fill: &tokens.accent_primary,
                anchor: Anchor::Middle,
            },
        ));
    }

    Ok(parts.join("\n"))
}

pub(super) fn skeleton(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let count = match el.props.get("lines") {
        Some(_) => el.require_f64("lines")?.max(0.0) as usize,
        None => 3,
    };
    let w = el.width_or(SKELETON_SIZE.0);
    let bar_height = 10.0;
    let spacing = 20.0;

    let bars: Vec<String> = (0..count)
        .map(|i| {
            rect(
                el.x,
                el.y + i as f64 * spacing,
                w * SKELETON_WIDTHS[i % SKELETON_WIDTHS.len()],
                bar_height,
                bar_height / 2.0,
                &tokens.surface_secondary,
                "none",
            )
        })
        .collect();
    Ok(bars.join("\n"))
}

/// Free-standing text. `size` and `weight` props override the body style;
/// `align` is `start`, `middle` or `end`.
pub(super) fn label(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let content = el.require_str("text")?;
    let anchor = match el.str_prop("align") {
        Some("middle") | Some("center") => Anchor::Middle,
        Some("end") | Some("right") => Anchor::End,
        _ => Anchor::Start,
    };
    let fill = match el.str_prop("tone") {
        Some("secondary") => &tokens.text_secondary,
        Some("tertiary") => &tokens.text_tertiary,
        Some("accent") => &tokens.accent_primary,
        _ => &tokens.text_primary,
    };
    Ok(text(
        el.x,
        el.y,
        content,
        TextStyle {
            size: el.f64_prop("size").unwrap_or(FontSizes::BODY),
            weight: el
                .f64_prop("weight")
                .map(|w| w as u32)
                .unwrap_or(FontWeights::BODY),
            fill,
            anchor,
        },
    ))
}

#[cfg(test)]
mod tests {
    use super::super::render_builtin;
    use crate::error::SceneError;
    use crate::types::Element;

    #[test]
    fn test_card_requires_title() {
        let el = Element::new("card", 0.0, 0.0).with_prop("body", "text");
        assert!(matches!(
            render_builtin(&el),
            Err(SceneError::InvalidProp { ref element, .. }) if element == "card"
        ));
    }

    #[test]
    fn test_card_wraps_body_within_height() {
        let body = "word ".repeat(200);
        let el = Element::new("card", 0.0, 0.0)
            .with_size(200.0, 120.0)
            .with_prop("title", "Notes")
            .with_prop("body", body.trim())
            .with_prop("accent", true);
        let out = render_builtin(&el).unwrap();
        // (120 - 20 - 52) / 18 rounds down to 2 body lines.
        assert_eq!(out.matches("<tspan").count(), 2);
        assert!(out.contains('…'));
    }

    #[test]
    fn test_skeleton_line_count() {
        let el = Element::new("skeleton", 0.0, 0.0).with_prop("lines", 5);
        assert_eq!(render_builtin(&el).unwrap().matches("<rect").count(), 5);
        let bad = Element::new("skeleton", 0.0, 0.0).with_prop("lines", "many");
        assert!(render_builtin(&bad).is_err());
    }

    #[test]
    fn test_app_header_initials() {
        let el = Element::new("app_header", 0.0, 0.0)
            .with_prop("title", "Helpdesk")
            .with_prop("subtitle", "3 open tickets")
            .with_prop("initials", "JD");
        let out = render_builtin(&el).unwrap();
        assert!(out.contains(">JD<"));
        assert!(out.contains("3 open tickets"));
        assert!(out.contains("url(#fs-accent-gradient)"));
    }

    #[test]
    fn test_label_alignment() {
        let el = Element::new("label", 10.0, 20.0)
            .with_prop("text", "Hello")
            .with_prop("align", "center");
        assert!(render_builtin(&el).unwrap().contains(r#"text-anchor="middle""#));
    }
}
