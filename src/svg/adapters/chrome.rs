//! Browser window chrome: title bar, traffic lights and address bar.

use crate::error::SceneError;
use crate::layout::Point;
use crate::svg::styles::{FontSizes, FontWeights, Radii, StrokeWidths};
use crate::svg::theme::{ThemeTokens, SHADOW_FILTER_ID};
use crate::svg::util::{circle, line, rect, text, Anchor, TextStyle};
use crate::types::Element;

const DEFAULT_SIZE: (f64, f64) = (800.0, 500.0);
const TITLE_BAR_HEIGHT: f64 = 36.0;
const TRAFFIC_LIGHTS: [&str; 3] = ["#FF5F57", "#FEBC2E", "#28C840"];

pub(super) fn browser_window(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let (x, y) = (el.x, el.y);
    let w = el.width_or(DEFAULT_SIZE.0);
    let h = el.height_or(DEFAULT_SIZE.1);
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        r#"<g filter="url(#{SHADOW_FILTER_ID})">{}</g>"#,
        rect(x, y, w, h, Radii::WINDOW, &tokens.surface_primary, &tokens.border_light)
    ));

    // Title bar: rounded top, square bottom edge.
    parts.push(rect(
        x,
        y,
        w,
        TITLE_BAR_HEIGHT,
        Radii::WINDOW,
        &tokens.surface_secondary,
        "none",
    ));
    parts.push(rect(
        x,
        y + TITLE_BAR_HEIGHT / 2.0,
        w,
        TITLE_BAR_HEIGHT / 2.0,
        0.0,
        &tokens.surface_secondary,
        "none",
    ));
    parts.push(line(
        Point::new(x, y + TITLE_BAR_HEIGHT),
        Point::new(x + w, y + TITLE_BAR_HEIGHT),
        &tokens.border_light,
        StrokeWidths::DIVIDER,
    ));

    for (i, color) in TRAFFIC_LIGHTS.iter().enumerate() {
        parts.push(circle(
            x + 20.0 + i as f64 * 18.0,
            y + TITLE_BAR_HEIGHT / 2.0,
            6.0,
            color,
            None,
        ));
    }

    let bar_x = x + 90.0;
    let bar_w = w - 110.0;
    if let Some(url) = el.str_prop("url") {
        if bar_w > 0.0 {
            parts.push(rect(
                bar_x,
                y + 7.0,
                bar_w,
                TITLE_BAR_HEIGHT - 14.0,
                Radii::CONTROL,
                &tokens.surface_primary,
                &tokens.border_light,
            ));
            parts.push(text(
                bar_x + 12.0,
                y + TITLE_BAR_HEIGHT / 2.0,
                url,
                TextStyle {
                    size: FontSizes::CAPTION,
                    weight: FontWeights::BODY,
                    fill: &tokens.text_tertiary,
                    anchor: Anchor::Start,
                },
            ));
        }
    } else if let Some(title) = el.str_prop("title") {
        parts.push(text(
            x + w / 2.0,
            y + TITLE_BAR_HEIGHT / 2.0,
            title,
            TextStyle {
                size: FontSizes::BODY,
                weight: FontWeights::LABEL,
                fill: &tokens.text_secondary,
                anchor: Anchor::Middle,
            },
        ));
    }

    Ok(parts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::super::render_builtin;
    use crate::types::Element;

    #[test]
    fn test_url_bar_takes_precedence_over_title() {
        let el = Element::new("browser_window", 0.0, 0.0)
            .with_size(600.0, 400.0)
            .with_prop("url", "app.example.com/inbox")
            .with_prop("title", "Inbox");
        let out = render_builtin(&el).unwrap();
        assert!(out.contains("app.example.com/inbox"));
        assert!(!out.contains(">Inbox<"));
        assert_eq!(out.matches("<circle").count(), 3);
    }

    #[test]
    fn test_title_only() {
        let el = Element::new("browser_window", 10.0, 10.0).with_prop("title", "Docs & Notes");
        let out = render_builtin(&el).unwrap();
        assert!(out.contains("Docs &amp; Notes"));
        assert!(out.contains(r#"width="800""#));
    }
}
