//! Feedback widgets: toast, status pill, ticket-status flow, progress bar.

use serde_json::Value;

use super::status_color;
use crate::error::SceneError;
use crate::layout::Point;
use crate::svg::styles::{estimate_text_width, FontSizes, FontWeights, Radii, StrokeWidths};
use crate::svg::theme::{ThemeTokens, SHADOW_FILTER_ID};
use crate::svg::util::{circle, line, rect, text, Anchor, TextStyle};
use crate::types::Element;

const TOAST_SIZE: (f64, f64) = (320.0, 52.0);
const PILL_HEIGHT: f64 = 26.0;
const TICKET_SIZE: (f64, f64) = (480.0, 72.0);
const PROGRESS_SIZE: (f64, f64) = (300.0, 40.0);
const STEP_RADIUS: f64 = 12.0;

pub(super) fn toast(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let message = el.require_str("message")?;
    let variant = el.str_prop("variant").unwrap_or("info");
    let (x, y) = (el.x, el.y);
    let w = el.width_or(TOAST_SIZE.0);
    let h = el.height_or(TOAST_SIZE.1);
    let mid = y + h / 2.0;
    let color = status_color(tokens, variant);
    let glyph = match variant {
        "success" => "✓",
        "error" => "✕",
        _ => "i",
    };

    let parts = [
        format!(
            r#"<g filter="url(#{SHADOW_FILTER_ID})">{}</g>"#,
            rect(x, y, w, h, Radii::CONTROL * 1.5, &tokens.surface_primary, &tokens.border_light)
        ),
        rect(x, y + 8.0, 3.0, h - 16.0, 1.5, color, "none"),
        circle(x + 26.0, mid, 10.0, color, None),
        text(
            x + 26.0,
            mid,
            glyph,
            TextStyle {
                size: FontSizes::CAPTION,
                weight: FontWeights::TITLE,
                fill: &tokens.surface_primary,
                anchor: Anchor::Middle,
            },
        ),
        text(
            x + 46.0,
            mid,
            message,
            TextStyle {
                size: FontSizes::BODY,
                weight: FontWeights::LABEL,
                fill: &tokens.text_primary,
                anchor: Anchor::Start,
            },
        ),
    ];
    Ok(parts.join("\n"))
}

pub(super) fn status_pill(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let label = el.require_str("label")?;
    let color = status_color(tokens, el.str_prop("status").unwrap_or(label));
    let h = el.height_or(PILL_HEIGHT);
    let w = el.width_or(
        estimate_text_width(label, FontSizes::CAPTION, FontWeights::LABEL) + 36.0,
    );
    let mid = el.y + h / 2.0;

    let parts = [
        rect(el.x, el.y, w, h, h / 2.0, &tokens.surface_secondary, &tokens.border_light),
        circle(el.x + 14.0, mid, 4.0, color, None),
        text(
            el.x + 24.0,
            mid,
            label,
            TextStyle {
                size: FontSizes::CAPTION,
                weight: FontWeights::LABEL,
                fill: &tokens.text_secondary,
                anchor: Anchor::Start,
            },
        ),
    ];
    Ok(parts.join("\n"))
}

/// Steps laid out left to right; steps before `current` are done.
pub(super) fn ticket_status(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let steps: Vec<&str> = el
        .list_prop("steps")?
        .iter()
        .map(|v| {
            v.as_str()
                .ok_or_else(|| SceneError::invalid_prop(&el.kind, "`steps` must hold strings"))
        })
        .collect::<Result<_, _>>()?;
    if steps.is_empty() {
        return Err(SceneError::invalid_prop(&el.kind, "`steps` must not be empty"));
    }
    let current = match el.props.get("current") {
        Some(Value::Null) | None => 0,
        Some(_) => el.require_f64("current")?.max(0.0) as usize,
    };

    let w = el.width_or(TICKET_SIZE.0);
    let cy = el.y + STEP_RADIUS + 4.0;
    let first_x = el.x + w / (2.0 * steps.len() as f64);
    let step_w = w / steps.len() as f64;
    let mut parts: Vec<String> = Vec::new();

    for i in 1..steps.len() {
        let x1 = first_x + (i - 1) as f64 * step_w + STEP_RADIUS;
        let x2 = first_x + i as f64 * step_w - STEP_RADIUS;
        let stroke = if i <= current {
            &tokens.accent_success
        } else {
            &tokens.border_medium
        };
        parts.push(line(
            Point::new(x1, cy),
            Point::new(x2, cy),
            stroke,
            StrokeWidths::CONNECTOR,
        ));
    }

    for (i, step) in steps.iter().enumerate() {
        let cx = first_x + i as f64 * step_w;
        let (fill, stroke, glyph, ink) = if i < current {
            (&tokens.accent_success, &tokens.accent_success, "✓", &tokens.surface_primary)
        } else if i == current {
            (&tokens.accent_primary, &tokens.accent_primary, "", &tokens.surface_primary)
        } else {
            (&tokens.surface_primary, &tokens.border_medium, "", &tokens.text_tertiary)
        };
        parts.push(circle(
            cx,
            cy,
            STEP_RADIUS,
            fill,
            Some((stroke, StrokeWidths::CONNECTOR)),
        ));
        let number = (i + 1).to_string();
        parts.push(text(
            cx,
            cy,
            if glyph.is_empty() { number.as_str() } else { glyph },
            TextStyle {
                size: FontSizes::CAPTION,
                weight: FontWeights::TITLE,
                fill: ink,
                anchor: Anchor::Middle,
            },
        ));
        parts.push(text(
            cx,
            cy + STEP_RADIUS + 16.0,
            step,
            TextStyle {
                size: FontSizes::CAPTION,
                weight: if i == current {
                    FontWeights::TITLE
                } else {
                    FontWeights::BODY
                },
                fill: if i <= current {
                    &tokens.text_primary
                } else {
                    &tokens.text_tertiary
                },
                anchor: Anchor::Middle,
            },
        ));
    }

    Ok(parts.join("\n"))
}

/// `value` is a fraction in `[0, 1]`; values above 1 are read as percent.
pub(super) fn progress_bar(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let raw = el.require_f64("value")?;
    let fraction = (if raw > 1.0 { raw / 100.0 } else { raw }).clamp(0.0, 1.0);
    let w = el.width_or(PROGRESS_SIZE.0);
    let h = el.height_or(PROGRESS_SIZE.1);
    let track_y = el.y + h - 8.0;
    let mut parts: Vec<String> = Vec::new();

    let caption = TextStyle {
        size: FontSizes::CAPTION,
        weight: FontWeights::LABEL,
        fill: &tokens.text_secondary,
        anchor: Anchor::Start,
    };
    if let Some(label) = el.str_prop("label") {
        parts.push(text(el.x, el.y + 8.0, label, caption));
    }
    parts.push(text(
        el.x + w,
        el.y + 8.0,
        &format!("{}%", (fraction * 100.0).round()),
        TextStyle {
            anchor: Anchor::End,
            ..caption
        },
    ));
    parts.push(rect(el.x, track_y, w, 8.0, 4.0, &tokens.surface_secondary, "none"));
    if fraction > 0.0 {
        parts.push(rect(el.x, track_y, w * fraction, 8.0, 4.0, &tokens.accent_primary, "none"));
    }
    Ok(parts.join("\n"))
}
