//! Chat panel: header, alternating message bubbles and an input bar.

use serde_json::Value;

use crate::error::SceneError;
use crate::layout::Point;
use crate::svg::styles::{estimate_text_width, wrap_text, FontSizes, FontWeights, Radii, StrokeWidths};
use crate::svg::theme::{ThemeTokens, SHADOW_FILTER_ID};
use crate::svg::util::{line, rect, text, text_block, Anchor, TextStyle};
use crate::types::Element;

const DEFAULT_SIZE: (f64, f64) = (360.0, 420.0);
const HEADER_HEIGHT: f64 = 48.0;
const INPUT_HEIGHT: f64 = 52.0;
const BUBBLE_PADDING: f64 = 10.0;
const BUBBLE_SPACING: f64 = 10.0;
const LINE_HEIGHT: f64 = 18.0;
/// Bubble width as a share of the panel
const BUBBLE_WIDTH_RATIO: f64 = 0.72;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    User,
    Assistant,
}

struct Message<'a> {
    role: Role,
    text: &'a str,
}

fn parse_messages(el: &Element) -> Result<Vec<Message<'_>>, SceneError> {
    el.list_prop("messages")?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let obj = item.as_object().ok_or_else(|| {
                SceneError::invalid_prop(&el.kind, format!("messages[{i}] must be an object"))
            })?;
            let text = obj.get("text").and_then(Value::as_str).ok_or_else(|| {
                SceneError::invalid_prop(&el.kind, format!("messages[{i}] needs a `text` string"))
            })?;
            let role = match obj.get("role").and_then(Value::as_str) {
                Some("user") => Role::User,
                _ => Role::Assistant,
            };
            Ok(Message { role, text })
        })
        .collect()
}

pub(super) fn chat_panel(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let messages = parse_messages(el)?;
    let (x, y) = (el.x, el.y);
    let w = el.width_or(DEFAULT_SIZE.0);
    let h = el.height_or(DEFAULT_SIZE.1);
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        r#"<g filter="url(#{SHADOW_FILTER_ID})">{}</g>"#,
        rect(x, y, w, h, Radii::CARD, &tokens.surface_primary, &tokens.border_light)
    ));
    parts.push(text(
        x + 16.0,
        y + HEADER_HEIGHT / 2.0,
        el.str_prop("title").unwrap_or("Chat"),
        TextStyle {
            size: FontSizes::BODY,
            weight: FontWeights::TITLE,
            fill: &tokens.text_primary,
            anchor: Anchor::Start,
        },
    ));
    parts.push(divider(x, x + w, y + HEADER_HEIGHT, &tokens.border_light));

    let bubble_max = w * BUBBLE_WIDTH_RATIO;
    let bottom_limit = y + h - INPUT_HEIGHT - BUBBLE_SPACING;
    let mut cursor = y + HEADER_HEIGHT + BUBBLE_SPACING;

    for message in &messages {
        let lines = wrap_text(
            message.text,
            bubble_max - 2.0 * BUBBLE_PADDING,
            FontSizes::BODY,
            FontWeights::BODY,
            0,
        );
        let bubble_h = lines.len().max(1) as f64 * LINE_HEIGHT + 2.0 * BUBBLE_PADDING;
        // Messages that no longer fit are dropped, oldest kept.
        if cursor + bubble_h > bottom_limit {
            break;
        }
        let text_w = lines
            .iter()
            .map(|l| estimate_text_width(l, FontSizes::BODY, FontWeights::BODY))
            .fold(0.0, f64::max);
        let bubble_w = (text_w + 2.0 * BUBBLE_PADDING).min(bubble_max);
        let (bubble_x, fill, ink) = match message.role {
            Role::User => (
                x + w - 12.0 - bubble_w,
                tokens.accent_primary.as_str(),
                tokens.surface_primary.as_str(),
            ),
            Role::Assistant => (
                x + 12.0,
                tokens.surface_secondary.as_str(),
                tokens.text_primary.as_str(),
            ),
        };
        parts.push(rect(bubble_x, cursor, bubble_w, bubble_h, 12.0, fill, "none"));
        parts.push(text_block(
            bubble_x + BUBBLE_PADDING,
            cursor + bubble_h / 2.0,
            &lines,
            LINE_HEIGHT,
            TextStyle {
                size: FontSizes::BODY,
                weight: FontWeights::BODY,
                fill: ink,
                anchor: Anchor::Start,
            },
        ));
        cursor += bubble_h + BUBBLE_SPACING;
    }

    let input_top = y + h - INPUT_HEIGHT;
    parts.push(divider(x, x + w, input_top, &tokens.border_light));
    parts.push(rect(
        x + 12.0,
        input_top + 10.0,
        w - 24.0,
        INPUT_HEIGHT - 20.0,
        Radii::CONTROL * 2.0,
        &tokens.surface_secondary,
        &tokens.border_light,
    ));
    parts.push(text(
        x + 26.0,
        input_top + INPUT_HEIGHT / 2.0,
        el.str_prop("placeholder").unwrap_or("Type a message…"),
        TextStyle {
            size: FontSizes::BODY,
            weight: FontWeights::BODY,
            fill: &tokens.text_tertiary,
            anchor: Anchor::Start,
        },
    ));

    Ok(parts.join("\n"))
}

fn divider(x1: f64, x2: f64, y: f64, stroke: &str) -> String {
    line(Point::new(x1, y), Point::new(x2, y), stroke, StrokeWidths::DIVIDER)
}
