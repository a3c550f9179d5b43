//! Form and modal dialog compositions.

use serde_json::Value;

use crate::error::SceneError;
use crate::svg::styles::{wrap_text, FontSizes, FontWeights, Radii};
use crate::svg::theme::{ThemeTokens, SHADOW_FILTER_ID};
use crate::svg::util::{rect, text, text_block, Anchor, TextStyle};
use crate::types::Element;

const FORM_SIZE: (f64, f64) = (360.0, 360.0);
const MODAL_SIZE: (f64, f64) = (420.0, 220.0);
const PADDING: f64 = 24.0;
const FIELD_HEIGHT: f64 = 36.0;
const FIELD_LABEL_GAP: f64 = 20.0;
const FIELD_SPACING: f64 = 14.0;
const BUTTON_HEIGHT: f64 = 38.0;

struct Field<'a> {
    label: &'a str,
    value: Option<&'a str>,
    placeholder: Option<&'a str>,
}

fn parse_fields(el: &Element) -> Result<Vec<Field<'_>>, SceneError> {
    el.list_prop("fields")?
        .iter()
        .enumerate()
        .map(|(i, item)| match item {
            // A bare string is a label with an empty input.
            Value::String(label) => Ok(Field {
                label,
                value: None,
                placeholder: None,
            }),
            Value::Object(obj) => {
                let label = obj.get("label").and_then(Value::as_str).ok_or_else(|| {
                    SceneError::invalid_prop(&el.kind, format!("fields[{i}] needs a `label` string"))
                })?;
                Ok(Field {
                    label,
                    value: obj.get("value").and_then(Value::as_str),
                    placeholder: obj.get("placeholder").and_then(Value::as_str),
                })
            }
            _ => Err(SceneError::invalid_prop(
                &el.kind,
                format!("fields[{i}] must be a string or an object"),
            )),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ButtonStyle {
    Primary,
    Secondary,
    Danger,
}

fn button(x: f64, y: f64, w: f64, label: &str, style: ButtonStyle, tokens: &ThemeTokens) -> String {
    let (fill, stroke, ink) = match style {
        ButtonStyle::Primary => (&tokens.accent_primary, "none", &tokens.surface_primary),
        ButtonStyle::Danger => (&tokens.accent_error, "none", &tokens.surface_primary),
        ButtonStyle::Secondary => (
            &tokens.surface_primary,
            tokens.border_medium.as_str(),
            &tokens.text_primary,
        ),
    };
    format!(
        "{}\n{}",
        rect(x, y, w, BUTTON_HEIGHT, Radii::CONTROL, fill, stroke),
        text(
            x + w / 2.0,
            y + BUTTON_HEIGHT / 2.0,
            label,
            TextStyle {
                size: FontSizes::BODY,
                weight: FontWeights::TITLE,
                fill: ink,
                anchor: Anchor::Middle,
            },
        )
    )
}

pub(super) fn form(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let fields = parse_fields(el)?;
    let (x, y) = (el.x, el.y);
    let w = el.width_or(FORM_SIZE.0);
    let h = el.height_or(FORM_SIZE.1);
    let inner_w = w - 2.0 * PADDING;
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        r#"<g filter="url(#{SHADOW_FILTER_ID})">{}</g>"#,
        rect(x, y, w, h, Radii::CARD, &tokens.surface_primary, &tokens.border_light)
    ));

    let mut cursor = y + PADDING;
    if let Some(title) = el.str_prop("title") {
        parts.push(text(
            x + PADDING,
            cursor + FontSizes::TITLE / 2.0,
            title,
            TextStyle {
                size: FontSizes::TITLE,
                weight: FontWeights::TITLE,
                fill: &tokens.text_primary,
                anchor: Anchor::Start,
            },
        ));
        cursor += FontSizes::TITLE + 18.0;
    }

    let buttons_top = y + h - PADDING - BUTTON_HEIGHT;
    for field in &fields {
        if cursor + FIELD_LABEL_GAP + FIELD_HEIGHT > buttons_top - FIELD_SPACING {
            break;
        }
        parts.push(text(
            x + PADDING,
            cursor + FontSizes::CAPTION / 2.0,
            field.label,
            TextStyle {
                size: FontSizes::CAPTION,
                weight: FontWeights::LABEL,
                fill: &tokens.text_secondary,
                anchor: Anchor::Start,
            },
        ));
        let input_top = cursor + FIELD_LABEL_GAP;
        parts.push(rect(
            x + PADDING,
            input_top,
            inner_w,
            FIELD_HEIGHT,
            Radii::CONTROL,
            &tokens.surface_primary,
            &tokens.border_medium,
        ));
        let (content, ink) = match (field.value, field.placeholder) {
            (Some(value), _) => (Some(value), &tokens.text_primary),
            (None, Some(placeholder)) => (Some(placeholder), &tokens.text_tertiary),
            (None, None) => (None, &tokens.text_tertiary),
        };
        if let Some(content) = content {
            parts.push(text(
                x + PADDING + 12.0,
                input_top + FIELD_HEIGHT / 2.0,
                content,
                TextStyle {
                    size: FontSizes::BODY,
                    weight: FontWeights::BODY,
                    fill: ink,
                    anchor: Anchor::Start,
                },
            ));
        }
        cursor = input_top + FIELD_HEIGHT + FIELD_SPACING;
    }

    parts.push(button(
        x + PADDING,
        buttons_top,
        inner_w,
        el.str_prop("submit").unwrap_or("Submit"),
        ButtonStyle::Primary,
        tokens,
    ));
    Ok(parts.join("\n"))
}

pub(super) fn modal(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let title = el.require_str("title")?;
    let (x, y) = (el.x, el.y);
    let w = el.width_or(MODAL_SIZE.0);
    let h = el.height_or(MODAL_SIZE.1);
    let mut parts: Vec<String> = Vec::new();

    parts.push(format!(
        r#"<g filter="url(#{SHADOW_FILTER_ID})">{}</g>"#,
        rect(x, y, w, h, Radii::WINDOW, &tokens.surface_primary, &tokens.border_light)
    ));
    parts.push(text(
        x + PADDING,
        y + PADDING + FontSizes::TITLE / 2.0,
        title,
        TextStyle {
            size: FontSizes::TITLE,
            weight: FontWeights::TITLE,
            fill: &tokens.text_primary,
            anchor: Anchor::Start,
        },
    ));

    let buttons_top = y + h - PADDING - BUTTON_HEIGHT;
    if let Some(body) = el.str_prop("body") {
        let body_top = y + PADDING + FontSizes::TITLE + 16.0;
        let max_lines = ((buttons_top - 12.0 - body_top) / 18.0).floor().max(1.0) as usize;
        let lines = wrap_text(body, w - 2.0 * PADDING, FontSizes::BODY, FontWeights::BODY, max_lines);
        parts.push(text_block(
            x + PADDING,
            body_top + 9.0 + 18.0 * (lines.len() as f64 - 1.0) / 2.0,
            &lines,
            18.0,
            TextStyle {
                size: FontSizes::BODY,
                weight: FontWeights::BODY,
                fill: &tokens.text_secondary,
                anchor: Anchor::Start,
            },
        ));
    }

    let button_w = 104.0;
    let confirm_x = x + w - PADDING - button_w;
    let confirm_style = if el.bool_prop("destructive").unwrap_or(false) {
        ButtonStyle::Danger
    } else {
        ButtonStyle::Primary
    };
    parts.push(button(
        confirm_x - button_w - 12.0,
        buttons_top,
        button_w,
        el.str_prop("cancel").unwrap_or("Cancel"),
        ButtonStyle::Secondary,
        tokens,
    ));
    parts.push(button(
        confirm_x,
        buttons_top,
        button_w,
        el.str_prop("confirm").unwrap_or("Confirm"),
        confirm_style,
        tokens,
    ));

    Ok(parts.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::super::render_builtin;
    use crate::svg::ThemeTokens;
    use crate::types::Element;
    use serde_json::json;

    #[test]
    fn test_form_fields_and_submit() {
        let el = Element::new("form", 0.0, 0.0).with_prop("title", "Checkout").with_prop(
            "fields",
            json!([
                {"label": "Email", "value": "ada@example.com"},
                {"label": "Card", "placeholder": "1234 5678 9012 3456"},
                "Notes"
            ]),
        );
        let out = render_builtin(&el).unwrap();
        assert!(out.contains("ada@example.com"));
        assert!(out.contains("1234 5678 9012 3456"));
        assert!(out.contains(">Notes<"));
        assert!(out.contains(">Submit<"));
    }

    #[test]
    fn test_form_rejects_bad_field() {
        let el = Element::new("form", 0.0, 0.0).with_prop("fields", json!([42]));
        assert!(render_builtin(&el).is_err());
    }

    #[test]
    fn test_destructive_modal_uses_error_color() {
        let tokens = ThemeTokens::default();
        let el = Element::new("modal", 0.0, 0.0)
            .with_prop("title", "Delete account?")
            .with_prop("body", "This cannot be undone.")
            .with_prop("confirm", "Delete")
            .with_prop("destructive", true);
        let out = render_builtin(&el).unwrap();
        assert!(out.contains(&tokens.accent_error));
        assert!(out.contains(">Delete<"));
        assert!(out.contains(">Cancel<"));
    }
}
