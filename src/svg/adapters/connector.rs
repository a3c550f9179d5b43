use serde_json::Value;

use crate::error::SceneError;
use crate::layout::Point;
use crate::svg::styles::StrokeWidths;
use crate::svg::theme::{ThemeTokens, ARROW_MARKER_ID};
use crate::svg::util::{escape_xml, points_attr};
use crate::types::Element;

/// Read a `waypoints` prop. Each entry may be `[x, y]` or `{"x": .., "y": ..}`.
pub fn parse_waypoints(el: &Element) -> Result<Vec<Point>, SceneError> {
    el.list_prop("waypoints")?
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let coords = match item {
                Value::Array(pair) if pair.len() == 2 => pair[0].as_f64().zip(pair[1].as_f64()),
                Value::Object(obj) => obj
                    .get("x")
                    .and_then(Value::as_f64)
                    .zip(obj.get("y").and_then(Value::as_f64)),
                _ => None,
            };
            coords.map(|(x, y)| Point::new(x, y)).ok_or_else(|| {
                SceneError::invalid_prop(
                    &el.kind,
                    format!("waypoints[{i}] must be [x, y] or {{x, y}}, got {item}"),
                )
            })
        })
        .collect()
}

/// A polyline from `(x, y)` through any waypoints to `(to_x, to_y)`.
pub(super) fn connector(tokens: &ThemeTokens, el: &Element) -> Result<String, SceneError> {
    let to = Point::new(el.require_f64("to_x")?, el.require_f64("to_y")?);
    let mut points = vec![Point::new(el.x, el.y)];
    points.extend(parse_waypoints(el)?);
    points.push(to);

    let color = escape_xml(el.str_prop("color").unwrap_or(&tokens.text_secondary));
    let width = el.f64_prop("stroke_width").unwrap_or(StrokeWidths::CONNECTOR);
    let mut attrs = String::new();
    if el.bool_prop("dashed").unwrap_or(false) {
        attrs.push_str(r#" stroke-dasharray="6 5""#);
    }
    if el.bool_prop("arrow").unwrap_or(true) {
        attrs.push_str(&format!(r#" marker-end="url(#{ARROW_MARKER_ID})""#));
    }

    Ok(format!(
        r#"<polyline points="{}" fill="none" stroke="{color}" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round"{attrs} />"#,
        points_attr(&points)
    ))
}
