//! Small SVG string helpers shared by the adapters.

use super::styles::TEXT_BASELINE_SHIFT;
use crate::layout::Point;

/// Escape special XML characters in text content
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a coordinate with at most two decimals and no trailing zeros.
pub fn fmt_num(n: f64) -> String {
    let rounded = (n * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        // Avoid "-0".
        format!("{}", rounded as i64)
    } else {
        let s = format!("{rounded:.2}");
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Convert points to an SVG `points` attribute: "x1,y1 x2,y2 ..."
pub fn points_attr(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", fmt_num(p.x), fmt_num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Horizontal text alignment for [`text_block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

impl Anchor {
    fn as_str(self) -> &'static str {
        match self {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
            Anchor::End => "end",
        }
    }
}

/// Text styling for [`text_block`].
#[derive(Debug, Clone, Copy)]
pub struct TextStyle<'a> {
    pub size: f64,
    pub weight: u32,
    pub fill: &'a str,
    pub anchor: Anchor,
}

/// A single `<text>` element. `y` is the vertical center of the line.
pub fn text(x: f64, y: f64, content: &str, style: TextStyle<'_>) -> String {
    format!(
        r#"<text x="{}" y="{}" dy="{}" font-size="{}" font-weight="{}" fill="{}" text-anchor="{}">{}</text>"#,
        fmt_num(x),
        fmt_num(y),
        TEXT_BASELINE_SHIFT,
        fmt_num(style.size),
        style.weight,
        escape_xml(style.fill),
        style.anchor.as_str(),
        escape_xml(content)
    )
}

/// Several lines of text vertically centered on `center_y`.
pub fn text_block(x: f64, center_y: f64, lines: &[String], line_height: f64, style: TextStyle<'_>) -> String {
    if lines.is_empty() {
        return String::new();
    }
    let first_y = center_y - line_height * (lines.len() - 1) as f64 / 2.0;
    let tspans: String = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            format!(
                r#"<tspan x="{}" y="{}" dy="{}">{}</tspan>"#,
                fmt_num(x),
                fmt_num(first_y + i as f64 * line_height),
                TEXT_BASELINE_SHIFT,
                escape_xml(line)
            )
        })
        .collect();
    format!(
        r#"<text font-size="{}" font-weight="{}" fill="{}" text-anchor="{}">{}</text>"#,
        fmt_num(style.size),
        style.weight,
        escape_xml(style.fill),
        style.anchor.as_str(),
        tspans
    )
}

/// A rounded rectangle.
pub fn rect(x: f64, y: f64, w: f64, h: f64, r: f64, fill: &str, stroke: &str) -> String {
    format!(
        r#"<rect x="{}" y="{}" width="{}" height="{}" rx="{}" ry="{}" fill="{}" stroke="{}" />"#,
        fmt_num(x),
        fmt_num(y),
        fmt_num(w.max(0.0)),
        fmt_num(h.max(0.0)),
        fmt_num(r),
        fmt_num(r),
        escape_xml(fill),
        escape_xml(stroke)
    )
}

/// A straight line segment.
pub fn line(from: Point, to: Point, stroke: &str, width: f64) -> String {
    format!(
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}" />"#,
        fmt_num(from.x),
        fmt_num(from.y),
        fmt_num(to.x),
        fmt_num(to.y),
        escape_xml(stroke),
        fmt_num(width)
    )
}

/// A filled circle, optionally outlined with `(stroke, width)`.
pub fn circle(cx: f64, cy: f64, r: f64, fill: &str, outline: Option<(&str, f64)>) -> String {
    let outline = match outline {
        Some((stroke, width)) => format!(
            r#" stroke="{}" stroke-width="{}""#,
            escape_xml(stroke),
            fmt_num(width)
        ),
        None => String::new(),
    };
    format!(
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}"{outline} />"#,
        fmt_num(cx),
        fmt_num(cy),
        fmt_num(r),
        escape_xml(fill)
    )
}
