//! Scene renderer - turns a SceneSpec into an SVG document.
//!
//! Pure string building, no DOM manipulation. Elements are painted in list
//! order, so later elements end up on top.

use log::{debug, info};

use super::registry::Registry;
use super::util::{escape_xml, fmt_num};
use crate::config::RenderConfig;
use crate::error::SceneError;
use crate::presets::PresetTable;
use crate::types::SceneSpec;

/// Render a scene with the given registry.
///
/// Fails on the first element whose type is not registered or whose props
/// its adapter rejects; no partial document is returned.
pub fn render_scene(
    spec: &SceneSpec,
    config: &RenderConfig,
    registry: &Registry,
) -> Result<String, SceneError> {
    spec.validate()?;
    info!(width = spec.width, height = spec.height, elements = spec.elements.len(); "Rendering scene");

    let tokens = config.tokens();
    let mut parts: Vec<String> = Vec::with_capacity(spec.elements.len() + 5);

    parts.push(svg_open_tag(spec.width, spec.height, &tokens.font_family));
    parts.push("<defs>".to_string());
    parts.push(tokens.defs(config.shadows()));
    parts.push("</defs>".to_string());

    if !config.transparent() {
        parts.push(format!(
            r#"<rect x="0" y="0" width="{}" height="{}" fill="{}" />"#,
            fmt_num(spec.width),
            fmt_num(spec.height),
            escape_xml(&tokens.surface_secondary)
        ));
    }

    for element in &spec.elements {
        let body = registry.render(&element.kind, &tokens, element)?;
        parts.push(format!(
            "<g class=\"{}\">\n{}\n</g>",
            escape_xml(&element.kind),
            body
        ));
    }

    parts.push("</svg>".to_string());
    let svg = parts.join("\n");
    debug!(bytes = svg.len(); "Scene rendered");
    Ok(svg)
}

/// Look a preset up by name and render it like any other scene.
pub fn render_preset(
    name: &str,
    config: &RenderConfig,
    registry: &Registry,
    presets: &PresetTable,
) -> Result<String, SceneError> {
    let spec = presets
        .get(name)
        .ok_or_else(|| SceneError::UnknownPreset(name.to_string()))?;
    info!(preset = name; "Rendering preset");
    render_scene(spec, config, registry)
}

fn svg_open_tag(width: f64, height: f64, font_family: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" font-family="{}">"#,
        escape_xml(font_family),
        w = fmt_num(width),
        h = fmt_num(height),
    )
}
