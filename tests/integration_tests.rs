//! Integration tests over scene fixtures and the built-in presets
//!
//! Each file in testdata/scenes/ gets its own test function, as does each
//! built-in preset. Every rendered document must parse as XML.
//! Run all tests with: cargo test

use std::fs;
use std::path::PathBuf;

use flowscene::{
    build_flow_elements, render, render_builtin_preset, render_scene, ColorScheme, Element,
    FlowInput, FlowOptions, LayoutKind, Registry, RenderConfig, SceneError, SceneSpec,
    BUILTIN_PRESETS,
};

/// Get the path to the scene fixture directory
fn get_scenes_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("testdata/scenes")
}

/// Count `<g class="...">` groups of one element type
fn count_groups(svg: &str, kind: &str) -> usize {
    svg.matches(&format!(r#"<g class="{kind}">"#)).count()
}

/// Parse the SVG and check the root element against the scene
fn assert_well_formed(svg: &str, spec: &SceneSpec, name: &str) {
    let doc = roxmltree::Document::parse(svg)
        .unwrap_or_else(|e| panic!("{name}: output is not well-formed XML: {e}\n{svg}"));
    let root = doc.root_element();
    assert_eq!(root.tag_name().name(), "svg", "{name}: root element");
    assert_eq!(
        root.attribute("viewBox"),
        Some(format!("0 0 {} {}", spec.width, spec.height).as_str()),
        "{name}: viewBox"
    );

    let groups: Vec<_> = root
        .children()
        .filter(|n| n.is_element() && n.tag_name().name() == "g")
        .collect();
    assert_eq!(groups.len(), spec.elements.len(), "{name}: one group per element");
    for (group, element) in groups.iter().zip(&spec.elements) {
        assert_eq!(group.attribute("class"), Some(element.kind.as_str()), "{name}: paint order");
    }
}

/// Render a fixture with both schemes
fn run_scene_test(test_name: &str) {
    let path = get_scenes_dir().join(format!("{test_name}.json"));
    let json = fs::read_to_string(&path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
    let spec = SceneSpec::from_json(&json).unwrap_or_else(|e| panic!("Failed to parse {path:?}: {e}"));

    for scheme in [ColorScheme::light(), ColorScheme::dark()] {
        let svg = render(&spec, &RenderConfig::new(scheme))
            .unwrap_or_else(|e| panic!("Failed to render {test_name}: {e}"));
        assert_well_formed(&svg, &spec, test_name);
    }
}

/// Render a built-in preset
fn run_preset_test(name: &str) {
    let spec = BUILTIN_PRESETS
        .get(name)
        .unwrap_or_else(|| panic!("missing preset {name}"));
    let svg = render_builtin_preset(name, &RenderConfig::default())
        .unwrap_or_else(|e| panic!("Failed to render preset {name}: {e}"));
    assert_well_formed(&svg, spec, name);
}

/// Macro to generate scene fixture test functions
macro_rules! scene_test {
    ($name:ident) => {
        #[test]
        fn $name() {
            run_scene_test(stringify!($name));
        }
    };
}

/// Macro to generate preset test functions
macro_rules! preset_test {
    ($name:ident) => {
        paste::paste! {
            #[test]
            fn [<preset_ $name>]() {
                run_preset_test(stringify!($name));
            }
        }
    };
}

// =============================================================================
// Scene fixtures
// =============================================================================

scene_test!(dashboard);
scene_test!(payment_form);
scene_test!(sticky_flow);
scene_test!(support_window);

// =============================================================================
// Presets
// =============================================================================

preset_test!(postit_flow);
preset_test!(postit_flow_zigzag);
preset_test!(postit_flow_vertical);
preset_test!(postit_flow_arc);
preset_test!(postit_flow_outline);
preset_test!(postit_flow_orgchart);
preset_test!(postit_flow_fishbone);
preset_test!(postit_flow_mindmap);
preset_test!(support_chat);
preset_test!(checkout);
preset_test!(ticket_tracking);
preset_test!(account_modal);

#[test]
fn test_every_preset_has_a_test() {
    assert_eq!(BUILTIN_PRESETS.len(), 12);
}

// =============================================================================
// Flow round trip
// =============================================================================

#[test]
fn test_linear_postit_round_trip() {
    let labels = ["Get bread", "Add spread", "Add filling", "Serve"];
    let options = FlowOptions::new(1100.0, 200.0);
    let elements = build_flow_elements(&FlowInput::labels(labels), LayoutKind::Linear, &options, "postit");
    let spec = SceneSpec::new(options.width, options.height).with_elements(elements);

    let svg = render(&spec, &RenderConfig::default()).unwrap();
    assert_eq!(count_groups(&svg, "postit"), labels.len());
    assert_eq!(count_groups(&svg, "connector"), labels.len() - 1);
    for label in labels {
        assert!(svg.contains(label), "missing label {label}");
    }
}

#[test]
fn test_structured_layouts_render() {
    let options = FlowOptions::new(900.0, 600.0);
    let cases = [
        (FlowInput::mindmap("Topic", ["A", "B", "C", "D"]), LayoutKind::Mindmap, 5, 4),
        (FlowInput::fishbone("Churn", ["Price", "Bugs"], ["Support"]), LayoutKind::Fishbone, 4, 4),
    ];
    for (input, kind, postits, connectors) in cases {
        let elements = build_flow_elements(&input, kind, &options, "postit");
        let spec = SceneSpec::new(options.width, options.height).with_elements(elements);
        let svg = render(&spec, &RenderConfig::default()).unwrap();
        assert_eq!(count_groups(&svg, "postit"), postits, "{kind}");
        // fishbone adds its spine as an arrowless connector
        assert_eq!(count_groups(&svg, "connector"), connectors, "{kind}");
        assert_well_formed(&svg, &spec, kind.name());
    }
}

#[test]
fn test_cards_driven_by_flow_layout() {
    let options = FlowOptions::new(1100.0, 300.0).with_node_size(200.0, 120.0);
    let elements = flowscene::FlowElementsBuilder::new("card")
        .with_node_props(|node| {
            let mut props = flowscene::Props::new();
            props.insert("title".into(), node.label.clone().into());
            props
        })
        .build(&FlowInput::labels(["Plan", "Build", "Ship"]), LayoutKind::Zigzag, &options);
    let spec = SceneSpec::new(options.width, options.height).with_elements(elements);
    let svg = render(&spec, &RenderConfig::default()).unwrap();
    assert_eq!(count_groups(&svg, "card"), 3);
    assert_eq!(count_groups(&svg, "connector"), 2);
}

// =============================================================================
// Registry and errors
// =============================================================================

#[test]
fn test_unknown_type_fails() {
    let spec = SceneSpec::new(200.0, 100.0).with_elements([Element::new("sparkline", 0.0, 0.0)]);
    let err = render(&spec, &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, SceneError::UnknownType(ref name) if name == "sparkline"));
    assert_eq!(err.to_string(), "unknown element type `sparkline`");
}

#[test]
fn test_unknown_preset_fails() {
    let err = render_builtin_preset("postit_flow_spiral", &RenderConfig::default()).unwrap_err();
    assert!(matches!(err, SceneError::UnknownPreset(_)));
}

#[test]
fn test_custom_adapter() {
    let mut registry = Registry::with_builtins();
    registry.register("badge", |tokens: &flowscene::ThemeTokens, el: &Element| {
        let text = el.require_str("text")?;
        Ok(format!(
            r#"<circle cx="{}" cy="{}" r="12" fill="{}" /><text>{}</text>"#,
            el.x, el.y, tokens.accent_primary, text
        ))
    });
    let spec = SceneSpec::new(200.0, 100.0)
        .with_elements([Element::new("badge", 50.0, 50.0).with_prop("text", "7")]);

    let svg = render_scene(&spec, &RenderConfig::default(), &registry).unwrap();
    assert_eq!(count_groups(&svg, "badge"), 1);
    assert!(svg.contains("<text>7</text>"));

    let missing = SceneSpec::new(200.0, 100.0).with_elements([Element::new("badge", 0.0, 0.0)]);
    let err = render_scene(&missing, &RenderConfig::default(), &registry).unwrap_err();
    assert!(matches!(err, SceneError::InvalidProp { .. }));
}

#[test]
fn test_config_from_json() {
    let config = RenderConfig::from_json(r##"{"transparent": true, "scheme": {"primary": "#FF6600"}}"##).unwrap();
    let svg = render(&SceneSpec::new(100.0, 100.0), &config).unwrap();
    assert!(svg.contains("#FF6600"));
    assert!(!svg.contains(r#"<rect x="0" y="0""#));
}

#[test]
fn test_scene_json_errors() {
    assert!(matches!(SceneSpec::from_json("{"), Err(SceneError::Json(_))));
    let zero = SceneSpec::from_json(r#"{"width": 0, "height": 10, "elements": []}"#).unwrap();
    assert!(matches!(render(&zero, &RenderConfig::default()), Err(SceneError::InvalidScene(_))));
}

#[test]
fn test_color_props_stay_inside_their_attribute() {
    let hostile = r#"red" onload="alert(1)"#;
    let spec = SceneSpec::new(400.0, 200.0).with_elements([
        Element::new("postit", 10.0, 10.0)
            .with_prop("label", "note")
            .with_prop("color", hostile),
        Element::new("connector", 200.0, 60.0)
            .with_prop("to_x", 380)
            .with_prop("to_y", 60)
            .with_prop("color", hostile),
    ]);
    let svg = render(&spec, &RenderConfig::default()).unwrap();
    assert_well_formed(&svg, &spec, "hostile colors");

    let doc = roxmltree::Document::parse(&svg).unwrap();
    assert!(doc.descendants().all(|n| n.attribute("onload").is_none()));
    let polyline = doc
        .descendants()
        .find(|n| n.has_tag_name("polyline"))
        .expect("connector polyline");
    assert_eq!(polyline.attribute("stroke"), Some(hostile));
}
