//! Scene data model: a canvas size plus an ordered list of typed elements.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SceneError;

/// Free-form element properties, interpreted by the element's adapter.
pub type Props = Map<String, Value>;

/// A declarative scene: canvas size plus elements in paint order.
///
/// Later elements are painted on top of earlier ones. There is no other
/// z-ordering mechanism.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneSpec {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub elements: Vec<Element>,
}

impl SceneSpec {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    /// Append an element on top of everything already in the scene.
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    /// Builder-style variant of [`SceneSpec::push`] for a batch of elements.
    pub fn with_elements(mut self, elements: impl IntoIterator<Item = Element>) -> Self {
        self.elements.extend(elements);
        self
    }

    /// Parse a scene from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, SceneError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the canvas invariant: both dimensions finite and positive.
    pub fn validate(&self) -> Result<(), SceneError> {
        let ok = |v: f64| v.is_finite() && v > 0.0;
        if !ok(self.width) || !ok(self.height) {
            return Err(SceneError::InvalidScene(format!(
                "canvas must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }
}

/// One typed, positioned visual unit within a scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    /// Registry key of the adapter that renders this element.
    #[serde(rename = "type")]
    pub kind: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default)]
    pub props: Props,
}

impl Element {
    pub fn new(kind: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            kind: kind.into(),
            x,
            y,
            width: None,
            height: None,
            props: Props::new(),
        }
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_prop(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.props.insert(key.to_string(), value.into());
        self
    }

    pub fn with_props(mut self, props: Props) -> Self {
        self.props.extend(props);
        self
    }

    pub fn width_or(&self, default: f64) -> f64 {
        self.width.unwrap_or(default)
    }

    pub fn height_or(&self, default: f64) -> f64 {
        self.height.unwrap_or(default)
    }

    pub fn str_prop(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(Value::as_str)
    }

    pub fn f64_prop(&self, key: &str) -> Option<f64> {
        self.props.get(key).and_then(Value::as_f64)
    }

    pub fn bool_prop(&self, key: &str) -> Option<bool> {
        self.props.get(key).and_then(Value::as_bool)
    }

    pub fn array_prop(&self, key: &str) -> Option<&Vec<Value>> {
        self.props.get(key).and_then(Value::as_array)
    }

    /// A string prop the adapter cannot render without.
    pub fn require_str(&self, key: &str) -> Result<&str, SceneError> {
        match self.props.get(key) {
            Some(Value::String(s)) => Ok(s),
            Some(other) => Err(SceneError::invalid_prop(
                &self.kind,
                format!("`{key}` must be a string, got {other}"),
            )),
            None => Err(SceneError::invalid_prop(
                &self.kind,
                format!("missing required prop `{key}`"),
            )),
        }
    }

    /// A numeric prop the adapter cannot render without.
    pub fn require_f64(&self, key: &str) -> Result<f64, SceneError> {
        match self.props.get(key) {
            Some(v) => v.as_f64().ok_or_else(|| {
                SceneError::invalid_prop(&self.kind, format!("`{key}` must be a number, got {v}"))
            }),
            None => Err(SceneError::invalid_prop(
                &self.kind,
                format!("missing required prop `{key}`"),
            )),
        }
    }

    /// An optional array prop; present-but-not-an-array is an error.
    pub fn list_prop(&self, key: &str) -> Result<&[Value], SceneError> {
        match self.props.get(key) {
            Some(Value::Array(items)) => Ok(items),
            Some(Value::Null) | None => Ok(&[]),
            Some(other) => Err(SceneError::invalid_prop(
                &self.kind,
                format!("`{key}` must be an array, got {other}"),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scene_from_json() {
        let scene = SceneSpec::from_json(
            r#"{"width": 400, "height": 200,
                "elements": [{"type": "postit", "x": 10, "y": 20, "props": {"label": "Hi"}}]}"#,
        )
        .unwrap();
        assert_eq!(scene.elements.len(), 1);
        assert_eq!(scene.elements[0].kind, "postit");
        assert_eq!(scene.elements[0].str_prop("label"), Some("Hi"));
        assert_eq!(scene.elements[0].width, None);
    }

    #[test]
    fn test_validate_rejects_empty_canvas() {
        assert!(SceneSpec::new(0.0, 100.0).validate().is_err());
        assert!(SceneSpec::new(100.0, f64::NAN).validate().is_err());
        assert!(SceneSpec::new(100.0, 50.0).validate().is_ok());
    }

    #[test]
    fn test_require_str_reports_type() {
        let el = Element::new("card", 0.0, 0.0).with_prop("title", json!(3));
        let err = el.require_str("title").unwrap_err();
        assert!(err.to_string().contains("`title` must be a string"));
        assert!(el.require_str("body").is_err());
    }

    #[test]
    fn test_list_prop_defaults_to_empty() {
        let el = Element::new("chat_panel", 0.0, 0.0);
        assert!(el.list_prop("messages").unwrap().is_empty());
        let bad = el.with_prop("messages", "nope");
        assert!(bad.list_prop("messages").is_err());
    }
}
