//! Element registry: maps element type names to rendering adapters.
//!
//! A registry is built once (usually with [`Registry::with_builtins`]),
//! extended with any custom types, and then shared read-only by every
//! render. Rendering an unregistered type is an error, never a no-op.

use std::collections::HashMap;
use std::fmt;

use log::trace;

use super::adapters;
use super::theme::ThemeTokens;
use crate::error::SceneError;
use crate::types::Element;

/// Renders one element to an SVG fragment.
///
/// Adapters read only their own element and the shared tokens.
pub type Adapter = Box<dyn Fn(&ThemeTokens, &Element) -> Result<String, SceneError> + Send + Sync>;

/// Type-keyed adapter table.
#[derive(Default)]
pub struct Registry {
    adapters: HashMap<String, Adapter>,
}

impl Registry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding every built-in element type.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        adapters::register_builtins(&mut registry);
        registry
    }

    /// Register `adapter` for `type_name`, returning the adapter it replaces.
    pub fn register<F>(&mut self, type_name: impl Into<String>, adapter: F) -> Option<Adapter>
    where
        F: Fn(&ThemeTokens, &Element) -> Result<String, SceneError> + Send + Sync + 'static,
    {
        self.adapters.insert(type_name.into(), Box::new(adapter))
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.adapters.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.adapters.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.adapters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.adapters.is_empty()
    }

    /// Render `element` with the adapter registered for `type_name`.
    pub fn render(
        &self,
        type_name: &str,
        tokens: &ThemeTokens,
        element: &Element,
    ) -> Result<String, SceneError> {
        let adapter = self
            .adapters
            .get(type_name)
            .ok_or_else(|| SceneError::UnknownType(type_name.to_string()))?;
        trace!(element_type = type_name; "Rendering element");
        adapter(tokens, element)
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("types", &self.type_names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_fails_fast() {
        let registry = Registry::new();
        let el = Element::new("sparkle", 0.0, 0.0);
        let err = registry.render("sparkle", &ThemeTokens::default(), &el).unwrap_err();
        assert!(matches!(err, SceneError::UnknownType(ref t) if t == "sparkle"));
    }

    #[test]
    fn test_register_custom_type() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        let previous = registry.register("dot", |tokens: &ThemeTokens, el: &Element| {
            Ok(format!(
                r#"<circle cx="{}" cy="{}" r="3" fill="{}" />"#,
                el.x, el.y, tokens.accent_primary
            ))
        });
        assert!(previous.is_none());
        let out = registry
            .render("dot", &ThemeTokens::default(), &Element::new("dot", 4.0, 5.0))
            .unwrap();
        assert!(out.starts_with(r#"<circle cx="4" cy="5""#));
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = Registry::new();
        registry.register("x", |_: &ThemeTokens, _: &Element| Ok("a".to_string()));
        let previous = registry.register("x", |_: &ThemeTokens, _: &Element| Ok("b".to_string()));
        assert!(previous.is_some());
        assert_eq!(registry.len(), 1);
        let el = Element::new("x", 0.0, 0.0);
        assert_eq!(registry.render("x", &ThemeTokens::default(), &el).unwrap(), "b");
    }

    #[test]
    fn test_builtins_are_registered() {
        let registry = Registry::with_builtins();
        for name in ["postit", "connector", "browser_window", "chat_panel", "transaction"] {
            assert!(registry.contains(name), "missing builtin {name}");
        }
    }

    #[test]
    fn test_registry_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
    }
}
