//! Built-in element adapters.
//!
//! Each adapter turns one [`Element`] into an SVG fragment using only the
//! element's own geometry and props plus the shared [`ThemeTokens`].
//! Missing sizes fall back to a per-type default.

mod cards;
mod chat;
mod chrome;
mod connector;
mod feedback;
mod form;
mod postit;
mod transaction;

use super::registry::Registry;
use super::theme::ThemeTokens;
#[cfg(test)]
use crate::types::Element;

pub use connector::parse_waypoints;
pub use postit::POSTIT_PALETTE;

/// Names of the element types registered by [`register_builtins`].
pub const BUILTIN_TYPES: [&str; 15] = [
    "browser_window",
    "card",
    "app_header",
    "skeleton",
    "chat_panel",
    "form",
    "modal",
    "toast",
    "status_pill",
    "ticket_status",
    "progress_bar",
    "transaction",
    "postit",
    "connector",
    "label",
];

pub(super) fn register_builtins(registry: &mut Registry) {
    registry.register("browser_window", chrome::browser_window);
    registry.register("card", cards::card);
    registry.register("app_header", cards::app_header);
    registry.register("skeleton", cards::skeleton);
    registry.register("chat_panel", chat::chat_panel);
    registry.register("form", form::form);
    registry.register("modal", form::modal);
    registry.register("toast", feedback::toast);
    registry.register("status_pill", feedback::status_pill);
    registry.register("ticket_status", feedback::ticket_status);
    registry.register("progress_bar", feedback::progress_bar);
    registry.register("transaction", transaction::transaction);
    registry.register("postit", postit::postit);
    registry.register("connector", connector::connector);
    registry.register("label", cards::label);
}

/// Color for a status keyword: `success`/`completed`/`done`,
/// `error`/`failed`, `pending`/`active`, anything else neutral.
fn status_color<'a>(tokens: &'a ThemeTokens, status: &str) -> &'a str {
    match status.to_ascii_lowercase().as_str() {
        "success" | "completed" | "done" | "resolved" => &tokens.accent_success,
        "error" | "failed" | "declined" => &tokens.accent_error,
        "pending" | "active" | "info" | "open" => &tokens.accent_primary,
        _ => &tokens.text_tertiary,
    }
}

#[cfg(test)]
fn render_builtin(element: &Element) -> Result<String, crate::error::SceneError> {
    Registry::with_builtins().render(&element.kind, &ThemeTokens::default(), element)
}
