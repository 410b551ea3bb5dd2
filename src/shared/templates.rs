//! Template engine for map marker markup using Jinja2 syntax.
//!
//! Templates live in `templates/` and are compiled into the binary, so the
//! rendered icon and popup markup never depends on the working directory.
//! Names ending in `.html` are auto-escaped.

use minijinja::{Environment, Value};
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

pub const MARKER_ICON_TEMPLATE: &str = "map/marker_icon.svg";
pub const MARKER_POPUP_TEMPLATE: &str = "map/popup.html";

const TEMPLATES: &[(&str, &str)] = &[
    (
        MARKER_ICON_TEMPLATE,
        include_str!("../../templates/map/marker_icon.svg.jinja"),
    ),
    (
        MARKER_POPUP_TEMPLATE,
        include_str!("../../templates/map/popup.html.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();

    for &(name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a template with the given context.
///
/// # Example
/// ```ignore
/// let svg = render_template(MARKER_ICON_TEMPLATE, minijinja::context! { color => "#ff4444" })?;
/// ```
pub fn render_template(template_name: &str, ctx: Value) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(ctx)
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use minijinja::context;

    #[test]
    fn test_render_missing_template() {
        let result = render_template("nonexistent.jinja", context! {});
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_marker_icon_uses_color() {
        let svg = render_template(MARKER_ICON_TEMPLATE, context! { color => "#3b82f6" }).unwrap();
        assert!(svg.contains("fill=\"#3b82f6\""));
        assert!(svg.starts_with("<svg"));
    }

    #[test]
    fn test_popup_escapes_user_text() {
        let html = render_template(
            MARKER_POPUP_TEMPLATE,
            context! {
                title => "<script>alert(1)</script>",
                badge => true,
                color => "#ff4444",
                category_label => "Road Damage",
                description => "",
            },
        )
        .unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("Road Damage"));
        assert!(!html.contains("class=\"description\""));
    }
}
