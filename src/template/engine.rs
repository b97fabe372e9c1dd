// ABOUTME: Main template engine implementation using Handlebars
// ABOUTME: Provides template rendering, syntax validation, and variable substitution

use handlebars::Handlebars;
use serde_json::Value as JsonValue;
use tracing::debug;

use super::context::TemplateContext;
use super::error::{Result, TemplateError};
use super::helpers;

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
}

impl TemplateEngine {
    /// Create a new template engine with all built-in helpers
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();

        // A referenced variable that is not in the binding is a render
        // error, not an empty substitution
        handlebars.set_strict_mode(true);
        handlebars.set_dev_mode(false);

        // Disable HTML escaping since we're generating configuration text, not HTML
        handlebars.register_escape_fn(handlebars::no_escape);

        helpers::register_helpers(&mut handlebars);

        Self { handlebars }
    }

    /// Render a template string with the given variable binding
    pub fn render(&self, template: &str, context: &TemplateContext) -> Result<String> {
        self.render_with_json(template, &context.to_json())
    }

    /// Render a template string with JSON context
    pub fn render_with_json(&self, template: &str, context: &JsonValue) -> Result<String> {
        // Surface parse failures as syntax errors before attempting a render
        self.validate_template(template)?;

        debug!("Rendering template ({} bytes)", template.len());
        self.handlebars
            .render_template(template, context)
            .map_err(TemplateError::RenderError)
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        match handlebars::Template::compile(template) {
            Ok(_) => Ok(()),
            Err(e) => Err(TemplateError::SyntaxError(e.to_string())),
        }
    }

    /// Check if a string contains template expressions
    pub fn has_templates(&self, text: &str) -> bool {
        text.contains("{{") && text.contains("}}")
    }

    /// Register a custom helper function
    pub fn register_helper<F>(&mut self, name: &str, helper: F)
    where
        F: handlebars::HelperDef + Send + Sync + 'static,
    {
        self.handlebars.register_helper(name, Box::new(helper));
    }
}

impl Default for TemplateEngine {
    fn default() -> Self {
        Self::new()
    }
}
