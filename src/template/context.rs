// ABOUTME: Variable binding management for template rendering
// ABOUTME: Builds the substitution context handed to the template engine

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::error::{Result, TemplateError};

/// The variable binding a template is rendered against.
///
/// Keys resolve directly at the template root, so a binding of
/// `{"greeting": "Hello"}` satisfies `{{greeting}}`. Values are arbitrary
/// JSON, nested maps and lists resolve through dotted paths.
#[derive(Debug, Clone, Default)]
pub struct TemplateContext {
    vars: Map<String, Value>,
}

impl TemplateContext {
    /// Create an empty binding, used when no variables were supplied
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a binding from a JSON value.
    ///
    /// Accepts an object or null (treated as no variables); anything else is
    /// rejected rather than silently coerced.
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(Self { vars: map.clone() }),
            Value::Null => Ok(Self::empty()),
            other => Err(TemplateError::InvalidBinding(format!(
                "expected a map of variables, got {}",
                value_kind(other)
            ))),
        }
    }

    /// Build a binding from plain string pairs, as collected from the CLI
    pub fn from_pairs(pairs: &HashMap<String, String>) -> Self {
        let vars = pairs
            .iter()
            .map(|(k, v)| (k.clone(), Value::String(v.clone())))
            .collect();
        Self { vars }
    }

    /// Add or overwrite a single variable
    pub fn set_var(&mut self, key: impl Into<String>, value: Value) {
        self.vars.insert(key.into(), value);
    }

    /// Look up a variable value
    pub fn get_var(&self, key: &str) -> Option<&Value> {
        self.vars.get(key)
    }

    /// Merge another binding over this one, later values win
    pub fn extend(&mut self, other: TemplateContext) {
        self.vars.extend(other.vars);
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// The JSON object handed to handlebars as the render root
    pub fn to_json(&self) -> Value {
        Value::Object(self.vars.clone())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
