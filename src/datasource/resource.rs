// ABOUTME: Resource attribute accessor trait and the in-memory attribute bag
// ABOUTME: Defines the four-operation capability interface the data source reads and writes through

use std::collections::HashMap;

use serde_json::Value;

use super::error::{DataSourceError, Result};

/// Accessor over a resource's attribute bag.
///
/// The host owning the resource supplies an implementation; the data source
/// only ever touches attributes through this seam, which is what lets tests
/// substitute a recording double.
pub trait ResourceData {
    /// Look up a required attribute, failing if it is absent
    fn get(&self, key: &str) -> Result<&Value>;

    /// Look up an optional attribute
    fn get_opt(&self, key: &str) -> Option<&Value>;

    /// Write an attribute value
    fn set(&mut self, key: &str, value: Value) -> Result<()>;

    /// Assign the resource identifier
    fn set_id(&mut self, id: &str);
}

/// In-memory `ResourceData` implementation.
///
/// Used by the CLI, and by tests standing in for a host-supplied store.
#[derive(Debug, Clone, Default)]
pub struct AttributeBag {
    attributes: HashMap<String, Value>,
    id: Option<String>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style attribute insertion
    pub fn with_attribute(mut self, key: impl Into<String>, value: Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.attributes.insert(key.into(), value);
    }

    /// The assigned resource identifier, if the read has completed
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Convenience accessor for the computed output attribute
    pub fn output(&self) -> Option<&str> {
        self.attributes.get("output").and_then(Value::as_str)
    }
}

impl ResourceData for AttributeBag {
    fn get(&self, key: &str) -> Result<&Value> {
        self.attributes
            .get(key)
            .ok_or_else(|| DataSourceError::MissingAttribute(key.to_string()))
    }

    fn get_opt(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    fn set(&mut self, key: &str, value: Value) -> Result<()> {
        self.attributes.insert(key.to_string(), value);
        Ok(())
    }

    fn set_id(&mut self, id: &str) {
        self.id = Some(id.to_string());
    }
}
