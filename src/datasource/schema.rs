// ABOUTME: Declared attribute schema for the template data source
// ABOUTME: Describes the template, vars, and output attributes and validates accessors against them

use serde_json::Value;

use super::error::{DataSourceError, Result};
use super::resource::ResourceData;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    Map,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMode {
    /// Must be supplied by the caller
    Required,
    /// May be supplied by the caller
    Optional,
    /// Written by the data source, never supplied
    Computed,
}

#[derive(Debug, Clone, Copy)]
pub struct AttributeSchema {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub mode: AttributeMode,
}

/// The attribute table this data source declares to its host
pub const ATTRIBUTES: &[AttributeSchema] = &[
    AttributeSchema {
        name: "template",
        kind: AttributeKind::String,
        mode: AttributeMode::Required,
    },
    AttributeSchema {
        name: "vars",
        kind: AttributeKind::Map,
        mode: AttributeMode::Optional,
    },
    AttributeSchema {
        name: "output",
        kind: AttributeKind::String,
        mode: AttributeMode::Computed,
    },
];

/// Validate an accessor's input attributes against the declared schema.
///
/// Required attributes must be present; present input attributes must carry
/// the declared type. Computed attributes are outputs and are not checked.
pub fn validate(data: &dyn ResourceData) -> Result<()> {
    for attribute in ATTRIBUTES {
        match attribute.mode {
            AttributeMode::Required => {
                let value = data.get(attribute.name)?;
                check_kind(attribute, value)?;
            }
            AttributeMode::Optional => {
                if let Some(value) = data.get_opt(attribute.name) {
                    check_kind(attribute, value)?;
                }
            }
            AttributeMode::Computed => {}
        }
    }

    Ok(())
}

fn check_kind(attribute: &AttributeSchema, value: &Value) -> Result<()> {
    let matches = match attribute.kind {
        AttributeKind::String => value.is_string(),
        AttributeKind::Map => value.is_object() || value.is_null(),
    };

    if matches {
        Ok(())
    } else {
        Err(DataSourceError::InvalidAttribute {
            key: attribute.name.to_string(),
            expected: match attribute.kind {
                AttributeKind::String => "a string",
                AttributeKind::Map => "a map",
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::datasource::resource::AttributeBag;
    use serde_json::json;

    #[test]
    fn test_valid_minimal_resource() {
        let bag = AttributeBag::new().with_attribute("template", json!("Hello"));
        assert!(validate(&bag).is_ok());
    }

    #[test]
    fn test_valid_resource_with_vars() {
        let bag = AttributeBag::new()
            .with_attribute("template", json!("{{name}}"))
            .with_attribute("vars", json!({"name": "World"}));
        assert!(validate(&bag).is_ok());
    }

    #[test]
    fn test_missing_template_attribute() {
        let bag = AttributeBag::new();
        let err = validate(&bag).unwrap_err();
        assert!(matches!(err, DataSourceError::MissingAttribute(ref key) if key == "template"));
    }

    #[test]
    fn test_template_must_be_a_string() {
        let bag = AttributeBag::new().with_attribute("template", json!(42));
        let err = validate(&bag).unwrap_err();
        assert!(matches!(err, DataSourceError::InvalidAttribute { ref key, .. } if key == "template"));
    }

    #[test]
    fn test_vars_must_be_a_map() {
        let bag = AttributeBag::new()
            .with_attribute("template", json!("Hello"))
            .with_attribute("vars", json!(["not", "a", "map"]));
        let err = validate(&bag).unwrap_err();
        assert!(matches!(err, DataSourceError::InvalidAttribute { ref key, .. } if key == "vars"));
    }
}
