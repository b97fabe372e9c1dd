// ABOUTME: The data source read operation
// ABOUTME: Wires the attribute accessor, template engine, and identifier generator together

use serde_json::Value;
use tracing::{debug, info};

use super::error::{DataSourceError, Result};
use super::ident;
use super::resource::ResourceData;
use super::schema;
use crate::template::{TemplateContext, TemplateEngine};

/// The template data source.
///
/// A single instance is reusable across invocations; each `read` is an
/// independent straight-line operation with no state carried between calls.
pub struct TemplateDataSource {
    engine: TemplateEngine,
    id_generator: fn(&str) -> String,
}

impl TemplateDataSource {
    pub fn new() -> Self {
        Self {
            engine: TemplateEngine::new(),
            id_generator: ident::generate_id,
        }
    }

    /// Use a preconfigured template engine, e.g. one with extra helpers
    pub fn with_engine(mut self, engine: TemplateEngine) -> Self {
        self.engine = engine;
        self
    }

    /// Substitute the identifier generator, pinning ids in tests
    pub fn with_id_generator(mut self, generator: fn(&str) -> String) -> Self {
        self.id_generator = generator;
        self
    }

    /// Perform the read: render `template` against `vars` and write the
    /// `output` attribute and resource identifier back through the accessor.
    ///
    /// On any failure nothing is written.
    pub fn read(&self, data: &mut dyn ResourceData) -> Result<()> {
        schema::validate(data)?;

        let template = data
            .get("template")?
            .as_str()
            .ok_or_else(|| DataSourceError::InvalidAttribute {
                key: "template".to_string(),
                expected: "a string",
            })?
            .to_string();

        let context = match data.get_opt("vars") {
            Some(value) => TemplateContext::from_value(value)?,
            None => TemplateContext::empty(),
        };

        debug!(
            "Reading template data source ({} bytes, {} variables)",
            template.len(),
            context.len()
        );

        let rendered = self.engine.render(&template, &context)?;

        data.set_id(&(self.id_generator)(""));
        data.set("output", Value::String(rendered))?;

        info!("Template data source read complete");
        Ok(())
    }
}

impl Default for TemplateDataSource {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateError;
    use serde_json::json;
    use std::cell::RefCell;

    /// Recording accessor double: serves canned attribute values and records
    /// every operation so tests can assert on the call sequence.
    #[derive(Default)]
    struct RecordingResource {
        attributes: std::collections::HashMap<String, Value>,
        get_calls: RefCell<Vec<String>>,
        get_opt_calls: RefCell<Vec<String>>,
        set_calls: Vec<(String, Value)>,
        set_id_calls: Vec<String>,
    }

    impl RecordingResource {
        fn new(template: Value) -> Self {
            let mut resource = Self::default();
            resource.attributes.insert("template".to_string(), template);
            resource
        }

        fn with_vars(mut self, vars: Value) -> Self {
            self.attributes.insert("vars".to_string(), vars);
            self
        }
    }

    impl ResourceData for RecordingResource {
        fn get(&self, key: &str) -> crate::datasource::error::Result<&Value> {
            self.get_calls.borrow_mut().push(key.to_string());
            self.attributes
                .get(key)
                .ok_or_else(|| DataSourceError::MissingAttribute(key.to_string()))
        }

        fn get_opt(&self, key: &str) -> Option<&Value> {
            self.get_opt_calls.borrow_mut().push(key.to_string());
            self.attributes.get(key)
        }

        fn set(&mut self, key: &str, value: Value) -> crate::datasource::error::Result<()> {
            self.set_calls.push((key.to_string(), value));
            Ok(())
        }

        fn set_id(&mut self, id: &str) {
            self.set_id_calls.push(id.to_string());
        }
    }

    fn fake_id(_input: &str) -> String {
        "some-hash".to_string()
    }

    #[test]
    fn test_read_without_variables() {
        let datasource = TemplateDataSource::new().with_id_generator(fake_id);
        let mut resource = RecordingResource::new(json!("Hello, world!"));

        datasource.read(&mut resource).unwrap();

        assert!(resource.get_calls.borrow().contains(&"template".to_string()));
        assert!(resource
            .get_opt_calls
            .borrow()
            .contains(&"vars".to_string()));
        assert_eq!(resource.set_id_calls, vec!["some-hash".to_string()]);
        assert_eq!(
            resource.set_calls,
            vec![("output".to_string(), json!("Hello, world!"))]
        );
    }

    #[test]
    fn test_read_with_variables() {
        let template = "{{greeting}}{{#if greeting}}{{#if who}}, {{/if}}{{/if}}{{who}}!";

        let cases = [
            (json!({"greeting": "Hello", "who": "Nick"}), "Hello, Nick!"),
            (json!({"greeting": "Greetings", "who": "Zack"}), "Greetings, Zack!"),
            (json!({"greeting": "", "who": "Sara"}), "Sara!"),
            (json!({"greeting": "Hello", "who": ""}), "Hello!"),
        ];

        for (vars, expected) in cases {
            let datasource = TemplateDataSource::new().with_id_generator(fake_id);
            let mut resource = RecordingResource::new(json!(template)).with_vars(vars);

            datasource.read(&mut resource).unwrap();

            assert_eq!(
                resource.set_calls,
                vec![("output".to_string(), json!(expected))]
            );
            assert_eq!(resource.set_id_calls.len(), 1);
        }
    }

    #[test]
    fn test_invalid_template_writes_nothing() {
        let datasource = TemplateDataSource::new().with_id_generator(fake_id);
        let mut resource = RecordingResource::new(json!("bad template {{/if}}"));

        let err = datasource.read(&mut resource).unwrap_err();
        assert!(matches!(
            err,
            DataSourceError::TemplateError(TemplateError::SyntaxError(_))
        ));

        assert!(resource.set_calls.is_empty());
        assert!(resource.set_id_calls.is_empty());
    }

    #[test]
    fn test_missing_variable_writes_nothing() {
        let datasource = TemplateDataSource::new().with_id_generator(fake_id);
        let mut resource =
            RecordingResource::new(json!("Hello {{name}}!")).with_vars(json!({"other": "x"}));

        let err = datasource.read(&mut resource).unwrap_err();
        assert!(matches!(
            err,
            DataSourceError::TemplateError(TemplateError::RenderError(_))
        ));

        assert!(resource.set_calls.is_empty());
        assert!(resource.set_id_calls.is_empty());
    }

    #[test]
    fn test_missing_template_attribute() {
        let datasource = TemplateDataSource::new().with_id_generator(fake_id);
        let mut resource = RecordingResource::default();

        let err = datasource.read(&mut resource).unwrap_err();
        assert!(matches!(err, DataSourceError::MissingAttribute(ref key) if key == "template"));
        assert!(resource.set_calls.is_empty());
        assert!(resource.set_id_calls.is_empty());
    }

    #[test]
    fn test_non_map_vars_attribute() {
        let datasource = TemplateDataSource::new().with_id_generator(fake_id);
        let mut resource =
            RecordingResource::new(json!("Hello")).with_vars(json!("not a map"));

        let err = datasource.read(&mut resource).unwrap_err();
        assert!(matches!(err, DataSourceError::InvalidAttribute { ref key, .. } if key == "vars"));
        assert!(resource.set_calls.is_empty());
    }

    #[test]
    fn test_identifier_is_digest_of_empty_string() {
        let datasource = TemplateDataSource::new();
        let mut resource = RecordingResource::new(json!("static"));

        datasource.read(&mut resource).unwrap();

        assert_eq!(
            resource.set_id_calls,
            vec!["e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855".to_string()]
        );
    }

    #[test]
    fn test_cidrhost_in_data_source_read() {
        let datasource = TemplateDataSource::new();
        let mut resource = RecordingResource::new(json!(
            "reserved_ip_ranges: {{cidrhost subnet_cidr 0}}-{{cidrhost subnet_cidr 5}}"
        ))
        .with_vars(json!({"subnet_cidr": "10.0.0.0/16"}));

        datasource.read(&mut resource).unwrap();

        assert_eq!(
            resource.set_calls,
            vec![(
                "output".to_string(),
                json!("reserved_ip_ranges: 10.0.0.0-10.0.0.5")
            )]
        );
    }
}
