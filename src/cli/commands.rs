// ABOUTME: Command implementations for the templar CLI
// ABOUTME: Handles execution of the render and validate commands

use anyhow::{Context as _, Result};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

use super::args::Args;
use super::config::Config;
use crate::datasource::{AttributeBag, TemplateDataSource};
use crate::template::TemplateEngine;

/// Render a template file through the data source and emit the output
pub fn render_template(
    template_path: PathBuf,
    vars: Vec<String>,
    vars_file: Option<PathBuf>,
    output: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    info!("Rendering template: {}", template_path.display());

    let template = std::fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template file: {}", template_path.display()))?;

    let binding = assemble_variables(&vars, vars_file.as_deref(), config)?;
    info!("Assembled {} template variables", binding.len());

    let mut bag = AttributeBag::new().with_attribute("template", Value::String(template));
    if !binding.is_empty() {
        bag.insert("vars", Value::Object(binding));
    }

    let datasource = TemplateDataSource::new();
    datasource
        .read(&mut bag)
        .context("Template rendering failed")?;

    let rendered = bag
        .output()
        .context("Data source read completed without an output attribute")?;

    if let Some(id) = bag.id() {
        info!("Resource identifier: {}", id);
    }

    match output {
        Some(path) => {
            std::fs::write(&path, rendered)
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            info!("Output written to: {}", path.display());
        }
        None => {
            println!("{}", rendered);
        }
    }

    Ok(())
}

/// Validate a template file without rendering it
pub fn validate_template(template_path: PathBuf) -> Result<()> {
    info!("Validating template: {}", template_path.display());

    let template = std::fs::read_to_string(&template_path)
        .with_context(|| format!("Failed to read template file: {}", template_path.display()))?;

    let engine = TemplateEngine::new();
    engine
        .validate_template(&template)
        .context("Template validation failed")?;

    println!("✓ Template '{}' is valid", template_path.display());
    Ok(())
}

/// Build the variable binding: config defaults, then the vars file, then
/// command-line pairs, later sources winning.
fn assemble_variables(
    vars: &[String],
    vars_file: Option<&Path>,
    config: &Config,
) -> Result<serde_json::Map<String, Value>> {
    let mut binding = serde_json::Map::new();

    for (key, value) in &config.default_vars {
        binding.insert(key.clone(), Value::String(value.clone()));
    }

    if let Some(path) = vars_file {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read vars file: {}", path.display()))?;
        let parsed: Value = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse vars file: {}", path.display()))?;

        match parsed {
            Value::Object(map) => binding.extend(map),
            Value::Null => {}
            _ => anyhow::bail!(
                "Vars file {} must contain a map of variables",
                path.display()
            ),
        }
    }

    for (key, value) in Args::parse_variables(vars)? {
        binding.insert(key, Value::String(value));
    }

    Ok(binding)
}
