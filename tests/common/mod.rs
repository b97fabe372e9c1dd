// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides shared functionality for setting up test templates and resources

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::TempDir;

use templar::datasource::AttributeBag;

/// SHA256 digest of the empty string, the identifier every successful read assigns
pub const EMPTY_STRING_DIGEST: &str =
    "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_template(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(format!("{}.tmpl", name));
        std::fs::write(&path, content).expect("Failed to write template file");
        path
    }

    pub fn write_vars_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(format!("{}.yaml", name));
        std::fs::write(&path, content).expect("Failed to write vars file");
        path
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.path().join(format!("{}.out", name))
    }
}

/// Build an attribute bag holding a template and an optional vars map
pub fn resource_with(template: &str, vars: Option<Value>) -> AttributeBag {
    let mut bag = AttributeBag::new().with_attribute("template", Value::String(template.into()));
    if let Some(vars) = vars {
        bag.insert("vars", vars);
    }
    bag
}
