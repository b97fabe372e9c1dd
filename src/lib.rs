// ABOUTME: Main library module for the templar template renderer
// ABOUTME: Exports all core modules and provides the public API

pub mod cli;
pub mod datasource;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use datasource::{AttributeBag, ResourceData, TemplateDataSource};
pub use template::{TemplateContext, TemplateEngine};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
