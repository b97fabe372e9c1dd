// ABOUTME: Template engine module for the templar data source
// ABOUTME: Provides template rendering, helper functions, and variable binding

pub mod cidr;
pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;

pub use cidr::CidrError;
pub use context::TemplateContext;
pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
