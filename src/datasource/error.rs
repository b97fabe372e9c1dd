// ABOUTME: Error types for data source operations
// ABOUTME: Defines errors for attribute access, schema validation, and the read operation

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("Required attribute missing: {0}")]
    MissingAttribute(String),

    #[error("Attribute '{key}' has the wrong type: expected {expected}")]
    InvalidAttribute { key: String, expected: &'static str },

    #[error("Attribute store rejected '{key}': {message}")]
    StorageError { key: String, message: String },

    #[error("Template error: {0}")]
    TemplateError(#[from] crate::template::TemplateError),
}

pub type Result<T> = std::result::Result<T, DataSourceError>;
