// ABOUTME: Data source module for the templar template renderer
// ABOUTME: Exposes the resource accessor seam, attribute schema, identifier generation, and read operation

pub mod error;
pub mod execute;
pub mod ident;
pub mod resource;
pub mod schema;

pub use error::{DataSourceError, Result};
pub use execute::TemplateDataSource;
pub use ident::generate_id;
pub use resource::{AttributeBag, ResourceData};
pub use schema::{AttributeKind, AttributeMode, AttributeSchema, ATTRIBUTES};
