//! desclint schema
//!
//! The dbt schema-file collaborator: discovery of `schema.yml` files,
//! a serde model of the pieces we lint (models, sources, columns and their
//! descriptions), and a formatting-preserving in-place rewriter for fix mode.

pub mod discovery;
pub mod document;
pub mod rewrite;

pub use discovery::{discover_schema_files, filter_schema_files, is_schema_file};
pub use document::{
    ColumnDef, DescriptionEntry, ModelDef, SchemaDocument, SchemaError, SourceDef, TableDef,
};
pub use rewrite::{fix_descriptions, fix_file_in_place};
