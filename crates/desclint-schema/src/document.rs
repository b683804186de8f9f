//! dbt schema file parsing
//!
//! Parses `schema.yml` files to extract the descriptions attached to models,
//! sources, source tables, and columns. Everything else in the file (tests,
//! meta, configs) is ignored.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// dbt schema.yml structure (subset of fields we care about)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaDocument {
    /// Schema file format version (dbt uses 2)
    #[serde(default)]
    pub version: Option<u32>,

    /// Model definitions
    #[serde(default)]
    pub models: Vec<ModelDef>,

    /// Source definitions
    #[serde(default)]
    pub sources: Vec<SourceDef>,
}

impl SchemaDocument {
    /// Load a schema document from file
    pub fn from_file(path: &Path) -> Result<Self, SchemaError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| SchemaError::IoError(path.display().to_string(), e.to_string()))?;

        Self::from_str(&contents)
    }

    /// Parse a schema document from a YAML string
    ///
    /// Empty and `null` documents parse to an empty document, matching how a
    /// freshly created schema.yml should not fail the hook.
    pub fn from_str(yaml: &str) -> Result<Self, SchemaError> {
        let parsed: Option<SchemaDocument> =
            serde_yaml::from_str(yaml).map_err(|e| SchemaError::ParseError(e.to_string()))?;
        Ok(parsed.unwrap_or_default())
    }

    /// All non-empty descriptions in the document, with their owners
    pub fn descriptions(&self) -> Vec<DescriptionEntry<'_>> {
        let mut entries = Vec::new();

        for model in &self.models {
            let model_name = model.name.as_deref().unwrap_or("<unnamed>");
            push_entry(&mut entries, model_name, format!("Model '{}'", model_name), &model.description);

            for column in &model.columns {
                let col_name = column.name.as_deref().unwrap_or("<unnamed>");
                push_entry(
                    &mut entries,
                    model_name,
                    format!("Column '{}.{}'", model_name, col_name),
                    &column.description,
                );
            }
        }

        for source in &self.sources {
            let source_name = source.name.as_deref().unwrap_or("<unnamed>");
            push_entry(
                &mut entries,
                source_name,
                format!("Source '{}'", source_name),
                &source.description,
            );

            for table in &source.tables {
                let table_name = table.name.as_deref().unwrap_or("<unnamed>");
                push_entry(
                    &mut entries,
                    source_name,
                    format!("Table '{}.{}'", source_name, table_name),
                    &table.description,
                );

                for column in &table.columns {
                    let col_name = column.name.as_deref().unwrap_or("<unnamed>");
                    push_entry(
                        &mut entries,
                        source_name,
                        format!("Column '{}.{}.{}'", source_name, table_name, col_name),
                        &column.description,
                    );
                }
            }
        }

        entries
    }
}

fn push_entry<'a>(
    entries: &mut Vec<DescriptionEntry<'a>>,
    node: &'a str,
    owner: String,
    description: &'a Option<String>,
) {
    if let Some(text) = description.as_deref() {
        if !text.is_empty() {
            entries.push(DescriptionEntry {
                node: node.to_string(),
                owner,
                text,
            });
        }
    }
}

/// A description found in a schema document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescriptionEntry<'a> {
    /// Name of the top-level model or source the description belongs to
    pub node: String,

    /// Display label for diagnostics, e.g. "Column 'users.id'"
    pub owner: String,

    /// The description text
    pub text: &'a str,
}

/// A model definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelDef {
    /// Model name
    #[serde(default)]
    pub name: Option<String>,

    /// Model description
    #[serde(default)]
    pub description: Option<String>,

    /// Column definitions
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

/// A source definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceDef {
    /// Source name
    #[serde(default)]
    pub name: Option<String>,

    /// Source description
    #[serde(default)]
    pub description: Option<String>,

    /// Tables defined under this source
    #[serde(default)]
    pub tables: Vec<TableDef>,
}

/// A table under a source
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableDef {
    /// Table name
    #[serde(default)]
    pub name: Option<String>,

    /// Table description
    #[serde(default)]
    pub description: Option<String>,

    /// Column definitions
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
}

/// A column definition
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Column name
    #[serde(default)]
    pub name: Option<String>,

    /// Column description
    #[serde(default)]
    pub description: Option<String>,
}

/// Schema file parsing errors
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("Failed to read schema file {0}: {1}")]
    IoError(String, String),

    #[error("Failed to parse schema YAML: {0}")]
    ParseError(String),
}
