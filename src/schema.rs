//! Schema descriptions presented to the LLM
//!
//! Two alternative textual descriptions of the target database are loaded
//! once at startup: a full OWL Turtle ontology with table/column mapping
//! annotations, and a flat JSON metadata listing. Both are held in memory
//! for the lifetime of the process and never mutated.

use std::fs;
use std::path::Path;

use crate::error::{GatewayError, GatewayResult};

/// Which schema description a request wants embedded in the prompt
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SchemaMode {
    /// Full ontology with relationship and mapping annotations
    Ontology,
    /// Flat table/column/type listing with case-sensitivity flags
    MetadataOnly,
}

/// Both schema descriptions, loaded at process start
#[derive(Clone, Debug)]
pub struct SchemaCatalog {
    ontology: String,
    metadata_only: String,
}

impl SchemaCatalog {
    /// Read both description files. Failure here is fatal: the gateway
    /// cannot serve requests without its schema descriptions.
    pub fn load(
        ontology_path: impl AsRef<Path>,
        metadata_only_path: impl AsRef<Path>,
    ) -> GatewayResult<Self> {
        Ok(Self {
            ontology: read_description(ontology_path.as_ref())?,
            metadata_only: read_description(metadata_only_path.as_ref())?,
        })
    }

    pub fn description(&self, mode: SchemaMode) -> &str {
        match mode {
            SchemaMode::Ontology => &self.ontology,
            SchemaMode::MetadataOnly => &self.metadata_only,
        }
    }
}

fn read_description(path: &Path) -> GatewayResult<String> {
    fs::read_to_string(path).map_err(|e| {
        GatewayError::initialization_with_path(
            format!("failed to read schema description: {}", e),
            path.display().to_string(),
        )
    })
}
