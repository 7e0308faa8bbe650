//! Loading and indexing of JSON term-mapping files.
//!
//! A term mapping is a JSON object whose keys are descriptor strings
//! (`DD(source='<file>', variable='<name>')`) and whose values are
//! arbitrary nested annotation entries. Entry contents are treated as
//! opaque payload.

use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde_json::{Map, Value};
use tracing::debug;

use pheno_model::DescriptorKey;

use crate::error::{IngestError, Result};

/// A loaded term-mapping document.
///
/// The top-level object keeps file key order (`serde_json` is built with
/// `preserve_order`), so derived indices and downstream output are
/// deterministic across runs.
#[derive(Debug, Clone)]
pub struct TermMapping {
    entries: Map<String, Value>,
}

impl TermMapping {
    /// Wraps an already-parsed top-level object.
    pub fn from_object(entries: Map<String, Value>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Raw descriptor-key → entry view, in file order.
    pub fn entries(&self) -> &Map<String, Value> {
        &self.entries
    }

    /// Indexes annotation entries by the variable name embedded in their
    /// descriptor keys.
    ///
    /// Keys without a `variable='` marker are skipped. When two keys carry
    /// the same variable name the later entry wins, while the name keeps
    /// its first position in the index.
    pub fn by_variable(&self) -> IndexMap<String, Value> {
        let mut index = IndexMap::new();
        for (key, entry) in &self.entries {
            let Some(descriptor) = DescriptorKey::parse(key) else {
                continue;
            };
            index.insert(descriptor.variable, entry.clone());
        }
        index
    }
}

/// Loads a term-mapping document from disk.
///
/// Fails on unreadable files, malformed JSON, and documents whose top
/// level is not an object.
pub fn load_term_mapping(path: &Path) -> Result<TermMapping> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::io(path, source))?;
    let document: Value =
        serde_json::from_str(&contents).map_err(|source| IngestError::json(path, source))?;
    let Value::Object(entries) = document else {
        return Err(IngestError::NotAnObject {
            path: path.to_path_buf(),
        });
    };
    debug!(path = %path.display(), entries = entries.len(), "loaded term mapping");
    Ok(TermMapping::from_object(entries))
}
