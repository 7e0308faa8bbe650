//! Construction and persistence of the version-2 term mapping.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value, json};
use tracing::{debug, warn};

use pheno_model::{DescriptorKey, ReusedEntry, SynthesisSummary};

use crate::matcher::fold_index;

/// Association tag stamped on minimal placeholder entries.
pub const PLACEHOLDER_ASSOCIATION: &str = "NIDM";

/// A synthesized version-2 term mapping plus a per-class outcome summary.
#[derive(Debug, Clone, Default)]
pub struct Synthesis {
    /// Output entries keyed by `DD(variable='<name>')`, in version-2
    /// header order.
    pub mapping: Map<String, Value>,
    pub summary: SynthesisSummary,
}

/// Builds the version-2 term mapping from the version-1 annotations.
///
/// Only exact case-insensitive matching decides whether a version-2 header
/// overlaps version 1; separator-tolerant close matching is a reporting
/// aid, not a reuse rule. For each version-2 header, in header order:
///
/// - overlapping and annotated: the version-1 entry is deep-copied, its
///   `source_variable` rewritten to the version-2 name, and registered
///   under a key that omits the source-file component;
/// - overlapping but unannotated: a minimal placeholder is built instead
///   of dropping the name, logged at `warn` and counted separately;
/// - version-2 only: a minimal placeholder with exactly three fields.
pub fn synthesize(
    v1_headers: &[String],
    v2_headers: &[String],
    annotations: &IndexMap<String, Value>,
) -> Synthesis {
    let v1_index = fold_index(v1_headers);
    let mut mapping = Map::new();
    let mut summary = SynthesisSummary::default();

    for header in v2_headers {
        let key = DescriptorKey::for_variable(header.clone()).to_string();
        match v1_index.get(&header.to_lowercase()) {
            Some(v1_original) => match annotations.get(v1_original) {
                Some(entry) => {
                    let mut entry = entry.clone();
                    if let Value::Object(fields) = &mut entry {
                        fields.insert(
                            "source_variable".to_string(),
                            Value::String(header.clone()),
                        );
                    }
                    let value_type = entry
                        .get("valueType")
                        .and_then(Value::as_str)
                        .map(str::to_string);
                    mapping.insert(key, entry);
                    summary.reused.push(ReusedEntry {
                        version2: header.clone(),
                        version1: v1_original.clone(),
                        value_type,
                    });
                }
                None => {
                    warn!(
                        variable = %header,
                        matched = %v1_original,
                        "matched variable has no annotation entry; using a placeholder"
                    );
                    mapping.insert(key, placeholder_entry(header));
                    summary.fallback_placeholders.push(header.clone());
                }
            },
            None => {
                mapping.insert(key, placeholder_entry(header));
                summary.placeholders.push(header.clone());
            }
        }
    }

    debug!(
        reused = summary.reused.len(),
        placeholders = summary.placeholders.len(),
        fallback = summary.fallback_placeholders.len(),
        "synthesized term mapping"
    );

    Synthesis { mapping, summary }
}

fn placeholder_entry(variable: &str) -> Value {
    json!({
        "label": variable,
        "source_variable": variable,
        "associatedWith": PLACEHOLDER_ASSOCIATION,
    })
}

/// Writes the mapping as pretty-printed JSON with 4-space indentation.
///
/// The file is truncated and rewritten in place; any previous content at
/// the path is replaced. Given unchanged inputs the bytes written are
/// identical across runs.
pub fn write_mapping(path: &Path, mapping: &Map<String, Value>) -> Result<()> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    mapping
        .serialize(&mut serializer)
        .context("serialize term mapping")?;
    fs::write(path, buffer)
        .with_context(|| format!("write term mapping to {}", path.display()))?;
    Ok(())
}
