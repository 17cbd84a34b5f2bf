//! Multi-document YAML stream codec with size and complexity guards.

use metrics::counter;
use serde::Deserialize;
use serde_json::Value as Json;
use tracing::debug;

use crate::error::{ResMapError, ResourceError};
use crate::resmap::ResMap;
use crate::resource::Resource;

const DEFAULT_MAX_BYTES: usize = 8 * 1024 * 1024;
const DEFAULT_MAX_NODES: usize = 100_000;

/// Positive integer from the environment, or `default` when unset or unparsable.
fn env_usize(name: &str, default: usize) -> usize {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            debug!(var = name, %raw, default, "ignoring unparsable limit");
            default
        }),
        Err(_) => default,
    }
}

/// Counts values (containers and scalars) up to `limit`; true once the count
/// reaches it.
fn exceeds_node_limit(root: &Json, limit: usize) -> bool {
    let mut pending: Vec<&Json> = vec![root];
    let mut seen = 0usize;
    while let Some(v) = pending.pop() {
        seen += 1;
        if seen >= limit {
            return true;
        }
        match v {
            Json::Object(map) => pending.extend(map.values()),
            Json::Array(items) => pending.extend(items.iter()),
            _ => {}
        }
    }
    false
}

impl ResMap {
    /// Decode a `---` separated manifest stream. Empty documents are skipped.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ResMapError> {
        let max_bytes = env_usize("KORD_MAX_YAML_BYTES", DEFAULT_MAX_BYTES);
        if yaml.len() > max_bytes {
            return Err(ResourceError::TooLarge(max_bytes).into());
        }
        let max_nodes = env_usize("KORD_MAX_YAML_NODES", DEFAULT_MAX_NODES);
        let mut m = ResMap::new();
        for (index, doc) in serde_yaml::Deserializer::from_str(yaml).enumerate() {
            let val = serde_yaml::Value::deserialize(doc).map_err(ResourceError::from)?;
            if val.is_null() {
                debug!(index, "skipping empty document");
                continue;
            }
            let json = serde_json::to_value(val).map_err(ResourceError::from)?;
            if exceeds_node_limit(&json, max_nodes) {
                return Err(ResourceError::TooComplex(max_nodes).into());
            }
            m.append(Resource::from_value(json, index)?)?;
        }
        counter!("resmap_docs_loaded", m.len() as u64);
        Ok(m)
    }

    /// Encode in iteration order as a `---` separated stream.
    pub fn to_yaml_string(&self) -> Result<String, serde_yaml::Error> {
        let docs = self
            .iter()
            .map(|r| serde_yaml::to_string(r.body()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(docs.join("---\n"))
    }

    /// Encode in iteration order as a pretty JSON array.
    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        let bodies: Vec<&Json> = self.iter().map(Resource::body).collect();
        serde_json::to_string_pretty(&bodies)
    }
}
