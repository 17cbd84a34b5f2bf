//! Reorders a resource collection by kind priority.

use std::time::Instant;

use kord_core::{DefaultOrderingPolicy, LegacySortOptions};
use kord_resmap::ResourceCollection;
use metrics::{counter, histogram};
use serde::Deserialize;
use tracing::{debug, error, info, warn};

use crate::error::{ApplyError, ConfigError};
use crate::sorter::IdSorter;

/// Transformer payload. Keys other than `legacySortOptions` (apiVersion,
/// kind, metadata, ...) are accepted and ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TransformerConfig {
    #[serde(default)]
    legacy_sort_options: Option<LegacySortOptions>,
}

/// Sorts a collection so that cluster-wide, dependency-free kinds come first
/// and kinds with many dependencies (webhook configurations) come last.
#[derive(Debug, Clone)]
pub struct LegacyOrderTransformer {
    policy: DefaultOrderingPolicy,
    options: LegacySortOptions,
}

impl Default for LegacyOrderTransformer {
    fn default() -> Self {
        Self::with_policy(DefaultOrderingPolicy::default())
    }
}

impl LegacyOrderTransformer {
    /// Unconfigured transformers sort with `policy`, as do configurations
    /// that omit `legacySortOptions`.
    pub fn with_policy(policy: DefaultOrderingPolicy) -> Self {
        let options = policy.options().clone();
        Self { policy, options }
    }

    pub fn with_options(options: LegacySortOptions) -> Self {
        let mut t = Self::default();
        t.install(options);
        t
    }

    pub fn options(&self) -> &LegacySortOptions { &self.options }

    /// Decode a YAML (or JSON) payload. On error the current options stay.
    pub fn configure(&mut self, raw: &str) -> Result<(), ConfigError> {
        let cfg: TransformerConfig = if raw.trim().is_empty() {
            TransformerConfig::default()
        } else {
            serde_yaml::from_str(raw)?
        };
        match cfg.legacy_sort_options {
            Some(options) => self.install(options),
            None => {
                debug!("no legacySortOptions supplied; using default ordering policy");
                self.install(self.policy.options().clone());
            }
        }
        Ok(())
    }

    fn install(&mut self, options: LegacySortOptions) {
        for kind in options.conflicting_kinds() {
            warn!(kind, "kind listed in both orderFirst and orderLast; orderLast position applies");
        }
        info!(order_first = options.order_first.len(), order_last = options.order_last.len(), "legacy sort options installed");
        self.options = options;
    }

    /// Rebuild `collection` in apply order. If any id fails to resolve the
    /// collection is left as it was. If re-appending fails part way, the
    /// original order is restored before the error is returned.
    pub fn apply<C: ResourceCollection>(&self, collection: &mut C) -> Result<(), ApplyError> {
        let t0 = Instant::now();
        counter!("order_apply_total", 1u64);
        let ids = collection.all_ids();

        let mut items = Vec::with_capacity(ids.len());
        for id in &ids {
            match collection.get_by_current_id(id) {
                Ok(item) => items.push(item.clone()),
                Err(source) => {
                    counter!("order_apply_err", 1u64);
                    return Err(ApplyError::Unresolved { id: id.to_string(), source });
                }
            }
        }

        let sorter = IdSorter::new(&self.options);
        let mut perm: Vec<usize> = (0..ids.len()).collect();
        perm.sort_by(|&a, &b| sorter.compare(&ids[a], &ids[b]));

        collection.clear();
        for &i in &perm {
            if let Err(e) = collection.append(items[i].clone()) {
                counter!("order_apply_err", 1u64);
                warn!(id = %ids[i], error = %e, "rebuild failed; restoring original order");
                restore(collection, items);
                return Err(ApplyError::Rebuild(e));
            }
        }
        histogram!("order_apply_ms", t0.elapsed().as_secs_f64() * 1000.0);
        debug!(resources = ids.len(), "collection reordered");
        Ok(())
    }
}

fn restore<C: ResourceCollection>(collection: &mut C, items: Vec<C::Item>) {
    collection.clear();
    for item in items {
        if let Err(e) = collection.append(item) {
            error!(error = %e, "could not restore collection after failed rebuild");
            return;
        }
    }
}
