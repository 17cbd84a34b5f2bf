//! Identity of a single resource instance.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::gvk::Gvk;

const NO_NAMESPACE: &str = "[noNs]";
const NO_NAME: &str = "[noName]";
const SEPARATOR: char = '|';

/// Namespace reported for kinds that cannot live in a namespace.
pub const NOT_NAMESPACEABLE: &str = "_non_namespaceable_";
/// Namespace a namespaced resource lands in when none is declared.
pub const DEFAULT_NAMESPACE: &str = "default";

/// A GVK plus name and namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResId {
    pub gvk: Gvk,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub namespace: String,
}

impl ResId {
    pub fn new(gvk: Gvk, name: impl Into<String>) -> Self {
        Self { gvk, name: name.into(), namespace: String::new() }
    }

    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = namespace.into();
        self
    }

    pub fn is_cluster_scoped(&self) -> bool {
        self.gvk.is_cluster_scoped()
    }

    /// Namespace the resource would occupy once applied.
    pub fn effective_namespace(&self) -> &str {
        if self.is_cluster_scoped() {
            NOT_NAMESPACEABLE
        } else if self.namespace.is_empty() {
            DEFAULT_NAMESPACE
        } else {
            &self.namespace
        }
    }
}

/// `<gvk>|<namespace>|<name>` with placeholders for empty parts.
impl fmt::Display for ResId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let ns = if self.namespace.is_empty() { NO_NAMESPACE } else { &self.namespace };
        let name = if self.name.is_empty() { NO_NAME } else { &self.name };
        write!(f, "{}{sep}{}{sep}{}", self.gvk, ns, name, sep = SEPARATOR)
    }
}
