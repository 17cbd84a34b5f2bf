use kord_resmap::{LookupError, ResMapError};
use thiserror::Error;

/// The transformer configuration payload is structurally invalid.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parse: invalid legacy order transformer config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Invariant violations while reordering a collection. These point at a
/// collection that changed underneath the sort, not at user input.
#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("internal: expected match for sorting {id}")]
    Unresolved {
        id: String,
        #[source]
        source: LookupError,
    },
    #[error("internal: rebuilding sorted collection: {0}")]
    Rebuild(#[source] ResMapError),
}
