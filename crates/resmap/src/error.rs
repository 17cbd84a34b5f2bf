use thiserror::Error;

/// A manifest could not be turned into a [`crate::Resource`].
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("parsing YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("converting YAML to JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("YAML payload too large (>{0} bytes)")]
    TooLarge(usize),
    #[error("YAML document too complex (>{0} nodes)")]
    TooComplex(usize),
    #[error("document {index}: YAML missing {field}")]
    MissingField { index: usize, field: &'static str },
    #[error("document {index}: expected a mapping at the top level")]
    NotAnObject { index: usize },
}

/// Typed failure of [`crate::ResMap::get_by_current_id`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("no resource matches current id {0}")]
    NotFound(String),
}

#[derive(Debug, Error)]
pub enum ResMapError {
    #[error("may not add resource with an already registered id: {0}")]
    IdConflict(String),
    #[error(transparent)]
    Resource(#[from] ResourceError),
}
