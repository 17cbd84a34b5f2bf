use kord_core::{Gvk, ResId};
use serde_json::Value as Json;

use crate::error::ResourceError;

/// One manifest plus the identity derived from its `apiVersion`, `kind` and
/// `metadata`. The body is carried through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    id: ResId,
    body: Json,
}

impl Resource {
    /// `index` is the document position, only used in error messages.
    pub fn from_value(body: Json, index: usize) -> Result<Self, ResourceError> {
        if !body.is_object() {
            return Err(ResourceError::NotAnObject { index });
        }
        let field = |v: Option<&Json>, path: &'static str| {
            v.and_then(|v| v.as_str())
                .map(str::to_string)
                .ok_or(ResourceError::MissingField { index, field: path })
        };
        let api_version = field(body.get("apiVersion"), "apiVersion")?;
        let kind = field(body.get("kind"), "kind")?;
        let meta = body.get("metadata");
        let name = field(meta.and_then(|m| m.get("name")), "metadata.name")?;
        let namespace = meta
            .and_then(|m| m.get("namespace"))
            .and_then(|v| v.as_str())
            .unwrap_or_default()
            .to_string();
        let id = ResId::new(Gvk::from_api_version_kind(&api_version, &kind), name).with_namespace(namespace);
        Ok(Self { id, body })
    }

    /// Current identity, as read from the body when the resource was built.
    pub fn id(&self) -> &ResId { &self.id }
    pub fn body(&self) -> &Json { &self.body }
}
