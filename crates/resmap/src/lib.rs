//! Kord resource collection: manifests keyed by current id, kept in order.

#![forbid(unsafe_code)]

mod collection;
mod error;
mod resmap;
mod resource;
mod yaml;

pub use collection::ResourceCollection;
pub use error::{LookupError, ResMapError, ResourceError};
pub use resmap::ResMap;
pub use resource::Resource;
