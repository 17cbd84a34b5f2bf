use kord_core::ResId;

use crate::error::{LookupError, ResMapError};
use crate::resmap::ResMap;
use crate::resource::Resource;

/// What a host collection must offer so its contents can be reordered:
/// enumerate ids, resolve an id back to its item, clear and re-append.
pub trait ResourceCollection {
    type Item: Clone;

    fn all_ids(&self) -> Vec<ResId>;
    fn get_by_current_id(&self, id: &ResId) -> Result<&Self::Item, LookupError>;
    fn clear(&mut self);
    /// After `clear`, must accept the items the collection held before it.
    fn append(&mut self, item: Self::Item) -> Result<(), ResMapError>;
}

impl ResourceCollection for ResMap {
    type Item = Resource;

    fn all_ids(&self) -> Vec<ResId> { ResMap::all_ids(self) }
    fn get_by_current_id(&self, id: &ResId) -> Result<&Resource, LookupError> { ResMap::get_by_current_id(self, id) }
    fn clear(&mut self) { ResMap::clear(self) }
    fn append(&mut self, item: Resource) -> Result<(), ResMapError> { ResMap::append(self, item) }
}
