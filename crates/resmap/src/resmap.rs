use kord_core::{Gvk, ResId};
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{LookupError, ResMapError};
use crate::resource::Resource;

/// Ordered resource collection indexed by current id.
///
/// Iteration order is insertion order. Ids are unique.
#[derive(Debug, Clone, Default)]
pub struct ResMap {
    items: Vec<Resource>,
    index: FxHashMap<ResId, usize>,
}

impl ResMap {
    pub fn new() -> Self { Self::default() }

    pub fn len(&self) -> usize { self.items.len() }
    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn append(&mut self, r: Resource) -> Result<(), ResMapError> {
        if self.index.contains_key(r.id()) {
            return Err(ResMapError::IdConflict(r.id().to_string()));
        }
        self.index.insert(r.id().clone(), self.items.len());
        self.items.push(r);
        Ok(())
    }

    /// Current ids in iteration order.
    pub fn all_ids(&self) -> Vec<ResId> {
        self.items.iter().map(|r| r.id().clone()).collect()
    }

    pub fn get_by_current_id(&self, id: &ResId) -> Result<&Resource, LookupError> {
        self.index
            .get(id)
            .map(|&i| &self.items[i])
            .ok_or_else(|| LookupError::NotFound(id.to_string()))
    }

    /// Resources whose GVK passes `filter` (see [`Gvk::is_selected`]).
    pub fn select<'a>(&'a self, filter: Option<&'a Gvk>) -> impl Iterator<Item = &'a Resource> + 'a {
        self.items.iter().filter(move |r| r.id().gvk.is_selected(filter))
    }

    pub fn clear(&mut self) {
        debug!(dropped = self.items.len(), "clearing resmap");
        self.items.clear();
        self.index.clear();
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Resource> { self.items.iter() }
}

impl<'a> IntoIterator for &'a ResMap {
    type Item = &'a Resource;
    type IntoIter = std::slice::Iter<'a, Resource>;
    fn into_iter(self) -> Self::IntoIter { self.items.iter() }
}
