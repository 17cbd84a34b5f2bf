//! Apply-order sort over resource ids.

use std::cmp::Ordering;

use kord_core::{LegacySortOptions, RankTable, ResId};

/// Sorts ids by kind rank, then GVK string, then full id string.
#[derive(Debug, Clone)]
pub struct IdSorter<'a> {
    ranks: RankTable<'a>,
}

impl<'a> IdSorter<'a> {
    pub fn new(options: &'a LegacySortOptions) -> Self {
        Self { ranks: RankTable::from_options(options) }
    }

    /// Total order: distinct ids never compare equal.
    pub fn compare(&self, a: &ResId, b: &ResId) -> Ordering {
        if a.gvk != b.gvk {
            return a.gvk.cmp_ranked(&b.gvk, &self.ranks);
        }
        a.to_string().cmp(&b.to_string())
    }

    pub fn sort(&self, ids: &mut [ResId]) {
        ids.sort_by(|a, b| self.compare(a, b));
    }
}

/// Sort with a rank table built for this call only.
pub fn sort_ids(ids: &mut [ResId], options: &LegacySortOptions) {
    IdSorter::new(options).sort(ids);
}
