//! Kord ordering: sorts resources into an order that is safe to apply
//! one by one (namespaces before namespaced objects, webhooks last).

#![forbid(unsafe_code)]

mod error;
pub mod sorter;
pub mod transformer;

pub use error::{ApplyError, ConfigError};
pub use sorter::{sort_ids, IdSorter};
pub use transformer::LegacyOrderTransformer;
