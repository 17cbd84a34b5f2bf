//! Kord core types: resource identity, cluster scope and kind ranking.

#![forbid(unsafe_code)]

pub mod gvk;
pub mod options;
pub mod rank;
pub mod resid;
pub mod scope;

pub use gvk::{parse_group_version, Gvk};
pub use options::{DefaultOrderingPolicy, LegacySortOptions, SortOrder};
pub use rank::RankTable;
pub use resid::ResId;

pub mod prelude {
    pub use super::{DefaultOrderingPolicy, Gvk, LegacySortOptions, RankTable, ResId, SortOrder};
}
