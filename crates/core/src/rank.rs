//! Kind rank table derived from a pair of priority lists.

use rustc_hash::FxHashMap;

use crate::options::LegacySortOptions;

/// Kind name -> rank. `orderFirst` kinds are negative (earliest most
/// negative), `orderLast` kinds are positive, everything else is 0.
///
/// Built per sort call and borrows the kind names from its options.
#[derive(Debug, Clone, Default)]
pub struct RankTable<'a> {
    ranks: FxHashMap<&'a str, i64>,
}

impl<'a> RankTable<'a> {
    /// `orderLast` is assigned after `orderFirst`, so a kind in both lists
    /// takes its `orderLast` rank. Within a list the later position wins.
    pub fn new(order_first: &'a [String], order_last: &'a [String]) -> Self {
        let mut ranks = FxHashMap::default();
        let n = order_first.len() as i64;
        for (i, kind) in order_first.iter().enumerate() {
            ranks.insert(kind.as_str(), -n + i as i64);
        }
        for (i, kind) in order_last.iter().enumerate() {
            ranks.insert(kind.as_str(), 1 + i as i64);
        }
        Self { ranks }
    }

    pub fn from_options(options: &'a LegacySortOptions) -> Self {
        Self::new(&options.order_first, &options.order_last)
    }

    pub fn rank(&self, kind: &str) -> i64 {
        self.ranks.get(kind).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize { self.ranks.len() }
    pub fn is_empty(&self) -> bool { self.ranks.is_empty() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn first_negative_last_positive_rest_zero() {
        let first = strings(&["Namespace", "Secret", "Service"]);
        let last = strings(&["MutatingWebhookConfiguration", "ValidatingWebhookConfiguration"]);
        let t = RankTable::new(&first, &last);
        assert_eq!(t.rank("Namespace"), -3);
        assert_eq!(t.rank("Secret"), -2);
        assert_eq!(t.rank("Service"), -1);
        assert_eq!(t.rank("Ingress"), 0);
        assert_eq!(t.rank("MutatingWebhookConfiguration"), 1);
        assert_eq!(t.rank("ValidatingWebhookConfiguration"), 2);
        assert_eq!(t.len(), 5);
    }

    #[test]
    fn order_last_wins_on_overlap() {
        let first = strings(&["Namespace", "Secret"]);
        let last = strings(&["Secret"]);
        let t = RankTable::new(&first, &last);
        assert_eq!(t.rank("Secret"), 1);
        assert_eq!(t.rank("Namespace"), -2);
    }

    #[test]
    fn later_position_wins_within_a_list() {
        let first = strings(&["Secret", "Namespace", "Secret"]);
        let t = RankTable::new(&first, &[]);
        assert_eq!(t.rank("Secret"), -1);
        assert_eq!(t.rank("Namespace"), -2);
    }

    #[test]
    fn empty_lists_rank_everything_zero() {
        let t = RankTable::default();
        assert!(t.is_empty());
        assert_eq!(t.rank("Namespace"), 0);
    }
}
