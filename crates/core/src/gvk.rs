//! Group/Version/Kind identity of a resource type.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::rank::RankTable;
use crate::scope;

const NO_GROUP: &str = "~G";
const NO_VERSION: &str = "~V";
const NO_KIND: &str = "~K";
const FIELD_SEP: char = '_';

/// Group, version and kind of a resource type. Any field may be empty.
///
/// Equality is field-wise (the derived `PartialEq`); an empty string is a
/// value like any other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gvk {
    #[serde(default)]
    pub group: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub kind: String,
}

impl Gvk {
    pub fn new(group: impl Into<String>, version: impl Into<String>, kind: impl Into<String>) -> Self {
        Self { group: group.into(), version: version.into(), kind: kind.into() }
    }

    /// GVK of a typed k8s-openapi resource, e.g. `Gvk::of::<Namespace>()`.
    pub fn of<K: k8s_openapi::Resource>() -> Self {
        Self::new(K::GROUP, K::VERSION, K::KIND)
    }

    /// Build from a manifest's `apiVersion` and `kind` fields.
    pub fn from_api_version_kind(api_version: &str, kind: &str) -> Self {
        let (group, version) = parse_group_version(api_version);
        Self::new(group, version, kind)
    }

    /// Inverse of the `Display` form. Placeholders map back to empty fields;
    /// input without exactly three segments yields the empty GVK.
    pub fn from_canonical(s: &str) -> Self {
        let parts: Vec<&str> = s.split(FIELD_SEP).collect();
        let [g, v, k] = parts.as_slice() else {
            debug!(input = s, segments = parts.len(), "not a canonical gvk string");
            return Self::default();
        };
        let unplace = |seg: &str, placeholder: &str| {
            if seg == placeholder { String::new() } else { seg.to_string() }
        };
        Self {
            group: unplace(*g, NO_GROUP),
            version: unplace(*v, NO_VERSION),
            kind: unplace(*k, NO_KIND),
        }
    }

    /// Non-empty fields joined with `_`; `""` for the empty GVK.
    pub fn string_wo_empty_field(&self) -> String {
        [self.group.as_str(), self.version.as_str(), self.kind.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("_")
    }

    /// `apiVersion` as written in a manifest: `group/version`, or just
    /// `version` for the core group.
    pub fn api_version(&self) -> String {
        if self.group.is_empty() {
            self.version.clone()
        } else {
            format!("{}/{}", self.group, self.version)
        }
    }

    /// `None` selects everything. Otherwise every non-empty field of the
    /// filter must match exactly; empty filter fields are wildcards.
    pub fn is_selected(&self, filter: Option<&Gvk>) -> bool {
        let Some(f) = filter else { return true };
        let field_ok = |want: &str, have: &str| want.is_empty() || want == have;
        field_ok(&f.group, &self.group) && field_ok(&f.version, &self.version) && field_ok(&f.kind, &self.kind)
    }

    pub fn is_cluster_scoped(&self) -> bool {
        scope::is_cluster_scoped_kind(&self.kind)
    }

    /// Apply-order comparison: kind rank first, canonical string second.
    pub fn cmp_ranked(&self, other: &Gvk, ranks: &RankTable<'_>) -> Ordering {
        ranks
            .rank(&self.kind)
            .cmp(&ranks.rank(&other.kind))
            .then_with(|| self.to_string().cmp(&other.to_string()))
    }

    pub fn is_less_than(&self, other: &Gvk, ranks: &RankTable<'_>) -> bool {
        self.cmp_ranked(other, ranks) == Ordering::Less
    }
}

impl fmt::Display for Gvk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            or_placeholder(&self.group, NO_GROUP),
            or_placeholder(&self.version, NO_VERSION),
            or_placeholder(&self.kind, NO_KIND),
            sep = FIELD_SEP
        )
    }
}

fn or_placeholder<'a>(field: &'a str, placeholder: &'static str) -> &'a str {
    if field.is_empty() { placeholder } else { field }
}

/// Split an `apiVersion` at its first `/` into `(group, version)`.
/// Without a `/` the whole string is the version.
pub fn parse_group_version(api_version: &str) -> (&str, &str) {
    api_version.split_once('/').unwrap_or(("", api_version))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::DefaultOrderingPolicy;

    fn string_cases() -> Vec<(Gvk, &'static str, &'static str)> {
        vec![
            (Gvk::default(), "~G_~V_~K", ""),
            (Gvk::new("", "", "k"), "~G_~V_k", "k"),
            (Gvk::new("", "v", ""), "~G_v_~K", "v"),
            (Gvk::new("", "v", "k"), "~G_v_k", "v_k"),
            (Gvk::new("g", "", ""), "g_~V_~K", "g"),
            (Gvk::new("g", "", "k"), "g_~V_k", "g_k"),
            (Gvk::new("g", "v", ""), "g_v_~K", "g_v"),
            (Gvk::new("g", "v", "k"), "g_v_k", "g_v_k"),
        ]
    }

    #[test]
    fn equals_is_fieldwise() {
        assert_eq!(Gvk::new("a", "b", "c"), Gvk::new("a", "b", "c"));
        assert_eq!(Gvk::new("", "b", "c"), Gvk::new("", "b", "c"));
        assert_eq!(Gvk::new("", "", "c"), Gvk::new("", "", "c"));
        assert_ne!(Gvk::new("", "b", "c"), Gvk::new("a", "b", "c"));
    }

    #[test]
    fn canonical_string_and_back() {
        for (gvk, canonical, compact) in string_cases() {
            assert_eq!(gvk.to_string(), canonical);
            assert_eq!(Gvk::from_canonical(canonical), gvk, "{canonical}");
            assert_eq!(gvk.string_wo_empty_field(), compact);
        }
    }

    #[test]
    fn from_canonical_rejects_wrong_segment_count() {
        assert_eq!(Gvk::from_canonical("apps_v1"), Gvk::default());
        assert_eq!(Gvk::from_canonical("a_b_c_d"), Gvk::default());
    }

    #[test]
    fn api_version_forms() {
        let cases = [
            (Gvk::default(), ""),
            (Gvk::new("", "", "k"), ""),
            (Gvk::new("", "v", ""), "v"),
            (Gvk::new("", "v", "k"), "v"),
            (Gvk::new("g", "", ""), "g/"),
            (Gvk::new("g", "", "k"), "g/"),
            (Gvk::new("g", "v", ""), "g/v"),
            (Gvk::new("g", "v", "k"), "g/v"),
        ];
        for (gvk, want) in cases {
            assert_eq!(gvk.api_version(), want, "{gvk}");
        }
    }

    #[test]
    fn parse_group_version_table() {
        let cases = [
            ("", ("", "")),
            ("v1", ("", "v1")),
            ("apps/v1", ("apps", "v1")),
            ("/v1", ("", "v1")),
            ("apps/", ("apps", "")),
            ("/apps/", ("", "apps/")),
        ];
        for (input, want) in cases {
            assert_eq!(parse_group_version(input), want, "{input}");
        }
    }

    #[test]
    fn from_api_version_kind_splits_group() {
        let g = Gvk::from_api_version_kind("rbac.authorization.k8s.io/v1", "Role");
        assert_eq!(g, Gvk::new("rbac.authorization.k8s.io", "v1", "Role"));
        assert_eq!(g.api_version(), "rbac.authorization.k8s.io/v1");
    }

    #[test]
    fn typed_gvk_matches_manifest_form() {
        use k8s_openapi::api::apps::v1::Deployment;
        use k8s_openapi::api::core::v1::Namespace;
        assert_eq!(Gvk::of::<Namespace>(), Gvk::new("", "v1", "Namespace"));
        assert_eq!(Gvk::of::<Deployment>(), Gvk::from_api_version_kind("apps/v1", "Deployment"));
    }

    #[test]
    fn selection_filters() {
        let g = Gvk::new("group1", "version1", "kind1");
        assert!(Gvk::default().is_selected(None));
        assert!(g.is_selected(Some(&Gvk::new("group1", "version1", "kind1"))));
        assert!(!g.is_selected(Some(&Gvk::new("group2", "version1", "kind1"))));
        assert!(!g.is_selected(Some(&Gvk::new("group1", "version2", "kind1"))));
        assert!(!g.is_selected(Some(&Gvk::new("group1", "version1", "kind2"))));
        assert!(g.is_selected(Some(&Gvk::new("group1", "", "kind1"))));
        assert!(g.is_selected(Some(&Gvk::new("", "", "kind1"))));
        assert!(g.is_selected(Some(&Gvk::default())));
    }

    #[test]
    fn less_than_under_default_ranks() {
        let policy = DefaultOrderingPolicy::default();
        let ranks = RankTable::from_options(policy.options());
        let first_last = policy.options().order_first.last().unwrap().as_str();
        let last_first = policy.options().order_last[0].as_str();
        let ab = |k: &str| Gvk::new("a", "b", k);
        let pairs = [
            (ab("CustomResourceDefinition"), ab("RoleBinding")),
            (ab("Namespace"), ab("ClusterRole")),
            (ab("a"), ab("b")),
            (Gvk::new("a", "b", "Namespace"), Gvk::new("a", "c", "Namespace")),
            (Gvk::new("a", "c", "Namespace"), Gvk::new("b", "c", "Namespace")),
            (Gvk::new("b", "c", "Namespace"), Gvk::new("a", "c", "ClusterRole")),
            (Gvk::new("a", "c", "Namespace"), Gvk::new("a", "b", "ClusterRole")),
            (Gvk::new("a", "d", "Namespace"), Gvk::new("b", "c", "Namespace")),
            (ab(first_last), ab(last_first)),
            (ab(first_last), ab("CustomKindX")),
            (ab("CustomKindX"), ab(last_first)),
            (ab("CustomKindA"), ab("CustomKindB")),
            (ab("CustomKindX"), ab("MutatingWebhookConfiguration")),
            (ab("MutatingWebhookConfiguration"), ab("ValidatingWebhookConfiguration")),
            (ab("CustomKindX"), ab("ValidatingWebhookConfiguration")),
            (ab("APIService"), ab("ValidatingWebhookConfiguration")),
            (ab("Service"), ab("APIService")),
            (ab("Endpoints"), ab("Service")),
        ];
        for (x1, x2) in pairs {
            assert!(x1.is_less_than(&x2, &ranks), "{x1} should be less than {x2}");
            assert!(!x2.is_less_than(&x1, &ranks), "{x2} should not be less than {x1}");
        }
    }

    #[test]
    fn never_less_than_itself() {
        let policy = DefaultOrderingPolicy::default();
        let ranks = RankTable::from_options(policy.options());
        for (gvk, _, _) in string_cases() {
            assert_eq!(gvk, gvk.clone());
            assert!(!gvk.is_less_than(&gvk, &ranks));
        }
    }
}
