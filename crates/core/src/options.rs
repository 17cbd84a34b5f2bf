//! Sort configuration: kind priority lists and the built-in default pair.

use std::fmt;
use std::str::FromStr;

use k8s_openapi::api::admissionregistration::v1::{MutatingWebhookConfiguration, ValidatingWebhookConfiguration};
use k8s_openapi::api::apps::v1::{Deployment, StatefulSet};
use k8s_openapi::api::batch::v1::CronJob;
use k8s_openapi::api::core::v1::{
    ConfigMap, Endpoints, LimitRange, Namespace, PersistentVolume, PersistentVolumeClaim, ResourceQuota, Secret,
    Service, ServiceAccount,
};
use k8s_openapi::api::policy::v1::PodDisruptionBudget;
use k8s_openapi::api::rbac::v1::{ClusterRole, ClusterRoleBinding, Role, RoleBinding};
use k8s_openapi::api::scheduling::v1::PriorityClass;
use k8s_openapi::api::storage::v1::StorageClass;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use k8s_openapi::kube_aggregator::pkg::apis::apiregistration::v1::APIService;
use k8s_openapi::Resource;
use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

/// Kinds with few or no dependencies, in the order they should be applied.
const DEFAULT_ORDER_FIRST: &[&str] = &[
    Namespace::KIND,
    ResourceQuota::KIND,
    StorageClass::KIND,
    CustomResourceDefinition::KIND,
    ServiceAccount::KIND,
    // policy/v1beta1, no longer served; kept so older manifests still rank
    "PodSecurityPolicy",
    Role::KIND,
    ClusterRole::KIND,
    RoleBinding::KIND,
    ClusterRoleBinding::KIND,
    ConfigMap::KIND,
    Secret::KIND,
    Endpoints::KIND,
    Service::KIND,
    LimitRange::KIND,
    PriorityClass::KIND,
    PersistentVolume::KIND,
    PersistentVolumeClaim::KIND,
    Deployment::KIND,
    StatefulSet::KIND,
    CronJob::KIND,
    PodDisruptionBudget::KIND,
];

/// Kinds that intercept or serve other API calls; applied after everything else.
const DEFAULT_ORDER_LAST: &[&str] = &[
    APIService::KIND,
    MutatingWebhookConfiguration::KIND,
    ValidatingWebhookConfiguration::KIND,
];

/// Kind priority lists. Position matters in both.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacySortOptions {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub order_first: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub order_last: Vec<String>,
}

/// An explicit `null` list reads as an empty one.
fn null_as_empty<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(d)?.unwrap_or_default())
}

impl LegacySortOptions {
    pub fn new<S: Into<String>>(
        order_first: impl IntoIterator<Item = S>,
        order_last: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            order_first: order_first.into_iter().map(Into::into).collect(),
            order_last: order_last.into_iter().map(Into::into).collect(),
        }
    }

    /// Kinds listed in both `orderFirst` and `orderLast`, in `orderFirst` order.
    /// Such kinds end up ranked by their `orderLast` position.
    pub fn conflicting_kinds(&self) -> SmallVec<[&str; 4]> {
        let mut out: SmallVec<[&str; 4]> = SmallVec::new();
        for k in &self.order_first {
            if self.order_last.contains(k) && !out.contains(&k.as_str()) {
                out.push(k.as_str());
            }
        }
        out
    }
}

/// Ordering used when the caller supplies no `LegacySortOptions`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultOrderingPolicy(LegacySortOptions);

impl DefaultOrderingPolicy {
    pub fn new(options: LegacySortOptions) -> Self {
        Self(options)
    }

    pub fn options(&self) -> &LegacySortOptions {
        &self.0
    }
}

impl Default for DefaultOrderingPolicy {
    fn default() -> Self {
        Self(LegacySortOptions::new(
            DEFAULT_ORDER_FIRST.iter().copied(),
            DEFAULT_ORDER_LAST.iter().copied(),
        ))
    }
}

impl From<DefaultOrderingPolicy> for LegacySortOptions {
    fn from(p: DefaultOrderingPolicy) -> Self {
        p.0
    }
}

/// How a resource stream should be ordered before output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Kind-priority ordering with a name tie-break.
    #[default]
    Legacy,
    /// Keep input order.
    Fifo,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(SortOrder::Legacy),
            "fifo" => Ok(SortOrder::Fifo),
            other => Err(format!("unknown sort order {:?} (expected legacy or fifo)", other)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortOrder::Legacy => "legacy",
            SortOrder::Fifo => "fifo",
        })
    }
}
