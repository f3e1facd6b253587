//! Detail panel content for a single node.
//!
//! Fields are chosen by kind. ReplicaSets and StatefulSets additionally get a
//! list of placeholder pods derived from their badge or replica text; those
//! are display-only and typed as `SyntheticPod` so they cannot be mistaken for
//! pods that exist in the graph.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

use crate::model::{Health, Kind, Node};

/// Pod count used when the badge has no leading number.
pub const DEFAULT_POD_COUNT: usize = 3;
/// Synthetic pods are spread round-robin over this many placeholder hosts.
pub const PLACEHOLDER_HOSTS: usize = 3;
/// Counts above this fall back to `DEFAULT_POD_COUNT`.
pub const MAX_SYNTHETIC_PODS: usize = 100;

const MISSING: &str = "-";
const NO_EXTRA_INFO: &str = "No extra info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: String,
    pub value: String,
}

impl DetailField {
    fn new(label: &str, value: impl Into<String>) -> Self {
        Self {
            label: label.to_string(),
            value: value.into(),
        }
    }

    fn optional(label: &str, value: Option<&str>) -> Self {
        Self::new(label, value.unwrap_or(MISSING))
    }

    fn list(label: &str, values: &[String]) -> Self {
        if values.is_empty() {
            Self::new(label, MISSING)
        } else {
            Self::new(label, values.join(", "))
        }
    }
}

/// A placeholder pod shown under a ReplicaSet or StatefulSet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntheticPod {
    pub name: String,
    pub status: Health,
    pub ready: String,
    pub host: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetail {
    pub title: String,
    pub fields: Vec<DetailField>,
    pub synthetic_pods: Vec<SyntheticPod>,
}

/// Everything the side panel shows for `node`.
pub fn resolve(node: &Node) -> NodeDetail {
    NodeDetail {
        title: node.name.clone(),
        fields: detail_fields(node),
        synthetic_pods: synthetic_pods(node),
    }
}

/// Kind, health and sync (the last two only when present), then the kind
/// specific fields.
pub fn detail_fields(node: &Node) -> Vec<DetailField> {
    let mut fields = vec![DetailField::new("Kind", node.kind.as_str())];
    if let Some(health) = node.health {
        fields.push(DetailField::new("Health", health.to_string()));
    }
    if let Some(sync) = node.sync {
        fields.push(DetailField::new("Sync", sync.to_string()));
    }
    fields.extend(kind_fields(node));
    fields
}

pub fn kind_fields(node: &Node) -> Vec<DetailField> {
    let a = &node.attrs;
    match &node.kind {
        Kind::Deployment | Kind::StatefulSet => vec![
            DetailField::optional("Image", a.image.as_deref()),
            DetailField::optional("Replicas", a.replicas.as_deref()),
        ],
        Kind::ReplicaSet => vec![DetailField::optional("Pods", a.badge.as_deref())],
        Kind::Pod => vec![
            DetailField::optional("Node", a.host_node.as_deref()),
            DetailField::optional("Ready", a.ready.as_deref()),
        ],
        Kind::Service => vec![
            DetailField::optional("Type", a.service_type.as_deref()),
            DetailField::optional("ClusterIP", a.cluster_ip.as_deref()),
            DetailField::list("Ports", &a.ports),
        ],
        Kind::Ingress => vec![
            DetailField::optional("Host", a.host.as_deref()),
            DetailField::list("Paths", &a.paths),
        ],
        Kind::ConfigMap => vec![DetailField::list("Keys", &a.keys)],
        Kind::Secret => vec![
            DetailField::optional("Type", a.secret_type.as_deref()),
            DetailField::list("Keys", &a.keys),
        ],
        Kind::Application | Kind::Other(_) => vec![DetailField::new("Info", NO_EXTRA_INFO)],
    }
}

/// Placeholder pods for ReplicaSets and StatefulSets; empty for other kinds.
///
/// The count is the leading number of the badge, else of the replica text,
/// else `DEFAULT_POD_COUNT`. A count of zero or one above
/// `MAX_SYNTHETIC_PODS` also falls back to the default.
pub fn synthetic_pods(node: &Node) -> Vec<SyntheticPod> {
    if !matches!(node.kind, Kind::ReplicaSet | Kind::StatefulSet) {
        return Vec::new();
    }
    let count = [node.attrs.badge.as_deref(), node.attrs.replicas.as_deref()]
        .into_iter()
        .flatten()
        .find_map(parse_pod_count)
        .unwrap_or(DEFAULT_POD_COUNT);

    (1..=count)
        .map(|i| SyntheticPod {
            name: format!("{}-{}", node.name, i),
            status: Health::Healthy,
            ready: "1/1".to_string(),
            host: format!("node-{}", (i - 1) % PLACEHOLDER_HOSTS),
        })
        .collect()
}

/// Leading positive integer of `text`, e.g. 3 for "3 pods" or 2 for "2/2".
pub fn parse_pod_count(text: &str) -> Option<usize> {
    static LEADING_COUNT: OnceLock<Regex> = OnceLock::new();
    let re = LEADING_COUNT.get_or_init(|| Regex::new(r"^\s*(\d+)").expect("valid count pattern"));
    re.captures(text)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<usize>().ok())
        .filter(|&n| n > 0 && n <= MAX_SYNTHETIC_PODS)
}

#[cfg(test)]
#[path = "../tests/rust/test_detail.rs"]
mod tests;
