//! Resource graph records: nodes, edges and their status enums.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

// ─── Kind ────────────────────────────────────────────────────────────────────

/// Resource kind. Unrecognised kinds are kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Kind {
    Application,
    Ingress,
    Service,
    Deployment,
    ReplicaSet,
    StatefulSet,
    Pod,
    ConfigMap,
    Secret,
    Other(String),
}

impl Kind {
    pub fn as_str(&self) -> &str {
        match self {
            Kind::Application => "Application",
            Kind::Ingress => "Ingress",
            Kind::Service => "Service",
            Kind::Deployment => "Deployment",
            Kind::ReplicaSet => "ReplicaSet",
            Kind::StatefulSet => "StatefulSet",
            Kind::Pod => "Pod",
            Kind::ConfigMap => "ConfigMap",
            Kind::Secret => "Secret",
            Kind::Other(name) => name,
        }
    }
}

impl From<&str> for Kind {
    fn from(s: &str) -> Self {
        match s {
            "Application" => Kind::Application,
            "Ingress" => Kind::Ingress,
            "Service" => Kind::Service,
            "Deployment" => Kind::Deployment,
            "ReplicaSet" => Kind::ReplicaSet,
            "StatefulSet" => Kind::StatefulSet,
            "Pod" => Kind::Pod,
            "ConfigMap" => Kind::ConfigMap,
            "Secret" => Kind::Secret,
            other => Kind::Other(other.to_string()),
        }
    }
}

impl From<String> for Kind {
    fn from(s: String) -> Self {
        Kind::from(s.as_str())
    }
}

impl From<Kind> for String {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Other(name) => name,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Health / SyncStatus ─────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Health {
    Healthy,
    Degraded,
    Missing,
    Progressing,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Health::Healthy => "Healthy",
            Health::Degraded => "Degraded",
            Health::Missing => "Missing",
            Health::Progressing => "Progressing",
            Health::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SyncStatus {
    Synced,
    OutOfSync,
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for SyncStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SyncStatus::Synced => "Synced",
            SyncStatus::OutOfSync => "OutOfSync",
            SyncStatus::Unknown => "Unknown",
        };
        f.write_str(s)
    }
}

// ─── NodeAttrs ───────────────────────────────────────────────────────────────

/// Kind-specific attributes. Anything not modelled lands in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NodeAttrs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Replica text such as "3/3".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replicas: Option<String>,
    /// Short summary shown on the card, e.g. "3 pods".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<String>,
    /// Cluster node a pod is scheduled on.
    #[serde(rename = "node", skip_serializing_if = "Option::is_none")]
    pub host_node: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ready: Option<String>,
    /// Service type, e.g. "ClusterIP".
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(rename = "clusterIP", skip_serializing_if = "Option::is_none")]
    pub cluster_ip: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub ports: Vec<String>,
    /// Ingress host name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_type: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

// ─── Node ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique within a graph.
    pub id: String,
    pub kind: Kind,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub health: Option<Health>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync: Option<SyncStatus>,
    #[serde(flatten)]
    pub attrs: NodeAttrs,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: impl Into<Kind>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            name: name.into(),
            health: None,
            sync: None,
            attrs: NodeAttrs::default(),
        }
    }

    pub fn with_health(mut self, health: Health) -> Self {
        self.health = Some(health);
        self
    }

    pub fn with_sync(mut self, sync: SyncStatus) -> Self {
        self.sync = Some(sync);
        self
    }

    pub fn with_attrs(mut self, attrs: NodeAttrs) -> Self {
        self.attrs = attrs;
        self
    }

    /// Health, with absence reported as `Unknown`.
    pub fn health(&self) -> Health {
        self.health.unwrap_or_default()
    }

    /// Sync status, with absence reported as `Unknown`.
    pub fn sync(&self) -> SyncStatus {
        self.sync.unwrap_or_default()
    }
}

// ─── Edge ────────────────────────────────────────────────────────────────────

/// How an edge is drawn; also tells ownership apart from runtime references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    /// Runtime dependency or reference.
    Dashed,
    /// Structural ownership. Unrecognised styles land here.
    #[default]
    #[serde(other)]
    Solid,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(rename = "type", default)]
    pub style: EdgeStyle,
}

impl Edge {
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            style: EdgeStyle::Solid,
        }
    }

    pub fn dashed(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            style: EdgeStyle::Dashed,
            ..Self::new(id, source, target)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/rust/test_model_types.rs"]
mod tests;
