//! Wire types exchanged with a commerce project.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use merx_core::ResourceKind;

/// One paged read against a project's resource endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourceQuery {
    pub kind: ResourceKind,
    pub offset: u64,
    pub limit: u64,
    /// Delta-sync lower bound; `None` on a first run fetches everything.
    pub modified_since: Option<DateTime<Utc>>,
}

/// One resource as returned by the source project.
///
/// The orchestration layer only looks at `key` and (for categories) `parent`;
/// `payload` is carried opaquely to the target-side upsert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceRecord {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default)]
    pub payload: Value,
}

/// One page of source results. An empty (or short) page ends the drain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResourcePage {
    #[serde(default)]
    pub results: Vec<ResourceRecord>,
}

impl ResourcePage {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(results: Vec<ResourceRecord>) -> Self {
        Self { results }
    }

    pub fn len(&self) -> usize {
        self.results.len()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// One page of drafts to upsert into the target project.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpsertBatch {
    pub kind: ResourceKind,
    pub drafts: Vec<ResourceRecord>,
}

/// What the target reported for one applied batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyOutcome {
    pub created: u64,
    pub updated: u64,
    pub failed: u64,
}
