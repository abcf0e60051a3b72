//! The commerce-project client capability.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use merx_core::ResourceKind;

use crate::error::ClientError;
use crate::types::{ApplyOutcome, ResourcePage, ResourceQuery, UpsertBatch};

/// Everything the sync pipeline needs from a project connection.
///
/// One orchestration run owns its source and target client exclusively and
/// calls `close` exactly once at the end, on success and failure alike; no
/// call is issued on a client after its close.
#[async_trait]
pub trait CommerceClient: Send + Sync {
    /// Run one paged read against the project.
    async fn execute(&self, query: ResourceQuery) -> Result<ResourcePage, ClientError>;

    /// Upsert one batch of drafts into the project and report the outcome.
    async fn apply(&self, batch: UpsertBatch) -> Result<ApplyOutcome, ClientError>;

    /// Last successful sync instant recorded for `kind`, if any.
    async fn checkpoint(&self, kind: ResourceKind) -> Result<Option<DateTime<Utc>>, ClientError>;

    /// Record `at` as the last successful sync instant for `kind`.
    async fn record_checkpoint(
        &self,
        kind: ResourceKind,
        at: DateTime<Utc>,
    ) -> Result<(), ClientError>;

    /// Release the connection. Called exactly once per orchestration run.
    async fn close(&self);
}
