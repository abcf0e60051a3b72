//! Per-kind paged fetch/apply syncer.

use std::collections::HashSet;

use async_trait::async_trait;

use merx_client::{Clock, CommerceClient, ResourceQuery, ResourceRecord, UpsertBatch};
use merx_core::{EventSink, ResourceKind, SyncEvent, SyncStatistics};

use crate::error::SyncError;

/// Source page size for every kind.
pub const QUERY_PAGE_SIZE: u64 = 500;

/// One resource kind's sync capability: drain the source page by page,
/// upsert each page into the target, accumulate statistics.
#[async_trait]
pub trait ResourceSyncer: Send + Sync {
    fn kind(&self) -> ResourceKind;

    async fn run(
        &self,
        source: &dyn CommerceClient,
        target: &dyn CommerceClient,
        clock: &dyn Clock,
        sink: &dyn EventSink,
    ) -> Result<SyncStatistics, SyncError>;
}

/// Pairs a resource kind with the syncer that executes it. Built once per
/// orchestration run by the dispatcher.
pub struct SyncerDescriptor {
    pub kind: ResourceKind,
    pub syncer: Box<dyn ResourceSyncer>,
}

impl SyncerDescriptor {
    pub fn for_kind(kind: ResourceKind) -> Self {
        Self {
            kind,
            syncer: Box::new(KindSyncer::new(kind)),
        }
    }
}

/// The uniform syncer implementation.
///
/// All five kinds share the same drain loop; categories additionally count
/// drafts whose parent key the run has not seen (summary "missing parent"
/// counter).
pub struct KindSyncer {
    kind: ResourceKind,
}

impl KindSyncer {
    pub fn new(kind: ResourceKind) -> Self {
        Self { kind }
    }
}

#[async_trait]
impl ResourceSyncer for KindSyncer {
    fn kind(&self) -> ResourceKind {
        self.kind
    }

    /// One full run against a client pair.
    ///
    /// Emits exactly one `Started` event up front and, on success only,
    /// exactly one `Summary` event at the end. Any client error aborts the
    /// run without a summary; progress already applied to the target stays
    /// (idempotent upserts, at-least-once).
    async fn run(
        &self,
        source: &dyn CommerceClient,
        target: &dyn CommerceClient,
        clock: &dyn Clock,
        sink: &dyn EventSink,
    ) -> Result<SyncStatistics, SyncError> {
        sink.emit(SyncEvent::Started { kind: self.kind });

        // Delta sync: only fetch what changed since the last recorded run.
        // The new checkpoint is the run's start instant, not its end, so a
        // resource modified mid-run is picked up again next time.
        let modified_since = target.checkpoint(self.kind).await?;
        let run_started_at = clock.now();

        let mut stats = SyncStatistics::new(self.kind);
        let mut seen_keys: HashSet<String> = HashSet::new();
        let mut offset = 0u64;

        loop {
            let page = source
                .execute(ResourceQuery {
                    kind: self.kind,
                    offset,
                    limit: QUERY_PAGE_SIZE,
                    modified_since,
                })
                .await?;
            let fetched = page.len() as u64;
            if fetched == 0 {
                break;
            }

            // Only the category drain reads `seen_keys`; other kinds skip
            // the bookkeeping entirely.
            if self.kind == ResourceKind::Category {
                stats.record_missing_parents(count_missing_parents(&page.results, &seen_keys));
                seen_keys.extend(page.results.iter().map(|record| record.key.clone()));
            }

            let outcome = target
                .apply(UpsertBatch {
                    kind: self.kind,
                    drafts: page.results,
                })
                .await?;
            stats.record_page(fetched, outcome.created, outcome.updated, outcome.failed);

            offset += fetched;
            if fetched < QUERY_PAGE_SIZE {
                break;
            }
        }

        target.record_checkpoint(self.kind, run_started_at).await?;

        sink.emit(SyncEvent::Summary {
            kind: self.kind,
            stats: stats.clone(),
        });
        Ok(stats)
    }
}

/// Categories whose parent key is neither in `seen_keys` nor in the same
/// page. Root categories (no parent) never count.
fn count_missing_parents(page: &[ResourceRecord], seen_keys: &HashSet<String>) -> u64 {
    let page_keys: HashSet<&str> = page.iter().map(|record| record.key.as_str()).collect();
    page.iter()
        .filter(|record| {
            record
                .parent
                .as_deref()
                .map(|parent| !seen_keys.contains(parent) && !page_keys.contains(parent))
                .unwrap_or(false)
        })
        .count() as u64
}
