//! Structured sync events and the injectable sink they flow through.
//!
//! The orchestration layer never logs run lifecycle directly; it emits
//! [`SyncEvent`]s into an [`EventSink`]. The default [`TracingSink`] renders
//! them at `info`, and tests swap in a recording sink instead of scraping a
//! process-wide log buffer.

use serde::Serialize;

use crate::kind::ResourceKind;
use crate::stats::SyncStatistics;

/// Run-lifecycle event for one resource kind.
///
/// A successful run emits exactly one `Started` followed by exactly one
/// `Summary`; a failed run emits `Started` only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SyncEvent {
    Started { kind: ResourceKind },
    Summary { kind: ResourceKind, stats: SyncStatistics },
}

/// Destination for [`SyncEvent`]s.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: SyncEvent);
}

/// Default sink: renders events through `tracing` at `info`.
#[derive(Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&self, event: SyncEvent) {
        match event {
            SyncEvent::Started { kind } => {
                tracing::info!("Starting {}", kind.module_name());
            }
            SyncEvent::Summary { stats, .. } => {
                tracing::info!("{}", stats.report_message());
            }
        }
    }
}
