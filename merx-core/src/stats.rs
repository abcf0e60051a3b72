//! Per-run sync counters and the rendered summary line.

use serde::{Deserialize, Serialize};

use crate::kind::ResourceKind;

/// Counters accumulated over one resource syncer run.
///
/// Created empty at run start, folded page by page, and rendered to the
/// summary line at run end. Never shared across runs or resource kinds.
/// `missing_parent` is only meaningful (and only rendered) for categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStatistics {
    pub kind: ResourceKind,
    pub processed: u64,
    pub created: u64,
    pub updated: u64,
    pub failed: u64,
    pub missing_parent: u64,
}

impl SyncStatistics {
    /// Empty counters for `kind`.
    pub fn new(kind: ResourceKind) -> Self {
        Self {
            kind,
            processed: 0,
            created: 0,
            updated: 0,
            failed: 0,
            missing_parent: 0,
        }
    }

    /// Fold one applied page into the counters.
    pub fn record_page(&mut self, fetched: u64, created: u64, updated: u64, failed: u64) {
        self.processed += fetched;
        self.created += created;
        self.updated += updated;
        self.failed += failed;
    }

    /// Count categories whose parent was not part of the source data seen so far.
    pub fn record_missing_parents(&mut self, count: u64) {
        self.missing_parent += count;
    }

    /// The exact summary line consumed by log scrapers.
    ///
    /// Categories get the extra missing-parent clause; every other kind uses
    /// the three-counter form.
    pub fn report_message(&self) -> String {
        match self.kind {
            ResourceKind::Category => format!(
                "Summary: {} categories were processed in total \
                 ({} created, {} updated, {} failed to sync and \
                 {} categories with a missing parent).",
                self.processed, self.created, self.updated, self.failed, self.missing_parent
            ),
            kind => format!(
                "Summary: {} {} were processed in total \
                 ({} created, {} updated and {} failed to sync).",
                self.processed,
                kind.noun(),
                self.created,
                self.updated,
                self.failed
            ),
        }
    }
}
