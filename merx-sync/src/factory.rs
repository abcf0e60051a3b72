//! The orchestration engine: client lifecycle + sequential supervision.

use std::sync::Arc;

use merx_client::{Clock, CommerceClient};
use merx_core::{EventSink, TracingSink};

use crate::dispatch::{self, SyncScope};
use crate::error::SyncError;
use crate::syncer::SyncerDescriptor;

/// Zero-argument supplier producing a ready-to-use client. Invoked once per
/// orchestration run, and only after the selector validated.
pub type ClientSupplier = Box<dyn Fn() -> Arc<dyn CommerceClient> + Send + Sync>;

/// Builds and supervises sync runs against a source/target client pair.
///
/// Each `sync`/`sync_all` call acquires its own client pair and closes it
/// unconditionally at the end, so concurrent invocations on the same factory
/// are independent.
pub struct SyncerFactory {
    source_supplier: ClientSupplier,
    target_supplier: ClientSupplier,
    clock: Arc<dyn Clock>,
    sink: Arc<dyn EventSink>,
}

impl SyncerFactory {
    pub fn new(
        source_supplier: ClientSupplier,
        target_supplier: ClientSupplier,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            source_supplier,
            target_supplier,
            clock,
            sink: Arc::new(TracingSink),
        }
    }

    /// Replace the default tracing sink with an injected one.
    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sink = sink;
        self
    }

    /// Run the module(s) the selector names.
    ///
    /// Selector validation happens before client acquisition: a blank or
    /// unknown selector fails without any client ever being opened.
    /// `Some("all")` is equivalent to [`SyncerFactory::sync_all`].
    pub async fn sync(&self, selector: Option<&str>) -> Result<(), SyncError> {
        let scope = dispatch::resolve(selector)?;
        self.run_scope(dispatch::descriptors(scope)).await
    }

    /// Run all five modules in dependency order.
    pub async fn sync_all(&self) -> Result<(), SyncError> {
        self.run_scope(dispatch::descriptors(SyncScope::All)).await
    }

    /// One orchestration run: acquire clients, run the descriptors strictly
    /// sequentially with fail-fast, close both clients exactly once whatever
    /// the outcome, surface the first error.
    async fn run_scope(&self, descriptors: Vec<SyncerDescriptor>) -> Result<(), SyncError> {
        let source = (self.source_supplier)();
        let target = (self.target_supplier)();

        let mut outcome = Ok(());
        for descriptor in descriptors {
            let result = descriptor
                .syncer
                .run(
                    source.as_ref(),
                    target.as_ref(),
                    self.clock.as_ref(),
                    self.sink.as_ref(),
                )
                .await;
            if let Err(error) = result {
                tracing::error!(kind = %descriptor.kind, error = %error, "sync run failed");
                outcome = Err(error);
                break;
            }
        }

        // Release is unconditional: no call may follow it, and it runs once
        // per client whether the loop succeeded, failed, or never started.
        source.close().await;
        target.close().await;
        outcome
    }
}
