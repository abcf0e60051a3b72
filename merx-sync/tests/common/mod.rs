//! Shared test doubles: a scriptable client, a recording event sink, and a
//! fixed clock.
#![allow(dead_code)]

use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};

use merx_client::{
    ApplyOutcome, ClientError, Clock, CommerceClient, ResourcePage, ResourceQuery, ResourceRecord,
    UpsertBatch,
};
use merx_core::{EventSink, ResourceKind, SyncEvent};
use merx_sync::{ClientSupplier, SyncerFactory};

/// Scriptable in-memory client.
///
/// `execute` pops scripted pages per kind (defaulting to an empty page),
/// `apply` pops scripted outcomes (defaulting to "everything created"),
/// and every interaction is recorded for assertions.
#[derive(Default)]
pub struct MockClient {
    pages: Mutex<HashMap<ResourceKind, VecDeque<Result<ResourcePage, ClientError>>>>,
    apply_outcomes: Mutex<VecDeque<Result<ApplyOutcome, ClientError>>>,
    checkpoints: Mutex<HashMap<ResourceKind, DateTime<Utc>>>,
    checkpoint_read_failures: Mutex<VecDeque<ClientError>>,
    checkpoint_write_failures: Mutex<VecDeque<ClientError>>,
    queries: Mutex<Vec<ResourceQuery>>,
    batches: Mutex<Vec<UpsertBatch>>,
    recorded_checkpoints: Mutex<Vec<(ResourceKind, DateTime<Utc>)>>,
    close_count: AtomicUsize,
}

impl MockClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_page(&self, kind: ResourceKind, page: ResourcePage) {
        self.pages
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push_back(Ok(page));
    }

    pub fn push_fetch_failure(&self, kind: ResourceKind, error: ClientError) {
        self.pages
            .lock()
            .unwrap()
            .entry(kind)
            .or_default()
            .push_back(Err(error));
    }

    pub fn push_apply_outcome(&self, outcome: ApplyOutcome) {
        self.apply_outcomes.lock().unwrap().push_back(Ok(outcome));
    }

    pub fn push_apply_failure(&self, error: ClientError) {
        self.apply_outcomes.lock().unwrap().push_back(Err(error));
    }

    pub fn set_checkpoint(&self, kind: ResourceKind, at: DateTime<Utc>) {
        self.checkpoints.lock().unwrap().insert(kind, at);
    }

    pub fn push_checkpoint_read_failure(&self, error: ClientError) {
        self.checkpoint_read_failures
            .lock()
            .unwrap()
            .push_back(error);
    }

    pub fn push_checkpoint_write_failure(&self, error: ClientError) {
        self.checkpoint_write_failures
            .lock()
            .unwrap()
            .push_back(error);
    }

    pub fn queries(&self) -> Vec<ResourceQuery> {
        self.queries.lock().unwrap().clone()
    }

    pub fn queried_kinds(&self) -> Vec<ResourceKind> {
        self.queries().into_iter().map(|query| query.kind).collect()
    }

    pub fn batches(&self) -> Vec<UpsertBatch> {
        self.batches.lock().unwrap().clone()
    }

    pub fn recorded_checkpoints(&self) -> Vec<(ResourceKind, DateTime<Utc>)> {
        self.recorded_checkpoints.lock().unwrap().clone()
    }

    pub fn close_count(&self) -> usize {
        self.close_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CommerceClient for MockClient {
    async fn execute(&self, query: ResourceQuery) -> Result<ResourcePage, ClientError> {
        let kind = query.kind;
        self.queries.lock().unwrap().push(query);
        self.pages
            .lock()
            .unwrap()
            .get_mut(&kind)
            .and_then(VecDeque::pop_front)
            .unwrap_or_else(|| Ok(ResourcePage::empty()))
    }

    async fn apply(&self, batch: UpsertBatch) -> Result<ApplyOutcome, ClientError> {
        let default = ApplyOutcome {
            created: batch.drafts.len() as u64,
            updated: 0,
            failed: 0,
        };
        self.batches.lock().unwrap().push(batch);
        self.apply_outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Ok(default))
    }

    async fn checkpoint(&self, kind: ResourceKind) -> Result<Option<DateTime<Utc>>, ClientError> {
        if let Some(error) = self.checkpoint_read_failures.lock().unwrap().pop_front() {
            return Err(error);
        }
        Ok(self.checkpoints.lock().unwrap().get(&kind).copied())
    }

    async fn record_checkpoint(
        &self,
        kind: ResourceKind,
        at: DateTime<Utc>,
    ) -> Result<(), ClientError> {
        if let Some(error) = self.checkpoint_write_failures.lock().unwrap().pop_front() {
            return Err(error);
        }
        self.recorded_checkpoints.lock().unwrap().push((kind, at));
        Ok(())
    }

    async fn close(&self) {
        self.close_count.fetch_add(1, Ordering::SeqCst);
    }
}

/// Sink that records every emitted event.
#[derive(Default)]
pub struct RecordingSink {
    events: Mutex<Vec<SyncEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SyncEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&self, event: SyncEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Clock pinned to one instant.
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// A deterministic instant for fixed clocks and checkpoints.
pub fn instant(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, hour, 0, 0).unwrap()
}

/// Supplier handing out clones of one shared mock, counting invocations.
pub fn counting_supplier(client: Arc<MockClient>) -> (ClientSupplier, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let supplier: ClientSupplier = Box::new(move || {
        counter.fetch_add(1, Ordering::SeqCst);
        let handle: Arc<dyn CommerceClient> = client.clone();
        handle
    });
    (supplier, calls)
}

/// Factory wired to two shared mocks, a recording sink, and a fixed clock.
pub fn factory(
    source: Arc<MockClient>,
    target: Arc<MockClient>,
    sink: Arc<RecordingSink>,
    now: DateTime<Utc>,
) -> SyncerFactory {
    let (source_supplier, _) = counting_supplier(source);
    let (target_supplier, _) = counting_supplier(target);
    SyncerFactory::new(source_supplier, target_supplier, Arc::new(FixedClock(now))).with_sink(sink)
}

/// A record with `key`, optional `parent`, and a null payload.
pub fn record(key: &str, parent: Option<&str>) -> ResourceRecord {
    ResourceRecord {
        key: key.to_string(),
        version: None,
        parent: parent.map(str::to_string),
        payload: serde_json::Value::Null,
    }
}

/// `count` records with distinct keys.
pub fn records(prefix: &str, count: usize) -> Vec<ResourceRecord> {
    (0..count)
        .map(|i| record(&format!("{prefix}-{i}"), None))
        .collect()
}
