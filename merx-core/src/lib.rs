//! # merx-core
//!
//! Domain types shared by the merx sync pipeline:
//! - [`kind`] — the five replicated resource kinds and their fixed execution order
//! - [`stats`] — per-run counters and the summary line rendered at run end
//! - [`event`] — structured sync events and the injectable [`EventSink`]

pub mod event;
pub mod kind;
pub mod stats;

pub use event::{EventSink, SyncEvent, TracingSink};
pub use kind::ResourceKind;
pub use stats::SyncStatistics;
