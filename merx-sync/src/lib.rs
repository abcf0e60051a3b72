//! # merx-sync
//!
//! The orchestration core: selector dispatch, per-kind paged syncers, and
//! the [`SyncerFactory`] that owns client lifecycle for one run.
//!
//! Call [`SyncerFactory::sync`] with a selector token, or
//! [`SyncerFactory::sync_all`] to run every kind in dependency order.

pub mod dispatch;
pub mod error;
pub mod factory;
pub mod syncer;

pub use dispatch::{resolve, SyncScope, SYNC_MODULE_OPTION_DESCRIPTION};
pub use error::SyncError;
pub use factory::{ClientSupplier, SyncerFactory};
pub use syncer::{KindSyncer, ResourceSyncer, SyncerDescriptor, QUERY_PAGE_SIZE};
