//! Selector resolution and descriptor construction.
//!
//! A selector is the single token the CLI's `-s`/`--sync` option carries:
//! one of the five canonical kind tokens or the wildcard `all`. Validation
//! happens here, before any client is acquired.

use merx_core::ResourceKind;

use crate::error::SyncError;
use crate::syncer::SyncerDescriptor;

/// Wording shared by both argument-error messages. Part of the external
/// contract: argument-validation tests match on it.
pub const SYNC_MODULE_OPTION_DESCRIPTION: &str = "Choose which sync module to run: \
     \"types\", \"productTypes\", \"categories\", \"products\", \
     \"inventoryEntries\" or \"all\" (runs all the modules).";

const WILDCARD: &str = "all";

/// Scope of one orchestration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncScope {
    /// Every kind, in [`ResourceKind::EXECUTION_ORDER`].
    All,
    /// A single kind.
    Single(ResourceKind),
}

/// Resolve a selector to a scope.
///
/// `None`, empty, and whitespace-only selectors fail as blank; non-blank
/// tokens are trimmed and matched case-sensitively against the canonical
/// tokens and the wildcard.
pub fn resolve(selector: Option<&str>) -> Result<SyncScope, SyncError> {
    let trimmed = selector.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(SyncError::InvalidArgument(format!(
            "Blank argument supplied to \"-s\" or \"--sync\" option! \
             {SYNC_MODULE_OPTION_DESCRIPTION}"
        )));
    }
    if trimmed == WILDCARD {
        return Ok(SyncScope::All);
    }
    match ResourceKind::from_selector(trimmed) {
        Some(kind) => Ok(SyncScope::Single(kind)),
        None => Err(SyncError::InvalidArgument(format!(
            "Unknown argument \"{trimmed}\" supplied to \"-s\" or \"--sync\" option! \
             {SYNC_MODULE_OPTION_DESCRIPTION}"
        ))),
    }
}

/// The ordered descriptor list for a scope.
///
/// For [`SyncScope::All`] the order is the referential-integrity order:
/// product types and types before products, categories before products,
/// inventory entries last.
pub fn descriptors(scope: SyncScope) -> Vec<SyncerDescriptor> {
    match scope {
        SyncScope::All => ResourceKind::EXECUTION_ORDER
            .into_iter()
            .map(SyncerDescriptor::for_kind)
            .collect(),
        SyncScope::Single(kind) => vec![SyncerDescriptor::for_kind(kind)],
    }
}
