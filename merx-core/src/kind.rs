//! The five replicated resource kinds.
//!
//! Each kind carries three fixed strings:
//! - the *selector token* accepted on the `-s`/`--sync` option (`products`, ...)
//! - the *module name* used in "Starting ..." log events (`ProductSync`, ...)
//! - the *plural noun* used in summary lines (`products`, `inventory entries`, ...)

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five master-data resource kinds replicated between projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceKind {
    ProductType,
    Type,
    Category,
    Product,
    InventoryEntry,
}

impl ResourceKind {
    /// All kinds in the order `sync --sync all` must run them.
    ///
    /// Products reference product types, types and categories, so those three
    /// sync first; inventory entries are independent and run last. Reordering
    /// breaks referential integrity in the target project.
    pub const EXECUTION_ORDER: [ResourceKind; 5] = [
        ResourceKind::ProductType,
        ResourceKind::Type,
        ResourceKind::Category,
        ResourceKind::Product,
        ResourceKind::InventoryEntry,
    ];

    /// Canonical selector token, matched case-sensitively on the CLI surface.
    pub fn selector(&self) -> &'static str {
        match self {
            ResourceKind::ProductType => "productTypes",
            ResourceKind::Type => "types",
            ResourceKind::Category => "categories",
            ResourceKind::Product => "products",
            ResourceKind::InventoryEntry => "inventoryEntries",
        }
    }

    /// Sync-module name as it appears in "Starting ..." events.
    pub fn module_name(&self) -> &'static str {
        match self {
            ResourceKind::ProductType => "ProductTypeSync",
            ResourceKind::Type => "TypeSync",
            ResourceKind::Category => "CategorySync",
            ResourceKind::Product => "ProductSync",
            ResourceKind::InventoryEntry => "InventorySync",
        }
    }

    /// Plural noun used in summary lines.
    pub fn noun(&self) -> &'static str {
        match self {
            ResourceKind::ProductType => "product types",
            ResourceKind::Type => "types",
            ResourceKind::Category => "categories",
            ResourceKind::Product => "products",
            ResourceKind::InventoryEntry => "inventory entries",
        }
    }

    /// Resolve a canonical selector token to a kind. Exact match only; the
    /// caller is responsible for trimming.
    pub fn from_selector(token: &str) -> Option<ResourceKind> {
        ResourceKind::EXECUTION_ORDER
            .into_iter()
            .find(|kind| kind.selector() == token)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.selector())
    }
}
