//! Shared catalog state
//!
//! The catalog is swapped as a whole snapshot: every request clones one
//! `Arc` and runs its entire match+calculate pass against that snapshot, so
//! a concurrent reload can never produce a quote straddling two rule sets.

use std::sync::{Arc, RwLock};

use core_kernel::CatalogVersion;
use domain_underwriting::RuleCatalog;

/// Handle to the current catalog snapshot
#[derive(Clone)]
pub struct CatalogHandle {
    inner: Arc<RwLock<Arc<RuleCatalog>>>,
}

impl CatalogHandle {
    /// Wraps an initial snapshot
    pub fn new(catalog: RuleCatalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(catalog))),
        }
    }

    /// Returns the current snapshot; cheap Arc clone
    pub fn snapshot(&self) -> Arc<RuleCatalog> {
        // The lock only ever guards an Arc swap, so a poisoned lock still
        // holds a usable snapshot
        match self.inner.read() {
            Ok(guard) => Arc::clone(&guard),
            Err(poisoned) => Arc::clone(&poisoned.into_inner()),
        }
    }

    /// Atomically replaces the snapshot, returning the new version token
    pub fn swap(&self, catalog: RuleCatalog) -> CatalogVersion {
        let version = catalog.version();
        let next = Arc::new(catalog);
        match self.inner.write() {
            Ok(mut guard) => *guard = next,
            Err(poisoned) => *poisoned.into_inner() = next,
        }
        version
    }
}
