//! Catalog store for supplier pricing data
//!
//! Holds the current `Catalog` behind a single shared reference. Readers take
//! an `Arc` snapshot and keep using it for the whole call; a reload builds a
//! complete new catalog first and then swaps the reference, so a reader sees
//! either the old or the new version and never a mix of the two.

pub mod catalog;
pub mod rows;

pub use catalog::{Catalog, LoadReport, SkippedRow, DEFAULT_LABOR_KEY};
pub use rows::{RowOutcome, SkipReason};

use chrono::Utc;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

/// Shared holder of the authoritative catalog
#[derive(Debug)]
pub struct CatalogStore {
    current: RwLock<Arc<Catalog>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    /// Store holding an empty catalog
    pub fn new() -> Self {
        Self {
            current: RwLock::new(Arc::new(Catalog::empty())),
        }
    }

    /// Current catalog
    pub fn snapshot(&self) -> Arc<Catalog> {
        // Only whole-Arc assignments happen under the lock, so a poisoned
        // guard still holds a complete catalog
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Install a fully built catalog as the new version
    pub fn install(&self, mut catalog: Catalog) -> Arc<Catalog> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        catalog.version = guard.version() + 1;
        catalog.loaded_at = Some(Utc::now());
        let installed = Arc::new(catalog);
        *guard = Arc::clone(&installed);
        drop(guard);

        info!(
            version = installed.version(),
            materials = installed.materials().len(),
            labor = installed.labor().len(),
            price_list = installed.price_list().len(),
            fingerprint = installed.fingerprint(),
            "catalog installed"
        );
        installed
    }

    /// Build a catalog with `build` and install it.
    ///
    /// When `build` fails the previously installed catalog stays authoritative.
    pub fn reload<F, E>(&self, build: F) -> Result<Arc<Catalog>, E>
    where
        F: FnOnce() -> Result<Catalog, E>,
        E: std::fmt::Display,
    {
        match build() {
            Ok(catalog) => Ok(self.install(catalog)),
            Err(e) => {
                warn!(
                    error = %e,
                    kept_version = self.snapshot().version(),
                    "catalog reload failed, keeping previous catalog"
                );
                Err(e)
            }
        }
    }
}
