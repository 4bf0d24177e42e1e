//! Immutable catalog snapshot and its lookups

use chrono::{DateTime, Utc};
use countertop_types::{LaborEntry, MaterialEntry, PriceListEntry, RawRow};
use serde::Serialize;
use sha2::{Digest, Sha256};
use tracing::{debug, warn};

use crate::rows::{
    validate_labor_row, validate_material_row, validate_price_row, RowOutcome, SkipReason,
};

/// Labor key used when the caller supplies none (matched case-sensitively)
pub const DEFAULT_LABOR_KEY: &str = "Default";

/// A row that did not make it into the catalog
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRow {
    /// "materials", "labor" or "priceList"
    pub table: &'static str,
    /// 1-based data row number (header excluded)
    pub row: usize,
    pub reason: SkipReason,
}

/// Summary of a catalog build
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoadReport {
    pub materials_accepted: usize,
    pub labor_accepted: usize,
    pub price_list_accepted: usize,
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }
}

/// Materials, labor and quote prices as of one load.
///
/// Never mutated after construction; a reload builds a new value.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    materials: Vec<MaterialEntry>,
    labor: Vec<LaborEntry>,
    price_list: Vec<PriceListEntry>,
    pub(crate) version: u64,
    pub(crate) loaded_at: Option<DateTime<Utc>>,
    fingerprint: String,
}

impl Catalog {
    /// Catalog with no entries (what callers see before the first load)
    pub fn empty() -> Self {
        Self::from_entries(Vec::new(), Vec::new())
    }

    /// Build from raw sheet rows, skipping invalid rows
    pub fn load(material_rows: &[RawRow], labor_rows: &[RawRow]) -> Self {
        Self::load_with_report(material_rows, labor_rows, &[]).0
    }

    /// Build from raw sheet rows and report which rows were skipped
    pub fn load_with_report(
        material_rows: &[RawRow],
        labor_rows: &[RawRow],
        price_rows: &[RawRow],
    ) -> (Self, LoadReport) {
        let mut report = LoadReport::default();

        let materials = collect_rows(material_rows, "materials", validate_material_row, &mut report);
        let labor = collect_rows(labor_rows, "labor", validate_labor_row, &mut report);
        let price_list = collect_rows(price_rows, "priceList", validate_price_row, &mut report);

        report.materials_accepted = materials.len();
        report.labor_accepted = labor.len();
        report.price_list_accepted = price_list.len();

        let catalog = Self::from_entries(materials, labor).with_price_list(price_list);
        (catalog, report)
    }

    /// Build from already-validated entries
    pub fn from_entries(materials: Vec<MaterialEntry>, labor: Vec<LaborEntry>) -> Self {
        let mut catalog = Self {
            materials,
            labor,
            price_list: Vec::new(),
            version: 0,
            loaded_at: None,
            fingerprint: String::new(),
        };
        catalog.fingerprint = catalog.compute_fingerprint();
        catalog
    }

    /// Attach the quote price list
    pub fn with_price_list(mut self, price_list: Vec<PriceListEntry>) -> Self {
        self.price_list = price_list;
        self.fingerprint = self.compute_fingerprint();
        self
    }

    pub fn materials(&self) -> &[MaterialEntry] {
        &self.materials
    }

    pub fn labor(&self) -> &[LaborEntry] {
        &self.labor
    }

    pub fn price_list(&self) -> &[PriceListEntry] {
        &self.price_list
    }

    /// Store-assigned version; 0 until installed in a `CatalogStore`
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    /// SHA-256 over the catalog contents
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty() && self.labor.is_empty() && self.price_list.is_empty()
    }

    /// Case-insensitive exact match on the material name; first in load order wins
    pub fn find_material(&self, name: &str) -> Option<&MaterialEntry> {
        let wanted = name.to_lowercase();
        self.materials
            .iter()
            .find(|m| m.name.to_lowercase() == wanted)
    }

    /// Labor entry for a key.
    ///
    /// A supplied key matches case-insensitively. Without a key (or with a
    /// blank one) the entry keyed exactly "Default" is used.
    pub fn find_labor(&self, key: Option<&str>) -> Option<&LaborEntry> {
        match key.map(str::trim).filter(|k| !k.is_empty()) {
            Some(key) => {
                let wanted = key.to_lowercase();
                self.labor.iter().find(|l| l.key.to_lowercase() == wanted)
            }
            None => self.labor.iter().find(|l| l.key == DEFAULT_LABOR_KEY),
        }
    }

    /// Labor cost for a key; 0 when nothing resolves
    pub fn labor_cost(&self, key: Option<&str>) -> f64 {
        match self.find_labor(key) {
            Some(entry) => entry.cost,
            None => {
                warn!(
                    labor_key = key.unwrap_or(DEFAULT_LABOR_KEY),
                    "labor entry not found, using 0"
                );
                0.0
            }
        }
    }

    /// Quote price per square foot for a material category
    pub fn find_price(&self, category: &str) -> Option<f64> {
        let wanted = category.trim().to_lowercase();
        self.price_list
            .iter()
            .find(|p| p.material == wanted)
            .map(|p| p.price)
    }

    fn compute_fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for part in [
            serde_json::to_vec(&self.materials),
            serde_json::to_vec(&self.labor),
            serde_json::to_vec(&self.price_list),
        ] {
            // Plain data with string keys always serializes
            hasher.update(part.unwrap_or_default());
            hasher.update([0u8]);
        }
        format!("{:x}", hasher.finalize())
    }
}

fn collect_rows<T>(
    rows: &[RawRow],
    table: &'static str,
    validate: fn(&RawRow) -> RowOutcome<T>,
    report: &mut LoadReport,
) -> Vec<T> {
    let mut accepted = Vec::with_capacity(rows.len());
    for (idx, row) in rows.iter().enumerate() {
        match validate(row) {
            RowOutcome::Accepted(entry) => accepted.push(entry),
            RowOutcome::Skipped(reason) => {
                debug!(table, row = idx + 1, %reason, "skipping row");
                report.skipped.push(SkippedRow {
                    table,
                    row: idx + 1,
                    reason,
                });
            }
        }
    }
    accepted
}
