//! Pricing Service - use cases over the shared catalog
//!
//! Every call takes one catalog snapshot and computes against it, so a reload
//! running on another thread never changes prices halfway through a request.

use std::sync::Arc;

use countertop_domain::{compute_estimate, compute_quote, derive_recommendations, resolve_match};
use countertop_store::{Catalog, CatalogStore, LoadReport};
use countertop_types::{
    EstimateRequest, EstimateResult, MatchResult, ObservedAttributes, PricingError,
    QuoteBreakdown, QuoteRequest, Recommendations, Result, Severity,
};
use countertop_vision::StoneAnalysis;
use tracing::info;

use crate::config::Config;
use crate::repository::{open_catalog_sources, CatalogSources};

#[derive(Debug)]
pub struct PricingService {
    store: Arc<CatalogStore>,
    sources: CatalogSources,
}

impl PricingService {
    /// Service with an empty catalog; call `reload` to populate it
    pub fn new(sources: CatalogSources) -> Self {
        Self::with_store(Arc::new(CatalogStore::new()), sources)
    }

    pub fn with_store(store: Arc<CatalogStore>, sources: CatalogSources) -> Self {
        Self { store, sources }
    }

    /// Open the configured sheets and perform the first load
    pub fn open(config: &Config) -> Result<Self> {
        let service = Self::new(open_catalog_sources(config)?);
        service.reload()?;
        Ok(service)
    }

    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// Current catalog snapshot
    pub fn catalog(&self) -> Arc<Catalog> {
        self.store.snapshot()
    }

    /// Rebuild the catalog from the sources and swap it in.
    ///
    /// On failure the previous catalog stays in place and keeps serving.
    pub fn reload(&self) -> std::result::Result<LoadReport, PricingError> {
        let mut report = LoadReport::default();
        let installed = self
            .store
            .reload(|| -> std::result::Result<Catalog, PricingError> {
                let (catalog, load_report) = self.sources.load()?;
                report = load_report;
                Ok(catalog)
            })?;

        info!(
            version = installed.version(),
            skipped = report.skipped_count(),
            "pricing catalog reloaded"
        );
        Ok(report)
    }

    pub fn estimate(&self, req: &EstimateRequest) -> std::result::Result<EstimateResult, PricingError> {
        compute_estimate(req, &self.catalog())
    }

    pub fn match_attributes(&self, attrs: &ObservedAttributes) -> MatchResult {
        resolve_match(attrs, &self.catalog())
    }

    /// Match a raw vision provider response; unreadable payloads become `Unavailable`
    pub fn analyze_response(&self, response: &str) -> StoneAnalysis {
        countertop_vision::analyze_response(response, &self.catalog())
    }

    pub fn quote(&self, req: &QuoteRequest) -> std::result::Result<QuoteBreakdown, PricingError> {
        compute_quote(req, &self.catalog())
    }

    pub fn recommend(&self, severity: Severity, stone_type: &str) -> Recommendations {
        derive_recommendations(severity, stone_type)
    }
}
