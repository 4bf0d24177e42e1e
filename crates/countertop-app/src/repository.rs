//! Catalog source adapters

use std::path::{Path, PathBuf};

use countertop_domain::{load_catalog, RowSource};
use countertop_infra::CsvFileSource;
use countertop_store::{Catalog, LoadReport};
use countertop_types::{ConfigError, Error, PricingError, Result};

use crate::config::Config;

/// The sheets a catalog is built from
pub struct CatalogSources {
    materials: Box<dyn RowSource>,
    labor: Box<dyn RowSource>,
    price_list: Option<Box<dyn RowSource>>,
}

impl CatalogSources {
    pub fn new(materials: impl RowSource + 'static, labor: impl RowSource + 'static) -> Self {
        Self {
            materials: Box::new(materials),
            labor: Box::new(labor),
            price_list: None,
        }
    }

    pub fn with_price_list(mut self, price_list: impl RowSource + 'static) -> Self {
        self.price_list = Some(Box::new(price_list));
        self
    }

    /// Fetch all sheets and build a catalog (nothing is installed here)
    pub fn load(&self) -> std::result::Result<(Catalog, LoadReport), PricingError> {
        load_catalog(
            self.materials.as_ref(),
            self.labor.as_ref(),
            self.price_list.as_deref(),
        )
    }
}

impl std::fmt::Debug for CatalogSources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CatalogSources")
            .field("materials", &self.materials.name())
            .field("labor", &self.labor.name())
            .field("price_list", &self.price_list.as_ref().map(|s| s.name()))
            .finish()
    }
}

/// Open CSV sources for the sheets named in the config
pub fn open_catalog_sources(config: &Config) -> Result<CatalogSources> {
    let materials = csv_source(config.materials_csv.as_ref(), "materials_csv")?;
    let labor = csv_source(config.labor_csv.as_ref(), "labor_csv")?;

    let sources = CatalogSources::new(materials, labor);
    match config.price_list_csv {
        Some(ref path) => Ok(sources.with_price_list(existing_file(path)?)),
        None => Ok(sources),
    }
}

fn csv_source(path: Option<&PathBuf>, setting: &str) -> Result<CsvFileSource> {
    let path = path.ok_or_else(|| ConfigError::MissingSetting(setting.to_string()))?;
    existing_file(path)
}

fn existing_file(path: &Path) -> Result<CsvFileSource> {
    if !path.is_file() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    Ok(CsvFileSource::new(path))
}
