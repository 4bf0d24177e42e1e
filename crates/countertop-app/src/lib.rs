//! Application service layer - config, catalog sources, pricing use cases

pub mod app;
pub mod config;
pub mod repository;

pub use app::pricing_service::PricingService;
pub use config::Config;
pub use repository::CatalogSources;
