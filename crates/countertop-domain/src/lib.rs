//! Domain services for countertop pricing
//!
//! Every service is a pure function over a `Catalog` snapshot.

pub mod repository;
pub mod service;

pub use repository::RowSource;
pub use service::*;
