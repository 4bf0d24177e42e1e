//! Application use cases

pub mod pricing_service;
