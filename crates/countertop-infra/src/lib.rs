//! Infrastructure layer
//!
//! Concrete `RowSource` implementations for the pricing catalog.

pub mod csv_source;

pub use csv_source::{parse_rows, CsvFileSource, CsvSourceError, CsvTextSource};
