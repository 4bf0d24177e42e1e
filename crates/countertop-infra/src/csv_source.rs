//! CSV row source for published supplier sheets
//!
//! Spreadsheet exports arrive as UTF-8 (often with a BOM) or, from older
//! desktop tools, Windows-1252. Rows may be ragged; short rows simply lack the
//! trailing columns and are left for catalog validation to judge.

use std::fs;
use std::path::{Path, PathBuf};

use countertop_domain::RowSource;
use countertop_types::{PricingError, RawRow};
use encoding_rs::{UTF_8, WINDOWS_1252};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum CsvSourceError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV has no header row")]
    Empty,
}

/// Parse CSV bytes into header-keyed rows
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<RawRow>, CsvSourceError> {
    let (decoded, _, had_errors) = UTF_8.decode(bytes);
    let text = if had_errors {
        warn!("CSV is not valid UTF-8, decoding as Windows-1252");
        WINDOWS_1252.decode(bytes).0
    } else {
        decoded
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().all(str::is_empty) {
        return Err(CsvSourceError::Empty);
    }

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .filter(|(header, _)| !header.is_empty())
            .map(|(header, value)| (header.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok(rows)
}

/// Rows from a CSV file on disk
#[derive(Debug, Clone)]
pub struct CsvFileSource {
    path: PathBuf,
}

impl CsvFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Vec<RawRow>, CsvSourceError> {
        let bytes = fs::read(&self.path)?;
        parse_rows(&bytes)
    }
}

impl RowSource for CsvFileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch_rows(&self) -> Result<Vec<RawRow>, PricingError> {
        self.read()
            .map_err(|e| PricingError::load(self.name(), e.to_string()))
    }
}

/// Rows from CSV text already fetched by the caller (HTTP body, stdin)
#[derive(Debug, Clone)]
pub struct CsvTextSource {
    name: String,
    text: String,
}

impl CsvTextSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: text.into(),
        }
    }
}

impl RowSource for CsvTextSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn fetch_rows(&self) -> Result<Vec<RawRow>, PricingError> {
        parse_rows(self.text.as_bytes()).map_err(|e| PricingError::load(&self.name, e.to_string()))
    }
}
