//! Source trait for tabular pricing data

use countertop_types::{PricingError, RawRow};

/// External provider of sheet rows (CSV export, spreadsheet API, fixture)
pub trait RowSource: Send + Sync {
    /// Name used in logs and load errors
    fn name(&self) -> String;

    /// Fetch every data row; fails only when the source is unreadable as a whole
    fn fetch_rows(&self) -> Result<Vec<RawRow>, PricingError>;
}

impl RowSource for Vec<RawRow> {
    fn name(&self) -> String {
        "in-memory rows".to_string()
    }

    fn fetch_rows(&self) -> Result<Vec<RawRow>, PricingError> {
        Ok(self.clone())
    }
}
