//! Catalog construction from external row sources

use countertop_store::{Catalog, LoadReport};
use countertop_types::PricingError;
use tracing::{info, warn};

use crate::repository::RowSource;

/// Fetch every source and build a complete catalog.
///
/// All fetches happen before anything is built, so a failure in any one of
/// them returns an error without producing a partial catalog.
pub fn load_catalog(
    materials: &dyn RowSource,
    labor: &dyn RowSource,
    price_list: Option<&dyn RowSource>,
) -> Result<(Catalog, LoadReport), PricingError> {
    let material_rows = materials.fetch_rows()?;
    let labor_rows = labor.fetch_rows()?;
    let price_rows = match price_list {
        Some(source) => source.fetch_rows()?,
        None => Vec::new(),
    };

    info!(
        materials_source = %materials.name(),
        material_rows = material_rows.len(),
        labor_source = %labor.name(),
        labor_rows = labor_rows.len(),
        price_rows = price_rows.len(),
        "building catalog"
    );

    let (catalog, report) = Catalog::load_with_report(&material_rows, &labor_rows, &price_rows);
    if report.skipped_count() > 0 {
        warn!(skipped = report.skipped_count(), "some rows were skipped");
    }
    Ok((catalog, report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use countertop_types::RawRow;

    struct Unreachable;

    impl RowSource for Unreachable {
        fn name(&self) -> String {
            "unreachable sheet".to_string()
        }

        fn fetch_rows(&self) -> Result<Vec<RawRow>, PricingError> {
            Err(PricingError::load(self.name(), "connection refused"))
        }
    }

    fn row(pairs: &[(&str, &str)]) -> RawRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_load_from_in_memory_sources() {
        let materials = vec![row(&[
            ("Color Name", "Frost-N"),
            ("Material", "Quartz"),
            ("Cost/SqFt", "10.24"),
            ("Total/SqFt", "55"),
        ])];
        let labor = vec![row(&[("LaborKey", "Default"), ("Cost", "50")])];

        let (catalog, report) = load_catalog(&materials, &labor, None).unwrap();

        assert_eq!(catalog.materials().len(), 1);
        assert_eq!(catalog.labor_cost(None), 50.0);
        assert_eq!(report.skipped_count(), 0);
    }

    #[test]
    fn test_any_source_failure_is_a_load_error() {
        let rows: Vec<RawRow> = Vec::new();
        let err = load_catalog(&rows, &Unreachable, None).unwrap_err();
        assert_eq!(
            err,
            PricingError::load("unreachable sheet", "connection refused")
        );

        let err = load_catalog(&rows, &rows, Some(&Unreachable)).unwrap_err();
        assert!(matches!(err, PricingError::Load { .. }));
    }
}
