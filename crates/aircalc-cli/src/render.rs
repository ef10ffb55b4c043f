//! Tables for summaries and catalogs.

use comfy_table::{CellAlignment, ContentArrangement, Table, presets::UTF8_FULL_CONDENSED};

use aircalc_core::domain::{Catalog, Categories, Service, Summary};

/// Empty table with the shared preset. Wraps to the terminal width when
/// there is one.
fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: &[usize]) {
    for &index in columns {
        if let Some(column) = table.column_mut(index) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// One row per selected service, or a placeholder when nothing is selected.
pub fn summary_table(summary: &Summary) -> String {
    if summary.is_empty() {
        return "No services selected".to_string();
    }

    let mut table = create_table();
    table.set_header(vec!["ID", "Service", "Qty", "Price", "Total"]);
    for line in &summary.selected_services {
        table.add_row(vec![
            line.id.to_string(),
            line.name.clone(),
            line.quantity.to_string(),
            line.price.normalize().to_string(),
            line.total.normalize().to_string(),
        ]);
    }
    align_right(&mut table, &[0, 2, 3, 4]);
    table.to_string()
}

/// The total line shown under a summary.
pub fn total_line(summary: &Summary, currency: &str) -> String {
    format!("Total: {} {currency}", summary.total_display())
}

/// Catalog as one flat table.
pub fn catalog_table(catalog: &Catalog, currency: &str) -> String {
    services_table(catalog.iter(), currency)
}

/// Catalog grouped into category sections. Empty categories are skipped.
pub fn categorized_table(categories: &Categories<'_>, currency: &str) -> String {
    categories
        .iter()
        .filter(|(_, services)| !services.is_empty())
        .map(|(category, services)| {
            format!(
                "[{category}]\n{}",
                services_table(services.iter().copied(), currency)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn services_table<'a>(services: impl Iterator<Item = &'a Service>, currency: &str) -> String {
    let mut table = create_table();
    table.set_header(vec!["ID", "Service", "Price", "Unit", "Kind"]);
    for service in services {
        table.add_row(vec![
            service.id.to_string(),
            service.name.clone(),
            format!("{} {currency}", service.price.normalize()),
            service.unit.abbreviation().to_string(),
            service.unit.kind_label().to_string(),
        ]);
    }
    align_right(&mut table, &[0, 2]);
    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use aircalc_core::domain::{Quantity, QuantityMap, ServiceId, Unit, categorize, compute_summary};
    use rust_decimal::Decimal;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Service::new(1, "AC mounting", Decimal::from(100), Unit::Item),
            Service::new(2, "Cable route", Decimal::new(125, 1), Unit::Meter),
        ])
        .unwrap()
    }

    #[test]
    fn empty_summary_has_placeholder() {
        assert_eq!(summary_table(&Summary::default()), "No services selected");
        assert_eq!(total_line(&Summary::default(), "BYN"), "Total: 0 BYN");
    }

    #[test]
    fn summary_rows_follow_lines() {
        let catalog = catalog();
        let quantities: QuantityMap = [
            (ServiceId::new(1).unwrap(), Quantity::new(2)),
            (ServiceId::new(2).unwrap(), Quantity::new(4)),
        ]
        .into_iter()
        .collect();
        let summary = compute_summary(&catalog, &quantities);

        let text = summary_table(&summary);
        let mounting = text.lines().position(|l| l.contains("AC mounting")).unwrap();
        let cable = text.lines().position(|l| l.contains("Cable route")).unwrap();
        assert!(mounting < cable);
        assert!(text.contains("200"));
        assert!(text.contains("12.5"));
        assert_eq!(total_line(&summary, "BYN"), "Total: 250 BYN");
    }

    #[test]
    fn categorized_skips_empty_buckets() {
        let catalog = catalog();
        let text = categorized_table(&categorize(&catalog), "BYN");
        assert!(text.starts_with("[installation]"));
        assert!(text.contains("[construction]"));
        assert!(!text.contains("[maintenance]"));
        assert!(text.contains("12.5 BYN"));
    }

    #[test]
    fn flat_table_shows_unit_kind() {
        let text = catalog_table(&catalog(), "EUR");
        assert!(text.contains("Length"));
        assert!(text.contains("100 EUR"));
    }
}
