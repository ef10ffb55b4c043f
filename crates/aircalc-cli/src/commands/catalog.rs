//! `aircalc catalog`: show the service catalog.

use serde::Serialize;

use aircalc_core::domain::{Catalog, Categories, Category, Service, categorize};

use crate::{
    cli::{CatalogArgs, ViewFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    render, wiring,
};

pub fn execute(args: CatalogArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = wiring::load_catalog(&config)?;
    let currency = &config.display.currency;

    match (super::view_format(args.format, &output), args.categorized) {
        (ViewFormat::Json, false) => output.json(&catalog)?,
        (ViewFormat::Json, true) => output.json(&CategorizedView::new(&categorize(&catalog)))?,
        (ViewFormat::Table, false) => {
            output.header(&catalog_title(&catalog))?;
            output.print(&render::catalog_table(&catalog, currency))?;
        }
        (ViewFormat::Table, true) => {
            output.header(&catalog_title(&catalog))?;
            output.print(&render::categorized_table(&categorize(&catalog), currency))?;
        }
    }

    Ok(())
}

fn catalog_title(catalog: &Catalog) -> String {
    format!("Services ({})", catalog.len())
}

/// JSON shape of `--categorized`: one key per category, in display order.
#[derive(Debug, Serialize)]
struct CategorizedView<'a> {
    installation: &'a [&'a Service],
    maintenance: &'a [&'a Service],
    construction: &'a [&'a Service],
    other: &'a [&'a Service],
}

impl<'a> CategorizedView<'a> {
    fn new(categories: &'a Categories<'a>) -> Self {
        Self {
            installation: categories.bucket(Category::Installation),
            maintenance: categories.bucket(Category::Maintenance),
            construction: categories.bucket(Category::Construction),
            other: categories.bucket(Category::Other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aircalc_adapters::builtin_catalog::default_catalog;

    #[test]
    fn categorized_json_has_every_bucket() {
        let catalog = default_catalog().unwrap();
        let categories = categorize(&catalog);
        let value = serde_json::to_value(CategorizedView::new(&categories)).unwrap();

        let keys: Vec<_> = value.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys.len(), 4);
        assert_eq!(value["installation"].as_array().unwrap().len(), 4);
        assert_eq!(value["maintenance"][0]["id"], 5);
    }

    #[test]
    fn title_counts_services() {
        assert_eq!(catalog_title(&default_catalog().unwrap()), "Services (14)");
    }
}
