//! Catalog sources.

mod file;

pub use file::{CatalogFileFormat, FileCatalog, parse_catalog};

use aircalc_core::{application::ports::CatalogSource, domain::Catalog, error::CalcResult};

use crate::builtin_catalog;

/// The stock price list compiled into the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl BuiltinCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CatalogSource for BuiltinCatalog {
    fn load(&self) -> CalcResult<Catalog> {
        builtin_catalog::default_catalog()
    }

    fn describe(&self) -> String {
        "built-in catalog".into()
    }
}
