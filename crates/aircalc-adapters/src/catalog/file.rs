//! File-based catalog loader.
//!
//! # Formats
//!
//! JSON, either a bare array or wrapped in an object:
//!
//! ```json
//! [
//!   { "id": 1, "name": "Mounting unit", "price": 100, "unit": "item" },
//!   { "id": 2, "name": "Cable-route", "price": "12.50", "unit": "meter" }
//! ]
//! ```
//!
//! TOML, as an array of tables:
//!
//! ```toml
//! [[services]]
//! id    = 1
//! name  = "Mounting unit"
//! price = 100
//! unit  = "item"
//! ```
//!
//! Prices may be numbers or strings. Units accept `item`, `meter`,
//! `height-work` and the Cyrillic `шт` / `м`.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::{debug, info, instrument};

use aircalc_core::{
    application::{ApplicationError, ports::CatalogSource},
    domain::{Catalog, Service},
    error::CalcResult,
};

/// Serialization format of a catalog file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFileFormat {
    Json,
    Toml,
}

impl CatalogFileFormat {
    /// Pick the format from the file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Some(Self::Json),
            Some("toml") => Some(Self::Toml),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct CatalogDocument {
    services: Vec<Service>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonCatalog {
    List(Vec<Service>),
    Document(CatalogDocument),
}

/// Parse catalog text. `location` is only used in error messages.
pub fn parse_catalog(text: &str, format: CatalogFileFormat, location: &str) -> CalcResult<Catalog> {
    let services = match format {
        CatalogFileFormat::Json => match serde_json::from_str::<JsonCatalog>(text) {
            Ok(JsonCatalog::List(services)) => services,
            Ok(JsonCatalog::Document(doc)) => doc.services,
            Err(e) => {
                return Err(ApplicationError::CatalogFormat {
                    location: location.into(),
                    reason: e.to_string(),
                }
                .into());
            }
        },
        CatalogFileFormat::Toml => {
            toml::from_str::<CatalogDocument>(text)
                .map_err(|e| ApplicationError::CatalogFormat {
                    location: location.into(),
                    reason: e.to_string(),
                })?
                .services
        }
    };

    debug!(count = services.len(), "parsed catalog entries");
    Ok(Catalog::new(services)?)
}

/// Loads the catalog from a JSON or TOML file.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    /// The file does not need to exist yet; `load` reports a missing file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileCatalog {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self) -> CalcResult<Catalog> {
        let location = self.path.display().to_string();

        let format = CatalogFileFormat::from_path(&self.path).ok_or_else(|| {
            ApplicationError::CatalogFormat {
                location: location.clone(),
                reason: "unsupported extension (expected .json or .toml)".into(),
            }
        })?;

        let raw = fs::read_to_string(&self.path).map_err(|e| {
            ApplicationError::CatalogUnavailable {
                location: location.clone(),
                reason: e.to_string(),
            }
        })?;

        let catalog = parse_catalog(&raw, format, &location)?;
        info!(services = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    fn describe(&self) -> String {
        format!("catalog file {}", self.path.display())
    }
}
