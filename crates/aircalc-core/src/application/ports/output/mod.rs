//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the calculator needs from the outside world.
//! The `aircalc-adapters` crate provides implementations.

use std::fmt;

use crate::domain::{Catalog, RoomRequest, Summary};
use crate::error::CalcResult;

/// Port for loading the service catalog.
///
/// Implemented by:
/// - `aircalc_adapters::BuiltinCatalog` (default price list)
/// - `aircalc_adapters::FileCatalog` (JSON or TOML file)
pub trait CatalogSource: Send + Sync {
    /// Load and validate the catalog.
    fn load(&self) -> CalcResult<Catalog>;

    /// Human-readable origin, used in logs.
    fn describe(&self) -> String {
        "catalog".into()
    }
}

/// Port for the host integration.
///
/// Implemented by:
/// - `aircalc_adapters::LogNotifier` (tracing events)
/// - `aircalc_adapters::JsonLinesNotifier` (JSON envelopes on a writer)
/// - `aircalc_adapters::RecordingNotifier` (testing)
/// - `aircalc_adapters::CallbackNotifier` (closure)
///
/// Callers treat every error as best-effort: it is logged and dropped.
#[cfg_attr(test, mockall::automock)]
pub trait HostNotifier: Send + Sync {
    /// Receive the latest summary after a quantity change.
    fn notify(&self, summary: &Summary) -> CalcResult<()>;

    /// Receive validated room parameters when the user asks for a calculation.
    fn on_calculate(&self, _request: &RoomRequest) -> CalcResult<()> {
        Ok(())
    }
}

/// Write-only string slots read by a host form on submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportField {
    TotalAmount,
    SelectedServices,
}

impl ExportField {
    pub const ALL: [ExportField; 2] = [Self::TotalAmount, Self::SelectedServices];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::TotalAmount => "TOTAL_AMOUNT",
            Self::SelectedServices => "SELECTED_SERVICES",
        }
    }
}

impl fmt::Display for ExportField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port for the side-channel export fields.
///
/// Implemented by:
/// - `aircalc_adapters::MemoryExportSink` (testing, embedding)
/// - `aircalc_adapters::DirectoryExportSink` (one file per field)
#[cfg_attr(test, mockall::automock)]
pub trait ExportSink: Send + Sync {
    /// Overwrite one field.
    fn write(&self, field: ExportField, value: &str) -> CalcResult<()>;
}
