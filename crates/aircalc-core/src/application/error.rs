//! Application layer errors.
//!
//! These errors represent failures at the ports (catalog sources, host
//! notifiers, export sinks), not business rules. Business rule violations
//! are `DomainError` from `crate::domain`.

use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors raised by adapters behind the application ports.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// The catalog could not be read at all.
    #[error("Catalog unavailable at {location}: {reason}")]
    CatalogUnavailable { location: String, reason: String },

    /// The catalog was read but is not in a supported shape.
    #[error("Catalog at {location} is malformed: {reason}")]
    CatalogFormat { location: String, reason: String },

    /// The host rejected or failed to receive a notification.
    #[error("Host notification failed: {reason}")]
    HostNotification { reason: String },

    /// An export field could not be written.
    #[error("Export of {field} failed: {reason}")]
    ExportFailed { field: &'static str, reason: String },

    /// Adapter state access failed (lock poisoned).
    #[error("Adapter state is unavailable")]
    StoreLockError,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CatalogUnavailable { location, .. } => vec![
                format!("Could not read catalog: {}", location),
                "Check that the file exists and is readable".into(),
                "Unset catalog.path to use the built-in catalog".into(),
            ],
            Self::CatalogFormat { location, reason } => vec![
                format!("Catalog {} could not be parsed: {}", location, reason),
                "Catalog files are JSON (.json) or TOML (.toml) lists of services".into(),
                "Each service needs id, name, price and unit".into(),
            ],
            Self::HostNotification { .. } | Self::ExportFailed { .. } => vec![
                "The calculator keeps working; the host just missed an update".into(),
                "Check the host integration settings (host.notify, host.export_dir)".into(),
            ],
            Self::StoreLockError => vec!["Try again in a moment".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CatalogUnavailable { .. } => ErrorCategory::NotFound,
            Self::CatalogFormat { .. } => ErrorCategory::Catalog,
            Self::HostNotification { .. } | Self::ExportFailed { .. } | Self::StoreLockError => {
                ErrorCategory::Internal
            }
        }
    }
}
