// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// Quantity input never produces one of these: bad quantities are
/// normalized to zero. Only catalog construction, identifiers and the room
/// form can fail.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Service id must be a positive integer, got {0}")]
    InvalidServiceId(u64),

    #[error("Invalid service {id}: {reason}")]
    InvalidService { id: u32, reason: String },

    #[error("Duplicate service id in catalog: {id}")]
    DuplicateServiceId { id: u32 },

    #[error("Unknown unit of measure: '{0}'")]
    UnknownUnit(String),

    #[error("Unknown insolation level: '{0}'")]
    UnknownInsolation(String),

    // ========================================================================
    // Form Errors
    // ========================================================================
    #[error("Room area and ceiling height are required (missing: {})", missing.join(", "))]
    MissingRoomParameters { missing: Vec<&'static str> },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidServiceId(raw) => vec![
                format!("'{}' is not a valid service id", raw),
                "Service ids start at 1".into(),
                "Try: aircalc catalog to see available ids".into(),
            ],
            Self::InvalidService { id, reason } => vec![
                format!("Service {} in the catalog is malformed: {}", id, reason),
                "Check the catalog file".into(),
            ],
            Self::DuplicateServiceId { id } => vec![
                format!("Two catalog entries share id {}", id),
                "Every service needs a unique id".into(),
            ],
            Self::UnknownUnit(_) => vec![
                "Supported units: item (шт), meter (м), height-work".into(),
            ],
            Self::UnknownInsolation(_) => vec!["Supported levels: weak, medium, strong".into()],
            Self::MissingRoomParameters { .. } => vec![
                "Enter the room area in square meters".into(),
                "Enter the ceiling height in meters".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidServiceId(_)
            | Self::UnknownUnit(_)
            | Self::UnknownInsolation(_)
            | Self::MissingRoomParameters { .. } => ErrorCategory::Validation,
            Self::InvalidService { .. } | Self::DuplicateServiceId { .. } => {
                ErrorCategory::Catalog
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Catalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_room_parameters_lists_fields() {
        let err = DomainError::MissingRoomParameters {
            missing: vec!["room area", "ceiling height"],
        };
        let msg = err.to_string();
        assert!(msg.contains("room area, ceiling height"));
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn duplicate_id_is_catalog_error() {
        let err = DomainError::DuplicateServiceId { id: 7 };
        assert_eq!(err.category(), ErrorCategory::Catalog);
        assert!(err.suggestions().iter().any(|s| s.contains('7')));
    }
}
