//! Application layer for Aircalc.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (CalculatorSession, RoomService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! pricing rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{CalculatorSession, DEFAULT_PULSE_WINDOW, RoomService};

pub use ports::{CatalogSource, ExportField, ExportSink, HostNotifier};

pub use error::ApplicationError;
