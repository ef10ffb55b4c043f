//! Infrastructure adapters for Aircalc.
//!
//! This crate implements the ports defined in `aircalc-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_catalog;
pub mod catalog;
pub mod export;
pub mod notifier;

// Re-export commonly used adapters
pub use catalog::{BuiltinCatalog, CatalogFileFormat, FileCatalog};
pub use export::{DirectoryExportSink, MemoryExportSink};
pub use notifier::{CallbackNotifier, JsonLinesNotifier, LogNotifier, RecordingNotifier};
