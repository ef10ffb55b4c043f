//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `aircalc-adapters` implement these.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `CatalogSource`: Where the price list comes from
//!   - `HostNotifier`: The host page / CMS that wants summaries
//!   - `ExportSink`: Hidden form fields the host reads on submit
//!
//! - **Driving (Input) Ports**: Called by external world, implemented by application
//!   - (Defined in CLI layer, implemented by services)

pub mod output;

pub use output::{CatalogSource, ExportField, ExportSink, HostNotifier};

#[cfg(test)]
pub use output::{MockExportSink, MockHostNotifier};
