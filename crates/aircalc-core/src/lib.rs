//! Aircalc Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Aircalc
//! installation price calculator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           aircalc-cli (CLI)             │
//! │     (Drives sessions and room forms)    │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │   (CalculatorSession, RoomService)      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (CatalogSource, HostNotifier, Export)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │   aircalc-adapters (Infrastructure)     │
//! │ (BuiltinCatalog, LogNotifier, sinks)    │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (Catalog, QuantityMap, Summary, totals) │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use aircalc_core::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let catalog = Catalog::new(vec![
//!     Service::new(1, "Mounting unit", Decimal::from(100), Unit::Item),
//!     Service::new(2, "Site-visit consult", Decimal::from(50), Unit::Item),
//! ])
//! .unwrap();
//!
//! let mut session = CalculatorSession::new(catalog);
//! session.set_quantity_input(ServiceId::new(1).unwrap(), "2");
//!
//! assert_eq!(session.summary().total_amount, Decimal::from(200));
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        CalculatorSession, RoomService,
        ports::{CatalogSource, ExportField, ExportSink, HostNotifier},
    };
    pub use crate::domain::{
        Catalog, Categories, Category, Insolation, LineItem, Quantity, QuantityMap, RoomForm,
        RoomRequest, Service, ServiceId, Summary, Unit, categorize, compute_summary,
    };
    pub use crate::error::{CalcError, CalcResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
