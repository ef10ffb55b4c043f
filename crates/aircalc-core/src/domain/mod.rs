// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for Aircalc.
//!
//! Pure business logic: the catalog, the quantity store, the totals engine
//! and the categorizer. All host integration is handled via ports (traits)
//! defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or host calls
//! - **Exact money**: Prices and totals are `rust_decimal::Decimal`
//! - **Derived state is never stored**: `Summary` is recomputed, not cached
//!
pub mod categories;
pub mod entities;
pub mod error;
pub mod totals;
pub mod value_objects;

pub use categories::{CATEGORY_REGISTRY, Categories, Category, CategoryDef, categorize};
pub use entities::{Catalog, LineItem, QuantityMap, RoomForm, RoomRequest, Service, Summary};
pub use error::{DomainError, ErrorCategory};
pub use totals::compute_summary;
pub use value_objects::{Insolation, Quantity, ServiceId, Unit};
