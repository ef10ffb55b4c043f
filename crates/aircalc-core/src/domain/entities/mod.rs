pub mod quantities;
pub mod room;
pub mod service;
pub mod summary;

pub use quantities::QuantityMap;
pub use room::{RoomForm, RoomRequest};
pub use service::{Catalog, Service};
pub use summary::{LineItem, Summary};
