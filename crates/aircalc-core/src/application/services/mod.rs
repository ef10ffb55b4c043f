//! Application services (use case orchestrators).

pub mod calculator_session;
pub mod room_service;

pub use calculator_session::{CalculatorSession, DEFAULT_PULSE_WINDOW};
pub use room_service::RoomService;
