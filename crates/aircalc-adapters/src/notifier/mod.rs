//! Host notifier adapters.

pub mod callback;
pub mod json_lines;
pub mod log;
pub mod recording;

pub use callback::CallbackNotifier;
pub use json_lines::JsonLinesNotifier;
pub use log::LogNotifier;
pub use recording::RecordingNotifier;
