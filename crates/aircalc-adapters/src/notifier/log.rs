//! Notifier that reports to the tracing subscriber.

use tracing::info;

use aircalc_core::{
    application::ports::HostNotifier,
    domain::{RoomRequest, Summary},
    error::CalcResult,
};

/// Emits one `INFO` event per host update. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

impl HostNotifier for LogNotifier {
    fn notify(&self, summary: &Summary) -> CalcResult<()> {
        info!(
            target: "aircalc::host",
            total = %summary.total_display(),
            lines = summary.selected_services.len(),
            "Summary published"
        );
        Ok(())
    }

    fn on_calculate(&self, request: &RoomRequest) -> CalcResult<()> {
        info!(
            target: "aircalc::host",
            room_area = %request.room_area,
            ceiling_height = %request.ceiling_height,
            insolation = %request.insolation,
            mansard = request.has_mansard,
            "Calculation requested"
        );
        Ok(())
    }
}
