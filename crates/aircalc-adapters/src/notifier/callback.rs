//! Notifier wrapping a plain closure.

use aircalc_core::{
    application::ports::HostNotifier,
    domain::{RoomRequest, Summary},
    error::CalcResult,
};

type SummaryFn = dyn Fn(&Summary) -> CalcResult<()> + Send + Sync;
type RequestFn = dyn Fn(&RoomRequest) -> CalcResult<()> + Send + Sync;

/// Forwards host updates to caller-supplied functions.
///
/// ```
/// use aircalc_adapters::CallbackNotifier;
///
/// let notifier = CallbackNotifier::new(|summary| {
///     println!("total: {}", summary.total_amount);
///     Ok(())
/// });
/// # let _ = notifier;
/// ```
pub struct CallbackNotifier {
    on_summary: Box<SummaryFn>,
    on_request: Option<Box<RequestFn>>,
}

impl CallbackNotifier {
    pub fn new<F>(on_summary: F) -> Self
    where
        F: Fn(&Summary) -> CalcResult<()> + Send + Sync + 'static,
    {
        Self {
            on_summary: Box::new(on_summary),
            on_request: None,
        }
    }

    pub fn with_calculate_callback<F>(mut self, on_request: F) -> Self
    where
        F: Fn(&RoomRequest) -> CalcResult<()> + Send + Sync + 'static,
    {
        self.on_request = Some(Box::new(on_request));
        self
    }
}

impl HostNotifier for CallbackNotifier {
    fn notify(&self, summary: &Summary) -> CalcResult<()> {
        (self.on_summary)(summary)
    }

    fn on_calculate(&self, request: &RoomRequest) -> CalcResult<()> {
        match &self.on_request {
            Some(callback) => callback(request),
            None => Ok(()),
        }
    }
}
