//! In-memory notifier for testing and embedding.

use std::sync::{Arc, RwLock};

use aircalc_core::{
    application::{ApplicationError, ports::HostNotifier},
    domain::{RoomRequest, Summary},
    error::CalcResult,
};

/// Keeps everything the host would have received. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    inner: Arc<RwLock<RecordingInner>>,
}

#[derive(Debug, Default)]
struct RecordingInner {
    summaries: Vec<Summary>,
    requests: Vec<RoomRequest>,
    fail_with: Option<String>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record calls but report every one as failed.
    pub fn failing(reason: impl Into<String>) -> Self {
        let notifier = Self::new();
        if let Ok(mut inner) = notifier.inner.write() {
            inner.fail_with = Some(reason.into());
        }
        notifier
    }

    pub fn summaries(&self) -> Vec<Summary> {
        self.inner
            .read()
            .map(|inner| inner.summaries.clone())
            .unwrap_or_default()
    }

    pub fn last(&self) -> Option<Summary> {
        self.inner
            .read()
            .ok()
            .and_then(|inner| inner.summaries.last().cloned())
    }

    pub fn requests(&self) -> Vec<RoomRequest> {
        self.inner
            .read()
            .map(|inner| inner.requests.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|inner| inner.summaries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HostNotifier for RecordingNotifier {
    fn notify(&self, summary: &Summary) -> CalcResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.summaries.push(summary.clone());

        match &inner.fail_with {
            Some(reason) => Err(ApplicationError::HostNotification {
                reason: reason.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }

    fn on_calculate(&self, request: &RoomRequest) -> CalcResult<()> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        inner.requests.push(request.clone());

        match &inner.fail_with {
            Some(reason) => Err(ApplicationError::HostNotification {
                reason: reason.clone(),
            }
            .into()),
            None => Ok(()),
        }
    }
}
