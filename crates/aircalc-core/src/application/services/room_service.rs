//! Room Service - the "calculate" button of the room form.
//!
//! Validates the required fields and hands the request to the host. A
//! validation failure aborts before the host sees anything; a host failure
//! is logged and the request is still returned.

use tracing::{info, instrument, warn};

use crate::{
    application::ports::HostNotifier,
    domain::{RoomForm, RoomRequest},
    error::{CalcError, CalcResult},
};

/// Service for room parameter submissions.
#[derive(Default)]
pub struct RoomService {
    notifier: Option<Box<dyn HostNotifier>>,
}

impl RoomService {
    /// Create a room service with no host attached.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_notifier(mut self, notifier: Box<dyn HostNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Validate the form and forward it to the host.
    #[instrument(skip_all, fields(insolation = %form.insolation, mansard = form.has_mansard))]
    pub fn submit(&self, form: &RoomForm) -> CalcResult<RoomRequest> {
        let request = form.validate().map_err(CalcError::Domain)?;
        info!(
            room_area = %request.room_area,
            ceiling_height = %request.ceiling_height,
            "Room parameters accepted"
        );

        if let Some(notifier) = &self.notifier {
            if let Err(e) = notifier.on_calculate(&request) {
                warn!(error = %e, "Host rejected room parameters");
            }
        }

        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ApplicationError, ports::MockHostNotifier};
    use crate::domain::{DomainError, Insolation};

    #[test]
    fn valid_form_reaches_host() {
        let mut notifier = MockHostNotifier::new();
        notifier
            .expect_on_calculate()
            .withf(|request: &RoomRequest| {
                request.room_area == "20" && request.insolation == Insolation::Weak
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = RoomService::new().with_notifier(Box::new(notifier));
        let form = RoomForm::new("20", "2.75").insolation(Insolation::Weak);
        let request = service.submit(&form).unwrap();
        assert_eq!(request.ceiling_height, "2.75");
    }

    #[test]
    fn missing_fields_never_reach_host() {
        let mut notifier = MockHostNotifier::new();
        notifier.expect_on_calculate().never();

        let service = RoomService::new().with_notifier(Box::new(notifier));
        let err = service.submit(&RoomForm::new("20", "")).unwrap_err();
        assert!(matches!(
            err,
            CalcError::Domain(DomainError::MissingRoomParameters { .. })
        ));
    }

    #[test]
    fn host_failure_is_not_an_error() {
        let mut notifier = MockHostNotifier::new();
        notifier.expect_on_calculate().returning(|_| {
            Err(ApplicationError::HostNotification {
                reason: "closed".into(),
            }
            .into())
        });

        let service = RoomService::new().with_notifier(Box::new(notifier));
        assert!(service.submit(&RoomForm::new("20", "3")).is_ok());
    }

    #[test]
    fn works_without_host() {
        let service = RoomService::new();
        assert!(service.submit(&RoomForm::new("12", "2.5")).is_ok());
    }
}
