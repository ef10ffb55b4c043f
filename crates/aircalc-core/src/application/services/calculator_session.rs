//! Calculator Session - the stateful half of the calculator.
//!
//! A session owns the catalog and the one mutable piece of state, the
//! quantity map. Every mutation goes through [`CalculatorSession::set_quantity`],
//! which recomputes the summary and pushes it to the host:
//! 1. Normalize and store the quantity
//! 2. Recompute the summary (pure)
//! 3. Notify the host, write the export fields
//!
//! Host and export failures are logged and dropped; they never change the
//! session state.

use std::time::{Duration, Instant};

use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::{
    application::ports::{ExportField, ExportSink, HostNotifier},
    domain::{
        Catalog, Categories, Quantity, QuantityMap, ServiceId, Summary, categorize,
        compute_summary,
    },
};

/// How long the total counts as "just changed".
pub const DEFAULT_PULSE_WINDOW: Duration = Duration::from_millis(300);

/// A single user's calculator state.
pub struct CalculatorSession {
    id: Uuid,
    catalog: Catalog,
    quantities: QuantityMap,
    notifier: Option<Box<dyn HostNotifier>>,
    sinks: Vec<Box<dyn ExportSink>>,
    pulse_window: Duration,
    last_change: Option<Instant>,
}

impl CalculatorSession {
    /// Create a session with no selections and no host attached.
    pub fn new(catalog: Catalog) -> Self {
        let id = Uuid::new_v4();
        info!(session = %id, services = catalog.len(), "Calculator session started");
        Self {
            id,
            catalog,
            quantities: QuantityMap::new(),
            notifier: None,
            sinks: Vec::new(),
            pulse_window: DEFAULT_PULSE_WINDOW,
            last_change: None,
        }
    }

    /// Attach the host notifier. Replaces any previous one.
    pub fn with_notifier(mut self, notifier: Box<dyn HostNotifier>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Add an export sink. Every sink receives every field.
    pub fn with_export_sink(mut self, sink: Box<dyn ExportSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn with_pulse_window(mut self, window: Duration) -> Self {
        self.pulse_window = window;
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn quantities(&self) -> &QuantityMap {
        &self.quantities
    }

    pub fn quantity(&self, id: ServiceId) -> Quantity {
        self.quantities.get(id)
    }

    /// Current summary, computed fresh.
    pub fn summary(&self) -> Summary {
        compute_summary(&self.catalog, &self.quantities)
    }

    pub fn categories(&self) -> Categories<'_> {
        categorize(&self.catalog)
    }

    /// Store a quantity, recompute, and notify. Never fails.
    #[instrument(skip_all, fields(session = %self.id, service_id = %id, quantity = %quantity))]
    pub fn set_quantity(&mut self, id: ServiceId, quantity: Quantity) -> Summary {
        if !self.catalog.contains(id) {
            debug!("Quantity set for a service missing from the catalog");
        }

        let previous = self.quantities.set(id, quantity);
        if previous != quantity && !quantity.is_zero() {
            self.last_change = Some(Instant::now());
        }
        let summary = self.summary();

        debug!(total = %summary.total_amount, lines = summary.selected_services.len(), "Summary recomputed");
        self.publish(&summary);
        summary
    }

    /// Normalize raw text (empty, garbage, negative all become zero) and store it.
    pub fn set_quantity_input(&mut self, id: ServiceId, input: &str) -> Summary {
        self.set_quantity(id, Quantity::from_input(input))
    }

    pub fn increment(&mut self, id: ServiceId) -> Summary {
        let next = self.quantity(id).saturating_add(1);
        self.set_quantity(id, next)
    }

    /// Lower the quantity by one. At zero this is a no-op and nobody is notified.
    pub fn decrement(&mut self, id: ServiceId) -> Summary {
        let current = self.quantity(id);
        if current.is_zero() {
            return self.summary();
        }
        self.set_quantity(id, current.saturating_sub(1))
    }

    /// Drop every selection, then notify once.
    #[instrument(skip_all, fields(session = %self.id))]
    pub fn clear(&mut self) -> Summary {
        self.quantities.clear();
        let summary = self.summary();
        self.publish(&summary);
        summary
    }

    /// `true` while a line was raised to a new non-zero quantity less than
    /// the pulse window ago.
    pub fn total_recently_changed(&self, now: Instant) -> bool {
        self.last_change
            .is_some_and(|at| now.saturating_duration_since(at) < self.pulse_window)
    }

    fn publish(&self, summary: &Summary) {
        if let Some(notifier) = &self.notifier {
            if let Err(e) = notifier.notify(summary) {
                warn!(session = %self.id, error = %e, "Host notification failed");
            }
        }

        if self.sinks.is_empty() {
            return;
        }

        for field in ExportField::ALL {
            let value = match field {
                ExportField::TotalAmount => summary.total_display(),
                ExportField::SelectedServices => {
                    match serde_json::to_string(&summary.selected_services) {
                        Ok(json) => json,
                        Err(e) => {
                            warn!(error = %e, "Could not serialize selected services");
                            continue;
                        }
                    }
                }
            };

            for sink in &self.sinks {
                if let Err(e) = sink.write(field, &value) {
                    warn!(session = %self.id, field = %field, error = %e, "Export write failed");
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ApplicationError;
    use crate::application::ports::{MockExportSink, MockHostNotifier};
    use crate::domain::{Service, Unit};
    use rust_decimal::Decimal;

    fn id(raw: u32) -> ServiceId {
        ServiceId::new(raw).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new(vec![
            Service::new(1, "Mounting unit", Decimal::from(100), Unit::Item),
            Service::new(2, "Site-visit consult", Decimal::from(50), Unit::Item),
        ])
        .unwrap()
    }

    #[test]
    fn set_then_zero_leaves_no_line() {
        let mut session = CalculatorSession::new(catalog());
        session.set_quantity(id(1), Quantity::new(3));
        let summary = session.set_quantity(id(1), Quantity::ZERO);

        assert_eq!(summary.total_amount, Decimal::ZERO);
        assert!(summary.selected_services.is_empty());
        assert!(session.quantities().is_empty());
    }

    #[test]
    fn text_input_is_normalized() {
        let mut session = CalculatorSession::new(catalog());

        session.set_quantity_input(id(1), "-5");
        assert_eq!(session.quantity(id(1)), Quantity::ZERO);

        session.set_quantity_input(id(1), "");
        assert_eq!(session.quantity(id(1)), Quantity::ZERO);

        session.set_quantity_input(id(1), "many");
        assert_eq!(session.quantity(id(1)), Quantity::ZERO);

        let summary = session.set_quantity_input(id(1), "2.9");
        assert_eq!(session.quantity(id(1)), Quantity::new(2));
        assert_eq!(summary.total_amount, Decimal::from(200));
    }

    #[test]
    fn increment_and_decrement() {
        let mut session = CalculatorSession::new(catalog());
        session.increment(id(2));
        session.increment(id(2));
        assert_eq!(session.quantity(id(2)), Quantity::new(2));

        session.decrement(id(2));
        session.decrement(id(2));
        let summary = session.decrement(id(2));
        assert_eq!(session.quantity(id(2)), Quantity::ZERO);
        assert!(summary.is_empty());
    }

    #[test]
    fn unknown_id_is_stored_but_not_summed() {
        let mut session = CalculatorSession::new(catalog());
        let summary = session.set_quantity(id(42), Quantity::new(1));
        assert_eq!(session.quantity(id(42)), Quantity::new(1));
        assert_eq!(summary.total_amount, Decimal::ZERO);
    }

    #[test]
    fn every_set_notifies_host() {
        let mut notifier = MockHostNotifier::new();
        notifier.expect_notify().times(3).returning(|_| Ok(()));

        let mut session = CalculatorSession::new(catalog()).with_notifier(Box::new(notifier));
        session.set_quantity(id(1), Quantity::new(1));
        session.set_quantity(id(2), Quantity::new(1));
        session.set_quantity(id(1), Quantity::ZERO);
    }

    #[test]
    fn host_receives_latest_summary() {
        let mut notifier = MockHostNotifier::new();
        notifier
            .expect_notify()
            .withf(|summary: &Summary| summary.total_amount == Decimal::from(200))
            .times(1)
            .returning(|_| Ok(()));

        let mut session = CalculatorSession::new(catalog()).with_notifier(Box::new(notifier));
        session.set_quantity(id(1), Quantity::new(2));
    }

    #[test]
    fn decrement_at_zero_does_not_notify() {
        let mut notifier = MockHostNotifier::new();
        notifier.expect_notify().never();

        let mut session = CalculatorSession::new(catalog()).with_notifier(Box::new(notifier));
        session.decrement(id(1));
    }

    #[test]
    fn notifier_failure_does_not_affect_state() {
        let mut notifier = MockHostNotifier::new();
        notifier.expect_notify().returning(|_| {
            Err(ApplicationError::HostNotification {
                reason: "host offline".into(),
            }
            .into())
        });

        let mut session = CalculatorSession::new(catalog()).with_notifier(Box::new(notifier));
        let summary = session.set_quantity(id(1), Quantity::new(2));

        assert_eq!(summary.total_amount, Decimal::from(200));
        assert_eq!(session.quantity(id(1)), Quantity::new(2));
    }

    #[test]
    fn export_fields_are_written() {
        let mut sink = MockExportSink::new();
        sink.expect_write()
            .withf(|field, value| *field == ExportField::TotalAmount && value == "100")
            .times(1)
            .returning(|_, _| Ok(()));
        sink.expect_write()
            .withf(|field, value| {
                *field == ExportField::SelectedServices && value.contains("\"Mounting unit\"")
            })
            .times(1)
            .returning(|_, _| Ok(()));

        let mut session = CalculatorSession::new(catalog()).with_export_sink(Box::new(sink));
        session.set_quantity(id(1), Quantity::new(1));
    }

    #[test]
    fn export_failure_is_swallowed() {
        let mut sink = MockExportSink::new();
        sink.expect_write().returning(|field, _| {
            Err(ApplicationError::ExportFailed {
                field: field.as_str(),
                reason: "read-only".into(),
            }
            .into())
        });

        let mut session = CalculatorSession::new(catalog()).with_export_sink(Box::new(sink));
        let summary = session.set_quantity(id(2), Quantity::new(4));
        assert_eq!(summary.total_amount, Decimal::from(200));
    }

    #[test]
    fn clear_notifies_once() {
        let mut notifier = MockHostNotifier::new();
        notifier.expect_notify().times(2).returning(|_| Ok(()));

        let mut session = CalculatorSession::new(catalog()).with_notifier(Box::new(notifier));
        session.set_quantity(id(1), Quantity::new(1));
        let summary = session.clear();
        assert!(summary.is_empty());
    }

    #[test]
    fn pulse_follows_quantity_changes() {
        let mut session = CalculatorSession::new(catalog());
        let start = Instant::now();
        assert!(!session.total_recently_changed(start));

        session.set_quantity(id(1), Quantity::new(1));
        let now = Instant::now();
        assert!(session.total_recently_changed(now));
        assert!(!session.total_recently_changed(now + Duration::from_secs(1)));
    }

    #[test]
    fn pulse_ignores_zeroing() {
        let mut session =
            CalculatorSession::new(catalog()).with_pulse_window(Duration::from_secs(3600));
        session.set_quantity(id(1), Quantity::ZERO);
        assert!(!session.total_recently_changed(Instant::now()));
    }

    #[test]
    fn free_service_still_pulses() {
        let catalog = Catalog::new(vec![Service::new(
            1,
            "Site-visit consult",
            Decimal::ZERO,
            Unit::Item,
        )])
        .unwrap();
        let mut session =
            CalculatorSession::new(catalog).with_pulse_window(Duration::from_secs(3600));

        let summary = session.set_quantity(id(1), Quantity::new(2));
        assert_eq!(summary.total_amount, Decimal::ZERO);
        assert!(session.total_recently_changed(Instant::now()));
    }

    #[test]
    fn repeating_a_quantity_does_not_pulse() {
        let mut session = CalculatorSession::new(catalog());
        session.set_quantity(id(1), Quantity::new(2));
        let before = session.last_change;

        session.set_quantity(id(1), Quantity::new(2));
        assert_eq!(session.last_change, before);
    }
}
