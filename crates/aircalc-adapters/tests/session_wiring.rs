//! End-to-end wiring of a session against the stock catalog.

use aircalc_adapters::{BuiltinCatalog, MemoryExportSink, RecordingNotifier};
use aircalc_core::prelude::*;
use rust_decimal::Decimal;

fn session() -> (CalculatorSession, RecordingNotifier, MemoryExportSink) {
    let catalog = BuiltinCatalog.load().unwrap();
    let notifier = RecordingNotifier::new();
    let sink = MemoryExportSink::new();
    let session = CalculatorSession::new(catalog)
        .with_notifier(Box::new(notifier.clone()))
        .with_export_sink(Box::new(sink.clone()));
    (session, notifier, sink)
}

fn id(raw: u32) -> ServiceId {
    ServiceId::new(raw).unwrap()
}

#[test]
fn edits_reach_host_and_export_fields() {
    let (mut session, notifier, sink) = session();

    session.set_quantity(id(1), Quantity::new(1));
    session.set_quantity_input(id(10), "4");

    assert_eq!(notifier.len(), 2);
    let last = notifier.last().unwrap();
    // 250 + 4 * 6.5
    assert_eq!(last.total_amount, Decimal::from(276));
    assert_eq!(
        sink.get(ExportField::TotalAmount).as_deref(),
        Some("276")
    );

    let selected = sink.get(ExportField::SelectedServices).unwrap();
    let parsed: Vec<LineItem> = serde_json::from_str(&selected).unwrap();
    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[1].id, id(10));
}

#[test]
fn clear_resets_export_fields() {
    let (mut session, notifier, sink) = session();

    session.increment(id(5));
    session.increment(id(5));
    session.clear();

    assert_eq!(notifier.len(), 3);
    assert!(notifier.last().unwrap().is_empty());
    assert_eq!(sink.get(ExportField::TotalAmount).as_deref(), Some("0"));
    assert_eq!(
        sink.get(ExportField::SelectedServices).as_deref(),
        Some("[]")
    );
}

#[test]
fn failing_host_keeps_session_consistent() {
    let catalog = BuiltinCatalog.load().unwrap();
    let notifier = RecordingNotifier::failing("host gone");
    let mut session = CalculatorSession::new(catalog).with_notifier(Box::new(notifier.clone()));

    let summary = session.set_quantity(id(13), Quantity::new(2));

    assert_eq!(summary.total_amount, Decimal::from(300));
    assert_eq!(session.summary(), summary);
    assert_eq!(notifier.len(), 1);
}
