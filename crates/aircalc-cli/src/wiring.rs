//! Builds core services from configuration.
//!
//! Commands never pick adapters themselves; they ask for a session or a room
//! service and get one wired to whatever the config names.

use tracing::{debug, instrument};

use aircalc_adapters::{
    BuiltinCatalog, DirectoryExportSink, FileCatalog, JsonLinesNotifier, LogNotifier,
};
use aircalc_core::{
    application::{CalculatorSession, CatalogSource, HostNotifier, RoomService},
    domain::Catalog,
};

use crate::{
    config::{AppConfig, NotifyMode},
    error::{CliResult, IntoCli},
};

/// The catalog source named by `catalog.path`, or the built-in one.
pub fn catalog_source(config: &AppConfig) -> Box<dyn CatalogSource> {
    match &config.catalog.path {
        Some(path) => Box::new(FileCatalog::new(path)),
        None => Box::new(BuiltinCatalog::new()),
    }
}

#[instrument(skip_all)]
pub fn load_catalog(config: &AppConfig) -> CliResult<Catalog> {
    let source = catalog_source(config);
    let catalog = source
        .load()
        .with_cli_context(|| format!("loading {}", source.describe()))?;
    debug!(source = %source.describe(), services = catalog.len(), "Catalog loaded");
    Ok(catalog)
}

/// A calculator session with the configured host and export sinks attached.
pub fn build_session(config: &AppConfig) -> CliResult<CalculatorSession> {
    let catalog = load_catalog(config)?;
    let mut session =
        CalculatorSession::new(catalog).with_pulse_window(config.display.pulse_window());

    if let Some(notifier) = host_notifier(config, Some(&session)) {
        session = session.with_notifier(notifier);
    }
    if let Some(dir) = &config.host.export_dir {
        session = session.with_export_sink(Box::new(DirectoryExportSink::new(dir)));
    }

    debug!(session = %session.id(), notify = %config.host.notify, "Session ready");
    Ok(session)
}

/// A room service handing validated requests to the configured host.
pub fn build_room_service(config: &AppConfig) -> RoomService {
    match host_notifier(config, None) {
        Some(notifier) => RoomService::new().with_notifier(notifier),
        None => RoomService::new(),
    }
}

fn host_notifier(
    config: &AppConfig,
    session: Option<&CalculatorSession>,
) -> Option<Box<dyn HostNotifier>> {
    match config.host.notify {
        NotifyMode::None => None,
        NotifyMode::Log => Some(Box::new(LogNotifier::new())),
        NotifyMode::Stderr => {
            let notifier = match session {
                Some(session) => JsonLinesNotifier::stderr().with_session(session.id()),
                None => JsonLinesNotifier::stderr(),
            };
            Some(Box::new(notifier))
        }
    }
}
