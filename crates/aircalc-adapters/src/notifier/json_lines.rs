//! Notifier that writes one JSON envelope per line.
//!
//! ```text
//! {"event":"summary","at":"2026-10-19T09:12:44Z","session":"…","payload":{"totalAmount":200.0,…}}
//! {"event":"calculate","at":"2026-10-19T09:13:02Z","session":null,"payload":{"roomArea":"20",…}}
//! ```
//!
//! A host process can tail the stream and react to each line.

use std::{
    io::{self, Write},
    sync::Mutex,
};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use aircalc_core::{
    application::{ApplicationError, ports::HostNotifier},
    domain::{RoomRequest, Summary},
    error::CalcResult,
};

#[derive(Serialize)]
struct Envelope<'a, T: Serialize> {
    event: &'static str,
    at: DateTime<Utc>,
    session: Option<Uuid>,
    payload: &'a T,
}

/// Writes JSON lines to any writer. Each line is flushed immediately.
pub struct JsonLinesNotifier<W: Write + Send> {
    writer: Mutex<W>,
    session: Option<Uuid>,
}

impl JsonLinesNotifier<io::Stderr> {
    /// Stream to stderr, leaving stdout to the command's own output.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> JsonLinesNotifier<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
            session: None,
        }
    }

    /// Stamp every envelope with a session id.
    pub fn with_session(mut self, session: Uuid) -> Self {
        self.session = Some(session);
        self
    }

    /// Give back the writer, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn emit<T: Serialize>(&self, event: &'static str, payload: &T) -> CalcResult<()> {
        let envelope = Envelope {
            event,
            at: Utc::now(),
            session: self.session,
            payload,
        };

        let line = serde_json::to_string(&envelope).map_err(|e| {
            ApplicationError::HostNotification {
                reason: format!("could not encode {event}: {e}"),
            }
        })?;

        let mut writer = self
            .writer
            .lock()
            .map_err(|_| ApplicationError::StoreLockError)?;

        writeln!(writer, "{line}")
            .and_then(|()| writer.flush())
            .map_err(|e| ApplicationError::HostNotification {
                reason: e.to_string(),
            })?;

        Ok(())
    }
}

impl<W: Write + Send> HostNotifier for JsonLinesNotifier<W> {
    fn notify(&self, summary: &Summary) -> CalcResult<()> {
        self.emit("summary", summary)
    }

    fn on_calculate(&self, request: &RoomRequest) -> CalcResult<()> {
        self.emit("calculate", request)
    }
}
