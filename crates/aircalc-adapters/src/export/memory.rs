//! In-memory export fields.

use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};

use aircalc_core::{
    application::{
        ApplicationError,
        ports::{ExportField, ExportSink},
    },
    error::CalcResult,
};

/// Export fields held in memory. Clones share storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryExportSink {
    fields: Arc<RwLock<HashMap<ExportField, String>>>,
}

impl MemoryExportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field, if it was ever written.
    pub fn get(&self, field: ExportField) -> Option<String> {
        self.fields.read().ok()?.get(&field).cloned()
    }
}

impl ExportSink for MemoryExportSink {
    fn write(&self, field: ExportField, value: &str) -> CalcResult<()> {
        let mut fields = self
            .fields
            .write()
            .map_err(|_| ApplicationError::StoreLockError)?;
        fields.insert(field, value.to_string());
        Ok(())
    }
}
