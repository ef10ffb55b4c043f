//! Export fields as files.
//!
//! Each field becomes a file named after it (`TOTAL_AMOUNT`,
//! `SELECTED_SERVICES`) inside one directory. A host form handler can read
//! them at submission time.

use std::{
    fs,
    path::{Path, PathBuf},
};

use tracing::trace;

use aircalc_core::{
    application::{
        ApplicationError,
        ports::{ExportField, ExportSink},
    },
    error::CalcResult,
};

#[derive(Debug, Clone)]
pub struct DirectoryExportSink {
    dir: PathBuf,
}

impl DirectoryExportSink {
    /// The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, field: ExportField) -> PathBuf {
        self.dir.join(field.as_str())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl ExportSink for DirectoryExportSink {
    fn write(&self, field: ExportField, value: &str) -> CalcResult<()> {
        let path = self.path_for(field);

        fs::create_dir_all(&self.dir)
            .and_then(|()| fs::write(&path, value))
            .map_err(|e| ApplicationError::ExportFailed {
                field: field.as_str(),
                reason: format!("{}: {e}", path.display()),
            })?;

        trace!(field = %field, path = %path.display(), "export field written");
        Ok(())
    }
}
