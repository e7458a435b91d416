// src/export/logic.rs

use crate::core::Tracker;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::PeakExport;
use crate::models::ViewFilter;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the unified view (catalog plus progress).
    ///
    /// Returns the written path, or `None` when nothing was written.
    pub fn export(
        tracker: &Tracker,
        format: ExportFormat,
        file: &str,
        filter: &ViewFilter,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = expand_tilde(file);
        if path.is_dir() {
            return Err(AppError::Export(format!(
                "output path is a directory: {}",
                path.display()
            )));
        }

        let view = tracker.view();
        let rows: Vec<PeakExport> = filter
            .apply(&view)
            .into_iter()
            .map(PeakExport::from)
            .collect();

        if rows.is_empty() {
            warning("No peaks match the selected filter.");
            return Ok(None);
        }

        if !ensure_writable(&path, force)? {
            info("Export cancelled: existing file not overwritten.");
            return Ok(None);
        }

        match format {
            ExportFormat::Csv => export_csv(&rows, &path)?,
            ExportFormat::Json => export_json(&rows, &path)?,
        }

        Ok(Some(path))
    }
}
