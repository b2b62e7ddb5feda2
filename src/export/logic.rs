// src/export/logic.rs

use crate::core::ViewFilterEngine;
use crate::core::items::ItemListFilters;
use crate::core::users::UserListFilters;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{ItemRow, LedgerDayRow, UserRow, late_rows};
use crate::export::{ExportFormat, ExportView};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// High-level export of a derived view.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `view` as computed by `engine` to `file`.
    ///
    /// - `items` / `users` honour the given filters
    /// - `late` writes one row per late loan, most overdue first
    /// - `ledger` writes one row per day
    pub fn export(
        engine: &ViewFilterEngine<'_>,
        view: ExportView,
        item_filters: &ItemListFilters,
        user_filters: &UserListFilters,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        ensure_writable(path, force)?;

        match view {
            ExportView::Items => {
                let rows: Vec<ItemRow> = engine
                    .items(item_filters)
                    .into_iter()
                    .map(ItemRow::from)
                    .collect();
                write(&rows, format, path)
            }
            ExportView::Users => {
                let rows: Vec<UserRow> = engine
                    .users(user_filters)
                    .visible
                    .into_iter()
                    .map(UserRow::from)
                    .collect();
                write(&rows, format, path)
            }
            ExportView::Late => {
                let rows = late_rows(&engine.late(), engine.snapshot());
                write(&rows, format, path)
            }
            ExportView::Ledger => {
                let rows: Vec<LedgerDayRow> =
                    engine.ledger().iter().map(LedgerDayRow::from).collect();
                write(&rows, format, path)
            }
        }
    }
}

fn write<T: Serialize>(rows: &[T], format: ExportFormat, path: &Path) -> AppResult<()> {
    if rows.is_empty() {
        warning("Nothing to export for this view, writing an empty file.");
    }

    tracing::info!(
        format = format.as_str(),
        rows = rows.len(),
        path = %path.display(),
        "exporting"
    );

    match format {
        ExportFormat::Csv => export_csv(rows, path),
        ExportFormat::Json => export_json(rows, path),
    }
}
