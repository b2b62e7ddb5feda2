// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::ui::messages::info;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;
    fs::write(path, json_data)?;

    notify_export_success("JSON", rows.len(), path);
    Ok(())
}

/// Export CSV, header derived from the row struct by serde.
pub(crate) fn export_csv<T: Serialize>(rows: &[T], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", rows.len(), path);
    Ok(())
}
