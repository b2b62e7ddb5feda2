// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;
pub mod model;

pub use logic::ExportLogic;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for every export.
pub(crate) fn notify_export_success(label: &str, rows: usize, path: &Path) {
    success(format!(
        "{label} export completed ({rows} rows): {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Which derived view to write out.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportView {
    Items,
    Users,
    Late,
    Ledger,
}
