// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// Check the output file can be written.
///
/// - relative path → error
/// - missing file, or `force` → Ok
/// - existing file → ask before overwriting
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.is_absolute() {
        return Err(AppError::Export(format!(
            "output file path must be absolute: {}",
            path.display()
        )));
    }

    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if confirm("Overwrite? [y/N]: ", io::stdin().lock())? {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Export(
            "cancelled, existing file not overwritten".to_string(),
        ))
    }
}

fn confirm(prompt: &str, mut input: impl BufRead) -> AppResult<bool> {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();
    Ok(ans == "y" || ans == "yes")
}
