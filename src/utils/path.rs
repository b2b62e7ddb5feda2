//! Path utilities for configured and command-line file locations.

use std::path::{Path, PathBuf};

/// Resolve a configured path: `~/` expands to the home directory, other
/// relative paths are taken from `base` (the config directory).
pub fn resolve_in(base: &Path, raw: &str) -> PathBuf {
    if let Some(rest) = raw.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(rest);
    }

    let p = PathBuf::from(raw);
    if p.is_absolute() { p } else { base.join(p) }
}
