use crate::core::items::ItemListFilters;
use crate::errors::AppResult;
use crate::utils::path::resolve_in;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod session;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Snapshot JSON file; relative paths are read from the config directory.
    #[serde(default = "default_snapshot")]
    pub snapshot: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
    /// Item filters used until a session has been saved.
    #[serde(default)]
    pub default_item_filters: ItemListFilters,
}

fn default_snapshot() -> String {
    "snapshot.json".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot: default_snapshot(),
            separator_char: default_separator_char(),
            default_item_filters: ItemListFilters::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("ludoview")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".ludoview")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("ludoview.conf")
    }

    /// Return the full path of the filter session file
    pub fn session_file() -> PathBuf {
        Self::config_dir().join("session.yaml")
    }

    pub fn snapshot_path(&self) -> PathBuf {
        resolve_in(&Self::config_dir(), &self.snapshot)
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            let cfg: Config = serde_yaml::from_str(&content)?;
            tracing::debug!(path = %path.display(), "configuration loaded");
            Ok(cfg)
        } else {
            tracing::debug!(path = %path.display(), "no configuration file, using defaults");
            Ok(Config::default())
        }
    }

    /// Create the config directory, the config file and an empty session.
    /// In test mode nothing is written.
    pub fn init_all(snapshot: Option<String>, is_test: bool) -> AppResult<Config> {
        let mut config = Config::default();
        if let Some(s) = snapshot {
            config.snapshot = s;
        }

        if is_test {
            return Ok(config);
        }

        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let yaml = serde_yaml::to_string(&config)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;

        let session = Self::session_file();
        if !session.exists() {
            fs::File::create(&session)?;
        }

        tracing::info!(dir = %dir.display(), "configuration initialized");
        Ok(config)
    }
}
