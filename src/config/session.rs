//! Filter state kept between invocations.
//!
//! The views never read this themselves: the CLI loads a `FilterSession`
//! from a `FilterStore`, applies its overrides and passes the filters down.

use crate::core::items::ItemListFilters;
use crate::core::users::UserListFilters;
use crate::errors::AppResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSession {
    pub items: ItemListFilters,
    pub users: UserListFilters,
}

pub trait FilterStore {
    /// Stored session, or `None` when nothing has been saved yet.
    fn load(&self) -> AppResult<Option<FilterSession>>;
    fn save(&mut self, session: &FilterSession) -> AppResult<()>;
    fn clear(&mut self) -> AppResult<()>;
}

/// YAML file store (`~/.ludoview/session.yaml`).
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl FilterStore for FileStore {
    fn load(&self) -> AppResult<Option<FilterSession>> {
        if !self.path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }
        let session = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %self.path.display(), "filter session loaded");
        Ok(Some(session))
    }

    fn save(&mut self, session: &FilterSession) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_yaml::to_string(session)?)?;
        tracing::info!(path = %self.path.display(), "filter session saved");
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// Store that lives as long as the process (test mode).
#[derive(Debug, Default)]
pub struct MemoryStore {
    session: Option<FilterSession>,
}

impl FilterStore for MemoryStore {
    fn load(&self) -> AppResult<Option<FilterSession>> {
        Ok(self.session.clone())
    }

    fn save(&mut self, session: &FilterSession) -> AppResult<()> {
        self.session = Some(session.clone());
        Ok(())
    }

    fn clear(&mut self) -> AppResult<()> {
        self.session = None;
        Ok(())
    }
}
