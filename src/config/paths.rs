//! On-disk layout
//!
//! ```text
//! <base>/config.json
//! <base>/audit.log
//! <base>/data/expenses.json
//! ```
//!
//! `<base>` is `$MONEY_TRACKER_DATA_DIR` when set, otherwise the platform
//! config directory for `money-tracker` (`~/.config/money-tracker` on Linux).

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::{TrackerError, TrackerResult};

pub const DATA_DIR_ENV: &str = "MONEY_TRACKER_DATA_DIR";

#[derive(Debug, Clone)]
pub struct TrackerPaths {
    base_dir: PathBuf,
}

impl TrackerPaths {
    /// Resolve the base directory from the environment or the platform.
    ///
    /// Fails only when the override is unset and the platform has no home
    /// directory to derive a config directory from.
    pub fn new() -> TrackerResult<Self> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) => PathBuf::from(dir),
            None => ProjectDirs::from("", "", "money-tracker")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| TrackerError::Config("no home directory to keep data in".into()))?,
        };
        Ok(Self { base_dir })
    }

    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    pub fn expenses_file(&self) -> PathBuf {
        self.data_dir().join("expenses.json")
    }

    /// Create `<base>/data` and any missing ancestors
    pub fn ensure_directories(&self) -> TrackerResult<()> {
        let data_dir = self.data_dir();
        std::fs::create_dir_all(&data_dir)
            .map_err(|e| TrackerError::Io(format!("cannot create {}: {}", data_dir.display(), e)))
    }
}
