//! Display preferences stored in `config.json`

use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use super::paths::TrackerPaths;
use crate::error::{TrackerError, TrackerResult};
use crate::storage::write_json_atomic;

/// Missing keys in `config.json` fall back to their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub schema_version: u32,

    /// Prefixed to every displayed amount
    pub currency_symbol: String,

    /// strftime pattern for payment dates in lists and details
    pub date_format: String,

    /// Debug logging without `--verbose`
    pub verbose_logging: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: 1,
            currency_symbol: "€".to_string(),
            date_format: "%b %d, %Y".to_string(),
            verbose_logging: false,
        }
    }
}

impl Settings {
    /// Read `config.json`, or the defaults when it does not exist.
    ///
    /// Nothing is written; call [`Settings::save`] to persist.
    pub fn load_or_create(paths: &TrackerPaths) -> TrackerResult<Self> {
        let path = paths.settings_file();
        let text = match std::fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(TrackerError::Io(format!(
                    "cannot read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        serde_json::from_str(&text)
            .map_err(|e| TrackerError::Config(format!("{} is invalid: {}", path.display(), e)))
    }

    pub fn save(&self, paths: &TrackerPaths) -> TrackerResult<()> {
        paths.ensure_directories()?;
        write_json_atomic(paths.settings_file(), self)
    }
}
