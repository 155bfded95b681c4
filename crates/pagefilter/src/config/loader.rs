//! Normalization options from a JSON file.
//!
//! Load from: env `PAGEFILTER_CONFIG_PATH`, or `./config/pagefilter.json`, or `./pagefilter.json`.
//! Missing keys take their defaults, so `{"allowEmptyPeriod": true}` is a complete file.

use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};

use crate::normalize::NormalizeOptions;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "PAGEFILTER_CONFIG_PATH";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl NormalizeOptions {
    /// Read options from `path`.
    pub fn try_load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Read options from `path`. Returns defaults on error or missing file.
    pub fn load_from_path(path: &Path) -> Self {
        match Self::try_load_from_path(path) {
            Ok(options) => {
                debug!(path = %path.display(), "loaded normalize options");
                options
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "unusable config, using defaults");
                Self::default()
            }
        }
    }

    /// Load options: env `PAGEFILTER_CONFIG_PATH`, then ./config/pagefilter.json, then ./pagefilter.json.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_PATH_ENV) {
            let p = Path::new(&path);
            if p.exists() {
                return Self::load_from_path(p);
            }
            warn!(path = %path, "{} points at a missing file", CONFIG_PATH_ENV);
        }
        for candidate in [
            Path::new("./config/pagefilter.json"),
            Path::new("./pagefilter.json"),
        ] {
            if candidate.exists() {
                return Self::load_from_path(candidate);
            }
        }
        Self::default()
    }
}
