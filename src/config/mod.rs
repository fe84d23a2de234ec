// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{ProviderError, Result};
use config::{Config, File, FileFormat};
use std::path::{Path, PathBuf};
use tracing::debug;

impl ServerSettings {
    /// Load server settings from the JSON settings file handed over by the host.
    ///
    /// The file must exist and carry a non-empty `Key`; the path is named in
    /// every error so users know which file to fix.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let full_path = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());

        if !full_path.is_file() {
            return Err(ProviderError::Config(format!(
                "Settings file not found: {}",
                full_path.display()
            )));
        }

        let settings: ServerSettings = Config::builder()
            .add_source(File::from(full_path.as_path()).format(FileFormat::Json))
            .build()?
            .try_deserialize()?;

        debug!("Loaded settings from {}: {:?}", full_path.display(), settings);

        if settings.key.is_empty() {
            return Err(ProviderError::Config(format!(
                "No key is present in {}: obtain a key from the SYSTRAN 8 server and register it",
                full_path.display()
            )));
        }
        if settings.url.trim().is_empty() {
            return Err(ProviderError::Config(format!(
                "No server URL is present in {}",
                full_path.display()
            )));
        }

        Ok(settings)
    }

    /// Where the command-line harness looks for settings when none are given.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("systran8-provider")
            .join("settings.json")
    }
}
