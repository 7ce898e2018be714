//! Loading a [`PendulumConfig`] from disk and applying CLI overrides.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use pendulum::{ConfigError, DoublePendulum, PendulumConfig};
use thiserror::Error;
use tracing::{debug, info};

use crate::cli::SimArgs;

/// Errors raised while turning CLI arguments into a pendulum.
#[derive(Error, Debug)]
pub enum SettingsError {
    /// The config file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The config file is not valid TOML for a [`PendulumConfig`].
    #[error("invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// The config file is not valid JSON for a [`PendulumConfig`].
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The file extension is neither `.toml` nor `.json`.
    #[error("unsupported config format for {}: expected .toml or .json", .0.display())]
    UnsupportedFormat(PathBuf),

    /// `--validate` rejected the configuration.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Reads a config file, choosing the parser from the extension.
///
/// # Errors
///
/// Returns [`SettingsError`] if the file cannot be read, has an unknown
/// extension, or does not parse into a complete [`PendulumConfig`].
pub fn load_config(path: &Path) -> Result<PendulumConfig, SettingsError> {
    let format = match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("toml") => FileFormat::Toml,
        Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
        _ => return Err(SettingsError::UnsupportedFormat(path.to_path_buf())),
    };

    let text = fs::read_to_string(path).map_err(|source| SettingsError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let config = match format {
        FileFormat::Toml => toml::from_str(&text).map_err(|source| SettingsError::Toml {
            path: path.to_path_buf(),
            source,
        })?,
        FileFormat::Json => serde_json::from_str(&text).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?,
    };
    info!(path = %path.display(), "loaded configuration");
    Ok(config)
}

#[derive(Debug, Clone, Copy)]
enum FileFormat {
    Toml,
    Json,
}

/// Renders the default preset as TOML.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn default_config_toml() -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(&PendulumConfig::default())
}

impl SimArgs {
    /// The configuration these arguments describe: the file (or the default
    /// preset) with `--dt` and `--gravity` applied on top.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if a config file was given and fails to load.
    pub fn resolve_config(&self) -> Result<PendulumConfig, SettingsError> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => PendulumConfig::default(),
        };
        if let Some(dt) = self.dt {
            config.dt = dt;
        }
        if let Some(g) = self.gravity {
            config.g = g;
        }
        debug!(?config, "resolved configuration");
        Ok(config)
    }

    /// Builds the pendulum, validating first when `--validate` was given.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] if loading fails or validation rejects the
    /// configuration.
    pub fn build(&self) -> Result<DoublePendulum, SettingsError> {
        let config = self.resolve_config()?;
        if self.validate {
            Ok(DoublePendulum::try_new(config)?)
        } else {
            Ok(DoublePendulum::new(config))
        }
    }
}
