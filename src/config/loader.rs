//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading import
//! configuration from YAML files. The import engine itself performs no I/O;
//! hosts load a configuration once and hand it to the
//! [`Importer`](crate::import::Importer).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{ImportError, ImportResult};

use super::types::{DepartmentConfig, DetectionConfig, ImportConfig};

/// Loads import configuration from a directory.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── departments.yaml  # BOH/FOH keyword tables
/// └── detection.yaml    # Format detection markers and roster name headers
/// ```
///
/// # Example
///
/// ```no_run
/// use schedule_import::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default").unwrap();
/// println!("BOH keywords: {:?}", loader.config().departments.column.boh);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: ImportConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if either file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> ImportResult<Self> {
        let path = path.as_ref();

        let departments = Self::load_yaml::<DepartmentConfig>(&path.join("departments.yaml"))?;
        let detection = Self::load_yaml::<DetectionConfig>(&path.join("detection.yaml"))?;

        debug!(path = %path.display(), "Loaded import configuration");

        Ok(Self {
            config: ImportConfig::new(departments, detection),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> ImportResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| ImportError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| ImportError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the loaded configuration.
    pub fn config(&self) -> &ImportConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> ImportConfig {
        self.config
    }
}
