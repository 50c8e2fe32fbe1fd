//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{EngineError, EngineResult};
use crate::models::Experiment;

use super::types::{AccessConfig, AppConfig, RatesFile, StatutoryRates};

/// Loads and provides access to the service configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── rates.yaml        # Statutory rates
/// ├── access.yaml       # Admin access policy
/// └── experiments/
///     └── cta_text.yaml # One A/B experiment per file
/// ```
///
/// The `experiments` directory is optional.
///
/// # Example
///
/// ```no_run
/// use clt_calc::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("FGTS rate: {}", loader.rates().fgts_rate);
/// # Ok::<(), clt_calc::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: AppConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - `rates.yaml` or `access.yaml` is missing (`ConfigNotFound`)
    /// - Any file contains invalid YAML or misses a field (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let rates = Self::load_yaml::<RatesFile>(&path.join("rates.yaml"))?.rates;
        let access = Self::load_yaml::<AccessConfig>(&path.join("access.yaml"))?;
        let experiments = Self::load_experiments(&path.join("experiments"))?;

        info!(
            path = %path.display(),
            experiments = experiments.len(),
            "Loaded configuration"
        );

        Ok(Self {
            config: AppConfig::new(rates, access, experiments),
        })
    }

    /// Builds a loader from already constructed configuration.
    pub fn from_config(config: AppConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Loads every experiment file from the experiments directory.
    ///
    /// Files are read in path order. Two files declaring the same experiment
    /// name give `ConfigParseError` for the second file.
    fn load_experiments(dir: &Path) -> EngineResult<Vec<Experiment>> {
        if !dir.exists() {
            debug!(path = %dir.display(), "No experiments directory");
            return Ok(Vec::new());
        }

        let dir_str = dir.display().to_string();
        let entries = fs::read_dir(dir).map_err(|_| EngineError::ConfigNotFound {
            path: dir_str.clone(),
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                paths.push(path);
            }
        }
        paths.sort();

        let mut seen: HashMap<String, PathBuf> = HashMap::new();
        let mut experiments = Vec::new();
        for path in paths {
            let experiment = Self::load_yaml::<Experiment>(&path)?;
            if let Some(first) = seen.get(&experiment.name) {
                return Err(EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!(
                        "duplicate experiment name '{}', already defined in {}",
                        experiment.name,
                        first.display()
                    ),
                });
            }
            seen.insert(experiment.name.clone(), path);
            experiments.push(experiment);
        }

        experiments.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(experiments)
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Returns the statutory rates.
    pub fn rates(&self) -> &StatutoryRates {
        self.config.rates()
    }

    /// Gets an experiment by name.
    ///
    /// Returns `ExperimentNotFound` for unknown names.
    pub fn get_experiment(&self, name: &str) -> EngineResult<&Experiment> {
        self.config
            .experiments()
            .get(name)
            .ok_or_else(|| EngineError::ExperimentNotFound {
                name: name.to_string(),
            })
    }
}
