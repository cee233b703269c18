use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;

use crate::domain::error::{AppError, Result};
use crate::domain::pipeline_config::{PipelineConfig, PipelineOverrides};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "pulse.toml";

/// Prefix of environment variables overriding config keys, e.g. `PULSE_OUTPUT_DIR`
pub const ENV_PREFIX: &str = "PULSE_";

/// Loads [`PipelineConfig`] from defaults, TOML, environment and overrides
pub struct ConfigService {
    config_file: Option<PathBuf>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self { config_file: None }
    }

    /// Use an explicit config file; unlike the default file it must exist
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Layer order, later wins: defaults, TOML file, `PULSE_*` env, overrides
    pub fn figment(&self, overrides: &PipelineOverrides) -> Result<Figment> {
        let toml = match &self.config_file {
            Some(path) => {
                Self::require_file(path)?;
                Toml::file(path)
            }
            None => Toml::file(DEFAULT_CONFIG_FILE),
        };

        Ok(Figment::from(Serialized::defaults(PipelineConfig::default()))
            .merge(toml)
            .merge(Env::prefixed(ENV_PREFIX))
            .merge(Serialized::defaults(overrides.clone())))
    }

    /// Extract and validate the effective configuration
    pub fn load(&self, overrides: &PipelineOverrides) -> Result<PipelineConfig> {
        let config: PipelineConfig = self
            .figment(overrides)?
            .extract()
            .map_err(|e| AppError::ConfigError(e.to_string()))?;

        config
            .validate()
            .map_err(|e| AppError::ConfigError(format!("Invalid pipeline config: {}", e)))?;
        Ok(config)
    }

    fn require_file(path: &Path) -> Result<()> {
        if path.is_file() {
            Ok(())
        } else {
            Err(AppError::ConfigError(format!(
                "config file {} does not exist",
                path.display()
            )))
        }
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
