//! Layered configuration builder.

use std::env;
use std::path::{Path, PathBuf};

use log::debug;

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] from files, the environment and explicit overrides.
///
/// # Examples
///
/// ```
/// use parkade::config::{Config, ConfigBuilder};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config { log_mode: Some("verbose".into()), ..Default::default() })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.log_mode.as_deref(), Some("verbose"));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Create a builder that loads files from the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look for `parkade.yaml` in `dir` instead of the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Load this file instead of discovering `parkade.yaml`.
    #[must_use]
    pub fn with_config_file(mut self, path: Option<PathBuf>) -> Self {
        self.config_file = path;
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore PARKADE_* environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Apply programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Merge every source and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file cannot be loaded, an
    /// environment variable is invalid, or the merged configuration fails
    /// validation.
    pub fn build(self) -> Result<Config> {
        self.load().map(|loaded| loaded.config)
    }

    /// Like [`ConfigBuilder::build`], but also returns the warnings for
    /// discovered files that were skipped.
    ///
    /// # Errors
    ///
    /// See [`ConfigBuilder::build`].
    pub fn load(self) -> Result<LoadedConfig> {
        let (mut config, warnings) = if self.skip_files {
            (Config::default(), Vec::new())
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => env::current_dir()?,
            };
            let loaded = ConfigLoader::load_all(&working_dir, self.config_file.as_deref())?;
            for source in &loaded.sources {
                debug!("loaded configuration from {}", source.path.display());
            }
            (ConfigMerger::merge(loaded.sources), loaded.warnings)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(LoadedConfig { config, warnings })
    }
}

/// A merged configuration and the problems met while discovering it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedConfig {
    /// The merged configuration.
    pub config: Config,
    /// One message per discovered file that was skipped.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_only() {
        let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_file_then_overrides() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("parkade.yaml"),
            "format: json\nlog_mode: quiet\n",
        )
        .unwrap();

        let config = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .skip_env()
            .with_config(Config {
                log_mode: Some("verbose".into()),
                ..Default::default()
            })
            .build()
            .unwrap();

        assert_eq!(config.output_format, Some(OutputFormat::Json));
        assert_eq!(config.log_mode.as_deref(), Some("verbose"));
    }

    #[test]
    fn test_broken_project_file_is_not_fatal() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("parkade.yaml"), "format: [oops").unwrap();

        let loaded = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .skip_env()
            .load()
            .unwrap();

        assert_eq!(loaded.config.output_format, None);
        assert!(loaded.warnings.iter().any(|w| w.contains("parkade.yaml")));
    }

    #[test]
    fn test_broken_explicit_file_is_fatal() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.yaml");
        fs::write(&path, "format: [oops").unwrap();

        let result = ConfigBuilder::new()
            .with_working_dir(temp_dir.path())
            .with_config_file(Some(path))
            .skip_env()
            .build();
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_merged_config_rejected() {
        let result = ConfigBuilder::new()
            .skip_files()
            .skip_env()
            .with_config(Config {
                log_mode: Some("shouty".into()),
                ..Default::default()
            })
            .build();
        assert!(result.is_err());
    }
}
