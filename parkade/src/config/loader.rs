//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading parkade configuration files
//! from various locations with proper precedence.

use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the project configuration.
pub const PROJECT_CONFIG_FILE: &str = "parkade.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Everything [`ConfigLoader::load_all`] found.
#[derive(Debug, Clone, Default)]
pub struct LoadedSources {
    /// Usable sources, lowest precedence first.
    pub sources: Vec<ConfigSource>,
    /// Discovered files that were skipped, with the reason.
    pub warnings: Vec<String>,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use parkade::config::ConfigLoader;
/// use std::path::Path;
///
/// let loaded = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", loaded.sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.parkade/config.yaml` (precedence 1)
    /// 2. `explicit`, if given, otherwise `parkade.yaml` in `working_dir`
    ///    (precedence 2)
    ///
    /// Discovered files are optional: one that cannot be read, parsed or
    /// validated is skipped and reported in [`LoadedSources::warnings`].
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file cannot be read, parsed or
    /// validated.
    pub fn load_all(working_dir: &Path, explicit: Option<&Path>) -> Result<LoadedSources> {
        let mut loaded = LoadedSources::default();

        if let Some(path) = Self::user_config_path().filter(|p| p.exists()) {
            loaded.discovered(path, 1);
        }

        match explicit {
            Some(path) => {
                let config = Self::load_file(path)?;
                ConfigValidator::validate(&config)?;
                loaded.sources.push(ConfigSource {
                    path: path.to_path_buf(),
                    precedence: 2,
                    config,
                });
            }
            None => {
                let path = working_dir.join(PROJECT_CONFIG_FILE);
                if path.exists() {
                    loaded.discovered(path, 2);
                }
            }
        }

        loaded.sources.sort_by_key(|s| s.precedence);
        Ok(loaded)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Get the user config path, if a home directory is known.
    fn user_config_path() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".parkade").join("config.yaml"))
    }
}

impl LoadedSources {
    fn discovered(&mut self, path: PathBuf, precedence: u8) {
        let config = ConfigLoader::load_file(&path)
            .and_then(|config| ConfigValidator::validate(&config).map(|()| config));
        match config {
            Ok(config) => self.sources.push(ConfigSource {
                path,
                precedence,
                config,
            }),
            Err(e) => self
                .warnings
                .push(format!("ignoring configuration file {}: {e}", path.display())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/parkade.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "format: [unclosed").unwrap();

        let err = ConfigLoader::load_file(&config_path).unwrap_err();
        assert!(format!("{err}").contains("Invalid YAML"));
    }

    #[test]
    fn test_project_file_discovered_in_working_dir() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "format: json\n").unwrap();

        let loaded = ConfigLoader::load_all(temp_dir.path(), None).unwrap();
        let project = loaded.sources.iter().find(|s| s.precedence == 2).unwrap();
        assert_eq!(project.config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_explicit_file_replaces_project_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "format: json\n").unwrap();
        let explicit = temp_dir.path().join("other.yaml");
        fs::write(&explicit, "log_mode: verbose\n").unwrap();

        let loaded = ConfigLoader::load_all(temp_dir.path(), Some(&explicit)).unwrap();
        let project = loaded.sources.iter().find(|s| s.precedence == 2).unwrap();
        assert_eq!(project.path, explicit);
        assert_eq!(project.config.log_mode.as_deref(), Some("verbose"));
        assert_eq!(project.config.output_format, None);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.yaml");
        assert!(ConfigLoader::load_all(temp_dir.path(), Some(&missing)).is_err());
    }

    #[test]
    fn test_broken_explicit_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let explicit = temp_dir.path().join("bad.yaml");
        fs::write(&explicit, "log_mode: shouty\n").unwrap();
        assert!(ConfigLoader::load_all(temp_dir.path(), Some(&explicit)).is_err());
    }

    #[test]
    fn test_broken_discovered_file_is_skipped_with_warning() {
        for contents in ["format: [oops", "log_mode: shouty\n", "initial_capacity: 2\n"] {
            let temp_dir = TempDir::new().unwrap();
            fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), contents).unwrap();

            let loaded = ConfigLoader::load_all(temp_dir.path(), None).unwrap();
            assert!(
                loaded.sources.iter().all(|s| s.precedence != 2),
                "{contents:?}"
            );
            let warning = loaded
                .warnings
                .iter()
                .find(|w| w.contains(PROJECT_CONFIG_FILE))
                .unwrap();
            assert!(warning.starts_with("ignoring configuration file"));
        }
    }
}
