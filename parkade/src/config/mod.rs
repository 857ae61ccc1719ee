//! Configuration system for parkade.
//!
//! This module provides layered configuration with support for:
//! - YAML configuration files (user config and project `parkade.yaml`)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (PARKADE_*)
//! 3. Explicit config file, or `parkade.yaml` in the working directory
//! 4. User config (`~/.parkade/config.yaml`)
//! 5. Built-in defaults
//!
//! A discovered file that cannot be used is skipped with a warning; an
//! explicitly requested one is an error. Only output settings are
//! configurable: the tariff and the lot itself are not.

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::{ConfigBuilder, LoadedConfig};
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, LoadedSources};
pub use merger::ConfigMerger;
pub use schema::Config;
pub use validator::ConfigValidator;
