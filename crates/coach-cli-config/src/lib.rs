// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration management for the coach CLI.
//!
//! This crate provides:
//! - XDG Base Directory compliant path resolution
//! - Layered configuration from multiple sources
//! - TOML configuration file parsing
//! - Environment variable overrides
//! - Configuration validation

pub mod defaults;
pub mod error;
pub mod layer;
pub mod paths;
pub mod registry;
pub mod runtime;
pub mod sources;
pub mod validation;

pub use defaults::{ensure_default_config, DEFAULT_CONFIG_TEMPLATE};
pub use error::ConfigError;
pub use layer::ConfigLayer;
pub use paths::PathsConfig;
pub use registry::ConfigRegistry;
pub use runtime::{ApiConfig, CoachConfig, LogFormat, LogLevel, LoggingConfig};
pub use sources::{CliOverrides, ConfigSource, Precedence};

/// Load configuration with CLI overrides.
///
/// If no user config file exists, a default one is created at
/// `~/.config/coach/config.toml`. An explicit `config_file` replaces the user
/// config file and is never created.
pub fn load_config_with_cli(cli: CliOverrides) -> Result<CoachConfig, ConfigError> {
	let paths = paths::resolve_xdg_paths()?;

	let mut registry = ConfigRegistry::new();
	registry.register(Box::new(sources::DefaultsSource));
	match &cli.config_file {
		Some(path) => registry.register(Box::new(sources::FileSource::custom(
			path.clone(),
			Precedence::UserFile,
			"cli-config-file",
		))),
		None => {
			ensure_default_config(&paths.user_config_file)?;
			registry.register(Box::new(sources::FileSource::user(&paths)));
		}
	}
	registry.register(Box::new(sources::EnvSource::new()));
	registry.register(Box::new(sources::CliSource::new(cli)));

	registry.load(paths)
}
