// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: files, environment, CLI, defaults.

use std::path::PathBuf;

use tracing::{debug, trace, warn};

use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::ConfigError;

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	UserFile = 30,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	/// Name for logging
	fn name(&self) -> &'static str;

	/// Precedence level
	fn precedence(&self) -> Precedence;

	/// Load configuration layer from this source
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		// defaults are applied when building the runtime config
		Ok(ConfigLayer::default())
	}
}

/// File-based configuration source (TOML).
pub struct FileSource {
	path: PathBuf,
	precedence: Precedence,
	name: &'static str,
}

impl FileSource {
	/// User config: ~/.config/coach/config.toml
	pub fn user(paths: &PathsConfig) -> Self {
		Self {
			path: paths.user_config_file.clone(),
			precedence: Precedence::UserFile,
			name: "user-config",
		}
	}

	/// Custom file path with specified precedence
	pub fn custom(path: PathBuf, precedence: Precedence, name: &'static str) -> Self {
		Self {
			path,
			precedence,
			name,
		}
	}
}

impl ConfigSource for FileSource {
	fn name(&self) -> &'static str {
		self.name
	}
	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), source = self.name, "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), source = self.name, "loading config file");

		let content = std::fs::read_to_string(&self.path)?;
		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!(source = self.name, "parsed config layer");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Recognised variables: `COACH_API_URL`, `COACH_TIMEOUT_SECS`, `COACH_LANG`,
/// `COACH_LOG_LEVEL`, `COACH_LOG_FORMAT`, `COACH_SESSION_FILE`.
pub struct EnvSource {
	vars: Vec<(String, String)>,
}

impl EnvSource {
	/// Snapshot the process environment.
	pub fn new() -> Self {
		Self::from_vars(std::env::vars())
	}

	pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
		Self {
			vars: vars
				.into_iter()
				.filter(|(k, _)| k.starts_with("COACH_"))
				.collect(),
		}
	}
}

impl Default for EnvSource {
	fn default() -> Self {
		Self::new()
	}
}

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		let mut layer = ConfigLayer::default();

		for (key, value) in &self.vars {
			let value = value.trim().to_string();
			if value.is_empty() {
				continue;
			}

			trace!(key = %key, "processing env var");

			match key.as_str() {
				"COACH_API_URL" => layer.api_mut().base_url = Some(value),
				"COACH_TIMEOUT_SECS" => match value.parse() {
					Ok(secs) => layer.api_mut().timeout_secs = Some(secs),
					Err(_) => warn!(key = %key, "ignoring non-numeric timeout"),
				},
				"COACH_LANG" => layer.client_mut().lang = Some(value),
				"COACH_LOG_LEVEL" => layer.logging_mut().level = Some(value),
				"COACH_LOG_FORMAT" => layer.logging_mut().format = Some(value),
				"COACH_SESSION_FILE" => layer.session_mut().file = Some(PathBuf::from(value)),
				_ => {
					// Unknown COACH_ variable, ignore
				}
			}
		}

		Ok(layer)
	}
}

/// CLI override source.
pub struct CliSource {
	overrides: CliOverrides,
}

/// CLI argument overrides.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub api_url: Option<String>,
	pub lang: Option<String>,
	pub log_level: Option<String>,
	pub log_format: Option<String>,
	pub config_file: Option<PathBuf>,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading CLI overrides");
		let mut layer = ConfigLayer::default();

		if let Some(ref url) = self.overrides.api_url {
			layer.api_mut().base_url = Some(url.clone());
		}
		if let Some(ref lang) = self.overrides.lang {
			layer.client_mut().lang = Some(lang.clone());
		}
		if let Some(ref level) = self.overrides.log_level {
			layer.logging_mut().level = Some(level.clone());
		}
		if let Some(ref format) = self.overrides.log_format {
			layer.logging_mut().format = Some(format.clone());
		}

		Ok(layer)
	}
}
