// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use coach_common_i18n::Lang;
use serde::{Deserialize, Serialize};

use crate::layer::*;
use crate::paths::PathsConfig;
use crate::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// The final, validated configuration for the coach CLI.
#[derive(Debug, Clone)]
pub struct CoachConfig {
	pub api: ApiConfig,
	/// `None` when no source sets a language.
	pub lang: Option<Lang>,
	pub logging: LoggingConfig,
	pub session_file: PathBuf,
	pub paths: PathsConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
	pub base_url: String,
	pub timeout: Duration,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			base_url: DEFAULT_BASE_URL.to_string(),
			timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
		}
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Error,
	#[default]
	Warn,
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Error => "error",
			Self::Warn => "warn",
			Self::Info => "info",
			Self::Debug => "debug",
			Self::Trace => "trace",
		}
	}
}

impl FromStr for LogLevel {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"error" => Ok(Self::Error),
			"warn" | "warning" => Ok(Self::Warn),
			"info" => Ok(Self::Info),
			"debug" => Ok(Self::Debug),
			"trace" => Ok(Self::Trace),
			other => Err(ConfigError::invalid_value(
				"logging.level",
				format!("unknown level {other:?}"),
			)),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
	Compact,
}

impl FromStr for LogFormat {
	type Err = ConfigError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"pretty" => Ok(Self::Pretty),
			"json" => Ok(Self::Json),
			"compact" => Ok(Self::Compact),
			other => Err(ConfigError::invalid_value(
				"logging.format",
				format!("unknown format {other:?}"),
			)),
		}
	}
}

impl CoachConfig {
	/// Build runtime config from a merged layer and paths.
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Result<Self, ConfigError> {
		let api = build_api_config(layer.api);
		let lang = build_lang(layer.client)?;
		let logging = build_logging_config(layer.logging)?;
		let session_file = layer
			.session
			.and_then(|s| s.file)
			.unwrap_or_else(|| paths.default_session_file());

		Ok(Self {
			api,
			lang,
			logging,
			session_file,
			paths,
		})
	}
}

fn build_api_config(layer: Option<ApiLayer>) -> ApiConfig {
	let layer = layer.unwrap_or_default();
	ApiConfig {
		base_url: layer
			.base_url
			.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
		timeout: Duration::from_secs(layer.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
	}
}

fn build_lang(layer: Option<ClientLayer>) -> Result<Option<Lang>, ConfigError> {
	layer
		.and_then(|c| c.lang)
		.map(|code| {
			code.parse::<Lang>()
				.map_err(|e| ConfigError::invalid_value("client.lang", e.to_string()))
		})
		.transpose()
}

fn build_logging_config(layer: Option<LoggingLayer>) -> Result<LoggingConfig, ConfigError> {
	let layer = layer.unwrap_or_default();
	Ok(LoggingConfig {
		level: layer
			.level
			.as_deref()
			.map(str::parse::<LogLevel>)
			.transpose()?
			.unwrap_or_default(),
		format: layer
			.format
			.as_deref()
			.map(str::parse::<LogFormat>)
			.transpose()?
			.unwrap_or_default(),
	})
}
