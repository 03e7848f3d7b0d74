// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration validation rules.

use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::runtime::CoachConfig;
use crate::ConfigError;

/// Validate the configuration.
///
/// Returns Ok(()) if valid, or ConfigError::InvalidValue with details.
pub fn validate_config(config: &CoachConfig) -> Result<(), ConfigError> {
	validate_api(config)?;
	validate_session(config)?;

	Ok(())
}

fn validate_api(config: &CoachConfig) -> Result<(), ConfigError> {
	let api = &config.api;

	let url = Url::parse(&api.base_url)
		.map_err(|e| ConfigError::invalid_value("api.base_url", e.to_string()))?;
	if !matches!(url.scheme(), "http" | "https") {
		return Err(ConfigError::invalid_value(
			"api.base_url",
			"must be an http or https URL",
		));
	}
	if url.scheme() == "http" && !is_loopback(&url) {
		warn!(base_url = %api.base_url, "API base URL is not using TLS");
	}

	if api.timeout.is_zero() {
		return Err(ConfigError::invalid_value(
			"api.timeout_secs",
			"must be at least 1",
		));
	}
	if api.timeout > Duration::from_secs(600) {
		return Err(ConfigError::invalid_value(
			"api.timeout_secs",
			"must be at most 600",
		));
	}

	Ok(())
}

fn validate_session(config: &CoachConfig) -> Result<(), ConfigError> {
	if config.session_file.as_os_str().is_empty() {
		return Err(ConfigError::invalid_value(
			"session.file",
			"cannot be empty",
		));
	}
	Ok(())
}

fn is_loopback(url: &Url) -> bool {
	matches!(url.host_str(), Some("localhost" | "127.0.0.1" | "[::1]"))
}
