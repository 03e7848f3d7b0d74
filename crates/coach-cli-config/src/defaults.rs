// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Default configuration file generation.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::ConfigError;

/// Default configuration file template.
///
/// Written to ~/.config/coach/config.toml when no user config exists.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"#
# Coach CLI configuration
# Location: ~/.config/coach/config.toml
#
# Environment variables (COACH_API_URL, COACH_LANG, COACH_TIMEOUT_SECS,
# COACH_LOG_LEVEL, COACH_LOG_FORMAT, COACH_SESSION_FILE) and command-line
# flags override the values below.
#

[api]
# Base URL of the coaching API
base_url = "http://localhost:8000"

# Request timeout in seconds
timeout_secs = 30

[client]
# Interface and content language: en, fr or ar.
# Defaults to the system locale when unset.
# lang = "en"

[logging]
# Log level: error, warn, info, debug, trace
level = "warn"

# Log format: pretty, compact, json
format = "pretty"

# [session]
# Where the login session is stored
# file = "~/.local/share/coach/session.json"
"#;

/// Create the user config file with defaults if it does not exist yet.
///
/// Returns `true` if a file was written.
pub fn ensure_default_config(path: &Path) -> Result<bool, ConfigError> {
	if path.exists() {
		debug!(path = %path.display(), "user config exists");
		return Ok(false);
	}

	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)?;
	}
	fs::write(path, DEFAULT_CONFIG_TEMPLATE)?;

	info!(path = %path.display(), "created default config file");
	Ok(true)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layer::ConfigLayer;

	#[test]
	fn test_template_parses() {
		let layer: ConfigLayer = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();
		let api = layer.api.unwrap();
		assert_eq!(api.base_url.as_deref(), Some("http://localhost:8000"));
		assert_eq!(api.timeout_secs, Some(30));
		assert!(layer.session.is_none());
		assert!(layer.client.unwrap_or_default().lang.is_none());
	}

	#[test]
	fn test_ensure_default_config_creates_once() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("coach").join("config.toml");

		assert!(ensure_default_config(&path).unwrap());
		assert!(path.exists());

		fs::write(&path, "[client]\nlang = \"fr\"\n").unwrap();
		assert!(!ensure_default_config(&path).unwrap());
		assert_eq!(
			fs::read_to_string(&path).unwrap(),
			"[client]\nlang = \"fr\"\n"
		);
	}
}
