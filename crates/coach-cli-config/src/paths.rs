// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Resolved XDG paths for the coach CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathsConfig {
	/// User config file: ~/.config/coach/config.toml
	pub user_config_file: PathBuf,
	/// Data directory: ~/.local/share/coach/
	pub data_dir: PathBuf,
}

impl PathsConfig {
	/// Paths rooted at explicit config and data homes.
	pub fn under(config_home: &Path, data_home: &Path) -> Self {
		Self {
			user_config_file: config_home.join("coach/config.toml"),
			data_dir: data_home.join("coach"),
		}
	}

	/// Default location of the persisted session.
	pub fn default_session_file(&self) -> PathBuf {
		self.data_dir.join("session.json")
	}
}

/// Resolve XDG paths according to the Base Directory Specification.
///
/// Uses environment variables if set, otherwise falls back to defaults:
/// - XDG_CONFIG_HOME or ~/.config
/// - XDG_DATA_HOME or ~/.local/share
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".config"));

	let data_home = std::env::var_os("XDG_DATA_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".local/share"));

	tracing::debug!(
		config_home = %config_home.display(),
		data_home = %data_home.display(),
		"resolved XDG paths"
	);

	Ok(PathsConfig::under(&config_home, &data_home))
}
