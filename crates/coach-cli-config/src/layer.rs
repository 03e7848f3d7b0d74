// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer for merging from multiple sources.

use serde::Deserialize;
use std::path::PathBuf;

/// Partial configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
	#[serde(default)]
	pub api: Option<ApiLayer>,
	#[serde(default)]
	pub client: Option<ClientLayer>,
	#[serde(default)]
	pub logging: Option<LoggingLayer>,
	#[serde(default)]
	pub session: Option<SessionLayer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiLayer {
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClientLayer {
	#[serde(default)]
	pub lang: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingLayer {
	#[serde(default)]
	pub level: Option<String>,
	#[serde(default)]
	pub format: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SessionLayer {
	#[serde(default)]
	pub file: Option<PathBuf>,
}

impl ConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_option(&mut self.api, other.api, ApiLayer::merge);
		merge_option(&mut self.client, other.client, ClientLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingLayer::merge);
		merge_option(&mut self.session, other.session, SessionLayer::merge);
	}

	pub(crate) fn api_mut(&mut self) -> &mut ApiLayer {
		self.api.get_or_insert_with(ApiLayer::default)
	}

	pub(crate) fn client_mut(&mut self) -> &mut ClientLayer {
		self.client.get_or_insert_with(ClientLayer::default)
	}

	pub(crate) fn logging_mut(&mut self) -> &mut LoggingLayer {
		self.logging.get_or_insert_with(LoggingLayer::default)
	}

	pub(crate) fn session_mut(&mut self) -> &mut SessionLayer {
		self.session.get_or_insert_with(SessionLayer::default)
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

fn merge_field<T>(target: &mut Option<T>, source: Option<T>) {
	if source.is_some() {
		*target = source;
	}
}

impl ApiLayer {
	fn merge(&mut self, other: ApiLayer) {
		merge_field(&mut self.base_url, other.base_url);
		merge_field(&mut self.timeout_secs, other.timeout_secs);
	}
}

impl ClientLayer {
	fn merge(&mut self, other: ClientLayer) {
		merge_field(&mut self.lang, other.lang);
	}
}

impl LoggingLayer {
	fn merge(&mut self, other: LoggingLayer) {
		merge_field(&mut self.level, other.level);
		merge_field(&mut self.format, other.format);
	}
}

impl SessionLayer {
	fn merge(&mut self, other: SessionLayer) {
		merge_field(&mut self.file, other.file);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_merge_precedence_overwrites_existing_values() {
		let mut base = ConfigLayer {
			api: Some(ApiLayer {
				base_url: Some("http://localhost:8000".to_string()),
				timeout_secs: Some(10),
			}),
			..Default::default()
		};

		let overlay = ConfigLayer {
			api: Some(ApiLayer {
				base_url: Some("https://coach.example.com".to_string()),
				timeout_secs: None,
			}),
			..Default::default()
		};

		base.merge(overlay);

		let api = base.api.unwrap();
		assert_eq!(api.base_url.as_deref(), Some("https://coach.example.com"));
		assert_eq!(api.timeout_secs, Some(10));
	}

	#[test]
	fn test_merge_empty_layer_preserves_all() {
		let mut base = ConfigLayer {
			logging: Some(LoggingLayer {
				level: Some("debug".to_string()),
				format: Some("json".to_string()),
			}),
			client: Some(ClientLayer {
				lang: Some("ar".to_string()),
			}),
			..Default::default()
		};

		base.merge(ConfigLayer::default());

		let logging = base.logging.unwrap();
		assert_eq!(logging.level.as_deref(), Some("debug"));
		assert_eq!(logging.format.as_deref(), Some("json"));
		assert_eq!(base.client.unwrap().lang.as_deref(), Some("ar"));
	}

	#[test]
	fn test_merge_into_empty_base() {
		let mut base = ConfigLayer::default();
		base.merge(ConfigLayer {
			session: Some(SessionLayer {
				file: Some(PathBuf::from("/tmp/session.json")),
			}),
			..Default::default()
		});
		assert_eq!(
			base.session.unwrap().file,
			Some(PathBuf::from("/tmp/session.json"))
		);
	}

	#[test]
	fn test_parse_toml_layer() {
		let layer: ConfigLayer = toml::from_str(
			r#"
[api]
base_url = "https://coach.example.com"
timeout_secs = 15

[client]
lang = "fr"
"#,
		)
		.unwrap();
		assert_eq!(layer.api.as_ref().unwrap().timeout_secs, Some(15));
		assert_eq!(layer.client.unwrap().lang.as_deref(), Some("fr"));
		assert!(layer.logging.is_none());
	}
}
