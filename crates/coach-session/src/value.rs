// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session value types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::key::SessionKey;
use crate::secret::{SecretString, REDACTED};

/// On-disk session representation.
///
/// Field names match [`SessionKey::as_str`]; absent keys are omitted.
/// `Debug` redacts the token fields.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSession {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub access_token: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub refresh_token: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub last_email: Option<String>,
}

impl PersistedSession {
	pub fn get(&self, key: SessionKey) -> Option<&str> {
		self.slot(key).as_deref()
	}

	pub fn set(&mut self, key: SessionKey, value: Option<String>) {
		*self.slot_mut(key) = value;
	}

	pub fn is_empty(&self) -> bool {
		SessionKey::ALL.iter().all(|k| self.get(*k).is_none())
	}

	fn slot(&self, key: SessionKey) -> &Option<String> {
		match key {
			SessionKey::AccessToken => &self.access_token,
			SessionKey::RefreshToken => &self.refresh_token,
			SessionKey::LastEmail => &self.last_email,
		}
	}

	fn slot_mut(&mut self, key: SessionKey) -> &mut Option<String> {
		match key {
			SessionKey::AccessToken => &mut self.access_token,
			SessionKey::RefreshToken => &mut self.refresh_token,
			SessionKey::LastEmail => &mut self.last_email,
		}
	}
}

impl fmt::Debug for PersistedSession {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let mut out = f.debug_struct("PersistedSession");
		for key in SessionKey::ALL {
			let value = match self.get(key) {
				Some(_) if key.is_secret() => Some(REDACTED),
				value => value,
			};
			out.field(key.as_str(), &value);
		}
		out.finish()
	}
}

/// Runtime token pair with secret protection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTokens {
	pub access: SecretString,
	pub refresh: Option<SecretString>,
}

impl SessionTokens {
	pub fn new(access: impl Into<String>, refresh: Option<String>) -> Self {
		Self {
			access: SecretString::new(access),
			refresh: refresh.map(SecretString::new),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_persisted_uses_fixed_key_names() {
		let mut session = PersistedSession::default();
		session.set(SessionKey::AccessToken, Some("tok1".to_string()));
		session.set(SessionKey::LastEmail, Some("a@b.com".to_string()));

		let json = serde_json::to_string(&session).unwrap();
		assert!(json.contains("\"access_token\":\"tok1\""));
		assert!(json.contains("\"last_email\":\"a@b.com\""));
		assert!(!json.contains("refresh_token"));
	}

	#[test]
	fn test_is_empty() {
		let mut session = PersistedSession::default();
		assert!(session.is_empty());
		session.set(SessionKey::RefreshToken, Some("ref1".to_string()));
		assert!(!session.is_empty());
		session.set(SessionKey::RefreshToken, None);
		assert!(session.is_empty());
	}

	#[test]
	fn test_persisted_debug_redacts_tokens() {
		let mut session = PersistedSession::default();
		session.set(SessionKey::AccessToken, Some("tok1".to_string()));
		session.set(SessionKey::RefreshToken, Some("ref1".to_string()));
		session.set(SessionKey::LastEmail, Some("a@b.com".to_string()));

		let debug = format!("{session:?}");
		assert!(!debug.contains("tok1"));
		assert!(!debug.contains("ref1"));
		assert!(debug.contains(REDACTED));
		assert!(debug.contains("a@b.com"));
	}

	#[test]
	fn test_tokens_debug_is_redacted() {
		let tokens = SessionTokens::new("tok1", Some("ref1".to_string()));
		let debug = format!("{tokens:?}");
		assert!(!debug.contains("tok1"));
		assert!(!debug.contains("ref1"));
	}
}
