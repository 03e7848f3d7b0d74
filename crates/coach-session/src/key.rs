// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

/// The fixed names session values are stored under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionKey {
	AccessToken,
	RefreshToken,
	LastEmail,
}

impl SessionKey {
	pub const ALL: [SessionKey; 3] = [
		SessionKey::AccessToken,
		SessionKey::RefreshToken,
		SessionKey::LastEmail,
	];

	pub fn as_str(&self) -> &'static str {
		match self {
			SessionKey::AccessToken => "access_token",
			SessionKey::RefreshToken => "refresh_token",
			SessionKey::LastEmail => "last_email",
		}
	}

	/// Whether the value is a credential and must be wrapped before use.
	pub fn is_secret(&self) -> bool {
		!matches!(self, SessionKey::LastEmail)
	}
}

impl fmt::Display for SessionKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_key_names_are_stable() {
		assert_eq!(SessionKey::AccessToken.as_str(), "access_token");
		assert_eq!(SessionKey::RefreshToken.as_str(), "refresh_token");
		assert_eq!(SessionKey::LastEmail.as_str(), "last_email");
	}

	#[test]
	fn test_email_is_not_secret() {
		assert!(SessionKey::AccessToken.is_secret());
		assert!(SessionKey::RefreshToken.is_secret());
		assert!(!SessionKey::LastEmail.is_secret());
	}
}
