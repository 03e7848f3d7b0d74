// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacting wrapper for bearer tokens.

use std::fmt;

use zeroize::Zeroize;

/// The redaction placeholder used in all output.
pub const REDACTED: &str = "[REDACTED]";

/// A token string that never prints its value.
///
/// `Debug` and `Display` both render [`REDACTED`], so tokens are safe to pass
/// through `tracing` fields. The buffer is zeroed on drop. Call
/// [`SecretString::expose`] at the point the raw value is needed (building an
/// `Authorization` header, writing the store).
#[derive(Clone, PartialEq, Eq, Zeroize)]
#[zeroize(drop)]
pub struct SecretString(String);

impl SecretString {
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	pub fn expose(&self) -> &str {
		&self.0
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

impl fmt::Debug for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("SecretString").field(&REDACTED).finish()
	}
}

impl fmt::Display for SecretString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_debug_and_display_are_redacted() {
		let token = SecretString::new("tok1");
		assert_eq!(format!("{token}"), REDACTED);
		assert_eq!(format!("{token:?}"), "SecretString(\"[REDACTED]\")");
		assert!(!format!("{token:?}").contains("tok1"));
	}

	#[test]
	fn test_expose_returns_value() {
		let token = SecretString::new("tok1".to_string());
		assert_eq!(token.expose(), "tok1");
		assert!(!token.is_empty());
		assert!(SecretString::new("").is_empty());
	}
}
