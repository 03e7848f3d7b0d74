// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP client with consistent User-Agent header.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Transport timeout used when the configuration does not set one.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Creates a new HTTP client builder with the standard coach User-Agent header.
///
/// Use this when you need to customize the client further.
///
/// # Example
/// ```ignore
/// let client = coach_common_http::builder()
///     .timeout(Duration::from_secs(10))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Builds a client with the standard User-Agent and the given timeout.
pub fn build_client(timeout: Duration) -> Result<Client, reqwest::Error> {
	tracing::trace!(timeout_ms = timeout.as_millis() as u64, "building HTTP client");
	builder().timeout(timeout).build()
}

/// Returns the standard coach User-Agent string.
///
/// Format: `coach/{version}/{os}-{arch}`
pub fn user_agent() -> String {
	format!(
		"coach/{}/{}-{}",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn user_agent_has_correct_format() {
		let ua = user_agent();
		assert!(ua.starts_with("coach/"));
		let parts: Vec<&str> = ua.split('/').collect();
		assert_eq!(parts.len(), 3);
		assert_eq!(parts[1], env!("CARGO_PKG_VERSION"));
		assert!(parts[2].contains('-'));
	}

	#[test]
	fn build_client_with_timeout() {
		let client = build_client(Duration::from_secs(5));
		assert!(client.is_ok());
	}
}
