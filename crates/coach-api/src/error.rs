// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Client construction errors.
//!
//! Request-time failures are not errors in this crate; they come back as
//! [`crate::ApiOutcome`] variants so every caller handles them explicitly.

/// Errors raised while building an [`crate::ApiClient`].
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
	#[error("base URL is required")]
	MissingBaseUrl,

	#[error("invalid base URL {url:?}: {reason}")]
	InvalidBaseUrl { url: String, reason: String },

	#[error("a session store is required")]
	MissingSessionStore,

	#[error("a navigator is required")]
	MissingNavigator,

	#[error("failed to build HTTP client: {0}")]
	Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
