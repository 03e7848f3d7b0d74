// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session store error types.

/// Errors that can occur while reading or writing the session store.
#[derive(Debug, thiserror::Error)]
pub enum CredentialError {
	#[error("IO error: {0}")]
	Io(String),

	#[error("Serialization error: {0}")]
	Serde(String),

	#[error("Backend error: {0}")]
	Backend(String),
}

impl From<std::io::Error> for CredentialError {
	fn from(err: std::io::Error) -> Self {
		CredentialError::Io(err.to_string())
	}
}

impl From<serde_json::Error> for CredentialError {
	fn from(err: serde_json::Error) -> Self {
		CredentialError::Serde(err.to_string())
	}
}
