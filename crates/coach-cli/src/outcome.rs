// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Turning API outcomes into command results.

use anyhow::{anyhow, Result};
use coach_api::ApiOutcome;
use coach_common_i18n::{t, Lang};
use tracing::debug;

/// Unwrap a successful outcome or produce a localized error.
///
/// Redirects have already been reported by the navigator; they still fail
/// the command so scripts see a non-zero exit.
pub fn require<T>(outcome: ApiOutcome<T>, lang: Lang) -> Result<T> {
	match outcome {
		ApiOutcome::Success(value) => Ok(value),
		ApiOutcome::Redirected(redirect) => {
			debug!(location = %redirect.location, "command redirected");
			Err(anyhow!(t(lang, "client.auth.login_required")))
		}
		ApiOutcome::Failed(failure) => Err(anyhow!(failure.message(lang))),
		ApiOutcome::Connectivity(error) => {
			debug!(error = %error, "connectivity failure");
			Err(anyhow!(t(lang, "client.error.network")))
		}
	}
}
