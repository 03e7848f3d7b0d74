// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Request outcomes.

use coach_common_i18n::{t, Lang};
use reqwest::StatusCode;
use serde_json::Value;

/// Why the client navigated somewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
	/// A protected mutation was attempted with no stored token.
	MissingCredential,
	/// The server rejected the stored token (401 or 403).
	Unauthorized,
	/// A login or signup completed.
	SignedIn,
}

/// A navigation issued by the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Redirect {
	pub location: String,
	pub reason: RedirectReason,
}

impl Redirect {
	pub fn new(location: impl Into<String>, reason: RedirectReason) -> Self {
		Self {
			location: location.into(),
			reason,
		}
	}
}

/// A request that reached the server and came back with an error, or whose
/// success body could not be decoded.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
	/// `None` when the failure was local (e.g. the session could not be saved).
	pub status: Option<StatusCode>,
	/// The parsed error body, if it was JSON.
	pub payload: Option<Value>,
	detail: Option<String>,
}

impl ApiFailure {
	/// Build a failure from an error response body.
	pub fn from_response(status: StatusCode, body: &str) -> Self {
		let payload = serde_json::from_str::<Value>(body).ok();
		let detail = payload.as_ref().and_then(error_detail);
		Self {
			status: Some(status),
			payload,
			detail,
		}
	}

	/// A failure that never reached the server.
	pub fn local(detail: impl Into<String>) -> Self {
		Self {
			status: None,
			payload: None,
			detail: Some(detail.into()),
		}
	}

	/// A success status whose body did not match the expected shape.
	pub fn invalid_body(status: StatusCode, detail: impl Into<String>) -> Self {
		Self {
			status: Some(status),
			payload: None,
			detail: Some(detail.into()),
		}
	}

	pub fn is_not_found(&self) -> bool {
		self.status == Some(StatusCode::NOT_FOUND)
	}

	/// The first recognised error message in the payload.
	pub fn detail(&self) -> Option<&str> {
		self.detail.as_deref()
	}

	/// Message for general pages: the recognised detail, else the raw
	/// payload, else a generic localized message.
	pub fn message(&self, lang: Lang) -> String {
		if let Some(detail) = &self.detail {
			return detail.clone();
		}
		match &self.payload {
			Some(payload) if !payload.is_null() => payload.to_string(),
			_ => t(lang, "client.error.generic"),
		}
	}

	/// Message for the login and signup forms.
	pub fn form_message(&self, lang: Lang) -> String {
		self.detail
			.clone()
			.unwrap_or_else(|| t(lang, "client.error.invalid_credentials"))
	}
}

/// Pick a human-readable message out of an error body.
///
/// Checks `detail`, then `error`, then the first entry under `email` or
/// `password`. Field errors may be a list of strings or a single string.
fn error_detail(payload: &Value) -> Option<String> {
	fn text(value: Option<&Value>) -> Option<String> {
		match value? {
			Value::String(s) if !s.is_empty() => Some(s.clone()),
			Value::Array(items) => items.iter().find_map(|v| text(Some(v))),
			_ => None,
		}
	}

	["detail", "error", "email", "password"]
		.iter()
		.find_map(|key| text(payload.get(key)))
}

/// Result of one API call.
///
/// A redirect is an expected outcome, not an error; callers must not render
/// anything further for it.
#[derive(Debug)]
pub enum ApiOutcome<T> {
	Success(T),
	Redirected(Redirect),
	Failed(ApiFailure),
	/// No response was received.
	Connectivity(String),
}

impl<T> ApiOutcome<T> {
	pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
		match self {
			Self::Success(value) => ApiOutcome::Success(f(value)),
			Self::Redirected(redirect) => ApiOutcome::Redirected(redirect),
			Self::Failed(failure) => ApiOutcome::Failed(failure),
			Self::Connectivity(error) => ApiOutcome::Connectivity(error),
		}
	}

	pub fn success(self) -> Option<T> {
		match self {
			Self::Success(value) => Some(value),
			_ => None,
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success(_))
	}

	pub fn redirect(&self) -> Option<&Redirect> {
		match self {
			Self::Redirected(redirect) => Some(redirect),
			_ => None,
		}
	}

	pub fn failure(&self) -> Option<&ApiFailure> {
		match self {
			Self::Failed(failure) => Some(failure),
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn test_detail_preferred() {
		let failure = ApiFailure::from_response(
			StatusCode::UNAUTHORIZED,
			r#"{"detail":"No active account found with the given credentials","email":["bad"]}"#,
		);
		assert_eq!(
			failure.form_message(Lang::En),
			"No active account found with the given credentials"
		);
	}

	#[test]
	fn test_error_key_from_register() {
		let failure =
			ApiFailure::from_response(StatusCode::BAD_REQUEST, r#"{"error":"User already exists"}"#);
		assert_eq!(failure.detail(), Some("User already exists"));
	}

	#[test]
	fn test_field_errors() {
		let failure = ApiFailure::from_response(
			StatusCode::BAD_REQUEST,
			r#"{"email":["Enter a valid email address."]}"#,
		);
		assert_eq!(failure.detail(), Some("Enter a valid email address."));

		let failure = ApiFailure::from_response(
			StatusCode::BAD_REQUEST,
			r#"{"password":["This field may not be blank."]}"#,
		);
		assert_eq!(failure.detail(), Some("This field may not be blank."));
	}

	#[test]
	fn test_form_fallback_is_localized() {
		let failure = ApiFailure::from_response(StatusCode::BAD_REQUEST, "{}");
		assert_eq!(failure.form_message(Lang::Fr), "Identifiants invalides");
	}

	#[test]
	fn test_message_surfaces_payload() {
		let failure =
			ApiFailure::from_response(StatusCode::BAD_REQUEST, r#"{"program":["Invalid pk"]}"#);
		assert_eq!(failure.detail(), None);
		assert_eq!(failure.payload, Some(json!({"program": ["Invalid pk"]})));
		assert_eq!(failure.message(Lang::En), r#"{"program":["Invalid pk"]}"#);
	}

	#[test]
	fn test_unparseable_body_uses_generic() {
		let failure = ApiFailure::from_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>");
		assert!(failure.payload.is_none());
		assert_eq!(
			failure.message(Lang::En),
			"Something went wrong. Please try again."
		);
	}

	#[test]
	fn test_not_found() {
		let failure = ApiFailure::from_response(StatusCode::NOT_FOUND, r#"{"detail":"Not found."}"#);
		assert!(failure.is_not_found());
		assert!(!ApiFailure::local("x").is_not_found());
	}

	#[test]
	fn test_outcome_map() {
		let outcome: ApiOutcome<u32> = ApiOutcome::Success(2);
		assert_eq!(outcome.map(|n| n * 2).success(), Some(4));

		let outcome: ApiOutcome<u32> =
			ApiOutcome::Redirected(Redirect::new("/en/login", RedirectReason::Unauthorized));
		let mapped = outcome.map(|n| n.to_string());
		assert_eq!(mapped.redirect().map(|r| r.location.as_str()), Some("/en/login"));
	}
}
