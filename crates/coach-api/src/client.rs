// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The authenticated request pipeline.

use std::sync::Arc;
use std::time::Duration;

use coach_common_i18n::Lang;
use coach_session::{SecretString, SessionStore};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{debug, instrument, warn};
use url::Url;

use crate::error::{ClientError, Result};
use crate::navigator::Navigator;
use crate::outcome::{ApiFailure, ApiOutcome, Redirect, RedirectReason};
use crate::routes;
use crate::state::{AuthEvent, AuthState};

/// Whether a request sends the stored token and reacts to its rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
	/// Never send a token; 401 is an ordinary failure (login, signup).
	Anonymous,
	/// Send the token if one is stored (content reads).
	Optional,
	/// Send the token; a mutation with none stored is redirected before it
	/// is sent.
	Required,
}

/// One request through [`ApiClient::send`].
#[derive(Debug, Clone)]
pub struct ApiRequest {
	method: Method,
	path: String,
	query: Vec<(String, String)>,
	body: Option<Value>,
	auth: AuthMode,
	on_unauthenticated: Option<String>,
}

impl ApiRequest {
	pub fn new(method: Method, path: impl Into<String>) -> Self {
		Self {
			method,
			path: path.into(),
			query: Vec::new(),
			body: None,
			auth: AuthMode::Optional,
			on_unauthenticated: None,
		}
	}

	pub fn get(path: impl Into<String>) -> Self {
		Self::new(Method::GET, path)
	}

	pub fn post(path: impl Into<String>) -> Self {
		Self::new(Method::POST, path)
	}

	pub fn query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
		self.query.push((key.into(), value.into()));
		self
	}

	pub fn json(mut self, body: Value) -> Self {
		self.body = Some(body);
		self
	}

	pub fn auth(mut self, auth: AuthMode) -> Self {
		self.auth = auth;
		self
	}

	/// Where to go when the request needs a session and has none. Defaults to
	/// the login route.
	pub fn on_unauthenticated(mut self, location: impl Into<String>) -> Self {
		self.on_unauthenticated = Some(location.into());
		self
	}

	fn is_mutating(&self) -> bool {
		!matches!(self.method, Method::GET | Method::HEAD | Method::OPTIONS)
	}
}

/// Builder for [`ApiClient`].
#[derive(Debug, Default)]
pub struct ApiClientBuilder {
	base_url: Option<String>,
	timeout: Option<Duration>,
	lang: Lang,
	store: Option<Arc<dyn SessionStore>>,
	navigator: Option<Arc<dyn Navigator>>,
}

impl ApiClientBuilder {
	pub fn base_url(mut self, url: impl Into<String>) -> Self {
		self.base_url = Some(url.into());
		self
	}

	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	/// Language used for redirect routes and fallback messages.
	pub fn lang(mut self, lang: Lang) -> Self {
		self.lang = lang;
		self
	}

	pub fn store(mut self, store: Arc<dyn SessionStore>) -> Self {
		self.store = Some(store);
		self
	}

	pub fn navigator(mut self, navigator: Arc<dyn Navigator>) -> Self {
		self.navigator = Some(navigator);
		self
	}

	pub fn build(self) -> Result<ApiClient> {
		let base_url = self.base_url.ok_or(ClientError::MissingBaseUrl)?;
		let parsed = Url::parse(&base_url).map_err(|e| ClientError::InvalidBaseUrl {
			url: base_url.clone(),
			reason: e.to_string(),
		})?;
		if !matches!(parsed.scheme(), "http" | "https") {
			return Err(ClientError::InvalidBaseUrl {
				url: base_url,
				reason: format!("unsupported scheme {}", parsed.scheme()),
			});
		}

		let store = self.store.ok_or(ClientError::MissingSessionStore)?;
		let navigator = self.navigator.ok_or(ClientError::MissingNavigator)?;
		let http = coach_common_http::build_client(
			self.timeout.unwrap_or(coach_common_http::DEFAULT_TIMEOUT),
		)?;

		Ok(ApiClient {
			inner: Arc::new(Inner {
				http,
				base_url: base_url.trim_end_matches('/').to_string(),
				lang: self.lang,
				store,
				navigator,
				state: RwLock::new(AuthState::default()),
			}),
		})
	}
}

#[derive(Debug)]
struct Inner {
	http: reqwest::Client,
	base_url: String,
	lang: Lang,
	store: Arc<dyn SessionStore>,
	navigator: Arc<dyn Navigator>,
	state: RwLock<AuthState>,
}

/// Client for the coaching API.
///
/// Every call reads the stored token fresh, attaches it as a bearer token,
/// and turns a 401 or 403 on an authenticated call into a cleared session
/// plus a redirect. Cloning is cheap and clones share state.
#[derive(Debug, Clone)]
pub struct ApiClient {
	inner: Arc<Inner>,
}

impl ApiClient {
	pub fn builder() -> ApiClientBuilder {
		ApiClientBuilder::default()
	}

	pub fn base_url(&self) -> &str {
		&self.inner.base_url
	}

	pub fn lang(&self) -> Lang {
		self.inner.lang
	}

	pub fn store(&self) -> &Arc<dyn SessionStore> {
		&self.inner.store
	}

	pub async fn auth_state(&self) -> AuthState {
		self.inner.state.read().await.clone()
	}

	/// Sync the state machine with the store, e.g. at startup.
	pub async fn restore_session(&self) -> AuthState {
		if self.access_token().await.is_some() {
			self.apply(AuthEvent::Restored).await;
		}
		self.auth_state().await
	}

	pub(crate) async fn apply(&self, event: AuthEvent) {
		let mut state = self.inner.state.write().await;
		*state = std::mem::take(&mut *state).transition(event);
	}

	/// The stored token. Store errors are logged and treated as no token.
	async fn access_token(&self) -> Option<SecretString> {
		match self.inner.store.access_token().await {
			Ok(token) => token,
			Err(e) => {
				warn!(error = %e, "failed to read session store, continuing without a token");
				None
			}
		}
	}

	/// Drop the stored tokens after a rejection. The last email stays for the
	/// login prompt. Store errors are logged.
	pub(crate) async fn clear_session(&self) {
		if let Err(e) = self.inner.store.clear_credentials().await {
			warn!(error = %e, "failed to clear session store");
		}
		self.apply(AuthEvent::Rejected).await;
	}

	pub(crate) fn navigate(&self, location: String, reason: RedirectReason) -> Redirect {
		let redirect = Redirect::new(location, reason);
		debug!(location = %redirect.location, reason = ?redirect.reason, "navigating");
		self.inner.navigator.navigate(&redirect);
		redirect
	}

	fn url(&self, path: &str) -> String {
		if path.starts_with('/') {
			format!("{}{}", self.inner.base_url, path)
		} else {
			format!("{}/{}", self.inner.base_url, path)
		}
	}

	/// Send a request and classify its outcome.
	#[instrument(skip_all, fields(method = %request.method, path = %request.path))]
	pub async fn send<T: DeserializeOwned>(&self, request: ApiRequest) -> ApiOutcome<T> {
		let token = match request.auth {
			AuthMode::Anonymous => None,
			AuthMode::Optional | AuthMode::Required => self.access_token().await,
		};

		let unauthenticated_target = || {
			request
				.on_unauthenticated
				.clone()
				.unwrap_or_else(|| routes::login_route(self.inner.lang, None))
		};

		if token.is_none() && request.auth == AuthMode::Required && request.is_mutating() {
			debug!("no stored token for protected request");
			self.apply(AuthEvent::Rejected).await;
			let redirect = self.navigate(unauthenticated_target(), RedirectReason::MissingCredential);
			return ApiOutcome::Redirected(redirect);
		}

		let url = self.url(&request.path);
		let mut builder = self.inner.http.request(request.method.clone(), &url);
		if !request.query.is_empty() {
			builder = builder.query(&request.query);
		}
		if let Some(body) = &request.body {
			builder = builder.json(body);
		}
		if let Some(token) = &token {
			builder = builder.bearer_auth(token.expose());
		}

		debug!(url = %url, authenticated = token.is_some(), "sending request");
		let response = match builder.send().await {
			Ok(response) => response,
			Err(e) => {
				warn!(error = %e, "request failed without a response");
				return ApiOutcome::Connectivity(e.to_string());
			}
		};

		let status = response.status();
		if status.is_success() {
			return match response.json::<T>().await {
				Ok(body) => ApiOutcome::Success(body),
				Err(e) => {
					warn!(status = %status, error = %e, "unexpected response body");
					ApiOutcome::Failed(ApiFailure::invalid_body(status, e.to_string()))
				}
			};
		}

		if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
			&& request.auth != AuthMode::Anonymous
		{
			warn!(status = %status, "token rejected, clearing session");
			self.clear_session().await;
			let redirect = self.navigate(unauthenticated_target(), RedirectReason::Unauthorized);
			return ApiOutcome::Redirected(redirect);
		}

		let body = response.text().await.unwrap_or_default();
		let failure = ApiFailure::from_response(status, &body);
		debug!(status = %status, detail = ?failure.detail(), "request failed");
		ApiOutcome::Failed(failure)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::navigator::RecordingNavigator;
	use coach_session::MemorySessionStore;

	fn builder() -> ApiClientBuilder {
		ApiClient::builder()
			.store(Arc::new(MemorySessionStore::new()))
			.navigator(Arc::new(RecordingNavigator::new()))
	}

	#[test]
	fn test_build_requires_base_url() {
		assert!(matches!(builder().build(), Err(ClientError::MissingBaseUrl)));
	}

	#[test]
	fn test_build_rejects_bad_urls() {
		assert!(matches!(
			builder().base_url("not a url").build(),
			Err(ClientError::InvalidBaseUrl { .. })
		));
		assert!(matches!(
			builder().base_url("ftp://example.com").build(),
			Err(ClientError::InvalidBaseUrl { .. })
		));
	}

	#[test]
	fn test_build_requires_store_and_navigator() {
		let result = ApiClient::builder()
			.base_url("http://localhost:8000")
			.navigator(Arc::new(RecordingNavigator::new()))
			.build();
		assert!(matches!(result, Err(ClientError::MissingSessionStore)));

		let result = ApiClient::builder()
			.base_url("http://localhost:8000")
			.store(Arc::new(MemorySessionStore::new()))
			.build();
		assert!(matches!(result, Err(ClientError::MissingNavigator)));
	}

	#[test]
	fn test_url_joining() {
		let client = builder().base_url("http://localhost:8000/").build().unwrap();
		assert_eq!(client.base_url(), "http://localhost:8000");
		assert_eq!(client.url("/api/profile/"), "http://localhost:8000/api/profile/");
		assert_eq!(client.url("api/profile/"), "http://localhost:8000/api/profile/");
	}

	#[test]
	fn test_mutating_methods() {
		assert!(!ApiRequest::get("/x").is_mutating());
		assert!(ApiRequest::post("/x").is_mutating());
		assert!(ApiRequest::new(Method::DELETE, "/x").is_mutating());
	}

	#[tokio::test]
	async fn test_restore_session_from_store() {
		let store = Arc::new(MemorySessionStore::new());
		store
			.set(coach_session::SessionKey::AccessToken, "tok1".to_string())
			.await
			.unwrap();
		let client = ApiClient::builder()
			.base_url("http://localhost:8000")
			.store(store)
			.navigator(Arc::new(RecordingNavigator::new()))
			.build()
			.unwrap();

		assert!(client.restore_session().await.is_authenticated());
	}
}
