// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Login, signup, logout and profile.

use coach_common_i18n::t;
use coach_session::{CredentialError, SessionTokens};
use serde_json::Value;
use tracing::{info, instrument, warn};

use crate::client::{ApiClient, ApiRequest, AuthMode};
use crate::models::{Credentials, TokenResponse, User};
use crate::outcome::{ApiFailure, ApiOutcome, Redirect, RedirectReason};
use crate::routes;
use crate::state::AuthEvent;

pub const TOKEN_PATH: &str = "/api/token/";
pub const REGISTER_PATH: &str = "/api/register/";
pub const PROFILE_PATH: &str = "/api/profile/";

impl ApiClient {
	/// Exchange credentials for a token pair.
	///
	/// On success the tokens and email are stored and the client navigates to
	/// `next` (when it is a local path) or the dashboard. The redirect is
	/// returned as the success value. Failures carry the form message in
	/// [`crate::AuthState::last_error`].
	#[instrument(skip_all, fields(email = %credentials.email))]
	pub async fn login(&self, credentials: &Credentials, next: Option<&str>) -> ApiOutcome<Redirect> {
		self.apply(AuthEvent::Submit).await;
		self.request_tokens(credentials, next).await
	}

	/// Create an account, then sign in.
	///
	/// If the register response already carries an access token it is used
	/// directly; otherwise the same credentials are sent to the token
	/// endpoint.
	#[instrument(skip_all, fields(email = %credentials.email))]
	pub async fn signup(&self, credentials: &Credentials, next: Option<&str>) -> ApiOutcome<Redirect> {
		self.apply(AuthEvent::Submit).await;

		let request = ApiRequest::post(REGISTER_PATH)
			.json(credentials.to_body())
			.auth(AuthMode::Anonymous);
		match self.send::<Value>(request).await {
			ApiOutcome::Success(body) => {
				info!("account created");
				let tokens: TokenResponse = serde_json::from_value(body).unwrap_or_default();
				if tokens.access.as_deref().is_some_and(|a| !a.is_empty()) {
					self.complete_sign_in(tokens, &credentials.email, next).await
				} else {
					self.request_tokens(credentials, next).await
				}
			}
			other => self.fail_sign_in(other).await,
		}
	}

	/// Forget the stored session.
	pub async fn logout(&self) -> Result<(), CredentialError> {
		let result = self.store().clear().await;
		self.apply(AuthEvent::LoggedOut).await;
		match &result {
			Ok(()) => info!("logged out"),
			Err(e) => warn!(error = %e, "failed to clear session store on logout"),
		}
		result
	}

	/// Fetch the signed-in user.
	///
	/// `origin` is the page asking; a rejected token sends the user to login
	/// with `next` pointing back at it.
	#[instrument(skip_all)]
	pub async fn profile(&self, origin: &str) -> ApiOutcome<User> {
		let request = ApiRequest::get(PROFILE_PATH)
			.auth(AuthMode::Required)
			.on_unauthenticated(routes::login_route(self.lang(), Some(origin)));
		let outcome = self.send::<User>(request).await;
		if outcome.is_success() {
			self.apply(AuthEvent::Restored).await;
		}
		outcome
	}

	async fn request_tokens(&self, credentials: &Credentials, next: Option<&str>) -> ApiOutcome<Redirect> {
		let request = ApiRequest::post(TOKEN_PATH)
			.json(credentials.to_body())
			.auth(AuthMode::Anonymous);
		match self.send::<TokenResponse>(request).await {
			ApiOutcome::Success(tokens) => self.complete_sign_in(tokens, &credentials.email, next).await,
			other => self.fail_sign_in(other).await,
		}
	}

	async fn complete_sign_in(
		&self,
		tokens: TokenResponse,
		email: &str,
		next: Option<&str>,
	) -> ApiOutcome<Redirect> {
		let Some(access) = tokens.access.filter(|a| !a.is_empty()) else {
			warn!("token response had no access token");
			return self
				.fail_sign_in::<()>(ApiOutcome::Failed(ApiFailure::local(t(
					self.lang(),
					"client.error.generic",
				))))
				.await;
		};

		let tokens = SessionTokens::new(access, tokens.refresh.filter(|r| !r.is_empty()));
		if let Err(e) = self.store().save_login(&tokens, email).await {
			warn!(error = %e, "failed to persist session");
			return self
				.fail_sign_in::<()>(ApiOutcome::Failed(ApiFailure::local(e.to_string())))
				.await;
		}

		self.apply(AuthEvent::Succeeded).await;
		info!("login successful");
		let location = routes::post_login_route(self.lang(), next);
		ApiOutcome::Success(self.navigate(location, RedirectReason::SignedIn))
	}

	async fn fail_sign_in<T>(&self, outcome: ApiOutcome<T>) -> ApiOutcome<Redirect> {
		let lang = self.lang();
		let (message, outcome) = match outcome {
			ApiOutcome::Failed(failure) => (failure.form_message(lang), ApiOutcome::Failed(failure)),
			ApiOutcome::Connectivity(error) => {
				(t(lang, "client.error.network"), ApiOutcome::Connectivity(error))
			}
			ApiOutcome::Redirected(redirect) => return ApiOutcome::Redirected(redirect),
			ApiOutcome::Success(_) => (
				t(lang, "client.error.generic"),
				ApiOutcome::Failed(ApiFailure::local(t(lang, "client.error.generic"))),
			),
		};
		warn!(error = %message, "sign in failed");
		self.apply(AuthEvent::Failed(message)).await;
		outcome
	}
}
