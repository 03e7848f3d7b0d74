// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authenticated client for the coaching API.
//!
//! [`ApiClient`] wraps every call with the stored bearer token and classifies
//! the result as an [`ApiOutcome`]: success, a redirect issued through the
//! [`Navigator`], an HTTP failure, or a connectivity error. A token the server
//! rejects is cleared from the [`coach_session::SessionStore`] before the
//! client navigates to login.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use coach_api::{ApiClient, ApiOutcome, Credentials, RecordingNavigator};
//! use coach_common_i18n::Lang;
//! use coach_session::MemorySessionStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::builder()
//!     .base_url("http://localhost:8000")
//!     .lang(Lang::Fr)
//!     .store(Arc::new(MemorySessionStore::new()))
//!     .navigator(Arc::new(RecordingNavigator::new()))
//!     .build()?;
//!
//! let credentials = Credentials::new("sam@example.com", "secret");
//! if let ApiOutcome::Success(redirect) = client.login(&credentials, None).await {
//!     assert_eq!(redirect.location, "/fr/dashboard");
//! }
//!
//! if let ApiOutcome::Success(exercises) = client.exercises(Lang::Fr).await {
//!     for exercise in exercises {
//!         println!("{}", exercise.name(Lang::Fr));
//!     }
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod client;
mod content;
mod error;
mod models;
mod navigator;
mod outcome;
pub mod routes;
mod state;

pub use auth::{PROFILE_PATH, REGISTER_PATH, TOKEN_PATH};
pub use client::{ApiClient, ApiClientBuilder, ApiRequest, AuthMode};
pub use content::{
	filter_exercises, list_exercises, ExerciseFilter, ExerciseListing, EXERCISES_PATH,
	PROGRAMS_PATH, USER_PLANS_PATH,
};
pub use error::{ClientError, Result};
pub use models::{
	Credentials, Difficulty, Exercise, Instructions, PlanTarget, Program, ProgramSession,
	SessionExercise, User, UserPlan,
};
pub use navigator::{Navigator, RecordingNavigator};
pub use outcome::{ApiFailure, ApiOutcome, Redirect, RedirectReason};
pub use state::{AuthEvent, AuthState};
