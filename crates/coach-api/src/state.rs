// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Authentication state machine.

use tracing::trace;

/// Where the current user stands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
	/// No usable session. `last_error` holds the message from the last
	/// failed login or signup, if any.
	Anonymous { last_error: Option<String> },
	/// A login or signup request is in flight.
	Authenticating,
	/// A token is stored and has not been rejected.
	Authenticated,
}

impl Default for AuthState {
	fn default() -> Self {
		Self::Anonymous { last_error: None }
	}
}

/// Things that move the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
	/// Login or signup submitted.
	Submit,
	/// Token pair received and stored.
	Succeeded,
	/// Login or signup failed with a displayable message.
	Failed(String),
	/// A stored token was found, or a protected request succeeded.
	Restored,
	/// The server rejected the token, or a protected mutation found none.
	Rejected,
	/// The user logged out.
	LoggedOut,
}

impl AuthState {
	pub fn is_authenticated(&self) -> bool {
		matches!(self, Self::Authenticated)
	}

	pub fn last_error(&self) -> Option<&str> {
		match self {
			Self::Anonymous { last_error } => last_error.as_deref(),
			_ => None,
		}
	}

	/// Apply an event. Events that make no sense in the current state leave
	/// it unchanged.
	pub fn transition(self, event: AuthEvent) -> Self {
		let next = match (&self, &event) {
			(_, AuthEvent::Submit) => Self::Authenticating,
			(Self::Authenticating, AuthEvent::Succeeded) => Self::Authenticated,
			(Self::Authenticating, AuthEvent::Failed(message)) => Self::Anonymous {
				last_error: Some(message.clone()),
			},
			(Self::Anonymous { .. }, AuthEvent::Restored) => Self::Authenticated,
			(_, AuthEvent::Rejected | AuthEvent::LoggedOut) => Self::default(),
			_ => {
				trace!(state = ?self, ?event, "ignoring auth event");
				return self;
			}
		};
		trace!(from = ?self, to = ?next, "auth state transition");
		next
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_login_success_path() {
		let state = AuthState::default()
			.transition(AuthEvent::Submit)
			.transition(AuthEvent::Succeeded);
		assert!(state.is_authenticated());
	}

	#[test]
	fn test_login_failure_keeps_message() {
		let state = AuthState::default()
			.transition(AuthEvent::Submit)
			.transition(AuthEvent::Failed("Invalid credentials".to_string()));
		assert_eq!(state.last_error(), Some("Invalid credentials"));
	}

	#[test]
	fn test_resubmit_clears_error() {
		let state = AuthState::Anonymous {
			last_error: Some("x".to_string()),
		}
		.transition(AuthEvent::Submit);
		assert_eq!(state, AuthState::Authenticating);
	}

	#[test]
	fn test_rejection_and_logout_return_to_anonymous() {
		assert_eq!(
			AuthState::Authenticated.transition(AuthEvent::Rejected),
			AuthState::default()
		);
		assert_eq!(
			AuthState::Authenticated.transition(AuthEvent::LoggedOut),
			AuthState::default()
		);
	}

	#[test]
	fn test_restore_from_anonymous() {
		assert!(AuthState::default()
			.transition(AuthEvent::Restored)
			.is_authenticated());
	}

	#[test]
	fn test_out_of_order_events_are_ignored() {
		assert_eq!(
			AuthState::default().transition(AuthEvent::Succeeded),
			AuthState::default()
		);
		assert_eq!(
			AuthState::Authenticated.transition(AuthEvent::Failed("x".to_string())),
			AuthState::Authenticated
		);
		assert_eq!(
			AuthState::Authenticating.transition(AuthEvent::Restored),
			AuthState::Authenticating
		);
	}
}
