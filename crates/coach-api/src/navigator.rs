// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Navigation seam.
//!
//! The client never renders anything itself; it hands redirects to a
//! [`Navigator`] supplied by the embedding application.

use std::sync::Mutex;

use crate::outcome::Redirect;

pub trait Navigator: Send + Sync + std::fmt::Debug {
	fn navigate(&self, redirect: &Redirect);
}

/// Navigator that records every redirect, for tests and headless callers.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
	history: Mutex<Vec<Redirect>>,
}

impl RecordingNavigator {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn history(&self) -> Vec<Redirect> {
		self.history
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.clone()
	}

	pub fn last(&self) -> Option<Redirect> {
		self.history().pop()
	}
}

impl Navigator for RecordingNavigator {
	fn navigate(&self, redirect: &Redirect) {
		self.history
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
			.push(redirect.clone());
	}
}
