// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use coach_api::{Navigator, Redirect, RedirectReason};
use coach_common_i18n::{t, t_fmt, Lang};

/// Reports redirects on stderr, since a terminal has no pages to switch to.
#[derive(Debug)]
pub struct TerminalNavigator {
	lang: Lang,
}

impl TerminalNavigator {
	pub fn new(lang: Lang) -> Self {
		Self { lang }
	}

	fn message(&self, redirect: &Redirect) -> String {
		let location = t_fmt(
			self.lang,
			"client.auth.redirect",
			&[("location", &redirect.location)],
		);
		match redirect.reason {
			RedirectReason::MissingCredential | RedirectReason::Unauthorized => {
				format!("{} {location}", t(self.lang, "client.auth.login_required"))
			}
			RedirectReason::SignedIn => location,
		}
	}
}

impl Navigator for TerminalNavigator {
	fn navigate(&self, redirect: &Redirect) {
		eprintln!("{}", self.message(redirect));
	}
}
