// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Front-end routes the client redirects to.
//!
//! Every route is prefixed with the `lang` segment. The login route carries a
//! `next` query parameter pointing back at the page that needed a session.

use coach_common_i18n::Lang;
use url::form_urlencoded;

pub fn home_route(lang: Lang) -> String {
	format!("/{}", lang.code())
}

pub fn dashboard_route(lang: Lang) -> String {
	format!("/{}/dashboard", lang.code())
}

pub fn exercises_route(lang: Lang) -> String {
	format!("/{}/exercises", lang.code())
}

pub fn programs_route(lang: Lang) -> String {
	format!("/{}/programs/library", lang.code())
}

pub fn program_route(lang: Lang, id: u64) -> String {
	format!("/{}/programs/library/{id}", lang.code())
}

/// Login route, with `next` when it is a safe local path.
pub fn login_route(lang: Lang, next: Option<&str>) -> String {
	let base = format!("/{}/login", lang.code());
	match safe_next(next) {
		Some(next) => {
			let query = form_urlencoded::Serializer::new(String::new())
				.append_pair("next", next)
				.finish();
			format!("{base}?{query}")
		}
		None => base,
	}
}

/// Accept a `next` value only if it stays on this site.
///
/// It must be an absolute path (`/...`), not protocol-relative (`//host`),
/// and free of backslashes and control characters.
pub fn safe_next(next: Option<&str>) -> Option<&str> {
	let next = next?.trim();
	let local = next.starts_with('/')
		&& !next.starts_with("//")
		&& !next.contains('\\')
		&& !next.chars().any(char::is_control);
	local.then_some(next)
}

/// Extract the decoded `next` parameter from a route such as the one built by
/// [`login_route`].
pub fn next_param(location: &str) -> Option<String> {
	let (_, query) = location.split_once('?')?;
	form_urlencoded::parse(query.as_bytes())
		.find(|(k, _)| k == "next")
		.map(|(_, v)| v.into_owned())
}

/// Where to land after a successful login.
pub fn post_login_route(lang: Lang, next: Option<&str>) -> String {
	safe_next(next)
		.map(str::to_string)
		.unwrap_or_else(|| dashboard_route(lang))
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn next_survives_encoding(path in "/[a-z0-9/_-]{0,30}(\\?[a-z]=[a-z0-9&]{0,10})?") {
			prop_assume!(!path.starts_with("//"));
			let route = login_route(Lang::En, Some(&path));
			prop_assert_eq!(next_param(&route), Some(path));
		}

		#[test]
		fn safe_next_never_accepts_protocol_relative(rest in ".*") {
			let candidate = format!("//{rest}");
			prop_assert!(safe_next(Some(&candidate)).is_none());
		}
	}
}
