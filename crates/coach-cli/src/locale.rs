// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::sync::OnceLock;

use coach_common_i18n::{resolve_lang, Lang};

static DETECTED_LANG: OnceLock<Lang> = OnceLock::new();

/// The user's language, detected from the operating system.
/// Falls back to English if detection fails or the locale is unsupported.
pub fn system_lang() -> Lang {
	*DETECTED_LANG.get_or_init(|| resolve_lang(detect_locale().as_deref()))
}

fn detect_locale() -> Option<String> {
	let system_locale = sys_locale::get_locale()?;
	language_code(&system_locale)
}

/// `fr_FR.UTF-8` -> `fr`
fn language_code(locale: &str) -> Option<String> {
	locale
		.split(['_', '-', '.'])
		.next()
		.filter(|code| !code.is_empty())
		.map(str::to_lowercase)
}


#[cfg(test)]
mod proptests {
	use super::*;
	use proptest::prelude::*;

	proptest! {
		#[test]
		fn language_code_is_lowercase_prefix(locale in "[A-Za-z]{1,3}([_.-][A-Za-z0-9-]{0,8})?") {
			let code = language_code(&locale).unwrap();
			prop_assert!(locale.to_lowercase().starts_with(&code));
			prop_assert!(!code.contains(['_', '-', '.']));
		}
	}
}
