// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Language and field resolution.

use tracing::trace;

use crate::locale::Lang;
use crate::text::LocalizedText;

/// Resolve the effective language from a `lang` route segment or query value.
///
/// Missing, empty or unsupported codes fall back to English, the same way the
/// API treats an unknown `?lang=`.
///
/// ```
/// use coach_common_i18n::{resolve_lang, Lang};
///
/// assert_eq!(resolve_lang(Some("fr")), Lang::Fr);
/// assert_eq!(resolve_lang(Some("de")), Lang::En);
/// assert_eq!(resolve_lang(None), Lang::En);
/// ```
pub fn resolve_lang(segment: Option<&str>) -> Lang {
	match segment.map(str::parse::<Lang>) {
		Some(Ok(lang)) => lang,
		Some(Err(e)) => {
			trace!(error = %e, "falling back to default language");
			Lang::default()
		}
		None => Lang::default(),
	}
}

/// Resolve an optional content field for display.
///
/// Absent fields resolve to `""`, matching [`LocalizedText::Missing`].
pub fn resolve_field<'a>(field: Option<&'a LocalizedText>, lang: &str) -> &'a str {
	field.map(|f| f.resolve(lang)).unwrap_or("")
}
