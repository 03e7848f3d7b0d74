// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Supported languages, locale metadata and text direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	/// Left-to-right (English, French)
	Ltr,
	/// Right-to-left (Arabic)
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}

	/// Returns the `text-align` value for the start of text.
	pub fn text_align_start(&self) -> &'static str {
		match self {
			Direction::Ltr => "left",
			Direction::Rtl => "right",
		}
	}
}

/// A language the coaching content is published in.
///
/// The code doubles as the `lang` route segment (`/ar/exercises`) and the
/// `lang` query parameter sent to the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
	#[default]
	En,
	Fr,
	Ar,
}

impl Lang {
	pub const ALL: [Lang; 3] = [Lang::En, Lang::Fr, Lang::Ar];

	/// ISO 639-1 code.
	pub fn code(&self) -> &'static str {
		match self {
			Lang::En => "en",
			Lang::Fr => "fr",
			Lang::Ar => "ar",
		}
	}

	pub fn direction(&self) -> Direction {
		match self {
			Lang::Ar => Direction::Rtl,
			Lang::En | Lang::Fr => Direction::Ltr,
		}
	}

	pub fn info(&self) -> &'static LocaleInfo {
		match self {
			Lang::En => &LOCALES[0],
			Lang::Fr => &LOCALES[1],
			Lang::Ar => &LOCALES[2],
		}
	}
}

impl fmt::Display for Lang {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.code())
	}
}

/// Returned when a string is not one of the supported language codes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported language code: {0:?}")]
pub struct LangError(pub String);

impl FromStr for Lang {
	type Err = LangError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim().to_ascii_lowercase().as_str() {
			"en" => Ok(Lang::En),
			"fr" => Ok(Lang::Fr),
			"ar" => Ok(Lang::Ar),
			_ => Err(LangError(s.to_string())),
		}
	}
}

/// Metadata about a supported locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Native name, as shown in the language switcher
	pub native_name: &'static str,
	pub direction: Direction,
}

/// Default locale used as fallback.
pub const DEFAULT_LOCALE: &str = "en";

/// All supported locales, in switcher order.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "fr",
		name: "French",
		native_name: "Français",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
];

/// Get metadata for a locale.
///
/// Returns `None` if the locale is not supported.
pub fn locale_info(locale: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|l| l.code == locale)
}

/// Check if a locale uses right-to-left text direction.
///
/// Returns `false` for unsupported locales.
pub fn is_rtl(locale: &str) -> bool {
	locale_info(locale).is_some_and(|info| info.direction == Direction::Rtl)
}

pub fn is_supported(locale: &str) -> bool {
	locale_info(locale).is_some()
}

pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}
