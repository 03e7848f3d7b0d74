// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Content fields that may vary by language.

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::locale::DEFAULT_LOCALE;

/// A content value that is either a single display string or a mapping from
/// language code to string.
///
/// The API localizes most fields server side when given `?lang=`, but older
/// records and some nested objects still carry the raw `{"en": .., "ar": ..}`
/// object, so both shapes deserialize into this type. Decoding never fails:
/// non-string entries of a mapping are dropped, and `null` or any other shape
/// becomes [`LocalizedText::Missing`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
#[serde(untagged)]
pub enum LocalizedText {
	Plain(String),
	Translations(BTreeMap<String, String>),
	#[default]
	Missing,
}

impl LocalizedText {
	/// Pick the display string for `lang`.
	///
	/// - plain strings are returned unchanged for every language
	/// - mappings return the non-empty `lang` entry, else the `en` entry,
	///   else `""`
	pub fn resolve(&self, lang: &str) -> &str {
		match self {
			LocalizedText::Plain(s) => s,
			LocalizedText::Translations(map) => map
				.get(lang)
				.filter(|s| !s.is_empty())
				.or_else(|| map.get(DEFAULT_LOCALE))
				.map(String::as_str)
				.unwrap_or(""),
			LocalizedText::Missing => "",
		}
	}

	pub fn is_missing(&self) -> bool {
		matches!(self, LocalizedText::Missing)
	}
}

impl<'de> Deserialize<'de> for LocalizedText {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		Ok(match Value::deserialize(deserializer)? {
			Value::String(s) => LocalizedText::Plain(s),
			Value::Object(map) => LocalizedText::Translations(
				map.into_iter()
					.filter_map(|(lang, value)| match value {
						Value::String(s) => Some((lang, s)),
						_ => None,
					})
					.collect(),
			),
			_ => LocalizedText::Missing,
		})
	}
}

impl From<&str> for LocalizedText {
	fn from(value: &str) -> Self {
		LocalizedText::Plain(value.to_string())
	}
}

impl From<String> for LocalizedText {
	fn from(value: String) -> Self {
		LocalizedText::Plain(value)
	}
}

impl<K, V> FromIterator<(K, V)> for LocalizedText
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		LocalizedText::Translations(
			iter
				.into_iter()
				.map(|(k, v)| (k.into(), v.into()))
				.collect(),
		)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_deserialize_plain_string() {
		let text: LocalizedText = serde_json::from_str("\"Squat\"").unwrap();
		assert_eq!(text, LocalizedText::Plain("Squat".to_string()));
	}

	#[test]
	fn test_deserialize_mapping() {
		let text: LocalizedText =
			serde_json::from_str(r#"{"en": "Chest", "ar": "الصدر"}"#).unwrap();
		assert_eq!(text.resolve("ar"), "الصدر");
		assert_eq!(text.resolve("fr"), "Chest");
	}

	#[test]
	fn test_deserialize_null_is_missing() {
		let text: LocalizedText = serde_json::from_str("null").unwrap();
		assert!(text.is_missing());
		assert_eq!(text.resolve("en"), "");
	}

	#[test]
	fn test_null_translation_falls_back_to_english() {
		let text: LocalizedText =
			serde_json::from_str(r#"{"en": "Squat", "fr": null}"#).unwrap();
		assert_eq!(text.resolve("fr"), "Squat");
		assert_eq!(text.resolve("en"), "Squat");
	}

	#[test]
	fn test_non_string_entries_are_dropped() {
		let text: LocalizedText = serde_json::from_str(r#"{"en": 1, "ar": "ضغط"}"#).unwrap();
		assert_eq!(text.resolve("ar"), "ضغط");
		assert_eq!(text.resolve("en"), "");
		assert_eq!(text.resolve("fr"), "");
	}

	#[test]
	fn test_unexpected_shapes_are_missing() {
		for raw in ["42", "true", r#"["Squat"]"#] {
			let text: LocalizedText = serde_json::from_str(raw).unwrap();
			assert!(text.is_missing(), "{raw} should decode as missing");
		}
	}

	#[test]
	fn test_empty_requested_value_falls_back_to_english() {
		let text: LocalizedText = [("en", "Deadlift"), ("fr", "")].into_iter().collect();
		assert_eq!(text.resolve("fr"), "Deadlift");
	}

	#[test]
	fn test_english_entry_returned_even_when_empty() {
		let text: LocalizedText = [("en", ""), ("ar", "")].into_iter().collect();
		assert_eq!(text.resolve("ar"), "");
	}

	#[test]
	fn test_serialize_keeps_shape() {
		let text: LocalizedText = [("en", "Back")].into_iter().collect();
		assert_eq!(serde_json::to_string(&text).unwrap(), r#"{"en":"Back"}"#);
		assert_eq!(
			serde_json::to_string(&LocalizedText::from("Back")).unwrap(),
			"\"Back\""
		);
	}
}
