// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for the coach client.
//!
//! Content coming back from the coaching API is trilingual (English, French,
//! Arabic). A field is either already a display string or a mapping from
//! language code to string; [`LocalizedText::resolve`] picks the string to show
//! using the fallback chain `requested -> en -> ""`.
//!
//! Interface strings that are not part of the content (form titles, empty
//! states, error banners) live in a static catalog accessed through [`t`] and
//! [`t_fmt`].
//!
//! # Example
//!
//! ```
//! use coach_common_i18n::{is_rtl, resolve_lang, t, Lang, LocalizedText};
//!
//! let lang = resolve_lang(Some("ar"));
//! assert_eq!(lang, Lang::Ar);
//! assert!(is_rtl(lang.code()));
//!
//! let name: LocalizedText = [("en", "Push-up"), ("fr", "Pompe")].into_iter().collect();
//! assert_eq!(name.resolve("fr"), "Pompe");
//! assert_eq!(name.resolve("ar"), "Push-up");
//!
//! assert_eq!(t(Lang::En, "client.exercises.empty"), "No exercises found");
//! ```

mod catalog;
mod labels;
mod locale;
mod resolve;
mod text;

pub use catalog::{t, t_fmt};
pub use labels::{difficulty_label, equipment_label, muscle_groups, MuscleGroup};
pub use locale::{
	available_locales, is_rtl, is_supported, locale_info, Direction, Lang, LangError, LocaleInfo,
};
pub use resolve::{resolve_field, resolve_lang};
pub use text::LocalizedText;

pub use locale::{DEFAULT_LOCALE, LOCALES};
