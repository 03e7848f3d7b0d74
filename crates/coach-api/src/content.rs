// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Exercise and program library reads, plus client-side exercise filtering.

use coach_common_i18n::{t, Lang};
use tracing::instrument;

use crate::client::{ApiClient, ApiRequest, AuthMode};
use crate::models::{Exercise, PlanTarget, Program, UserPlan};
use crate::outcome::ApiOutcome;
use crate::routes;

pub const EXERCISES_PATH: &str = "/api/exercises";
pub const PROGRAMS_PATH: &str = "/api/programs/";
pub const USER_PLANS_PATH: &str = "/api/user-plans/";

impl ApiClient {
	/// List exercises localized server side for `lang`.
	#[instrument(skip(self))]
	pub async fn exercises(&self, lang: Lang) -> ApiOutcome<Vec<Exercise>> {
		let origin = routes::exercises_route(self.lang());
		self.send(self.content_request(EXERCISES_PATH.to_string(), lang, &origin))
			.await
	}

	/// One exercise. A missing id comes back as a failure with
	/// [`crate::ApiFailure::is_not_found`] set.
	#[instrument(skip(self))]
	pub async fn exercise(&self, id: u64, lang: Lang) -> ApiOutcome<Exercise> {
		let origin = routes::exercises_route(self.lang());
		self.send(self.content_request(format!("{EXERCISES_PATH}/{id}/"), lang, &origin))
			.await
	}

	/// List programs, without their sessions.
	#[instrument(skip(self))]
	pub async fn programs(&self, lang: Lang) -> ApiOutcome<Vec<Program>> {
		let origin = routes::programs_route(self.lang());
		self.send(self.content_request(PROGRAMS_PATH.to_string(), lang, &origin))
			.await
	}

	/// One program with its sessions and exercises.
	#[instrument(skip(self))]
	pub async fn program(&self, id: u64, lang: Lang) -> ApiOutcome<Program> {
		let origin = routes::program_route(self.lang(), id);
		self.send(self.content_request(format!("{PROGRAMS_PATH}{id}/"), lang, &origin))
			.await
	}

	/// Add a program or exercise to the user's plan.
	///
	/// Requires a session. Without one, or when the token is rejected, the
	/// client navigates to login with `next` set to `origin`.
	#[instrument(skip(self))]
	pub async fn add_to_plan(&self, target: PlanTarget, origin: &str) -> ApiOutcome<UserPlan> {
		let request = ApiRequest::post(USER_PLANS_PATH)
			.json(target.to_body())
			.auth(AuthMode::Required)
			.on_unauthenticated(routes::login_route(self.lang(), Some(origin)));
		self.send(request).await
	}

	/// A localized read. A rejected token sends the user to login with
	/// `next` pointing back at the page that made the read.
	fn content_request(&self, path: String, lang: Lang, origin: &str) -> ApiRequest {
		ApiRequest::get(path)
			.query("lang", lang.code())
			.auth(AuthMode::Optional)
			.on_unauthenticated(routes::login_route(self.lang(), Some(origin)))
	}
}


/// Search text and muscle-group filter for the exercise library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExerciseFilter {
	pub search: String,
	pub group: String,
}

impl Default for ExerciseFilter {
	fn default() -> Self {
		Self {
			search: String::new(),
			group: "all".to_string(),
		}
	}
}

impl ExerciseFilter {
	pub fn new(search: impl Into<String>, group: impl Into<String>) -> Self {
		Self {
			search: search.into(),
			group: group.into(),
		}
	}

	/// Case-insensitive substring match on the resolved name, and on the
	/// resolved category unless the group is `all` or empty.
	pub fn matches(&self, exercise: &Exercise, lang: Lang) -> bool {
		let search = self.search.trim().to_lowercase();
		let name_ok = search.is_empty() || exercise.name(lang).to_lowercase().contains(&search);

		let group = self.group.trim().to_lowercase();
		let group_ok = group.is_empty()
			|| group == "all"
			|| exercise.category(lang).to_lowercase().contains(&group);

		name_ok && group_ok
	}
}

pub fn filter_exercises<'a>(
	exercises: &'a [Exercise],
	filter: &ExerciseFilter,
	lang: Lang,
) -> Vec<&'a Exercise> {
	exercises.iter().filter(|e| filter.matches(e, lang)).collect()
}

/// What the exercise library shows after filtering.
#[derive(Debug, PartialEq)]
pub enum ExerciseListing<'a> {
	Items(Vec<&'a Exercise>),
	/// Nothing matched; carries the localized empty-state message.
	Empty(String),
}

pub fn list_exercises<'a>(
	exercises: &'a [Exercise],
	filter: &ExerciseFilter,
	lang: Lang,
) -> ExerciseListing<'a> {
	let items = filter_exercises(exercises, filter, lang);
	if items.is_empty() {
		ExerciseListing::Empty(t(lang, "client.exercises.empty"))
	} else {
		ExerciseListing::Items(items)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn library() -> Vec<Exercise> {
		serde_json::from_value(json!([
			{"id": 1, "name": {"en": "Push-up", "fr": "Pompe"}, "category": {"en": "chest", "fr": "Pectoraux"}},
			{"id": 2, "name": {"en": "Squat"}, "category": {"en": "legs"}},
			{"id": 3, "name": {"en": "Incline Push-up"}, "category": {"en": "Upper Chest"}}
		]))
		.unwrap()
	}

	#[test]
	fn test_default_filter_keeps_everything() {
		let exercises = library();
		assert_eq!(
			filter_exercises(&exercises, &ExerciseFilter::default(), Lang::En).len(),
			3
		);
	}

	#[test]
	fn test_search_is_case_insensitive() {
		let exercises = library();
		let found = filter_exercises(&exercises, &ExerciseFilter::new("PUSH", "all"), Lang::En);
		let ids: Vec<u64> = found.iter().map(|e| e.id).collect();
		assert_eq!(ids, vec![1, 3]);
	}

	#[test]
	fn test_group_matches_category_substring() {
		let exercises = library();
		let found = filter_exercises(&exercises, &ExerciseFilter::new("", "chest"), Lang::En);
		assert_eq!(found.len(), 2);
	}

	#[test]
	fn test_matching_uses_resolved_language() {
		let exercises = library();
		let found = filter_exercises(&exercises, &ExerciseFilter::new("pompe", "all"), Lang::Fr);
		assert_eq!(found.len(), 1);
		assert_eq!(found[0].id, 1);

		let found = filter_exercises(&exercises, &ExerciseFilter::new("", "pectoraux"), Lang::Fr);
		assert_eq!(found.len(), 1);
	}

	#[test]
	fn test_empty_listing_is_localized() {
		let exercises = library();
		let listing = list_exercises(&exercises, &ExerciseFilter::new("صدر", "all"), Lang::Ar);
		assert_eq!(listing, ExerciseListing::Empty("لم يتم العثور على تمارين".to_string()));
	}
}
