// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Wire types for the coaching API.
//!
//! Content fields are [`LocalizedText`] so records render the same way
//! whether the server localized them or sent the raw translation object.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use coach_common_i18n::{difficulty_label, equipment_label, resolve_lang, t_fmt, Lang, LocalizedText};
use coach_session::SecretString;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// The signed-in user, from `GET /api/profile/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
	pub id: u64,
	pub email: String,
	#[serde(default)]
	pub first_name: String,
	#[serde(default)]
	pub last_name: String,
	#[serde(default)]
	pub preferred_language: Option<String>,
	#[serde(default)]
	pub role: String,
}

impl User {
	/// First name, or the part of the email before `@`.
	pub fn display_name(&self) -> &str {
		let first = self.first_name.trim();
		if !first.is_empty() {
			return first;
		}
		self.email.split('@').next().unwrap_or(&self.email)
	}

	pub fn preferred_lang(&self) -> Lang {
		resolve_lang(self.preferred_language.as_deref())
	}
}

/// Exercise difficulty. Unknown values are treated as advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum Difficulty {
	#[default]
	Beginner,
	Intermediate,
	Advanced,
}

impl From<String> for Difficulty {
	fn from(value: String) -> Self {
		match value.trim().to_ascii_lowercase().as_str() {
			"beginner" => Self::Beginner,
			"intermediate" => Self::Intermediate,
			_ => Self::Advanced,
		}
	}
}

impl Difficulty {
	pub fn code(self) -> &'static str {
		match self {
			Self::Beginner => "beginner",
			Self::Intermediate => "intermediate",
			Self::Advanced => "advanced",
		}
	}

	pub fn label(self, lang: Lang) -> &'static str {
		difficulty_label(self.code(), lang)
	}
}

/// Exercise instructions. The API sends either a list of steps, one
/// (possibly localized) text block, or a mapping from language to steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Instructions {
	Steps(Vec<LocalizedText>),
	Text(LocalizedText),
	LocalizedSteps(BTreeMap<String, Vec<String>>),
}

impl Default for Instructions {
	fn default() -> Self {
		Self::Text(LocalizedText::Missing)
	}
}

impl Instructions {
	/// Non-empty steps for `lang`. A text block is split on newlines.
	pub fn steps(&self, lang: Lang) -> Vec<String> {
		let steps: Vec<String> = match self {
			Self::Steps(steps) => steps
				.iter()
				.map(|s| s.resolve(lang.code()).to_string())
				.collect(),
			Self::Text(text) => text
				.resolve(lang.code())
				.lines()
				.map(str::to_string)
				.collect(),
			Self::LocalizedSteps(map) => map
				.get(lang.code())
				.filter(|steps| !steps.is_empty())
				.or_else(|| map.get(Lang::En.code()))
				.cloned()
				.unwrap_or_default(),
		};
		steps
			.into_iter()
			.map(|s| s.trim().to_string())
			.filter(|s| !s.is_empty())
			.collect()
	}
}

/// An exercise from the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
	pub id: u64,
	#[serde(default)]
	pub name: LocalizedText,
	#[serde(default)]
	pub description: LocalizedText,
	#[serde(default)]
	pub instructions: Instructions,
	#[serde(default)]
	pub category: LocalizedText,
	#[serde(default)]
	pub difficulty: Difficulty,
	#[serde(default)]
	pub demo_video_url: Option<String>,
	#[serde(default)]
	pub target_muscles: Vec<LocalizedText>,
	#[serde(default)]
	pub main_muscle: Option<String>,
	#[serde(default)]
	pub equipment: Option<String>,
	#[serde(default)]
	pub mechanics: Option<String>,
}

impl Exercise {
	pub fn name(&self, lang: Lang) -> &str {
		self.name.resolve(lang.code())
	}

	pub fn description(&self, lang: Lang) -> &str {
		self.description.resolve(lang.code())
	}

	pub fn category(&self, lang: Lang) -> &str {
		self.category.resolve(lang.code())
	}

	pub fn equipment_label(&self, lang: Lang) -> Option<String> {
		self.equipment
			.as_deref()
			.filter(|e| !e.is_empty())
			.map(|e| equipment_label(e, lang))
	}

	/// The demo video link, if one is set.
	pub fn demo_video(&self) -> Option<&str> {
		self.demo_video_url.as_deref().filter(|u| !u.trim().is_empty())
	}
}

/// One exercise slot within a program session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionExercise {
	pub id: u64,
	#[serde(default)]
	pub exercise: Option<Exercise>,
	#[serde(default)]
	pub exercise_name: LocalizedText,
	#[serde(default = "default_volume")]
	pub sets: u32,
	#[serde(default = "default_volume")]
	pub reps: u32,
	#[serde(default)]
	pub order: u32,
}

fn default_volume() -> u32 {
	5
}

impl SessionExercise {
	pub fn name(&self, lang: Lang) -> &str {
		let name = self.exercise_name.resolve(lang.code());
		if !name.is_empty() {
			return name;
		}
		self.exercise
			.as_ref()
			.map(|e| e.name(lang))
			.unwrap_or("")
	}

	/// Prescription such as `3 x 10`.
	pub fn set_rep(&self, lang: Lang) -> String {
		t_fmt(
			lang,
			"client.programs.set_rep",
			&[("sets", &self.sets.to_string()), ("reps", &self.reps.to_string())],
		)
	}
}

/// One training day of a program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgramSession {
	pub id: u64,
	pub day_number: u32,
	#[serde(default)]
	pub name: LocalizedText,
	#[serde(default)]
	pub exercises: Vec<SessionExercise>,
}

impl ProgramSession {
	/// The session name, or `Day N` when it has none.
	pub fn display_name(&self, lang: Lang) -> String {
		let name = self.name.resolve(lang.code());
		if name.is_empty() {
			t_fmt(lang, "client.programs.day", &[("day", &self.day_number.to_string())])
		} else {
			name.to_string()
		}
	}

	/// Exercises sorted by their `order` field.
	pub fn ordered_exercises(&self) -> Vec<&SessionExercise> {
		let mut exercises: Vec<_> = self.exercises.iter().collect();
		exercises.sort_by_key(|e| e.order);
		exercises
	}
}

/// A pre-built workout program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Program {
	pub id: u64,
	#[serde(default)]
	pub name: LocalizedText,
	#[serde(default)]
	pub description: LocalizedText,
	#[serde(default)]
	pub difficulty: Difficulty,
	#[serde(default = "default_duration_weeks")]
	pub duration_weeks: u32,
	#[serde(default)]
	pub thumbnail: Option<String>,
	#[serde(default)]
	pub sessions: Vec<ProgramSession>,
}

fn default_duration_weeks() -> u32 {
	4
}

impl Program {
	pub fn name(&self, lang: Lang) -> &str {
		self.name.resolve(lang.code())
	}

	pub fn description(&self, lang: Lang) -> &str {
		self.description.resolve(lang.code())
	}

	pub fn duration_label(&self, lang: Lang) -> String {
		t_fmt(
			lang,
			"client.programs.weeks",
			&[("weeks", &self.duration_weeks.to_string())],
		)
	}

	/// Sessions sorted by day number.
	pub fn ordered_sessions(&self) -> Vec<&ProgramSession> {
		let mut sessions: Vec<_> = self.sessions.iter().collect();
		sessions.sort_by_key(|s| s.day_number);
		sessions
	}
}

/// What to add to the user's plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanTarget {
	Program(u64),
	Exercise(u64),
}

impl PlanTarget {
	pub fn to_body(self) -> Value {
		match self {
			Self::Program(id) => json!({ "program_id": id }),
			Self::Exercise(id) => json!({ "exercise_id": id }),
		}
	}

	/// Catalog key for the confirmation message.
	pub fn confirmation_key(self) -> &'static str {
		match self {
			Self::Program(_) => "client.plan.added",
			Self::Exercise(_) => "client.plan.exercise_added",
		}
	}
}

/// A plan record returned by `POST /api/user-plans/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPlan {
	pub id: u64,
	#[serde(default)]
	pub user: Option<u64>,
	#[serde(default)]
	pub program: Option<u64>,
	#[serde(default)]
	pub exercise: Option<u64>,
	#[serde(default)]
	pub created_at: Option<DateTime<Utc>>,
}

/// Login form input.
#[derive(Debug, Clone)]
pub struct Credentials {
	pub email: String,
	pub password: SecretString,
}

impl Credentials {
	pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
		Self {
			email: email.into().trim().to_string(),
			password: SecretString::new(password),
		}
	}

	pub(crate) fn to_body(&self) -> Value {
		json!({ "email": self.email, "password": self.password.expose() })
	}
}

/// Token endpoint response. Signup may also return one.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct TokenResponse {
	#[serde(default)]
	pub access: Option<String>,
	#[serde(default)]
	pub refresh: Option<String>,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_user_display_name() {
		let mut user: User = serde_json::from_value(json!({
			"id": 1,
			"email": "sam@example.com",
			"first_name": "",
			"role": "user"
		}))
		.unwrap();
		assert_eq!(user.display_name(), "sam");

		user.first_name = "Sam".to_string();
		assert_eq!(user.display_name(), "Sam");
	}

	#[test]
	fn test_user_preferred_lang() {
		let user: User = serde_json::from_value(json!({
			"id": 1,
			"email": "a@b.com",
			"preferred_language": "ar"
		}))
		.unwrap();
		assert_eq!(user.preferred_lang(), Lang::Ar);
	}

	#[test]
	fn test_difficulty_parsing() {
		let parsed: Vec<Difficulty> =
			serde_json::from_value(json!(["beginner", "Intermediate", "elite"])).unwrap();
		assert_eq!(
			parsed,
			vec![Difficulty::Beginner, Difficulty::Intermediate, Difficulty::Advanced]
		);
		assert_eq!(Difficulty::Intermediate.label(Lang::Fr), "Intermédiaire");
	}

	#[test]
	fn test_exercise_with_server_localized_fields() {
		let exercise: Exercise = serde_json::from_value(json!({
			"id": 3,
			"name": "Pompe",
			"description": "Au sol",
			"instructions": ["Descendre", "Pousser"],
			"category": "Pectoraux",
			"difficulty": "beginner",
			"demo_video_url": "",
			"target_muscles": ["chest"],
			"equipment": "Bodyweight"
		}))
		.unwrap();
		assert_eq!(exercise.name(Lang::Fr), "Pompe");
		assert_eq!(exercise.instructions.steps(Lang::Fr), vec!["Descendre", "Pousser"]);
		assert_eq!(exercise.demo_video(), None);
		assert_eq!(exercise.equipment_label(Lang::Fr).as_deref(), Some("Poids de corps"));
	}

	#[test]
	fn test_exercise_with_raw_translations() {
		let exercise: Exercise = serde_json::from_value(json!({
			"id": 4,
			"name": {"en": "Squat", "fr": "Squat", "ar": "سكوات"},
			"instructions": {"en": ["Sit back", "Stand up"], "ar": []},
			"category": {"en": "legs"},
			"demo_video_url": null
		}))
		.unwrap();
		assert_eq!(exercise.name(Lang::Ar), "سكوات");
		assert_eq!(exercise.category(Lang::Fr), "legs");
		assert_eq!(exercise.instructions.steps(Lang::Ar), vec!["Sit back", "Stand up"]);
		assert_eq!(exercise.difficulty, Difficulty::Beginner);
	}

	#[test]
	fn test_instruction_text_block() {
		let instructions: Instructions =
			serde_json::from_value(json!({"en": "Step one\n\nStep two"})).unwrap();
		assert_eq!(instructions.steps(Lang::Fr), vec!["Step one", "Step two"]);
	}

	#[test]
	fn test_session_falls_back_to_day_number() {
		let session: ProgramSession = serde_json::from_value(json!({
			"id": 1,
			"day_number": 2,
			"name": {"fr": "Haut du corps"}
		}))
		.unwrap();
		assert_eq!(session.display_name(Lang::En), "Day 2");
		assert_eq!(session.display_name(Lang::Fr), "Haut du corps");
		assert_eq!(session.display_name(Lang::Ar), "اليوم 2");
	}

	#[test]
	fn test_program_detail() {
		let program: Program = serde_json::from_value(json!({
			"id": 9,
			"name": "Full Body",
			"difficulty": "intermediate",
			"sessions": [
				{"id": 2, "day_number": 2, "exercises": []},
				{"id": 1, "day_number": 1, "exercises": [
					{"id": 11, "exercise_name": "Squat", "sets": 3, "reps": 10, "order": 2},
					{"id": 10, "exercise": {"id": 4, "name": "Push-up"}, "order": 1}
				]}
			]
		}))
		.unwrap();
		assert_eq!(program.duration_weeks, 4);
		assert_eq!(program.duration_label(Lang::En), "4 weeks");

		let sessions = program.ordered_sessions();
		assert_eq!(sessions[0].day_number, 1);

		let exercises = sessions[0].ordered_exercises();
		assert_eq!(exercises[0].name(Lang::En), "Push-up");
		assert_eq!(exercises[0].set_rep(Lang::En), "5 x 5");
		assert_eq!(exercises[1].set_rep(Lang::En), "3 x 10");
	}

	#[test]
	fn test_plan_target_body() {
		assert_eq!(PlanTarget::Program(3).to_body(), json!({"program_id": 3}));
		assert_eq!(PlanTarget::Exercise(8).to_body(), json!({"exercise_id": 8}));
	}

	#[test]
	fn test_user_plan_timestamp() {
		let plan: UserPlan = serde_json::from_value(json!({
			"id": 5,
			"user": 1,
			"program": 3,
			"created_at": "2025-03-01T10:00:00.123456Z"
		}))
		.unwrap();
		assert_eq!(plan.program, Some(3));
		assert!(plan.created_at.is_some());
	}

	#[test]
	fn test_exercise_list_tolerates_null_translation() {
		let exercises: Vec<Exercise> = serde_json::from_value(json!([
			{"id": 1, "name": {"en": "Push-up", "ar": null}, "category": {"en": "Chest"}},
			{"id": 2, "name": {"en": "Squat", "fr": "Squat"}, "category": {"en": 3}}
		]))
		.unwrap();
		assert_eq!(exercises.len(), 2);
		assert_eq!(exercises[0].name(Lang::Ar), "Push-up");
		assert_eq!(exercises[1].category(Lang::En), "");
	}

	#[test]
	fn test_credentials_debug_redacts_password() {
		let credentials = Credentials::new(" a@b.com ", "hunter2");
		assert_eq!(credentials.email, "a@b.com");
		assert!(!format!("{credentials:?}").contains("hunter2"));
	}
}
