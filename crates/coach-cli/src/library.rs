// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Exercise library, program library and plan commands.

use anyhow::{bail, Context, Result};
use serde::Serialize;
use tracing::{instrument, warn};

use coach_api::{
	list_exercises, routes, ApiClient, ApiOutcome, Exercise, ExerciseFilter, ExerciseListing,
	PlanTarget, Program,
};
use coach_common_i18n::{muscle_groups, t, t_fmt, Lang};

use crate::outcome::require;
use crate::AddPlanArgs;

#[instrument(skip(client))]
pub async fn exercises(client: &ApiClient, search: &str, group: &str, json: bool) -> Result<()> {
	let lang = client.lang();
	let all = load_or_empty(client.exercises(lang).await, lang);

	let filter = ExerciseFilter::new(search, group);
	match list_exercises(&all, &filter, lang) {
		ExerciseListing::Items(items) if json => print_json(&items),
		ExerciseListing::Items(items) => {
			for exercise in items {
				println!("{}", exercise_line(exercise, lang));
			}
			Ok(())
		}
		ExerciseListing::Empty(message) => {
			println!("{message}");
			Ok(())
		}
	}
}

#[instrument(skip(client))]
pub async fn exercise(client: &ApiClient, id: u64, json: bool) -> Result<()> {
	let lang = client.lang();
	let outcome = client.exercise(id, lang).await;
	if outcome.failure().is_some_and(|f| f.is_not_found()) {
		bail!(t(lang, "client.exercises.not_found"));
	}
	let exercise = require(outcome, lang)?;
	if json {
		return print_json(&exercise);
	}
	print!("{}", render_exercise(&exercise, lang));
	Ok(())
}

#[instrument(skip(client))]
pub async fn programs(client: &ApiClient, json: bool) -> Result<()> {
	let lang = client.lang();
	let programs = load_or_empty(client.programs(lang).await, lang);
	if json {
		return print_json(&programs);
	}
	if programs.is_empty() {
		println!("{}", t(lang, "client.programs.empty"));
		return Ok(());
	}
	for program in &programs {
		println!("{}", program_line(program, lang));
	}
	Ok(())
}

#[instrument(skip(client))]
pub async fn program(client: &ApiClient, id: u64, json: bool) -> Result<()> {
	let lang = client.lang();
	let outcome = client.program(id, lang).await;
	if outcome.failure().is_some_and(|f| f.is_not_found()) {
		bail!(t(lang, "client.programs.not_found"));
	}
	let program = require(outcome, lang)?;
	if json {
		return print_json(&program);
	}
	print!("{}", render_program(&program, lang));
	Ok(())
}

#[instrument(skip(client))]
pub async fn add_plan(client: &ApiClient, args: AddPlanArgs) -> Result<()> {
	let lang = client.lang();
	let (target, origin) = match (args.program, args.exercise) {
		(Some(id), _) => (PlanTarget::Program(id), routes::program_route(lang, id)),
		(None, Some(id)) => (PlanTarget::Exercise(id), routes::exercises_route(lang)),
		(None, None) => bail!("either --program or --exercise is required"),
	};

	match client.add_to_plan(target, &origin).await {
		ApiOutcome::Failed(failure) => bail!(t_fmt(
			lang,
			"client.plan.add_failed",
			&[("error", &failure.message(lang))]
		)),
		outcome => {
			require(outcome, lang)?;
			println!("{}", t(lang, target.confirmation_key()));
			Ok(())
		}
	}
}

pub fn groups(lang: Lang) {
	for group in muscle_groups() {
		println!("{:<12} {}", group.value, group.label(lang));
	}
}

/// Failed list fetches degrade to an empty list.
fn load_or_empty<T>(outcome: ApiOutcome<Vec<T>>, lang: Lang) -> Vec<T> {
	match outcome {
		ApiOutcome::Success(items) => items,
		ApiOutcome::Redirected(_) => Vec::new(),
		ApiOutcome::Failed(failure) => {
			warn!(status = ?failure.status, "list fetch failed");
			eprintln!("{}", failure.message(lang));
			Vec::new()
		}
		ApiOutcome::Connectivity(_) => {
			eprintln!("{}", t(lang, "client.error.network"));
			Vec::new()
		}
	}
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
	let text = serde_json::to_string_pretty(value).context("failed to encode JSON")?;
	println!("{text}");
	Ok(())
}

fn exercise_line(exercise: &Exercise, lang: Lang) -> String {
	let mut line = format!("#{:<5} {}", exercise.id, exercise.name(lang));
	let category = exercise.category(lang);
	if !category.is_empty() {
		line.push_str(&format!(" [{category}]"));
	}
	line.push_str(&format!(" - {}", exercise.difficulty.label(lang)));
	line
}

fn render_exercise(exercise: &Exercise, lang: Lang) -> String {
	let mut out = format!("{}\n", exercise.name(lang));

	let mut badges = vec![exercise.difficulty.label(lang).to_string()];
	let category = exercise.category(lang);
	if !category.is_empty() {
		badges.push(category.to_string());
	}
	if let Some(equipment) = exercise.equipment_label(lang) {
		badges.push(equipment);
	}
	out.push_str(&badges.join(" | "));
	out.push('\n');

	let description = exercise.description(lang);
	if !description.is_empty() {
		out.push('\n');
		out.push_str(description);
		out.push('\n');
	}

	let steps = exercise.instructions.steps(lang);
	if !steps.is_empty() {
		out.push_str(&format!("\n{}\n", t(lang, "client.exercises.instructions")));
		for (n, step) in steps.iter().enumerate() {
			out.push_str(&format!("  {}. {step}\n", n + 1));
		}
	}

	if let Some(url) = exercise.demo_video() {
		out.push_str(&format!("\n{}: {url}\n", t(lang, "client.exercises.demo_video")));
	}
	out
}

fn program_line(program: &Program, lang: Lang) -> String {
	format!(
		"#{:<5} {} - {}, {}",
		program.id,
		program.name(lang),
		program.difficulty.label(lang),
		program.duration_label(lang)
	)
}

fn render_program(program: &Program, lang: Lang) -> String {
	let mut out = format!(
		"{}\n{} | {}\n",
		program.name(lang),
		program.difficulty.label(lang),
		program.duration_label(lang)
	);

	let description = program.description(lang);
	if !description.is_empty() {
		out.push('\n');
		out.push_str(description);
		out.push('\n');
	}

	for session in program.ordered_sessions() {
		out.push_str(&format!("\n{}\n", session.display_name(lang)));
		for item in session.ordered_exercises() {
			out.push_str(&format!("  - {} ({})\n", item.name(lang), item.set_rep(lang)));
		}
	}
	out
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn exercise() -> Exercise {
		serde_json::from_value(json!({
			"id": 3,
			"name": {"en": "Push-up", "ar": "ضغط"},
			"description": {"en": "Classic bodyweight press."},
			"instructions": ["Hands under shoulders", "Lower and press"],
			"category": {"en": "Chest", "ar": "الصدر"},
			"difficulty": "beginner",
			"equipment": "bodyweight",
			"demo_video_url": "https://video.example.com/pushup"
		}))
		.unwrap()
	}

	#[test]
	fn test_exercise_line() {
		assert_eq!(exercise_line(&exercise(), Lang::En), "#3     Push-up [Chest] - Beginner");
		assert_eq!(exercise_line(&exercise(), Lang::Ar), "#3     ضغط [الصدر] - مبتدئ");
	}

	#[test]
	fn test_render_exercise() {
		let rendered = render_exercise(&exercise(), Lang::En);
		assert_eq!(
			rendered,
			"Push-up\n\
			 Beginner | Chest | Bodyweight\n\
			 \n\
			 Classic bodyweight press.\n\
			 \n\
			 Instructions\n  \
			 1. Hands under shoulders\n  \
			 2. Lower and press\n\
			 \n\
			 Watch Demo Video: https://video.example.com/pushup\n"
		);
	}

	#[test]
	fn test_render_program_orders_sessions() {
		let program: Program = serde_json::from_value(json!({
			"id": 1,
			"name": "Starter",
			"difficulty": "beginner",
			"duration_weeks": 4,
			"sessions": [
				{"id": 2, "day_number": 2, "name": "Lower", "exercises": []},
				{"id": 1, "day_number": 1, "name": "", "exercises": [
					{"id": 1, "exercise_name": "Squat", "sets": 3, "reps": 10, "order": 1}
				]}
			]
		}))
		.unwrap();

		assert_eq!(
			render_program(&program, Lang::En),
			"Starter\nBeginner | 4 weeks\n\nDay 1\n  - Squat (3 x 10)\n\nLower\n"
		);
		assert_eq!(program_line(&program, Lang::Fr), "#1     Starter - Débutant, 4 semaines");
	}

	#[test]
	fn test_failed_list_degrades_to_empty() {
		let outcome: ApiOutcome<Vec<Exercise>> = ApiOutcome::Connectivity("refused".to_string());
		assert!(load_or_empty(outcome, Lang::En).is_empty());
	}
}
