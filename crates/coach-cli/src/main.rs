// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Coach CLI - browse workout programs and exercises from the terminal.
//!
//! Wraps the coaching API client: logs in, stores the session on disk, and
//! renders localized exercise and program listings in English, French or
//! Arabic.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use coach_api::ApiClient;
use coach_cli_config::{load_config_with_cli, CliOverrides, LogFormat, LoggingConfig};
use coach_common_i18n::Lang;
use coach_session::FileSessionStore;

mod auth;
mod library;
mod locale;
mod navigator;
mod outcome;

use navigator::TerminalNavigator;

/// Coach - workout programs and exercise library
#[derive(Parser, Debug)]
#[command(name = "coach", version, about, long_about = None)]
struct Args {
	/// Path to custom configuration file
	#[arg(short, long, global = true)]
	config: Option<PathBuf>,

	/// Interface and content language (en, fr, ar)
	#[arg(long, global = true)]
	lang: Option<String>,

	/// API base URL (overrides config)
	#[arg(long, global = true)]
	api_url: Option<String>,

	/// Log level (overrides config)
	#[arg(short, long, global = true)]
	log_level: Option<String>,

	/// Output logs as JSON (overrides config)
	#[arg(long, global = true)]
	json_logs: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
	/// Log in and store the session
	Login(LoginArgs),
	/// Create an account and log in
	Signup(LoginArgs),
	/// Forget the stored session
	Logout,
	/// Show the signed-in user
	Whoami,
	/// List exercises
	Exercises {
		/// Case-insensitive text to look for in exercise names
		#[arg(short, long, default_value = "")]
		search: String,
		/// Muscle group filter (see `coach groups`)
		#[arg(short, long, default_value = "all")]
		group: String,
		/// Print raw JSON
		#[arg(long)]
		json: bool,
	},
	/// Show one exercise
	Exercise {
		id: u64,
		#[arg(long)]
		json: bool,
	},
	/// List workout programs
	Programs {
		#[arg(long)]
		json: bool,
	},
	/// Show one program with its sessions
	Program {
		id: u64,
		#[arg(long)]
		json: bool,
	},
	/// Add a program or exercise to your plan
	AddPlan(AddPlanArgs),
	/// List muscle group filters
	Groups,
}

#[derive(ClapArgs, Debug)]
pub struct LoginArgs {
	/// Account email (defaults to the last one used)
	#[arg(short, long)]
	email: Option<String>,

	/// Account password (prompted for when omitted)
	#[arg(long, env = "COACH_PASSWORD", hide_env_values = true)]
	password: Option<String>,

	/// Page to continue at after login
	#[arg(long)]
	next: Option<String>,
}

#[derive(ClapArgs, Debug)]
#[group(required = true, multiple = false)]
pub struct AddPlanArgs {
	/// Program id
	#[arg(long)]
	program: Option<u64>,

	/// Exercise id
	#[arg(long)]
	exercise: Option<u64>,
}

impl From<&Args> for CliOverrides {
	fn from(args: &Args) -> Self {
		Self {
			api_url: args.api_url.clone(),
			lang: args.lang.clone(),
			log_level: args.log_level.clone(),
			log_format: args.json_logs.then(|| "json".to_string()),
			config_file: args.config.clone(),
		}
	}
}

fn init_tracing(logging: &LoggingConfig) {
	let filter = EnvFilter::try_from_default_env()
		.unwrap_or_else(|_| EnvFilter::new(format!("coach={}", logging.level.as_str())));

	match logging.format {
		LogFormat::Json => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().json().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Compact => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().compact().with_writer(std::io::stderr))
				.init();
		}
		LogFormat::Pretty => {
			tracing_subscriber::registry()
				.with(filter)
				.with(fmt::layer().with_writer(std::io::stderr))
				.init();
		}
	}
}

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	let config = load_config_with_cli(CliOverrides::from(&args))
		.context("failed to load configuration")?;

	init_tracing(&config.logging);

	let lang: Lang = config.lang.unwrap_or_else(locale::system_lang);
	info!(base_url = %config.api.base_url, lang = %lang, "starting coach");

	let store = Arc::new(FileSessionStore::new(&config.session_file));
	let client = ApiClient::builder()
		.base_url(&config.api.base_url)
		.timeout(config.api.timeout)
		.lang(lang)
		.store(store)
		.navigator(Arc::new(TerminalNavigator::new(lang)))
		.build()
		.context("failed to create API client")?;
	client.restore_session().await;

	match args.command {
		Command::Login(login) => auth::login(&client, login).await,
		Command::Signup(signup) => auth::signup(&client, signup).await,
		Command::Logout => auth::logout(&client).await,
		Command::Whoami => auth::whoami(&client).await,
		Command::Exercises {
			search,
			group,
			json,
		} => library::exercises(&client, &search, &group, json).await,
		Command::Exercise { id, json } => library::exercise(&client, id, json).await,
		Command::Programs { json } => library::programs(&client, json).await,
		Command::Program { id, json } => library::program(&client, id, json).await,
		Command::AddPlan(target) => library::add_plan(&client, target).await,
		Command::Groups => {
			library::groups(lang);
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::CommandFactory;

	#[test]
	fn test_cli_definition_is_valid() {
		Args::command().debug_assert();
	}

	#[test]
	fn test_global_flags_map_to_overrides() {
		let args = Args::try_parse_from([
			"coach",
			"exercises",
			"--lang",
			"ar",
			"--json-logs",
			"--api-url",
			"https://coach.example.com",
		])
		.unwrap();
		let overrides = CliOverrides::from(&args);
		assert_eq!(overrides.lang.as_deref(), Some("ar"));
		assert_eq!(overrides.log_format.as_deref(), Some("json"));
		assert_eq!(overrides.api_url.as_deref(), Some("https://coach.example.com"));
	}

	#[test]
	fn test_exercises_defaults() {
		let args = Args::try_parse_from(["coach", "exercises"]).unwrap();
		match args.command {
			Command::Exercises { search, group, json } => {
				assert_eq!(search, "");
				assert_eq!(group, "all");
				assert!(!json);
			}
			other => panic!("unexpected command {other:?}"),
		}
	}

	#[test]
	fn test_add_plan_requires_exactly_one_target() {
		assert!(Args::try_parse_from(["coach", "add-plan"]).is_err());
		assert!(
			Args::try_parse_from(["coach", "add-plan", "--program", "1", "--exercise", "2"]).is_err()
		);
		assert!(Args::try_parse_from(["coach", "add-plan", "--exercise", "2"]).is_ok());
	}
}
