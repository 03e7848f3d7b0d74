// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::io::{self, BufRead, Write};

use anyhow::{anyhow, bail, Context, Result};
use tracing::{instrument, warn};

use coach_api::{ApiClient, ApiOutcome, Credentials, Redirect, User};
use coach_common_i18n::{t, t_fmt, Lang};
use coach_session::SessionStore;

use crate::outcome::require;
use crate::LoginArgs;

#[instrument(skip_all)]
pub async fn login(client: &ApiClient, args: LoginArgs) -> Result<()> {
	let credentials = read_credentials(client, &args).await?;
	let outcome = client.login(&credentials, args.next.as_deref()).await;
	finish_sign_in(client, outcome, "client.login.success", &credentials.email).await
}

#[instrument(skip_all)]
pub async fn signup(client: &ApiClient, args: LoginArgs) -> Result<()> {
	let credentials = read_credentials(client, &args).await?;
	let outcome = client.signup(&credentials, args.next.as_deref()).await;
	finish_sign_in(client, outcome, "client.signup.success", &credentials.email).await
}

pub async fn logout(client: &ApiClient) -> Result<()> {
	client
		.logout()
		.await
		.context("failed to clear stored session")?;
	println!("{}", t(client.lang(), "client.auth.logged_out"));
	Ok(())
}

pub async fn whoami(client: &ApiClient) -> Result<()> {
	let lang = client.lang();
	let origin = coach_api::routes::dashboard_route(lang);
	let user = require(client.profile(&origin).await, lang)?;
	print!("{}", render_user(&user, lang));
	Ok(())
}

async fn finish_sign_in(
	client: &ApiClient,
	outcome: ApiOutcome<Redirect>,
	success_key: &str,
	email: &str,
) -> Result<()> {
	let lang = client.lang();
	match outcome {
		ApiOutcome::Success(_) => {
			println!("{}", t_fmt(lang, success_key, &[("email", email)]));
			Ok(())
		}
		ApiOutcome::Connectivity(_) => bail!(t(lang, "client.error.network")),
		_ => {
			let message = client
				.auth_state()
				.await
				.last_error()
				.map(str::to_string)
				.unwrap_or_else(|| t(lang, "client.error.invalid_credentials"));
			Err(anyhow!(message))
		}
	}
}

async fn read_credentials(client: &ApiClient, args: &LoginArgs) -> Result<Credentials> {
	let lang = client.lang();

	let email = match &args.email {
		Some(email) => email.clone(),
		None => {
			let last = match client.store().last_email().await {
				Ok(last) => last,
				Err(e) => {
					warn!(error = %e, "failed to read last email");
					None
				}
			};
			match last {
				Some(last) if !last.is_empty() => last,
				_ => prompt(&t(lang, "client.login.email"))?,
			}
		}
	};

	let password = match &args.password {
		Some(password) => password.clone(),
		None => prompt(&t(lang, "client.login.password"))?,
	};

	Ok(Credentials::new(email, password))
}

fn prompt(label: &str) -> Result<String> {
	eprint!("{label}: ");
	io::stderr().flush().ok();

	let mut line = String::new();
	io::stdin()
		.lock()
		.read_line(&mut line)
		.context("failed to read from stdin")?;
	Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn render_user(user: &User, lang: Lang) -> String {
	let mut out = String::new();
	out.push_str(&t_fmt(
		lang,
		"client.dashboard.greeting",
		&[("name", user.display_name())],
	));
	out.push('\n');
	out.push_str(&user.email);
	out.push('\n');
	if !user.role.is_empty() {
		out.push_str(&format!("{} {}\n", t(lang, "client.dashboard.role"), user.role));
	}
	out
}
