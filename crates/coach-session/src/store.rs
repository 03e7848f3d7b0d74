// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Session storage backends.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::error::CredentialError;
use crate::key::SessionKey;
use crate::secret::SecretString;
use crate::value::{PersistedSession, SessionTokens};

/// Persistent key-value store for the login session.
///
/// Reads happen before a request is sent and writes after its response, with
/// no coordination between concurrent writers; the last write wins.
#[async_trait]
pub trait SessionStore: Send + Sync + std::fmt::Debug {
	/// Read one value.
	async fn get(&self, key: SessionKey) -> Result<Option<String>, CredentialError>;

	/// Write several values in one operation.
	async fn set_many(&self, entries: &[(SessionKey, String)]) -> Result<(), CredentialError>;

	/// Remove several values in one operation.
	async fn remove_many(&self, keys: &[SessionKey]) -> Result<(), CredentialError>;

	/// Remove every session value in one operation.
	async fn clear(&self) -> Result<(), CredentialError>;

	/// Remove the tokens and keep the last email.
	async fn clear_credentials(&self) -> Result<(), CredentialError> {
		let secrets: Vec<SessionKey> = SessionKey::ALL
			.into_iter()
			.filter(SessionKey::is_secret)
			.collect();
		self.remove_many(&secrets).await
	}

	/// Write one value.
	async fn set(&self, key: SessionKey, value: String) -> Result<(), CredentialError> {
		self.set_many(&[(key, value)]).await
	}

	/// The stored access token, if any. Empty strings count as absent.
	async fn access_token(&self) -> Result<Option<SecretString>, CredentialError> {
		Ok(self
			.get(SessionKey::AccessToken)
			.await?
			.filter(|t| !t.is_empty())
			.map(SecretString::new))
	}

	/// The stored token pair, if an access token is present.
	async fn tokens(&self) -> Result<Option<SessionTokens>, CredentialError> {
		let Some(access) = self.access_token().await? else {
			return Ok(None);
		};
		let refresh = self
			.get(SessionKey::RefreshToken)
			.await?
			.filter(|t| !t.is_empty())
			.map(SecretString::new);
		Ok(Some(SessionTokens { access, refresh }))
	}

	/// Email last used to log in, for prefilling the login form.
	async fn last_email(&self) -> Result<Option<String>, CredentialError> {
		self.get(SessionKey::LastEmail).await
	}

	/// Persist a fresh login.
	async fn save_login(&self, tokens: &SessionTokens, email: &str) -> Result<(), CredentialError> {
		let mut entries = vec![(SessionKey::AccessToken, tokens.access.expose().to_string())];
		if let Some(refresh) = &tokens.refresh {
			entries.push((SessionKey::RefreshToken, refresh.expose().to_string()));
		}
		entries.push((SessionKey::LastEmail, email.to_string()));
		self.set_many(&entries).await
	}
}

/// File-based session store with JSON format.
///
/// The file is written with restricted permissions (0600 on Unix) through a
/// temp file and rename, so readers never see a partial write.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
	path: PathBuf,
}

impl FileSessionStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Read the whole session from disk. A missing file is an empty session.
	pub async fn read_session(&self) -> Result<PersistedSession, CredentialError> {
		if !fs::try_exists(&self.path).await? {
			return Ok(PersistedSession::default());
		}

		let contents = fs::read_to_string(&self.path).await?;
		if contents.trim().is_empty() {
			return Ok(PersistedSession::default());
		}
		Ok(serde_json::from_str(&contents)?)
	}

	async fn write_session(&self, session: &PersistedSession) -> Result<(), CredentialError> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent).await?;
		}

		let contents = serde_json::to_string_pretty(session)?;

		let temp_path = self.path.with_extension("tmp");
		let mut file = fs::File::create(&temp_path).await?;
		file.write_all(contents.as_bytes()).await?;
		file.sync_all().await?;
		drop(file);

		#[cfg(unix)]
		{
			use std::os::unix::fs::PermissionsExt;
			let perms = std::fs::Permissions::from_mode(0o600);
			if let Err(e) = fs::set_permissions(&temp_path, perms).await {
				warn!(path = ?temp_path, error = %e, "failed to set session file permissions to 0600");
			}
		}

		fs::rename(&temp_path, &self.path).await?;

		debug!(path = ?self.path, "session file written");
		Ok(())
	}
}

#[async_trait]
impl SessionStore for FileSessionStore {
	async fn get(&self, key: SessionKey) -> Result<Option<String>, CredentialError> {
		let session = self.read_session().await?;
		Ok(session.get(key).map(str::to_string))
	}

	async fn set_many(&self, entries: &[(SessionKey, String)]) -> Result<(), CredentialError> {
		let mut session = self.read_session().await?;
		for (key, value) in entries {
			session.set(*key, Some(value.clone()));
		}
		self.write_session(&session).await
	}

	async fn remove_many(&self, keys: &[SessionKey]) -> Result<(), CredentialError> {
		let mut session = self.read_session().await?;
		for key in keys {
			session.set(*key, None);
		}
		if session.is_empty() {
			return self.clear().await;
		}
		self.write_session(&session).await
	}

	async fn clear(&self) -> Result<(), CredentialError> {
		match fs::remove_file(&self.path).await {
			Ok(()) => {
				debug!(path = ?self.path, "session file removed");
				Ok(())
			}
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
			Err(e) => Err(e.into()),
		}
	}
}

/// In-memory session store for testing.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
	session: RwLock<PersistedSession>,
}

impl MemorySessionStore {
	pub fn new() -> Self {
		Self::default()
	}

	/// Snapshot of the current contents.
	pub async fn snapshot(&self) -> PersistedSession {
		self.session.read().await.clone()
	}
}

#[async_trait]
impl SessionStore for MemorySessionStore {
	async fn get(&self, key: SessionKey) -> Result<Option<String>, CredentialError> {
		let session = self.session.read().await;
		Ok(session.get(key).map(str::to_string))
	}

	async fn set_many(&self, entries: &[(SessionKey, String)]) -> Result<(), CredentialError> {
		let mut session = self.session.write().await;
		for (key, value) in entries {
			session.set(*key, Some(value.clone()));
		}
		Ok(())
	}

	async fn remove_many(&self, keys: &[SessionKey]) -> Result<(), CredentialError> {
		let mut session = self.session.write().await;
		for key in keys {
			session.set(*key, None);
		}
		Ok(())
	}

	async fn clear(&self) -> Result<(), CredentialError> {
		*self.session.write().await = PersistedSession::default();
		Ok(())
	}
}
