// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Persistent session storage for the coach client.
//!
//! A login session is an access token, an optional refresh token and the
//! last email used on the login form. They are kept in a small key-value store
//! under fixed key names ([`SessionKey`]). Logout clears all of them; when
//! the API rejects the access token only the tokens are removed.
//!
//! # Features
//!
//! - **SessionStore trait**: `get`/`set`/`remove`/`clear` over the fixed keys, injected
//!   into the API client
//! - **FileSessionStore**: JSON file with 0600 permissions and atomic writes
//! - **MemorySessionStore**: in-memory storage for tests
//!
//! # Example
//!
//! ```rust
//! use coach_session::{MemorySessionStore, SessionStore, SessionTokens};
//!
//! # tokio_test::block_on(async {
//! let store = MemorySessionStore::new();
//! store
//!     .save_login(&SessionTokens::new("tok1", Some("ref1".to_string())), "a@b.com")
//!     .await
//!     .unwrap();
//!
//! let tokens = store.tokens().await.unwrap().unwrap();
//! assert_eq!(tokens.access.expose(), "tok1");
//! # });
//! ```

mod error;
mod key;
mod secret;
mod store;
mod value;

pub use error::CredentialError;
pub use key::SessionKey;
pub use secret::{SecretString, REDACTED};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};
pub use value::{PersistedSession, SessionTokens};
