//! Durable storage for the bearer token handed out by the users endpoints.

use std::{
	fs,
	io::ErrorKind,
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{Error, Result};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredToken {
	pub token: String,
	pub username: String,
	#[serde(with = "crate::time_serde")]
	pub saved_at: OffsetDateTime,
}
impl StoredToken {
	pub fn new(token: impl Into<String>, username: impl Into<String>) -> Self {
		Self { token: token.into(), username: username.into(), saved_at: OffsetDateTime::now_utc() }
	}
}

/// JSON file holding at most one [`StoredToken`].
#[derive(Clone, Debug)]
pub struct TokenStore {
	path: PathBuf,
}
impl TokenStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	/// Returns `None` when nothing has been saved yet.
	pub fn load(&self) -> Result<Option<StoredToken>> {
		let raw = match fs::read_to_string(&self.path) {
			Ok(raw) => raw,
			Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
			Err(err) => return Err(self.io_error(err)),
		};

		if raw.trim().is_empty() {
			return Ok(None);
		}

		Ok(Some(serde_json::from_str(&raw)?))
	}

	pub fn save(&self, token: &StoredToken) -> Result<()> {
		if let Some(parent) = self.path.parent()
			&& !parent.as_os_str().is_empty()
		{
			fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
		}

		let payload = serde_json::to_string_pretty(token)?;

		fs::write(&self.path, payload).map_err(|err| self.io_error(err))?;

		tracing::debug!(path = ?self.path, username = %token.username, "Saved session token.");

		Ok(())
	}

	/// Removing an absent token is not an error.
	pub fn clear(&self) -> Result<()> {
		match fs::remove_file(&self.path) {
			Ok(()) => Ok(()),
			Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
			Err(err) => Err(self.io_error(err)),
		}
	}

	fn io_error(&self, source: std::io::Error) -> Error {
		Error::TokenStore { path: self.path.clone(), source }
	}
}
