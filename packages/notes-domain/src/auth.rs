use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthMode {
	Login,
	Register,
}
impl AuthMode {
	pub fn path(self) -> &'static str {
		match self {
			Self::Login => "/users/login",
			Self::Register => "/users/register",
		}
	}

	pub fn toggled(self) -> Self {
		match self {
			Self::Login => Self::Register,
			Self::Register => Self::Login,
		}
	}
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthCredentials {
	pub username: String,
	pub password: String,
}
impl AuthCredentials {
	pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
		Self { username: username.into(), password: password.into() }
	}

	pub fn is_complete(&self) -> bool {
		!self.username.is_empty() && !self.password.is_empty()
	}
}
impl fmt::Debug for AuthCredentials {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AuthCredentials")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}

/// Body returned by `/users/login` and `/users/register`, on success and on failure alike.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub token: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub message: Option<String>,
}
