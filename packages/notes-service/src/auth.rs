//! Login and registration against the backend's `/users` endpoints.

use std::sync::Arc;

use notes_domain::{AuthCredentials, AuthMode, Locale};
use notes_providers::{StoredToken, TokenStore};

use crate::{AuthApi, Error, Result, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
	pub mode: AuthMode,
	/// Whether the response carried a token that is now in the token store.
	pub token_saved: bool,
	pub message: Option<String>,
}

pub struct AuthEntry {
	api: Arc<dyn AuthApi>,
	store: TokenStore,
	locale: Locale,
	mode: AuthMode,
	error: Option<String>,
	loading: bool,
}
impl AuthEntry {
	pub fn new(api: Arc<dyn AuthApi>, store: TokenStore, locale: Locale) -> Self {
		Self { api, store, locale, mode: AuthMode::Login, error: None, loading: false }
	}

	pub fn with_mode(mut self, mode: AuthMode) -> Self {
		self.mode = mode;

		self
	}

	pub fn mode(&self) -> AuthMode {
		self.mode
	}

	/// Switches between login and sign-up, dropping any shown error.
	pub fn toggle_mode(&mut self) {
		self.error = None;
		self.mode = self.mode.toggled();
	}

	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	/// Sends the credentials and persists any returned token.
	pub async fn authenticate(&mut self, credentials: &AuthCredentials) -> Result<AuthOutcome> {
		self.error = None;

		if !credentials.is_complete() {
			return Err(self.fail(ValidationError::MissingAuthFields.into()));
		}

		self.loading = true;

		let result = self.api.authenticate(self.mode, credentials).await;

		self.loading = false;

		let response = match result {
			Ok(response) => response,
			Err(source) => return Err(self.fail(Error::Auth(source))),
		};
		let mut token_saved = false;

		if let Some(token) = response.token.filter(|token| !token.is_empty()) {
			let stored = StoredToken::new(token, credentials.username.clone());

			if let Err(err) = self.store.save(&stored) {
				return Err(self.fail(Error::SaveToken(err)));
			}

			token_saved = true;
		}

		tracing::info!(mode = ?self.mode, username = %credentials.username, token_saved, "Authenticated.");

		Ok(AuthOutcome { mode: self.mode, token_saved, message: response.message })
	}

	fn fail(&mut self, err: Error) -> Error {
		tracing::warn!(error = %err, "Authentication failed.");

		self.error = Some(err.user_message(self.locale));

		err
	}
}
