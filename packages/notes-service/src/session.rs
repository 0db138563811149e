//! Where bearer credentials come from.

use std::fmt;

use notes_providers::{StoredToken, TokenStore};

use crate::BoxFuture;

/// Opaque bearer token. `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);
impl Credential {
	pub fn new(token: impl Into<String>) -> Self {
		Self(token.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}
impl fmt::Debug for Credential {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("Credential(<redacted>)")
	}
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
	/// Nobody is signed in. Callers send the user to the login entry instead of reporting it.
	#[error("No signed-in identity.")]
	SignedOut,
	#[error("{message}")]
	Provider { message: String },
	#[error(transparent)]
	Store(#[from] notes_providers::Error),
}

/// Issues a current credential for the signed-in identity.
pub trait SessionProvider
where
	Self: Send + Sync,
{
	fn acquire(&self) -> BoxFuture<'_, Result<Credential, SessionError>>;

	fn sign_out(&self) -> BoxFuture<'_, Result<(), SessionError>>;
}

/// Reads the token the login entry persisted to the token store.
#[derive(Clone, Debug)]
pub struct StoredTokenSession {
	store: TokenStore,
}
impl StoredTokenSession {
	pub fn new(store: TokenStore) -> Self {
		Self { store }
	}

	pub fn current(&self) -> Result<Option<StoredToken>, SessionError> {
		Ok(self.store.load()?.filter(|stored| !stored.token.is_empty()))
	}
}
impl SessionProvider for StoredTokenSession {
	fn acquire(&self) -> BoxFuture<'_, Result<Credential, SessionError>> {
		Box::pin(async move {
			let stored = self.current()?.ok_or(SessionError::SignedOut)?;

			tracing::debug!(username = %stored.username, "Acquired stored session token.");

			Ok(Credential::new(stored.token))
		})
	}

	fn sign_out(&self) -> BoxFuture<'_, Result<(), SessionError>> {
		Box::pin(async move {
			self.store.clear()?;

			tracing::debug!(path = ?self.store.path(), "Cleared stored session token.");

			Ok(())
		})
	}
}

/// A credential supplied up front, e.g. minted by an external identity provider.
#[derive(Clone, Debug, Default)]
pub struct StaticSession {
	credential: Option<Credential>,
}
impl StaticSession {
	pub fn new(credential: Option<Credential>) -> Self {
		Self { credential }
	}
}
impl SessionProvider for StaticSession {
	fn acquire(&self) -> BoxFuture<'_, Result<Credential, SessionError>> {
		let credential = self.credential.clone();

		Box::pin(async move { credential.ok_or(SessionError::SignedOut) })
	}

	fn sign_out(&self) -> BoxFuture<'_, Result<(), SessionError>> {
		Box::pin(async move { Ok(()) })
	}
}
