pub mod auth;
pub mod controller;
pub mod session;

mod error;

pub use auth::{AuthEntry, AuthOutcome};
pub use controller::{Activation, NotesController, SaveOutcome, ScreenState};
pub use error::{Error, Operation, Result, ValidationError};
pub use session::{Credential, SessionError, SessionProvider, StaticSession, StoredTokenSession};

use std::{future::Future, pin::Pin};

use notes_domain::{AuthCredentials, AuthMode, AuthResponse, Note, NoteBody, NoteId};
use notes_providers::{notes, users};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The remote notes collection.
pub trait NotesApi
where
	Self: Send + Sync,
{
	fn list<'a>(
		&'a self,
		credential: &'a Credential,
	) -> BoxFuture<'a, notes_providers::Result<Vec<Note>>>;

	fn create<'a>(
		&'a self,
		credential: &'a Credential,
		body: &'a NoteBody,
	) -> BoxFuture<'a, notes_providers::Result<Note>>;

	fn update<'a>(
		&'a self,
		credential: &'a Credential,
		id: NoteId,
		body: &'a NoteBody,
	) -> BoxFuture<'a, notes_providers::Result<()>>;

	fn delete<'a>(
		&'a self,
		credential: &'a Credential,
		id: NoteId,
	) -> BoxFuture<'a, notes_providers::Result<()>>;
}

/// The backend's username/password endpoints.
pub trait AuthApi
where
	Self: Send + Sync,
{
	fn authenticate<'a>(
		&'a self,
		mode: AuthMode,
		credentials: &'a AuthCredentials,
	) -> BoxFuture<'a, notes_providers::Result<AuthResponse>>;
}

/// [`NotesApi`] and [`AuthApi`] over HTTP.
#[derive(Clone, Debug)]
pub struct HttpBackend {
	cfg: notes_config::Api,
}
impl HttpBackend {
	pub fn new(cfg: notes_config::Api) -> Self {
		Self { cfg }
	}
}
impl NotesApi for HttpBackend {
	fn list<'a>(
		&'a self,
		credential: &'a Credential,
	) -> BoxFuture<'a, notes_providers::Result<Vec<Note>>> {
		Box::pin(notes::list(&self.cfg, credential.as_str()))
	}

	fn create<'a>(
		&'a self,
		credential: &'a Credential,
		body: &'a NoteBody,
	) -> BoxFuture<'a, notes_providers::Result<Note>> {
		Box::pin(notes::create(&self.cfg, credential.as_str(), body))
	}

	fn update<'a>(
		&'a self,
		credential: &'a Credential,
		id: NoteId,
		body: &'a NoteBody,
	) -> BoxFuture<'a, notes_providers::Result<()>> {
		Box::pin(notes::update(&self.cfg, credential.as_str(), id, body))
	}

	fn delete<'a>(
		&'a self,
		credential: &'a Credential,
		id: NoteId,
	) -> BoxFuture<'a, notes_providers::Result<()>> {
		Box::pin(notes::delete(&self.cfg, credential.as_str(), id))
	}
}
impl AuthApi for HttpBackend {
	fn authenticate<'a>(
		&'a self,
		mode: AuthMode,
		credentials: &'a AuthCredentials,
	) -> BoxFuture<'a, notes_providers::Result<AuthResponse>> {
		Box::pin(users::authenticate(&self.cfg, mode, credentials))
	}
}
