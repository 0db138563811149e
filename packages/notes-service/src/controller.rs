//! The notes screen: session activation, the cached collection, and the editing draft.
//!
//! Every mutation is followed by a full reload, so the cache always equals one server
//! snapshot. A failed call records a localized message in [`NotesController::error`] and
//! leaves the cache as it was.

use std::sync::Arc;

use notes_domain::{Draft, Locale, Note, NoteId};

use crate::{
	Error, NotesApi, Operation, Result, ValidationError,
	session::{Credential, SessionError, SessionProvider},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScreenState {
	Unauthenticated,
	Authenticating,
	Ready,
	Mutating,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Activation {
	Ready,
	/// No identity is signed in; the caller should send the user to the login entry.
	Redirect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
	Created(NoteId),
	Updated(NoteId),
}

pub struct NotesController {
	api: Arc<dyn NotesApi>,
	locale: Locale,
	state: ScreenState,
	credential: Option<Credential>,
	notes: Vec<Note>,
	draft: Draft,
	error: Option<String>,
	loading: bool,
}
impl NotesController {
	pub fn new(api: Arc<dyn NotesApi>, locale: Locale) -> Self {
		Self {
			api,
			locale,
			state: ScreenState::Unauthenticated,
			credential: None,
			notes: Vec::new(),
			draft: Draft::default(),
			error: None,
			loading: false,
		}
	}

	pub fn state(&self) -> ScreenState {
		self.state
	}

	pub fn notes(&self) -> &[Note] {
		&self.notes
	}

	pub fn find(&self, id: NoteId) -> Option<&Note> {
		self.notes.iter().find(|note| note.id == id)
	}

	pub fn draft(&self) -> &Draft {
		&self.draft
	}

	pub fn set_title(&mut self, title: impl Into<String>) {
		self.draft.title = title.into();
	}

	pub fn set_content(&mut self, content: impl Into<String>) {
		self.draft.content = content.into();
	}

	/// Localized message of the most recent failure, cleared when the next operation starts.
	pub fn error(&self) -> Option<&str> {
		self.error.as_deref()
	}

	pub fn is_loading(&self) -> bool {
		self.loading
	}

	pub fn credential(&self) -> Option<&Credential> {
		self.credential.as_ref()
	}

	pub fn locale(&self) -> Locale {
		self.locale
	}

	/// Acquires a credential for this screen visit and loads the collection with it.
	pub async fn activate(&mut self, session: &dyn SessionProvider) -> Result<Activation> {
		self.error = None;
		self.state = ScreenState::Authenticating;

		let credential = match session.acquire().await {
			Ok(credential) => credential,
			Err(SessionError::SignedOut) => {
				tracing::info!("No signed-in identity; redirecting to login.");

				self.credential = None;
				self.state = ScreenState::Unauthenticated;

				return Ok(Activation::Redirect);
			},
			Err(err) => {
				self.credential = None;
				self.state = ScreenState::Unauthenticated;

				return Err(self.fail(Error::Session(err)));
			},
		};

		self.credential = Some(credential.clone());
		self.state = ScreenState::Ready;
		self.load(&credential).await?;

		Ok(Activation::Ready)
	}

	/// Replaces the whole cache with the server's collection. On failure the cache is untouched.
	pub async fn load(&mut self, credential: &Credential) -> Result<()> {
		self.error = None;
		self.loading = true;

		let result = self.api.list(credential).await;

		self.loading = false;

		match result {
			Ok(notes) => {
				tracing::debug!(count = notes.len(), "Replaced cached notes.");

				self.notes = notes;

				Ok(())
			},
			Err(source) => Err(self.fail(Error::transport(Operation::Load, source))),
		}
	}

	/// [`Self::load`] with the credential acquired at activation.
	pub async fn reload(&mut self) -> Result<()> {
		let credential = self.require_credential(Operation::Load)?;

		self.load(&credential).await
	}

	/// Creates or updates the draft, then reloads.
	///
	/// Empty fields or a missing credential fail before any request is sent. On a failed
	/// request the draft is kept so the input is not lost.
	pub async fn save(&mut self) -> Result<SaveOutcome> {
		let body = match self.draft.validate() {
			Ok(body) => body,
			Err(err) => return Err(self.fail(ValidationError::from(err).into())),
		};
		let operation = if self.draft.is_update() { Operation::Update } else { Operation::Create };
		let credential = self.require_credential(operation)?;

		self.error = None;
		self.state = ScreenState::Mutating;

		let result = match self.draft.id {
			Some(id) => self
				.api
				.update(&credential, id, &body)
				.await
				.map(|()| SaveOutcome::Updated(id))
				.map_err(|source| Error::transport(Operation::Update, source)),
			None => self
				.api
				.create(&credential, &body)
				.await
				.map(|note| SaveOutcome::Created(note.id))
				.map_err(|source| Error::transport(Operation::Create, source)),
		};
		let outcome = match result {
			Ok(outcome) => outcome,
			Err(err) => {
				self.state = ScreenState::Ready;

				return Err(self.fail(err));
			},
		};

		tracing::info!(?outcome, "Saved note.");

		self.draft.clear();

		let reloaded = self.load(&credential).await;

		self.state = ScreenState::Ready;

		reloaded.map(|()| outcome)
	}

	pub async fn remove(&mut self, id: NoteId) -> Result<()> {
		let credential = self.require_credential(Operation::Delete)?;

		self.error = None;
		self.state = ScreenState::Mutating;

		if let Err(source) = self.api.delete(&credential, id).await {
			self.state = ScreenState::Ready;

			return Err(self.fail(Error::transport(Operation::Delete, source)));
		}

		tracing::info!(%id, "Deleted note.");

		let reloaded = self.load(&credential).await;

		self.state = ScreenState::Ready;

		reloaded
	}

	pub fn begin_edit(&mut self, note: &Note) {
		self.draft = Draft::editing(note);
	}

	/// Looks `id` up in the cache and starts editing it. Returns `false` when it is not cached.
	pub fn begin_edit_by_id(&mut self, id: NoteId) -> bool {
		let Some(note) = self.find(id).cloned() else {
			return false;
		};

		self.begin_edit(&note);

		true
	}

	pub fn cancel_edit(&mut self) {
		self.draft.clear();
	}

	/// Forgets the identity and everything cached for it.
	pub async fn sign_out(&mut self, session: &dyn SessionProvider) -> Result<()> {
		self.error = None;

		if let Err(err) = session.sign_out().await {
			return Err(self.fail(Error::SignOut(err)));
		}

		self.credential = None;
		self.notes.clear();
		self.draft.clear();
		self.state = ScreenState::Unauthenticated;

		Ok(())
	}

	fn require_credential(&mut self, operation: Operation) -> Result<Credential> {
		match self.credential.clone() {
			Some(credential) => Ok(credential),
			None => Err(self.fail(ValidationError::MissingCredential { operation }.into())),
		}
	}

	fn fail(&mut self, err: Error) -> Error {
		tracing::warn!(error = %err, "Notes operation failed.");

		self.error = Some(err.user_message(self.locale));

		err
	}
}
