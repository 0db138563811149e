use notes_domain::{DraftError, Locale, Message};

use crate::session::SessionError;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Remote call that failed, used to pick the user-facing message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
	Load,
	Create,
	Update,
	Delete,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
	#[error("Title must be non-empty.")]
	EmptyTitle,
	#[error("Content must be non-empty.")]
	EmptyContent,
	#[error("No session credential is available for the {operation:?} request.")]
	MissingCredential { operation: Operation },
	#[error("Username and password must be non-empty.")]
	MissingAuthFields,
}
impl From<DraftError> for ValidationError {
	fn from(err: DraftError) -> Self {
		match err {
			DraftError::EmptyTitle => Self::EmptyTitle,
			DraftError::EmptyContent => Self::EmptyContent,
		}
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	/// Rejected locally; no request was sent.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	#[error("Failed to acquire a session credential.")]
	Session(#[source] SessionError),
	#[error("Failed to sign out.")]
	SignOut(#[source] SessionError),
	#[error("Notes API {operation:?} request failed.")]
	Transport {
		operation: Operation,
		#[source]
		source: notes_providers::Error,
	},
	#[error("Authentication request failed.")]
	Auth(#[source] notes_providers::Error),
	/// Authentication succeeded but the returned token could not be persisted.
	#[error("Failed to save the login token.")]
	SaveToken(#[source] notes_providers::Error),
}
impl Error {
	pub(crate) fn transport(operation: Operation, source: notes_providers::Error) -> Self {
		Self::Transport { operation, source }
	}

	/// The single message shown to the user for this failure.
	pub fn user_message(&self, locale: Locale) -> String {
		let message = match self {
			Self::Validation(ValidationError::MissingAuthFields) => Message::MissingAuthFields,
			Self::Validation(ValidationError::MissingCredential {
				operation: Operation::Load | Operation::Delete,
			}) => Message::NotSignedIn,
			Self::Validation(_) => Message::EmptyFields,
			Self::Session(_) => Message::TokenFailed,
			Self::SignOut(_) => Message::LogoutFailed,
			Self::SaveToken(_) => Message::TokenSaveFailed,
			Self::Transport { operation: Operation::Load, .. } => Message::LoadFailed,
			Self::Transport { operation: Operation::Create | Operation::Update, .. } =>
				Message::SaveFailed,
			Self::Transport { operation: Operation::Delete, .. } => Message::DeleteFailed,
			Self::Auth(source) => match source {
				notes_providers::Error::Status { message: Some(message), .. } =>
					return message.clone(),
				notes_providers::Error::Status { message: None, .. } => Message::AuthRejected,
				_ => Message::AuthFailed,
			},
		};

		message.text(locale).to_string()
	}

	pub fn is_validation(&self) -> bool {
		matches!(self, Self::Validation(_))
	}
}
