use crate::note::{Note, NoteBody, NoteId};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftError {
	EmptyTitle,
	EmptyContent,
}

/// The note being composed. `id` is `Some` while editing an existing note.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Draft {
	pub id: Option<NoteId>,
	pub title: String,
	pub content: String,
}
impl Draft {
	pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
		Self { id: None, title: title.into(), content: content.into() }
	}

	pub fn editing(note: &Note) -> Self {
		Self { id: Some(note.id), title: note.title.clone(), content: note.content.clone() }
	}

	pub fn is_update(&self) -> bool {
		self.id.is_some()
	}

	pub fn is_blank(&self) -> bool {
		self.id.is_none() && self.title.is_empty() && self.content.is_empty()
	}

	pub fn clear(&mut self) {
		*self = Self::default();
	}

	/// Only the empty string is rejected; whitespace-only input is sent as typed.
	pub fn validate(&self) -> Result<NoteBody, DraftError> {
		if self.title.is_empty() {
			return Err(DraftError::EmptyTitle);
		}
		if self.content.is_empty() {
			return Err(DraftError::EmptyContent);
		}

		Ok(NoteBody { title: self.title.clone(), content: self.content.clone() })
	}
}
