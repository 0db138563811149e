use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned note identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(pub i64);
impl fmt::Display for NoteId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}
impl From<i64> for NoteId {
	fn from(value: i64) -> Self {
		Self(value)
	}
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
	pub id: NoteId,
	pub title: String,
	pub content: String,
}

/// Request payload shared by create and update.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteBody {
	pub title: String,
	pub content: String,
}
