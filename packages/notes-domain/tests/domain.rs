use notes_domain::{
	AuthCredentials, AuthMode, AuthResponse, Draft, DraftError, Locale, Message, Note, NoteBody,
	NoteId,
};

fn sample_note() -> Note {
	Note { id: NoteId(7), title: "Groceries".to_string(), content: "Milk".to_string() }
}

#[test]
fn draft_rejects_empty_title_before_content() {
	let draft = Draft::new("", "");

	assert_eq!(draft.validate(), Err(DraftError::EmptyTitle));
}

#[test]
fn draft_rejects_empty_content() {
	let draft = Draft::new("Title", "");

	assert_eq!(draft.validate(), Err(DraftError::EmptyContent));
}

#[test]
fn draft_accepts_whitespace_as_typed() {
	let body = Draft::new(" ", "x").validate().expect("Expected draft to be valid.");

	assert_eq!(body.title, " ");
	assert_eq!(body.content, "x");
}

#[test]
fn editing_copies_identifier_and_fields() {
	let note = sample_note();
	let draft = Draft::editing(&note);

	assert!(draft.is_update());
	assert_eq!(draft.id, Some(NoteId(7)));
	assert_eq!(
		draft.validate().expect("Expected draft to be valid."),
		NoteBody { title: note.title, content: note.content }
	);
}

#[test]
fn clear_returns_to_create_mode() {
	let mut draft = Draft::editing(&sample_note());

	draft.clear();

	assert!(draft.is_blank());
	assert!(!draft.is_update());
}

#[test]
fn note_decodes_integer_identifier() {
	let note: Note = serde_json::from_value(serde_json::json!({
		"id": 1,
		"title": "A",
		"content": "B"
	}))
	.expect("Failed to decode note.");

	assert_eq!(note.id, NoteId(1));
	assert_eq!(note.id.to_string(), "1");
}

#[test]
fn auth_response_fields_are_optional() {
	let response: AuthResponse =
		serde_json::from_str(r#"{"message":"User exists"}"#).expect("Failed to decode.");

	assert_eq!(response.token, None);
	assert_eq!(response.message.as_deref(), Some("User exists"));
}

#[test]
fn auth_credentials_debug_hides_password() {
	let credentials = AuthCredentials::new("ana", "hunter2");
	let rendered = format!("{credentials:?}");

	assert!(rendered.contains("ana"));
	assert!(!rendered.contains("hunter2"));
}

#[test]
fn auth_mode_paths_and_toggle() {
	assert_eq!(AuthMode::Login.path(), "/users/login");
	assert_eq!(AuthMode::Register.path(), "/users/register");
	assert_eq!(AuthMode::Login.toggled(), AuthMode::Register);
}

#[test]
fn messages_are_localized() {
	assert_eq!(
		Message::LoadFailed.text(Locale::Id),
		"Gagal mengambil catatan. Silakan coba lagi."
	);
	assert_ne!(Message::LoadFailed.text(Locale::En), Message::LoadFailed.text(Locale::Id));
}
