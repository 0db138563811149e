use clap::Parser;

use notes::{Args, Command, Outcome};
use notes_config::{Auth, Config, Service};
use notes_testkit::{FakeNotesApi, Route};

fn test_config(server: &FakeNotesApi, locale: &str) -> Config {
	Config {
		service: Service { log_level: "warn".to_string(), locale: locale.to_string() },
		api: server.api_config(),
		auth: Auth { token_path: notes_testkit::temp_path("notes_cli", "token.json") },
	}
}

fn parse(argv: &[&str]) -> Command {
	Args::try_parse_from(argv).expect("Failed to parse arguments.").command
}

async fn exec(config: &Config, argv: &[&str]) -> (Outcome, String, String) {
	let mut out = Vec::new();
	let mut err = Vec::new();
	let outcome = notes::execute(config, None, parse(argv), &mut out, &mut err)
		.await
		.expect("Command failed unexpectedly.");

	(
		outcome,
		String::from_utf8(out).expect("stdout must be UTF-8."),
		String::from_utf8(err).expect("stderr must be UTF-8."),
	)
}

#[test]
fn parses_edit_with_optional_fields() {
	let command = parse(&["notes", "-c", "notes.toml", "edit", "3", "--title", "New"]);

	match command {
		Command::Edit { id, title, content } => {
			assert_eq!(id, 3);
			assert_eq!(title.as_deref(), Some("New"));
			assert_eq!(content, None);
		},
		command => panic!("Unexpected command: {command:?}"),
	}
}

#[test]
fn add_requires_title_and_content_flags() {
	assert!(Args::try_parse_from(["notes", "-c", "notes.toml", "add", "--title", "A"]).is_err());
}

#[tokio::test]
async fn notes_commands_redirect_when_signed_out() {
	let server = FakeNotesApi::spawn().await.expect("Failed to spawn fake API.");
	let config = test_config(&server, "en");
	let (outcome, out, err) = exec(&config, &["notes", "-c", "x", "list"]).await;

	assert_eq!(outcome, Outcome::Failure);
	assert!(out.is_empty());
	assert!(err.contains("notes login"), "Unexpected stderr: {err}");
	assert_eq!(server.request_count(), 0);
}

#[tokio::test]
async fn register_add_edit_delete_logout() {
	let server = FakeNotesApi::spawn().await.expect("Failed to spawn fake API.");
	let config = test_config(&server, "en");
	let (outcome, ..) =
		exec(&config, &["notes", "-c", "x", "register", "-u", "ana", "-p", "pw"]).await;

	assert_eq!(outcome, Outcome::Success);

	let (outcome, out, _) =
		exec(&config, &["notes", "-c", "x", "add", "--title", "A", "--content", "B"]).await;

	assert_eq!(outcome, Outcome::Success);
	assert!(out.contains("#1 A"), "Unexpected stdout: {out}");

	let (outcome, out, _) = exec(&config, &["notes", "-c", "x", "edit", "1", "-t", "A2"]).await;

	assert_eq!(outcome, Outcome::Success);
	assert!(out.contains("#1 A2"), "Unexpected stdout: {out}");

	let (outcome, out, _) = exec(&config, &["notes", "-c", "x", "list", "--json"]).await;
	let listed: serde_json::Value = serde_json::from_str(&out).expect("Expected JSON output.");

	assert_eq!(outcome, Outcome::Success);
	assert_eq!(listed, serde_json::json!([{ "id": 1, "title": "A2", "content": "B" }]));

	let (outcome, out, _) = exec(&config, &["notes", "-c", "x", "delete", "1"]).await;

	assert_eq!(outcome, Outcome::Success);
	assert!(out.contains("No notes yet."), "Unexpected stdout: {out}");

	let (outcome, ..) = exec(&config, &["notes", "-c", "x", "logout"]).await;

	assert_eq!(outcome, Outcome::Success);

	let (outcome, ..) = exec(&config, &["notes", "-c", "x", "list"]).await;

	assert_eq!(outcome, Outcome::Failure);
}

#[tokio::test]
async fn empty_title_reports_localized_validation_message() {
	let server = FakeNotesApi::spawn().await.expect("Failed to spawn fake API.");
	let config = test_config(&server, "id");

	server.register_user("budi", "pw");

	let (outcome, ..) = exec(&config, &["notes", "-c", "x", "login", "-u", "budi", "-p", "pw"]).await;

	assert_eq!(outcome, Outcome::Success);

	let requests = server.request_count();
	let (outcome, _, err) =
		exec(&config, &["notes", "-c", "x", "add", "--title", "", "--content", "B"]).await;

	assert_eq!(outcome, Outcome::Failure);
	assert_eq!(err.trim(), "Judul dan konten tidak boleh kosong.");
	// Only the activation reload reached the server.
	assert_eq!(server.request_count(), requests + 1);
}

#[tokio::test]
async fn failed_delete_reports_message() {
	let server = FakeNotesApi::spawn().await.expect("Failed to spawn fake API.");
	let config = test_config(&server, "en");
	let token = server.issue_token("citra");
	let mut out = Vec::new();
	let mut err = Vec::new();

	server.fail_next(Route::Delete, 500);

	let outcome = notes::execute(
		&config,
		Some(token),
		parse(&["notes", "-c", "x", "delete", "1"]),
		&mut out,
		&mut err,
	)
	.await
	.expect("Command failed unexpectedly.");

	assert_eq!(outcome, Outcome::Failure);
	assert_eq!(
		String::from_utf8(err).expect("stderr must be UTF-8.").trim(),
		"Failed to delete the note. Please try again."
	);
}

#[tokio::test]
async fn editing_unknown_note_fails_without_write() {
	let server = FakeNotesApi::spawn().await.expect("Failed to spawn fake API.");
	let config = test_config(&server, "en");
	let token = server.issue_token("dewi");
	let mut out = Vec::new();
	let mut err = Vec::new();
	let outcome = notes::execute(
		&config,
		Some(token),
		parse(&["notes", "-c", "x", "edit", "99", "-t", "x"]),
		&mut out,
		&mut err,
	)
	.await
	.expect("Command failed unexpectedly.");

	assert_eq!(outcome, Outcome::Failure);
	assert_eq!(server.request_count(), 1);
}

#[tokio::test]
async fn logout_with_token_override_still_clears_saved_token() {
	let server = FakeNotesApi::spawn().await.expect("Failed to spawn fake API.");
	let config = test_config(&server, "en");
	let (outcome, ..) =
		exec(&config, &["notes", "-c", "x", "register", "-u", "fajar", "-p", "pw"]).await;

	assert_eq!(outcome, Outcome::Success);
	assert!(config.auth.token_path.exists());

	let mut out = Vec::new();
	let mut err = Vec::new();
	let outcome = notes::execute(
		&config,
		Some("other-token".to_string()),
		parse(&["notes", "-c", "x", "logout"]),
		&mut out,
		&mut err,
	)
	.await
	.expect("Command failed unexpectedly.");

	assert_eq!(outcome, Outcome::Success);
	assert!(!config.auth.token_path.exists());
}
