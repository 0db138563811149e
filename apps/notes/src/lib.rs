pub mod render;

use std::{
	io::{self, Write},
	path::PathBuf,
	process::ExitCode,
	sync::Arc,
};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use notes_domain::{AuthCredentials, AuthMode, Locale, Message, NoteId};
use notes_providers::TokenStore;
use notes_service::{
	Activation, AuthEntry, Credential, HttpBackend, NotesController, SaveOutcome, SessionProvider,
	StaticSession, StoredTokenSession,
};

#[derive(Debug, Parser)]
#[command(
	version = notes_cli::VERSION,
	rename_all = "kebab",
	styles = notes_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Bearer token to use instead of the one saved by `login`.
	#[arg(long, env = "NOTES_TOKEN", hide_env_values = true, global = true)]
	pub token: Option<String>,
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
	/// Create an account and keep the returned token.
	Register(AuthArgs),
	/// Log in and keep the returned token.
	Login(AuthArgs),
	/// Forget the saved token.
	Logout,
	/// Show all notes.
	List {
		#[arg(long)]
		json: bool,
	},
	/// Add a note.
	Add {
		#[arg(long, short = 't')]
		title: String,
		#[arg(long, short = 'b')]
		content: String,
	},
	/// Change the title and/or content of a note.
	Edit {
		id: i64,
		#[arg(long, short = 't')]
		title: Option<String>,
		#[arg(long, short = 'b')]
		content: Option<String>,
	},
	/// Delete a note.
	Delete { id: i64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
	Success,
	/// A user-facing failure was reported.
	Failure,
}
impl From<Outcome> for ExitCode {
	fn from(outcome: Outcome) -> Self {
		match outcome {
			Outcome::Success => Self::SUCCESS,
			Outcome::Failure => Self::FAILURE,
		}
	}
}

/// The commands that run against an activated notes session.
enum NoteAction {
	List { json: bool },
	Add { title: String, content: String },
	Edit { id: NoteId, title: Option<String>, content: Option<String> },
	Delete { id: NoteId },
}

#[derive(Debug, clap::Args)]
pub struct AuthArgs {
	#[arg(long, short = 'u', env = "NOTES_USERNAME")]
	pub username: String,
	#[arg(long, short = 'p', env = "NOTES_PASSWORD", hide_env_values = true)]
	pub password: String,
}

pub async fn run(args: Args) -> color_eyre::Result<ExitCode> {
	let config = notes_config::load(&args.config)?;

	init_tracing(&config);

	let stdout = io::stdout();
	let stderr = io::stderr();

	let outcome =
		execute(&config, args.token, args.command, &mut stdout.lock(), &mut stderr.lock()).await?;

	Ok(outcome.into())
}

/// Runs one command. User-facing failures go to `err` and yield a failing exit code.
pub async fn execute<O, E>(
	config: &notes_config::Config,
	token: Option<String>,
	command: Command,
	out: &mut O,
	err: &mut E,
) -> color_eyre::Result<Outcome>
where
	O: Write,
	E: Write,
{
	let locale = Locale::from_code(&config.service.locale);
	let backend = Arc::new(HttpBackend::new(config.api.clone()));
	let store = TokenStore::new(config.auth.token_path.clone());

	let action = match command {
		Command::Register(auth) =>
			return authenticate(backend, store, locale, AuthMode::Register, auth, out, err).await,
		Command::Login(auth) =>
			return authenticate(backend, store, locale, AuthMode::Login, auth, out, err).await,
		Command::Logout => {
			// Always the token file: a `--token` override has nothing to forget.
			let mut controller = NotesController::new(backend, locale);

			return logout(&mut controller, &StoredTokenSession::new(store), out, err).await;
		},
		Command::List { json } => NoteAction::List { json },
		Command::Add { title, content } => NoteAction::Add { title, content },
		Command::Edit { id, title, content } => NoteAction::Edit { id: NoteId(id), title, content },
		Command::Delete { id } => NoteAction::Delete { id: NoteId(id) },
	};
	let session: Box<dyn SessionProvider> = match token {
		Some(token) => Box::new(StaticSession::new(Some(Credential::new(token)))),
		None => Box::new(StoredTokenSession::new(store)),
	};
	let mut controller = NotesController::new(backend, locale);

	notes_action(&mut controller, session.as_ref(), action, out, err).await
}

async fn authenticate<O, E>(
	backend: Arc<HttpBackend>,
	store: TokenStore,
	locale: Locale,
	mode: AuthMode,
	auth: AuthArgs,
	out: &mut O,
	err: &mut E,
) -> color_eyre::Result<Outcome>
where
	O: Write,
	E: Write,
{
	let mut entry = AuthEntry::new(backend, store, locale).with_mode(mode);
	let credentials = AuthCredentials::new(auth.username, auth.password);

	if entry.authenticate(&credentials).await.is_err() {
		return failure(err, entry.error());
	}

	let done = match mode {
		AuthMode::Login => Message::SignedIn,
		AuthMode::Register => Message::Registered,
	};

	render::message(out, done, locale)?;

	Ok(Outcome::Success)
}

async fn logout<O, E>(
	controller: &mut NotesController,
	session: &dyn SessionProvider,
	out: &mut O,
	err: &mut E,
) -> color_eyre::Result<Outcome>
where
	O: Write,
	E: Write,
{
	if controller.sign_out(session).await.is_err() {
		return failure(err, controller.error());
	}

	render::message(out, Message::SignedOut, controller.locale())?;

	Ok(Outcome::Success)
}

async fn notes_action<O, E>(
	controller: &mut NotesController,
	session: &dyn SessionProvider,
	action: NoteAction,
	out: &mut O,
	err: &mut E,
) -> color_eyre::Result<Outcome>
where
	O: Write,
	E: Write,
{
	let locale = controller.locale();

	match controller.activate(session).await {
		Ok(Activation::Ready) => {},
		Ok(Activation::Redirect) => {
			render::message(err, Message::NotSignedIn, locale)?;

			return Ok(Outcome::Failure);
		},
		Err(_) => return failure(err, controller.error()),
	}

	let done = match action {
		NoteAction::List { json } => {
			if json {
				render::notes_json(out, controller.notes())?;
			} else {
				render::notes(out, controller.notes(), locale)?;
			}

			return Ok(Outcome::Success);
		},
		NoteAction::Add { title, content } => {
			controller.set_title(title);
			controller.set_content(content);

			controller.save().await.map(|outcome| match outcome {
				SaveOutcome::Created(_) => Message::Created,
				SaveOutcome::Updated(_) => Message::Updated,
			})
		},
		NoteAction::Edit { id, title, content } => {
			if !controller.begin_edit_by_id(id) {
				render::message(err, Message::UnknownNote, locale)?;

				return Ok(Outcome::Failure);
			}
			if let Some(title) = title {
				controller.set_title(title);
			}
			if let Some(content) = content {
				controller.set_content(content);
			}

			controller.save().await.map(|_| Message::Updated)
		},
		NoteAction::Delete { id } => controller.remove(id).await.map(|()| Message::Deleted),
	};

	match done {
		Ok(message) => {
			render::message(out, message, locale)?;
			render::notes(out, controller.notes(), locale)?;

			Ok(Outcome::Success)
		},
		Err(_) => failure(err, controller.error()),
	}
}

fn failure<E>(err: &mut E, message: Option<&str>) -> color_eyre::Result<Outcome>
where
	E: Write,
{
	if let Some(message) = message {
		writeln!(err, "{message}")?;
	}

	Ok(Outcome::Failure)
}

fn init_tracing(config: &notes_config::Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
