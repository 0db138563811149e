//! In-memory stand-in for the remote Notes API, served over real HTTP on a loopback port.

mod error;

pub use error::{Error, Result};

use std::{
	collections::{BTreeMap, HashMap, VecDeque},
	env,
	net::SocketAddr,
	path::PathBuf,
	sync::{
		Arc, Mutex, MutexGuard,
		atomic::{AtomicU64, AtomicUsize, Ordering},
	},
};

use axum::{
	Json, Router,
	extract::{Path, State},
	http::{HeaderMap, StatusCode, header::AUTHORIZATION},
	response::{IntoResponse, Response},
	routing::{get, post, put},
};
use serde::Deserialize;
use serde_json::{Map, json};
use tokio::{net::TcpListener, task::JoinHandle};
use uuid::Uuid;

use notes_domain::{Note, NoteBody, NoteId};

/// Endpoint selector for [`FakeNotesApi::fail_next`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
	Register,
	Login,
	List,
	Create,
	Update,
	Delete,
}

#[derive(Default)]
struct Inner {
	users: HashMap<String, String>,
	tokens: HashMap<String, String>,
	notes: BTreeMap<i64, (String, Note)>,
	next_id: i64,
	failures: HashMap<Route, VecDeque<u16>>,
}

#[derive(Clone, Default)]
struct FakeState {
	inner: Arc<Mutex<Inner>>,
	requests: Arc<AtomicUsize>,
}
impl FakeState {
	fn lock(&self) -> MutexGuard<'_, Inner> {
		self.inner.lock().unwrap_or_else(|err| err.into_inner())
	}

	/// Counts the request and pops a scheduled failure for `route`, if any.
	fn begin(&self, route: Route) -> Option<Response> {
		self.requests.fetch_add(1, Ordering::SeqCst);

		let status = self.lock().failures.get_mut(&route).and_then(VecDeque::pop_front)?;
		let status = StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

		Some(message(status, "Injected failure"))
	}

	fn owner(&self, headers: &HeaderMap) -> Option<String> {
		let raw = headers.get(AUTHORIZATION)?.to_str().ok()?;
		let token = raw.strip_prefix("Bearer ")?;

		self.lock().tokens.get(token).cloned()
	}

	fn issue_token(&self, username: &str) -> String {
		let token = Uuid::new_v4().simple().to_string();

		self.lock().tokens.insert(token.clone(), username.to_string());

		token
	}
}

pub struct FakeNotesApi {
	addr: SocketAddr,
	state: FakeState,
	handle: JoinHandle<()>,
}
impl FakeNotesApi {
	pub async fn spawn() -> Result<Self> {
		let state = FakeState::default();
		let app = router(state.clone());
		let listener = TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let handle = tokio::spawn(async move {
			if let Err(err) = axum::serve(listener, app).await {
				tracing::error!(error = %err, "Fake Notes API stopped.");
			}
		});

		Ok(Self { addr, state, handle })
	}

	pub fn base_url(&self) -> String {
		format!("http://{}", self.addr)
	}

	pub fn api_config(&self) -> notes_config::Api {
		notes_config::Api {
			base_url: self.base_url(),
			timeout_ms: 5_000,
			default_headers: Map::new(),
		}
	}

	/// Requests received so far, including rejected ones.
	pub fn request_count(&self) -> usize {
		self.state.requests.load(Ordering::SeqCst)
	}

	/// Makes the next request to `route` fail with `status`. Calls queue up.
	pub fn fail_next(&self, route: Route, status: u16) {
		self.state.lock().failures.entry(route).or_default().push_back(status);
	}

	pub fn register_user(&self, username: &str, password: &str) {
		self.state.lock().users.insert(username.to_string(), password.to_string());
	}

	/// Registers `username` if needed and returns a fresh bearer token for it.
	pub fn issue_token(&self, username: &str) -> String {
		self.state.lock().users.entry(username.to_string()).or_default();
		self.state.issue_token(username)
	}

	pub fn notes_for(&self, username: &str) -> Vec<Note> {
		self.state
			.lock()
			.notes
			.values()
			.filter(|(owner, _)| owner == username)
			.map(|(_, note)| note.clone())
			.collect()
	}
}
impl Drop for FakeNotesApi {
	fn drop(&mut self) {
		self.handle.abort();
	}
}

/// A unique, not yet existing file path under the system temp directory.
pub fn temp_path(prefix: &str, file_name: &str) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let mut path = env::temp_dir();

	path.push(format!("{prefix}_{}_{ordinal}_{}", std::process::id(), Uuid::new_v4().simple()));
	path.push(file_name);

	path
}

fn router(state: FakeState) -> Router {
	Router::new()
		.route("/users/register", post(register))
		.route("/users/login", post(login))
		.route("/notes", get(list_notes).post(create_note))
		.route("/notes/{id}", put(update_note).delete(delete_note))
		.with_state(state)
}

#[derive(Deserialize)]
struct UserPayload {
	#[serde(default)]
	username: String,
	#[serde(default)]
	password: String,
}

fn message(status: StatusCode, text: &str) -> Response {
	(status, Json(json!({ "message": text }))).into_response()
}

fn unauthorized() -> Response {
	message(StatusCode::UNAUTHORIZED, "Unauthorized")
}

async fn register(State(state): State<FakeState>, Json(payload): Json<UserPayload>) -> Response {
	if let Some(failure) = state.begin(Route::Register) {
		return failure;
	}
	if payload.username.is_empty() || payload.password.is_empty() {
		return message(StatusCode::BAD_REQUEST, "Username and password are required");
	}

	{
		let mut inner = state.lock();

		if inner.users.contains_key(&payload.username) {
			return message(StatusCode::CONFLICT, "Username already exists");
		}

		inner.users.insert(payload.username.clone(), payload.password);
	}

	let token = state.issue_token(&payload.username);

	(StatusCode::CREATED, Json(json!({ "token": token, "message": "User registered" })))
		.into_response()
}

async fn login(State(state): State<FakeState>, Json(payload): Json<UserPayload>) -> Response {
	if let Some(failure) = state.begin(Route::Login) {
		return failure;
	}

	let valid = state
		.lock()
		.users
		.get(&payload.username)
		.map(|password| !password.is_empty() && password == &payload.password)
		.unwrap_or(false);

	if !valid {
		return message(StatusCode::UNAUTHORIZED, "Invalid username or password");
	}

	let token = state.issue_token(&payload.username);

	Json(json!({ "token": token })).into_response()
}

async fn list_notes(State(state): State<FakeState>, headers: HeaderMap) -> Response {
	if let Some(failure) = state.begin(Route::List) {
		return failure;
	}

	let Some(owner) = state.owner(&headers) else {
		return unauthorized();
	};
	let notes = state
		.lock()
		.notes
		.values()
		.filter(|(note_owner, _)| note_owner == &owner)
		.map(|(_, note)| note.clone())
		.collect::<Vec<_>>();

	Json(notes).into_response()
}

async fn create_note(
	State(state): State<FakeState>,
	headers: HeaderMap,
	Json(body): Json<NoteBody>,
) -> Response {
	if let Some(failure) = state.begin(Route::Create) {
		return failure;
	}

	let Some(owner) = state.owner(&headers) else {
		return unauthorized();
	};

	if body.title.is_empty() || body.content.is_empty() {
		return message(StatusCode::BAD_REQUEST, "Title and content are required");
	}

	let mut inner = state.lock();

	inner.next_id += 1;

	let note = Note { id: NoteId(inner.next_id), title: body.title, content: body.content };

	inner.notes.insert(note.id.0, (owner, note.clone()));

	(StatusCode::CREATED, Json(note)).into_response()
}

async fn update_note(
	State(state): State<FakeState>,
	headers: HeaderMap,
	Path(id): Path<i64>,
	Json(body): Json<NoteBody>,
) -> Response {
	if let Some(failure) = state.begin(Route::Update) {
		return failure;
	}

	let Some(owner) = state.owner(&headers) else {
		return unauthorized();
	};
	let mut inner = state.lock();
	let Some((note_owner, note)) = inner.notes.get_mut(&id) else {
		return message(StatusCode::NOT_FOUND, "Note not found");
	};

	if note_owner != &owner {
		return message(StatusCode::NOT_FOUND, "Note not found");
	}

	note.title = body.title;
	note.content = body.content;

	Json(note.clone()).into_response()
}

async fn delete_note(
	State(state): State<FakeState>,
	headers: HeaderMap,
	Path(id): Path<i64>,
) -> Response {
	if let Some(failure) = state.begin(Route::Delete) {
		return failure;
	}

	let Some(owner) = state.owner(&headers) else {
		return unauthorized();
	};
	let mut inner = state.lock();
	let owned = inner.notes.get(&id).map(|(note_owner, _)| note_owner == &owner).unwrap_or(false);

	if !owned {
		return message(StatusCode::NOT_FOUND, "Note not found");
	}

	inner.notes.remove(&id);

	StatusCode::NO_CONTENT.into_response()
}
