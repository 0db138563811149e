//! Authorized CRUD calls against the `/notes` collection.

use notes_config::Api;
use notes_domain::{Note, NoteBody, NoteId};

use crate::{Result, auth_headers, client, endpoint, ensure_success};

pub async fn list(cfg: &Api, token: &str) -> Result<Vec<Note>> {
	let url = endpoint(cfg, "/notes");

	tracing::debug!(%url, "Fetching notes.");

	let res = client(cfg)?
		.get(url)
		.headers(auth_headers(token, &cfg.default_headers)?)
		.send()
		.await?;
	let notes = ensure_success(res).await?.json::<Vec<Note>>().await?;

	tracing::debug!(count = notes.len(), "Fetched notes.");

	Ok(notes)
}

pub async fn create(cfg: &Api, token: &str, body: &NoteBody) -> Result<Note> {
	let url = endpoint(cfg, "/notes");

	tracing::debug!(%url, "Creating note.");

	let res = client(cfg)?
		.post(url)
		.headers(auth_headers(token, &cfg.default_headers)?)
		.json(body)
		.send()
		.await?;

	Ok(ensure_success(res).await?.json::<Note>().await?)
}

/// The response body is ignored; callers reload the collection instead.
pub async fn update(cfg: &Api, token: &str, id: NoteId, body: &NoteBody) -> Result<()> {
	let url = endpoint(cfg, &format!("/notes/{id}"));

	tracing::debug!(%url, "Updating note.");

	let res = client(cfg)?
		.put(url)
		.headers(auth_headers(token, &cfg.default_headers)?)
		.json(body)
		.send()
		.await?;

	ensure_success(res).await?;

	Ok(())
}

pub async fn delete(cfg: &Api, token: &str, id: NoteId) -> Result<()> {
	let url = endpoint(cfg, &format!("/notes/{id}"));

	tracing::debug!(%url, "Deleting note.");

	let res = client(cfg)?
		.delete(url)
		.headers(auth_headers(token, &cfg.default_headers)?)
		.send()
		.await?;

	ensure_success(res).await?;

	Ok(())
}
