pub mod notes;
pub mod time_serde;
pub mod token_store;
pub mod users;

mod error;

pub use error::{Error, Result};
pub use token_store::{StoredToken, TokenStore};

use std::time::Duration;

use reqwest::{
	Client, Response,
	header::{AUTHORIZATION, HeaderMap, HeaderName},
};
use serde::Deserialize;
use serde_json::{Map, Value};

pub fn auth_headers(token: &str, default_headers: &Map<String, Value>) -> Result<HeaderMap> {
	let mut headers = default_headers_map(default_headers)?;

	headers.insert(AUTHORIZATION, format!("Bearer {token}").parse()?);

	Ok(headers)
}

pub fn default_headers_map(default_headers: &Map<String, Value>) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	for (key, value) in default_headers {
		let Some(raw) = value.as_str() else {
			return Err(Error::InvalidConfig {
				message: "Default header values must be strings.".to_string(),
			});
		};

		headers.insert(HeaderName::from_bytes(key.as_bytes())?, raw.parse()?);
	}

	Ok(headers)
}

pub(crate) fn client(cfg: &notes_config::Api) -> Result<Client> {
	Ok(Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?)
}

pub(crate) fn endpoint(cfg: &notes_config::Api, path: &str) -> String {
	format!("{}{}", cfg.base_url.trim_end_matches('/'), path)
}

#[derive(Deserialize)]
struct ErrorBody {
	message: Option<String>,
}

/// Passes success responses through and turns everything else into [`Error::Status`].
pub(crate) async fn ensure_success(res: Response) -> Result<Response> {
	let status = res.status();

	if status.is_success() {
		return Ok(res);
	}

	let raw = res.text().await.unwrap_or_default();
	let message = serde_json::from_str::<ErrorBody>(&raw)
		.ok()
		.and_then(|body| body.message)
		.filter(|message| !message.trim().is_empty());

	tracing::warn!(status = status.as_u16(), ?message, "Notes API returned a failure status.");

	Err(Error::Status { status: status.as_u16(), message })
}
