use notes_config::Api;
use notes_domain::{AuthCredentials, AuthMode, AuthResponse};

use crate::{Error, Result, client, default_headers_map, endpoint};

/// Calls `/users/login` or `/users/register`.
///
/// Failure bodies use the same `{token?, message?}` shape as success bodies, so a rejected
/// request surfaces as [`Error::Status`] carrying the server's `message`.
pub async fn authenticate(
	cfg: &Api,
	mode: AuthMode,
	credentials: &AuthCredentials,
) -> Result<AuthResponse> {
	let url = endpoint(cfg, mode.path());

	tracing::debug!(%url, username = %credentials.username, "Authenticating.");

	let res = client(cfg)?
		.post(url)
		.headers(default_headers_map(&cfg.default_headers)?)
		.json(credentials)
		.send()
		.await?;
	let status = res.status();
	let raw = res.text().await?;

	if !status.is_success() {
		let message = serde_json::from_str::<AuthResponse>(&raw)
			.ok()
			.and_then(|body| body.message)
			.filter(|message| !message.trim().is_empty());

		tracing::warn!(status = status.as_u16(), ?message, "Authentication was rejected.");

		return Err(Error::Status { status: status.as_u16(), message });
	}

	Ok(serde_json::from_str(&raw)?)
}
