use std::path::PathBuf;

use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub api: Api,
	pub auth: Auth,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	pub log_level: String,
	/// One of "en" or "id". Selects the language of user-facing messages.
	#[serde(default = "default_locale")]
	pub locale: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Api {
	pub base_url: String,
	#[serde(default = "default_timeout_ms")]
	pub timeout_ms: u64,
	#[serde(default)]
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Auth {
	/// File holding the token returned by `/users/login` or `/users/register`.
	pub token_path: PathBuf,
}

fn default_locale() -> String {
	"en".to_string()
}

fn default_timeout_ms() -> u64 {
	10_000
}
