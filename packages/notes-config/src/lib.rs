mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Api, Auth, Config, Service};

use std::{env, fs, path::Path};

/// Environment variable that replaces `api.base_url` when set to a non-blank value.
pub const BASE_URL_ENV: &str = "NOTES_API_BASE_URL";

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;
	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	apply_env_overrides(&mut cfg, env::var(BASE_URL_ENV).ok().as_deref());
	normalize(&mut cfg);
	validate(&cfg)?;

	Ok(cfg)
}

pub fn apply_env_overrides(cfg: &mut Config, base_url: Option<&str>) {
	if let Some(base_url) = base_url.map(str::trim).filter(|value| !value.is_empty()) {
		cfg.api.base_url = base_url.to_string();
	}
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if !matches!(cfg.service.locale.as_str(), "en" | "id") {
		return Err(Error::Validation {
			message: "service.locale must be one of en or id.".to_string(),
		});
	}

	let base_url = cfg.api.base_url.trim();

	if base_url.is_empty() {
		return Err(Error::Validation { message: "api.base_url must be non-empty.".to_string() });
	}
	if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
		return Err(Error::Validation {
			message: "api.base_url must start with http:// or https://.".to_string(),
		});
	}
	if cfg.api.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "api.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.api.default_headers.values().any(|value| !value.is_string()) {
		return Err(Error::Validation {
			message: "Default header values must be strings.".to_string(),
		});
	}
	if cfg.auth.token_path.as_os_str().is_empty() {
		return Err(Error::Validation {
			message: "auth.token_path must be non-empty.".to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	let trimmed = cfg.api.base_url.trim().trim_end_matches('/');

	cfg.api.base_url = trimmed.to_string();
	cfg.service.locale = cfg.service.locale.trim().to_ascii_lowercase();
}
