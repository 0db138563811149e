use std::{
	env, fs,
	path::PathBuf,
	sync::atomic::{AtomicU64, Ordering},
	time::{SystemTime, UNIX_EPOCH},
};

use toml::Value;

use notes_config::{Config, Error};

const SAMPLE_CONFIG_TEMPLATE_TOML: &str = include_str!("fixtures/sample_config.template.toml");

fn sample_toml() -> String {
	SAMPLE_CONFIG_TEMPLATE_TOML.replace("REPLACE_ME", "token.json")
}

fn sample_toml_with_api(base_url: &str, timeout_ms: i64) -> String {
	let mut value: Value = toml::from_str(&sample_toml()).expect("Failed to parse template config.");
	let root = value.as_table_mut().expect("Template config must be a table.");
	let api = root
		.get_mut("api")
		.and_then(Value::as_table_mut)
		.expect("Template config must include [api].");

	api.insert("base_url".to_string(), Value::String(base_url.to_string()));
	api.insert("timeout_ms".to_string(), Value::Integer(timeout_ms));

	toml::to_string(&value).expect("Failed to render template config.")
}

fn write_temp_config(payload: String) -> PathBuf {
	static COUNTER: AtomicU64 = AtomicU64::new(0);

	let nanos = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.expect("System time must be valid.")
		.as_nanos();
	let ordinal = COUNTER.fetch_add(1, Ordering::SeqCst);
	let pid = std::process::id();
	let mut path = env::temp_dir();

	path.push(format!("notes_config_test_{nanos}_{pid}_{ordinal}.toml"));

	fs::write(&path, payload).expect("Failed to write test config.");

	path
}

fn base_config() -> Config {
	toml::from_str(&sample_toml()).expect("Failed to parse test config.")
}

#[test]
fn load_strips_trailing_slash_from_base_url() {
	let path = write_temp_config(sample_toml());
	let result = notes_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let cfg = result.expect("Expected sample config to load.");

	assert!(!cfg.api.base_url.ends_with('/'), "Unexpected base_url: {}", cfg.api.base_url);
	assert_eq!(cfg.api.timeout_ms, 2_500);
	assert_eq!(cfg.service.locale, "id");
}

#[test]
fn timeout_must_be_positive() {
	let path = write_temp_config(sample_toml_with_api("http://localhost:8080", 0));
	let result = notes_config::load(&path);

	fs::remove_file(&path).expect("Failed to remove test config.");

	let err = result.expect_err("Expected timeout validation error.");

	assert!(
		err.to_string().contains("api.timeout_ms must be greater than zero."),
		"Unexpected error: {err}"
	);
}

#[test]
fn base_url_requires_http_scheme() {
	let mut cfg = base_config();

	cfg.api.base_url = "localhost:8080".to_string();

	let err = notes_config::validate(&cfg).expect_err("Expected scheme validation error.");

	assert!(
		err.to_string().contains("api.base_url must start with http:// or https://."),
		"Unexpected error: {err}"
	);
}

#[test]
fn base_url_must_not_be_blank() {
	let mut cfg = base_config();

	cfg.api.base_url = "   ".to_string();

	let err = notes_config::validate(&cfg).expect_err("Expected blank base_url error.");

	assert!(err.to_string().contains("api.base_url must be non-empty."), "Unexpected error: {err}");
}

#[test]
fn env_override_replaces_base_url() {
	let mut cfg = base_config();

	notes_config::apply_env_overrides(&mut cfg, Some(" https://notes.example.com "));

	assert_eq!(cfg.api.base_url, "https://notes.example.com");
}

#[test]
fn blank_env_override_is_ignored() {
	let mut cfg = base_config();
	let before = cfg.api.base_url.clone();

	notes_config::apply_env_overrides(&mut cfg, Some("  "));
	notes_config::apply_env_overrides(&mut cfg, None);

	assert_eq!(cfg.api.base_url, before);
}

#[test]
fn locale_must_be_known() {
	let mut cfg = base_config();

	cfg.service.locale = "fr".to_string();

	let err = notes_config::validate(&cfg).expect_err("Expected locale validation error.");

	assert!(
		err.to_string().contains("service.locale must be one of en or id."),
		"Unexpected error: {err}"
	);
}

#[test]
fn default_headers_must_be_strings() {
	let mut cfg = base_config();

	cfg.api.default_headers.insert("x-retry".to_string(), serde_json::json!(3));

	let err = notes_config::validate(&cfg).expect_err("Expected header validation error.");

	assert!(
		err.to_string().contains("Default header values must be strings."),
		"Unexpected error: {err}"
	);
}

#[test]
fn token_path_is_required() {
	let payload = sample_toml().replace("token_path = \"token.json\"\n", "");
	let path = write_temp_config(payload);
	let err = notes_config::load(&path).expect_err("Expected missing token_path parse error.");

	fs::remove_file(&path).expect("Failed to remove test config.");

	let message = match err {
		Error::ParseConfig { source, .. } => source.to_string(),
		err => panic!("Expected parse config error, got {err}"),
	};

	assert!(message.contains("token_path"), "Unexpected error: {message}");
}

#[test]
fn notes_example_toml_is_valid() {
	let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));

	path.push("../../notes.example.toml");

	notes_config::load(&path).expect("Expected notes.example.toml to be a valid config.");
}
