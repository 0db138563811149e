pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error(transparent)]
	Reqwest(#[from] reqwest::Error),
	#[error(transparent)]
	SerdeJson(#[from] serde_json::Error),
	#[error(transparent)]
	InvalidHeaderName(#[from] reqwest::header::InvalidHeaderName),
	#[error(transparent)]
	InvalidHeaderValue(#[from] reqwest::header::InvalidHeaderValue),
	#[error("{message}")]
	InvalidConfig { message: String },
	#[error("Request failed with status {status}.")]
	Status { status: u16, message: Option<String> },
	#[error("Failed to access token store at {path:?}.")]
	TokenStore { path: std::path::PathBuf, source: std::io::Error },
}
impl Error {
	/// Server-supplied `message` field of a non-success response, if any.
	pub fn server_message(&self) -> Option<&str> {
		match self {
			Self::Status { message, .. } => message.as_deref(),
			_ => None,
		}
	}

	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			Self::Reqwest(err) => err.status().map(|status| status.as_u16()),
			_ => None,
		}
	}
}
