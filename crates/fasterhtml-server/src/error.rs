//! Error types for the demo application.

use hyper::StatusCode;

use crate::settings::SettingsError;

/// Errors raised while configuring or serving the application.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Settings error: {0}")]
	Settings(#[from] SettingsError),

	#[error("Database error: {0}")]
	Database(#[from] sqlx::Error),

	#[error("Migration error: {0}")]
	Migration(#[from] sqlx::migrate::MigrateError),

	#[error("Invalid request body: {0}")]
	InvalidBody(#[from] serde_json::Error),

	#[error("Connection error: {0}")]
	Connection(#[from] hyper::Error),

	#[error("IO error: {0}")]
	Io(#[from] std::io::Error),
}

impl Error {
	/// Status code reported to the client when a handler fails with this error.
	pub fn status_code(&self) -> StatusCode {
		match self {
			Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
			_ => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
