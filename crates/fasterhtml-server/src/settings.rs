//! Application settings loaded from the environment.
//!
//! Values come from the process environment, after an optional `.env` file
//! in the working directory has been read. Variables already present in the
//! environment take precedence over the file.
//!
//! | variable | default |
//! |---|---|
//! | `DATABASE_URL` | required |
//! | `FASTERHTML_HOST` | `127.0.0.1` |
//! | `FASTERHTML_PORT` | `8000` |
//! | `FASTERHTML_DEBUG` | `true` |

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

/// Name of the variable holding the notes database URL.
pub const DATABASE_URL: &str = "DATABASE_URL";
/// Name of the variable holding the bind host.
pub const HOST: &str = "FASTERHTML_HOST";
/// Name of the variable holding the bind port.
pub const PORT: &str = "FASTERHTML_PORT";
/// Name of the variable toggling debug logging.
pub const DEBUG: &str = "FASTERHTML_DEBUG";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration of the demo application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Connection URL of the notes database.
	pub database_url: String,
	/// Address the server binds to.
	pub host: String,
	/// Port the server binds to.
	pub port: u16,
	/// Enables verbose logging when no `RUST_LOG` filter is set.
	pub debug: bool,
}

impl Settings {
	/// Loads settings from `.env` and the process environment.
	pub fn from_env() -> Result<Self, SettingsError> {
		load_dotenv();
		Self::from_process_env()
	}

	/// Loads settings from the process environment only.
	pub fn from_process_env() -> Result<Self, SettingsError> {
		Self::from_lookup(|key| std::env::var(key).ok())
	}

	/// Loads settings through an arbitrary variable lookup.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, SettingsError>
	where
		F: Fn(&str) -> Option<String>,
	{
		let database_url =
			lookup(DATABASE_URL).ok_or_else(|| SettingsError::MissingVariable(DATABASE_URL.to_string()))?;

		let host = lookup(HOST).unwrap_or_else(|| DEFAULT_HOST.to_string());

		let port = match lookup(PORT) {
			Some(value) => value.parse::<u16>().map_err(|e| SettingsError::ParseError {
				key: PORT.to_string(),
				value_len: value.len(),
				error: e.to_string(),
			})?,
			None => DEFAULT_PORT,
		};

		let debug = match lookup(DEBUG) {
			Some(value) => parse_bool(&value).map_err(|error| SettingsError::ParseError {
				key: DEBUG.to_string(),
				value_len: value.len(),
				error,
			})?,
			None => true,
		};

		Ok(Self {
			database_url,
			host,
			port,
			debug,
		})
	}

	/// Returns the socket address to bind.
	pub fn socket_addr(&self) -> Result<SocketAddr, SettingsError> {
		let ip: IpAddr = self
			.host
			.parse()
			.map_err(|_| SettingsError::InvalidAddress(self.host.clone()))?;
		Ok(SocketAddr::new(ip, self.port))
	}
}

/// Reads the nearest `.env` file into the process environment.
///
/// Returns the file's path, or `None` when no file was found or it could not
/// be parsed.
pub fn load_dotenv() -> Option<PathBuf> {
	dotenv::dotenv().ok()
}

/// Logs the outcome of [`load_dotenv`].
///
/// Call once a subscriber is installed; earlier events are discarded.
pub fn report_env_file(path: Option<&Path>) {
	match path {
		Some(path) => tracing::info!("Loaded environment from {}", path.display()),
		None => tracing::debug!("No .env file loaded"),
	}
}

/// Parses a boolean the way environment flags are usually written.
pub fn parse_bool(value: &str) -> Result<bool, String> {
	match value.trim().to_ascii_lowercase().as_str() {
		"true" | "1" | "yes" | "on" => Ok(true),
		"false" | "0" | "no" | "off" | "" => Ok(false),
		other => Err(format!("Invalid boolean value: {}", other)),
	}
}

/// Errors raised while loading [`Settings`].
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
	#[error("Missing environment variable: {0}")]
	MissingVariable(String),

	#[error("Failed to parse environment variable '{key}' (value length: {value_len}): {error}")]
	ParseError {
		key: String,
		/// Length of the original value, kept instead of the value itself
		value_len: usize,
		error: String,
	},

	#[error("Invalid bind address: {0}")]
	InvalidAddress(String),
}
