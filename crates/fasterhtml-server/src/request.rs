use bytes::Bytes;
use hyper::{HeaderMap, Method, Uri};
use serde::de::DeserializeOwned;

use crate::error::Result;

/// HTTP request with a fully buffered body.
#[derive(Debug, Clone)]
pub struct Request {
	pub method: Method,
	pub uri: Uri,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Request {
	/// Create a new request
	///
	/// # Examples
	///
	/// ```
	/// use fasterhtml_server::Request;
	/// use hyper::{HeaderMap, Method};
	///
	/// let request = Request::new(Method::GET, "/notes".parse().unwrap(), HeaderMap::new(), "");
	/// assert_eq!(request.path(), "/notes");
	/// ```
	pub fn new(method: Method, uri: Uri, headers: HeaderMap, body: impl Into<Bytes>) -> Self {
		Self {
			method,
			uri,
			headers,
			body: body.into(),
		}
	}

	/// Shorthand for a request without headers.
	pub fn from_path(method: Method, path: &str) -> Result<Self> {
		Ok(Self::new(
			method,
			path.parse::<Uri>().map_err(std::io::Error::other)?,
			HeaderMap::new(),
			Bytes::new(),
		))
	}

	/// Replaces the body.
	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Path component of the request URI.
	pub fn path(&self) -> &str {
		self.uri.path()
	}

	/// Deserializes the body as JSON.
	pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
		Ok(serde_json::from_slice(&self.body)?)
	}
}
