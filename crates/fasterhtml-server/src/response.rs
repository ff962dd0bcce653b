use std::fmt::Display;

use bytes::Bytes;
use http_body_util::Full;
use hyper::header::{CONTENT_TYPE, HeaderName, HeaderValue};
use hyper::{HeaderMap, StatusCode};
use serde::Serialize;

use crate::error::{Error, Result};

const HTML_CONTENT_TYPE: &str = "text/html; charset=utf-8";
const JSON_CONTENT_TYPE: &str = "application/json";
const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// HTTP response representation
#[derive(Debug, Clone)]
pub struct Response {
	pub status: StatusCode,
	pub headers: HeaderMap,
	pub body: Bytes,
}

impl Response {
	/// Create a new Response with the given status code
	///
	/// # Examples
	///
	/// ```
	/// use fasterhtml_server::Response;
	/// use hyper::StatusCode;
	///
	/// let response = Response::new(StatusCode::OK);
	/// assert_eq!(response.status, StatusCode::OK);
	/// assert!(response.body.is_empty());
	/// ```
	pub fn new(status: StatusCode) -> Self {
		Self {
			status,
			headers: HeaderMap::new(),
			body: Bytes::new(),
		}
	}

	pub fn ok() -> Self {
		Self::new(StatusCode::OK)
	}

	pub fn bad_request() -> Self {
		Self::plain(StatusCode::BAD_REQUEST)
	}

	pub fn not_found() -> Self {
		Self::plain(StatusCode::NOT_FOUND)
	}

	/// 405 response listing the methods the path does accept.
	pub fn method_not_allowed(allowed: &[hyper::Method]) -> Self {
		let allow = allowed
			.iter()
			.map(|method| method.as_str())
			.collect::<Vec<_>>()
			.join(", ");
		Self::plain(StatusCode::METHOD_NOT_ALLOWED).with_header("allow", &allow)
	}

	pub fn internal_server_error() -> Self {
		Self::plain(StatusCode::INTERNAL_SERVER_ERROR)
	}

	/// Plain-text response whose body is the status reason phrase.
	fn plain(status: StatusCode) -> Self {
		Self::new(status)
			.with_body(status.canonical_reason().unwrap_or_default())
			.with_header(CONTENT_TYPE.as_str(), TEXT_CONTENT_TYPE)
	}

	/// HTML response from anything with a display string.
	///
	/// # Examples
	///
	/// ```
	/// use fasterhtml_core::P;
	/// use fasterhtml_server::Response;
	///
	/// let response = Response::html(P("Hi", ()));
	/// assert_eq!(response.body, "<p>\nHi\n</p>");
	/// ```
	pub fn html(content: impl Display) -> Self {
		Self::ok()
			.with_body(content.to_string())
			.with_header(CONTENT_TYPE.as_str(), HTML_CONTENT_TYPE)
	}

	/// JSON response serialized from `data`.
	pub fn json<T: Serialize + ?Sized>(data: &T) -> Result<Self> {
		Self::ok().with_json(data)
	}

	pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
		self.body = body.into();
		self
	}

	/// Add a header; invalid names or values are ignored
	pub fn with_header(mut self, name: &str, value: &str) -> Self {
		if let (Ok(name), Ok(value)) = (
			HeaderName::from_bytes(name.as_bytes()),
			HeaderValue::from_str(value),
		) {
			self.headers.insert(name, value);
		}
		self
	}

	pub fn with_json<T: Serialize + ?Sized>(mut self, data: &T) -> Result<Self> {
		self.body = Bytes::from(serde_json::to_vec(data)?);
		self.headers
			.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
		Ok(self)
	}

	/// Converts into the hyper response written to the connection.
	pub fn into_hyper(self) -> hyper::Response<Full<Bytes>> {
		let mut response = hyper::Response::new(Full::new(self.body));
		*response.status_mut() = self.status;
		*response.headers_mut() = self.headers;
		response
	}
}

impl From<Error> for Response {
	fn from(err: Error) -> Self {
		match err.status_code() {
			StatusCode::BAD_REQUEST => Response::bad_request(),
			_ => Response::internal_server_error(),
		}
	}
}
