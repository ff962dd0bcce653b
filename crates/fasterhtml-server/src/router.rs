//! Exact-match route table.
//!
//! A request is dispatched to the first route whose path equals the request
//! path and whose method equals the request method. A known path requested
//! with another method gets `405 Method Not Allowed` with an `Allow` header;
//! an unknown path gets `404 Not Found`.
//!
//! `GET` routes also answer `HEAD`, with the same status and headers and an
//! empty body.

use std::sync::Arc;

use async_trait::async_trait;
use hyper::Method;

use crate::error::Result;
use crate::handler::Handler;
use crate::request::Request;
use crate::response::Response;

struct Route {
	method: Method,
	path: String,
	handler: Arc<dyn Handler>,
}

impl Route {
	fn accepts(&self, method: &Method) -> bool {
		self.method == *method || (*method == Method::HEAD && self.method == Method::GET)
	}
}

/// Maps `(method, path)` pairs to handlers.
#[derive(Default)]
pub struct Router {
	routes: Vec<Route>,
}

impl Router {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `handler` for `method` requests to `path`.
	pub fn route(mut self, method: Method, path: impl Into<String>, handler: impl Handler + 'static) -> Self {
		self.routes.push(Route {
			method,
			path: path.into(),
			handler: Arc::new(handler),
		});
		self
	}

	pub fn get(self, path: impl Into<String>, handler: impl Handler + 'static) -> Self {
		self.route(Method::GET, path, handler)
	}

	pub fn post(self, path: impl Into<String>, handler: impl Handler + 'static) -> Self {
		self.route(Method::POST, path, handler)
	}

	/// Number of registered routes.
	pub fn len(&self) -> usize {
		self.routes.len()
	}

	pub fn is_empty(&self) -> bool {
		self.routes.is_empty()
	}
}

#[async_trait]
impl Handler for Router {
	async fn handle(&self, request: Request) -> Result<Response> {
		let matching: Vec<&Route> = self
			.routes
			.iter()
			.filter(|route| route.path == request.path())
			.collect();

		if let Some(route) = matching.iter().find(|route| route.accepts(&request.method)) {
			let handler = Arc::clone(&route.handler);
			let head = request.method == Method::HEAD;
			let response = handler.handle(request).await?;
			return Ok(if head { response.with_body("") } else { response });
		}

		let mut allowed: Vec<Method> = Vec::new();
		for route in &matching {
			allowed.push(route.method.clone());
			if route.method == Method::GET {
				allowed.push(Method::HEAD);
			}
		}
		if allowed.is_empty() {
			tracing::debug!("No route for {} {}", request.method, request.path());
			Ok(Response::not_found())
		} else {
			tracing::debug!("Method {} not allowed for {}", request.method, request.path());
			Ok(Response::method_not_allowed(&allowed))
		}
	}
}
