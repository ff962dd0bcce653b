use std::future::Future;
use std::net::SocketAddr;
use std::pin::Pin;
use std::sync::Arc;

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::Service;
use hyper_util::rt::TokioIo;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::watch;
use tokio::task::{JoinError, JoinSet};

use crate::error::Result;
use crate::handler::Handler;
use crate::request::Request;
use crate::response::Response;

/// HTTP/1 server driving a single root handler.
pub struct HttpServer {
	handler: Arc<dyn Handler>,
}

impl HttpServer {
	/// Create a new server with the given handler
	///
	/// # Examples
	///
	/// ```
	/// use fasterhtml_server::{HttpServer, Router};
	///
	/// let server = HttpServer::new(Router::new());
	/// ```
	pub fn new(handler: impl Handler + 'static) -> Self {
		Self {
			handler: Arc::new(handler),
		}
	}

	/// Accepts connections until an error occurs.
	pub async fn listen(self, addr: SocketAddr) -> Result<()> {
		self.listen_with_shutdown(addr, std::future::pending()).await
	}

	/// Accepts connections until `shutdown` resolves.
	///
	/// Binding happens before the first await on `shutdown`. In-flight
	/// connections are told to finish their current request and close.
	pub async fn listen_with_shutdown<F>(self, addr: SocketAddr, shutdown: F) -> Result<()>
	where
		F: Future<Output = ()>,
	{
		let listener = TcpListener::bind(addr).await?;
		tracing::info!("Server listening on http://{}", listener.local_addr()?);
		self.serve(listener, shutdown).await
	}

	/// Serves an already bound listener until `shutdown` resolves.
	///
	/// Returns only after every open connection has finished the request it
	/// was handling when `shutdown` resolved.
	pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> Result<()>
	where
		F: Future<Output = ()>,
	{
		let (stop_tx, stop_rx) = watch::channel(false);
		let mut connections = JoinSet::new();
		tokio::pin!(shutdown);

		loop {
			tokio::select! {
				result = listener.accept() => {
					let (stream, remote_addr) = result?;
					let handler = self.handler.clone();
					let stop_rx = stop_rx.clone();

					connections.spawn(async move {
						if let Err(err) = Self::handle_connection(stream, remote_addr, handler, stop_rx).await {
							tracing::warn!("Error handling connection from {}: {}", remote_addr, err);
						}
					});
				}
				Some(joined) = connections.join_next(), if !connections.is_empty() => {
					log_join_error(joined);
				}
				_ = &mut shutdown => {
					tracing::info!("Shutdown signal received, stopping server...");
					break;
				}
			}
		}

		// Receivers may all be gone already; nothing to notify then.
		let _ = stop_tx.send(true);

		if !connections.is_empty() {
			tracing::info!("Waiting for {} open connection(s) to finish", connections.len());
		}
		while let Some(joined) = connections.join_next().await {
			log_join_error(joined);
		}
		tracing::info!("Server stopped");
		Ok(())
	}

	/// Serves HTTP/1 requests on one TCP connection.
	async fn handle_connection(
		stream: TcpStream,
		remote_addr: SocketAddr,
		handler: Arc<dyn Handler>,
		mut stop_rx: watch::Receiver<bool>,
	) -> Result<()> {
		tracing::debug!("Accepted connection from {}", remote_addr);
		let io = TokioIo::new(stream);
		let service = RequestService {
			handler,
			remote_addr,
		};

		let conn = http1::Builder::new().serve_connection(io, service);
		tokio::pin!(conn);

		tokio::select! {
			result = conn.as_mut() => result?,
			_ = stop_rx.changed() => {
				conn.as_mut().graceful_shutdown();
				conn.await?;
			}
		}

		Ok(())
	}
}

fn log_join_error(joined: std::result::Result<(), JoinError>) {
	if let Err(err) = joined {
		tracing::error!("Connection task failed: {}", err);
	}
}

/// Runs `handler`, turning handler errors into error responses.
pub async fn respond(handler: &dyn Handler, request: Request) -> Response {
	let method = request.method.clone();
	let path = request.path().to_string();

	let response = match handler.handle(request).await {
		Ok(response) => response,
		Err(err) => {
			tracing::error!("{} {} failed: {}", method, path, err);
			Response::from(err)
		}
	};

	tracing::info!("{} {} {}", method, path, response.status.as_u16());
	response
}

/// Service implementation for hyper
struct RequestService {
	handler: Arc<dyn Handler>,
	remote_addr: SocketAddr,
}

impl Service<hyper::Request<Incoming>> for RequestService {
	type Response = hyper::Response<Full<Bytes>>;
	type Error = hyper::Error;
	type Future = Pin<Box<dyn Future<Output = std::result::Result<Self::Response, Self::Error>> + Send + 'static>>;

	fn call(&self, req: hyper::Request<Incoming>) -> Self::Future {
		let handler = self.handler.clone();
		let remote_addr = self.remote_addr;

		Box::pin(async move {
			let (parts, body) = req.into_parts();
			let body = body.collect().await?.to_bytes();

			tracing::trace!("Request from {}: {} {}", remote_addr, parts.method, parts.uri);
			let request = Request::new(parts.method, parts.uri, parts.headers, body);

			Ok(respond(handler.as_ref(), request).await.into_hyper())
		})
	}
}

/// Resolves when the process receives Ctrl-C.
pub async fn shutdown_signal() {
	if let Err(err) = tokio::signal::ctrl_c().await {
		tracing::error!("Failed to listen for shutdown signal: {}", err);
		std::future::pending::<()>().await;
	}
}
