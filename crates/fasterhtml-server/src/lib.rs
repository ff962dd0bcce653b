//! # FasterHTML Server
//!
//! Demonstration web application for `fasterhtml-core`: a contact form
//! submitted through htmx, a notes API over SQLite and two hand-built pages.
//!
//! ## Routes
//!
//! | method | path | response |
//! |---|---|---|
//! | GET | `/` | contact page |
//! | GET | `/notes` | JSON list of notes |
//! | POST | `/notes` | stores a `{text, completed}` note and echoes it |
//! | GET | `/custom` | hand-assembled HTML document |
//! | GET | `/json` | `{"hello": "world"}` |
//! | POST | `/submit-form` | thank-you fragment |
//!
//! ## Example
//!
//! ```no_run
//! use fasterhtml_server::{Settings, run};
//!
//! # async fn example() -> fasterhtml_server::Result<()> {
//! let settings = Settings::from_env()?;
//! run(settings).await
//! # }
//! ```

pub mod error;
pub mod handler;
pub mod notes;
pub mod pages;
pub mod request;
pub mod response;
pub mod router;
pub mod server;
pub mod settings;
pub mod views;

pub use error::{Error, Result};
pub use handler::Handler;
pub use notes::{NewNote, Note, NoteStore};
pub use request::Request;
pub use response::Response;
pub use router::Router;
pub use server::{HttpServer, respond, shutdown_signal};
pub use settings::{Settings, SettingsError};

/// Builds the route table of the demo application.
pub fn app(store: NoteStore) -> Router {
	Router::new()
		.get("/", views::Homepage)
		.get("/notes", views::ListNotes::new(store.clone()))
		.post("/notes", views::AddNote::new(store))
		.get("/custom", views::CustomPage)
		.get("/json", views::HelloJson)
		.post("/submit-form", views::SubmitForm)
}

/// Runs the application until Ctrl-C.
///
/// The notes database is connected and migrated before the listener is
/// bound, and closed once the server has stopped and every in-flight
/// request has been answered.
pub async fn run(settings: Settings) -> Result<()> {
	let addr = settings.socket_addr()?;
	let store = NoteStore::connect(&settings.database_url).await?;
	store.migrate().await?;

	let result = HttpServer::new(app(store.clone()))
		.listen_with_shutdown(addr, shutdown_signal())
		.await;

	store.close().await;
	result
}
