//! Route handlers of the demo application.

use async_trait::async_trait;
use serde_json::json;

use crate::error::Result;
use crate::handler::Handler;
use crate::notes::{NewNote, NoteStore};
use crate::pages;
use crate::request::Request;
use crate::response::Response;

/// `GET /`
pub struct Homepage;

#[async_trait]
impl Handler for Homepage {
	async fn handle(&self, _request: Request) -> Result<Response> {
		Ok(Response::html(pages::contact_page()))
	}
}

/// `POST /submit-form`
pub struct SubmitForm;

#[async_trait]
impl Handler for SubmitForm {
	async fn handle(&self, _request: Request) -> Result<Response> {
		Ok(Response::html(pages::thank_you_fragment()))
	}
}

/// `GET /json`
pub struct HelloJson;

#[async_trait]
impl Handler for HelloJson {
	async fn handle(&self, _request: Request) -> Result<Response> {
		Response::json(&json!({ "hello": "world" }))
	}
}

/// `GET /custom`
pub struct CustomPage;

#[async_trait]
impl Handler for CustomPage {
	async fn handle(&self, _request: Request) -> Result<Response> {
		Ok(Response::html(pages::custom_page()))
	}
}

/// `GET /notes`
pub struct ListNotes {
	store: NoteStore,
}

impl ListNotes {
	pub fn new(store: NoteStore) -> Self {
		Self { store }
	}
}

#[async_trait]
impl Handler for ListNotes {
	async fn handle(&self, _request: Request) -> Result<Response> {
		let notes = self.store.list().await?;
		Response::json(&notes)
	}
}

/// `POST /notes`, echoing the stored note.
pub struct AddNote {
	store: NoteStore,
}

impl AddNote {
	pub fn new(store: NoteStore) -> Self {
		Self { store }
	}
}

#[async_trait]
impl Handler for AddNote {
	async fn handle(&self, request: Request) -> Result<Response> {
		let note: NewNote = request.json()?;
		self.store.insert(&note).await?;
		Response::json(&note)
	}
}
