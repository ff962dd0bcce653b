//! Demo application route tests
//!
//! Success Criteria:
//! 1. Every route answers with the documented content type and body
//! 2. Notes posted through the API are listed back in order
//! 3. Unknown paths and wrong methods are rejected
//! 4. Malformed note payloads are reported as bad requests
//!
//! Test Categories:
//! - Happy Path: 7 tests
//! - Error Cases: 3 tests

use fasterhtml_server::{NoteStore, Request, Response, Router, app, respond};
use hyper::header::CONTENT_TYPE;
use hyper::{Method, StatusCode};
use rstest::*;
use serde_json::{Value, json};

#[fixture]
async fn router() -> Router {
	let store = NoteStore::in_memory().await.unwrap();
	store.migrate().await.unwrap();
	app(store)
}

async fn call(router: &Router, method: Method, path: &str, body: &str) -> Response {
	let request = Request::from_path(method, path).unwrap().with_body(body.to_string());
	respond(router, request).await
}

fn body_json(response: &Response) -> Value {
	serde_json::from_slice(&response.body).unwrap()
}

// ============================================================================
// Happy Path Tests
// ============================================================================

#[rstest]
#[tokio::test]
async fn test_homepage_serves_contact_form(#[future] router: Router) {
	let router = router.await;
	let response = call(&router, Method::GET, "/", "").await;

	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(response.headers[CONTENT_TYPE], "text/html; charset=utf-8");
	let html = std::str::from_utf8(&response.body).unwrap();
	assert!(html.starts_with("<!DOCTYPE html>"));
	assert!(html.contains("<h1>\nContact Us\n</h1>"));
	assert!(html.contains("hx-post=\"/submit-form\""));
}

#[rstest]
#[tokio::test]
async fn test_submit_form_returns_fragment(#[future] router: Router) {
	let router = router.await;
	let response = call(&router, Method::POST, "/submit-form", "name=a&email=b").await;

	assert_eq!(response.status, StatusCode::OK);
	assert!(response.body.starts_with(b"<div>\n<p>\nThank you!"));
}

#[rstest]
#[tokio::test]
async fn test_json_route(#[future] router: Router) {
	let router = router.await;
	let response = call(&router, Method::GET, "/json", "").await;

	assert_eq!(response.headers[CONTENT_TYPE], "application/json");
	assert_eq!(body_json(&response), json!({ "hello": "world" }));
}

#[rstest]
#[tokio::test]
async fn test_custom_page(#[future] router: Router) {
	let router = router.await;
	let response = call(&router, Method::GET, "/custom", "").await;

	assert_eq!(response.status, StatusCode::OK);
	assert!(response.body.starts_with(b"<!DOCTYPE html>\n<html>\n<head></head>"));
}

#[rstest]
#[tokio::test]
async fn test_notes_start_empty(#[future] router: Router) {
	let router = router.await;
	let response = call(&router, Method::GET, "/notes", "").await;

	assert_eq!(response.status, StatusCode::OK);
	assert_eq!(body_json(&response), json!([]));
}

#[rstest]
#[tokio::test]
async fn test_add_then_list_notes(#[future] router: Router) {
	let router = router.await;

	let created = call(
		&router,
		Method::POST,
		"/notes",
		r#"{"text": "buy milk", "completed": false}"#,
	)
	.await;
	assert_eq!(created.status, StatusCode::OK);
	assert_eq!(
		body_json(&created),
		json!({ "text": "buy milk", "completed": false })
	);

	call(&router, Method::POST, "/notes", r#"{"text": "ship", "completed": true}"#).await;

	let listed = call(&router, Method::GET, "/notes", "").await;
	assert_eq!(
		body_json(&listed),
		json!([
			{ "text": "buy milk", "completed": false },
			{ "text": "ship", "completed": true },
		])
	);
}

#[rstest]
#[case("/")]
#[case("/notes")]
#[case("/custom")]
#[case("/json")]
#[tokio::test]
async fn test_head_on_get_routes(#[future] router: Router, #[case] path: &str) {
	let router = router.await;
	let get = call(&router, Method::GET, path, "").await;
	let head = call(&router, Method::HEAD, path, "").await;

	assert_eq!(head.status, StatusCode::OK);
	assert_eq!(head.headers[CONTENT_TYPE], get.headers[CONTENT_TYPE]);
	assert!(head.body.is_empty());
}

// ============================================================================
// Error Cases
// ============================================================================

#[rstest]
#[case("not json")]
#[case(r#"{"text": "missing completed"}"#)]
#[tokio::test]
async fn test_malformed_note_is_bad_request(#[future] router: Router, #[case] body: &str) {
	let router = router.await;
	let response = call(&router, Method::POST, "/notes", body).await;

	assert_eq!(response.status, StatusCode::BAD_REQUEST);
	assert_eq!(body_json(&call(&router, Method::GET, "/notes", "").await), json!([]));
}

#[rstest]
#[tokio::test]
async fn test_unknown_path(#[future] router: Router) {
	let router = router.await;
	let response = call(&router, Method::GET, "/nope", "").await;

	assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[rstest]
#[case(Method::GET, "/submit-form", "POST")]
#[case(Method::DELETE, "/notes", "GET, HEAD, POST")]
#[case(Method::POST, "/json", "GET, HEAD")]
#[tokio::test]
async fn test_wrong_method(
	#[future] router: Router,
	#[case] method: Method,
	#[case] path: &str,
	#[case] allow: &str,
) {
	let router = router.await;
	let response = call(&router, method, path, "").await;

	assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);
	assert_eq!(response.headers["allow"], allow);
}
