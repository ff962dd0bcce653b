//! Facade re-export tests

use fasterhtml::prelude::*;
use rstest::*;

#[rstest]
fn test_prelude_builds_markup() {
	let el = Div(P("x", ()), attrs! { cls = "box" });

	assert_eq!(el.render(), "<div class=\"box\">\n<p>\nx\n</p>\n</div>");
}

#[rstest]
fn test_module_paths_agree() {
	let from_elements = fasterhtml::elements::Span("s", ());
	let from_prelude = Span("s", ());

	assert_eq!(from_elements, from_prelude);
	assert_eq!(fasterhtml::elements::HTML_TAGS.len(), 111);
}

#[rstest]
fn test_page_reexport() {
	let page = fasterhtml::page::Page::with_options((), fasterhtml::page::PageOptions::bare());

	assert_eq!(page.to_string(), Page::with_options((), PageOptions::bare()).render());
}

#[cfg(feature = "server")]
#[rstest]
fn test_server_reexport() {
	let router = fasterhtml::server::Router::new();

	assert!(router.is_empty());
}
