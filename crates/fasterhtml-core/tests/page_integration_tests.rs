//! Page skeleton integration tests
//!
//! Success Criteria:
//! 1. Default page links the stylesheet and loads the script exactly once
//! 2. Disabling both options removes both tags
//! 3. Body content lands inside main.container in order
//! 4. Head boilerplate keeps its literal attribute names

use fasterhtml_core::*;
use rstest::*;

#[fixture]
fn contact_page() -> Page {
	Page::new((H1("Contact Us", ()), P("Hello", ())))
}

#[rstest]
fn test_default_page_assets_appear_once(contact_page: Page) {
	let html = contact_page.render();

	assert_eq!(html.matches("<link ").count(), 1);
	assert_eq!(html.matches(PICO_CSS_URL).count(), 1);
	assert_eq!(html.matches("<script ").count(), 1);
	assert!(html.contains(&format!("<script src=\"{HTMX_URL}\" defer></script>")));
}

#[rstest]
fn test_bare_page_has_no_assets() {
	let html = Page::with_options(H1("x", ()), PageOptions::bare()).render();

	assert!(!html.contains("<link"));
	assert!(!html.contains("<script"));
	assert!(!html.contains(PICO_CSS_URL));
	assert!(!html.contains(HTMX_URL));
}

#[rstest]
#[case(true, false)]
#[case(false, true)]
fn test_single_asset_toggles(#[case] pico: bool, #[case] htmx: bool) {
	let options = PageOptions::new().pico_css(pico).htmx(htmx);
	let html = Page::with_options((), options).render();

	assert_eq!(html.contains(PICO_CSS_URL), pico);
	assert_eq!(html.contains(HTMX_URL), htmx);
}

#[rstest]
fn test_body_content_order(contact_page: Page) {
	let html = contact_page.render();

	assert!(html.contains(
		"<body>\n<main class=\"container\">\n<h1>\nContact Us\n</h1>\n<p>\nHello\n</p>\n</main>\n</body>"
	));
}

#[rstest]
fn test_head_meta_tags(contact_page: Page) {
	let html = contact_page.render();

	assert!(html.contains("<head>\n<meta charset=\"utf-8\" />\n"));
	assert!(html.contains("<meta name=\"viewport\" width=\"device-width\" initial_scale=\"1\" />"));
	assert!(html.contains("<meta name=\"color-scheme\" />"));
}

#[rstest]
fn test_page_starts_with_doctype_line(contact_page: Page) {
	let html = contact_page.to_string();
	let mut lines = html.lines();

	assert_eq!(lines.next(), Some("<!DOCTYPE html>"));
	assert_eq!(lines.next(), Some("<html>"));
	assert_eq!(html.lines().last(), Some("</html>"));
}

#[rstest]
fn test_page_render_is_idempotent(contact_page: Page) {
	assert_eq!(contact_page.render(), contact_page.render());
}
