//! Markup served by the demo routes.

use fasterhtml_core::*;

/// Contact form page served at `/`.
///
/// The form posts to `/submit-form` through htmx and swaps itself out for
/// the thank-you fragment.
pub fn contact_page() -> Page {
	Page::new(Div(
		(
			H1("Contact Us", ()),
			Form(
				(
					P("Name:", ()),
					Input((), attrs! { type = "text", name = "name", required = true }),
					P("Email:", ()),
					Input((), attrs! { type = "email", name = "email", required = true }),
					Button("Submit", attrs! { type = "submit" }),
				),
				attrs! {
					hx_post = "/submit-form",
					hx_target = "#response",
					hx_swap = "outerHTML",
					id = "response",
				},
			),
			Div("", attrs! { id = "response" }),
		),
		(),
	))
}

/// Fragment returned by `POST /submit-form`.
pub fn thank_you_fragment() -> Element {
	Div(
		(
			P("Thank you! We have received your email.", ()),
			P("We will be in touch soon.", ()),
		),
		(),
	)
}

/// Hand-assembled document served at `/custom`.
pub fn custom_page() -> String {
	let html = Html(
		(
			Head((), ()),
			Body((H1("My Page", ()), P("My paragraph", ())), ()),
		),
		(),
	);
	Doctype((), ()) + "\n" + &html.render()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_contact_page_form() {
		let html = contact_page().render();

		assert!(html.starts_with("<!DOCTYPE html>\n<html>"));
		assert!(html.contains(
			"<form hx-post=\"/submit-form\" hx-target=\"#response\" hx-swap=\"outerHTML\" id=\"response\">"
		));
		assert!(html.contains("<input type=\"email\" name=\"email\" required />"));
		assert!(html.contains("<div id=\"response\"></div>"));
	}

	#[rstest]
	fn test_thank_you_fragment() {
		assert_eq!(
			thank_you_fragment().render(),
			"<div>\n<p>\nThank you! We have received your email.\n</p>\n<p>\nWe will be in touch soon.\n</p>\n</div>"
		);
	}

	#[rstest]
	fn test_custom_page() {
		assert_eq!(
			custom_page(),
			"<!DOCTYPE html>\n<html>\n<head></head>\n<body>\n<h1>\nMy Page\n</h1>\n<p>\nMy paragraph\n</p>\n</body>\n</html>"
		);
	}
}
