//! Full-document page skeleton.
//!
//! [`Page`] wraps caller content in a doctype, an `html` element with a
//! boilerplate `head`, and a `body` holding a single `main.container`.

use std::fmt;

use crate::attrs;
use crate::element::{Element, IntoNodes};
use crate::factory::{Body, Doctype, Head, Html, Link, Main, Meta, Script};

/// Stylesheet linked from the page head when [`PageOptions::include_pico_css`] is set.
pub const PICO_CSS_URL: &str = "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";

/// Script loaded from the page head when [`PageOptions::include_htmx`] is set.
pub const HTMX_URL: &str = "https://unpkg.com/htmx.org@2.0.1";

/// Options controlling the boilerplate head content of a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
	/// Whether to link the Pico CSS stylesheet.
	pub include_pico_css: bool,
	/// Whether to load the htmx script.
	pub include_htmx: bool,
}

impl Default for PageOptions {
	fn default() -> Self {
		Self {
			include_pico_css: true,
			include_htmx: true,
		}
	}
}

impl PageOptions {
	/// Creates the default options (both stylesheet and script included).
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets whether the Pico CSS stylesheet is linked.
	pub fn pico_css(mut self, include: bool) -> Self {
		self.include_pico_css = include;
		self
	}

	/// Sets whether the htmx script is loaded.
	pub fn htmx(mut self, include: bool) -> Self {
		self.include_htmx = include;
		self
	}

	/// Disables both the stylesheet and the script.
	pub fn bare() -> Self {
		Self::new().pico_css(false).htmx(false)
	}
}

/// A complete HTML document.
///
/// A document is not a single-rooted tree, so the doctype and the `html`
/// element are kept as siblings and joined with a newline when rendered.
///
/// ## Example
///
/// ```
/// use fasterhtml_core::{Page, PageOptions};
/// use fasterhtml_core::factory::H1;
///
/// let page = Page::with_options(H1("Hello", ()), PageOptions::bare());
/// let html = page.render();
///
/// assert!(html.starts_with("<!DOCTYPE html>\n<html>"));
/// assert!(html.contains("<main class=\"container\">\n<h1>\nHello\n</h1>\n</main>"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
	doctype: Element,
	html: Element,
}

impl Page {
	/// Builds a page with the default options.
	pub fn new(content: impl IntoNodes) -> Self {
		Self::with_options(content, PageOptions::default())
	}

	/// Builds a page with explicit options.
	pub fn with_options(content: impl IntoNodes, options: PageOptions) -> Self {
		let mut head_content = vec![
			Meta((), attrs! { charset = "utf-8" }),
			Meta(
				(),
				attrs! { name = "viewport", width = "device-width", initial_scale = "1" },
			),
			Meta((), attrs! { name = "color-scheme" }),
		];
		if options.include_pico_css {
			head_content.push(Link((), attrs! { rel = "stylesheet", href = PICO_CSS_URL }));
		}
		if options.include_htmx {
			head_content.push(Script((), attrs! { src = HTMX_URL, defer = true }));
		}

		let main = Main(content, attrs! { cls = "container", _type = "" });

		Self {
			doctype: Doctype((), ()),
			html: Html((Head(head_content, ()), Body(main, ())), ()),
		}
	}

	/// Returns the doctype node.
	pub fn doctype(&self) -> &Element {
		&self.doctype
	}

	/// Returns the `html` root element.
	pub fn html(&self) -> &Element {
		&self.html
	}

	/// Renders the document: doctype, newline, then the `html` element.
	pub fn render(&self) -> String {
		format!("{}\n{}", self.doctype, self.html)
	}
}

impl fmt::Display for Page {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}
