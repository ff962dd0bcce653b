//! # FasterHTML
//!
//! Build HTML from plain Rust function calls.
//!
//! Every common HTML tag has a constructor named after it (`Div`, `P`,
//! `Form`, ...) taking positional content and keyword-style options. Elements
//! render to a deterministic string: attributes in a fixed order, children
//! on their own lines, void tags self-closed. htmx attributes can be written
//! with underscores (`hx_post`) and come out hyphenated (`hx-post`).
//!
//! ## Feature Flags
//!
//! - `server` (default) - demonstration web application with a contact form
//!   and a SQLite-backed notes API, see [`server`]
//!
//! ## Quick Example
//!
//! ```
//! use fasterhtml::prelude::*;
//!
//! let page = Page::new(Form(
//! 	(
//! 		Input((), attrs! { type = "email", name = "email", required = true }),
//! 		Button("Submit", attrs! { type = "submit" }),
//! 	),
//! 	attrs! { hx_post = "/submit-form", hx_target = "#response" },
//! ));
//!
//! let html = page.render();
//! assert!(html.starts_with("<!DOCTYPE html>\n<html>"));
//! assert!(html.contains("<form hx-post=\"/submit-form\" hx-target=\"#response\">"));
//! ```
//!
//! Output is not escaped. Untrusted text must be escaped by the caller before
//! it is passed as content or as an attribute value.

pub mod elements;
pub mod page;
#[cfg(feature = "server")]
pub mod server;

pub use fasterhtml_core::attrs;
pub use fasterhtml_core::{AttrValue, Attrs, Element, IntoNodes, Node};
pub use fasterhtml_core::{HTMX_URL, PICO_CSS_URL, Page, PageOptions};

/// Everything needed to build markup: the element model, every tag
/// constructor, the page skeleton and the `attrs!` macro.
pub mod prelude {
	pub use fasterhtml_core::attrs;
	pub use fasterhtml_core::factory::*;
	pub use fasterhtml_core::{AttrValue, Attrs, Element, IntoNodes, Node, Page, PageOptions};
}
