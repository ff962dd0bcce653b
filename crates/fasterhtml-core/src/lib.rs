//! # FasterHTML Core
//!
//! Server-side HTML element builder.
//!
//! ## Overview
//!
//! - [`element`]: the [`Element`] tree, attribute handling and rendering
//! - [`factory`]: one constructor per standard tag ([`Div`], [`Input`], ...)
//! - [`document`]: the [`Page`] skeleton (doctype, head boilerplate, body)
//!
//! Construction and rendering are synchronous and touch no shared state, so
//! independent trees can be built and rendered from any thread.
//!
//! Output is **not** escaped. See [`element`] for details.
//!
//! ## Example
//!
//! ```
//! use fasterhtml_core::*;
//!
//! let page = Page::new(Div(
//!     (H1("Contact Us", ()), P("We will be in touch soon.", ())),
//!     attrs! { id = "contact" },
//! ));
//!
//! let html = page.to_string();
//! assert!(html.starts_with("<!DOCTYPE html>\n"));
//! assert!(html.contains("<div id=\"contact\">\n<h1>\nContact Us\n</h1>"));
//! ```

#![warn(missing_docs)]

pub mod document;
pub mod element;
pub mod factory;

pub use document::{HTMX_URL, PICO_CSS_URL, Page, PageOptions};
pub use element::{AttrValue, Attrs, Element, IntoNodes, Node};
pub use factory::*;
