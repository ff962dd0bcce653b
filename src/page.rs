//! Full-document skeleton with optional Pico CSS and htmx.
//!
//! # Examples
//!
//! ```
//! use fasterhtml::elements::H1;
//! use fasterhtml::page::{Page, PageOptions};
//!
//! let page = Page::with_options(H1("Hi", ()), PageOptions::bare());
//! assert!(!page.render().contains("<script"));
//! ```

pub use fasterhtml_core::document::*;
