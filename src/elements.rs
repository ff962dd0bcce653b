//! Element model and per-tag constructors.
//!
//! # Examples
//!
//! ```
//! use fasterhtml::attrs;
//! use fasterhtml::elements::{Element, Li, Ul};
//!
//! let list = Ul((Li("one", ()), Li("two", ())), attrs! { cls = "items" });
//! assert_eq!(list, Element::new("ul", (Li("one", ()), Li("two", ())), attrs! { cls = "items" }));
//! assert_eq!(
//! 	list.render(),
//! 	"<ul class=\"items\">\n<li>\none\n</li>\n<li>\ntwo\n</li>\n</ul>"
//! );
//! ```

pub use fasterhtml_core::element::*;
pub use fasterhtml_core::factory::*;
