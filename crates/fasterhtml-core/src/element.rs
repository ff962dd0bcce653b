//! Element model for server-side HTML generation.
//!
//! An [`Element`] is a tag, an ordered attribute mapping and an ordered list
//! of child [`Node`]s. Trees are built once and rendered to markup any number
//! of times; rendering never mutates the tree.
//!
//! ## Escaping
//!
//! Neither text children nor attribute values are escaped. A value containing
//! `"` produces malformed markup and untrusted input rendered through this
//! module is an injection risk. Callers serving user-controlled data must
//! sanitize it before it enters the tree.
//!
//! ## Example
//!
//! ```
//! use fasterhtml_core::{Element, attrs};
//!
//! let el = Element::new("p", "Hello", attrs! { cls = "lead" });
//! assert_eq!(el.render(), "<p class=\"lead\">\nHello\n</p>");
//! ```

mod attrs;
pub(crate) mod util;

pub use attrs::{AttrValue, Attrs};
pub use util::{
	DOCTYPE_DECLARATION, HX_ATTRIBUTES, SELF_CLOSING_TAGS, is_doctype_tag, is_hx_attribute,
	is_self_closing_tag, normalize_attribute_name,
};

use indexmap::IndexMap;
use std::borrow::Cow;
use std::fmt;
use std::ops::Add;

/// A child of an element: either a nested element or raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
	/// A nested element.
	Element(Element),
	/// Text inserted verbatim.
	Text(String),
}

impl Node {
	/// Creates a text node from anything with a display form.
	pub fn text(content: impl fmt::Display) -> Self {
		Node::Text(content.to_string())
	}

	/// Renders the node to markup.
	pub fn render(&self) -> String {
		self.to_string()
	}
}

impl fmt::Display for Node {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Node::Element(el) => fmt::Display::fmt(el, f),
			Node::Text(text) => f.write_str(text),
		}
	}
}

impl From<Element> for Node {
	fn from(el: Element) -> Self {
		Node::Element(el)
	}
}

impl<T: fmt::Display> Add<T> for Node {
	type Output = String;

	fn add(self, other: T) -> String {
		format!("{self}{other}")
	}
}

/// An HTML element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
	tag: Cow<'static, str>,
	attributes: IndexMap<String, AttrValue>,
	children: Vec<Node>,
}

impl Element {
	/// Creates an element from a tag, positional content and construction
	/// options.
	///
	/// The tag is not checked against any list of known tags.
	pub fn new(
		tag: impl Into<Cow<'static, str>>,
		content: impl IntoNodes,
		attrs: impl Into<Attrs>,
	) -> Self {
		let mut attributes = IndexMap::new();
		for (name, value) in attrs.into().into_ordered_pairs() {
			// Re-inserting keeps the first position and takes the latest value.
			attributes.insert(name, value);
		}
		Self {
			tag: tag.into(),
			attributes,
			children: content.into_nodes(),
		}
	}

	/// Returns the tag name.
	pub fn tag(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes in render order.
	pub fn attributes(&self) -> &IndexMap<String, AttrValue> {
		&self.attributes
	}

	/// Looks up a single attribute by its stored name.
	pub fn attribute(&self, name: &str) -> Option<&AttrValue> {
		self.attributes.get(name)
	}

	/// Returns the children in render order.
	pub fn children(&self) -> &[Node] {
		&self.children
	}

	/// Returns `true` if the element renders as `<tag attrs />`.
	pub fn is_self_closing(&self) -> bool {
		is_self_closing_tag(&self.tag)
	}

	/// Returns `true` if the element renders as the doctype declaration.
	pub fn is_doctype(&self) -> bool {
		is_doctype_tag(&self.tag)
	}

	/// Renders the attribute list, space separated, without a leading space.
	///
	/// `true` renders the bare name and `false` omits the attribute.
	pub fn render_attributes(&self) -> String {
		let mut rendered = Vec::with_capacity(self.attributes.len());
		for (name, value) in &self.attributes {
			match value {
				AttrValue::Bool(true) => rendered.push(name.clone()),
				AttrValue::Bool(false) => {}
				value => rendered.push(format!("{name}=\"{value}\"")),
			}
		}
		rendered.join(" ")
	}

	/// Renders the children joined by newlines.
	pub fn render_content(&self) -> String {
		self.children
			.iter()
			.map(Node::render)
			.collect::<Vec<_>>()
			.join("\n")
	}

	/// Renders the element to markup.
	///
	/// Output is a pure function of the tree. Values are not escaped.
	pub fn render(&self) -> String {
		if self.is_doctype() {
			return DOCTYPE_DECLARATION.to_string();
		}

		let attrs = self.render_attributes();
		let open_tag = if attrs.is_empty() {
			format!("<{}", self.tag)
		} else {
			format!("<{} {}", self.tag, attrs)
		};

		if self.is_self_closing() {
			return format!("{open_tag} />");
		}

		let inner = self.render_content();
		if inner.is_empty() {
			format!("{open_tag}></{}>", self.tag)
		} else {
			format!("{open_tag}>\n{inner}\n</{}>", self.tag)
		}
	}
}

impl fmt::Display for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.render())
	}
}

impl<T: fmt::Display> Add<T> for Element {
	type Output = String;

	fn add(self, other: T) -> String {
		format!("{self}{other}")
	}
}

impl<T: fmt::Display> Add<T> for &Element {
	type Output = String;

	fn add(self, other: T) -> String {
		format!("{self}{other}")
	}
}

/// Conversion of positional content into child nodes.
///
/// Text-like values become [`Node::Text`] through their display form,
/// elements become [`Node::Element`], and collections and tuples flatten in
/// order.
pub trait IntoNodes {
	/// Converts self into child nodes.
	fn into_nodes(self) -> Vec<Node>;
}

impl IntoNodes for () {
	fn into_nodes(self) -> Vec<Node> {
		Vec::new()
	}
}

impl IntoNodes for Node {
	fn into_nodes(self) -> Vec<Node> {
		vec![self]
	}
}

impl IntoNodes for Element {
	fn into_nodes(self) -> Vec<Node> {
		vec![Node::Element(self)]
	}
}

impl IntoNodes for &str {
	fn into_nodes(self) -> Vec<Node> {
		vec![Node::Text(self.to_string())]
	}
}

impl IntoNodes for String {
	fn into_nodes(self) -> Vec<Node> {
		vec![Node::Text(self)]
	}
}

impl IntoNodes for &String {
	fn into_nodes(self) -> Vec<Node> {
		vec![Node::Text(self.clone())]
	}
}

impl IntoNodes for Cow<'static, str> {
	fn into_nodes(self) -> Vec<Node> {
		vec![Node::Text(self.into_owned())]
	}
}

macro_rules! impl_into_nodes_display {
	($($ty:ty),*) => {
		$(
			impl IntoNodes for $ty {
				fn into_nodes(self) -> Vec<Node> {
					vec![Node::text(self)]
				}
			}
		)*
	};
}

impl_into_nodes_display!(
	bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64
);

impl<T: IntoNodes> IntoNodes for Option<T> {
	fn into_nodes(self) -> Vec<Node> {
		match self {
			Some(content) => content.into_nodes(),
			None => Vec::new(),
		}
	}
}

impl<T: IntoNodes> IntoNodes for Vec<T> {
	fn into_nodes(self) -> Vec<Node> {
		self.into_iter().flat_map(IntoNodes::into_nodes).collect()
	}
}

impl<T: IntoNodes, const N: usize> IntoNodes for [T; N] {
	fn into_nodes(self) -> Vec<Node> {
		self.into_iter().flat_map(IntoNodes::into_nodes).collect()
	}
}

macro_rules! impl_into_nodes_tuple {
	($($name:ident),+) => {
		impl<$($name: IntoNodes),+> IntoNodes for ($($name,)+) {
			#[allow(non_snake_case)]
			fn into_nodes(self) -> Vec<Node> {
				let ($($name,)+) = self;
				let mut nodes = Vec::new();
				$(nodes.extend($name.into_nodes());)+
				nodes
			}
		}
	};
}

impl_into_nodes_tuple!(A);
impl_into_nodes_tuple!(A, B);
impl_into_nodes_tuple!(A, B, C);
impl_into_nodes_tuple!(A, B, C, D);
impl_into_nodes_tuple!(A, B, C, D, E);
impl_into_nodes_tuple!(A, B, C, D, E, F);
impl_into_nodes_tuple!(A, B, C, D, E, F, G);
impl_into_nodes_tuple!(A, B, C, D, E, F, G, H);
impl_into_nodes_tuple!(A, B, C, D, E, F, G, H, I);
impl_into_nodes_tuple!(A, B, C, D, E, F, G, H, I, J);
impl_into_nodes_tuple!(A, B, C, D, E, F, G, H, I, J, K);
impl_into_nodes_tuple!(A, B, C, D, E, F, G, H, I, J, K, L);
