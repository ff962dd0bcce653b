//! Attribute values and element construction options.

use std::borrow::Cow;
use std::fmt;

use super::util::{is_hx_attribute, normalize_attribute_name};

/// A single attribute value.
///
/// `Bool(true)` renders as a bare attribute name, `Bool(false)` omits the
/// attribute. Every other variant renders as `key="value"`.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
	/// A string value.
	Text(Cow<'static, str>),
	/// An integer value.
	Int(i64),
	/// A floating point value.
	Float(f64),
	/// A boolean flag.
	Bool(bool),
}

impl AttrValue {
	/// Returns whether the value counts as "supplied" for the `cls` and
	/// `_type` convenience options.
	///
	/// Empty text, zero and `false` are falsy.
	pub fn is_truthy(&self) -> bool {
		match self {
			AttrValue::Text(text) => !text.is_empty(),
			AttrValue::Int(n) => *n != 0,
			AttrValue::Float(n) => *n != 0.0,
			AttrValue::Bool(flag) => *flag,
		}
	}
}

impl fmt::Display for AttrValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			AttrValue::Text(text) => f.write_str(text),
			AttrValue::Int(n) => write!(f, "{n}"),
			AttrValue::Float(n) => write!(f, "{n}"),
			AttrValue::Bool(flag) => write!(f, "{flag}"),
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		AttrValue::Text(Cow::Owned(value.to_string()))
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		AttrValue::Text(Cow::Owned(value))
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		AttrValue::Text(Cow::Owned(value.clone()))
	}
}

impl From<Cow<'static, str>> for AttrValue {
	fn from(value: Cow<'static, str>) -> Self {
		AttrValue::Text(value)
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		AttrValue::Bool(value)
	}
}

impl From<f32> for AttrValue {
	fn from(value: f32) -> Self {
		AttrValue::Float(f64::from(value))
	}
}

impl From<f64> for AttrValue {
	fn from(value: f64) -> Self {
		AttrValue::Float(value)
	}
}

macro_rules! impl_from_int {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					AttrValue::Int(i64::from(value))
				}
			}
		)*
	};
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<usize> for AttrValue {
	fn from(value: usize) -> Self {
		// Values beyond i64::MAX keep their exact decimal form as text.
		match i64::try_from(value) {
			Ok(n) => AttrValue::Int(n),
			Err(_) => AttrValue::Text(Cow::Owned(value.to_string())),
		}
	}
}

impl From<u64> for AttrValue {
	fn from(value: u64) -> Self {
		match i64::try_from(value) {
			Ok(n) => AttrValue::Int(n),
			Err(_) => AttrValue::Text(Cow::Owned(value.to_string())),
		}
	}
}

/// Construction options for an element.
///
/// Keys are interpreted the way keyword arguments are in the builder's
/// original calling convention:
///
/// | key | effect |
/// |---|---|
/// | `cls` | sets `class` if the value is truthy |
/// | `_type` | sets `type` if the value is truthy |
/// | `hx_*` (hx-family) | stored under the hyphenated name |
/// | anything else | stored verbatim |
///
/// The resulting attribute order is class, type, hx-family attributes in the
/// order given, then all remaining attributes in the order given.
///
/// ## Example
///
/// ```
/// use fasterhtml_core::{Attrs, attrs};
///
/// let options = Attrs::new()
///     .set("hx_post", "/submit-form")
///     .set("id", "response")
///     .cls("card");
///
/// let same = attrs! { hx_post = "/submit-form", id = "response", cls = "card" };
/// assert_eq!(options, same);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attrs {
	class: Option<AttrValue>,
	type_: Option<AttrValue>,
	hx: Vec<(String, AttrValue)>,
	rest: Vec<(String, AttrValue)>,
}

impl Attrs {
	/// Creates an empty set of options.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets an option by its keyword spelling.
	///
	/// `cls` and `_type` feed the convenience slots, hx-family keys are
	/// renamed, every other key is kept as given.
	pub fn set(mut self, key: impl AsRef<str>, value: impl Into<AttrValue>) -> Self {
		let key = key.as_ref();
		let value = value.into();
		match key {
			"cls" => self.class = Some(value),
			"_type" => self.type_ = Some(value),
			_ if is_hx_attribute(key) => {
				self.hx
					.push((normalize_attribute_name(key).into_owned(), value));
			}
			_ => self.rest.push((key.to_string(), value)),
		}
		self
	}

	/// Sets the `class` convenience option.
	pub fn cls(mut self, value: impl Into<AttrValue>) -> Self {
		self.class = Some(value.into());
		self
	}

	/// Sets the `type` convenience option.
	pub fn r#type(mut self, value: impl Into<AttrValue>) -> Self {
		self.type_ = Some(value.into());
		self
	}

	/// Adds an attribute under exactly the given name, bypassing the keyword
	/// interpretation of [`Attrs::set`].
	pub fn attr(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
		self.rest.push((name.into(), value.into()));
		self
	}

	/// Returns `true` if no option was supplied.
	pub fn is_empty(&self) -> bool {
		self.class.is_none() && self.type_.is_none() && self.hx.is_empty() && self.rest.is_empty()
	}

	/// Flattens the options into `(name, value)` pairs in attribute order.
	///
	/// Falsy `cls`/`_type` values are dropped here. Duplicate names are left
	/// for the caller's mapping to merge.
	pub(crate) fn into_ordered_pairs(self) -> impl Iterator<Item = (String, AttrValue)> {
		let class = self
			.class
			.filter(AttrValue::is_truthy)
			.map(|value| ("class".to_string(), value));
		let type_ = self
			.type_
			.filter(AttrValue::is_truthy)
			.map(|value| ("type".to_string(), value));
		class
			.into_iter()
			.chain(type_)
			.chain(self.hx)
			.chain(self.rest)
	}
}

impl From<()> for Attrs {
	fn from(_: ()) -> Self {
		Attrs::new()
	}
}

/// Builds an [`Attrs`] from keyword-style pairs.
///
/// Identifier keys are stringified and passed to [`Attrs::set`], so `cls`,
/// `_type` and `hx_*` keys get their special treatment. String-literal keys
/// allow names that are not Rust identifiers.
///
/// ```
/// use fasterhtml_core::attrs;
///
/// let options = attrs! {
///     type = "email",
///     name = "email",
///     required = true,
///     "data-role" = "field",
/// };
/// assert!(!options.is_empty());
/// ```
#[macro_export]
macro_rules! attrs {
	(@acc $acc:expr ;) => {
		$acc
	};
	(@acc $acc:expr ; $key:literal = $value:expr $(, $($rest:tt)*)?) => {
		$crate::attrs!(@acc $acc.set($key, $value) ; $($($rest)*)?)
	};
	(@acc $acc:expr ; $key:tt = $value:expr $(, $($rest:tt)*)?) => {
		$crate::attrs!(@acc $acc.set(stringify!($key), $value) ; $($($rest)*)?)
	};
	($($body:tt)*) => {
		$crate::attrs!(@acc $crate::Attrs::new() ; $($body)*)
	};
}
