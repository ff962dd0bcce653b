//! Per-tag element constructors.
//!
//! Every name in [`HTML_TAGS`] has a constructor named after the tag with its
//! first letter upper-cased (`div` becomes [`Div`]). Each one is a thin
//! wrapper over [`Element::new`] with the tag pre-bound; content and options
//! pass through unchanged.
//!
//! ## Example
//!
//! ```
//! use fasterhtml_core::attrs;
//! use fasterhtml_core::factory::{Button, Form, Input};
//!
//! let form = Form(
//!     (
//!         Input((), attrs! { type = "email", name = "email", required = true }),
//!         Button("Submit", attrs! { type = "submit" }),
//!     ),
//!     attrs! { hx_post = "/submit-form", hx_target = "#response" },
//! );
//!
//! let html = form.render();
//! assert!(html.starts_with("<form hx-post=\"/submit-form\" hx-target=\"#response\">"));
//! assert!(html.contains("<input type=\"email\" name=\"email\" required />"));
//! ```

#![allow(non_snake_case)]

use crate::element::{Attrs, Element, IntoNodes};

macro_rules! define_elements {
	($($(#[$meta:meta])* $name:ident => $tag:literal;)*) => {
		$(
			#[doc = concat!("Creates a `<", $tag, ">` element.")]
			$(#[$meta])*
			pub fn $name(content: impl IntoNodes, attrs: impl Into<Attrs>) -> Element {
				Element::new($tag, content, attrs)
			}
		)*

		/// Every tag name with a constructor in this module, in declaration order.
		pub const HTML_TAGS: &[&str] = &[$($tag),*];
	};
}

define_elements! {
	A => "a";
	Abbr => "abbr";
	Address => "address";
	Area => "area";
	Article => "article";
	Aside => "aside";
	Audio => "audio";
	B => "b";
	Base => "base";
	Bdi => "bdi";
	Bdo => "bdo";
	Blockquote => "blockquote";
	Body => "body";
	Br => "br";
	Button => "button";
	Canvas => "canvas";
	Caption => "caption";
	Cite => "cite";
	Code => "code";
	Col => "col";
	Colgroup => "colgroup";
	Data => "data";
	Datalist => "datalist";
	Dd => "dd";
	Del => "del";
	Details => "details";
	Dfn => "dfn";
	Dialog => "dialog";
	Div => "div";
	Dl => "dl";
	Dt => "dt";
	Em => "em";
	Embed => "embed";
	Fieldset => "fieldset";
	Figcaption => "figcaption";
	Figure => "figure";
	Footer => "footer";
	Form => "form";
	H1 => "h1";
	H2 => "h2";
	H3 => "h3";
	H4 => "h4";
	H5 => "h5";
	H6 => "h6";
	Head => "head";
	Header => "header";
	Hgroup => "hgroup";
	Hr => "hr";
	Html => "html";
	I => "i";
	Iframe => "iframe";
	Img => "img";
	/// Self-closing; any content is dropped at render time.
	Input => "input";
	Ins => "ins";
	Kbd => "kbd";
	Label => "label";
	Legend => "legend";
	Li => "li";
	Link => "link";
	Main => "main";
	Map => "map";
	Mark => "mark";
	Meta => "meta";
	Meter => "meter";
	Nav => "nav";
	Noscript => "noscript";
	Object => "object";
	Ol => "ol";
	Optgroup => "optgroup";
	Option => "option";
	Output => "output";
	P => "p";
	Param => "param";
	Picture => "picture";
	Pre => "pre";
	Progress => "progress";
	Q => "q";
	Rp => "rp";
	Rt => "rt";
	Ruby => "ruby";
	S => "s";
	Samp => "samp";
	Script => "script";
	Section => "section";
	Select => "select";
	Small => "small";
	Source => "source";
	Span => "span";
	Strong => "strong";
	Style => "style";
	Sub => "sub";
	Summary => "summary";
	Sup => "sup";
	Table => "table";
	Tbody => "tbody";
	Td => "td";
	Template => "template";
	Textarea => "textarea";
	Tfoot => "tfoot";
	Th => "th";
	Thead => "thead";
	Time => "time";
	Title => "title";
	Tr => "tr";
	Track => "track";
	U => "u";
	Ul => "ul";
	Var => "var";
	Video => "video";
	Wbr => "wbr";
	/// Always renders as `<!DOCTYPE html>`, whatever it is given.
	Doctype => "doctype";
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::attrs;
	use rstest::rstest;

	#[rstest]
	fn test_constructor_binds_tag() {
		assert_eq!(Div((), ()).tag(), "div");
		assert_eq!(H1("x", ()).tag(), "h1");
		assert_eq!(Main((), ()).tag(), "main");
		assert_eq!(Wbr((), ()).tag(), "wbr");
	}

	#[rstest]
	fn test_tag_list() {
		assert_eq!(HTML_TAGS.len(), 111);
		assert_eq!(HTML_TAGS.first(), Some(&"a"));
		assert_eq!(HTML_TAGS.last(), Some(&"doctype"));
		assert!(HTML_TAGS.contains(&"template"));
	}

	#[rstest]
	fn test_div_without_children() {
		assert_eq!(Div((), ()).render(), "<div></div>");
	}

	#[rstest]
	fn test_paragraph_with_text() {
		assert_eq!(P("X", ()).render(), "<p>\nX\n</p>");
	}

	#[rstest]
	fn test_input_attribute_order() {
		let input = Input((), attrs! { type = "email", name = "email", required = true });
		assert_eq!(input.render(), "<input type=\"email\" name=\"email\" required />");
	}

	#[rstest]
	fn test_hx_attributes_hyphenated() {
		let div = Div((), attrs! { hx_post = "/submit-form", hx_target = "#response" });
		let html = div.render();
		assert_eq!(html, "<div hx-post=\"/submit-form\" hx-target=\"#response\"></div>");
		assert!(!html.contains("hx_post"));
	}

	#[rstest]
	fn test_doctype_constructor() {
		assert_eq!(Doctype("ignored", attrs! { lang = "en" }).render(), "<!DOCTYPE html>");
	}

	#[rstest]
	fn test_cls_and_type_convenience() {
		let button = Button("Save", attrs! { id = "save", _type = "submit", cls = "primary" });
		assert_eq!(
			button.render(),
			"<button class=\"primary\" type=\"submit\" id=\"save\">\nSave\n</button>"
		);
	}

	#[rstest]
	fn test_nested_constructors() {
		let list = Ul((Li("one", ()), Li("two", ())), attrs! { cls = "items" });
		assert_eq!(
			list.render(),
			"<ul class=\"items\">\n<li>\none\n</li>\n<li>\ntwo\n</li>\n</ul>"
		);
	}
}
