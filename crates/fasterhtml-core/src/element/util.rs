//! Static configuration for element rendering.
//!
//! This module holds the read-only tag and attribute tables consulted during
//! construction and rendering. None of them is ever mutated.

use std::borrow::Cow;

/// Literal emitted for any element whose tag is `doctype` (case-insensitive).
pub const DOCTYPE_DECLARATION: &str = "<!DOCTYPE html>";

/// Tags rendered as `<tag attrs />` with no content and no closing tag.
///
/// Membership is case-sensitive.
pub const SELF_CLOSING_TAGS: &[&str] = &[
	"area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
	"track", "wbr",
];

/// Interactive (htmx) attribute names in their underscore construction spelling.
///
/// A construction key found in this list is stored with every underscore
/// replaced by a hyphen, e.g. `hx_push_url` becomes `hx-push-url`.
pub const HX_ATTRIBUTES: &[&str] = &[
	"hx_get",
	"hx_post",
	"hx_put",
	"hx_delete",
	"hx_patch",
	"hx_trigger",
	"hx_target",
	"hx_swap",
	"hx_include",
	"hx_select",
	"hx_indicator",
	"hx_push_url",
	"hx_confirm",
	"hx_disable",
	"hx_replace_url",
	"hx_on",
];

/// Returns `true` if `tag` never renders children or a closing tag.
pub fn is_self_closing_tag(tag: &str) -> bool {
	SELF_CLOSING_TAGS.contains(&tag)
}

/// Returns `true` if `tag` is the doctype pseudo-tag.
pub fn is_doctype_tag(tag: &str) -> bool {
	tag.eq_ignore_ascii_case("doctype")
}

/// Returns `true` if `key` is an hx-family attribute in underscore spelling.
pub fn is_hx_attribute(key: &str) -> bool {
	HX_ATTRIBUTES.contains(&key)
}

/// Rewrites an hx-family construction key to its hyphenated attribute name.
///
/// Any other key is returned unchanged, without allocating.
pub fn normalize_attribute_name(key: &str) -> Cow<'_, str> {
	if is_hx_attribute(key) {
		Cow::Owned(key.replace('_', "-"))
	} else {
		Cow::Borrowed(key)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("br", true)]
	#[case("input", true)]
	#[case("wbr", true)]
	#[case("param", true)]
	#[case("div", false)]
	#[case("script", false)]
	#[case("BR", false)]
	fn test_is_self_closing_tag(#[case] tag: &str, #[case] expected: bool) {
		assert_eq!(is_self_closing_tag(tag), expected);
	}

	#[rstest]
	#[case("doctype")]
	#[case("DOCTYPE")]
	#[case("DocType")]
	fn test_is_doctype_tag(#[case] tag: &str) {
		assert!(is_doctype_tag(tag));
	}

	#[rstest]
	fn test_is_doctype_tag_rejects_other_tags() {
		assert!(!is_doctype_tag("html"));
		assert!(!is_doctype_tag("doctypes"));
	}

	#[rstest]
	#[case("hx_post", "hx-post")]
	#[case("hx_push_url", "hx-push-url")]
	#[case("hx_replace_url", "hx-replace-url")]
	#[case("hx_on", "hx-on")]
	fn test_normalize_hx_attribute(#[case] key: &str, #[case] expected: &str) {
		assert_eq!(normalize_attribute_name(key), expected);
	}

	#[rstest]
	#[case("initial_scale")]
	#[case("data_value")]
	#[case("hx-post")]
	#[case("hx_unknown")]
	fn test_normalize_leaves_other_keys_verbatim(#[case] key: &str) {
		assert_eq!(normalize_attribute_name(key), Cow::Borrowed(key));
	}

	#[rstest]
	fn test_hx_attribute_table_size() {
		assert_eq!(HX_ATTRIBUTES.len(), 16);
		assert_eq!(SELF_CLOSING_TAGS.len(), 14);
	}
}
