//! Fragment classification
//!
//! Decides which node variant the first fragment of a new node starts.

use regex::Regex;
use std::sync::LazyLock;

/// Tag name: an ASCII alphanumeric run right after `<`, terminated by
/// whitespace, `/`, `>`, a parenthesis or the end of the fragment
static NODE_TYPE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^<([a-zA-Z0-9]+)(?:[\s()/>]|$)").expect("tag name pattern is valid")
});

/// Elements that cannot have any child nodes
const VOID_TYPES: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Variant a fragment would start
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentClass<'a> {
    Text,
    Comment,
    Doctype,
    Textarea,
    Void(&'a str),
    Element(&'a str),
}

/// Extract the tag name of a fragment, if it has one.
///
/// Names are returned exactly as written; nothing is lowercased.
pub fn node_type_name(fragment: &str) -> Option<&str> {
    NODE_TYPE_NAME
        .captures(fragment)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Check if a tag name is a void element (case-sensitive)
pub fn is_void_element(name: &str) -> bool {
    VOID_TYPES.contains(&name)
}

/// Classify the first fragment of a new node
pub fn classify(fragment: &str) -> FragmentClass<'_> {
    if !fragment.starts_with('<') {
        return FragmentClass::Text;
    }
    if fragment.starts_with("<!--") {
        return FragmentClass::Comment;
    }
    if fragment.starts_with("<!doctype") {
        return FragmentClass::Doctype;
    }
    if fragment.starts_with("<textarea") {
        return FragmentClass::Textarea;
    }

    match node_type_name(fragment) {
        Some(name) if is_void_element(name) => FragmentClass::Void(name),
        Some(name) => FragmentClass::Element(name),
        // Not a proper tag, keep it as literal text
        None => FragmentClass::Text,
    }
}
