use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::AttributeNode;

static TAG_NAME: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)</*([a-z0-9]+).*>").unwrap());
static ATTR_PAIR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"[^"' ]+=["][^"]+?["]"#).unwrap());

/// Bare name of a tag, e.g. `div` for `<div class="x">`.
///
/// A string with no `<` is assumed to already be a bare name and comes back
/// unchanged. An unrecognizable tag yields the empty string.
pub fn tag_name(tag_text: &str) -> String {
    if !tag_text.contains('<') {
        return tag_text.to_string();
    }
    TAG_NAME
        .captures(tag_text)
        .map(|caps| caps[1].to_string())
        .unwrap_or_default()
}

/// Extract `key="value"` pairs from a tag, left to right. Only double-quoted
/// values are recognized; single-quoted and bare values are dropped without
/// complaint.
pub fn attributes(tag_text: &str) -> Vec<AttributeNode> {
    ATTR_PAIR
        .find_iter(tag_text)
        .filter_map(|pair| {
            let (name, value) = pair.as_str().split_once('=')?;
            Some(AttributeNode {
                name: name.to_string(),
                // quote stripping is a blanket substitution, so quote
                // characters inside the value disappear too
                value: value.replace(['"', '\''], ""),
            })
        })
        .collect()
}

/// A tag only counts as self-closing when written with the space, `" />"`.
/// `/>` with no preceding space is not recognized.
pub fn is_self_closing(tag_text: &str) -> bool {
    tag_text.ends_with(" />")
}
