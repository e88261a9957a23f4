use once_cell::sync::Lazy;
use regex::Regex;

use crate::ast::{ElementNode, Node, TextNode};
use crate::classify::{Lexical, classify};
use crate::cursor::Cursor;
use crate::error::ParseError;
use crate::tag::{attributes, is_self_closing, tag_name};

/// Upper bound on child-collection passes for a single element. An element
/// whose close tag is not reached within this many passes aborts the whole
/// parse with [`ParseError::RunawayElement`].
pub const MAX_CHILD_PASSES: usize = 30;

static ELEMENT_AHEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^<[a-z0-9]").unwrap());
static ANY_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(<.+?>)").unwrap());
static CLOSE_TAG_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^</([a-z0-9][^\t\r\n\f />]*)").unwrap());
static CLOSE_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(</.+?>)").unwrap());

/// Parse one root element from `source`.
///
/// `Ok(None)` means no element starts the input. The only error is the
/// runaway-loop fault for an element whose close tag never shows up.
pub fn parse(source: &str) -> Result<Option<ElementNode>, ParseError> {
    let mut cursor = Cursor::new(source);
    parse_node(&mut cursor)
}

/// Build the element subtree starting at the cursor, if one starts here.
///
/// The cursor is shared by reference down the recursion, so a nested call's
/// consumption is visible here when it returns.
pub fn parse_node(cursor: &mut Cursor) -> Result<Option<ElementNode>, ParseError> {
    let Some(mut element) = find_next_element(cursor) else {
        return Ok(None);
    };
    if element.is_self_closing {
        return Ok(Some(element));
    }

    let mut children = Vec::new();
    for _ in 0..MAX_CHILD_PASSES {
        cursor.skip_whitespace();

        let (text, tag) = match classify(cursor.rest()) {
            Lexical::StartTag { tag } => (String::new(), tag),
            Lexical::EndTagAhead => (String::new(), String::new()),
            Lexical::TextThenSelfClose { text, tag } => (text, tag),
            Lexical::TextThenEnd { text } => (text, String::new()),
            Lexical::TextThenStart { text, tag } => (text, tag),
            Lexical::NoMatch => (String::new(), String::new()),
        };

        if !text.is_empty() {
            log::trace!(target: "trellis.parse", "text child in <{}>: {text:?}", element.tag_name);
            cursor.advance(text.len());
            children.push(Node::Text(TextNode { content: text }));
        }
        if !tag.is_empty() {
            // The classifier's tag text is only a signal; the recursive call
            // re-discovers and consumes the tag from the cursor itself.
            if let Some(child) = parse_node(cursor)? {
                children.push(Node::Element(child));
            }
        }

        if is_next_close_tag(cursor, &element.tag_name) {
            element.children = children;
            return Ok(Some(element));
        }
    }

    log::debug!(
        target: "trellis.parse",
        "giving up on <{}>: close tag not reached within {MAX_CHILD_PASSES} passes",
        element.tag_name
    );
    Err(ParseError::RunawayElement {
        tag_name: element.tag_name,
    })
}

/// Consume the tag at the cursor and shape it into an element with no
/// children yet.
///
/// `None` when no element starts here. That includes an unterminated `<tag`
/// with no `>` left in the source: there is no tag to consume, and the
/// caller treats the remainder as unparseable.
pub fn find_next_element(cursor: &mut Cursor) -> Option<ElementNode> {
    cursor.skip_whitespace();
    if !ELEMENT_AHEAD.is_match(cursor.rest()) {
        return None;
    }
    let tag = ANY_TAG.find(cursor.rest())?.as_str().to_string();
    cursor.advance(tag.len());
    cursor.skip_whitespace();

    log::trace!(target: "trellis.parse", "open tag {tag:?}");
    Some(ElementNode {
        tag_name: tag_name(&tag),
        is_self_closing: is_self_closing(&tag),
        props: attributes(&tag),
        children: Vec::new(),
        tag,
    })
}

/// Probe for `</name>` at the cursor. On a name match the full close tag is
/// consumed and the probe reports true; otherwise the cursor is left where
/// it was, apart from the whitespace skip.
///
/// The name comparison is exact: tag patterns match case-insensitively, but
/// `<DIV>` is never closed by `</div>`.
pub fn is_next_close_tag(cursor: &mut Cursor, name: &str) -> bool {
    cursor.skip_whitespace();
    let Some(caps) = CLOSE_TAG_NAME.captures(cursor.rest()) else {
        return false;
    };
    if &caps[1] != name {
        return false;
    }
    if let Some(found) = CLOSE_TAG.find(cursor.rest()) {
        log::trace!(target: "trellis.parse", "close tag {:?}", found.as_str());
        cursor.advance(found.as_str().len());
    }
    true
}
