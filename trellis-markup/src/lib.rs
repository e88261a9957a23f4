//! Single-pass, recursive-descent parser turning an HTML-like markup string
//! into a tree of element/text/attribute nodes for a downstream template
//! compiler.
//!
//! The grammar is a deliberate ad-hoc subset: no entities, no comments, no
//! doctype, no void-element rules, and no recovery beyond a per-element pass
//! limit. Malformed input either silently yields an incomplete tree or
//! aborts with [`ParseError`].

pub mod ast;
pub mod classify;
pub mod cursor;
pub mod error;
pub mod parse;
pub mod tag;

pub use ast::{AttributeNode, ElementNode, Node, TextNode};
pub use classify::{Lexical, classify};
pub use cursor::Cursor;
pub use error::ParseError;
pub use parse::{MAX_CHILD_PASSES, find_next_element, is_next_close_tag, parse, parse_node};
pub use tag::{attributes, is_self_closing, tag_name};
