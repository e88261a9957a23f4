use serde::Serialize;

/// A parsed markup node: an element or a run of text.
///
/// The serialized form carries a `kind` discriminant so downstream consumers
/// can dispatch on the variant without probing fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind")]
pub enum Node {
    Element(ElementNode),
    Text(TextNode),
}

impl Node {
    pub fn as_element(&self) -> Option<&ElementNode> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Element(_) => None,
            Node::Text(text) => Some(text),
        }
    }
}

/// An element together with its attributes and the children collected
/// between its open tag and matching close tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementNode {
    /// Verbatim opening-tag source, e.g. `<div class="x">`.
    pub tag: String,
    /// Bare name derived from `tag`, e.g. `div`.
    pub tag_name: String,
    pub is_self_closing: bool,
    /// Attributes in left-to-right source order.
    pub props: Vec<AttributeNode>,
    /// Empty for self-closing elements; assigned once when the close tag
    /// is reached.
    pub children: Vec<Node>,
}

impl ElementNode {
    /// Look up a prop value by attribute name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.props
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }
}

/// Trimmed or untrimmed text between two markup boundaries.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextNode {
    pub content: String,
}

/// A `name="value"` pair with the quote characters stripped from the value.
/// Attributes only ever appear in an element's `props`, never as children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeNode {
    pub name: String,
    pub value: String,
}
