use once_cell::sync::Lazy;
use regex::Regex;

static START_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^<[a-z0-9].*?/*>").unwrap());
static END_TAG_AHEAD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)^</[a-z0-9]").unwrap());
static TEXT_THEN_SELF_CLOSE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([^<]+?)(<[a-z0-9].*? />)").unwrap());
static TEXT_THEN_END: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([^<]+?)(</[a-z0-9].*?>)").unwrap());
static TEXT_THEN_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^([^<]+?)(<[a-z0-9].*?>)").unwrap());

/// The lexical situation at the front of the cursor.
///
/// Variants are listed in the order the patterns are tried. The order is
/// behaviorally significant: a tag at position zero always wins over any
/// reading that treats leading bytes as text.
#[derive(Debug, Clone, PartialEq)]
pub enum Lexical {
    /// A start or self-closing tag begins immediately. The matched tag text
    /// is returned verbatim; the classifier never advances the cursor.
    StartTag { tag: String },
    /// A close tag begins immediately. Nothing is extracted; the caller
    /// should probe for its own close tag next.
    EndTagAhead,
    /// Text followed by a self-closing tag. The text is trimmed.
    TextThenSelfClose { text: String, tag: String },
    /// Text followed by a close tag. The text is trimmed; the tag itself is
    /// not surfaced.
    TextThenEnd { text: String },
    /// Text followed by a start tag. The text is NOT trimmed, unlike the two
    /// cases above. The mismatch is long-standing observed behavior and is
    /// kept as-is rather than normalized.
    TextThenStart { text: String, tag: String },
    /// Nothing recognizable; the caller can make no progress here.
    NoMatch,
}

/// Classify the markup at the front of `rest` into exactly one of the six
/// lexical situations.
pub fn classify(rest: &str) -> Lexical {
    if let Some(found) = START_TAG.find(rest) {
        return Lexical::StartTag {
            tag: found.as_str().to_string(),
        };
    }
    if END_TAG_AHEAD.is_match(rest) {
        return Lexical::EndTagAhead;
    }
    if let Some(caps) = TEXT_THEN_SELF_CLOSE.captures(rest) {
        return Lexical::TextThenSelfClose {
            text: caps[1].trim().to_string(),
            tag: caps[2].to_string(),
        };
    }
    if let Some(caps) = TEXT_THEN_END.captures(rest) {
        return Lexical::TextThenEnd {
            text: caps[1].trim().to_string(),
        };
    }
    if let Some(caps) = TEXT_THEN_START.captures(rest) {
        return Lexical::TextThenStart {
            text: caps[1].to_string(),
            tag: caps[2].to_string(),
        };
    }
    Lexical::NoMatch
}
