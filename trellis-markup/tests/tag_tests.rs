use trellis_markup::{attributes, is_self_closing, tag_name};

#[test]
fn tag_name_from_open_close_and_attributed_tags() {
    assert_eq!(tag_name("<div>"), "div");
    assert_eq!(tag_name("</div>"), "div");
    assert_eq!(tag_name(r#"<div class="x">"#), "div");
    assert_eq!(tag_name("<img />"), "img");
    assert_eq!(tag_name("<h1>"), "h1");
}

#[test]
fn tag_name_passes_bare_names_through() {
    assert_eq!(tag_name("div"), "div");
    assert_eq!(tag_name(""), "");
}

#[test]
fn tag_name_keeps_source_casing() {
    assert_eq!(tag_name("<DIV>"), "DIV");
}

#[test]
fn tag_name_of_unrecognizable_input_is_empty() {
    assert_eq!(tag_name("<!doctype html>"), "");
    assert_eq!(tag_name("< >"), "");
}

#[test]
fn attributes_in_source_order() {
    let attrs = attributes(r#"<div class="x" id="y">"#);
    assert_eq!(attrs.len(), 2);
    assert_eq!(attrs[0].name, "class");
    assert_eq!(attrs[0].value, "x");
    assert_eq!(attrs[1].name, "id");
    assert_eq!(attrs[1].value, "y");
}

#[test]
fn single_quoted_and_bare_values_are_dropped() {
    assert!(attributes("<div data-x='y'>").is_empty());
    assert!(attributes("<div data-x=y>").is_empty());
    assert!(attributes("<div>").is_empty());
}

#[test]
fn value_is_split_on_the_first_equals() {
    let attrs = attributes(r#"<a data-eq="a=b">"#);
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].name, "data-eq");
    assert_eq!(attrs[0].value, "a=b");
}

#[test]
fn quote_stripping_is_global() {
    // an apostrophe inside the value is removed along with the delimiters
    let attrs = attributes(r#"<a title="it's">"#);
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].value, "its");
}

#[test]
fn self_closing_needs_the_space() {
    assert!(is_self_closing("<img />"));
    assert!(is_self_closing(r#"<img src="a.png" />"#));
    assert!(!is_self_closing("<img/>"));
    assert!(!is_self_closing("<div>"));
}
