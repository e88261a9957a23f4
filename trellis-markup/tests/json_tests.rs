use trellis_markup::{Node, parse};

#[test]
fn tree_serializes_with_kind_discriminants() {
    let element = parse(r#"<p class="a">hi</p>"#).unwrap().unwrap();
    let value = serde_json::to_value(Node::Element(element)).unwrap();

    assert_eq!(value["kind"], "Element");
    assert_eq!(value["tag_name"], "p");
    assert_eq!(value["is_self_closing"], false);
    assert_eq!(value["props"][0]["name"], "class");
    assert_eq!(value["props"][0]["value"], "a");
    assert_eq!(value["children"][0]["kind"], "Text");
    assert_eq!(value["children"][0]["content"], "hi");
}

#[test]
fn self_closing_serializes_with_empty_children() {
    let element = parse("<img />").unwrap().unwrap();
    let value = serde_json::to_value(Node::Element(element)).unwrap();

    assert_eq!(value["kind"], "Element");
    assert_eq!(value["is_self_closing"], true);
    assert!(value["children"].as_array().unwrap().is_empty());
    assert!(value["props"].as_array().unwrap().is_empty());
}
