//! Comprehensive tests for domlens-access
//!
//! Exercises the public accessor surface across all four facets.

use domlens_access::case::{to_camel, to_kebab};
use domlens_access::{attr, data, prop, style, AccessOutcome, AccessRequest};
use domlens_dom::{Element, Value};

#[test]
fn test_attribute_round_trip() {
    let mut el = Element::new("div");

    attr(&mut el, AccessRequest::set("id", "main")).unwrap();
    let value = attr(&mut el, AccessRequest::get("id")).unwrap().into_one();

    assert_eq!(value, Some(Value::Str("main".into())));
}

#[test]
fn test_attribute_get_many_preserves_order() {
    let mut el = Element::new("div");
    el.set_attribute("class", "container");
    el.set_attribute("id", "main");

    let values = attr(&mut el, AccessRequest::get_many(["id", "class"]))
        .unwrap()
        .into_many()
        .unwrap();

    let keys: Vec<_> = values.keys().collect();
    assert_eq!(keys, vec!["id", "class"]);
    assert_eq!(values.get("id"), Some(&Value::Str("main".into())));
    assert_eq!(values.get("class"), Some(&Value::Str("container".into())));
}

#[test]
fn test_attribute_set_many() {
    let mut el = Element::new("a");

    attr(
        &mut el,
        AccessRequest::set_many([("href", "/home"), ("target", "_blank")]),
    )
    .unwrap();

    assert_eq!(el.attribute("href"), Some("/home"));
    assert_eq!(el.attribute("target"), Some("_blank"));
}

#[test]
fn test_property_round_trip_keeps_type() {
    let mut el = Element::new("input");

    prop(&mut el, AccessRequest::set("valueAsNumber", 2.5f64)).unwrap();
    let value = prop(&mut el, AccessRequest::get("valueAsNumber"))
        .unwrap()
        .into_one();

    assert_eq!(value, Some(Value::Num(2.5)));
}

#[test]
fn test_property_missing_key_reads_none() {
    let mut el = Element::new("input");

    let value = prop(&mut el, AccessRequest::get("checked")).unwrap().into_one();
    assert_eq!(value, None);
}

#[test]
fn test_style_map_write_then_computed_read() {
    let mut el = Element::new("div");

    style(
        &mut el,
        AccessRequest::set_many([("background-color", "red"), ("width", "100px")]),
    )
    .unwrap();

    let value = style(&mut el, AccessRequest::get("background-color"))
        .unwrap()
        .into_one();
    assert_eq!(value, Some(Value::Str("red".into())));
}

#[test]
fn test_style_accepts_camel_and_kebab_keys() {
    let mut el = Element::new("div");

    style(&mut el, AccessRequest::set("backgroundColor", "red")).unwrap();

    let kebab = style(&mut el, AccessRequest::get("background-color"))
        .unwrap()
        .into_one();
    let camel = style(&mut el, AccessRequest::get("backgroundColor"))
        .unwrap()
        .into_one();
    assert_eq!(kebab, Some(Value::Str("red".into())));
    assert_eq!(camel, kebab);
}

#[test]
fn test_style_pseudo_element_read() {
    let mut el = Element::new("div");
    el.apply_cascaded(Some("::after"), "width", "16px");

    let value = style(&mut el, AccessRequest::get("width:after"))
        .unwrap()
        .into_one();
    assert_eq!(value, Some(Value::Str("16px".into())));
}

#[test]
fn test_style_pseudo_suffix_never_writes_pseudo_block() {
    let mut el = Element::new("div");
    el.apply_cascaded(Some("::after"), "width", "16px");

    style(&mut el, AccessRequest::set("width:after", "99px")).unwrap();

    // The pseudo block is untouched; the inline style took the write
    let pseudo = style(&mut el, AccessRequest::get("width:after"))
        .unwrap()
        .into_one();
    let base = style(&mut el, AccessRequest::get("width")).unwrap().into_one();
    assert_eq!(pseudo, Some(Value::Str("16px".into())));
    assert_eq!(base, Some(Value::Str("99px".into())));
}

#[test]
fn test_dataset_number_write_stringifies() {
    let mut el = Element::new("div");

    data(&mut el, AccessRequest::set("userId", 42i64)).unwrap();

    assert_eq!(el.dataset_get("userId"), Some("42"));
    assert_eq!(el.attribute("data-user-id"), Some("42"));
}

#[test]
fn test_dataset_object_write_serializes_to_json() {
    let mut el = Element::new("div");

    data(
        &mut el,
        AccessRequest::set("user-name", serde_json::json!({"a": 1})),
    )
    .unwrap();

    assert_eq!(el.dataset_get("userName"), Some(r#"{"a":1}"#));

    let value = data(&mut el, AccessRequest::get("userName")).unwrap().into_one();
    assert_eq!(value, Some(Value::Str(r#"{"a":1}"#.into())));
}

#[test]
fn test_dataset_kebab_and_camel_keys_are_the_same_entry() {
    let mut el = Element::new("div");

    data(&mut el, AccessRequest::set("first-name", "Ada")).unwrap();

    let value = data(&mut el, AccessRequest::get("firstName")).unwrap().into_one();
    assert_eq!(value, Some(Value::Str("Ada".into())));
}

#[test]
fn test_writes_report_done() {
    let mut el = Element::new("div");

    let outcome = attr(&mut el, AccessRequest::set("id", "x")).unwrap();
    assert_eq!(outcome, AccessOutcome::Done);

    let outcome = data(&mut el, AccessRequest::set_many([("a", "1")])).unwrap();
    assert_eq!(outcome, AccessOutcome::Done);
}

#[test]
fn test_case_converter_identities() {
    assert_eq!(to_camel("background-color"), "backgroundColor");
    assert_eq!(to_kebab("backgroundColor"), "background-color");

    for key in ["color", "background-color", "border-top-left-radius"] {
        assert_eq!(to_kebab(&to_camel(key)), key);
    }
}

#[test]
fn test_get_many_with_missing_keys() {
    let mut el = Element::new("div");
    el.set_attribute("id", "main");

    let values = attr(&mut el, AccessRequest::get_many(["id", "role"]))
        .unwrap()
        .into_many()
        .unwrap();

    assert_eq!(values.len(), 2);
    assert_eq!(values.get("id"), Some(&Value::Str("main".into())));
    assert!(values.contains("role"));
    assert_eq!(values.get("role"), None);
}

#[test]
fn test_empty_get_many_returns_empty_map() {
    let mut el = Element::new("div");

    let values = attr(&mut el, AccessRequest::get_many(Vec::<String>::new()))
        .unwrap()
        .into_many()
        .unwrap();

    assert!(values.is_empty());
}
