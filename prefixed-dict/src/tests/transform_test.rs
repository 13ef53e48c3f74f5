// Copyright 2019-2020 PolkaX. Licensed under MIT or Apache-2.0.

use super::*;

#[test]
fn test_convert_invert() {
    let t = PrefixTransform::new("foo");
    assert_eq!(t.prefix(), "foo");
    assert_eq!(t.namespace(), "foo-");

    assert_eq!(t.convert_key("bar"), "foo-bar");
    assert_eq!(t.convert_key(""), "foo-");
    assert_eq!(t.invert_key("foo-bar"), Some("bar"));
    assert_eq!(t.invert_key(&t.convert_key("a-b-c")), Some("a-b-c"));
}

#[test]
fn test_foreign_keys() {
    let t = PrefixTransform::new("foo");
    assert_eq!(t.invert_key("bar-baz"), None);
    assert_eq!(t.invert_key("foo"), None);
    assert_eq!(t.invert_key("foobar-baz"), None);
    assert!(!t.owns("age"));
    assert!(!t.owns("foobar-baz"));
    assert!(t.owns("foo-"));
}

#[test]
fn test_separator_collision_is_not_detected() {
    let a = PrefixTransform::new("a");
    let ab = PrefixTransform::new(format!("a{}b", SEPARATOR));
    assert_eq!(a.convert_key("b-c"), ab.convert_key("c"));
    assert!(a.owns(&ab.convert_key("c")));
}

#[test]
#[should_panic(expected = "can't be empty")]
fn test_empty_prefix() {
    PrefixTransform::new("");
}
