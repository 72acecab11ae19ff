//! Decoder contract tests: plain-scalar type inference, style protection,
//! comment skipping, and best-effort handling of malformed event streams.
//!
//! Synthetic event streams exercise the codec core directly; text inputs go
//! through the `yaml-rust2` adapter the way production callers do.

use yamlconv_core::decoder::decode_events;
use yamlconv_core::{yaml_to_node, Event, Node, ScalarStyle};

/// Helper: decode YAML text and unwrap the document.
fn decode_text(input: &str) -> Node {
    yaml_to_node(input)
        .expect("scan failed")
        .expect("document expected")
}

// ============================================================================
// Plain-Scalar Type Inference
// ============================================================================

#[test]
fn plain_integer() {
    assert_eq!(decode_text("42"), Node::Integer(42));
}

#[test]
fn plain_negative_integer() {
    assert_eq!(decode_text("-7"), Node::Integer(-7));
}

#[test]
fn plain_float() {
    assert_eq!(decode_text("3.14"), Node::Float(3.14));
}

#[test]
fn plain_exponent_float() {
    // Fails the integer probe, passes the float probe.
    assert_eq!(decode_text("1e3"), Node::Float(1000.0));
}

#[test]
fn plain_bool_true() {
    assert_eq!(decode_text("true"), Node::Bool(true));
}

#[test]
fn plain_bool_false() {
    assert_eq!(decode_text("false"), Node::Bool(false));
}

#[test]
fn plain_bool_is_case_sensitive() {
    // Only the lowercase literals decode as booleans.
    assert_eq!(decode_text("True"), Node::String("True".to_string()));
}

#[test]
fn plain_null_literal() {
    assert_eq!(decode_text("null"), Node::Null);
}

#[test]
fn plain_fallback_is_string() {
    assert_eq!(decode_text("hello"), Node::String("hello".to_string()));
}

#[test]
fn plain_hex_is_not_numeric() {
    assert_eq!(decode_text("0x10"), Node::String("0x10".to_string()));
}

#[test]
fn integer_overflow_falls_back_to_float() {
    // One past i64::MAX: the integer probe fails, the float probe wins.
    assert_eq!(
        decode_text("9223372036854775808"),
        Node::Float(9223372036854775808.0)
    );
}

// ============================================================================
// Style Protection (quoted/block scalars never reach inference)
// ============================================================================

#[test]
fn single_quoted_number_stays_string() {
    assert_eq!(decode_text("'100'"), Node::String("100".to_string()));
}

#[test]
fn double_quoted_bool_stays_string() {
    assert_eq!(decode_text("\"true\""), Node::String("true".to_string()));
}

#[test]
fn single_quoted_null_stays_string() {
    assert_eq!(decode_text("'null'"), Node::String("null".to_string()));
}

#[test]
fn literal_block_stays_string() {
    assert_eq!(
        decode_text("|-\n  a\n  b"),
        Node::String("a\nb".to_string())
    );
}

#[test]
fn folded_block_stays_string() {
    assert_eq!(decode_text(">-\n  a\n  b"), Node::String("a b".to_string()));
}

// ============================================================================
// Collections
// ============================================================================

#[test]
fn block_mapping() {
    let node = decode_text("name: Alice\nage: 30\nactive: true");
    assert_eq!(node.get("name"), Some(&Node::String("Alice".to_string())));
    assert_eq!(node.get("age"), Some(&Node::Integer(30)));
    assert_eq!(node.get("active"), Some(&Node::Bool(true)));
}

#[test]
fn mapping_preserves_key_order() {
    let node = decode_text("zebra: 1\nalpha: 2\nmiddle: 3");
    let keys: Vec<&str> = node.as_object().unwrap().keys().map(|k| k.as_str()).collect();
    assert_eq!(keys, ["zebra", "alpha", "middle"]);
}

#[test]
fn mapping_duplicate_key_last_write_wins() {
    let node = decode_text("a: 1\na: 2");
    let map = node.as_object().unwrap();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("a"), Some(&Node::Integer(2)));
}

#[test]
fn block_sequence() {
    assert_eq!(
        decode_text("- 1\n- two\n- true"),
        Node::Array(vec![
            Node::Integer(1),
            Node::String("two".to_string()),
            Node::Bool(true),
        ])
    );
}

#[test]
fn flow_sequence() {
    assert_eq!(
        decode_text("nums: [1, 2, 3]").get("nums"),
        Some(&Node::Array(vec![
            Node::Integer(1),
            Node::Integer(2),
            Node::Integer(3),
        ]))
    );
}

#[test]
fn nested_mapping() {
    let node = decode_text("server:\n  host: localhost\n  port: 8080");
    let server = node.get("server").unwrap();
    assert_eq!(
        server.get("host"),
        Some(&Node::String("localhost".to_string()))
    );
    assert_eq!(server.get("port"), Some(&Node::Integer(8080)));
}

#[test]
fn sequence_of_mappings() {
    let node = decode_text("- name: a\n  id: 1\n- name: b\n  id: 2");
    let items = node.as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get("id"), Some(&Node::Integer(1)));
    assert_eq!(items[1].get("name"), Some(&Node::String("b".to_string())));
}

// ============================================================================
// Comments and Empty Input
// ============================================================================

#[test]
fn text_comments_are_skipped() {
    let node = decode_text("# header\na: 1 # trailing\n# footer");
    assert_eq!(node.get("a"), Some(&Node::Integer(1)));
}

#[test]
fn empty_input_is_absent() {
    assert_eq!(yaml_to_node("").unwrap(), None);
}

#[test]
fn whitespace_only_input_is_absent() {
    assert_eq!(yaml_to_node("   \n\n").unwrap(), None);
}

#[test]
fn comment_only_input_is_absent() {
    assert_eq!(yaml_to_node("# nothing here\n").unwrap(), None);
}

#[test]
fn unparseable_input_is_an_error() {
    assert!(yaml_to_node("key: [unclosed").is_err());
}

// ============================================================================
// Synthetic Event Streams
// ============================================================================

#[test]
fn events_leading_comments_discarded() {
    let events = [
        Event::Comment("a note".to_string()),
        Event::Comment("another".to_string()),
        Event::plain("7"),
    ];
    assert_eq!(decode_events(&events), Some(Node::Integer(7)));
}

#[test]
fn events_comments_inside_mapping_discarded() {
    let events = [
        Event::MappingStart,
        Event::Comment("before key".to_string()),
        Event::plain("a"),
        Event::Comment("before value".to_string()),
        Event::plain("1"),
        Event::Comment("before end".to_string()),
        Event::MappingEnd,
    ];
    let node = decode_events(&events).unwrap();
    assert_eq!(node.get("a"), Some(&Node::Integer(1)));
    assert_eq!(node.as_object().unwrap().len(), 1);
}

#[test]
fn events_comments_inside_sequence_discarded() {
    let events = [
        Event::SequenceStart { flow: false },
        Event::Comment("x".to_string()),
        Event::plain("1"),
        Event::Comment("y".to_string()),
        Event::SequenceEnd,
    ];
    assert_eq!(
        decode_events(&events),
        Some(Node::Array(vec![Node::Integer(1)]))
    );
}

#[test]
fn events_stream_markers_ignored() {
    let events = [Event::StreamStart, Event::plain("ok"), Event::StreamEnd];
    assert_eq!(decode_events(&events), Some(Node::String("ok".to_string())));
}

#[test]
fn events_quoted_scalar_bypasses_inference() {
    let events = [Event::scalar("42", ScalarStyle::DoubleQuoted)];
    assert_eq!(decode_events(&events), Some(Node::String("42".to_string())));
}

#[test]
fn events_empty_stream_is_absent() {
    assert_eq!(decode_events(&[]), None);
    assert_eq!(decode_events(&[Event::StreamStart, Event::StreamEnd]), None);
}

#[test]
fn events_stray_end_yields_no_value() {
    assert_eq!(decode_events(&[Event::MappingEnd]), None);
    assert_eq!(decode_events(&[Event::SequenceEnd]), None);
}

#[test]
fn events_truncated_mapping_keeps_partial_entries() {
    // Key with no value, then the stream just stops.
    let events = [Event::MappingStart, Event::plain("a")];
    let node = decode_events(&events).unwrap();
    assert_eq!(node.get("a"), Some(&Node::Null));
}

#[test]
fn events_missing_value_degrades_to_null() {
    let events = [
        Event::MappingStart,
        Event::plain("a"),
        Event::MappingEnd,
    ];
    let node = decode_events(&events).unwrap();
    assert_eq!(node.get("a"), Some(&Node::Null));
}

#[test]
fn events_truncated_sequence_keeps_partial_items() {
    let events = [Event::SequenceStart { flow: false }, Event::plain("1")];
    assert_eq!(
        decode_events(&events),
        Some(Node::Array(vec![Node::Integer(1)]))
    );
}

#[test]
fn events_flow_flag_is_ignored() {
    let flow = [
        Event::SequenceStart { flow: true },
        Event::plain("1"),
        Event::SequenceEnd,
    ];
    let block = [
        Event::SequenceStart { flow: false },
        Event::plain("1"),
        Event::SequenceEnd,
    ];
    assert_eq!(decode_events(&flow), decode_events(&block));
}
