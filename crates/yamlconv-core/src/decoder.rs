//! Decoder — builds a typed [`Node`] tree from a YAML event stream.
//!
//! Recursive descent driven by lookahead on the next event's kind: a scalar
//! becomes a scalar node via plain-scalar inference, a mapping start opens an
//! object, a sequence start opens an array. Comment events are discarded at
//! every recursion entry point, and stream-level markers are ignored.
//!
//! The decoder is best-effort: an event where no value can be
//! produced (a stray end event, a truncated stream) yields null or stops the
//! current collection early instead of failing. Schema validation is the
//! caller's concern, not this layer's.

use crate::event::{Event, EventCursor};
use crate::node::Node;
use crate::scalar;
use indexmap::IndexMap;

/// Decode an event stream into a tree.
///
/// Returns `None` when the stream holds no document at all (empty input);
/// callers map absence to whatever default suits the target type.
///
/// ```
/// use yamlconv_core::decoder::decode_events;
/// use yamlconv_core::{Event, Node, ScalarStyle};
///
/// // Plain scalars are typed by inference...
/// let events = [Event::plain("100")];
/// assert_eq!(decode_events(&events), Some(Node::Integer(100)));
///
/// // ...quoted scalars are not.
/// let events = [Event::scalar("100", ScalarStyle::SingleQuoted)];
/// assert_eq!(decode_events(&events), Some(Node::String("100".into())));
/// ```
pub fn decode_events(events: &[Event]) -> Option<Node> {
    let mut cursor = EventCursor::new(events);
    decode_value(&mut cursor)
}

/// Decode one value at the cursor, dispatching on the next event's kind.
fn decode_value(cursor: &mut EventCursor<'_>) -> Option<Node> {
    cursor.skip_comments();
    match cursor.peek()? {
        Event::Scalar { value, style } => {
            let node = if style.is_plain() {
                scalar::infer_plain(value)
            } else {
                Node::String(value.clone())
            };
            cursor.next();
            Some(node)
        }
        Event::MappingStart => Some(decode_mapping(cursor)),
        Event::SequenceStart { .. } => Some(decode_sequence(cursor)),
        Event::StreamStart => {
            cursor.next();
            decode_value(cursor)
        }
        // End events: no value here. The caller decides whether that means
        // null (missing mapping value) or the end of a collection.
        Event::StreamEnd | Event::MappingEnd | Event::SequenceEnd | Event::Comment(_) => None,
    }
}

/// Consume MappingStart .. MappingEnd into an object node.
///
/// Keys are taken as scalar text regardless of style; values are decoded by
/// lookahead. Duplicate keys keep their original position and the last value
/// wins. A truncated or malformed stream returns the entries built so far.
fn decode_mapping(cursor: &mut EventCursor<'_>) -> Node {
    cursor.next(); // MappingStart
    let mut map = IndexMap::new();
    loop {
        cursor.skip_comments();
        match cursor.peek() {
            Some(Event::MappingEnd) => {
                cursor.next();
                break;
            }
            Some(Event::Scalar { value, .. }) => {
                let key = value.clone();
                cursor.next();
                let value = decode_value(cursor).unwrap_or(Node::Null);
                map.insert(key, value);
            }
            // Anything else in key position (complex keys are out of scope,
            // or the stream was truncated): stop with what we have.
            _ => break,
        }
    }
    Node::Object(map)
}

/// Consume SequenceStart .. SequenceEnd into an array node.
fn decode_sequence(cursor: &mut EventCursor<'_>) -> Node {
    cursor.next(); // SequenceStart
    let mut items = Vec::new();
    loop {
        cursor.skip_comments();
        match cursor.peek() {
            Some(Event::SequenceEnd) => {
                cursor.next();
                break;
            }
            None => break,
            _ => match decode_value(cursor) {
                Some(node) => items.push(node),
                None => break,
            },
        }
    }
    Node::Array(items)
}
