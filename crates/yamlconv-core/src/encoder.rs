//! Encoder — walks a [`Node`] tree and emits a YAML event stream.
//!
//! Every representation choice here exists to guarantee the decoder's
//! inference recovers the original type:
//!
//! - strings containing newlines go out in literal-block style, so embedded
//!   line breaks survive verbatim;
//! - strings that *look* like numbers, booleans, or `null` go out
//!   single-quoted, which pins them to `String` on decode;
//! - fractionless floats keep one decimal digit (`2.0`, not `2`) so they
//!   come back as floats rather than integers;
//! - everything else is a plain scalar.
//!
//! Collection layout is cosmetic: short homogeneous arrays render in flow
//! style (`[0, 1, 2]`), everything else as indented blocks.

use crate::event::{Event, ScalarStyle};
use crate::node::Node;
use crate::scalar;

/// Encoding policy, passed explicitly per call or held in an immutable codec
/// value by the host application. There is no process-wide default instance.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Skip object entries whose value is null. Off by default: suppression
    /// is a caller policy, not a codec behavior.
    pub omit_null: bool,
    /// Emit `Comment` nodes as freestanding comment events. When off they
    /// are dropped entirely.
    pub emit_comments: bool,
    /// An all-string array longer than this renders in block style.
    pub flow_item_limit: usize,
    /// An array containing a string at least this long renders in block
    /// style.
    pub flow_string_limit: usize,
}

impl Default for EncodeOptions {
    fn default() -> EncodeOptions {
        EncodeOptions {
            omit_null: false,
            emit_comments: true,
            flow_item_limit: 20,
            flow_string_limit: 30,
        }
    }
}

/// Encode a tree into an event stream.
///
/// ```
/// use yamlconv_core::encoder::{encode_node, EncodeOptions};
/// use yamlconv_core::{Event, Node, ScalarStyle};
///
/// // A string that looks numeric is protected by quoting.
/// let events = encode_node(&Node::String("100".into()), &EncodeOptions::default());
/// assert_eq!(events, [Event::scalar("100", ScalarStyle::SingleQuoted)]);
/// ```
pub fn encode_node(node: &Node, options: &EncodeOptions) -> Vec<Event> {
    let mut events = Vec::new();
    encode_value(node, options, &mut events);
    events
}

fn encode_value(node: &Node, options: &EncodeOptions, out: &mut Vec<Event>) {
    match node {
        Node::Null => out.push(Event::plain("null")),
        Node::Bool(b) => out.push(Event::plain(if *b { "true" } else { "false" })),
        Node::Integer(i) => out.push(Event::plain(i.to_string())),
        Node::Float(f) => out.push(Event::plain(format_float(*f))),
        Node::String(s) => out.push(string_event(s)),
        Node::Comment(text) => {
            if options.emit_comments {
                out.push(Event::Comment(text.clone()));
            }
        }
        Node::Array(items) => {
            out.push(Event::SequenceStart {
                flow: use_flow(items, options),
            });
            for item in items {
                encode_value(item, options, out);
            }
            out.push(Event::SequenceEnd);
        }
        Node::Object(map) => {
            out.push(Event::MappingStart);
            for (key, value) in map {
                match value {
                    Node::Null if options.omit_null => continue,
                    // A comment entry has no value; emitting its key would
                    // desync the decoder's key/value alternation.
                    Node::Comment(text) => {
                        if options.emit_comments {
                            out.push(Event::Comment(text.clone()));
                        }
                        continue;
                    }
                    _ => {}
                }
                out.push(Event::plain(key.clone()));
                encode_value(value, options, out);
            }
            out.push(Event::MappingEnd);
        }
    }
}

/// Pick the scalar event for a string value.
fn string_event(s: &str) -> Event {
    if s.contains('\n') {
        Event::scalar(s, ScalarStyle::Literal)
    } else if scalar::is_ambiguous(s) {
        Event::scalar(s, ScalarStyle::SingleQuoted)
    } else {
        Event::scalar(s, ScalarStyle::Plain)
    }
}

/// Canonical decimal text for a float, chosen so the decoder's probe order
/// (integer first, then float) types it as a float again.
fn format_float(f: f64) -> String {
    if !f.is_finite() {
        // `inf`, `-inf`, and `NaN` all parse back as f64.
        return f.to_string();
    }
    if f.fract() == 0.0 {
        format!("{f:.1}")
    } else {
        f.to_string()
    }
}

/// Flow layout keeps short homogeneous lists compact: every element a
/// non-string scalar, or every element a single-line string shorter than the
/// string limit with the count under the item limit. Large, mixed, or
/// long-string arrays read better as blocks.
fn use_flow(items: &[Node], options: &EncodeOptions) -> bool {
    let non_string_scalars = items
        .iter()
        .all(|n| matches!(n, Node::Integer(_) | Node::Float(_) | Node::Bool(_)));
    if non_string_scalars {
        return true;
    }
    items.len() < options.flow_item_limit
        && items.iter().all(|n| match n {
            Node::String(s) => !s.contains('\n') && s.chars().count() < options.flow_string_limit,
            _ => false,
        })
}
