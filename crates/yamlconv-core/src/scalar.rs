//! Plain-scalar type inference, shared between the decoder and encoder.
//!
//! The two halves are deliberate mirror images: [`infer_plain`] is how the
//! decoder types an unquoted scalar, and [`is_ambiguous`] is how the encoder
//! decides a string must be quoted so that inference will *not* fire on it.

use crate::node::Node;

/// Type a plain (unquoted) scalar.
///
/// Probe order: 64-bit integer, then float, then the case-sensitive boolean
/// literals, then the literal `null`, else the text itself. Quoted and
/// block scalars never reach this function.
pub fn infer_plain(text: &str) -> Node {
    if let Ok(i) = text.parse::<i64>() {
        return Node::Integer(i);
    }
    if let Ok(f) = text.parse::<f64>() {
        return Node::Float(f);
    }
    if let Ok(b) = text.parse::<bool>() {
        return Node::Bool(b);
    }
    if text == "null" {
        return Node::Null;
    }
    Node::String(text.to_string())
}

/// Would this text be reinterpreted as a non-string type if emitted plain?
///
/// Slightly wider than [`infer_plain`]: booleans match case-insensitively,
/// so `"True"` gets quoted even though only lowercase `true` decodes as a
/// boolean. Quoting conservatively never loses information; under-quoting
/// would.
pub fn is_ambiguous(text: &str) -> bool {
    text.parse::<i64>().is_ok()
        || text.parse::<f64>().is_ok()
        || text.eq_ignore_ascii_case("true")
        || text.eq_ignore_ascii_case("false")
        || text == "null"
}
