//! The document tree exchanged between the codec and the object-graph mapper.
//!
//! A [`Node`] mirrors the JSON shape but separates integers from floats (YAML
//! round-trips preserve the distinction) and keeps object keys in insertion
//! order. Trees are built fresh per conversion call and never shared or
//! mutated afterwards; the encoder reads them immutably and the decoder
//! returns them complete.

use indexmap::IndexMap;
use serde_json::Value;

/// A single document value.
///
/// `Comment` is a transient marker: the decoder discards comment events, so
/// it never appears in a decoded tree, but callers may insert one into a
/// hand-built tree to have the encoder emit a freestanding `# ...` line.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Comment(String),
    Array(Vec<Node>),
    /// Key-value pairs in insertion order. Keys are unique; inserting an
    /// existing key replaces its value in place (last write wins).
    Object(IndexMap<String, Node>),
}

impl Node {
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Node::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value as `f64`, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Node::Integer(i) => Some(*i as f64),
            Node::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Node]> {
        match self {
            Node::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Look up a key in an object node. Returns `None` for non-objects.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Build a tree from a JSON value, preserving key order.
    ///
    /// Numbers that fit `i64` become `Integer`; anything else (including
    /// `u64` values above `i64::MAX`) becomes `Float`.
    pub fn from_json(value: Value) -> Node {
        match value {
            Value::Null => Node::Null,
            Value::Bool(b) => Node::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Node::Integer(i)
                } else if let Some(f) = n.as_f64() {
                    Node::Float(f)
                } else {
                    Node::Null
                }
            }
            Value::String(s) => Node::String(s),
            Value::Array(items) => Node::Array(items.into_iter().map(Node::from_json).collect()),
            Value::Object(map) => Node::Object(
                map.into_iter()
                    .map(|(k, v)| (k, Node::from_json(v)))
                    .collect(),
            ),
        }
    }

    /// Convert the tree back to a JSON value, preserving key order.
    ///
    /// `Comment` nodes have no JSON counterpart: inside arrays and objects
    /// they are dropped, at the root the result is null. Non-finite floats
    /// also map to null, since JSON cannot represent them.
    pub fn into_json(self) -> Value {
        match self {
            Node::Null | Node::Comment(_) => Value::Null,
            Node::Bool(b) => Value::Bool(b),
            Node::Integer(i) => Value::Number(i.into()),
            Node::Float(f) => serde_json::Number::from_f64(f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Node::String(s) => Value::String(s),
            Node::Array(items) => Value::Array(
                items
                    .into_iter()
                    .filter(|n| !matches!(n, Node::Comment(_)))
                    .map(Node::into_json)
                    .collect(),
            ),
            Node::Object(map) => Value::Object(
                map.into_iter()
                    .filter(|(_, v)| !matches!(v, Node::Comment(_)))
                    .map(|(k, v)| (k, v.into_json()))
                    .collect(),
            ),
        }
    }
}

impl From<bool> for Node {
    fn from(b: bool) -> Node {
        Node::Bool(b)
    }
}

impl From<i64> for Node {
    fn from(i: i64) -> Node {
        Node::Integer(i)
    }
}

impl From<f64> for Node {
    fn from(f: f64) -> Node {
        Node::Float(f)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Node {
        Node::String(s.to_string())
    }
}

impl From<String> for Node {
    fn from(s: String) -> Node {
        Node::String(s)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Node {
        Node::Array(items)
    }
}

impl FromIterator<(String, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (String, Node)>>(iter: I) -> Node {
        Node::Object(iter.into_iter().collect())
    }
}
