//! Convenience entry points: typed value ⇄ YAML text in one call.
//!
//! The object-graph half (typed value ⇄ tree) is serde's job, routed through
//! `serde_json::Value` with key order preserved; field renaming, skipping,
//! and default omission happen there via serde attributes, before the codec
//! ever sees the tree. The codec half is [`crate::encoder`] /
//! [`crate::decoder`] plus the text adapters.

use crate::decoder::decode_events;
use crate::emitter;
use crate::encoder::{encode_node, EncodeOptions};
use crate::error::Result;
use crate::node::Node;
use crate::parser;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Serialize a value to YAML text with default options.
///
/// ```
/// use yamlconv_core::to_yaml;
///
/// let yaml = to_yaml(&serde_json::json!({
///     "name": "Alice",
///     "scores": [95, 87, 92],
/// }))
/// .unwrap();
/// assert_eq!(yaml, "name: Alice\nscores: [95, 87, 92]\n");
/// ```
pub fn to_yaml<T: Serialize>(value: &T) -> Result<String> {
    to_yaml_with(value, &EncodeOptions::default())
}

/// Serialize a value to YAML text with explicit encoding options.
pub fn to_yaml_with<T: Serialize>(value: &T, options: &EncodeOptions) -> Result<String> {
    let node = Node::from_json(serde_json::to_value(value)?);
    Ok(node_to_yaml(&node, options))
}

/// Deserialize YAML text into a typed value.
///
/// An empty document deserializes as null, so null-accepting targets (an
/// `Option`, a `serde_json::Value`) get their empty form.
///
/// ```
/// use yamlconv_core::from_yaml;
///
/// // The quoted scalar stays a string; the plain ones are typed.
/// let value: serde_json::Value = from_yaml("count: '100'\nratio: 0.5").unwrap();
/// assert_eq!(value["count"], serde_json::json!("100"));
/// assert_eq!(value["ratio"], serde_json::json!(0.5));
/// ```
pub fn from_yaml<T: DeserializeOwned>(input: &str) -> Result<T> {
    let json = match yaml_to_node(input)? {
        Some(node) => node.into_json(),
        None => serde_json::Value::Null,
    };
    Ok(serde_json::from_value(json)?)
}

/// Render a tree as YAML text.
pub fn node_to_yaml(node: &Node, options: &EncodeOptions) -> String {
    emitter::emit(&encode_node(node, options))
}

/// Parse YAML text into a tree. `Ok(None)` means the input held no document.
pub fn yaml_to_node(input: &str) -> Result<Option<Node>> {
    Ok(decode_events(&parser::scan(input)?))
}
