//! # yamlconv-core
//!
//! Type-preserving YAML codec for JSON-shaped value trees.
//!
//! Plain YAML parsing re-infers scalar types from text, which corrupts
//! values that merely *look* like another type: the string `"100"` comes
//! back as an integer, `"true"` as a boolean. This crate round-trips a
//! generic tree ([`Node`]) through YAML without losing type fidelity: the
//! encoder quotes ambiguous strings and renders multi-line strings as
//! literal blocks, so the decoder's inference always recovers the original
//! scalar type.
//!
//! ## Quick start
//!
//! ```rust
//! use yamlconv_core::{from_yaml, to_yaml};
//!
//! // Typed value → YAML. The numeric-looking string is protected.
//! let yaml = to_yaml(&serde_json::json!({"id": "007", "retries": 3})).unwrap();
//! assert_eq!(yaml, "id: '007'\nretries: 3\n");
//!
//! // YAML → typed value (roundtrip).
//! let back: serde_json::Value = from_yaml(&yaml).unwrap();
//! assert_eq!(back["id"], serde_json::json!("007"));
//! assert_eq!(back["retries"], serde_json::json!(3));
//! ```
//!
//! ## Modules
//!
//! - [`node`] — the [`Node`] tree exchanged with the object-graph mapper
//! - [`event`] — the structural event vocabulary and lookahead cursor
//! - [`decoder`] — events → tree, with plain-scalar type inference
//! - [`encoder`] — tree → events, with quoting/layout heuristics
//! - [`scalar`] — the shared inference/ambiguity probes
//! - [`parser`] — YAML text → events, over the external pull parser
//! - [`emitter`] — events → YAML text
//! - [`convert`] — one-call entry points (`to_yaml`, `from_yaml`)
//! - [`error`] — error types for the fallible seams

pub mod convert;
pub mod decoder;
pub mod emitter;
pub mod encoder;
pub mod error;
pub mod event;
pub mod node;
pub mod parser;
pub mod scalar;

pub use convert::{from_yaml, node_to_yaml, to_yaml, to_yaml_with, yaml_to_node};
pub use decoder::decode_events;
pub use encoder::{encode_node, EncodeOptions};
pub use error::{Result, YamlConvError};
pub use event::{Event, ScalarStyle};
pub use node::Node;
