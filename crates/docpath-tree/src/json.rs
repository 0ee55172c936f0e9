//! Document codec backed by `serde_json`.
//!
//! Objects keep their insertion order, matching the ordered-children
//! invariant of mapping nodes.

use serde_json::Value;

use crate::codec::{CodecError, DocumentCodec};
use crate::node::{Node, NodeKind, TAG_BOOL, TAG_NULL, TAG_NUMBER};

/// JSON text codec.
pub struct JsonCodec;

impl DocumentCodec for JsonCodec {
    fn parse(&self, text: &str) -> Result<Node, CodecError> {
        let value: Value =
            serde_json::from_str(text).map_err(|err| CodecError::Syntax(err.to_string()))?;
        Ok(Node::document(from_json(value)))
    }

    fn serialize(&self, node: &Node) -> Result<String, CodecError> {
        let value = to_json(node)?;
        serde_json::to_string(&value).map_err(|err| CodecError::Encoding(err.to_string()))
    }
}

/// Decodes a `serde_json::Value` into a bare (non-document) node.
pub fn from_json(value: Value) -> Node {
    match value {
        Value::Null => Node::scalar(TAG_NULL, "null"),
        Value::Bool(b) => Node::scalar(TAG_BOOL, if b { "true" } else { "false" }),
        Value::Number(n) => Node::scalar(TAG_NUMBER, n.to_string()),
        Value::String(s) => Node::string(s),
        Value::Array(items) => {
            let mut seq = Node::sequence();
            for item in items {
                seq.push(from_json(item));
            }
            seq
        }
        Value::Object(map) => {
            let mut mapping = Node::mapping();
            for (key, item) in map {
                mapping.push_entry(key, from_json(item));
            }
            mapping
        }
    }
}

/// Encodes a node back into a `serde_json::Value`.
///
/// Document nodes encode as their content. Scalar tags other than the
/// JSON ones encode as strings.
pub fn to_json(node: &Node) -> Result<Value, CodecError> {
    match node.kind {
        NodeKind::Document => {
            let content = node
                .content()
                .ok_or_else(|| CodecError::Encoding("document node has no content".to_string()))?;
            to_json(content)
        }
        NodeKind::Scalar => scalar_to_json(node),
        NodeKind::Sequence => {
            let items: Result<Vec<Value>, CodecError> =
                node.children.iter().map(to_json).collect();
            Ok(Value::Array(items?))
        }
        NodeKind::Mapping => {
            if node.children.len() % 2 != 0 {
                return Err(CodecError::Encoding(
                    "mapping node has a key without a value".to_string(),
                ));
            }
            let mut map = serde_json::Map::with_capacity(node.children.len() / 2);
            for (key, value) in node.entries() {
                if key.kind != NodeKind::Scalar {
                    return Err(CodecError::Encoding(
                        "mapping key is not a scalar".to_string(),
                    ));
                }
                map.insert(key.value.clone(), to_json(value)?);
            }
            Ok(Value::Object(map))
        }
    }
}

fn scalar_to_json(node: &Node) -> Result<Value, CodecError> {
    match node.tag.as_str() {
        TAG_NULL => Ok(Value::Null),
        TAG_BOOL => match node.value.as_str() {
            "true" => Ok(Value::Bool(true)),
            "false" => Ok(Value::Bool(false)),
            other => Err(CodecError::Encoding(format!(
                "invalid bool literal: {other:?}"
            ))),
        },
        TAG_NUMBER => node
            .value
            .parse::<serde_json::Number>()
            .map(Value::Number)
            .map_err(|_| CodecError::Encoding(format!("invalid number literal: {:?}", node.value))),
        _ => Ok(Value::String(node.value.clone())),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::TAG_STRING;
    use serde_json::json;

    #[test]
    fn parse_wraps_in_document() {
        let doc = JsonCodec.parse(r#"{"a": 1}"#).unwrap();
        assert!(doc.is_document());
        let root = doc.content().unwrap();
        assert!(root.is_mapping());
        assert_eq!(root.get("a"), Some(&Node::scalar(TAG_NUMBER, "1")));
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            JsonCodec.parse("{nope"),
            Err(CodecError::Syntax(_))
        ));
    }

    #[test]
    fn scalars_keep_their_tags() {
        assert_eq!(from_json(json!(null)).tag, TAG_NULL);
        assert_eq!(from_json(json!(true)).value, "true");
        assert_eq!(from_json(json!(3.5)).value, "3.5");
        assert_eq!(from_json(json!("x")).tag, TAG_STRING);
    }

    #[test]
    fn object_order_is_preserved() {
        let node = from_json(json!({"z": 1, "a": 2, "m": 3}));
        let keys: Vec<&str> = node.entries().map(|(k, _)| k.value.as_str()).collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn round_trip() {
        let value = json!({
            "martin": {
                "name": "Martin D'vloper",
                "skills": ["python", "perl", "pascal"],
                "years": 12,
                "remote": true,
                "manager": null
            }
        });
        let node = from_json(value.clone());
        assert_eq!(to_json(&node).unwrap(), value);
    }

    #[test]
    fn serialize_document() {
        let doc = Node::document(from_json(json!([1, 2])));
        assert_eq!(JsonCodec.serialize(&doc).unwrap(), "[1,2]");
    }

    #[test]
    fn serialize_rejects_broken_mapping() {
        let mut map = Node::mapping();
        map.children.push(Node::string("dangling key"));
        assert!(matches!(to_json(&map), Err(CodecError::Encoding(_))));
    }

    #[test]
    fn serialize_rejects_empty_document() {
        let mut doc = Node::document(Node::string("x"));
        doc.children.clear();
        assert!(matches!(to_json(&doc), Err(CodecError::Encoding(_))));
    }

    #[test]
    fn unknown_scalar_tag_encodes_as_string() {
        let node = Node::scalar("timestamp", "2024-01-01");
        assert_eq!(to_json(&node).unwrap(), json!("2024-01-01"));
    }
}
