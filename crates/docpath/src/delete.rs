//! Path-driven delete: navigate existing structure, remove the target.

use docpath_tree::{Node, NodeKind};

use crate::path::{IndexToken, Step};
use crate::PathError;

/// Removes the node at `path` from `root`, mutating the tree in place.
///
/// Nothing is synthesized on the way down. A missing key or an index at
/// or past the end of the sequence is a successful no-op, which makes
/// delete idempotent; `[-]` targets the last element (and no-ops on an
/// empty sequence). Kind mismatches (an indexed step against something
/// that is not a sequence, a key step against something that is not a
/// mapping) are errors, not no-ops.
///
/// # Errors
///
/// [`PathError::InvalidStep`] for malformed steps (including the
/// write-side `[+]` marker), [`PathError::NotASequence`] /
/// [`PathError::NotAMapping`] on kind mismatches.
pub fn delete(root: &mut Node, path: &str) -> Result<(), PathError> {
    if root.kind == NodeKind::Document {
        return match root.content_mut() {
            Some(content) => delete(content, path),
            None => Ok(()),
        };
    }

    // Only the first step matters here; the rest rides along into the
    // recursive call.
    let (first, rest) = match path.split_once('.') {
        Some((first, rest)) => (first, Some(rest)),
        None => (path, None),
    };

    match Step::parse(first)? {
        Step::Indexed { key, index } => {
            if index == IndexToken::Append {
                return Err(PathError::InvalidStep(first.to_string()));
            }

            let seq = if key.is_empty() {
                if root.kind != NodeKind::Sequence {
                    return Err(PathError::NotASequence(root.kind));
                }
                root
            } else {
                if root.kind != NodeKind::Mapping {
                    return Err(PathError::NotAMapping(root.kind));
                }
                let Some(value) = root.get_mut(key) else {
                    return Ok(());
                };
                if value.kind != NodeKind::Sequence {
                    return Err(PathError::NotASequence(value.kind));
                }
                value
            };

            let at = match index {
                IndexToken::At(at) => at,
                // Only `-` reaches here; on an empty sequence it resolves
                // out of range.
                _ => match seq.children.len().checked_sub(1) {
                    Some(last) => last,
                    None => return Ok(()),
                },
            };
            if at >= seq.children.len() {
                return Ok(());
            }

            match rest {
                None => {
                    seq.children.remove(at);
                    Ok(())
                }
                Some(rest) => delete(&mut seq.children[at], rest),
            }
        }
        Step::Key(key) => {
            if root.kind != NodeKind::Mapping {
                return Err(PathError::NotAMapping(root.kind));
            }
            let Some(at) = root
                .children
                .chunks_exact(2)
                .position(|pair| pair[0].value == key)
            else {
                return Ok(());
            };

            match rest {
                None => {
                    // Remove the key node and its value node.
                    root.children.drain(at * 2..at * 2 + 2);
                    Ok(())
                }
                Some(rest) => delete(&mut root.children[at * 2 + 1], rest),
            }
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use docpath_tree::json::from_json;
    use serde_json::json;

    fn doc(value: serde_json::Value) -> Node {
        Node::document(from_json(value))
    }

    #[test]
    fn delete_mapping_entry() {
        let mut root = doc(json!({"a": 1, "b": 2}));
        delete(&mut root, "a").unwrap();
        assert_eq!(root, doc(json!({"b": 2})));
    }

    #[test]
    fn delete_nested_entry() {
        let mut root = doc(json!({"martin": {"name": "m", "job": "dev"}}));
        delete(&mut root, "martin.job").unwrap();
        assert_eq!(root, doc(json!({"martin": {"name": "m"}})));
    }

    #[test]
    fn delete_sequence_element() {
        let mut root = doc(json!({"skills": ["rust", "perl", "pascal"]}));
        delete(&mut root, "skills[1]").unwrap();
        assert_eq!(root, doc(json!({"skills": ["rust", "pascal"]})));
    }

    #[test]
    fn delete_anonymous_index() {
        let mut root = doc(json!(["a", "b"]));
        delete(&mut root, "[0]").unwrap();
        assert_eq!(root, doc(json!(["b"])));
    }

    #[test]
    fn delete_below_sequence_element() {
        let mut root = doc(json!([{"martin": {"job": "dev"}}]));
        delete(&mut root, "[0].martin.job").unwrap();
        assert_eq!(root, doc(json!([{"martin": {}}])));
    }

    #[test]
    fn last_marker_removes_final_element() {
        let mut root = doc(json!({"arr": [1, 2, 3]}));
        delete(&mut root, "arr[-]").unwrap();
        assert_eq!(root, doc(json!({"arr": [1, 2]})));
    }

    #[test]
    fn last_marker_on_empty_sequence_is_a_no_op() {
        let mut root = doc(json!({"arr": []}));
        delete(&mut root, "arr[-]").unwrap();
        assert_eq!(root, doc(json!({"arr": []})));
    }

    #[test]
    fn missing_key_is_a_no_op() {
        let mut root = doc(json!({"a": 1}));
        delete(&mut root, "nope").unwrap();
        delete(&mut root, "nope.deeper[2]").unwrap();
        assert_eq!(root, doc(json!({"a": 1})));
    }

    #[test]
    fn out_of_range_index_is_a_no_op() {
        let mut root = doc(json!({"arr": [1, 2]}));
        delete(&mut root, "arr[2]").unwrap();
        delete(&mut root, "arr[99]").unwrap();
        assert_eq!(root, doc(json!({"arr": [1, 2]})));
    }

    #[test]
    fn delete_is_idempotent() {
        let mut root = doc(json!({"a": {"b": [1]}}));
        delete(&mut root, "a.b[0]").unwrap();
        delete(&mut root, "a.b[0]").unwrap();
        delete(&mut root, "a.b").unwrap();
        delete(&mut root, "a.b").unwrap();
        assert_eq!(root, doc(json!({"a": {}})));
    }

    #[test]
    fn indexed_step_on_non_sequence_errors() {
        let mut root = doc(json!({"a": {"k": 1}}));
        assert_eq!(
            delete(&mut root, "a[0]"),
            Err(PathError::NotASequence(NodeKind::Mapping))
        );

        let mut scalar_root = doc(json!("text"));
        assert_eq!(
            delete(&mut scalar_root, "[0]"),
            Err(PathError::NotASequence(NodeKind::Scalar))
        );
    }

    #[test]
    fn key_step_on_non_mapping_errors() {
        let mut root = doc(json!([1, 2]));
        assert_eq!(
            delete(&mut root, "a"),
            Err(PathError::NotAMapping(NodeKind::Sequence))
        );
    }

    #[test]
    fn append_marker_is_rejected() {
        let mut root = doc(json!({"arr": [1]}));
        assert!(matches!(
            delete(&mut root, "arr[+]"),
            Err(PathError::InvalidStep(_))
        ));
    }

    #[test]
    fn malformed_step_is_rejected() {
        let mut root = doc(json!({"a": 1}));
        assert!(matches!(
            delete(&mut root, "a..b"),
            Err(PathError::InvalidStep(_))
        ));
    }
}
