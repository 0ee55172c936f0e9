//! Path-driven set: synthesize the wrapping structure, then merge.

use docpath_tree::{DocumentCodec, InsertionHint, Node, NodeKind};

use crate::merge::merge;
use crate::path::{IndexToken, Step};
use crate::PathError;

/// Parses `value_text` with `codec` and places the result at `path`
/// inside `root`, creating intermediate mappings and sequences as needed.
///
/// `[n]` with `n` past the end of an existing sequence appends instead of
/// failing; `[+]` always appends. `[-]` belongs to the delete grammar and
/// is rejected here.
///
/// # Errors
///
/// [`PathError::Codec`] when the value text does not parse,
/// [`PathError::InvalidStep`] for a malformed path (reported before `root`
/// is touched), and merge errors when the synthesized structure cannot be
/// unified with what the tree already holds.
pub fn set<C: DocumentCodec>(
    root: &mut Node,
    path: &str,
    value_text: &str,
    codec: &C,
) -> Result<(), PathError> {
    let value = codec.parse(value_text)?;
    set_node(root, path, value)
}

/// Places an already-built value tree at `path` inside `root`.
///
/// A `Document` value contributes its content; anything else is used
/// as-is.
pub fn set_node(root: &mut Node, path: &str, value: Node) -> Result<(), PathError> {
    let mut current = match value.kind {
        NodeKind::Document => value
            .children
            .into_iter()
            .next()
            .ok_or(PathError::EmptyDocument)?,
        _ => value,
    };

    // Walk the steps right to left: each step wraps the accumulated node,
    // so the structure grows outward from the value without lookahead.
    for raw in path.split('.').rev() {
        current = match Step::parse(raw)? {
            Step::Indexed { key, index } => {
                let hint = match index {
                    IndexToken::At(at) => InsertionHint::At(at),
                    IndexToken::Append => InsertionHint::Append,
                    IndexToken::Last => return Err(PathError::InvalidStep(raw.to_string())),
                };
                let mut seq = Node::sequence();
                seq.push(current);
                seq.insertion_hint = Some(hint);
                if key.is_empty() {
                    seq
                } else {
                    let mut map = Node::mapping();
                    map.push_entry(key, seq);
                    map
                }
            }
            Step::Key(key) => {
                let mut map = Node::mapping();
                map.push_entry(key, current);
                map
            }
        };
    }

    merge(root, Node::document(current))
}

// ── Tests ─────────────────────────────────────────────────────────────────
