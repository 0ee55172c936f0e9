//! Read-only lookup by path.

use docpath_tree::{Node, NodeKind};

use crate::path::{IndexToken, Step};
use crate::PathError;

/// Returns the node at `path` inside `root`, or `None` when the path
/// leads nowhere.
///
/// Shares the delete grammar (`[-]` is the last element, `[+]` is
/// rejected) and the delete error philosophy: a missing key or an
/// out-of-range index is `Ok(None)`, a kind mismatch is an error.
pub fn get<'a>(root: &'a Node, path: &str) -> Result<Option<&'a Node>, PathError> {
    if root.kind == NodeKind::Document {
        return match root.content() {
            Some(content) => get(content, path),
            None => Ok(None),
        };
    }

    let (first, rest) = match path.split_once('.') {
        Some((first, rest)) => (first, Some(rest)),
        None => (path, None),
    };

    let found = match Step::parse(first)? {
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
                let Some(value) = root.get(key) else {
                    return Ok(None);
                };
                if value.kind != NodeKind::Sequence {
                    return Err(PathError::NotASequence(value.kind));
                }
                value
            };

            let at = match index {
                IndexToken::At(at) => at,
                _ => match seq.children.len().checked_sub(1) {
                    Some(last) => last,
                    None => return Ok(None),
                },
            };
            seq.children.get(at)
        }
        Step::Key(key) => {
            if root.kind != NodeKind::Mapping {
                return Err(PathError::NotAMapping(root.kind));
            }
            root.get(key)
        }
    };

    match (found, rest) {
        (Some(node), Some(rest)) => get(node, rest),
        (Some(node), None) => Ok(Some(node)),
        (None, _) => Ok(None),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────
