//! Structural merge of two document trees.

use docpath_tree::{InsertionHint, Node, NodeKind};

use crate::PathError;

/// Unifies `b` into `a` in place, consuming `b`.
///
/// Matching shapes recurse; a scalar on either side replaces `a` wholesale
/// (last write wins). Sequences are driven by `b`'s insertion hint: a
/// splice position inside `a` merges `b`'s sole element there, anything
/// else appends. Mappings merge the first key of `b` that already exists
/// in `a` and otherwise append all of `b`'s pairs: one new key per call,
/// which is all the set builder ever produces.
///
/// # Errors
///
/// [`PathError::Incompatible`] when the two kinds cannot be unified
/// (e.g. sequence vs mapping).
pub fn merge(a: &mut Node, b: Node) -> Result<(), PathError> {
    if a.kind == NodeKind::Document && b.kind == NodeKind::Document {
        return merge_documents(a, b);
    }

    if a.kind == NodeKind::Scalar || b.kind == NodeKind::Scalar {
        *a = b;
        return Ok(());
    }

    if a.kind == NodeKind::Sequence && b.kind == NodeKind::Sequence {
        return merge_sequences(a, b);
    }

    if a.kind == NodeKind::Mapping && b.kind == NodeKind::Mapping {
        return merge_mappings(a, b);
    }

    Err(PathError::Incompatible {
        into: a.kind,
        from: b.kind,
    })
}

fn merge_documents(a: &mut Node, b: Node) -> Result<(), PathError> {
    let Some(content) = b.children.into_iter().next() else {
        return Ok(());
    };
    match a.children.first_mut() {
        Some(target) => merge(target, content),
        None => {
            a.children.push(content);
            Ok(())
        }
    }
}

fn merge_sequences(a: &mut Node, b: Node) -> Result<(), PathError> {
    if let Some(InsertionHint::At(at)) = b.insertion_hint {
        if at < a.children.len() {
            let Some(element) = b.children.into_iter().next() else {
                return Ok(());
            };
            return merge(&mut a.children[at], element);
        }
    }
    // No hint, an explicit append marker, or a position past the end: the
    // elements go to the back.
    a.children.extend(b.children);
    Ok(())
}

fn merge_mappings(a: &mut Node, mut b: Node) -> Result<(), PathError> {
    let mut matched = None;
    'outer: for (i, key) in b.children.iter().enumerate().step_by(2) {
        for (j, existing) in a.children.iter().enumerate().step_by(2) {
            if existing.value == key.value {
                matched = Some((i, j));
                break 'outer;
            }
        }
    }

    // First key of `b` already present in `a`: merge that value and stop.
    // Remaining keys of `b` are the caller's problem, one call per key.
    if let Some((i, j)) = matched {
        if i + 1 < b.children.len() && j + 1 < a.children.len() {
            let value = b.children.remove(i + 1);
            return merge(&mut a.children[j + 1], value);
        }
        return Ok(());
    }

    a.children.extend(b.children);
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────
