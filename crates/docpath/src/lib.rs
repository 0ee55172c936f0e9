//! Path-addressed editing of document trees.
//!
//! Paths are `.`-separated steps: a word-character key addresses a mapping
//! entry (`martin.job`), and a bracketed index addresses a sequence element
//! (`skills[1]`, or `[1]` when the sequence is the current node). On the
//! write side `[+]` appends; on the delete side `[-]` targets the last
//! element.
//!
//! [`set`] creates any missing intermediate structure on the way to its
//! target, [`delete`] removes an existing node and silently succeeds when
//! there is nothing to remove, and [`merge`] structurally unifies two trees.
//!
//! # Example
//!
//! ```
//! use docpath::{delete, get, set};
//! use docpath_tree::{DocumentCodec, JsonCodec, Node};
//!
//! let mut root = JsonCodec.parse(r#"{"martin": {"skills": ["python", "perl"]}}"#).unwrap();
//!
//! set(&mut root, "martin.skills[1]", "\"rust\"", &JsonCodec).unwrap();
//! set(&mut root, "martin.job", "\"Developer\"", &JsonCodec).unwrap();
//! delete(&mut root, "martin.skills[0]").unwrap();
//!
//! assert_eq!(get(&root, "martin.skills[0]").unwrap(), Some(&Node::string("rust")));
//! assert_eq!(get(&root, "martin.job").unwrap(), Some(&Node::string("Developer")));
//! ```

use thiserror::Error;

use docpath_tree::{CodecError, NodeKind};

pub mod delete;
pub mod get;
pub mod merge;
pub mod path;
pub mod set;

pub use delete::delete;
pub use get::get;
pub use merge::merge;
pub use path::{IndexToken, Step};
pub use set::{set, set_node};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// A step matched neither the key grammar nor the index grammar, or
    /// used a sign token the operation does not accept.
    #[error("invalid path step: {0:?}")]
    InvalidStep(String),
    /// Merge reached two nodes whose kinds cannot be unified.
    #[error("cannot merge {from:?} node into {into:?} node")]
    Incompatible { into: NodeKind, from: NodeKind },
    /// An indexed step addressed a node that is not a sequence.
    #[error("indexed step addresses a {0:?} node, expected a sequence")]
    NotASequence(NodeKind),
    /// A key step addressed a node that is not a mapping.
    #[error("key step addresses a {0:?} node, expected a mapping")]
    NotAMapping(NodeKind),
    /// A document node carried no content to work with.
    #[error("document node has no content")]
    EmptyDocument,
    #[error(transparent)]
    Codec(#[from] CodecError),
}
