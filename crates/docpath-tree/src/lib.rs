//! Document tree node model and codec seam.
//!
//! A [`Node`] is a tagged tree element (scalar, sequence, mapping, or
//! document) with exclusively owned children. Mapping children alternate
//! key/value pairs, documents wrap exactly one child. The companion
//! `docpath` crate edits these trees by path.
//!
//! Text never enters the picture directly: a [`DocumentCodec`] turns raw
//! text into a document node and back. [`JsonCodec`] is the bundled
//! implementation; other formats plug in through the same trait.
//!
//! # Example
//!
//! ```
//! use docpath_tree::{DocumentCodec, JsonCodec, Node};
//!
//! let doc = JsonCodec.parse(r#"{"skills": ["python", "perl"]}"#).unwrap();
//! let skills = doc.content().unwrap().get("skills").unwrap();
//! assert_eq!(skills.children.len(), 2);
//! assert_eq!(skills.children[0], Node::string("python"));
//! ```

pub mod codec;
pub mod json;
pub mod node;

pub use codec::{CodecError, DocumentCodec};
pub use json::JsonCodec;
pub use node::{
    InsertionHint, Node, NodeKind, TAG_BOOL, TAG_MAPPING, TAG_NULL, TAG_NUMBER, TAG_SEQUENCE,
    TAG_STRING,
};
