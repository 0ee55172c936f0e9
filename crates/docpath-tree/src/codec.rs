//! Seam between raw document text and the tree representation.
//!
//! The editing operations never touch text themselves; they receive and
//! return [`Node`] trees. Anything that can turn text into a document node
//! and back (JSON, YAML, whatever) plugs in through [`DocumentCodec`].

use thiserror::Error;

use crate::node::Node;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The input text is not a valid document.
    #[error("syntax error: {0}")]
    Syntax(String),
    /// The tree cannot be rendered back to text.
    #[error("encoding error: {0}")]
    Encoding(String),
}

/// Converts between raw text and document trees.
///
/// `parse` returns a `Document` node wrapping the decoded value, so the
/// result can be merged against another document directly.
pub trait DocumentCodec {
    fn parse(&self, text: &str) -> Result<Node, CodecError>;
    fn serialize(&self, node: &Node) -> Result<String, CodecError>;
}
