//! Syntax tree model for hound.
//!
//! Hosts hand hound a [`SourceFile`] per file: a flat [`NodeArena`] of typed
//! nodes with parent links and source text. [`AstIndex`] is derived from it
//! once per file and answers the lookups the resolver needs.

pub mod ast_index;
pub mod node;
pub mod source_file;

pub use ast_index::{ArrayElement, AstIndex};
pub use node::{Node, NodeArena, NodeFlags, NodeIndex, SyntaxKind};
pub use source_file::{FileId, SourceFile, SourceFileBuilder};
