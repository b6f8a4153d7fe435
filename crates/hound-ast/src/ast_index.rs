//! Per-file lookup tables built in a single walk over the tree.
//!
//! A diagnostic points at one node, but the pieces needed to explain it are
//! often elsewhere: the declaration of the variable being assigned, the
//! function a `return` belongs to, or the elements of an array literal that
//! was checked as a whole. [`AstIndex`] records those relationships once per
//! file so each diagnostic can look them up directly.

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::node::{NodeFlags, NodeIndex, SyntaxKind};
use crate::source_file::SourceFile;

/// One element of an array literal as the element matcher sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayElement {
    Expr(NodeIndex),
    /// Stand-in for the single `{}` compared when a literal has no elements.
    EmptyShape,
}

#[derive(Debug, Default)]
pub struct AstIndex {
    /// scope (block or source file) -> variable name -> declaration
    declarations: FxHashMap<NodeIndex, FxHashMap<String, NodeIndex>>,
    return_to_container: FxHashMap<NodeIndex, NodeIndex>,
    container_to_returns: FxHashMap<NodeIndex, Vec<NodeIndex>>,
    /// declaration / assignment / return / call argument -> literal elements
    array_items: FxHashMap<NodeIndex, Vec<ArrayElement>>,
}

impl AstIndex {
    pub fn build(file: &SourceFile) -> Self {
        let mut index = AstIndex::default();

        for (node_index, node) in file.arena().iter() {
            match node.kind {
                SyntaxKind::VariableDeclaration => {
                    let scope = enclosing_scope(file, node.parent);
                    let name = node
                        .name
                        .clone()
                        .unwrap_or_else(|| file.text(node.child(0)).to_string());
                    index
                        .declarations
                        .entry(scope)
                        .or_default()
                        .insert(name, node_index);
                }
                SyntaxKind::ReturnStatement => {
                    let container = file.find_ancestor(node.parent, |n| n.kind.is_function_like());
                    if let Some(container) = container {
                        index.return_to_container.insert(node_index, container);
                        index
                            .container_to_returns
                            .entry(container)
                            .or_default()
                            .push(node_index);
                    }
                }
                SyntaxKind::ArrayLiteralExpression => {
                    if let Some(site) = array_site(file, node_index) {
                        let elements = if node.children.is_empty() {
                            vec![ArrayElement::EmptyShape]
                        } else {
                            node.children.iter().map(|&e| ArrayElement::Expr(e)).collect()
                        };
                        index.array_items.insert(site, elements);
                    }
                }
                _ => {}
            }
        }

        debug!(
            file = file.file_name(),
            scopes = index.declarations.len(),
            containers = index.container_to_returns.len(),
            array_sites = index.array_items.len(),
            "built ast index"
        );
        index
    }

    /// Declaration of the variable `node` names, searching the enclosing
    /// scopes from the innermost outward. Falls back to `node` itself.
    pub fn declaration_of(&self, file: &SourceFile, node: NodeIndex) -> NodeIndex {
        let name = file.text(node);
        if name.is_empty() {
            return node;
        }
        let mut scope = enclosing_scope(file, file.parent(node));
        loop {
            if let Some(found) = self.declarations.get(&scope).and_then(|map| map.get(name)) {
                return *found;
            }
            if scope == file.root() || scope.is_none() {
                return node;
            }
            scope = enclosing_scope(file, file.parent(scope));
        }
    }

    pub fn container_of(&self, return_statement: NodeIndex) -> Option<NodeIndex> {
        self.return_to_container.get(&return_statement).copied()
    }

    pub fn returns_of(&self, container: NodeIndex) -> &[NodeIndex] {
        self.container_to_returns
            .get(&container)
            .map_or(&[][..], Vec::as_slice)
    }

    pub fn array_elements_of(&self, site: NodeIndex) -> Option<&[ArrayElement]> {
        self.array_items.get(&site).map(Vec::as_slice)
    }
}

/// Nearest block or source file containing `node` (inclusive).
fn enclosing_scope(file: &SourceFile, node: NodeIndex) -> NodeIndex {
    file.find_ancestor(node, |n| {
        matches!(n.kind, SyntaxKind::Block | SyntaxKind::SourceFile)
    })
    .unwrap_or_else(|| file.root())
}

/// The statement-level node an array literal is the direct value of.
fn array_site(file: &SourceFile, literal: NodeIndex) -> Option<NodeIndex> {
    let parent_index = file.parent(literal);
    let parent = file.node(parent_index)?;
    match parent.kind {
        SyntaxKind::VariableDeclaration if parent.children.len() > 1 => {
            (parent.last_child() == literal).then_some(parent_index)
        }
        SyntaxKind::BinaryExpression if parent.flags.contains(NodeFlags::ASSIGNMENT) => {
            (parent.child(1) == literal).then_some(parent_index)
        }
        SyntaxKind::ReturnStatement => Some(parent_index),
        SyntaxKind::CallExpression => (parent.child(0) != literal).then_some(literal),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../tests/ast_index_tests.rs"]
mod tests;
