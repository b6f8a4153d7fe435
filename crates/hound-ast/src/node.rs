//! Syntax nodes and the arena that owns them.
//!
//! Nodes are stored flat in a [`NodeArena`] and addressed by [`NodeIndex`].
//! Child layout per kind is fixed so that consumers can index into
//! `children` positionally:
//!
//! | Kind | Children |
//! |---|---|
//! | `VariableDeclaration` | name, type annotation?, initializer? |
//! | `ExpressionStatement` | expression |
//! | `BinaryExpression` | left, right |
//! | `ReturnStatement` | expression? |
//! | `CallExpression` | callee, arguments... |
//! | `PropertyAccessExpression` | object, name |
//! | `ElementAccessExpression` | object, index |
//! | function-likes | parameters..., body |
//! | `ArrayLiteralExpression` | elements... |

use bitflags::bitflags;
use serde::Serialize;
use smallvec::SmallVec;

/// Index of a node inside a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeIndex(pub u32);

impl NodeIndex {
    pub const NONE: NodeIndex = NodeIndex(u32::MAX);

    #[inline]
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }

    #[inline]
    pub fn is_some(self) -> bool {
        self != Self::NONE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SyntaxKind {
    SourceFile,
    Block,

    // Statements
    VariableStatement,
    VariableDeclaration,
    ExpressionStatement,
    ReturnStatement,

    // Function-likes
    FunctionDeclaration,
    FunctionExpression,
    ArrowFunction,
    MethodDeclaration,
    GetAccessor,
    SetAccessor,
    Constructor,
    Parameter,

    // Expressions
    Identifier,
    BinaryExpression,
    PropertyAccessExpression,
    ElementAccessExpression,
    CallExpression,
    ArrayLiteralExpression,
    ObjectLiteralExpression,
    PropertyAssignment,

    // Literal tokens
    StringLiteral,
    NumericLiteral,
    BigIntLiteral,
    TrueKeyword,
    FalseKeyword,
    NullKeyword,

    // Declarations and type syntax
    InterfaceDeclaration,
    TypeAliasDeclaration,
    PropertySignature,
    TypeAnnotation,
}

impl SyntaxKind {
    /// Anything with parameters and a body that `return` binds to.
    pub fn is_function_like(self) -> bool {
        matches!(
            self,
            SyntaxKind::FunctionDeclaration
                | SyntaxKind::FunctionExpression
                | SyntaxKind::ArrowFunction
                | SyntaxKind::MethodDeclaration
                | SyntaxKind::GetAccessor
                | SyntaxKind::SetAccessor
                | SyntaxKind::Constructor
        )
    }

    /// Literal tokens render as their own value, so labels skip the `name: type` form.
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            SyntaxKind::StringLiteral
                | SyntaxKind::NumericLiteral
                | SyntaxKind::BigIntLiteral
                | SyntaxKind::TrueKeyword
                | SyntaxKind::FalseKeyword
                | SyntaxKind::NullKeyword
        )
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct NodeFlags: u8 {
        /// `?` on a parameter or property signature.
        const OPTIONAL   = 1 << 0;
        /// Binary expression whose operator is `=`.
        const ASSIGNMENT = 1 << 1;
    }
}

#[derive(Debug, Clone)]
pub struct Node {
    pub kind: SyntaxKind,
    pub flags: NodeFlags,
    pub parent: NodeIndex,
    pub children: SmallVec<[NodeIndex; 4]>,
    /// Declared name, for declarations that introduce one.
    pub name: Option<String>,
    /// Source text of the whole node.
    pub text: String,
    /// 1-based line the node starts on.
    pub line: u32,
}

impl Node {
    #[inline]
    pub fn child(&self, index: usize) -> NodeIndex {
        self.children.get(index).copied().unwrap_or(NodeIndex::NONE)
    }

    #[inline]
    pub fn last_child(&self) -> NodeIndex {
        self.children.last().copied().unwrap_or(NodeIndex::NONE)
    }
}

/// Flat storage for every node of one source file.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> NodeArena {
        NodeArena::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Append a node and adopt its children.
    pub fn add(
        &mut self,
        kind: SyntaxKind,
        flags: NodeFlags,
        children: &[NodeIndex],
        text: String,
        line: u32,
    ) -> NodeIndex {
        let index = NodeIndex(self.nodes.len() as u32);
        let line = children
            .iter()
            .filter_map(|&child| self.get(child))
            .map(|child| child.line)
            .min()
            .map_or(line, |first| first.min(line));
        for &child in children {
            if let Some(node) = self.nodes.get_mut(child.0 as usize) {
                node.parent = index;
            }
        }
        self.nodes.push(Node {
            kind,
            flags,
            parent: NodeIndex::NONE,
            children: children.iter().copied().collect(),
            name: None,
            text,
            line,
        });
        index
    }

    #[inline]
    pub fn get(&self, index: NodeIndex) -> Option<&Node> {
        if index.is_none() {
            return None;
        }
        self.nodes.get(index.0 as usize)
    }

    #[inline]
    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut Node> {
        if index.is_none() {
            return None;
        }
        self.nodes.get_mut(index.0 as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeIndex, &Node)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeIndex(i as u32), node))
    }
}
