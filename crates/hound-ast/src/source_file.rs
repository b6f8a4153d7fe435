//! Source files and the builder hosts use to assemble them.

use serde::Serialize;

use crate::node::{Node, NodeArena, NodeFlags, NodeIndex, SyntaxKind};

/// Identity of a source file within one program snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct FileId(pub u32);

#[derive(Debug, Clone)]
pub struct SourceFile {
    file_name: String,
    arena: NodeArena,
    root: NodeIndex,
}

impl SourceFile {
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn arena(&self) -> &NodeArena {
        &self.arena
    }

    pub fn root(&self) -> NodeIndex {
        self.root
    }

    #[inline]
    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.arena.get(index)
    }

    #[inline]
    pub fn kind(&self, index: NodeIndex) -> Option<SyntaxKind> {
        self.arena.get(index).map(|node| node.kind)
    }

    #[inline]
    pub fn parent(&self, index: NodeIndex) -> NodeIndex {
        self.arena.get(index).map_or(NodeIndex::NONE, |node| node.parent)
    }

    pub fn children(&self, index: NodeIndex) -> &[NodeIndex] {
        self.arena
            .get(index)
            .map_or(&[][..], |node| node.children.as_slice())
    }

    pub fn text(&self, index: NodeIndex) -> &str {
        self.arena.get(index).map_or("", |node| node.text.as_str())
    }

    /// Declared name of a declaration node, if it has one.
    pub fn name(&self, index: NodeIndex) -> Option<&str> {
        self.arena.get(index).and_then(|node| node.name.as_deref())
    }

    /// `path/to/file.ts:line`, keeping at most the last four path segments.
    pub fn node_link(&self, index: NodeIndex) -> String {
        let Some(node) = self.arena.get(index) else {
            return String::new();
        };
        let segments: Vec<&str> = self.file_name.split('/').collect();
        let start = segments.len().saturating_sub(4);
        format!("{}:{}", segments[start..].join("/"), node.line)
    }

    /// Nearest ancestor-or-self satisfying `predicate`.
    pub fn find_ancestor(
        &self,
        index: NodeIndex,
        predicate: impl Fn(&Node) -> bool,
    ) -> Option<NodeIndex> {
        let mut current = index;
        while let Some(node) = self.arena.get(current) {
            if predicate(node) {
                return Some(current);
            }
            current = node.parent;
        }
        None
    }

    /// Every node below `index` in pre-order, `index` excluded.
    pub fn descendants(&self, index: NodeIndex) -> Vec<NodeIndex> {
        let mut out = Vec::new();
        let mut pending: Vec<NodeIndex> = self.children(index).iter().rev().copied().collect();
        while let Some(next) = pending.pop() {
            out.push(next);
            pending.extend(self.children(next).iter().rev().copied());
        }
        out
    }
}

/// Builds a [`SourceFile`] bottom-up.
///
/// Node text is derived from the children so that the tree reads like the
/// source it stands for. Every node is stamped with the current line, which
/// [`newline`](Self::newline) advances.
pub struct SourceFileBuilder {
    file_name: String,
    arena: NodeArena,
    line: u32,
}

impl SourceFileBuilder {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            arena: NodeArena::new(),
            line: 1,
        }
    }

    pub fn newline(&mut self) -> &mut Self {
        self.line += 1;
        self
    }

    pub fn line(&self) -> u32 {
        self.line
    }

    fn add(&mut self, kind: SyntaxKind, children: &[NodeIndex], text: String) -> NodeIndex {
        self.arena
            .add(kind, NodeFlags::empty(), children, text, self.line)
    }

    fn add_named(
        &mut self,
        kind: SyntaxKind,
        flags: NodeFlags,
        name: &str,
        children: &[NodeIndex],
        text: String,
    ) -> NodeIndex {
        let index = self.arena.add(kind, flags, children, text, self.line);
        if let Some(node) = self.arena.get_mut(index) {
            node.name = Some(name.to_string());
        }
        index
    }

    fn text_of(&self, index: NodeIndex) -> &str {
        self.arena.get(index).map_or("", |node| node.text.as_str())
    }

    fn joined(&self, nodes: &[NodeIndex], separator: &str) -> String {
        nodes
            .iter()
            .map(|&node| self.text_of(node))
            .collect::<Vec<_>>()
            .join(separator)
    }

    fn optional_flag(optional: bool) -> NodeFlags {
        if optional {
            NodeFlags::OPTIONAL
        } else {
            NodeFlags::empty()
        }
    }

    // ---------------------------------------------------------------------
    // Tokens
    // ---------------------------------------------------------------------

    pub fn identifier(&mut self, name: &str) -> NodeIndex {
        self.add(SyntaxKind::Identifier, &[], name.to_string())
    }

    pub fn string_literal(&mut self, value: &str) -> NodeIndex {
        self.add(SyntaxKind::StringLiteral, &[], format!("\"{value}\""))
    }

    pub fn numeric_literal(&mut self, text: &str) -> NodeIndex {
        self.add(SyntaxKind::NumericLiteral, &[], text.to_string())
    }

    pub fn bigint_literal(&mut self, text: &str) -> NodeIndex {
        self.add(SyntaxKind::BigIntLiteral, &[], text.to_string())
    }

    pub fn boolean_literal(&mut self, value: bool) -> NodeIndex {
        if value {
            self.add(SyntaxKind::TrueKeyword, &[], "true".to_string())
        } else {
            self.add(SyntaxKind::FalseKeyword, &[], "false".to_string())
        }
    }

    pub fn null_literal(&mut self) -> NodeIndex {
        self.add(SyntaxKind::NullKeyword, &[], "null".to_string())
    }

    pub fn type_annotation(&mut self, text: &str) -> NodeIndex {
        self.add(SyntaxKind::TypeAnnotation, &[], text.to_string())
    }

    // ---------------------------------------------------------------------
    // Expressions
    // ---------------------------------------------------------------------

    pub fn property_access(&mut self, object: NodeIndex, name: &str) -> NodeIndex {
        let name_node = self.identifier(name);
        let text = format!("{}.{}", self.text_of(object), name);
        self.add(SyntaxKind::PropertyAccessExpression, &[object, name_node], text)
    }

    pub fn element_access(&mut self, object: NodeIndex, index: NodeIndex) -> NodeIndex {
        let text = format!("{}[{}]", self.text_of(object), self.text_of(index));
        self.add(SyntaxKind::ElementAccessExpression, &[object, index], text)
    }

    pub fn call(&mut self, callee: NodeIndex, args: &[NodeIndex]) -> NodeIndex {
        let text = format!("{}({})", self.text_of(callee), self.joined(args, ", "));
        let mut children = vec![callee];
        children.extend_from_slice(args);
        self.add(SyntaxKind::CallExpression, &children, text)
    }

    pub fn assignment(&mut self, left: NodeIndex, right: NodeIndex) -> NodeIndex {
        let text = format!("{} = {}", self.text_of(left), self.text_of(right));
        self.arena.add(
            SyntaxKind::BinaryExpression,
            NodeFlags::ASSIGNMENT,
            &[left, right],
            text,
            self.line,
        )
    }

    pub fn array_literal(&mut self, elements: &[NodeIndex]) -> NodeIndex {
        let text = format!("[{}]", self.joined(elements, ", "));
        self.add(SyntaxKind::ArrayLiteralExpression, elements, text)
    }

    pub fn object_literal(&mut self, properties: &[NodeIndex]) -> NodeIndex {
        let text = if properties.is_empty() {
            "{}".to_string()
        } else {
            format!("{{ {} }}", self.joined(properties, ", "))
        };
        self.add(SyntaxKind::ObjectLiteralExpression, properties, text)
    }

    pub fn property_assignment(&mut self, name: &str, value: NodeIndex) -> NodeIndex {
        let name_node = self.identifier(name);
        let text = format!("{}: {}", name, self.text_of(value));
        self.add_named(
            SyntaxKind::PropertyAssignment,
            NodeFlags::empty(),
            name,
            &[name_node, value],
            text,
        )
    }

    pub fn arrow_function(&mut self, params: &[NodeIndex], body: NodeIndex) -> NodeIndex {
        let text = format!("({}) => {}", self.joined(params, ", "), self.text_of(body));
        let mut children = params.to_vec();
        children.push(body);
        self.add(SyntaxKind::ArrowFunction, &children, text)
    }

    pub fn function_expression(&mut self, params: &[NodeIndex], body: NodeIndex) -> NodeIndex {
        let text = format!("function ({}) {}", self.joined(params, ", "), self.text_of(body));
        let mut children = params.to_vec();
        children.push(body);
        self.add(SyntaxKind::FunctionExpression, &children, text)
    }

    // ---------------------------------------------------------------------
    // Declarations
    // ---------------------------------------------------------------------

    pub fn parameter(&mut self, name: &str, optional: bool, type_text: Option<&str>) -> NodeIndex {
        let name_node = self.identifier(name);
        let mut children = vec![name_node];
        let marker = if optional { "?" } else { "" };
        let text = match type_text {
            Some(type_text) => {
                children.push(self.type_annotation(type_text));
                format!("{name}{marker}: {type_text}")
            }
            None => format!("{name}{marker}"),
        };
        self.add_named(
            SyntaxKind::Parameter,
            Self::optional_flag(optional),
            name,
            &children,
            text,
        )
    }

    pub fn property_signature(&mut self, name: &str, optional: bool, type_text: &str) -> NodeIndex {
        let name_node = self.identifier(name);
        let annotation = self.type_annotation(type_text);
        let marker = if optional { "?" } else { "" };
        let text = format!("{name}{marker}: {type_text}");
        self.add_named(
            SyntaxKind::PropertySignature,
            Self::optional_flag(optional),
            name,
            &[name_node, annotation],
            text,
        )
    }

    pub fn interface_declaration(&mut self, name: &str, members: &[NodeIndex]) -> NodeIndex {
        let text = format!("interface {} {{ {} }}", name, self.joined(members, "; "));
        self.add_named(
            SyntaxKind::InterfaceDeclaration,
            NodeFlags::empty(),
            name,
            members,
            text,
        )
    }

    pub fn type_alias(&mut self, name: &str, type_text: &str) -> NodeIndex {
        let annotation = self.type_annotation(type_text);
        let text = format!("type {name} = {type_text}");
        self.add_named(
            SyntaxKind::TypeAliasDeclaration,
            NodeFlags::empty(),
            name,
            &[annotation],
            text,
        )
    }

    pub fn variable_declaration(
        &mut self,
        name: &str,
        type_text: Option<&str>,
        initializer: Option<NodeIndex>,
    ) -> NodeIndex {
        let name_node = self.identifier(name);
        let mut children = vec![name_node];
        let mut text = name.to_string();
        if let Some(type_text) = type_text {
            children.push(self.type_annotation(type_text));
            text.push_str(": ");
            text.push_str(type_text);
        }
        if let Some(initializer) = initializer {
            children.push(initializer);
            text.push_str(" = ");
            text.push_str(self.text_of(initializer));
        }
        self.add_named(
            SyntaxKind::VariableDeclaration,
            NodeFlags::empty(),
            name,
            &children,
            text,
        )
    }

    pub fn function_declaration(
        &mut self,
        name: &str,
        params: &[NodeIndex],
        return_type: Option<&str>,
        body: NodeIndex,
    ) -> NodeIndex {
        let annotation = return_type.map_or(String::new(), |ty| format!(": {ty}"));
        let text = format!(
            "function {}({}){} {}",
            name,
            self.joined(params, ", "),
            annotation,
            self.text_of(body)
        );
        let mut children = params.to_vec();
        children.push(body);
        self.add_named(
            SyntaxKind::FunctionDeclaration,
            NodeFlags::empty(),
            name,
            &children,
            text,
        )
    }

    pub fn method_declaration(
        &mut self,
        name: &str,
        params: &[NodeIndex],
        body: NodeIndex,
    ) -> NodeIndex {
        let text = format!("{}({}) {}", name, self.joined(params, ", "), self.text_of(body));
        let mut children = params.to_vec();
        children.push(body);
        self.add_named(
            SyntaxKind::MethodDeclaration,
            NodeFlags::empty(),
            name,
            &children,
            text,
        )
    }

    // ---------------------------------------------------------------------
    // Statements
    // ---------------------------------------------------------------------

    pub fn variable_statement(&mut self, declaration: NodeIndex) -> NodeIndex {
        let text = format!("const {};", self.text_of(declaration));
        self.add(SyntaxKind::VariableStatement, &[declaration], text)
    }

    pub fn expression_statement(&mut self, expression: NodeIndex) -> NodeIndex {
        let text = format!("{};", self.text_of(expression));
        self.add(SyntaxKind::ExpressionStatement, &[expression], text)
    }

    pub fn return_statement(&mut self, expression: Option<NodeIndex>) -> NodeIndex {
        match expression {
            Some(expression) => {
                let text = format!("return {};", self.text_of(expression));
                self.add(SyntaxKind::ReturnStatement, &[expression], text)
            }
            None => self.add(SyntaxKind::ReturnStatement, &[], "return;".to_string()),
        }
    }

    pub fn block(&mut self, statements: &[NodeIndex]) -> NodeIndex {
        let text = format!("{{ {} }}", self.joined(statements, " "));
        self.add(SyntaxKind::Block, statements, text)
    }

    /// Wrap the top-level statements in a `SourceFile` node.
    pub fn finish(mut self, statements: &[NodeIndex]) -> SourceFile {
        let text = self.joined(statements, "\n");
        let root = self
            .arena
            .add(SyntaxKind::SourceFile, NodeFlags::empty(), statements, text, 1);
        SourceFile {
            file_name: self.file_name,
            arena: self.arena,
            root,
        }
    }
}
