//! State threaded through a resolver run.
//!
//! [`RunContext`] is immutable and shared by every diagnostic of a run.
//! [`DiagnosticContext`] is created fresh for each diagnostic and collects
//! the problems found for its root.

use hound_ast::{AstIndex, FileId, NodeIndex, SourceFile, SyntaxKind};
use hound_types::{TypeDatabase, TypeId, type_to_string, type_to_string_like};
use tracing::debug;

use crate::classify::classify;
use crate::compare::Conflict;
use crate::host::CheckerHost;
use crate::options::HoundOptions;
use crate::problem::{CallDetails, Diff, PlaceholderTarget, Problem, Stack};

#[derive(Clone, Copy)]
pub struct RunContext<'a> {
    host: &'a dyn CheckerHost,
    options: &'a HoundOptions,
}

impl<'a> RunContext<'a> {
    pub fn new(host: &'a dyn CheckerHost, options: &'a HoundOptions) -> Self {
        Self { host, options }
    }

    #[inline]
    pub fn host(&self) -> &'a dyn CheckerHost {
        self.host
    }

    #[inline]
    pub fn db(&self) -> &'a dyn TypeDatabase {
        self.host.types()
    }

    #[inline]
    pub fn options(&self) -> &'a HoundOptions {
        self.options
    }

    pub fn source_file(&self, file: FileId) -> Option<&'a SourceFile> {
        self.host.source_file(file)
    }

    pub fn type_of(&self, file: FileId, node: NodeIndex) -> Option<TypeId> {
        self.host.type_at_location(file, node)
    }

    pub fn format(&self, id: TypeId) -> String {
        type_to_string(self.db(), id)
    }

    pub fn format_widened(&self, id: TypeId) -> String {
        type_to_string_like(self.db(), id)
    }
}

/// Where a conflict was found, beyond what the comparator knows.
#[derive(Debug, Clone, Default)]
pub struct ConflictSite {
    pub source_node: Option<NodeIndex>,
    pub target_node: Option<NodeIndex>,
    pub call: Option<CallDetails>,
    pub placeholder_target: Option<PlaceholderTarget>,
    pub remaining: usize,
}

impl ConflictSite {
    pub fn between(target_node: NodeIndex, source_node: NodeIndex) -> Self {
        Self {
            source_node: source_node.is_some().then_some(source_node),
            target_node: target_node.is_some().then_some(target_node),
            ..Self::default()
        }
    }
}

pub struct DiagnosticContext<'a> {
    pub run: RunContext<'a>,
    pub code: u32,
    pub file_id: FileId,
    pub file: &'a SourceFile,
    pub index: &'a AstIndex,
    /// The node the checker flagged.
    pub error_node: NodeIndex,
    pub root: NodeIndex,
    pub root_kind: SyntaxKind,
    /// The target is a map whose index signatures reject the key.
    pub missing_index: bool,
    pub problems: Vec<Problem>,
}

impl<'a> DiagnosticContext<'a> {
    pub fn format(&self, id: TypeId) -> String {
        self.run.format(id)
    }

    pub fn type_of(&self, node: NodeIndex) -> Option<TypeId> {
        self.run.type_of(self.file_id, node)
    }

    pub fn kind(&self, node: NodeIndex) -> Option<SyntaxKind> {
        self.file.kind(node)
    }

    /// Classify a conflict and record it as a problem for this root.
    pub fn emit(&mut self, conflict: Conflict, site: ConflictSite) {
        let Conflict { stack, diff } = conflict;
        self.push_problem(stack, diff, site);
    }

    /// Record an argument-count mismatch. No types were compared.
    pub fn emit_arity(&mut self, stack: Stack, site: ConflictSite) {
        self.push_problem(stack, Diff::Arity, site);
    }

    fn push_problem(&mut self, stack: Stack, diff: Diff, site: ConflictSite) {
        let classification = classify(&diff, site.call.as_ref(), self.missing_index);
        debug!(
            code = self.code,
            root = self.root.0,
            layers = stack.len(),
            classification = ?classification,
            "problem found"
        );
        let target_declared = site
            .target_node
            .map(|node| self.index.declaration_of(self.file, node))
            .filter(|declared| Some(*declared) != site.target_node);
        self.problems.push(Problem {
            code: self.code,
            file: self.file_id,
            root: self.root,
            root_kind: self.root_kind,
            stack,
            diff,
            classification,
            call: site.call,
            placeholder_target: site.placeholder_target,
            source_node: site.source_node,
            target_node: site.target_node,
            target_declared,
            remaining: site.remaining,
        });
    }
}
