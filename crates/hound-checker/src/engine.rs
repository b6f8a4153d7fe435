//! Drives resolution over a batch of checker diagnostics.

use hound_ast::{AstIndex, FileId, NodeIndex};
use once_cell::sync::Lazy;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::context::{DiagnosticContext, RunContext};
use crate::error::{HoundError, Result};
use crate::extract::extract;
use crate::host::CheckerHost;
use crate::locator::locate_root;
use crate::options::HoundOptions;
use crate::problem::{HoundReport, Unsupported, UnsupportedReason};

static DEFAULT_OPTIONS: Lazy<HoundOptions> = Lazy::new(HoundOptions::default);

/// A diagnostic as reported by the checker: an error code at a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HostDiagnostic {
    pub code: u32,
    pub file: FileId,
    pub node: NodeIndex,
}

impl HostDiagnostic {
    pub fn new(code: u32, file: FileId, node: NodeIndex) -> Self {
        Self { code, file, node }
    }
}

/// Explains checker diagnostics against one host.
///
/// Per-file [`AstIndex`]es are built on first use and kept for the life of
/// the resolver, so several runs over the same program share them.
pub struct Hound<'a> {
    host: &'a dyn CheckerHost,
    options: &'a HoundOptions,
    indexes: FxHashMap<FileId, AstIndex>,
}

impl<'a> Hound<'a> {
    pub fn new(host: &'a dyn CheckerHost) -> Self {
        Self::with_options(host, &DEFAULT_OPTIONS)
    }

    pub fn with_options(host: &'a dyn CheckerHost, options: &'a HoundOptions) -> Self {
        Self {
            host,
            options,
            indexes: FxHashMap::default(),
        }
    }

    pub fn options(&self) -> &HoundOptions {
        self.options
    }

    /// Resolve `diagnostics` in order.
    ///
    /// Ignored codes are skipped, and diagnostics sharing a root are only
    /// explained once. A diagnostic naming a file or node the host does not
    /// know is an error; one the resolver cannot explain is reported as
    /// unsupported.
    pub fn run(&mut self, diagnostics: &[HostDiagnostic]) -> Result<HoundReport> {
        let run = RunContext::new(self.host, self.options);
        let mut report = HoundReport::default();
        let mut seen: FxHashSet<(FileId, NodeIndex)> = FxHashSet::default();

        for diagnostic in diagnostics {
            let HostDiagnostic { code, file: file_id, node } = *diagnostic;
            if self.options.is_ignored(code) {
                debug!(code, "ignored code");
                continue;
            }
            let file = self
                .host
                .source_file(file_id)
                .ok_or(HoundError::UnknownFile { code, file: file_id })?;
            if file.node(node).is_none() {
                return Err(HoundError::UnknownNode {
                    code,
                    file_name: file.file_name().to_string(),
                    node,
                });
            }

            let root = locate_root(file, node, run.type_of(file_id, node));
            if !seen.insert((file_id, root)) {
                debug!(code, root = root.0, "root already explained");
                continue;
            }
            let Some(root_kind) = file.kind(root) else {
                continue;
            };
            debug!(code, file = file.file_name(), root = root.0, ?root_kind, "resolving");

            let index = self
                .indexes
                .entry(file_id)
                .or_insert_with(|| AstIndex::build(file));
            let mut ctx = DiagnosticContext {
                run,
                code,
                file_id,
                file,
                index,
                error_node: node,
                root,
                root_kind,
                missing_index: false,
                problems: Vec::new(),
            };
            let outcome = match extract(&mut ctx) {
                Ok(()) if ctx.problems.is_empty() => Err(UnsupportedReason::NoConflictFound),
                other => other,
            };
            match outcome {
                Ok(()) => {
                    if self.options.verbose {
                        for problem in &ctx.problems {
                            info!(
                                code,
                                link = %file.node_link(root),
                                classification = problem.classification.title(),
                                depth = problem.stack.len(),
                                "explained diagnostic"
                            );
                        }
                    }
                    report.problems.append(&mut ctx.problems);
                }
                Err(reason) => {
                    warn!(code, ?root_kind, ?reason, link = %file.node_link(root), "cannot explain diagnostic");
                    report.unsupported.push(Unsupported {
                        code,
                        file: file_id,
                        node: root,
                        kind: root_kind,
                        reason,
                        link: file.node_link(root),
                    });
                }
            }
        }

        debug!(
            problems = report.problems.len(),
            unsupported = report.unsupported.len(),
            "resolution finished"
        );
        Ok(report)
    }
}

/// One-shot resolution with a fresh [`Hound`].
pub fn resolve(
    host: &dyn CheckerHost,
    options: &HoundOptions,
    diagnostics: &[HostDiagnostic],
) -> Result<HoundReport> {
    Hound::with_options(host, options).run(diagnostics)
}
