//! Element-by-element matching of an array literal against an array target.
//!
//! Checkers report a literal like `[a, b, c]` as one failed assignment. Here
//! each element is compared on its own so the problem points at the first
//! element that does not fit.

use hound_ast::{ArrayElement, NodeIndex};
use hound_types::TypeId;
use tracing::debug;

use crate::compare::{CompareMode, Comparator};
use crate::context::{ConflictSite, DiagnosticContext};
use crate::info::{full_label, node_info};
use crate::problem::{ComparisonLayer, NodeInfo, Stack, UnsupportedReason};

pub(super) struct ElementTarget {
    pub info: NodeInfo,
    pub node: Option<NodeIndex>,
    pub element_type: TypeId,
}

/// Compare each element against the target's element type, stopping at the
/// first conflict. `site` supplies whatever else the problem should carry.
pub(super) fn match_elements(
    ctx: &mut DiagnosticContext<'_>,
    target: &ElementTarget,
    elements: &[ArrayElement],
    mode: CompareMode,
    site: ConflictSite,
) -> Result<(), UnsupportedReason> {
    for (position, element) in elements.iter().enumerate() {
        let (node, source_type, source_info) = match *element {
            ArrayElement::Expr(node) => {
                let source_type = ctx.type_of(node).ok_or(UnsupportedReason::MissingType)?;
                (Some(node), source_type, node_info(&ctx.run, ctx.file, node, source_type))
            }
            ArrayElement::EmptyShape => (None, TypeId::EMPTY_OBJECT, empty_shape_info()),
        };
        let stack = Stack::new().push(ComparisonLayer::new(target.info.clone(), source_info));
        let mut comparator = Comparator::new(ctx.run, mode);
        if let Err(conflict) = comparator.compare(target.element_type, source_type, &stack) {
            debug!(position, of = elements.len(), "array element conflicts");
            ctx.emit(
                conflict,
                ConflictSite {
                    source_node: node,
                    target_node: target.node,
                    remaining: elements.len() - position - 1,
                    ..site
                },
            );
            return Ok(());
        }
    }
    Ok(())
}

fn empty_shape_info() -> NodeInfo {
    NodeInfo {
        display_text: "{}".to_string(),
        type_text: "{}".to_string(),
        full_label: full_label("{}", "{}", false),
        link: String::new(),
        type_id: Some(TypeId::EMPTY_OBJECT),
    }
}
