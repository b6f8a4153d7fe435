//! Declarations with an initializer and `=` assignments.

use hound_ast::{NodeFlags, NodeIndex, SyntaxKind};
use hound_types::TypeId;
use hound_types::type_queries::{array_element_type, function_shape_of, is_array_type};

use super::Extracted;
use super::array_items::{ElementTarget, match_elements};
use super::property_access::missing_index;
use super::returns::compare_function_body;
use crate::compare::{CompareMode, Comparator};
use crate::context::{ConflictSite, DiagnosticContext};
use crate::info::node_info;
use crate::placeholder::{access_path, breadcrumb_stack};
use crate::problem::{ComparisonLayer, Stack, UnsupportedReason};

/// `const x: T = value`
pub(super) fn from_declaration(ctx: &mut DiagnosticContext<'_>) -> Extracted {
    let root = ctx.root;
    let node = ctx.file.node(root).ok_or(UnsupportedReason::UnsupportedKind)?;
    let name = node.child(0);
    let initializer = node.last_child();
    if node.children.len() < 2 || ctx.kind(initializer) == Some(SyntaxKind::TypeAnnotation) {
        return Err(UnsupportedReason::UnsupportedKind);
    }
    let target_type = ctx
        .type_of(name)
        .or_else(|| ctx.type_of(root))
        .ok_or(UnsupportedReason::MissingType)?;
    compare_assignment(ctx, root, name, target_type, initializer)
}

/// `target = value;`
pub(super) fn from_statement(ctx: &mut DiagnosticContext<'_>) -> Extracted {
    let expression = ctx
        .file
        .node(ctx.root)
        .map_or(NodeIndex::NONE, |node| node.child(0));
    let Some(binary) = ctx.file.node(expression) else {
        return Err(UnsupportedReason::UnsupportedKind);
    };
    if binary.kind != SyntaxKind::BinaryExpression || !binary.flags.contains(NodeFlags::ASSIGNMENT) {
        return Err(UnsupportedReason::UnsupportedKind);
    }
    let (left, right) = (binary.child(0), binary.child(1));
    let target_type = ctx.type_of(left).ok_or(UnsupportedReason::MissingType)?;
    compare_assignment(ctx, expression, left, target_type, right)
}

/// `site` is the node array-literal elements are indexed under.
fn compare_assignment(
    ctx: &mut DiagnosticContext<'_>,
    site: NodeIndex,
    target_node: NodeIndex,
    target_type: TypeId,
    source_node: NodeIndex,
) -> Extracted {
    let db = ctx.run.db();
    let index = ctx.index;

    if is_array_type(db, target_type)
        && let Some(elements) = index.array_elements_of(site)
        && let Some(element_type) = array_element_type(db, target_type)
    {
        let target = ElementTarget {
            info: node_info(&ctx.run, ctx.file, target_node, element_type),
            node: Some(target_node),
            element_type,
        };
        return match_elements(ctx, &target, elements, CompareMode::default(), ConflictSite::default());
    }

    let source_kind = ctx.kind(source_node);
    if source_kind.is_some_and(SyntaxKind::is_function_like)
        && let Some(shape) = function_shape_of(db, target_type)
    {
        return compare_function_body(ctx, target_node, shape.return_type, source_node);
    }
    if source_kind == Some(SyntaxKind::ElementAccessExpression)
        && let Some(extracted) = missing_index(ctx, source_node)
    {
        return extracted;
    }

    let source_type = ctx.type_of(source_node).ok_or(UnsupportedReason::MissingType)?;
    let base = if ctx.kind(target_node) == Some(SyntaxKind::PropertyAccessExpression) {
        breadcrumb_stack(ctx, &access_path(ctx, target_node))
    } else {
        Stack::new()
    };
    let stack = base.push(ComparisonLayer::new(
        node_info(&ctx.run, ctx.file, target_node, target_type),
        node_info(&ctx.run, ctx.file, source_node, source_type),
    ));
    let mut comparator = Comparator::new(ctx.run, CompareMode::default());
    if let Err(conflict) = comparator.compare(target_type, source_type, &stack) {
        ctx.emit(conflict, ConflictSite::between(target_node, source_node));
    }
    Ok(())
}
