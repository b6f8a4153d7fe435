//! `return` statements, and function-valued initializers whose returns are
//! checked against a declared function type.

use hound_ast::{NodeIndex, SyntaxKind};
use hound_types::TypeId;
use hound_types::type_queries::{array_element_type, function_shape_of, is_array_type};

use super::Extracted;
use super::array_items::{ElementTarget, match_elements};
use crate::compare::{CompareMode, Comparator};
use crate::context::{ConflictSite, DiagnosticContext};
use crate::info::{full_label, node_info};
use crate::problem::{ComparisonLayer, NodeInfo, Stack, UnsupportedReason};

pub(super) fn from_return(ctx: &mut DiagnosticContext<'_>) -> Extracted {
    let root = ctx.root;
    let container = ctx
        .index
        .container_of(root)
        .ok_or(UnsupportedReason::UnsupportedKind)?;
    let return_type = declared_return_type(ctx, container).ok_or(UnsupportedReason::MissingSignature)?;
    let expression = ctx.file.node(root).map_or(NodeIndex::NONE, |node| node.child(0));
    if expression.is_none() {
        return Ok(());
    }
    let mode = CompareMode::with_both_ways(ctx.run.options().returns_both_ways());
    let db = ctx.run.db();
    let index = ctx.index;

    if is_array_type(db, return_type)
        && let Some(elements) = index.array_elements_of(root)
        && let Some(element_type) = array_element_type(db, return_type)
    {
        let target = ElementTarget {
            info: return_target_info(ctx, container, element_type),
            node: Some(container),
            element_type,
        };
        return match_elements(ctx, &target, elements, mode, ConflictSite::default());
    }

    let source_type = ctx.type_of(expression).ok_or(UnsupportedReason::MissingType)?;
    let target_info = return_target_info(ctx, container, return_type);
    compare_value(ctx, container, target_info, return_type, expression, source_type, mode);
    Ok(())
}

/// Compare what a function-valued initializer returns against the return
/// type of the declared function type. Every `return` is checked in turn;
/// an expression body stands in when there are none.
pub(super) fn compare_function_body(
    ctx: &mut DiagnosticContext<'_>,
    target_node: NodeIndex,
    return_type: TypeId,
    function_node: NodeIndex,
) -> Extracted {
    let target_info = node_info(&ctx.run, ctx.file, target_node, return_type);
    let mode = CompareMode::with_both_ways(ctx.run.options().returns_both_ways());
    let db = ctx.run.db();
    let index = ctx.index;
    let element_type = array_element_type(db, return_type).filter(|_| is_array_type(db, return_type));
    let returns = index.returns_of(function_node);

    if returns.is_empty() {
        let body = ctx.file.node(function_node).map_or(NodeIndex::NONE, |node| node.last_child());
        let source_type = match ctx.kind(body) {
            None | Some(SyntaxKind::Block) => return Ok(()),
            Some(SyntaxKind::CallExpression) => call_result_type(ctx, body),
            Some(_) => ctx.type_of(body),
        }
        .ok_or(UnsupportedReason::MissingType)?;
        compare_value(ctx, target_node, target_info, return_type, body, source_type, mode);
        return Ok(());
    }

    for &statement in returns {
        let expression = ctx.file.node(statement).map_or(NodeIndex::NONE, |node| node.child(0));
        if expression.is_none() {
            continue;
        }
        if let Some(element_type) = element_type
            && let Some(elements) = index.array_elements_of(statement)
        {
            let target = ElementTarget {
                info: node_info(&ctx.run, ctx.file, target_node, element_type),
                node: Some(target_node),
                element_type,
            };
            let before = ctx.problems.len();
            match_elements(ctx, &target, elements, mode, ConflictSite::default())?;
            if ctx.problems.len() > before {
                break;
            }
            continue;
        }
        let source_type = ctx.type_of(expression).ok_or(UnsupportedReason::MissingType)?;
        if compare_value(ctx, target_node, target_info.clone(), return_type, expression, source_type, mode) {
            break;
        }
    }
    Ok(())
}

/// Returns whether a conflict was recorded.
fn compare_value(
    ctx: &mut DiagnosticContext<'_>,
    target_node: NodeIndex,
    target_info: NodeInfo,
    target_type: TypeId,
    source_node: NodeIndex,
    source_type: TypeId,
    mode: CompareMode,
) -> bool {
    let stack = Stack::new().push(ComparisonLayer::new(
        target_info,
        node_info(&ctx.run, ctx.file, source_node, source_type),
    ));
    let mut comparator = Comparator::new(ctx.run, mode);
    match comparator.compare(target_type, source_type, &stack) {
        Ok(()) => false,
        Err(conflict) => {
            ctx.emit(conflict, ConflictSite::between(target_node, source_node));
            true
        }
    }
}

fn declared_return_type(ctx: &DiagnosticContext<'_>, container: NodeIndex) -> Option<TypeId> {
    let function_type = ctx.type_of(container)?;
    function_shape_of(ctx.run.db(), function_type).map(|shape| shape.return_type)
}

/// What a call expression evaluates to: the callee's declared return type,
/// or the host's type for the call when the callee has no signature.
fn call_result_type(ctx: &DiagnosticContext<'_>, call: NodeIndex) -> Option<TypeId> {
    let callee = ctx.file.node(call).map_or(NodeIndex::NONE, |node| node.child(0));
    ctx.type_of(callee)
        .and_then(|callee_type| function_shape_of(ctx.run.db(), callee_type))
        .map(|shape| shape.return_type)
        .or_else(|| ctx.type_of(call))
}

/// The declared return type, labelled with the function's name.
fn return_target_info(ctx: &DiagnosticContext<'_>, container: NodeIndex, type_id: TypeId) -> NodeInfo {
    let display_text = ctx.file.name(container).unwrap_or("return").to_string();
    let type_text = ctx.format(type_id);
    NodeInfo {
        full_label: full_label(&display_text, &type_text, false),
        display_text,
        type_text,
        link: ctx.file.node_link(container),
        type_id: Some(type_id),
    }
}
