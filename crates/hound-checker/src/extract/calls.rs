//! Call expressions: argument count first, then each argument against its
//! parameter.

use hound_ast::{NodeIndex, SyntaxKind};
use hound_types::type_queries::{array_element_type, function_shape_of, is_array_type, remove_undefined};
use hound_types::{ParamInfo, TypeId};
use tracing::debug;

use super::Extracted;
use super::array_items::{ElementTarget, match_elements};
use crate::compare::{CompareMode, Comparator};
use crate::context::{ConflictSite, DiagnosticContext};
use crate::info::{declaration_link, full_label, widened_node_info};
use crate::problem::{CallDetails, CallingPair, ComparisonLayer, NodeInfo, Stack, UnsupportedReason};

/// A parameter with `undefined` stripped from its type.
struct Param {
    info: NodeInfo,
    type_id: TypeId,
    optional: bool,
}

pub(super) fn from_call(ctx: &mut DiagnosticContext<'_>) -> Extracted {
    let Some(call) = ctx.file.node(ctx.root) else {
        return Err(UnsupportedReason::UnsupportedKind);
    };
    let callee = call.child(0);
    let args: Vec<NodeIndex> = call.children.iter().skip(1).copied().collect();
    let shape = ctx
        .type_of(callee)
        .and_then(|callee_type| function_shape_of(ctx.run.db(), callee_type))
        .ok_or(UnsupportedReason::MissingSignature)?;

    let params: Vec<Param> = shape.params.iter().map(|param| narrow_param(ctx, param)).collect();
    let mut sources = Vec::with_capacity(args.len());
    for &arg in &args {
        let arg_type = ctx.type_of(arg).ok_or(UnsupportedReason::MissingType)?;
        sources.push((arg, arg_type, widened_node_info(&ctx.run, ctx.file, arg, arg_type)));
    }

    let pair_count = args.len().max(params.len());
    let calling_pairs: Vec<CallingPair> = (0..pair_count)
        .map(|position| CallingPair {
            source: sources.get(position).map(|(_, _, info)| info.clone()),
            target: params.get(position).map(|param| param.info.clone()),
            optional: params.get(position).is_some_and(|param| param.optional),
        })
        .collect();
    let error_index = args.iter().position(|&arg| contains(ctx, arg, ctx.error_node));
    let too_many_arguments = args.len() > params.len();
    let first_absent_required = calling_pairs
        .iter()
        .position(|pair| pair.source.is_none() && pair.target.is_some() && !pair.optional);
    let details = CallDetails {
        calling_pairs,
        error_index,
        too_many_arguments,
        too_few_arguments: first_absent_required.is_some(),
    };

    // Arity problems are reported without comparing any types.
    let offending = if too_many_arguments {
        Some(params.len())
    } else {
        first_absent_required
    };
    if let Some(position) = offending {
        debug!(
            args = args.len(),
            params = params.len(),
            too_many = too_many_arguments,
            "call arity mismatch"
        );
        let pair = &details.calling_pairs[position];
        let layer = ComparisonLayer::new(
            pair.target.clone().unwrap_or_default(),
            pair.source.clone().unwrap_or_default(),
        );
        let remaining = pair_count - position - 1;
        ctx.emit_arity(
            Stack::new().push(layer),
            ConflictSite {
                source_node: args.get(position).copied(),
                target_node: Some(callee),
                call: Some(details),
                remaining,
                ..ConflictSite::default()
            },
        );
        return Ok(());
    }

    let db = ctx.run.db();
    let index = ctx.index;
    for (position, (param, (arg, arg_type, arg_info))) in params.iter().zip(&sources).enumerate() {
        let remaining = args.len() - position - 1;
        let site = ConflictSite {
            source_node: Some(*arg),
            target_node: Some(callee),
            call: Some(details.clone()),
            remaining,
            ..ConflictSite::default()
        };

        if ctx.kind(*arg) == Some(SyntaxKind::ArrayLiteralExpression)
            && is_array_type(db, param.type_id)
            && let Some(elements) = index.array_elements_of(*arg)
            && let Some(element_type) = array_element_type(db, param.type_id)
        {
            let before = ctx.problems.len();
            let target = ElementTarget {
                info: NodeInfo {
                    type_text: ctx.format(element_type),
                    type_id: Some(element_type),
                    ..param.info.clone()
                },
                node: Some(callee),
                element_type,
            };
            match_elements(ctx, &target, elements, CompareMode::call_argument(), site)?;
            if ctx.problems.len() > before {
                return Ok(());
            }
            continue;
        }

        let stack = Stack::new().push(ComparisonLayer::new(param.info.clone(), arg_info.clone()));
        let mut comparator = Comparator::new(ctx.run, CompareMode::call_argument());
        if let Err(conflict) = comparator.compare(param.type_id, *arg_type, &stack) {
            ctx.emit(conflict, site);
            return Ok(());
        }
    }
    Ok(())
}

fn narrow_param(ctx: &DiagnosticContext<'_>, param: &ParamInfo) -> Param {
    let (type_id, stripped) = remove_undefined(ctx.run.db(), param.type_id);
    let type_text = ctx.format(type_id);
    let optional = param.optional || stripped;
    let marker = if optional { "?" } else { "" };
    let info = NodeInfo {
        full_label: full_label(&format!("{}{marker}", param.name), &type_text, false),
        display_text: param.name.clone(),
        type_text,
        link: param
            .declaration
            .map(|decl| declaration_link(&ctx.run, decl))
            .unwrap_or_default(),
        type_id: Some(type_id),
    };
    Param {
        info,
        type_id,
        optional,
    }
}

/// `node` is `ancestor` or lies below it.
fn contains(ctx: &DiagnosticContext<'_>, ancestor: NodeIndex, node: NodeIndex) -> bool {
    std::iter::successors(Some(node), |&current| {
        let parent = ctx.file.parent(current);
        parent.is_some().then_some(parent)
    })
    .any(|current| current == ancestor)
}
