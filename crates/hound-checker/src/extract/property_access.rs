//! Writes to properties the target type does not declare, and reads from
//! maps with a key type their index signatures reject.

use hound_ast::{NodeFlags, NodeIndex, SyntaxKind};
use hound_types::type_queries::index_signatures_of;
use hound_types::{TypeFlags, TypeId, type_flags};
use tracing::debug;

use super::Extracted;
use crate::context::{ConflictSite, DiagnosticContext, RunContext};
use crate::placeholder::{access_path, breadcrumb_stack, placeholder_conflict, placeholder_info};
use crate::problem::{Stack, UnsupportedReason};

/// `obj.key = value` where `key` is not declared on the type of `obj`.
pub(super) fn from_property_write(ctx: &mut DiagnosticContext<'_>) -> Extracted {
    let access = ctx.root;
    let parent = ctx.file.parent(access);
    let value = match ctx.file.node(parent) {
        Some(node)
            if node.kind == SyntaxKind::BinaryExpression
                && node.flags.contains(NodeFlags::ASSIGNMENT)
                && node.child(0) == access =>
        {
            node.child(1)
        }
        _ => return Err(UnsupportedReason::UnsupportedKind),
    };
    let value_type = ctx.type_of(value).ok_or(UnsupportedReason::MissingType)?;

    let path = access_path(ctx, access);
    let Some((object, outer)) = path.split_last() else {
        return Err(UnsupportedReason::MissingType);
    };
    let key = object.next_key.clone();
    if !index_signatures_of(ctx.run.db(), object.type_id).is_empty() {
        ctx.missing_index = true;
    }
    let info = placeholder_info(
        &key,
        ctx.run.format_widened(value_type),
        ctx.file.node_link(value),
        value_type,
    );
    let base = breadcrumb_stack(ctx, outer);
    let (conflict, target) = placeholder_conflict(ctx, &base, object.node, object.type_id, info, &key);
    debug!(key = %key, layers = conflict.stack.len(), "implicit property write");
    ctx.emit(
        conflict,
        ConflictSite {
            source_node: Some(value),
            target_node: Some(object.node),
            placeholder_target: Some(target),
            ..ConflictSite::default()
        },
    );
    Ok(())
}

/// `map[key]` where no index signature of the map accepts the key's type.
/// Returns `None` when the access is not such a read.
pub(super) fn missing_index(ctx: &mut DiagnosticContext<'_>, access: NodeIndex) -> Option<Extracted> {
    let node = ctx.file.node(access)?;
    let (object, key_node) = (node.child(0), node.child(1));
    let object_type = ctx.type_of(object)?;
    let key_type = ctx.type_of(key_node)?;
    let signatures = index_signatures_of(ctx.run.db(), object_type);
    if signatures.is_empty()
        || signatures
            .iter()
            .any(|signature| accepts_key(&ctx.run, signature.key_type, key_type))
    {
        return None;
    }

    let key = format!("[key: {}]", ctx.run.format_widened(key_type));
    ctx.missing_index = true;
    let info = placeholder_info(&key, "any".to_string(), ctx.file.node_link(key_node), TypeId::ANY);
    let (conflict, target) = placeholder_conflict(ctx, &Stack::new(), object, object_type, info, &key);
    ctx.emit(
        conflict,
        ConflictSite {
            source_node: Some(key_node),
            target_node: Some(object),
            placeholder_target: Some(target),
            ..ConflictSite::default()
        },
    );
    Some(Ok(()))
}

/// Numeric keys are accepted by string signatures, as in the checker.
fn accepts_key(run: &RunContext<'_>, signature_key: TypeId, key: TypeId) -> bool {
    if signature_key == TypeId::ANY || key == TypeId::ANY {
        return true;
    }
    if run.format(signature_key) == run.format_widened(key) {
        return true;
    }
    signature_key == TypeId::STRING && type_flags(run.db(), key).intersects(TypeFlags::NUMBER_LIKE)
}
