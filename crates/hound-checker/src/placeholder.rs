//! Synthesized comparison sides.
//!
//! Some conflicts have no source node to point at: writing a property the
//! target never declared, or indexing a map with a key type it does not
//! accept. The resolver stands a [`Placeholder`] in for the missing side
//! and compares it against exactly one key of the target.
//!
//! Dotted paths get one breadcrumb layer per object along the way, so a
//! conflict in `a.b.c = v` reads `a` → `a.b` → the conflict itself.

use hound_ast::{NodeIndex, SourceFile, SyntaxKind};
use hound_types::type_queries::{find_property, properties_of, union_members};
use hound_types::{RecursionProfile, TypeId};

use crate::compare::Conflict;
use crate::context::{DiagnosticContext, RunContext};
use crate::info::{full_label, node_info, type_info};
use crate::problem::{
    ComparisonLayer, Diff, NodeInfo, Placeholder, PlaceholderTarget, ReversedShape, ShapeProblem, Stack,
};

/// An object along a dotted access path and the key it is indexed by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathSegment {
    pub node: NodeIndex,
    pub type_id: TypeId,
    pub next_key: String,
}

/// Objects along the property access `access`, outermost first.
///
/// For `a.b.c` this is `a` (keyed by `b`) and `a.b` (keyed by `c`). A union
/// along the way resolves to the member that declares the next key. Returns
/// an empty path when the outermost object has no type.
pub fn access_path(ctx: &DiagnosticContext<'_>, access: NodeIndex) -> Vec<PathSegment> {
    let file = ctx.file;
    let max_depth = RecursionProfile::AccessPath.max_depth() as usize;

    // Inner to outer: (object node, key it is indexed by).
    let mut hops: Vec<(NodeIndex, String)> = Vec::new();
    let mut current = access;
    while file.kind(current) == Some(SyntaxKind::PropertyAccessExpression) && hops.len() < max_depth {
        let Some(node) = file.node(current) else {
            break;
        };
        let object = node.child(0);
        hops.push((object, member_name(file, node.child(1))));
        current = object;
    }

    let mut path = Vec::with_capacity(hops.len());
    let mut parent: Option<TypeId> = None;
    for (node, next_key) in hops.into_iter().rev() {
        let resolved = ctx.type_of(node).or_else(|| {
            let (parent, key) = (parent?, path.last().map(|segment: &PathSegment| &segment.next_key)?);
            find_property(ctx.run.db(), parent, key).map(|prop| prop.type_id)
        });
        let Some(type_id) = resolved else {
            break;
        };
        let type_id = declaring_member(&ctx.run, type_id, &next_key);
        parent = Some(type_id);
        path.push(PathSegment {
            node,
            type_id,
            next_key,
        });
    }
    path
}

fn member_name(file: &SourceFile, name: NodeIndex) -> String {
    file.name(name).unwrap_or_else(|| file.text(name)).to_string()
}

/// The union member that declares `key`, or `type_id` itself.
fn declaring_member(run: &RunContext<'_>, type_id: TypeId, key: &str) -> TypeId {
    let members = union_members(run.db(), type_id);
    if members.len() < 2 {
        return type_id;
    }
    members
        .into_iter()
        .find(|&member| find_property(run.db(), member, key).is_some())
        .unwrap_or(type_id)
}

/// One layer per segment, each with a bare placeholder keyed by the next
/// segment.
pub fn breadcrumb_stack(ctx: &DiagnosticContext<'_>, segments: &[PathSegment]) -> Stack {
    Stack::from_layers(segments.iter().map(|segment| {
        ComparisonLayer::with_placeholder(
            node_info(&ctx.run, ctx.file, segment.node, segment.type_id),
            Placeholder {
                info: NodeInfo::default(),
                target_key: Some(segment.next_key.clone()),
            },
        )
    }))
}

/// Info for a placeholder standing in for `key` with a value of `type_text`.
pub fn placeholder_info(key: &str, type_text: String, link: String, type_id: TypeId) -> NodeInfo {
    NodeInfo {
        display_text: key.to_string(),
        full_label: full_label(key, &type_text, false),
        type_text,
        link,
        type_id: Some(type_id),
    }
}

/// Compare a placeholder against the single key `key` of `target_type`.
///
/// The key present on the target is a mismatch, absent it is missing; the
/// target's other keys ride along as context.
pub fn placeholder_conflict(
    ctx: &DiagnosticContext<'_>,
    base: &Stack,
    target_node: NodeIndex,
    target_type: TypeId,
    info: NodeInfo,
    key: &str,
) -> (Conflict, PlaceholderTarget) {
    let layer = ComparisonLayer::with_placeholder(
        node_info(&ctx.run, ctx.file, target_node, target_type),
        Placeholder {
            info: info.clone(),
            target_key: Some(key.to_string()),
        },
    );
    let properties = properties_of(ctx.run.db(), target_type);
    let present = properties.iter().any(|prop| prop.name == key);
    let contextual = properties
        .iter()
        .filter(|prop| prop.name != key)
        .map(|prop| prop.name.clone())
        .collect();
    let keyed = vec![key.to_string()];
    let (mismatch, missing) = if present {
        (keyed, Vec::new())
    } else {
        (Vec::new(), keyed)
    };
    let problem = ShapeProblem {
        target_info: type_info(&ctx.run, target_type),
        source_info: info,
        mismatch,
        missing,
        total: properties.len(),
        reversed: Some(ReversedShape {
            contextual,
            ..ReversedShape::default()
        }),
        ..ShapeProblem::default()
    };
    let conflict = Conflict {
        stack: base.push(layer),
        diff: Diff::Shapes(vec![problem]),
    };
    let target = PlaceholderTarget {
        key: key.to_string(),
        type_id: target_type,
    };
    (conflict, target)
}

#[cfg(test)]
#[path = "tests/placeholder_tests.rs"]
mod tests;
