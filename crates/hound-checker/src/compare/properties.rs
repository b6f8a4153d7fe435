//! One-directional property diff between two structured types.

use std::cmp::max;

use hound_types::type_queries::{
    find_property, is_function_type, is_never_type, is_simple_type, properties_of, union_members,
};
use hound_types::{PropertyInfo, TypeId};

use crate::context::RunContext;
use crate::info::{declaration_text, property_info, type_info};
use crate::problem::{ComparisonLayer, ReversedShape, ShapeProblem};

/// Outcome of comparing two property types without recursing into them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyMatch {
    Match,
    /// Both simple and different.
    Mismatch,
    /// One side simple, the other structured.
    Bigley,
    Never,
    /// Both structured; decided by a nested comparison.
    Recurse,
}

/// Two function-typed properties always match; their signatures are not
/// compared.
pub fn classify_property_pair(run: &RunContext<'_>, first: TypeId, second: TypeId) -> PropertyMatch {
    let db = run.db();
    if first == TypeId::ANY
        || second == TypeId::ANY
        || run.format(first) == run.format(second)
        || (is_function_type(db, first) && is_function_type(db, second))
        || simple_union_overlap(run, first, second)
    {
        return PropertyMatch::Match;
    }
    let first_simple = is_simple_type(db, first);
    let second_simple = is_simple_type(db, second);
    if first_simple && second_simple {
        PropertyMatch::Mismatch
    } else if first_simple || second_simple {
        PropertyMatch::Bigley
    } else if is_never_type(db, first) || is_never_type(db, second) {
        PropertyMatch::Never
    } else {
        PropertyMatch::Recurse
    }
}

/// `string` against `number | string | boolean` counts as a match: some
/// simple member appears on both sides.
fn simple_union_overlap(run: &RunContext<'_>, first: TypeId, second: TypeId) -> bool {
    let db = run.db();
    let first_members = union_members(db, first);
    let second_members = union_members(db, second);
    if first_members.len() < 2 && second_members.len() < 2 {
        return false;
    }
    let simple_texts = |members: &[TypeId]| -> Vec<String> {
        members
            .iter()
            .filter(|&&member| is_simple_type(db, member))
            .map(|&member| run.format(member))
            .collect()
    };
    let first_texts = simple_texts(first_members.as_slice());
    simple_texts(second_members.as_slice())
        .iter()
        .any(|text| first_texts.contains(text))
}

/// A property pair whose comparison was deferred until the enclosing
/// shapes agree.
pub(crate) struct NestedPair {
    pub target: TypeId,
    pub source: TypeId,
    pub layer: ComparisonLayer,
}

#[derive(Default)]
pub(crate) struct DirectionDiff {
    pub matched: Vec<String>,
    pub mismatch: Vec<String>,
    pub misslike: Vec<String>,
    pub missing: Vec<String>,
    pub optional: Vec<String>,
    pub unchecked: Vec<String>,
    pub total: usize,
    pub nested: Vec<NestedPair>,
}

impl DirectionDiff {
    pub fn has_problem(&self) -> bool {
        !self.mismatch.is_empty() || !self.missing.is_empty() || !self.misslike.is_empty()
    }

    pub fn overlap(&self) -> usize {
        self.matched.len() + self.unchecked.len()
    }
}

/// Walk the properties of `first` and look each one up on `second`.
///
/// Nested pairs are recorded with `first` as the target side, which is
/// only meaningful in the forward direction.
pub(crate) fn diff_properties(run: &RunContext<'_>, first: TypeId, second: TypeId) -> DirectionDiff {
    let db = run.db();
    let properties = properties_of(db, first);
    let mut diff = DirectionDiff {
        total: properties.len(),
        ..DirectionDiff::default()
    };
    for prop in &properties {
        let name = prop.name.clone();
        let Some(other) = find_property(db, second, &prop.name) else {
            if prop.optional {
                diff.optional.push(name);
            } else {
                diff.missing.push(name);
            }
            continue;
        };
        match classify_property_pair(run, prop.type_id, other.type_id) {
            PropertyMatch::Match => diff.matched.push(name),
            PropertyMatch::Recurse => {
                diff.unchecked.push(name);
                diff.nested.push(NestedPair {
                    target: prop.type_id,
                    source: other.type_id,
                    layer: ComparisonLayer::new(property_info(run, prop), property_info(run, &other)),
                });
            }
            PropertyMatch::Mismatch | PropertyMatch::Bigley | PropertyMatch::Never => {
                if is_misslike(run, prop, &other) {
                    diff.misslike.push(name);
                } else {
                    diff.mismatch.push(name);
                }
            }
        }
    }
    diff
}

/// Declared with the same text on both sides, yet the types differ.
fn is_misslike(run: &RunContext<'_>, first: &PropertyInfo, second: &PropertyInfo) -> bool {
    let (Some(first_decl), Some(second_decl)) = (first.declaration, second.declaration) else {
        return false;
    };
    match (declaration_text(run, first_decl), declaration_text(run, second_decl)) {
        (Some(first_text), Some(second_text)) => first_text == second_text,
        _ => false,
    }
}

/// Merge the forward diff with the optional reverse one.
pub(crate) fn shape_problem(
    run: &RunContext<'_>,
    target: TypeId,
    source: TypeId,
    forward: DirectionDiff,
    reverse: Option<DirectionDiff>,
) -> ShapeProblem {
    let overlap = forward.overlap();
    let total = max(forward.total, reverse.as_ref().map_or(0, |r| r.total));
    ShapeProblem {
        target_info: type_info(run, target),
        source_info: type_info(run, source),
        matched: forward.matched,
        mismatch: forward.mismatch,
        misslike: forward.misslike,
        missing: forward.missing,
        optional: forward.optional,
        unchecked: forward.unchecked,
        contextual: Vec::new(),
        overlap,
        total,
        reversed: reverse.map(|reverse| ReversedShape {
            missing: reverse.missing,
            optional: reverse.optional,
            contextual: Vec::new(),
        }),
    }
}
