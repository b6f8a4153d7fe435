//! Structural comparison of a target type against a source type.
//!
//! The comparator answers one question: which part of `source` fails to fit
//! `target`? It walks arrays element-wise, expands unions on both sides, and
//! diffs the properties of structured types. Property pairs that are
//! themselves structured are only compared once the enclosing shapes agree,
//! so a failure is always reported at the shallowest level that explains
//! it.
//!
//! A failure comes back as a [`Conflict`]: the comparison [`Stack`] down to
//! the failing level plus the [`Diff`] found there.

mod properties;
mod select;

use hound_types::type_queries::{
    is_array_type, is_like_types, is_literal_type, is_never_type, is_simple_type,
};
use hound_types::{
    RecursionGuard, RecursionProfile, RecursionResult, TypeId, TypeShape, classify_type,
};
use smallvec::{SmallVec, smallvec};
use tracing::{Level, debug, trace};

use crate::context::RunContext;
use crate::info::type_info;
use crate::problem::{Diff, ShapeProblem, Stack, TypeFacts, TypeProblem};

pub use properties::{PropertyMatch, classify_property_pair};
pub use select::select_best;

use properties::{NestedPair, diff_properties, shape_problem};

#[derive(Debug, Clone)]
pub struct Conflict {
    pub stack: Stack,
    pub diff: Diff,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompareMode {
    /// Literal sources are accepted by a target of the same primitive
    /// family at the top level, the way argument checking widens them.
    pub call_argument: bool,
    /// Also diff the source's properties against the target.
    pub both_ways: bool,
}

impl Default for CompareMode {
    fn default() -> Self {
        Self {
            call_argument: false,
            both_ways: true,
        }
    }
}

impl CompareMode {
    pub fn call_argument() -> Self {
        Self {
            call_argument: true,
            ..Self::default()
        }
    }

    pub fn with_both_ways(both_ways: bool) -> Self {
        Self {
            both_ways,
            ..Self::default()
        }
    }
}

enum MemberMatch {
    Satisfied(Vec<NestedPair>),
    Shape(ShapeProblem),
    /// Two arrays whose elements conflict.
    Nested(Conflict),
    Unrelated,
}

#[derive(Default)]
struct Candidates {
    shapes: Vec<ShapeProblem>,
    nested: Option<Conflict>,
}

pub struct Comparator<'a> {
    run: RunContext<'a>,
    mode: CompareMode,
    guard: RecursionGuard<(TypeId, TypeId)>,
}

impl<'a> Comparator<'a> {
    pub fn new(run: RunContext<'a>, mode: CompareMode) -> Self {
        Self {
            run,
            mode,
            guard: RecursionGuard::with_profile(RecursionProfile::ShapeComparison),
        }
    }

    /// Compare `source` against `target`. `stack` must already end with the
    /// layer describing this pair.
    ///
    /// A pair that is already being compared further up counts as
    /// satisfied, as does any pair past the depth limit.
    pub fn compare(&mut self, target: TypeId, source: TypeId, stack: &Stack) -> Result<(), Conflict> {
        let key = (target, source);
        match self.guard.enter(key) {
            RecursionResult::Entered => {}
            RecursionResult::Cycle => {
                trace!(target = target.0, source = source.0, "cycle, assuming satisfied");
                return Ok(());
            }
            denied => {
                debug!(
                    target = target.0,
                    source = source.0,
                    depth = self.guard.depth(),
                    ?denied,
                    "comparison limit reached, assuming satisfied"
                );
                return Ok(());
            }
        }
        let result = self.compare_entered(target, source, stack);
        self.guard.leave(key);
        result
    }

    fn compare_entered(&mut self, target: TypeId, source: TypeId, stack: &Stack) -> Result<(), Conflict> {
        if tracing::enabled!(Level::TRACE) {
            trace!(
                target = %self.run.format(target),
                source = %self.run.format(source),
                depth = stack.len(),
                "compare"
            );
        }
        if self.trivially_satisfied(target, source) {
            return Ok(());
        }

        let db = self.run.db();
        let target_shape = classify_type(db, target);
        let source_shape = classify_type(db, source);
        match (&target_shape, &source_shape) {
            (TypeShape::ArrayOf(target_element), TypeShape::ArrayOf(source_element)) => {
                return self.compare(*target_element, *source_element, stack);
            }
            // A union on the other side is expanded below; one of its
            // members may be the matching array.
            (TypeShape::ArrayOf(_), other) | (other, TypeShape::ArrayOf(_))
                if !matches!(other, TypeShape::Union(_)) =>
            {
                return Err(Conflict {
                    stack: stack.clone(),
                    diff: Diff::Type(self.type_problem(target, source)),
                });
            }
            _ => {}
        }

        let sources = members_of(&source_shape, source);
        let targets = members_of(&target_shape, target);
        let mut queued = Vec::new();
        for &member in &sources {
            let mut candidates = Candidates::default();
            let mut satisfied = false;
            for &candidate in &targets {
                match self.match_member(candidate, member, stack) {
                    MemberMatch::Satisfied(nested) => {
                        queued.extend(nested);
                        satisfied = true;
                        break;
                    }
                    MemberMatch::Shape(problem) => candidates.shapes.push(problem),
                    MemberMatch::Nested(conflict) => {
                        candidates.nested.get_or_insert(conflict);
                    }
                    MemberMatch::Unrelated => {}
                }
            }
            if !satisfied {
                return Err(self.explain(target, member, candidates, stack));
            }
        }

        for pair in queued {
            let nested = stack.push(pair.layer);
            self.compare(pair.target, pair.source, &nested)?;
        }
        Ok(())
    }

    fn trivially_satisfied(&self, target: TypeId, source: TypeId) -> bool {
        target == source
            || target == TypeId::ANY
            || source == TypeId::ANY
            || self.run.format(target) == self.run.format(source)
    }

    fn match_member(&mut self, target: TypeId, source: TypeId, stack: &Stack) -> MemberMatch {
        if self.trivially_satisfied(target, source) {
            return MemberMatch::Satisfied(Vec::new());
        }
        let db = self.run.db();
        if self.mode.call_argument
            && stack.len() == 1
            && is_literal_type(db, source)
            && is_like_types(db, source, target)
        {
            return MemberMatch::Satisfied(Vec::new());
        }
        match (classify_type(db, target), classify_type(db, source)) {
            (TypeShape::ArrayOf(target_element), TypeShape::ArrayOf(source_element)) => {
                match self.compare(target_element, source_element, stack) {
                    Ok(()) => MemberMatch::Satisfied(Vec::new()),
                    Err(conflict) => MemberMatch::Nested(conflict),
                }
            }
            (
                TypeShape::Structured(_) | TypeShape::Function(_),
                TypeShape::Structured(_) | TypeShape::Function(_),
            ) => self.match_shapes(target, source),
            _ => MemberMatch::Unrelated,
        }
    }

    fn match_shapes(&self, target: TypeId, source: TypeId) -> MemberMatch {
        let forward = diff_properties(&self.run, target, source);
        let reverse = self
            .mode
            .both_ways
            .then(|| diff_properties(&self.run, source, target));
        let failed = forward.has_problem() || reverse.as_ref().is_some_and(|r| r.has_problem());
        if failed {
            MemberMatch::Shape(shape_problem(&self.run, target, source, forward, reverse))
        } else {
            MemberMatch::Satisfied(forward.nested)
        }
    }

    /// Best explanation for `member` fitting none of `target`'s members.
    fn explain(&self, target: TypeId, member: TypeId, candidates: Candidates, stack: &Stack) -> Conflict {
        if !candidates.shapes.is_empty() {
            return Conflict {
                stack: stack.clone(),
                diff: Diff::Shapes(select_best(candidates.shapes)),
            };
        }
        if let Some(nested) = candidates.nested {
            return nested;
        }
        Conflict {
            stack: stack.clone(),
            diff: Diff::Type(self.type_problem(target, member)),
        }
    }

    fn type_problem(&self, target: TypeId, source: TypeId) -> TypeProblem {
        let db = self.run.db();
        let facts = |id: TypeId| TypeFacts {
            is_array: is_array_type(db, id),
            is_never: is_never_type(db, id),
            is_simple: is_simple_type(db, id),
        };
        TypeProblem {
            source_info: type_info(&self.run, source),
            target_info: type_info(&self.run, target),
            source: facts(source),
            target: facts(target),
            like: is_like_types(db, source, target),
        }
    }
}

fn members_of(shape: &TypeShape, id: TypeId) -> SmallVec<[TypeId; 4]> {
    match shape {
        TypeShape::Union(members) => members.clone(),
        _ => smallvec![id],
    }
}
