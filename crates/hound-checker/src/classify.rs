//! Maps a finished diff onto the [`ErrorType`] taxonomy.
//!
//! Pure: everything it looks at was captured when the diff was built.

use crate::problem::{CallDetails, Diff, ErrorType, ShapeProblem, TypeProblem};

/// First matching rule wins: argument count, then whole-type conflicts,
/// then property conflicts of the first shape candidate.
pub fn classify(diff: &Diff, call: Option<&CallDetails>, missing_index: bool) -> ErrorType {
    if let Some(call) = call {
        if call.too_many_arguments {
            return ErrorType::TooManyArgs;
        }
        if call.too_few_arguments {
            return ErrorType::TooFewArgs;
        }
    }
    match diff {
        Diff::Type(problem) => classify_type_problem(problem),
        Diff::Shapes(candidates) => candidates
            .first()
            .map_or(ErrorType::Mismatch, |problem| classify_shape_problem(problem, missing_index)),
        Diff::Arity => ErrorType::Mismatch,
    }
}

pub fn classify_type_problem(problem: &TypeProblem) -> ErrorType {
    let (source, target) = (problem.source, problem.target);
    if source.is_never || target.is_never {
        ErrorType::MustDeclare
    } else if source.is_array != target.is_array {
        if source.is_array {
            ErrorType::ArrayToNonArray
        } else {
            ErrorType::NonArrayToArray
        }
    } else if problem.source_info.type_text == problem.target_info.type_text {
        ErrorType::Mismatch
    } else if problem.like {
        ErrorType::Misslike
    } else if source.is_simple && target.is_simple {
        ErrorType::Mismatch
    } else if source.is_simple {
        ErrorType::SimpleToObject
    } else {
        ErrorType::ObjectToSimple
    }
}

pub fn classify_shape_problem(problem: &ShapeProblem, missing_index: bool) -> ErrorType {
    let forward_missing = !problem.missing.is_empty();
    let reverse_missing = !problem.reversed_missing().is_empty();
    let any_missing = forward_missing || reverse_missing;
    if !problem.misslike.is_empty() {
        ErrorType::Misslike
    } else if any_missing && !problem.mismatch.is_empty() {
        ErrorType::Both
    } else if any_missing && missing_index {
        ErrorType::MissingIndex
    } else if forward_missing && reverse_missing {
        ErrorType::BothMissing
    } else if forward_missing {
        ErrorType::TargetPropMissing
    } else if reverse_missing {
        ErrorType::SourcePropMissing
    } else {
        ErrorType::PropMismatch
    }
}

#[cfg(test)]
#[path = "tests/classify_tests.rs"]
mod tests;
