use std::cmp::Ordering;

use crate::problem::ShapeProblem;

/// Pick the shape candidates worth showing when a source matched none of
/// a union's members.
///
/// Candidates with misslike properties win outright. Otherwise, if exactly
/// one candidate overlaps its source by more than half, it is shown alone;
/// if none or several do, all are kept, best overlap first. Whenever more
/// than one candidate survives, or the survivor is a misslike, optional
/// properties are promoted to `contextual` so readers can tell the
/// candidates apart.
pub fn select_best(mut candidates: Vec<ShapeProblem>) -> Vec<ShapeProblem> {
    if candidates.len() > 1 {
        let misslikes: Vec<ShapeProblem> = candidates
            .iter()
            .filter(|candidate| !candidate.misslike.is_empty())
            .cloned()
            .collect();
        if misslikes.is_empty() {
            candidates.sort_by(by_overlap);
            let strong = candidates
                .iter()
                .filter(|candidate| candidate.overlap_ratio() > 0.5)
                .count();
            if strong == 1 {
                candidates.retain(|candidate| candidate.overlap_ratio() > 0.5);
            }
        } else {
            candidates = misslikes;
        }
    }

    let promote = candidates.len() > 1
        || candidates
            .first()
            .is_some_and(|candidate| !candidate.misslike.is_empty());
    if promote {
        for candidate in &mut candidates {
            candidate.contextual = candidate.optional.clone();
            if let Some(reversed) = &mut candidate.reversed {
                reversed.contextual = reversed.optional.clone();
            }
        }
    }
    candidates
}

/// Most overlap first; ties go to the smaller shape.
fn by_overlap(a: &ShapeProblem, b: &ShapeProblem) -> Ordering {
    b.overlap.cmp(&a.overlap).then(a.total.cmp(&b.total))
}

#[cfg(test)]
#[path = "../tests/select_tests.rs"]
mod tests;
