//! Cycle detection and depth limiting for recursive type walks.
//!
//! Structural comparison recurses into property types, and property types
//! can refer back to the type that declares them (`interface Node { next:
//! Node }`). [`RecursionGuard`] tracks the keys currently being visited so a
//! walk can stop when it comes back around, and caps both nesting depth and
//! total work.
//!
//! Limits come from a [`RecursionProfile`] rather than bare numbers at each
//! call site.

use std::hash::Hash;

use rustc_hash::FxHashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionProfile {
    /// Nested property comparison.
    ///
    /// depth = 100, iterations = 100,000
    ShapeComparison,

    /// Walking a dotted access path outward.
    ///
    /// depth = 20, iterations = 1,000
    AccessPath,
}

impl RecursionProfile {
    pub const fn max_depth(self) -> u32 {
        match self {
            Self::ShapeComparison => 100,
            Self::AccessPath => 20,
        }
    }

    pub const fn max_iterations(self) -> u32 {
        match self {
            Self::ShapeComparison => 100_000,
            Self::AccessPath => 1_000,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecursionResult {
    Entered,
    /// `key` is already on the current path.
    Cycle,
    DepthExceeded,
    IterationExceeded,
}

/// Visiting set plus depth and iteration counters.
///
/// Every successful [`enter`](Self::enter) must be paired with exactly one
/// [`leave`](Self::leave) for the same key. Debug builds panic when a guard
/// is dropped with keys still on the path.
pub struct RecursionGuard<K: Hash + Eq + Copy> {
    visiting: FxHashSet<K>,
    depth: u32,
    iterations: u32,
    max_depth: u32,
    max_iterations: u32,
}

impl<K: Hash + Eq + Copy> RecursionGuard<K> {
    pub fn new(max_depth: u32, max_iterations: u32) -> Self {
        Self {
            visiting: FxHashSet::default(),
            depth: 0,
            iterations: 0,
            max_depth,
            max_iterations,
        }
    }

    pub fn with_profile(profile: RecursionProfile) -> Self {
        Self::new(profile.max_depth(), profile.max_iterations())
    }

    pub fn enter(&mut self, key: K) -> RecursionResult {
        self.iterations = self.iterations.saturating_add(1);

        if self.iterations > self.max_iterations {
            return RecursionResult::IterationExceeded;
        }
        if self.depth >= self.max_depth {
            return RecursionResult::DepthExceeded;
        }
        if !self.visiting.insert(key) {
            return RecursionResult::Cycle;
        }
        self.depth += 1;
        RecursionResult::Entered
    }

    pub fn leave(&mut self, key: K) {
        let was_present = self.visiting.remove(&key);
        debug_assert!(
            was_present,
            "RecursionGuard::leave() called for a key that was never entered"
        );
        self.depth = self.depth.saturating_sub(1);
    }

    #[inline]
    pub fn depth(&self) -> u32 {
        self.depth
    }
}

#[cfg(debug_assertions)]
impl<K: Hash + Eq + Copy> Drop for RecursionGuard<K> {
    fn drop(&mut self) {
        if !std::thread::panicking() && !self.visiting.is_empty() {
            panic!(
                "RecursionGuard dropped with {} keys still entered",
                self.visiting.len(),
            );
        }
    }
}

#[cfg(test)]
#[path = "tests/recursion_tests.rs"]
mod tests;
