//! Explains why a type checker rejected an expression.
//!
//! The checker says *that* a value does not fit; this crate works out
//! *which part* of it does not fit and why:
//!
//! 1. **Locate** ([`locator`]): walk up from the flagged node to the
//!    statement, call, or property write the conflict belongs to.
//! 2. **Extract** (`extract`): split that root into target/source pairs.
//!    Array literals are matched element by element, function initializers
//!    by their returns, calls argument by argument.
//! 3. **Compare** ([`compare`]): recursively diff the pair through arrays,
//!    unions and object shapes, stopping at the shallowest explanation.
//!    Synthesized sides come from [`placeholder`].
//! 4. **Classify** ([`classify`]): map the diff onto an [`ErrorType`].
//!
//! Everything emitted is plain serializable data in a [`HoundReport`].

pub mod classify;
pub mod compare;
pub mod context;
mod engine;
pub mod error;
mod extract;
pub mod host;
pub mod info;
pub mod locator;
pub mod options;
pub mod placeholder;
pub mod problem;

pub use classify::classify;
pub use compare::{CompareMode, Comparator, Conflict, select_best};
pub use context::{ConflictSite, DiagnosticContext, RunContext};
pub use engine::{Hound, HostDiagnostic, resolve};
pub use error::{HoundError, Result};
pub use host::{CheckerHost, ProgramSnapshot};
pub use locator::locate_root;
pub use options::{DEFAULT_IGNORED_CODES, HoundOptions};
pub use problem::{
    CallDetails, CallingPair, ComparisonLayer, Diff, ErrorType, HoundReport, LayerSource, NodeInfo,
    Placeholder, PlaceholderTarget, Problem, ReversedShape, ShapeProblem, Stack, TypeFacts,
    TypeProblem, Unsupported, UnsupportedReason,
};

#[cfg(test)]
#[path = "tests/stack_tests.rs"]
mod stack_tests;

#[cfg(test)]
#[path = "tests/options_tests.rs"]
mod options_tests;
