//! hound: explains why a type checker rejected an expression.
//!
//! The checker reports *that* a value is not assignable; hound walks the two
//! types involved and reports *which part* of the value is wrong, as plain
//! [`Problem`] records a renderer or fix engine can consume.
//!
//! ```ignore
//! use hound::{HostDiagnostic, resolve};
//!
//! let options = hound::config::load_options(Path::new("hound.json"))?;
//! let report = resolve(&program, &options, &[HostDiagnostic::new(2322, file, node)])?;
//! for problem in &report.problems {
//!     println!("{}: {}", problem.code, problem.classification);
//! }
//! ```
//!
//! The resolver lives in `hound-checker`; the syntax and type models it reads
//! from the host are `hound-ast` and `hound-types`. This crate re-exports all
//! three and adds the pieces an embedding tool needs around them: options
//! files ([`config`]) and log output ([`tracing_config`]).

pub mod config;
pub mod tracing_config;

pub use hound_ast as ast;
pub use hound_checker as checker;
pub use hound_types as types;

pub use hound_checker::{
    CallDetails, CallingPair, CheckerHost, ComparisonLayer, Diff, ErrorType, HostDiagnostic, Hound,
    HoundError, HoundOptions, HoundReport, LayerSource, NodeInfo, Placeholder, PlaceholderTarget,
    Problem, ProgramSnapshot, ShapeProblem, Stack, TypeProblem, Unsupported, UnsupportedReason,
    resolve,
};

#[cfg(test)]
#[path = "tests/tracing_config_tests.rs"]
mod tracing_config_tests;
