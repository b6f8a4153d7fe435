//! Structural type model for hound.
//!
//! - **Interning**: every type is a [`TypeId`] into a [`TypeInterner`], so
//!   equality is an integer compare and ids are stable for a whole run.
//! - **Queries**: free functions in [`type_queries`] and the [`TypeShape`]
//!   view answer what the resolver needs to know about a type.
//! - **Formatting**: [`TypeFormatter`] prints types the way the checker does;
//!   rendered text doubles as the identity check between two types.
//! - **Cycle detection**: [`RecursionGuard`] bounds recursive walks.

mod db;
mod flags;
mod format;
mod intern;
pub mod recursion;
mod shape;
pub mod type_queries;
pub mod types;

pub use db::TypeDatabase;
pub use flags::{TypeFlags, type_flags};
pub use format::{TypeFormatter, type_to_string, type_to_string_like};
pub use intern::TypeInterner;
pub use recursion::{RecursionGuard, RecursionProfile, RecursionResult};
pub use shape::{TypeShape, classify_type};
pub use types::{
    DeclRef, FunctionShape, IndexSignature, IntrinsicKind, LiteralValue, ObjectShape, ParamInfo,
    PropertyInfo, TypeData, TypeId,
};

#[cfg(test)]
#[path = "tests/intern_tests.rs"]
mod intern_tests;

#[cfg(test)]
#[path = "tests/type_queries_tests.rs"]
mod type_queries_tests;

#[cfg(test)]
#[path = "tests/format_tests.rs"]
mod format_tests;
