//! Error taxonomies for path compilation and evaluation
//!
//! Parse failures and evaluation failures are disjoint: a
//! [`PathSyntaxError`] is always fatal to the compile call, while an
//! [`EvalError`] is raised only for the conditions spelled out in
//! [`types`] (most of them gated on the `error_when_no_match` flag).

pub mod types;

pub use types::{EvalError, PathSyntaxError};

/// Any failure from the one-shot select API, which compiles and evaluates
/// in a single call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The path expression does not parse.
    #[error(transparent)]
    Syntax(#[from] PathSyntaxError),
    /// A filter's contract could not be satisfied during evaluation.
    #[error(transparent)]
    Eval(#[from] EvalError),
}
