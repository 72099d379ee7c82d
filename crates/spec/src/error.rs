//! Errors surfaced by in-memory specification evaluation.

use thiserror::Error;

/// Why a predicate or specification could not be evaluated in memory.
///
/// These are programmer errors in the shape of a predicate (unknown
/// properties, mismatched operand types), not business outcomes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SpecError {
    /// The expression references a variable other than the predicate's own.
    #[error("unbound variable: {0}")]
    UnboundVariable(String),

    /// A field path could not be resolved on the target type.
    #[error("unknown property: {0}")]
    UnknownProperty(String),

    /// Operands of an operation had incompatible types.
    #[error("type mismatch: cannot apply {op} to {left} and {right}")]
    TypeMismatch {
        op: String,
        left: &'static str,
        right: &'static str,
    },

    /// The expression shape is not evaluatable (e.g. member access on a
    /// non-variable expression).
    #[error("unsupported expression: {0}")]
    Unsupported(String),

    /// A non-boolean expression appeared where a boolean was required.
    #[error("expected a boolean expression, found {0}")]
    NotBoolean(&'static str),

    /// Negative skip/take reached the in-memory applier.
    #[error("invalid paging: {0}")]
    InvalidPaging(String),
}
