//! `groundwork-spec` — composable query specifications.
//!
//! A specification describes filtering, ordering, and paging over a domain
//! type without committing to any query engine. Predicates are self-owned
//! expression trees rather than closures, so they can be combined
//! structurally (AND/OR/NOT), serialized, and walked by whatever
//! query-translation layer the host application uses.

pub mod error;
pub mod eval;
pub mod expr;
pub mod predicate;
pub mod rewrite;
pub mod specification;

pub use error::SpecError;
pub use eval::PropertyAccess;
pub use expr::{CompareOp, Expr, PropertyPath, Value};
pub use predicate::{Predicate, lit, prop};
pub use rewrite::{ExprRewriter, ParameterReplacer, replace_parameter};
pub use specification::Specification;
