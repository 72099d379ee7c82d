//! Predicate expression trees.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A scalar constant in a predicate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Uuid(Uuid),
    Timestamp(DateTime<Utc>),
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Value::Uuid(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Timestamp(value)
    }
}

impl<V: Into<Value>> From<Option<V>> for Value {
    fn from(value: Option<V>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

/// Comparison operators over scalar values.
///
/// `Contains`/`StartsWith`/`EndsWith` apply to text operands only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Contains,
    StartsWith,
    EndsWith,
}

/// A boolean expression over a single free variable.
///
/// `Var` references the predicate's bound variable by name; `Field` is member
/// access on another expression, so chains model nested access
/// (`x.contact.email`). The tree is plain data — serializable, cloneable, and
/// walkable — which is what makes structural combination possible.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Reference to a bound variable.
    Var(String),
    /// Scalar constant.
    Literal(Value),
    /// Member access: `object.name`.
    Field { object: Box<Expr>, name: String },
    /// Binary comparison.
    Compare {
        op: CompareOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Not(Box<Expr>),
}

// Builder methods shadow operator-trait names (eq, not, ...) on purpose: they
// build tree nodes rather than evaluate anything.
#[allow(clippy::should_implement_trait)]
impl Expr {
    fn compare(op: CompareOp, left: Expr, right: Expr) -> Expr {
        Expr::Compare {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Member access on this expression.
    pub fn field(self, name: impl Into<String>) -> Expr {
        Expr::Field {
            object: Box::new(self),
            name: name.into(),
        }
    }

    pub fn eq(self, other: Expr) -> Expr {
        Expr::compare(CompareOp::Eq, self, other)
    }

    pub fn ne(self, other: Expr) -> Expr {
        Expr::compare(CompareOp::Ne, self, other)
    }

    pub fn lt(self, other: Expr) -> Expr {
        Expr::compare(CompareOp::Lt, self, other)
    }

    pub fn le(self, other: Expr) -> Expr {
        Expr::compare(CompareOp::Le, self, other)
    }

    pub fn gt(self, other: Expr) -> Expr {
        Expr::compare(CompareOp::Gt, self, other)
    }

    pub fn ge(self, other: Expr) -> Expr {
        Expr::compare(CompareOp::Ge, self, other)
    }

    pub fn contains(self, other: Expr) -> Expr {
        Expr::compare(CompareOp::Contains, self, other)
    }

    pub fn starts_with(self, other: Expr) -> Expr {
        Expr::compare(CompareOp::StartsWith, self, other)
    }

    pub fn ends_with(self, other: Expr) -> Expr {
        Expr::compare(CompareOp::EndsWith, self, other)
    }

    pub fn and(self, other: Expr) -> Expr {
        Expr::And(Box::new(self), Box::new(other))
    }

    pub fn or(self, other: Expr) -> Expr {
        Expr::Or(Box::new(self), Box::new(other))
    }

    pub fn not(self) -> Expr {
        Expr::Not(Box::new(self))
    }
}

/// A dotted property path (`"contact.email"`), used for ordering, grouping,
/// and eager-load hints.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyPath(Vec<String>);

impl PropertyPath {
    pub fn new<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(segments.into_iter().map(Into::into).collect())
    }

    /// Parse a dotted path; empty segments are dropped.
    pub fn parse(path: &str) -> Self {
        Self(
            path.split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl From<&str> for PropertyPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl core::fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0.join("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_methods_produce_the_expected_nodes() {
        let expr = Expr::Var("x".to_string()).field("balance").gt(Expr::Literal(Value::Int(10)));
        match expr {
            Expr::Compare {
                op: CompareOp::Gt,
                left,
                right,
            } => {
                assert!(matches!(*left, Expr::Field { .. }));
                assert_eq!(*right, Expr::Literal(Value::Int(10)));
            }
            other => panic!("expected comparison, got {other:?}"),
        }
    }

    #[test]
    fn value_conversions_cover_the_scalar_set() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(3i32), Value::Int(3));
        assert_eq!(Value::from("abc"), Value::Text("abc".to_string()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some(5i64)), Value::Int(5));
    }

    #[test]
    fn property_path_parses_dotted_strings() {
        let path = PropertyPath::parse("contact.email");
        assert_eq!(path.segments(), ["contact", "email"]);
        assert_eq!(path.to_string(), "contact.email");
        assert_eq!(PropertyPath::from("a..b").segments(), ["a", "b"]);
    }
}
