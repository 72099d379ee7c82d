//! In-memory predicate evaluation.

use core::cmp::Ordering;

use crate::error::SpecError;
use crate::expr::{CompareOp, Expr, Value};
use crate::predicate::Predicate;

/// Resolves dotted property paths to scalar values.
///
/// Implemented by types that want in-memory evaluation (tests, in-memory
/// repositories). A storage-backed repository translates the same expression
/// tree into its own query language instead and never needs this.
pub trait PropertyAccess {
    /// The value at `path` (segments of a dotted path), or `None` when the
    /// path does not exist on this type. Absent *data* (as opposed to an
    /// absent *property*) is `Some(Value::Null)`.
    fn property(&self, path: &[&str]) -> Option<Value>;
}

impl Predicate {
    /// Evaluate this predicate against one item.
    pub fn evaluate<T: PropertyAccess>(&self, item: &T) -> Result<bool, SpecError> {
        match eval_expr(self.body(), self.parameter(), item)? {
            Value::Bool(b) => Ok(b),
            other => Err(SpecError::NotBoolean(value_kind(&other))),
        }
    }
}

pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Int(_) => "int",
        Value::Float(_) => "float",
        Value::Text(_) => "text",
        Value::Uuid(_) => "uuid",
        Value::Timestamp(_) => "timestamp",
    }
}

/// Equality across the scalar set. `Null == Null` holds; `Null` never equals
/// a present value. `None` means the kinds are not comparable at all.
pub(crate) fn try_eq(left: &Value, right: &Value) -> Option<bool> {
    match (left, right) {
        (Value::Null, Value::Null) => Some(true),
        (Value::Null, _) | (_, Value::Null) => Some(false),
        (Value::Bool(l), Value::Bool(r)) => Some(l == r),
        (Value::Int(l), Value::Int(r)) => Some(l == r),
        (Value::Float(l), Value::Float(r)) => Some(l == r),
        (Value::Int(l), Value::Float(r)) | (Value::Float(r), Value::Int(l)) => {
            Some((*l as f64) == *r)
        }
        (Value::Text(l), Value::Text(r)) => Some(l == r),
        (Value::Uuid(l), Value::Uuid(r)) => Some(l == r),
        (Value::Timestamp(l), Value::Timestamp(r)) => Some(l == r),
        _ => None,
    }
}

/// Ordering across the scalar set. `None` for unorderable pairs (including
/// anything against `Null`, and NaN floats).
pub(crate) fn try_order(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Bool(l), Value::Bool(r)) => Some(l.cmp(r)),
        (Value::Int(l), Value::Int(r)) => Some(l.cmp(r)),
        (Value::Float(l), Value::Float(r)) => l.partial_cmp(r),
        (Value::Int(l), Value::Float(r)) => (*l as f64).partial_cmp(r),
        (Value::Float(l), Value::Int(r)) => l.partial_cmp(&(*r as f64)),
        (Value::Text(l), Value::Text(r)) => Some(l.cmp(r)),
        (Value::Uuid(l), Value::Uuid(r)) => Some(l.cmp(r)),
        (Value::Timestamp(l), Value::Timestamp(r)) => Some(l.cmp(r)),
        _ => None,
    }
}

fn mismatch(op: CompareOp, left: &Value, right: &Value) -> SpecError {
    SpecError::TypeMismatch {
        op: format!("{op:?}"),
        left: value_kind(left),
        right: value_kind(right),
    }
}

fn compare(op: CompareOp, left: &Value, right: &Value) -> Result<bool, SpecError> {
    match op {
        CompareOp::Eq => try_eq(left, right).ok_or_else(|| mismatch(op, left, right)),
        CompareOp::Ne => try_eq(left, right)
            .map(|b| !b)
            .ok_or_else(|| mismatch(op, left, right)),
        CompareOp::Lt => try_order(left, right)
            .map(Ordering::is_lt)
            .ok_or_else(|| mismatch(op, left, right)),
        CompareOp::Le => try_order(left, right)
            .map(Ordering::is_le)
            .ok_or_else(|| mismatch(op, left, right)),
        CompareOp::Gt => try_order(left, right)
            .map(Ordering::is_gt)
            .ok_or_else(|| mismatch(op, left, right)),
        CompareOp::Ge => try_order(left, right)
            .map(Ordering::is_ge)
            .ok_or_else(|| mismatch(op, left, right)),
        CompareOp::Contains => text_op(op, left, right, |l, r| l.contains(r)),
        CompareOp::StartsWith => text_op(op, left, right, |l, r| l.starts_with(r)),
        CompareOp::EndsWith => text_op(op, left, right, |l, r| l.ends_with(r)),
    }
}

fn text_op(
    op: CompareOp,
    left: &Value,
    right: &Value,
    f: impl Fn(&str, &str) -> bool,
) -> Result<bool, SpecError> {
    match (left, right) {
        (Value::Text(l), Value::Text(r)) => Ok(f(l, r)),
        _ => Err(mismatch(op, left, right)),
    }
}

/// Collect the member-access chain rooted at the bound variable.
fn field_path(expr: &Expr, parameter: &str) -> Result<Vec<String>, SpecError> {
    match expr {
        Expr::Var(name) if name == parameter => Ok(Vec::new()),
        Expr::Var(name) => Err(SpecError::UnboundVariable(name.clone())),
        Expr::Field { object, name } => {
            let mut path = field_path(object, parameter)?;
            path.push(name.clone());
            Ok(path)
        }
        other => Err(SpecError::Unsupported(format!(
            "member access on a non-variable expression: {other:?}"
        ))),
    }
}

fn eval_expr<T: PropertyAccess>(
    expr: &Expr,
    parameter: &str,
    item: &T,
) -> Result<Value, SpecError> {
    match expr {
        Expr::Literal(value) => Ok(value.clone()),
        Expr::Var(name) => Err(SpecError::Unsupported(format!(
            "bare variable '{name}' outside member access"
        ))),
        Expr::Field { .. } => {
            let path = field_path(expr, parameter)?;
            let segments: Vec<&str> = path.iter().map(String::as_str).collect();
            item.property(&segments)
                .ok_or_else(|| SpecError::UnknownProperty(path.join(".")))
        }
        Expr::Compare { op, left, right } => {
            let l = eval_expr(left, parameter, item)?;
            let r = eval_expr(right, parameter, item)?;
            compare(*op, &l, &r).map(Value::Bool)
        }
        Expr::And(left, right) => {
            if !eval_bool(left, parameter, item)? {
                return Ok(Value::Bool(false));
            }
            Ok(Value::Bool(eval_bool(right, parameter, item)?))
        }
        Expr::Or(left, right) => {
            if eval_bool(left, parameter, item)? {
                return Ok(Value::Bool(true));
            }
            Ok(Value::Bool(eval_bool(right, parameter, item)?))
        }
        Expr::Not(inner) => Ok(Value::Bool(!eval_bool(inner, parameter, item)?)),
    }
}

fn eval_bool<T: PropertyAccess>(
    expr: &Expr,
    parameter: &str,
    item: &T,
) -> Result<bool, SpecError> {
    match eval_expr(expr, parameter, item)? {
        Value::Bool(b) => Ok(b),
        other => Err(SpecError::NotBoolean(value_kind(&other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::predicate::{Predicate, lit, prop};

    #[derive(Debug, Clone)]
    struct Account {
        name: String,
        active: bool,
        balance: i64,
        email: Option<String>,
    }

    impl PropertyAccess for Account {
        fn property(&self, path: &[&str]) -> Option<Value> {
            match path {
                ["name"] => Some(Value::Text(self.name.clone())),
                ["active"] => Some(Value::Bool(self.active)),
                ["balance"] => Some(Value::Int(self.balance)),
                ["contact", "email"] => Some(Value::from(self.email.clone())),
                _ => None,
            }
        }
    }

    fn account(name: &str, active: bool, balance: i64) -> Account {
        Account {
            name: name.to_string(),
            active,
            balance,
            email: Some(format!("{name}@example.com")),
        }
    }

    #[test]
    fn comparisons_evaluate_against_properties() {
        let acct = account("ada", true, 120);

        let p = Predicate::from_body(prop("balance").gt(lit(100)));
        assert!(p.evaluate(&acct).unwrap());

        let p = Predicate::from_body(prop("balance").le(lit(100)));
        assert!(!p.evaluate(&acct).unwrap());

        let p = Predicate::from_body(prop("name").starts_with(lit("ad")));
        assert!(p.evaluate(&acct).unwrap());

        let p = Predicate::from_body(prop("name").contains(lit("zz")));
        assert!(!p.evaluate(&acct).unwrap());
    }

    #[test]
    fn nested_member_access_resolves_through_the_chain() {
        let acct = account("ada", true, 120);
        let p = Predicate::from_body(prop("contact.email").eq(lit("ada@example.com")));
        assert!(p.evaluate(&acct).unwrap());
    }

    #[test]
    fn null_equals_null_but_never_a_present_value() {
        let mut acct = account("ada", true, 120);
        acct.email = None;

        let is_unset = Predicate::from_body(prop("contact.email").eq(lit(None::<String>)));
        assert!(is_unset.evaluate(&acct).unwrap());

        let equals_text = Predicate::from_body(prop("contact.email").eq(lit("ada@example.com")));
        assert!(!equals_text.evaluate(&acct).unwrap());
    }

    #[test]
    fn logical_connectives_short_circuit() {
        let acct = account("ada", false, 120);

        // right side would be a type error, but the left side already decides
        let p = Predicate::from_body(
            prop("active")
                .eq(lit(true))
                .and(prop("name").gt(lit(5))),
        );
        assert!(!p.evaluate(&acct).unwrap());

        let p = Predicate::from_body(
            prop("balance")
                .gt(lit(100))
                .or(prop("name").gt(lit(5))),
        );
        assert!(p.evaluate(&acct).unwrap());
    }

    #[test]
    fn unknown_property_is_an_error() {
        let acct = account("ada", true, 120);
        let p = Predicate::from_body(prop("missing").eq(lit(1)));
        assert_eq!(
            p.evaluate(&acct),
            Err(SpecError::UnknownProperty("missing".to_string()))
        );
    }

    #[test]
    fn unbound_variable_is_an_error() {
        let acct = account("ada", true, 120);
        let p = Predicate::new("p", Expr::Var("q".to_string()).field("name").eq(lit("x")));
        assert_eq!(
            p.evaluate(&acct),
            Err(SpecError::UnboundVariable("q".to_string()))
        );
    }

    #[test]
    fn relational_on_mismatched_types_is_an_error() {
        let acct = account("ada", true, 120);
        let p = Predicate::from_body(prop("name").lt(lit(5)));
        assert!(matches!(
            p.evaluate(&acct),
            Err(SpecError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn non_boolean_root_is_an_error() {
        let acct = account("ada", true, 120);
        let p = Predicate::from_body(prop("balance"));
        assert_eq!(p.evaluate(&acct), Err(SpecError::NotBoolean("int")));
    }

    #[test]
    fn mixed_numeric_comparison_coerces() {
        let acct = account("ada", true, 120);
        let p = Predicate::from_body(prop("balance").gt(lit(99.5)));
        assert!(p.evaluate(&acct).unwrap());
    }
}
