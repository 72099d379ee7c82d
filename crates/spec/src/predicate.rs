//! Predicates: boolean expressions over a single bound variable.

use serde::{Deserialize, Serialize};

use crate::expr::{Expr, Value};
use crate::rewrite::replace_parameter;

/// Bound-variable name introduced by the builder and by combinators.
pub(crate) const BOUND_VAR: &str = "x";

/// A reusable boolean predicate over one free variable of the target type.
///
/// The predicate owns its expression tree, so combining two predicates is a
/// structural operation: both operands are rebound to a shared fresh variable
/// and joined under a logical connective.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Predicate {
    parameter: String,
    body: Expr,
}

impl Predicate {
    pub fn new(parameter: impl Into<String>, body: Expr) -> Self {
        Self {
            parameter: parameter.into(),
            body,
        }
    }

    /// Predicate over the default bound variable, as produced by [`prop`].
    pub fn from_body(body: Expr) -> Self {
        Self::new(BOUND_VAR, body)
    }

    pub fn parameter(&self) -> &str {
        &self.parameter
    }

    pub fn body(&self) -> &Expr {
        &self.body
    }

    /// Conjunction. Each operand's own bound variable is substituted with the
    /// fresh shared variable throughout its tree before the two are joined
    /// with AND.
    pub fn and(&self, other: &Predicate) -> Predicate {
        let left = replace_parameter(&self.body, &self.parameter, BOUND_VAR);
        let right = replace_parameter(&other.body, &other.parameter, BOUND_VAR);
        Predicate::new(BOUND_VAR, Expr::And(Box::new(left), Box::new(right)))
    }

    /// Disjunction, with the same substitution discipline as [`Predicate::and`].
    pub fn or(&self, other: &Predicate) -> Predicate {
        let left = replace_parameter(&self.body, &self.parameter, BOUND_VAR);
        let right = replace_parameter(&other.body, &other.parameter, BOUND_VAR);
        Predicate::new(BOUND_VAR, Expr::Or(Box::new(left), Box::new(right)))
    }

    /// Negation, with the same substitution discipline.
    pub fn negate(&self) -> Predicate {
        let inner = replace_parameter(&self.body, &self.parameter, BOUND_VAR);
        Predicate::new(BOUND_VAR, Expr::Not(Box::new(inner)))
    }
}

/// Member access on the bound variable; dots express nested paths
/// (`prop("contact.email")`).
pub fn prop(path: &str) -> Expr {
    path.split('.')
        .filter(|s| !s.is_empty())
        .fold(Expr::Var(BOUND_VAR.to_string()), |object, name| Expr::Field {
            object: Box::new(object),
            name: name.to_string(),
        })
}

/// A literal operand.
pub fn lit(value: impl Into<Value>) -> Expr {
    Expr::Literal(value.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars_of(expr: &Expr) -> Vec<String> {
        fn walk(expr: &Expr, out: &mut Vec<String>) {
            match expr {
                Expr::Var(name) => out.push(name.clone()),
                Expr::Literal(_) => {}
                Expr::Field { object, .. } => walk(object, out),
                Expr::Compare { left, right, .. } => {
                    walk(left, out);
                    walk(right, out);
                }
                Expr::And(left, right) | Expr::Or(left, right) => {
                    walk(left, out);
                    walk(right, out);
                }
                Expr::Not(inner) => walk(inner, out),
            }
        }
        let mut out = Vec::new();
        walk(expr, &mut out);
        out
    }

    #[test]
    fn prop_builds_a_nested_field_chain() {
        let expr = prop("contact.email");
        match &expr {
            Expr::Field { object, name } => {
                assert_eq!(name, "email");
                assert!(matches!(**object, Expr::Field { .. }));
            }
            other => panic!("expected field chain, got {other:?}"),
        }
        assert_eq!(vars_of(&expr), vec![BOUND_VAR.to_string()]);
    }

    #[test]
    fn and_rebinds_both_operands_to_one_variable() {
        let left = Predicate::new("a", Expr::Var("a".to_string()).field("active").eq(lit(true)));
        let right = Predicate::new("b", Expr::Var("b".to_string()).field("balance").gt(lit(10)));

        let combined = left.and(&right);
        assert_eq!(combined.parameter(), BOUND_VAR);
        assert!(matches!(combined.body(), Expr::And(_, _)));

        let vars = vars_of(combined.body());
        assert_eq!(vars.len(), 2);
        assert!(vars.iter().all(|v| v == BOUND_VAR));
    }

    #[test]
    fn or_and_negate_share_the_substitution_discipline() {
        let left = Predicate::from_body(prop("active").eq(lit(true)));
        let right = Predicate::new("q", Expr::Var("q".to_string()).field("name").eq(lit("x")));

        let either = left.or(&right);
        assert!(matches!(either.body(), Expr::Or(_, _)));
        assert!(vars_of(either.body()).iter().all(|v| v == BOUND_VAR));

        let negated = right.negate();
        assert!(matches!(negated.body(), Expr::Not(_)));
        assert!(vars_of(negated.body()).iter().all(|v| v == BOUND_VAR));
    }
}
