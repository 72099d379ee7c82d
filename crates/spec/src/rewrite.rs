//! Expression rewriting: the substitution step behind predicate composition.

use crate::expr::{Expr, Value};

/// Rewrites an expression tree bottom-up.
///
/// The default [`ExprRewriter::rewrite`] walks every node and reassembles the
/// tree, delegating leaves to the `rewrite_var` / `rewrite_literal` hooks.
/// Implementations override only the hooks they care about.
pub trait ExprRewriter {
    fn rewrite_var(&mut self, name: &str) -> Expr {
        Expr::Var(name.to_string())
    }

    fn rewrite_literal(&mut self, value: &Value) -> Expr {
        Expr::Literal(value.clone())
    }

    /// Full recursive walk. Every bound-variable reference in the tree goes
    /// through `rewrite_var`, including those buried under nested member
    /// access — rewriting only the root would miss them.
    fn rewrite(&mut self, expr: &Expr) -> Expr {
        match expr {
            Expr::Var(name) => self.rewrite_var(name),
            Expr::Literal(value) => self.rewrite_literal(value),
            Expr::Field { object, name } => Expr::Field {
                object: Box::new(self.rewrite(object)),
                name: name.clone(),
            },
            Expr::Compare { op, left, right } => Expr::Compare {
                op: *op,
                left: Box::new(self.rewrite(left)),
                right: Box::new(self.rewrite(right)),
            },
            Expr::And(left, right) => {
                Expr::And(Box::new(self.rewrite(left)), Box::new(self.rewrite(right)))
            }
            Expr::Or(left, right) => {
                Expr::Or(Box::new(self.rewrite(left)), Box::new(self.rewrite(right)))
            }
            Expr::Not(inner) => Expr::Not(Box::new(self.rewrite(inner))),
        }
    }
}

/// Replaces every reference to one bound variable with another.
pub struct ParameterReplacer<'a> {
    old: &'a str,
    new: &'a str,
}

impl<'a> ParameterReplacer<'a> {
    pub fn new(old: &'a str, new: &'a str) -> Self {
        Self { old, new }
    }
}

impl ExprRewriter for ParameterReplacer<'_> {
    fn rewrite_var(&mut self, name: &str) -> Expr {
        if name == self.old {
            Expr::Var(self.new.to_string())
        } else {
            Expr::Var(name.to_string())
        }
    }
}

/// Substitute `old` with `new` throughout `expr`.
pub fn replace_parameter(expr: &Expr, old: &str, new: &str) -> Expr {
    ParameterReplacer::new(old, new).rewrite(expr)
}
