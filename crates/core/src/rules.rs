//! Business rules: named invariants checked before state changes.

use tracing::warn;

use crate::error::{DomainError, DomainResult};

/// A named business rule over some captured state.
///
/// Rules capture whatever they need at construction and answer
/// [`BusinessRule::is_satisfied`] without side effects.
pub trait BusinessRule {
    /// Name of the rule, surfaced on violation.
    fn name(&self) -> &str;

    /// Message explaining the violation.
    fn message(&self) -> &str;

    /// Whether the rule holds.
    fn is_satisfied(&self) -> bool;
}

/// Check one rule; a violation becomes
/// [`DomainError::BusinessRuleViolation`].
pub fn check_rule(rule: &dyn BusinessRule) -> DomainResult<()> {
    if rule.is_satisfied() {
        Ok(())
    } else {
        warn!(rule = rule.name(), "business rule violated");
        Err(DomainError::business_rule(rule.name(), rule.message()))
    }
}

/// Check rules in order; the first violation wins.
pub fn check_rules(rules: &[&dyn BusinessRule]) -> DomainResult<()> {
    for rule in rules {
        check_rule(*rule)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CreditWithinLimit {
        balance: i64,
        limit: i64,
    }

    impl BusinessRule for CreditWithinLimit {
        fn name(&self) -> &str {
            "CreditWithinLimit"
        }

        fn message(&self) -> &str {
            "balance would exceed the credit limit"
        }

        fn is_satisfied(&self) -> bool {
            self.balance <= self.limit
        }
    }

    #[test]
    fn satisfied_rule_passes() {
        let rule = CreditWithinLimit {
            balance: 50,
            limit: 100,
        };
        assert!(check_rule(&rule).is_ok());
    }

    #[test]
    fn violated_rule_surfaces_name_and_message() {
        let rule = CreditWithinLimit {
            balance: 150,
            limit: 100,
        };
        let err = check_rule(&rule).unwrap_err();
        assert_eq!(
            err,
            DomainError::business_rule(
                "CreditWithinLimit",
                "balance would exceed the credit limit"
            )
        );
    }

    struct NameNotBlank<'a> {
        name: &'a str,
    }

    impl BusinessRule for NameNotBlank<'_> {
        fn name(&self) -> &str {
            "NameNotBlank"
        }

        fn message(&self) -> &str {
            "name cannot be blank"
        }

        fn is_satisfied(&self) -> bool {
            !self.name.trim().is_empty()
        }
    }

    #[test]
    fn first_violation_wins() {
        let ok = CreditWithinLimit {
            balance: 1,
            limit: 100,
        };
        let blank = NameNotBlank { name: " " };
        let over = CreditWithinLimit {
            balance: 200,
            limit: 100,
        };

        let err = check_rules(&[&ok, &blank, &over]).unwrap_err();
        match err {
            DomainError::BusinessRuleViolation { rule, .. } => {
                assert_eq!(rule, "NameNotBlank");
            }
            other => panic!("expected BusinessRuleViolation, got {other:?}"),
        }

        assert!(check_rules(&[&ok]).is_ok());
    }
}
