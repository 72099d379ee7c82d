//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// This is the channel for programmer-contract and invariant violations:
/// callers propagate these with `?` until an outer boundary translates them.
/// Expected business outcomes that calling code branches on use
/// [`crate::Outcome`] instead. Infrastructure concerns belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (e.g. malformed input).
    #[error("validation failed: {0}")]
    Validation(String),

    /// A domain invariant was violated.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// A specific entity was not found.
    #[error("{entity} with identifier '{id}' was not found")]
    EntityNotFound {
        /// Entity type name.
        entity: &'static str,
        /// Rendered identifier.
        id: String,
    },

    /// The entity is in the wrong state for the requested operation.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// A named business rule did not hold.
    #[error("business rule '{rule}' violated: {message}")]
    BusinessRuleViolation {
        /// Name of the violated rule.
        rule: String,
        /// Message explaining the violation.
        message: String,
    },

    /// A conflict occurred (e.g. duplicate identity, stale state).
    #[error("conflict: {0}")]
    Conflict(String),

    /// Authorization failure at the domain boundary.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invariant(msg: impl Into<String>) -> Self {
        Self::InvariantViolation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_state(msg: impl Into<String>) -> Self {
        Self::InvalidState(msg.into())
    }

    pub fn entity_not_found(entity: &'static str, id: impl core::fmt::Display) -> Self {
        Self::EntityNotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn business_rule(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::BusinessRuleViolation {
            rule: rule.into(),
            message: message.into(),
        }
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_not_found_renders_type_and_id() {
        let err = DomainError::entity_not_found("Invoice", 42);
        assert_eq!(err.to_string(), "Invoice with identifier '42' was not found");
    }

    #[test]
    fn business_rule_violation_carries_rule_name() {
        let err = DomainError::business_rule("CreditLimit", "limit exceeded");
        assert_eq!(
            err.to_string(),
            "business rule 'CreditLimit' violated: limit exceeded"
        );
    }
}
