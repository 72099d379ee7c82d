//! Success/failure outcome carrier for expected business results.
//!
//! [`Outcome`] is the channel for results that calling code is expected to
//! branch on (validation outcomes, not-found-as-business-outcome).
//! Programmer-contract violations go through [`crate::DomainError`] or panic
//! at the call site instead.

use core::fmt;

/// A business error: a stable code plus a human-readable message.
///
/// [`Error::none`] is the canonical "no error" sentinel (both fields empty).
/// Two errors are equal iff code and message match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    code: String,
    message: String,
}

impl Error {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The "no error" sentinel.
    pub fn none() -> Self {
        Self {
            code: String::new(),
            message: String::new(),
        }
    }

    pub fn is_none(&self) -> bool {
        self.code.is_empty() && self.message.is_empty()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

/// The result of a domain operation: success (optionally carrying a value) or
/// failure carrying an [`Error`].
///
/// A success structurally cannot carry an error. A failure always carries a
/// non-blank message — constructing one without is a programming error and
/// panics. `Outcome<()>` plays the role of the value-less outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T = ()> {
    Success(T),
    Failure(Error),
}

impl Outcome<()> {
    /// A successful outcome with no value.
    pub fn ok() -> Self {
        Outcome::Success(())
    }

    /// Attach a value to a value-less outcome, preserving failures.
    pub fn with_value<T>(self, value: T) -> Outcome<T> {
        match self {
            Outcome::Success(()) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }
}

impl<T> Outcome<T> {
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// A failed outcome.
    ///
    /// # Panics
    ///
    /// Panics when the error message is blank: a failure must explain itself.
    pub fn failure(error: Error) -> Self {
        assert!(
            !error.message.trim().is_empty(),
            "a failed outcome must carry a non-empty error message"
        );
        Outcome::Failure(error)
    }

    /// Shorthand for `failure(Error::new(code, message))`.
    ///
    /// # Panics
    ///
    /// Panics when `message` is blank.
    pub fn fail(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::failure(Error::new(code, message))
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// The success value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure. A failed outcome has no value and
    /// must never produce one silently; branch on [`Outcome::is_success`] or
    /// use [`Outcome::try_value`] first.
    pub fn value(&self) -> &T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("cannot access the value of a failed outcome ({error})")
            }
        }
    }

    /// Consume the outcome and return the success value.
    ///
    /// # Panics
    ///
    /// Panics when called on a failure.
    pub fn into_value(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("cannot access the value of a failed outcome ({error})")
            }
        }
    }

    pub fn try_value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&Error> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Transform the success value; failures pass through untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Chain an outcome-returning operation; failures pass through untouched.
    pub fn bind<U>(self, f: impl FnOnce(T) -> Outcome<U>) -> Outcome<U> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Collapse into a single value by handling both branches.
    pub fn match_with<U>(
        self,
        on_success: impl FnOnce(T) -> U,
        on_failure: impl FnOnce(Error) -> U,
    ) -> U {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Run a side effect on the success value, passing the outcome through.
    pub fn on_success(self, f: impl FnOnce(&T)) -> Self {
        if let Outcome::Success(value) = &self {
            f(value);
        }
        self
    }

    /// Run a side effect on the error, passing the outcome through.
    pub fn on_failure(self, f: impl FnOnce(&Error)) -> Self {
        if let Outcome::Failure(error) = &self {
            f(error);
        }
        self
    }
}

impl<T> From<T> for Outcome<T> {
    fn from(value: T) -> Self {
        Outcome::Success(value)
    }
}
