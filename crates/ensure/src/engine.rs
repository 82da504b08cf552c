//! Validator set construction.
//!
//! An [`Ensure`] captures one error policy and shares it with every
//! assertion it runs. Construction is cheap and pure; cloning shares the
//! policy.
//!
//! ```rust
//! use ensure::{Assertions, Ensure, Value};
//!
//! #[derive(Debug)]
//! struct BadPayload(String);
//!
//! let ensure = Ensure::with_policy(|message, _data| BadPayload(message));
//! let err = ensure.boolean(Value::text("x")).unwrap_err();
//! assert_eq!(err.0, "Expected data to be \"boolean\".");
//! ```

use std::fmt;
use std::sync::Arc;

use ensure_value::Value;

use crate::assertions::Assertions;
use crate::error::EnsureError;
use crate::kind::Expectation;

/// Error policy: turns a failure message and the offending value into an
/// error. Invoked at most once per failed assertion; its result is returned
/// to the caller as `Err`.
pub type ErrorPolicy<E> = Arc<dyn Fn(String, Option<Value>) -> E + Send + Sync>;

fn default_policy(message: String, data: Option<Value>) -> EnsureError {
    EnsureError::new(message, data)
}

fn raise<E>(
    policy: &ErrorPolicy<E>,
    prefix: Option<&str>,
    expected: Expectation,
    data: Option<Value>,
) -> E {
    tracing::trace!(
        target: "ensure",
        expected = %expected.label(),
        found = data.as_ref().map_or("absent", |v| v.kind().name()),
        "assertion failed"
    );

    let message = match prefix {
        Some(prefix) => format!("{prefix} {expected}"),
        None => expected.to_string(),
    };
    policy(message, data)
}

// ============================================================================
// ENSURE
// ============================================================================

/// A validator set bound to one error policy.
///
/// # Examples
///
/// ```rust
/// use ensure::{Assertions, Ensure, Value};
///
/// let ensure = Ensure::new();
/// assert_eq!(ensure.string(Value::text("ok")).unwrap(), "ok");
/// assert_eq!(ensure.nullable_string(Value::Null).unwrap(), None);
/// assert!(ensure.nullable_string(None).is_err());
/// ```
pub struct Ensure<E = EnsureError> {
    policy: ErrorPolicy<E>,
}

impl Ensure<EnsureError> {
    /// Validator set raising [`EnsureError`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: Arc::new(default_policy),
        }
    }

    /// Starts a builder with the default policy.
    #[must_use]
    pub fn builder() -> EnsureBuilder<EnsureError> {
        EnsureBuilder::new()
    }
}

impl Default for Ensure<EnsureError> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Ensure<E> {
    /// Validator set raising whatever `policy` returns.
    pub fn with_policy<F>(policy: F) -> Self
    where
        F: Fn(String, Option<Value>) -> E + Send + Sync + 'static,
    {
        Self {
            policy: Arc::new(policy),
        }
    }

    /// A view whose failures prefix `message` to the default message.
    ///
    /// ```rust
    /// use ensure::{Assertions, Ensure, Value};
    ///
    /// let ensure = Ensure::new();
    /// let err = ensure.with_message("user.age").integer(Value::text("9")).unwrap_err();
    /// assert_eq!(err.message(), "user.age Expected data to be \"integer\".");
    /// ```
    #[must_use]
    pub fn with_message<'a>(&'a self, message: &'a str) -> WithMessage<'a, E> {
        WithMessage {
            policy: &self.policy,
            message,
        }
    }
}

impl<E> Assertions for Ensure<E> {
    type Error = E;

    fn raise(&self, expected: Expectation, data: Option<Value>) -> E {
        raise(&self.policy, None, expected, data)
    }
}

impl<E> Clone for Ensure<E> {
    fn clone(&self) -> Self {
        Self {
            policy: Arc::clone(&self.policy),
        }
    }
}

impl<E> fmt::Debug for Ensure<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ensure").finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(Ensure: Send, Sync, Clone);

// ============================================================================
// WITH MESSAGE
// ============================================================================

/// Borrowed view over an [`Ensure`] that prefixes a caller message to every
/// failure. Created by [`Ensure::with_message`].
pub struct WithMessage<'a, E> {
    policy: &'a ErrorPolicy<E>,
    message: &'a str,
}

impl<E> WithMessage<'_, E> {
    /// The caller message
    #[must_use]
    pub fn message(&self) -> &str {
        self.message
    }
}

impl<E> Assertions for WithMessage<'_, E> {
    type Error = E;

    fn raise(&self, expected: Expectation, data: Option<Value>) -> E {
        raise(self.policy, Some(self.message), expected, data)
    }
}

impl<E> fmt::Debug for WithMessage<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithMessage")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Builder for [`Ensure`].
///
/// ```rust
/// use ensure::{Assertions, Ensure, Value};
///
/// let ensure = Ensure::builder()
///     .policy(|message, _| format!("payload rejected: {message}"))
///     .build();
/// let err = ensure.defined(Value::Null).unwrap_err();
/// assert_eq!(err, "payload rejected: Expected data to be defined.");
/// ```
pub struct EnsureBuilder<E = EnsureError> {
    policy: ErrorPolicy<E>,
}

impl EnsureBuilder<EnsureError> {
    /// Builder with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            policy: Arc::new(default_policy),
        }
    }
}

impl Default for EnsureBuilder<EnsureError> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> EnsureBuilder<E> {
    /// Replaces the error policy.
    #[must_use = "builder methods must be chained or built"]
    pub fn policy<F, E2>(self, policy: F) -> EnsureBuilder<E2>
    where
        F: Fn(String, Option<Value>) -> E2 + Send + Sync + 'static,
    {
        EnsureBuilder {
            policy: Arc::new(policy),
        }
    }

    /// Finishes the validator set.
    #[must_use]
    pub fn build(self) -> Ensure<E> {
        Ensure {
            policy: self.policy,
        }
    }
}

impl<E> fmt::Debug for EnsureBuilder<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnsureBuilder").finish_non_exhaustive()
    }
}
