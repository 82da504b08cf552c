//! Default assertion failure.

use ensure_value::Value;
use thiserror::Error;

/// Failure raised by an [`Ensure`](crate::Ensure) built without a custom
/// error policy.
///
/// Carries the composed message and the offending value exactly as it was
/// passed in. `data` is `None` when the value was absent, `Some(Value::Null)`
/// when it was an explicit null.
///
/// # Examples
///
/// ```rust
/// use ensure::{Assertions, Ensure, Value};
///
/// let err = Ensure::new().integer(Value::Float(42.5)).unwrap_err();
/// assert_eq!(err.message(), "Expected data to be \"integer\".");
/// assert_eq!(err.data(), Some(&Value::Float(42.5)));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{message}")]
pub struct EnsureError {
    message: String,
    data: Option<Value>,
}

impl EnsureError {
    /// Creates a new error from a message and the offending value.
    pub fn new(message: impl Into<String>, data: Option<Value>) -> Self {
        Self {
            message: message.into(),
            data,
        }
    }

    /// The human-readable message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The offending value; `None` if it was absent.
    #[must_use]
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// True if the assertion failed because the value was absent.
    #[must_use]
    pub fn is_absent(&self) -> bool {
        self.data.is_none()
    }

    /// Takes the offending value back out of the error.
    #[must_use]
    pub fn into_data(self) -> Option<Value> {
        self.data
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_message() {
        let err = EnsureError::new("Expected data to be \"string\".", Some(Value::Integer(1)));
        assert_eq!(err.to_string(), "Expected data to be \"string\".");
        assert!(!err.is_absent());
    }

    #[test]
    fn test_absent_data() {
        let err = EnsureError::new("Expected data to be defined.", None);
        assert!(err.is_absent());
        assert_eq!(err.into_data(), None);
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> =
            Box::new(EnsureError::new("boom", Some(Value::Null)));
        assert_eq!(err.to_string(), "boom");
    }
}
