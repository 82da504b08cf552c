//! Errors raised while building values from text.

use thiserror::Error;

/// Failure to build a value-model type from its textual form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValueError {
    /// A sign marker other than `+` or `-`.
    #[error("invalid sign '{0}', expected '+' or '-'")]
    InvalidSign(String),

    /// Text that is not a plain decimal literal.
    #[error("invalid decimal literal '{0}'")]
    InvalidDecimal(String),
}
