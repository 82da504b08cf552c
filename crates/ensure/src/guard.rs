//! Pure predicates for branching instead of asserting.
//!
//! Each guard is the same predicate the matching assertion uses, so
//! `is_integer(&v)` is true exactly when `ensure.integer(v)` succeeds.
//!
//! ```rust
//! use ensure::guard::{is_integer, is_defined};
//! use ensure::Value;
//!
//! assert!(is_integer(&Value::Float(3.0)));
//! assert!(!is_defined(Some(&Value::Null)));
//! ```

use ensure_value::Value;

use crate::kind::Kind;

macro_rules! guards {
    ($($(#[$meta:meta])* $name:ident => $kind:ident;)*) => {
        $(
            $(#[$meta])*
            #[inline]
            #[must_use]
            pub fn $name(value: &Value) -> bool {
                Kind::$kind.matches(value)
            }
        )*
    };
}

guards! {
    /// Ordered sequence
    is_array => Array;
    /// Raw binary buffer
    is_bytes => Bytes;
    /// `true` or `false`
    is_boolean => Boolean;
    /// Calendar instant
    is_date => Date;
    /// Integer, or a finite float with no fractional part
    is_integer => Integer;
    /// Integer or float
    is_number => Number;
    /// Object-like: object, array, date or bytes
    is_object => Object;
    /// Text
    is_string => String;
    /// Signed decimal composite
    is_signed_decimal => SignedDecimal;
}

/// Present and not null.
#[inline]
#[must_use]
pub fn is_defined(value: Option<&Value>) -> bool {
    value.is_some_and(|v| !v.is_null())
}

/// No value at all. An explicit null is *not* absent.
#[inline]
#[must_use]
pub fn is_absent(value: Option<&Value>) -> bool {
    value.is_none()
}
