//! The assertion API.
//!
//! Every validator is a provided method built on two primitives,
//! [`Assertions::required`] and [`Assertions::nullable`]. Implementors only
//! decide how a failure is turned into an error ([`Assertions::raise`]).
//!
//! Inputs are `impl Into<Option<Value>>`: pass a [`Value`] for a present
//! value, or an `Option<Value>` where `None` means *absent*. Absent and null
//! are never conflated:
//!
//! | input | `string` | `nullable_string` |
//! |---|---|---|
//! | `Value::text("a")` | `Ok("a")` | `Ok(Some("a"))` |
//! | `Value::Null` | `Err` | `Ok(None)` |
//! | `None` (absent) | `Err` | `Err` |
//! | `Value::Integer(1)` | `Err` | `Err` |

use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use ensure_value::{Number, SignedDecimal, Value};

use crate::kind::{Expectation, Kind};

/// Runtime type assertions over [`Value`].
///
/// Implemented by [`Ensure`](crate::Ensure) and by the message-carrying view
/// returned from [`Ensure::with_message`](crate::Ensure::with_message).
///
/// On success every assertion returns the value it was given, narrowed to the
/// kind's payload type. Nothing is copied or converted:
/// `Value::from(ensure.integer(v)?) == v`.
pub trait Assertions {
    /// Error produced by the error policy.
    type Error;

    /// Builds the failure for an unmet expectation.
    fn raise(&self, expected: Expectation, data: Option<Value>) -> Self::Error;

    // ==================== Primitives ====================

    /// Required check: fails on absent, null and wrong-kind values.
    fn required<T>(
        &self,
        kind: Kind,
        value: Option<Value>,
        narrow: fn(Value) -> Result<T, Value>,
    ) -> Result<T, Self::Error> {
        match value {
            Some(v) if kind.matches(&v) => {
                narrow(v).map_err(|v| self.raise(Expectation::Kind(kind), Some(v)))
            }
            other => Err(self.raise(Expectation::Kind(kind), other)),
        }
    }

    /// Nullable check: null succeeds with `None`; absent and wrong-kind
    /// values fail.
    fn nullable<T>(
        &self,
        kind: Kind,
        value: Option<Value>,
        narrow: fn(Value) -> Result<T, Value>,
    ) -> Result<Option<T>, Self::Error> {
        match value {
            Some(Value::Null) => Ok(None),
            Some(v) if kind.matches(&v) => narrow(v)
                .map(Some)
                .map_err(|v| self.raise(Expectation::NullableKind(kind), Some(v))),
            other => Err(self.raise(Expectation::NullableKind(kind), other)),
        }
    }

    // ==================== Dynamic ====================

    /// Asserts a kind chosen at runtime, without narrowing.
    fn kind(&self, kind: Kind, value: impl Into<Option<Value>>) -> Result<Value, Self::Error> {
        self.required(kind, value.into(), Ok)
    }

    /// Nullable form of [`Assertions::kind`].
    fn nullable_kind(
        &self,
        kind: Kind,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<Value>, Self::Error> {
        self.nullable(kind, value.into(), Ok)
    }

    // ==================== Presence ====================

    /// Anything but null or absent.
    fn defined(&self, value: impl Into<Option<Value>>) -> Result<Value, Self::Error> {
        match value.into() {
            Some(v) if !v.is_null() => Ok(v),
            other => Err(self.raise(Expectation::Defined, other)),
        }
    }

    /// Anything but absent; null comes back as `None`.
    fn nullable_defined(
        &self,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<Value>, Self::Error> {
        match value.into() {
            Some(Value::Null) => Ok(None),
            Some(v) => Ok(Some(v)),
            None => Err(self.raise(Expectation::Defined, None)),
        }
    }

    /// No value at all.
    fn absent(&self, value: impl Into<Option<Value>>) -> Result<(), Self::Error> {
        match value.into() {
            None => Ok(()),
            some => Err(self.raise(Expectation::Absent, some)),
        }
    }

    // ==================== Kinds ====================

    fn array(&self, value: impl Into<Option<Value>>) -> Result<Vec<Value>, Self::Error> {
        self.required(Kind::Array, value.into(), Value::into_array)
    }

    fn nullable_array(
        &self,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<Vec<Value>>, Self::Error> {
        self.nullable(Kind::Array, value.into(), Value::into_array)
    }

    fn bytes(&self, value: impl Into<Option<Value>>) -> Result<Bytes, Self::Error> {
        self.required(Kind::Bytes, value.into(), Value::into_bytes)
    }

    fn nullable_bytes(
        &self,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<Bytes>, Self::Error> {
        self.nullable(Kind::Bytes, value.into(), Value::into_bytes)
    }

    fn boolean(&self, value: impl Into<Option<Value>>) -> Result<bool, Self::Error> {
        self.required(Kind::Boolean, value.into(), Value::into_bool)
    }

    fn nullable_boolean(
        &self,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<bool>, Self::Error> {
        self.nullable(Kind::Boolean, value.into(), Value::into_bool)
    }

    fn date(
        &self,
        value: impl Into<Option<Value>>,
    ) -> Result<DateTime<FixedOffset>, Self::Error> {
        self.required(Kind::Date, value.into(), Value::into_datetime)
    }

    fn nullable_date(
        &self,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<DateTime<FixedOffset>>, Self::Error> {
        self.nullable(Kind::Date, value.into(), Value::into_datetime)
    }

    /// Integers and whole floats. The representation is kept: `42.0` comes
    /// back as `Number::Float(42.0)`.
    fn integer(&self, value: impl Into<Option<Value>>) -> Result<Number, Self::Error> {
        self.required(Kind::Integer, value.into(), Value::into_number)
    }

    fn nullable_integer(
        &self,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<Number>, Self::Error> {
        self.nullable(Kind::Integer, value.into(), Value::into_number)
    }

    fn number(&self, value: impl Into<Option<Value>>) -> Result<Number, Self::Error> {
        self.required(Kind::Number, value.into(), Value::into_number)
    }

    fn nullable_number(
        &self,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<Number>, Self::Error> {
        self.nullable(Kind::Number, value.into(), Value::into_number)
    }

    /// Object-like values. Arrays, dates and byte buffers qualify, so the
    /// value is returned as-is rather than as a map.
    fn object(&self, value: impl Into<Option<Value>>) -> Result<Value, Self::Error> {
        self.required(Kind::Object, value.into(), Ok)
    }

    fn nullable_object(
        &self,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<Value>, Self::Error> {
        self.nullable(Kind::Object, value.into(), Ok)
    }

    fn string(&self, value: impl Into<Option<Value>>) -> Result<String, Self::Error> {
        self.required(Kind::String, value.into(), Value::into_string)
    }

    fn nullable_string(
        &self,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<String>, Self::Error> {
        self.nullable(Kind::String, value.into(), Value::into_string)
    }

    fn signed_decimal(
        &self,
        value: impl Into<Option<Value>>,
    ) -> Result<SignedDecimal, Self::Error> {
        self.required(Kind::SignedDecimal, value.into(), SignedDecimal::from_value)
    }

    fn nullable_signed_decimal(
        &self,
        value: impl Into<Option<Value>>,
    ) -> Result<Option<SignedDecimal>, Self::Error> {
        self.nullable(Kind::SignedDecimal, value.into(), SignedDecimal::from_value)
    }
}
