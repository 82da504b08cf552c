//! Unified `Value` enum for loosely-typed payloads
//!
//! A `Value` is what arrives from an untrusted source before anything about
//! its shape is known. Absence is deliberately *not* a variant: a missing
//! field is `Option::<Value>::None` at the call site, while an explicit
//! `null` is `Value::Null`.

use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use indexmap::IndexMap;

use crate::kind::ValueKind;
use crate::number::Number;

/// Key-value map used by [`Value::Object`]. Preserves insertion order.
pub type Map = IndexMap<String, Value>;

/// A dynamically-typed value.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// Explicit null
    #[default]
    Null,

    /// Boolean value
    Boolean(bool),

    /// Integer number (i64)
    Integer(i64),

    /// Floating point number (f64)
    Float(f64),

    /// UTF-8 text
    Text(String),

    /// Raw binary buffer
    Bytes(Bytes),

    /// Ordered sequence of values
    Array(Vec<Value>),

    /// Key-value map
    Object(Map),

    /// Calendar instant with a UTC offset
    DateTime(DateTime<FixedOffset>),
}

impl Value {
    // ==================== Constructors ====================

    /// Create a null value
    pub const fn null() -> Self {
        Self::Null
    }

    /// Create a text value from `String` or `&str`
    pub fn text(v: impl Into<String>) -> Self {
        Self::Text(v.into())
    }

    /// Create a bytes value
    pub fn bytes(v: impl Into<Bytes>) -> Self {
        Self::Bytes(v.into())
    }

    /// Create an empty array value
    pub fn array_empty() -> Self {
        Self::Array(Vec::new())
    }

    /// Create an empty object value
    pub fn object_empty() -> Self {
        Self::Object(Map::new())
    }

    // ==================== Type queries ====================

    /// Get the kind of this value
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Float(_) => ValueKind::Float,
            Self::Text(_) => ValueKind::String,
            Self::Bytes(_) => ValueKind::Bytes,
            Self::Array(_) => ValueKind::Array,
            Self::Object(_) => ValueKind::Object,
            Self::DateTime(_) => ValueKind::DateTime,
        }
    }

    /// Check if this is null
    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Check if this is an integer or a float
    #[inline]
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    // ==================== Borrowing accessors ====================

    /// Borrow the boolean payload
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Borrow the numeric payload as a [`Number`]
    #[must_use]
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Self::Integer(i) => Some(Number::Integer(*i)),
            Self::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }

    /// Borrow the text payload
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the array payload
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Borrow the object payload
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    // ==================== Object helpers ====================

    /// Look up a field of an object. `None` for missing keys and non-objects.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|map| map.get(key))
    }

    /// Remove a field from an object, preserving the order of the rest.
    ///
    /// Returns `None` (absent) when the key is missing or `self` is not an
    /// object, which makes this the usual way to feed a field into an
    /// assertion without cloning it.
    pub fn take(&mut self, key: &str) -> Option<Value> {
        match self {
            Self::Object(map) => map.shift_remove(key),
            _ => None,
        }
    }

    // ==================== Narrowing ====================
    //
    // Each `into_*` hands the untouched value back on mismatch so callers can
    // report it without cloning.

    /// Narrow to `bool`
    pub fn into_bool(self) -> Result<bool, Self> {
        match self {
            Self::Boolean(b) => Ok(b),
            other => Err(other),
        }
    }

    /// Narrow to [`Number`]
    pub fn into_number(self) -> Result<Number, Self> {
        match self {
            Self::Integer(i) => Ok(Number::Integer(i)),
            Self::Float(f) => Ok(Number::Float(f)),
            other => Err(other),
        }
    }

    /// Narrow to `String`
    pub fn into_string(self) -> Result<String, Self> {
        match self {
            Self::Text(s) => Ok(s),
            other => Err(other),
        }
    }

    /// Narrow to [`Bytes`]
    pub fn into_bytes(self) -> Result<Bytes, Self> {
        match self {
            Self::Bytes(b) => Ok(b),
            other => Err(other),
        }
    }

    /// Narrow to `Vec<Value>`
    pub fn into_array(self) -> Result<Vec<Value>, Self> {
        match self {
            Self::Array(items) => Ok(items),
            other => Err(other),
        }
    }

    /// Narrow to [`Map`]
    pub fn into_object(self) -> Result<Map, Self> {
        match self {
            Self::Object(map) => Ok(map),
            other => Err(other),
        }
    }

    /// Narrow to `DateTime<FixedOffset>`
    pub fn into_datetime(self) -> Result<DateTime<FixedOffset>, Self> {
        match self {
            Self::DateTime(dt) => Ok(dt),
            other => Err(other),
        }
    }
}
