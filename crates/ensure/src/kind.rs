//! The closed set of assertable kinds and their predicates.
//!
//! Every assertion, guard and dynamic check consults [`Kind::matches`]; there
//! is exactly one predicate per kind.

use std::fmt;

use ensure_value::{SignedDecimal, Value};

/// A named runtime category a value can be asserted against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Ordered, index-addressable sequence
    Array,
    /// Raw binary buffer
    Bytes,
    /// `true` or `false`
    Boolean,
    /// Calendar instant
    Date,
    /// Number with no fractional component
    Integer,
    /// Any number, NaN and infinities included
    Number,
    /// Any non-primitive: object, array, date or bytes
    Object,
    /// Text
    String,
    /// Object with a `sign` of `+`/`-` and textual `whole`/`fractional` parts
    SignedDecimal,
}

impl Kind {
    /// Every kind, in declaration order
    pub const ALL: [Self; 9] = [
        Self::Array,
        Self::Bytes,
        Self::Boolean,
        Self::Date,
        Self::Integer,
        Self::Number,
        Self::Object,
        Self::String,
        Self::SignedDecimal,
    ];

    /// Name used in failure messages
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Bytes => "bytes",
            Self::Boolean => "boolean",
            Self::Date => "date",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::Object => "object",
            Self::String => "string",
            Self::SignedDecimal => "signed decimal",
        }
    }

    /// Look a kind up by name. Case-insensitive; accepts a few common aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "array" | "list" => Some(Self::Array),
            "bytes" | "byte-buffer" | "arraybuffer" => Some(Self::Bytes),
            "boolean" | "bool" => Some(Self::Boolean),
            "date" | "datetime" => Some(Self::Date),
            "integer" | "int" => Some(Self::Integer),
            "number" | "float" => Some(Self::Number),
            "object" | "map" => Some(Self::Object),
            "string" | "str" | "text" => Some(Self::String),
            "signed decimal" | "signed-decimal" | "signed_decimal" => Some(Self::SignedDecimal),
            _ => None,
        }
    }

    /// The kind predicate.
    ///
    /// Null never matches; the nullable assertions handle it before this is
    /// consulted.
    #[must_use]
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            Self::Array => matches!(value, Value::Array(_)),
            Self::Bytes => matches!(value, Value::Bytes(_)),
            Self::Boolean => matches!(value, Value::Boolean(_)),
            Self::Date => matches!(value, Value::DateTime(_)),
            Self::Integer => value.as_number().is_some_and(|n| n.is_integral()),
            Self::Number => value.is_numeric(),
            Self::Object => matches!(
                value,
                Value::Object(_) | Value::Array(_) | Value::DateTime(_) | Value::Bytes(_)
            ),
            Self::String => matches!(value, Value::Text(_)),
            Self::SignedDecimal => SignedDecimal::matches(value),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// What a failed assertion expected. Renders the default failure message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    /// A value of the kind
    Kind(Kind),
    /// A value of the kind, or null
    NullableKind(Kind),
    /// Anything but null or absent
    Defined,
    /// No value at all
    Absent,
}

impl Expectation {
    /// Short label, e.g. `"integer" or null`
    pub fn label(&self) -> String {
        match self {
            Self::Kind(kind) => format!("\"{kind}\""),
            Self::NullableKind(kind) => format!("\"{kind}\" or null"),
            Self::Defined => "defined".to_string(),
            Self::Absent => "absent".to_string(),
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Expected data to be {}.", self.label())
    }
}
