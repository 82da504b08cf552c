//! Narrowed numeric payload.

use std::fmt;

use crate::value::Value;

/// A number taken out of a [`Value`] without changing its representation.
///
/// An `Integer` stays an `Integer` and a `Float` stays a `Float`; no widening
/// or truncation happens on the way in or out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// True for integers and for finite floats with no fractional part.
    #[must_use]
    pub fn is_integral(&self) -> bool {
        match *self {
            Self::Integer(_) => true,
            Self::Float(f) => f.is_finite() && f.fract() == 0.0,
        }
    }

    /// The integer payload, if this was stored as an integer.
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Integer(i) => Some(i),
            Self::Float(_) => None,
        }
    }

    /// The value as `f64`. Integers beyond 2^53 lose precision.
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match *self {
            Self::Integer(i) => i as f64,
            Self::Float(f) => f,
        }
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Self {
        match n {
            Number::Integer(i) => Self::Integer(i),
            Number::Float(f) => Self::Float(f),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(fl) => write!(f, "{fl}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Number::Integer(42), true)]
    #[case(Number::Float(42.0), true)]
    #[case(Number::Float(-0.0), true)]
    #[case(Number::Float(42.5), false)]
    #[case(Number::Float(f64::NAN), false)]
    #[case(Number::Float(f64::INFINITY), false)]
    fn test_is_integral(#[case] n: Number, #[case] expected: bool) {
        assert_eq!(n.is_integral(), expected);
    }

    #[test]
    fn test_round_trip_keeps_representation() {
        assert_eq!(Value::from(Number::Float(42.0)), Value::Float(42.0));
        assert_eq!(Value::from(Number::Integer(42)), Value::Integer(42));
    }

    #[test]
    fn test_as_f64_rounds_large_integers() {
        assert_eq!(Number::Float(0.5).as_f64(), 0.5);
        assert_eq!(Number::Integer(-3).as_f64(), -3.0);

        let large = (1_i64 << 53) + 1;
        assert_eq!(Number::Integer(large).as_f64(), (1_i64 << 53) as f64);
    }
}
