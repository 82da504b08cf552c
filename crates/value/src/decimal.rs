//! Signed decimal composite.
//!
//! Financial payloads often carry decimals as an object with the sign and the
//! digit runs split apart, so that no floating point parsing ever touches
//! them:
//!
//! ```json
//! { "sign": "-", "whole": "12", "fractional": "50" }
//! ```
//!
//! [`SignedDecimal`] is a checked view over such an object. It keeps the
//! original map (extra fields included) and hands it back unchanged from
//! [`SignedDecimal::into_value`].

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;
use crate::value::{Map, Value};

/// Field holding the sign marker
pub const SIGN_FIELD: &str = "sign";
/// Field holding the digits before the decimal point
pub const WHOLE_FIELD: &str = "whole";
/// Field holding the digits after the decimal point
pub const FRACTIONAL_FIELD: &str = "fractional";

/// Sign of a [`SignedDecimal`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sign {
    Positive,
    Negative,
}

impl Sign {
    /// Wire marker: `+` or `-`
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "+",
            Self::Negative => "-",
        }
    }
}

impl FromStr for Sign {
    type Err = ValueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Self::Positive),
            "-" => Ok(Self::Negative),
            other => Err(ValueError::InvalidSign(other.to_string())),
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Object-shaped decimal with an explicit sign and textual digit runs.
#[derive(Debug, Clone, PartialEq)]
pub struct SignedDecimal {
    fields: Map,
}

impl SignedDecimal {
    /// Build a composite from its parts.
    pub fn new(sign: Sign, whole: impl Into<String>, fractional: impl Into<String>) -> Self {
        let mut fields = Map::with_capacity(3);
        fields.insert(SIGN_FIELD.into(), Value::text(sign.as_str()));
        fields.insert(WHOLE_FIELD.into(), Value::Text(whole.into()));
        fields.insert(FRACTIONAL_FIELD.into(), Value::Text(fractional.into()));
        Self { fields }
    }

    /// Parse a plain decimal literal such as `-12.50`, `+3` or `0.25`.
    ///
    /// Only ASCII digits are accepted; exponents, grouping and whitespace are
    /// rejected.
    pub fn parse(text: &str) -> Result<Self, ValueError> {
        let invalid = || ValueError::InvalidDecimal(text.to_string());

        let (sign, digits) = match text.as_bytes().first() {
            Some(b'-') => (Sign::Negative, &text[1..]),
            Some(b'+') => (Sign::Positive, &text[1..]),
            _ => (Sign::Positive, text),
        };
        let (whole, fractional) = digits.split_once('.').unwrap_or((digits, ""));

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if whole.is_empty() || !all_digits(whole) || !all_digits(fractional) {
            return Err(invalid());
        }
        if digits.ends_with('.') {
            return Err(invalid());
        }

        Ok(Self::new(sign, whole, fractional))
    }

    /// True when `value` is an object with a valid sign and textual digit runs.
    #[must_use]
    pub fn matches(value: &Value) -> bool {
        let Some(map) = value.as_object() else {
            return false;
        };
        let sign_ok = map
            .get(SIGN_FIELD)
            .and_then(Value::as_str)
            .is_some_and(|s| s.parse::<Sign>().is_ok());
        let text = |key: &str| matches!(map.get(key), Some(Value::Text(_)));
        sign_ok && text(WHOLE_FIELD) && text(FRACTIONAL_FIELD)
    }

    /// Narrow a value into a composite, handing it back untouched on mismatch.
    pub fn from_value(value: Value) -> Result<Self, Value> {
        if !Self::matches(&value) {
            return Err(value);
        }
        value.into_object().map(|fields| Self { fields })
    }

    /// The sign
    #[must_use]
    pub fn sign(&self) -> Sign {
        match self.fields.get(SIGN_FIELD).and_then(Value::as_str) {
            Some("-") => Sign::Negative,
            _ => Sign::Positive,
        }
    }

    /// Digits before the decimal point
    #[must_use]
    pub fn whole(&self) -> &str {
        self.text_field(WHOLE_FIELD)
    }

    /// Digits after the decimal point (may be empty)
    #[must_use]
    pub fn fractional(&self) -> &str {
        self.text_field(FRACTIONAL_FIELD)
    }

    /// Borrow the underlying object
    #[must_use]
    pub fn as_map(&self) -> &Map {
        &self.fields
    }

    /// Give back the original object value
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    fn text_field(&self, key: &str) -> &str {
        self.fields.get(key).and_then(Value::as_str).unwrap_or_default()
    }
}

impl From<SignedDecimal> for Value {
    fn from(d: SignedDecimal) -> Self {
        d.into_value()
    }
}

impl fmt::Display for SignedDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.sign() == Sign::Negative {
            f.write_str("-")?;
        }
        f.write_str(self.whole())?;
        if !self.fractional().is_empty() {
            write!(f, ".{}", self.fractional())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn object(pairs: &[(&str, Value)]) -> Value {
        Value::Object(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), v.clone()))
                .collect(),
        )
    }

    #[test]
    fn test_matches_well_formed() {
        let value = object(&[
            ("sign", Value::text("-")),
            ("whole", Value::text("12")),
            ("fractional", Value::text("50")),
        ]);
        assert!(SignedDecimal::matches(&value));
    }

    #[rstest]
    #[case::bad_sign(object(&[
        ("sign", Value::text("~")),
        ("whole", Value::text("1")),
        ("fractional", Value::text("0")),
    ]))]
    #[case::numeric_whole(object(&[
        ("sign", Value::text("+")),
        ("whole", Value::Integer(1)),
        ("fractional", Value::text("0")),
    ]))]
    #[case::missing_fractional(object(&[
        ("sign", Value::text("+")),
        ("whole", Value::text("1")),
    ]))]
    #[case::not_object(Value::text("+1.0"))]
    #[case::array(Value::Array(vec![Value::text("+")]))]
    fn test_matches_rejects(#[case] value: Value) {
        assert!(!SignedDecimal::matches(&value));
    }

    #[test]
    fn test_from_value_keeps_extra_fields() {
        let value = object(&[
            ("sign", Value::text("+")),
            ("whole", Value::text("7")),
            ("fractional", Value::text("")),
            ("currency", Value::text("EUR")),
        ]);
        let decimal = SignedDecimal::from_value(value.clone()).unwrap();
        assert_eq!(decimal.sign(), Sign::Positive);
        assert_eq!(decimal.whole(), "7");
        assert_eq!(decimal.into_value(), value);
    }

    #[rstest]
    #[case("-12.50", Sign::Negative, "12", "50")]
    #[case("+3", Sign::Positive, "3", "")]
    #[case("0.25", Sign::Positive, "0", "25")]
    fn test_parse(
        #[case] text: &str,
        #[case] sign: Sign,
        #[case] whole: &str,
        #[case] fractional: &str,
    ) {
        let decimal = SignedDecimal::parse(text).unwrap();
        assert_eq!(decimal.sign(), sign);
        assert_eq!(decimal.whole(), whole);
        assert_eq!(decimal.fractional(), fractional);
    }

    #[rstest]
    #[case("")]
    #[case("-")]
    #[case(".5")]
    #[case("1.")]
    #[case("1e5")]
    #[case("1,000")]
    #[case(" 1")]
    fn test_parse_rejects(#[case] text: &str) {
        assert_eq!(
            SignedDecimal::parse(text),
            Err(ValueError::InvalidDecimal(text.to_string()))
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(SignedDecimal::parse("-12.50").unwrap().to_string(), "-12.50");
        assert_eq!(SignedDecimal::parse("+3").unwrap().to_string(), "3");
    }

    #[test]
    fn test_sign_from_str() {
        assert_eq!("-".parse::<Sign>(), Ok(Sign::Negative));
        assert_eq!(
            "plus".parse::<Sign>(),
            Err(ValueError::InvalidSign("plus".into()))
        );
    }

    #[test]
    fn test_as_map_keeps_extra_fields() {
        let value = object(&[
            ("sign", Value::text("+")),
            ("whole", Value::text("1")),
            ("fractional", Value::text("0")),
            ("unit", Value::text("kg")),
        ]);
        let decimal = SignedDecimal::from_value(value).unwrap();
        let map = decimal.as_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map.get("unit"), Some(&Value::text("kg")));
    }
}
