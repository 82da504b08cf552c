//! Historical naming conventions.
//!
//! Older call sites spell the same assertions as `demandString(...)` or
//! `enforceString(...)`. [`Demand`] and [`Enforce`] forward to
//! [`Assertions`] and are implemented for every implementor, so bringing the
//! trait into scope is all a call site needs.
//!
//! ```rust
//! use ensure::aliases::Demand;
//! use ensure::{Ensure, Value};
//!
//! let ensure = Ensure::new();
//! assert_eq!(ensure.demand_string(Value::text("a")).unwrap(), "a");
//! assert_eq!(ensure.demand_nullable_integer(Value::Null).unwrap(), None);
//! ```

use bytes::Bytes;
use chrono::{DateTime, FixedOffset};
use ensure_value::{Number, SignedDecimal, Value};

use crate::assertions::Assertions;

macro_rules! alias_family {
    (
        $(#[$meta:meta])*
        $vis:vis trait $family:ident {
            $($alias:ident => $method:ident -> $ret:ty;)*
        }
    ) => {
        $(#[$meta])*
        $vis trait $family: Assertions {
            $(
                #[doc = concat!("Alias for [`Assertions::", stringify!($method), "`].")]
                #[inline]
                fn $alias(&self, value: impl Into<Option<Value>>) -> Result<$ret, Self::Error> {
                    self.$method(value)
                }
            )*
        }

        impl<A: Assertions> $family for A {}
    };
}

alias_family! {
    /// `demand_*` spelling of the assertion API.
    pub trait Demand {
        demand_array => array -> Vec<Value>;
        demand_nullable_array => nullable_array -> Option<Vec<Value>>;
        demand_bytes => bytes -> Bytes;
        demand_nullable_bytes => nullable_bytes -> Option<Bytes>;
        demand_boolean => boolean -> bool;
        demand_nullable_boolean => nullable_boolean -> Option<bool>;
        demand_date => date -> DateTime<FixedOffset>;
        demand_nullable_date => nullable_date -> Option<DateTime<FixedOffset>>;
        demand_defined => defined -> Value;
        demand_nullable_defined => nullable_defined -> Option<Value>;
        demand_integer => integer -> Number;
        demand_nullable_integer => nullable_integer -> Option<Number>;
        demand_number => number -> Number;
        demand_nullable_number => nullable_number -> Option<Number>;
        demand_object => object -> Value;
        demand_nullable_object => nullable_object -> Option<Value>;
        demand_string => string -> String;
        demand_nullable_string => nullable_string -> Option<String>;
        demand_signed_decimal => signed_decimal -> SignedDecimal;
        demand_nullable_signed_decimal => nullable_signed_decimal -> Option<SignedDecimal>;
        demand_absent => absent -> ();
    }
}

alias_family! {
    /// `enforce_*` spelling of the assertion API.
    pub trait Enforce {
        enforce_array => array -> Vec<Value>;
        enforce_nullable_array => nullable_array -> Option<Vec<Value>>;
        enforce_bytes => bytes -> Bytes;
        enforce_nullable_bytes => nullable_bytes -> Option<Bytes>;
        enforce_boolean => boolean -> bool;
        enforce_nullable_boolean => nullable_boolean -> Option<bool>;
        enforce_date => date -> DateTime<FixedOffset>;
        enforce_nullable_date => nullable_date -> Option<DateTime<FixedOffset>>;
        enforce_defined => defined -> Value;
        enforce_nullable_defined => nullable_defined -> Option<Value>;
        enforce_integer => integer -> Number;
        enforce_nullable_integer => nullable_integer -> Option<Number>;
        enforce_number => number -> Number;
        enforce_nullable_number => nullable_number -> Option<Number>;
        enforce_object => object -> Value;
        enforce_nullable_object => nullable_object -> Option<Value>;
        enforce_string => string -> String;
        enforce_nullable_string => nullable_string -> Option<String>;
        enforce_signed_decimal => signed_decimal -> SignedDecimal;
        enforce_nullable_signed_decimal => nullable_signed_decimal -> Option<SignedDecimal>;
        enforce_absent => absent -> ();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Ensure;

    #[test]
    fn test_demand_matches_assertions() {
        let ensure = Ensure::new();
        assert_eq!(
            ensure.demand_integer(Value::Float(2.5)).unwrap_err(),
            ensure.integer(Value::Float(2.5)).unwrap_err()
        );
        assert_eq!(ensure.demand_object(Value::array_empty()).unwrap(), Value::array_empty());
        assert!(ensure.demand_absent(None).is_ok());
    }

    #[test]
    fn test_enforce_through_message_view() {
        let ensure = Ensure::new();
        let err = ensure
            .with_message("order.total")
            .enforce_signed_decimal(Value::Float(1.5))
            .unwrap_err();
        assert_eq!(
            err.message(),
            "order.total Expected data to be \"signed decimal\"."
        );
    }
}
