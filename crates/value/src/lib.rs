//! # ensure-value
//!
//! The dynamic value model inspected by the `ensure` assertion engine.
//!
//! A [`Value`] is a payload whose shape is not known yet: something just
//! deserialized from JSON, pulled out of a loosely-typed API response, or
//! assembled by hand. Absence is represented outside the enum, as
//! `Option::<Value>::None`, so that a missing field and an explicit `null`
//! never collapse into each other.
//!
//! ```rust
//! use ensure_value::{Value, ValueKind};
//! use serde_json::json;
//!
//! let mut payload = Value::from(json!({"id": 7, "note": null}));
//! assert_eq!(payload.get("id").map(Value::kind), Some(ValueKind::Integer));
//! assert_eq!(payload.take("note"), Some(Value::Null));
//! assert_eq!(payload.take("missing"), None);
//! ```

mod convert;
pub mod decimal;
mod display;
pub mod error;
pub mod kind;
pub mod number;
mod serde_impl;
pub mod value;

pub use decimal::{Sign, SignedDecimal};
pub use error::ValueError;
pub use kind::ValueKind;
pub use number::Number;
pub use value::{Map, Value};

/// Prelude for common imports
pub mod prelude {
    pub use crate::{Map, Number, Sign, SignedDecimal, Value, ValueError, ValueKind};
}
