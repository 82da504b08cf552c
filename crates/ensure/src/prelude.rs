//! Prelude module for convenient imports.
//!
//! ```rust
//! use ensure::prelude::*;
//!
//! let ensure = Ensure::new();
//! assert!(ensure.boolean(Value::Boolean(true)).unwrap());
//! ```

pub use crate::{Assertions, Ensure, EnsureError, Kind};
pub use ensure_value::{Map, Number, Sign, SignedDecimal, Value, ValueKind};
