//! # ensure
//!
//! Runtime type assertions for loosely-typed data.
//!
//! A payload that arrives from JSON or an external API is a [`Value`] whose
//! shape nobody has checked yet. Each assertion checks one kind and either
//! hands the value back narrowed to that kind, or returns an error built by
//! the configured error policy.
//!
//! ## Quick Start
//!
//! ```rust
//! use ensure::prelude::*;
//! use serde_json::json;
//!
//! let ensure = Ensure::new();
//! let mut payload = Value::from(json!({"id": 42, "nickname": null}));
//!
//! let id = ensure.integer(payload.take("id")).unwrap();
//! assert_eq!(id, Number::Integer(42));
//!
//! let nickname = ensure.nullable_string(payload.take("nickname")).unwrap();
//! assert_eq!(nickname, None);
//!
//! // Absent is not null.
//! assert!(ensure.nullable_string(payload.take("email")).is_err());
//! ```
//!
//! ## Kinds
//!
//! `array`, `bytes`, `boolean`, `date`, `integer`, `number`, `object`,
//! `string`, `signed_decimal`, each with a `nullable_*` form, plus
//! `defined`, `nullable_defined` and `absent`. See [`Kind`] for the exact
//! predicates and [`guard`] for their non-failing forms.
//!
//! ## Error policy
//!
//! [`Ensure::new`] fails with [`EnsureError`]. [`Ensure::with_policy`] lets
//! the caller build its own error type instead; the policy's return value is
//! what the failing assertion returns in `Err`.

pub mod aliases;
mod assertions;
mod engine;
mod error;
pub mod guard;
mod kind;
pub mod prelude;

pub use assertions::Assertions;
pub use engine::{Ensure, EnsureBuilder, ErrorPolicy, WithMessage};
pub use error::EnsureError;
pub use kind::{Expectation, Kind};

pub use ensure_value::{Number, Sign, SignedDecimal, Value, ValueKind};
