//! # any-core
//!
//! Dynamically-typed variant values for heterogeneous, self-describing data such
//! as the trees produced by JSON or AMF decoders.
//!
//! A value is an [`Any`]: one of `Int`, `Double`, `String`, `Null`, or one of
//! three containers. [`Vector`] is an ordered list; [`Map`] and [`Ecma`] are
//! insertion-ordered key/value lists with first-match lookup that differ only
//! in their type tag. Every container is either *owning* (children dropped with
//! it) or a *view* over children owned elsewhere, fixed when it is built.
//!
//! ## Quick start
//!
//! ```rust
//! use any_core::{Any, AnyType, Ecma};
//!
//! let record = Any::map([("a", Any::int(1)), ("b", Any::int(2))]);
//! assert_eq!(record.get_type(), AnyType::Map);
//! assert_eq!(record.get("a").and_then(Any::as_int), Some(1));
//! assert!(record.get("missing").is_none());
//!
//! // Duplicate keys are kept; lookup returns the first one.
//! let mut ecma = Ecma::new();
//! ecma.insert("x", Any::int(1)).unwrap();
//! ecma.insert("x", Any::int(2)).unwrap();
//! let ecma = Any::from(ecma);
//! assert_eq!(ecma.get("x"), Some(&Any::int(1)));
//!
//! // Views borrow children owned elsewhere.
//! let owned = vec![Any::int(5)];
//! let view = Any::vector_view(owned.iter().collect());
//! assert_eq!(view.get(0), Some(&Any::int(5)));
//! assert_eq!(view.get(3), None);
//! ```
//!
//! ## Modules
//!
//! - [`value`] — the `Any` enum, constructors and accessors
//! - [`types`] — `AnyType` tag and its numeric codes
//! - [`vector`] — ordered-list container
//! - [`keyed`] — `Map` and `Ecma` key/value containers
//! - [`ownership`] — owning vs view containers
//! - [`json`] — serde `Serialize` support and `serde_json::Value` conversion
//! - [`error`] — error types

pub mod error;
pub mod index;
pub mod json;
pub mod keyed;
pub mod ownership;
pub mod types;
pub mod value;
pub mod vector;

pub use error::AnyError;
pub use index::Index;
pub use json::{from_json, to_json, ObjectKind};
pub use keyed::{Ecma, Map, Pairs};
pub use ownership::{Child, Ownership};
pub use types::AnyType;
pub use value::Any;
pub use vector::Vector;
