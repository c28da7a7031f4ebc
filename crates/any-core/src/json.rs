//! Bridge between variant trees and the serde data model.
//!
//! This module owns no wire format. `Serialize` lets any serde serializer
//! write a variant tree, and [`from_json`] lifts an already-parsed
//! `serde_json::Value` into an owning tree.
//!
//! # Key design decisions
//!
//! - **Maps keep duplicates**: `Map` and `Ecma` are emitted with
//!   `serialize_map` in insertion order, one entry per pair. Serializers that
//!   collapse duplicate keys (e.g. `serde_json::to_value`) keep the last one;
//!   streaming serializers such as `serde_json::to_string` write them all.
//! - **No booleans**: the variant model has no boolean kind, so JSON `true` /
//!   `false` are rejected instead of being coerced to integers.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};
use serde_json::Value;

use crate::error::{AnyError, Result};
use crate::keyed::{Ecma, Map, Pairs};
use crate::value::Any;
use crate::vector::Vector;

impl Serialize for Any<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            Any::Int(v) => serializer.serialize_i64(*v),
            Any::Double(v) => serializer.serialize_f64(*v),
            Any::String(s) => serializer.serialize_str(s),
            Any::Null => serializer.serialize_unit(),
            Any::Vector(list) => list.serialize(serializer),
            Any::Map(map) => map.serialize(serializer),
            Any::Ecma(ecma) => ecma.serialize(serializer),
        }
    }
}

impl Serialize for Vector<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for item in self {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

impl Serialize for Pairs<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl Serialize for Map<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.pairs().serialize(serializer)
    }
}

impl Serialize for Ecma<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.pairs().serialize(serializer)
    }
}

/// Which keyed kind JSON objects become.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectKind {
    #[default]
    Map,
    Ecma,
}

/// Convert a parsed JSON value into an owning variant tree.
///
/// Integers that fit in `i64` become `Int`; every other number becomes
/// `Double`. Objects become `Map` or `Ecma` per `objects`, keeping the key
/// order of the input (`serde_json` is built with `preserve_order`).
///
/// # Errors
///
/// Returns [`AnyError::Unrepresentable`] for booleans anywhere in the tree.
///
/// # Examples
///
/// ```
/// use any_core::json::{from_json, ObjectKind};
/// use serde_json::json;
///
/// let tree = from_json(json!({"a": [1, 2.5, null]}), ObjectKind::Ecma).unwrap();
/// assert!(tree.is_ecma());
/// assert_eq!(tree.pointer("/a/1").and_then(|v| v.as_double()), Some(2.5));
/// ```
pub fn from_json(value: Value, objects: ObjectKind) -> Result<Any<'static>> {
    match value {
        Value::Null => Ok(Any::Null),
        Value::Bool(b) => {
            tracing::debug!(value = b, "rejecting JSON boolean");
            Err(AnyError::Unrepresentable(format!("boolean `{b}`")))
        }
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(Any::Int(i)),
            None => n
                .as_f64()
                .map(Any::Double)
                .ok_or_else(|| AnyError::Unrepresentable(format!("number `{n}`"))),
        },
        Value::String(s) => Ok(Any::String(s)),
        Value::Array(items) => {
            let values = items
                .into_iter()
                .map(|item| from_json(item, objects))
                .collect::<Result<Vec<_>>>()?;
            Ok(Any::vector(values))
        }
        Value::Object(fields) => {
            let pairs = fields
                .into_iter()
                .map(|(k, v)| from_json(v, objects).map(|v| (k, v)))
                .collect::<Result<Vec<_>>>()?;
            Ok(match objects {
                ObjectKind::Map => Any::map(pairs),
                ObjectKind::Ecma => Any::ecma(pairs),
            })
        }
    }
}

/// Convert a variant tree into a `serde_json::Value`.
///
/// Duplicate keys collapse to the last value, and non-finite doubles become
/// `null`, as `serde_json` does for its own maps and numbers.
pub fn to_json(value: &Any<'_>) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

impl TryFrom<Value> for Any<'static> {
    type Error = AnyError;

    fn try_from(value: Value) -> Result<Self> {
        from_json(value, ObjectKind::Map)
    }
}
