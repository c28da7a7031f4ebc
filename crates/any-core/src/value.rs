//! The `Any` variant and its accessor contract.
//!
//! Every value is one enum variant, so its kind can never disagree with its
//! tag. Three families of accessors sit on top of that:
//!
//! - `is_*` predicates, pure and infallible;
//! - `as_*` checked accessors returning `Option`, the path for untrusted data;
//! - `require_*` asserted accessors returning `Result`, for call sites that
//!   have already branched on [`Any::get_type`] and want a typed error rather
//!   than a silent `None` if that assumption breaks.

use crate::error::{AnyError, Result};
use crate::index::Index;
use crate::keyed::{Ecma, Map};
use crate::types::AnyType;
use crate::vector::Vector;

/// A dynamically-typed value.
///
/// `'a` is the lifetime of children borrowed by view containers somewhere in
/// the tree. Trees that own all of their children are `Any<'static>`.
#[derive(Debug, Clone, PartialEq)]
pub enum Any<'a> {
    Int(i64),
    Double(f64),
    String(String),
    Vector(Vector<'a>),
    Map(Map<'a>),
    /// Present but empty; distinct from an absent lookup result.
    Null,
    Ecma(Ecma<'a>),
}

impl<'a> Any<'a> {
    pub fn int(value: i64) -> Self {
        Any::Int(value)
    }

    pub fn double(value: f64) -> Self {
        Any::Double(value)
    }

    pub fn string(value: impl Into<String>) -> Self {
        Any::String(value.into())
    }

    pub fn null() -> Self {
        Any::Null
    }

    /// Owning vector of `values`.
    pub fn vector(values: Vec<Any<'a>>) -> Self {
        Any::Vector(Vector::from_values(values))
    }

    /// Vector viewing values owned elsewhere.
    pub fn vector_view(refs: Vec<&'a Any<'a>>) -> Self {
        Any::Vector(Vector::from_refs(refs))
    }

    /// Owning map of `pairs`, in order.
    pub fn map<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Any<'a>)>) -> Self {
        Any::Map(Map::from_pairs(pairs))
    }

    pub fn map_view<K: Into<String>>(pairs: impl IntoIterator<Item = (K, &'a Any<'a>)>) -> Self {
        Any::Map(Map::from_ref_pairs(pairs))
    }

    /// Owning ECMA array of `pairs`, in order.
    pub fn ecma<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Any<'a>)>) -> Self {
        Any::Ecma(Ecma::from_pairs(pairs))
    }

    pub fn ecma_view<K: Into<String>>(pairs: impl IntoIterator<Item = (K, &'a Any<'a>)>) -> Self {
        Any::Ecma(Ecma::from_ref_pairs(pairs))
    }

    /// The type tag of this value.
    pub fn get_type(&self) -> AnyType {
        match self {
            Any::Int(_) => AnyType::Int,
            Any::Double(_) => AnyType::Double,
            Any::String(_) => AnyType::String,
            Any::Vector(_) => AnyType::Vector,
            Any::Map(_) => AnyType::Map,
            Any::Null => AnyType::Null,
            Any::Ecma(_) => AnyType::Ecma,
        }
    }

    /// Tag name, e.g. `kMap`.
    pub fn type_str(&self) -> &'static str {
        self.get_type().as_str()
    }

    pub fn is_int(&self) -> bool {
        matches!(self, Any::Int(_))
    }

    pub fn is_double(&self) -> bool {
        matches!(self, Any::Double(_))
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Any::String(_))
    }

    pub fn is_vector(&self) -> bool {
        matches!(self, Any::Vector(_))
    }

    pub fn is_map(&self) -> bool {
        matches!(self, Any::Map(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Any::Null)
    }

    pub fn is_ecma(&self) -> bool {
        matches!(self, Any::Ecma(_))
    }

    pub fn is_container(&self) -> bool {
        self.get_type().is_container()
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Any::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match self {
            Any::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Any::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_vector(&self) -> Option<&Vector<'a>> {
        match self {
            Any::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_vector_mut(&mut self) -> Option<&mut Vector<'a>> {
        match self {
            Any::Vector(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map<'a>> {
        match self {
            Any::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut Map<'a>> {
        match self {
            Any::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_ecma(&self) -> Option<&Ecma<'a>> {
        match self {
            Any::Ecma(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_ecma_mut(&mut self) -> Option<&mut Ecma<'a>> {
        match self {
            Any::Ecma(e) => Some(e),
            _ => None,
        }
    }

    /// Assert that this value is of kind `expected`.
    ///
    /// ```
    /// use any_core::{Any, AnyType};
    ///
    /// let v = Any::int(3);
    /// assert!(v.expect_type(AnyType::Int).is_ok());
    /// assert!(v.expect_type(AnyType::Double).is_err());
    /// ```
    pub fn expect_type(&self, expected: AnyType) -> Result<&Self> {
        if self.get_type() == expected {
            Ok(self)
        } else {
            Err(self.mismatch(expected))
        }
    }

    pub fn require_int(&self) -> Result<i64> {
        self.as_int().ok_or_else(|| self.mismatch(AnyType::Int))
    }

    pub fn require_double(&self) -> Result<f64> {
        self.as_double().ok_or_else(|| self.mismatch(AnyType::Double))
    }

    pub fn require_str(&self) -> Result<&str> {
        self.as_str().ok_or_else(|| self.mismatch(AnyType::String))
    }

    pub fn require_vector(&self) -> Result<&Vector<'a>> {
        self.as_vector()
            .ok_or_else(|| self.mismatch(AnyType::Vector))
    }

    pub fn require_map(&self) -> Result<&Map<'a>> {
        self.as_map().ok_or_else(|| self.mismatch(AnyType::Map))
    }

    pub fn require_ecma(&self) -> Result<&Ecma<'a>> {
        self.as_ecma().ok_or_else(|| self.mismatch(AnyType::Ecma))
    }

    fn mismatch(&self, expected: AnyType) -> AnyError {
        let found = self.get_type();
        tracing::debug!(%expected, %found, "asserted accessor on wrong kind");
        AnyError::TypeMismatch { expected, found }
    }

    /// Positional or keyed lookup.
    ///
    /// A `usize` indexes a `Vector`; a string looks up the first matching key
    /// of a `Map` or `Ecma`. Any other combination, an index past the end, or
    /// a missing key yields `None`.
    ///
    /// ```
    /// use any_core::Any;
    ///
    /// let rec = Any::map([("a", Any::int(1)), ("b", Any::int(2))]);
    /// assert_eq!(rec.get("a"), Some(&Any::int(1)));
    /// assert_eq!(rec.get(0), None);
    ///
    /// let list = Any::vector(vec![Any::int(5)]);
    /// assert_eq!(list.get(3), None);
    /// ```
    pub fn get<I: Index>(&self, index: I) -> Option<&Any<'a>> {
        index.index_into(self)
    }

    /// Walk a slash-separated path such as `/items/0/name`.
    ///
    /// Segments are looked up with [`Any::get`]: on a `Vector` a segment must
    /// be a plain decimal index, on a `Map` or `Ecma` it is a key. `~1` and
    /// `~0` decode to `/` and `~`. The empty path is the value itself.
    pub fn pointer(&self, pointer: &str) -> Option<&Any<'a>> {
        if pointer.is_empty() {
            return Some(self);
        }
        if !pointer.starts_with('/') {
            return None;
        }
        pointer
            .split('/')
            .skip(1)
            .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
            .try_fold(self, |target, token| match target {
                Any::Vector(list) => parse_index(&token).and_then(|i| list.get(i)),
                Any::Map(_) | Any::Ecma(_) => target.get(token.as_str()),
                _ => None,
            })
    }

    /// Deep copy into a tree that owns every node.
    ///
    /// Views are replaced by owning containers holding copies of the values
    /// they referenced, so the result no longer borrows anything.
    pub fn to_owned_tree(&self) -> Any<'static> {
        match self {
            Any::Int(v) => Any::Int(*v),
            Any::Double(v) => Any::Double(*v),
            Any::String(s) => Any::String(s.clone()),
            Any::Null => Any::Null,
            Any::Vector(list) => Any::Vector(list.iter().map(Any::to_owned_tree).collect()),
            Any::Map(map) => Any::Map(
                map.iter()
                    .map(|(k, v)| (k, v.to_owned_tree()))
                    .collect(),
            ),
            Any::Ecma(ecma) => Any::Ecma(
                ecma.iter()
                    .map(|(k, v)| (k, v.to_owned_tree()))
                    .collect(),
            ),
        }
    }
}

fn parse_index(token: &str) -> Option<usize> {
    if token.starts_with('+') || (token.starts_with('0') && token.len() != 1) {
        return None;
    }
    token.parse().ok()
}

impl From<i64> for Any<'_> {
    fn from(value: i64) -> Self {
        Any::Int(value)
    }
}

impl From<i32> for Any<'_> {
    fn from(value: i32) -> Self {
        Any::Int(value.into())
    }
}

impl From<f64> for Any<'_> {
    fn from(value: f64) -> Self {
        Any::Double(value)
    }
}

impl From<&str> for Any<'_> {
    fn from(value: &str) -> Self {
        Any::String(value.to_owned())
    }
}

impl From<String> for Any<'_> {
    fn from(value: String) -> Self {
        Any::String(value)
    }
}

impl From<()> for Any<'_> {
    fn from((): ()) -> Self {
        Any::Null
    }
}

impl<'a> From<Vector<'a>> for Any<'a> {
    fn from(value: Vector<'a>) -> Self {
        Any::Vector(value)
    }
}

impl<'a> From<Map<'a>> for Any<'a> {
    fn from(value: Map<'a>) -> Self {
        Any::Map(value)
    }
}

impl<'a> From<Ecma<'a>> for Any<'a> {
    fn from(value: Ecma<'a>) -> Self {
        Any::Ecma(value)
    }
}
