//! Ownership modes for container children.
//!
//! A container either owns its children (they are dropped with it) or is a
//! view over children owned somewhere else. The mode is chosen by the
//! constructor and never changes afterwards.

use std::fmt;

use crate::value::Any;

/// Whether a container owns its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ownership {
    /// Children are stored by value and dropped with the container.
    Owning,
    /// Children are borrowed; dropping the container leaves them alone.
    View,
}

impl Ownership {
    pub fn is_owning(self) -> bool {
        self == Ownership::Owning
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Ownership::Owning => f.write_str("owning"),
            Ownership::View => f.write_str("view"),
        }
    }
}

/// A value handed to `push` / `insert`.
///
/// Owning containers accept [`Child::Owned`], views accept
/// [`Child::Borrowed`]. Both convert from `Any` and `&Any` respectively, so
/// call sites rarely name this type.
#[derive(Debug, Clone)]
pub enum Child<'a> {
    Owned(Any<'a>),
    Borrowed(&'a Any<'a>),
}

impl<'a> Child<'a> {
    /// The ownership mode this child requires of its container.
    pub fn ownership(&self) -> Ownership {
        match self {
            Child::Owned(_) => Ownership::Owning,
            Child::Borrowed(_) => Ownership::View,
        }
    }
}

impl<'a> From<Any<'a>> for Child<'a> {
    fn from(value: Any<'a>) -> Self {
        Child::Owned(value)
    }
}

impl<'a> From<&'a Any<'a>> for Child<'a> {
    fn from(value: &'a Any<'a>) -> Self {
        Child::Borrowed(value)
    }
}
