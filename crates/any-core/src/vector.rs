//! Ordered-list container.
//!
//! A `Vector` preserves its children exactly in construction/append order and
//! is indexable by position. Positions past the end yield `None`.

use std::fmt;
use std::iter::FusedIterator;
use std::slice;

use crate::error::{AnyError, Result};
use crate::ownership::{Child, Ownership};
use crate::value::Any;

#[derive(Clone)]
enum Elements<'a> {
    Owned(Vec<Any<'a>>),
    Borrowed(Vec<&'a Any<'a>>),
}

/// Ordered sequence of child variants, either owned or borrowed.
#[derive(Clone)]
pub struct Vector<'a> {
    elements: Elements<'a>,
}

impl<'a> Vector<'a> {
    /// Empty owning vector.
    pub fn new() -> Self {
        Self {
            elements: Elements::Owned(Vec::new()),
        }
    }

    /// Empty view; only borrowed children may be pushed.
    pub fn view() -> Self {
        Self {
            elements: Elements::Borrowed(Vec::new()),
        }
    }

    /// Owning vector that takes the given children.
    pub fn from_values(values: Vec<Any<'a>>) -> Self {
        Self {
            elements: Elements::Owned(values),
        }
    }

    /// View over children owned elsewhere.
    pub fn from_refs(refs: Vec<&'a Any<'a>>) -> Self {
        Self {
            elements: Elements::Borrowed(refs),
        }
    }

    pub fn ownership(&self) -> Ownership {
        match self.elements {
            Elements::Owned(_) => Ownership::Owning,
            Elements::Borrowed(_) => Ownership::View,
        }
    }

    pub fn owns_children(&self) -> bool {
        self.ownership().is_owning()
    }

    pub fn len(&self) -> usize {
        match &self.elements {
            Elements::Owned(values) => values.len(),
            Elements::Borrowed(refs) => refs.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The child at `index`, or `None` when `index >= len()`.
    pub fn get(&self, index: usize) -> Option<&Any<'a>> {
        match &self.elements {
            Elements::Owned(values) => values.get(index),
            Elements::Borrowed(refs) => refs.get(index).copied(),
        }
    }

    /// Append a child at the end.
    ///
    /// The child must match the vector's ownership mode: owning vectors take
    /// `Any` values, views take `&Any` references. A mismatched child is
    /// rejected and the vector is left unchanged.
    pub fn push(&mut self, child: impl Into<Child<'a>>) -> Result<()> {
        let container = self.ownership();
        let child: Child<'a> = child.into();
        match (&mut self.elements, child) {
            (Elements::Owned(values), Child::Owned(value)) => values.push(value),
            (Elements::Borrowed(refs), Child::Borrowed(value)) => refs.push(value),
            (_, child) => {
                tracing::debug!(
                    container = %container,
                    child = %child.ownership(),
                    "rejected vector append"
                );
                return Err(AnyError::OwnershipMismatch {
                    container,
                    child: child.ownership(),
                });
            }
        }
        Ok(())
    }

    /// Children in order.
    pub fn iter(&self) -> Iter<'_, 'a> {
        let inner = match &self.elements {
            Elements::Owned(values) => IterInner::Owned(values.iter()),
            Elements::Borrowed(refs) => IterInner::Borrowed(refs.iter()),
        };
        Iter { inner }
    }

    /// Snapshot of the children as plain references.
    pub fn to_vec(&self) -> Vec<&Any<'a>> {
        self.iter().collect()
    }
}

impl Default for Vector<'_> {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Vector<'_> {
    /// Element-wise comparison; the ownership mode is not part of equality.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for Vector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<'a> FromIterator<Any<'a>> for Vector<'a> {
    fn from_iter<T: IntoIterator<Item = Any<'a>>>(iter: T) -> Self {
        Self::from_values(iter.into_iter().collect())
    }
}

impl<'r, 'a> IntoIterator for &'r Vector<'a> {
    type Item = &'r Any<'a>;
    type IntoIter = Iter<'r, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the children of a [`Vector`].
pub struct Iter<'r, 'a> {
    inner: IterInner<'r, 'a>,
}

enum IterInner<'r, 'a> {
    Owned(slice::Iter<'r, Any<'a>>),
    Borrowed(slice::Iter<'r, &'a Any<'a>>),
}

impl<'r, 'a> Iterator for Iter<'r, 'a> {
    type Item = &'r Any<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Owned(it) => it.next(),
            IterInner::Borrowed(it) => it.next().map(|value| &**value),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            IterInner::Owned(it) => it.size_hint(),
            IterInner::Borrowed(it) => it.size_hint(),
        }
    }
}

impl DoubleEndedIterator for Iter<'_, '_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            IterInner::Owned(it) => it.next_back(),
            IterInner::Borrowed(it) => it.next_back().map(|value| &**value),
        }
    }
}

impl ExactSizeIterator for Iter<'_, '_> {}

impl FusedIterator for Iter<'_, '_> {}
