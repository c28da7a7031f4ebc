//! Key-value containers: `Map` and `Ecma`.
//!
//! Both store an insertion-ordered list of `(key, child)` pairs and look keys
//! up by linear scan, returning the first match. Duplicate keys are accepted
//! and kept; there is no update or delete. The two types share every
//! behaviour through [`Pairs`] and differ only in the type tag they carry, so
//! a decoder can report which wire construct a record came from.

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Deref, DerefMut};
use std::slice;

use crate::error::{AnyError, Result};
use crate::ownership::{Child, Ownership};
use crate::value::Any;

#[derive(Clone)]
enum Entries<'a> {
    Owned(Vec<(String, Any<'a>)>),
    Borrowed(Vec<(String, &'a Any<'a>)>),
}

/// Insertion-ordered `(key, child)` pairs with first-match lookup.
#[derive(Clone)]
pub struct Pairs<'a> {
    entries: Entries<'a>,
}

impl<'a> Pairs<'a> {
    fn owning() -> Self {
        Self {
            entries: Entries::Owned(Vec::new()),
        }
    }

    fn view() -> Self {
        Self {
            entries: Entries::Borrowed(Vec::new()),
        }
    }

    fn from_pairs<K: Into<String>>(pairs: impl IntoIterator<Item = (K, Any<'a>)>) -> Self {
        Self {
            entries: Entries::Owned(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    fn from_ref_pairs<K: Into<String>>(
        pairs: impl IntoIterator<Item = (K, &'a Any<'a>)>,
    ) -> Self {
        Self {
            entries: Entries::Borrowed(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()),
        }
    }

    pub fn ownership(&self) -> Ownership {
        match self.entries {
            Entries::Owned(_) => Ownership::Owning,
            Entries::Borrowed(_) => Ownership::View,
        }
    }

    pub fn owns_children(&self) -> bool {
        self.ownership().is_owning()
    }

    /// Number of pairs, duplicates included.
    pub fn len(&self) -> usize {
        match &self.entries {
            Entries::Owned(entries) => entries.len(),
            Entries::Borrowed(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value of the first pair whose key equals `key`, in insertion order.
    pub fn get(&self, key: &str) -> Option<&Any<'a>> {
        self.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    /// Every value stored under `key`, in insertion order.
    pub fn get_all<'r>(&'r self, key: &'r str) -> impl Iterator<Item = &'r Any<'a>> + 'r {
        self.iter().filter(move |(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.iter().any(|(k, _)| k == key)
    }

    /// Append a pair.
    ///
    /// Existing pairs are never touched, even when `key` is already present;
    /// lookups keep returning the earlier value. Fails only when the child's
    /// ownership does not match the container's.
    pub fn insert(&mut self, key: impl Into<String>, child: impl Into<Child<'a>>) -> Result<()> {
        let container = self.ownership();
        let child: Child<'a> = child.into();
        match (&mut self.entries, child) {
            (Entries::Owned(entries), Child::Owned(value)) => entries.push((key.into(), value)),
            (Entries::Borrowed(entries), Child::Borrowed(value)) => {
                entries.push((key.into(), value))
            }
            (_, child) => {
                tracing::debug!(
                    container = %container,
                    child = %child.ownership(),
                    "rejected keyed insert"
                );
                return Err(AnyError::OwnershipMismatch {
                    container,
                    child: child.ownership(),
                });
            }
        }
        Ok(())
    }

    /// Pairs in insertion order.
    pub fn iter(&self) -> PairsIter<'_, 'a> {
        let inner = match &self.entries {
            Entries::Owned(entries) => PairsIterInner::Owned(entries.iter()),
            Entries::Borrowed(entries) => PairsIterInner::Borrowed(entries.iter()),
        };
        PairsIter { inner }
    }

    pub fn keys<'r>(&'r self) -> impl Iterator<Item = &'r str> + use<'r, 'a> {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &Any<'a>> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Snapshot of the pairs as plain references.
    pub fn to_vec(&self) -> Vec<(&str, &Any<'a>)> {
        self.iter().collect()
    }
}

impl PartialEq for Pairs<'_> {
    /// Pairwise comparison in order; the ownership mode is not part of
    /// equality.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl fmt::Debug for Pairs<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<'r, 'a> IntoIterator for &'r Pairs<'a> {
    type Item = (&'r str, &'r Any<'a>);
    type IntoIter = PairsIter<'r, 'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the pairs of a [`Map`] or [`Ecma`].
pub struct PairsIter<'r, 'a> {
    inner: PairsIterInner<'r, 'a>,
}

enum PairsIterInner<'r, 'a> {
    Owned(slice::Iter<'r, (String, Any<'a>)>),
    Borrowed(slice::Iter<'r, (String, &'a Any<'a>)>),
}

impl<'r, 'a> Iterator for PairsIter<'r, 'a> {
    type Item = (&'r str, &'r Any<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.inner {
            PairsIterInner::Owned(it) => it.next().map(|(k, v)| (k.as_str(), v)),
            PairsIterInner::Borrowed(it) => it.next().map(|(k, v)| (k.as_str(), &**v)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            PairsIterInner::Owned(it) => it.size_hint(),
            PairsIterInner::Borrowed(it) => it.size_hint(),
        }
    }
}

impl ExactSizeIterator for PairsIter<'_, '_> {}

impl FusedIterator for PairsIter<'_, '_> {}

macro_rules! keyed_container {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq)]
        pub struct $name<'a>(Pairs<'a>);

        impl<'a> $name<'a> {
            /// Empty owning container.
            pub fn new() -> Self {
                Self(Pairs::owning())
            }

            /// Empty view; only borrowed children may be inserted.
            pub fn view() -> Self {
                Self(Pairs::view())
            }

            /// Owning container holding `pairs` in the given order.
            pub fn from_pairs<K: Into<String>>(
                pairs: impl IntoIterator<Item = (K, Any<'a>)>,
            ) -> Self {
                Self(Pairs::from_pairs(pairs))
            }

            /// View over values owned elsewhere, keyed in the given order.
            pub fn from_ref_pairs<K: Into<String>>(
                pairs: impl IntoIterator<Item = (K, &'a Any<'a>)>,
            ) -> Self {
                Self(Pairs::from_ref_pairs(pairs))
            }

            /// The shared pair list.
            pub fn pairs(&self) -> &Pairs<'a> {
                &self.0
            }
        }

        impl Default for $name<'_> {
            fn default() -> Self {
                Self::new()
            }
        }

        impl<'a> Deref for $name<'a> {
            type Target = Pairs<'a>;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name<'_> {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(stringify!($name))?;
                fmt::Debug::fmt(&self.0, f)
            }
        }

        impl<'a, K: Into<String>> FromIterator<(K, Any<'a>)> for $name<'a> {
            fn from_iter<T: IntoIterator<Item = (K, Any<'a>)>>(iter: T) -> Self {
                Self::from_pairs(iter)
            }
        }

        impl<'r, 'a> IntoIterator for &'r $name<'a> {
            type Item = (&'r str, &'r Any<'a>);
            type IntoIter = PairsIter<'r, 'a>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

keyed_container! {
    /// Key-value record, tagged [`AnyType::Map`](crate::AnyType::Map).
    Map
}

keyed_container! {
    /// ECMA associative array, tagged [`AnyType::Ecma`](crate::AnyType::Ecma).
    ///
    /// Same shape and lookup rules as [`Map`]. Sparse or duplicated keys are
    /// common in this construct and are kept as they arrive.
    Ecma
}
