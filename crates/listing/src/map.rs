//! Insertion-ordered mapping from normalized path to attributes.

use std::fmt;

use attributes::FileAttributes;
use rustc_hash::{FxBuildHasher, FxHashMap};

/// Ordered map of listing entries keyed by normalized path.
///
/// Iteration follows first insertion. Inserting an existing key replaces its
/// value in place, so a path keeps the position of its first appearance.
#[derive(Clone, Default)]
pub struct AttributeMap {
    entries: Vec<(String, FileAttributes)>,
    index: FxHashMap<String, usize>,
}

impl AttributeMap {
    /// Creates an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty map with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, FxBuildHasher),
        }
    }

    /// Inserts `attrs` under `path`, returning the value it replaced.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        attrs: FileAttributes,
    ) -> Option<FileAttributes> {
        let path = path.into();
        if let Some(&slot) = self.index.get(&path) {
            return Some(std::mem::replace(&mut self.entries[slot].1, attrs));
        }
        self.index.insert(path.clone(), self.entries.len());
        self.entries.push((path, attrs));
        None
    }

    /// Returns the attributes stored for `path`.
    pub fn get(&self, path: &str) -> Option<&FileAttributes> {
        self.index.get(path).map(|&slot| &self.entries[slot].1)
    }

    /// Returns a mutable reference to the attributes stored for `path`.
    pub fn get_mut(&mut self, path: &str) -> Option<&mut FileAttributes> {
        let slot = *self.index.get(path)?;
        Some(&mut self.entries[slot].1)
    }

    /// Returns `true` when `path` has an entry.
    pub fn contains_key(&self, path: &str) -> bool {
        self.index.contains_key(path)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Iterates paths in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(path, _)| path.as_str())
    }

    /// Iterates attributes in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &FileAttributes> {
        self.entries.iter().map(|(_, attrs)| attrs)
    }
}

impl fmt::Debug for AttributeMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl PartialEq for AttributeMap {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for AttributeMap {}

/// Borrowing iterator over an [`AttributeMap`].
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (String, FileAttributes)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, &'a FileAttributes);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(path, attrs)| (path.as_str(), attrs))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a AttributeMap {
    type Item = (&'a str, &'a FileAttributes);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for AttributeMap {
    type Item = (String, FileAttributes);
    type IntoIter = std::vec::IntoIter<(String, FileAttributes)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, FileAttributes)> for AttributeMap {
    fn from_iter<I: IntoIterator<Item = (K, FileAttributes)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Into<String>> Extend<(K, FileAttributes)> for AttributeMap {
    fn extend<I: IntoIterator<Item = (K, FileAttributes)>>(&mut self, iter: I) {
        for (path, attrs) in iter {
            self.insert(path, attrs);
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use super::AttributeMap;
    use attributes::FileAttributes;
    use serde::de::{MapAccess, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt;

    impl Serialize for AttributeMap {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_map(self.iter())
        }
    }

    struct MapVisitor;

    impl<'de> Visitor<'de> for MapVisitor {
        type Value = AttributeMap;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of paths to file attributes")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
            let mut map = AttributeMap::with_capacity(access.size_hint().unwrap_or(0));
            while let Some((path, attrs)) = access.next_entry::<String, FileAttributes>()? {
                map.insert(path, attrs);
            }
            Ok(map)
        }
    }

    impl<'de> Deserialize<'de> for AttributeMap {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_map(MapVisitor)
        }
    }
}
