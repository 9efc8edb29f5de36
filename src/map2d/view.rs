// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.


use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map;
use std::fmt;
use std::hash::BuildHasher;
use std::hash::Hash;
use std::ops::Index;

use crate::hash::MurmurHashBuilder;

/// A read-only snapshot of one dimension of a [`Map2D`](super::Map2D).
///
/// A view owns a copy of the entries it was built from. Later changes to the
/// source map are not visible through it, and it has no methods that change
/// its contents:
///
/// ```compile_fail
/// # use map2d::Map2D;
/// let mut map = Map2D::new();
/// map.put("a", "x", 1);
/// let mut view = map.row_view("a");
/// view.insert("y", 2);
/// ```
///
/// Use [`MapView::into_map`] to take ownership of a mutable copy.
#[derive(Clone)]
pub struct MapView<K, V, S = MurmurHashBuilder> {
    entries: HashMap<K, V, S>,
}

impl<K, V, S> MapView<K, V, S> {
    pub(crate) fn new(entries: HashMap<K, V, S>) -> Self {
        Self { entries }
    }

    /// Returns the number of entries in the view.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the view has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// An iterator over the entries, in arbitrary order.
    pub fn iter(&self) -> hash_map::Iter<'_, K, V> {
        self.entries.iter()
    }

    /// An iterator over the keys, in arbitrary order.
    pub fn keys(&self) -> hash_map::Keys<'_, K, V> {
        self.entries.keys()
    }

    /// An iterator over the values, in arbitrary order.
    pub fn values(&self) -> hash_map::Values<'_, K, V> {
        self.entries.values()
    }

    /// Consumes the view, returning its entries as an ordinary, mutable map.
    pub fn into_map(self) -> HashMap<K, V, S> {
        self.entries
    }
}

impl<K, V, S> MapView<K, V, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    /// Returns the value stored under `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.get(key)
    }

    /// Returns true if the view has an entry for `key`.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.entries.contains_key(key)
    }
}

impl<K, Q, V, S> Index<&Q> for MapView<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    /// # Panics
    ///
    /// Panics if the key is not present in the view.
    fn index(&self, key: &Q) -> &V {
        self.get(key).expect("no entry found for key")
    }
}

impl<K: fmt::Debug, V: fmt::Debug, S> fmt::Debug for MapView<K, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries.iter()).finish()
    }
}

impl<K, V, S, S2> PartialEq<MapView<K, V, S2>> for MapView<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &MapView<K, V, S2>) -> bool {
        self == &other.entries
    }
}

impl<K, V, S> Eq for MapView<K, V, S>
where
    K: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<K, V, S, S2> PartialEq<HashMap<K, V, S2>> for MapView<K, V, S>
where
    K: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
    S2: BuildHasher,
{
    fn eq(&self, other: &HashMap<K, V, S2>) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(key, value)| other.get(key).is_some_and(|v| value == v))
    }
}

impl<'a, K, V, S> IntoIterator for &'a MapView<K, V, S> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<K, V, S> IntoIterator for MapView<K, V, S> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view() -> MapView<&'static str, i32> {
        let mut entries = HashMap::with_hasher(MurmurHashBuilder::default());
        entries.insert("x", 1);
        entries.insert("y", 2);
        MapView::new(entries)
    }

    #[test]
    fn test_lookup() {
        let view = view();
        assert_eq!(view.len(), 2);
        assert!(!view.is_empty());
        assert_eq!(view.get("x"), Some(&1));
        assert_eq!(view.get("z"), None);
        assert!(view.contains_key("y"));
        assert_eq!(view["y"], 2);
    }

    #[test]
    #[should_panic(expected = "no entry found for key")]
    fn test_index_missing_panics() {
        let _ = view()["z"];
    }

    #[test]
    fn test_eq_ignores_hasher() {
        let expected = HashMap::from([("x", 1), ("y", 2)]);
        assert_eq!(view(), expected);
        assert_ne!(view(), HashMap::from([("x", 1)]));
        assert_ne!(view(), HashMap::from([("x", 1), ("y", 3)]));
        assert_eq!(view(), view());
    }

    #[test]
    fn test_into_map_is_detached() {
        let view = view();
        let mut copy = view.clone().into_map();
        copy.insert("z", 3);
        assert_eq!(view.len(), 2);
        assert_eq!(copy.len(), 3);
    }
}
