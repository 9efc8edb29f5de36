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
use std::collections::HashSet;
use std::collections::hash_map;
use std::fmt;
use std::hash::BuildHasher;
use std::hash::Hash;

use log::debug;
use log::trace;

use crate::error::Error;
use crate::hash::MurmurHashBuilder;
use crate::map2d::Map2DBuilder;
use crate::map2d::iter::IntoIter;
use crate::map2d::iter::Iter;
use crate::map2d::view::MapView;

/// A map keyed by `(row, column)` pairs.
///
/// See the [module documentation](super) for more details.
#[derive(Clone)]
pub struct Map2D<R, C, V, S = MurmurHashBuilder> {
    // Invariant: no row is ever stored empty.
    pub(super) rows: HashMap<R, HashMap<C, V, S>, S>,
    pub(super) column_capacity: usize,
    pub(super) hash_builder: S,
}

impl<R, C, V> Map2D<R, C, V> {
    /// Creates an empty map with the default hash seed.
    ///
    /// # Examples
    ///
    /// ```
    /// # use map2d::Map2D;
    /// let map: Map2D<String, String, i32> = Map2D::new();
    /// assert!(map.is_empty());
    /// ```
    pub fn new() -> Self {
        Self::with_hasher(MurmurHashBuilder::default())
    }

    /// Create a new builder for Map2D.
    ///
    /// # Examples
    ///
    /// ```
    /// # use map2d::Map2D;
    /// let mut map = Map2D::builder().row_capacity(16).build();
    /// map.put("a", "x", 1);
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn builder() -> Map2DBuilder<R, C, V> {
        Map2DBuilder::default()
    }
}

impl<R, C, V, S: Clone> Map2D<R, C, V, S> {
    /// Creates an empty map which will use the given hash builder for its
    /// rows and for every view it returns.
    pub fn with_hasher(hash_builder: S) -> Self {
        Self::with_capacity_and_hasher(0, 0, hash_builder)
    }

    /// Creates an empty map with room for `row_capacity` rows, where every
    /// row is created with room for `column_capacity` cells.
    pub fn with_capacity_and_hasher(
        row_capacity: usize,
        column_capacity: usize,
        hash_builder: S,
    ) -> Self {
        Map2D {
            rows: HashMap::with_capacity_and_hasher(row_capacity, hash_builder.clone()),
            column_capacity,
            hash_builder,
        }
    }
}

impl<R, C, V, S> Map2D<R, C, V, S> {
    /// Returns a reference to the map's hash builder.
    pub fn hasher(&self) -> &S {
        &self.hash_builder
    }

    /// Returns true if the map holds no cells.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns true if the map holds at least one cell.
    pub fn non_empty(&self) -> bool {
        !self.is_empty()
    }

    /// Returns the number of cells across all rows.
    ///
    /// This walks every row and is O(rows).
    pub fn len(&self) -> usize {
        self.rows.values().map(HashMap::len).sum()
    }

    /// Removes every cell.
    pub fn clear(&mut self) {
        debug!("clearing {} rows", self.rows.len());
        self.rows.clear();
    }

    /// An iterator over all `(row, column, value)` cells, in arbitrary order.
    pub fn iter(&self) -> Iter<'_, R, C, V, S> {
        Iter::new(self.rows.iter(), self.len())
    }

    /// An iterator over the keys of all non-empty rows, in arbitrary order.
    pub fn row_keys(&self) -> hash_map::Keys<'_, R, HashMap<C, V, S>> {
        self.rows.keys()
    }
}

impl<R, C, V, S> Map2D<R, C, V, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Stores `value` at `(row, column)`, creating the row if needed.
    ///
    /// Returns the value previously stored at that address.
    ///
    /// # Examples
    ///
    /// ```
    /// # use map2d::Map2D;
    /// let mut map = Map2D::new();
    /// assert_eq!(map.put("a", "x", 1), None);
    /// assert_eq!(map.put("a", "x", 2), Some(1));
    /// ```
    pub fn put(&mut self, row: R, column: C, value: V) -> Option<V> {
        self.row_mut(row).insert(column, value)
    }

    /// Checked variant of [`put`](Self::put) for keys that may be absent.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if either key is `None`. The map is left unchanged.
    pub fn try_put(
        &mut self,
        row: Option<R>,
        column: Option<C>,
        value: V,
    ) -> Result<Option<V>, Error> {
        let row = row.ok_or_else(|| Error::absent_key("row"))?;
        let column = column.ok_or_else(|| Error::absent_key("column"))?;
        Ok(self.put(row, column, value))
    }

    /// Returns the value stored at `(row, column)`.
    pub fn get<QR, QC>(&self, row: &QR, column: &QC) -> Option<&V>
    where
        R: Borrow<QR>,
        QR: Hash + Eq + ?Sized,
        C: Borrow<QC>,
        QC: Hash + Eq + ?Sized,
    {
        self.rows.get(row)?.get(column)
    }

    /// Returns the value stored at `(row, column)`, or `default` if there is
    /// none.
    pub fn get_or_default<'a, QR, QC>(&'a self, row: &QR, column: &QC, default: &'a V) -> &'a V
    where
        R: Borrow<QR>,
        QR: Hash + Eq + ?Sized,
        C: Borrow<QC>,
        QC: Hash + Eq + ?Sized,
    {
        self.get(row, column).unwrap_or(default)
    }

    /// Removes and returns the value stored at `(row, column)`.
    ///
    /// A row whose last cell is removed is dropped from the map.
    pub fn remove<QR, QC>(&mut self, row: &QR, column: &QC) -> Option<V>
    where
        R: Borrow<QR>,
        QR: Hash + Eq + ?Sized,
        C: Borrow<QC>,
        QC: Hash + Eq + ?Sized,
    {
        let cells = self.rows.get_mut(row)?;
        let removed = cells.remove(column);
        if cells.is_empty() {
            self.rows.remove(row);
            trace!("dropped empty row, {} rows left", self.rows.len());
        }
        removed
    }

    /// Returns true if any cell holds a value equal to `value`.
    ///
    /// Compares with [`PartialEq`] and scans every cell in the worst case.
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.rows
            .values()
            .any(|cells| cells.values().any(|v| v == value))
    }

    /// Returns true if a value is stored at `(row, column)`.
    pub fn contains_key<QR, QC>(&self, row: &QR, column: &QC) -> bool
    where
        R: Borrow<QR>,
        QR: Hash + Eq + ?Sized,
        C: Borrow<QC>,
        QC: Hash + Eq + ?Sized,
    {
        self.rows
            .get(row)
            .is_some_and(|cells| cells.contains_key(column))
    }

    /// Returns true if the row holds at least one cell.
    pub fn contains_row<Q>(&self, row: &Q) -> bool
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.rows.get(row).is_some_and(|cells| !cells.is_empty())
    }

    /// Returns true if any row holds a cell in `column`. O(rows).
    pub fn contains_column<Q>(&self, column: &Q) -> bool
    where
        C: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.rows.values().any(|cells| cells.contains_key(column))
    }

    /// Returns the distinct column keys in use. O(total cells).
    pub fn column_keys(&self) -> HashSet<&C, S> {
        let mut columns = HashSet::with_hasher(self.hash_builder.clone());
        for cells in self.rows.values() {
            columns.extend(cells.keys());
        }
        columns
    }

    /// Returns a snapshot of one row as `column -> value`.
    ///
    /// The view is empty if the row does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// # use map2d::Map2D;
    /// let mut map = Map2D::new();
    /// map.put("a", "x", 1);
    /// let view = map.row_view("a");
    /// map.put("a", "y", 2);
    /// assert_eq!(view.len(), 1);
    /// assert_eq!(view.get("x"), Some(&1));
    /// ```
    pub fn row_view<Q>(&self, row: &Q) -> MapView<C, V, S>
    where
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        C: Clone,
        V: Clone,
    {
        match self.rows.get(row) {
            Some(cells) => MapView::new(cells.clone()),
            None => MapView::new(HashMap::with_hasher(self.hash_builder.clone())),
        }
    }

    /// Returns a snapshot of one column as `row -> value`. O(rows).
    ///
    /// The view is empty if no row has a cell in `column`.
    pub fn column_view<Q>(&self, column: &Q) -> MapView<R, V, S>
    where
        C: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        R: Clone,
        V: Clone,
    {
        let mut cells: HashMap<R, V, S> = HashMap::with_hasher(self.hash_builder.clone());
        self.fill_map_from_column(&mut cells, column);
        MapView::new(cells)
    }

    /// Returns a snapshot of the whole map as `row -> column -> value`.
    pub fn row_map_view(&self) -> MapView<R, MapView<C, V, S>, S>
    where
        R: Clone,
        C: Clone,
        V: Clone,
    {
        let mut rows: HashMap<R, MapView<C, V, S>, S> =
            HashMap::with_capacity_and_hasher(self.rows.len(), self.hash_builder.clone());
        rows.extend(
            self.rows
                .iter()
                .map(|(row, cells)| (row.clone(), MapView::new(cells.clone()))),
        );
        MapView::new(rows)
    }

    /// Returns a transposed snapshot of the whole map as
    /// `column -> row -> value`.
    ///
    /// No column index is kept, so this copies every cell.
    ///
    /// # Examples
    ///
    /// ```
    /// # use map2d::Map2D;
    /// let mut map = Map2D::new();
    /// map.put("a", "x", 1);
    /// map.put("b", "x", 3);
    /// let columns = map.column_map_view();
    /// assert_eq!(columns.len(), 1);
    /// assert_eq!(columns["x"]["b"], 3);
    /// ```
    pub fn column_map_view(&self) -> MapView<C, MapView<R, V, S>, S>
    where
        R: Clone,
        C: Clone,
        V: Clone,
    {
        let mut columns: HashMap<C, HashMap<R, V, S>, S> =
            HashMap::with_hasher(self.hash_builder.clone());
        for (row, cells) in &self.rows {
            for (column, value) in cells {
                columns
                    .entry(column.clone())
                    .or_insert_with(|| HashMap::with_hasher(self.hash_builder.clone()))
                    .insert(row.clone(), value.clone());
            }
        }

        let mut transposed: HashMap<C, MapView<R, V, S>, S> =
            HashMap::with_capacity_and_hasher(columns.len(), self.hash_builder.clone());
        transposed.extend(
            columns
                .into_iter()
                .map(|(column, rows)| (column, MapView::new(rows))),
        );
        MapView::new(transposed)
    }

    /// Copies every `(column, value)` of `row` into `target`.
    ///
    /// Entries already in `target` are kept unless overwritten. Does nothing
    /// if the row does not exist.
    pub fn fill_map_from_row<T, Q>(&self, target: &mut T, row: &Q) -> &Self
    where
        T: Extend<(C, V)>,
        R: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        C: Clone,
        V: Clone,
    {
        if let Some(cells) = self.rows.get(row) {
            target.extend(cells.iter().map(|(c, v)| (c.clone(), v.clone())));
        }
        self
    }

    /// Copies every `(row, value)` of `column` into `target`. O(rows).
    pub fn fill_map_from_column<T, Q>(&self, target: &mut T, column: &Q) -> &Self
    where
        T: Extend<(R, V)>,
        C: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        R: Clone,
        V: Clone,
    {
        target.extend(self.rows.iter().filter_map(|(row, cells)| {
            cells.get(column).map(|v| (row.clone(), v.clone()))
        }));
        self
    }

    /// Merges every cell of `other` into this map; incoming values win.
    pub fn put_all<S2>(&mut self, other: &Map2D<R, C, V, S2>) -> &mut Self
    where
        R: Clone,
        C: Clone,
        V: Clone,
    {
        for (row, cells) in &other.rows {
            self.row_mut(row.clone())
                .extend(cells.iter().map(|(c, v)| (c.clone(), v.clone())));
        }
        self
    }

    /// Stores every `(column, value)` of `source` in `row`; incoming values
    /// win.
    ///
    /// An empty `source` leaves the map unchanged and does not create the
    /// row.
    ///
    /// # Examples
    ///
    /// ```
    /// # use std::collections::HashMap;
    /// # use map2d::Map2D;
    /// let mut map = Map2D::new();
    /// map.put_all_to_row(HashMap::from([("p", 10), ("q", 20)]), "z");
    /// assert_eq!(map.row_view("z"), HashMap::from([("p", 10), ("q", 20)]));
    /// ```
    pub fn put_all_to_row<I>(&mut self, source: I, row: R) -> &mut Self
    where
        I: IntoIterator<Item = (C, V)>,
    {
        let mut source = source.into_iter().peekable();
        if source.peek().is_some() {
            self.row_mut(row).extend(source);
        }
        self
    }

    /// Checked variant of [`put_all_to_row`](Self::put_all_to_row).
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if `row` or any column key is `None`. The map is left unchanged.
    pub fn try_put_all_to_row<I>(&mut self, source: I, row: Option<R>) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = (Option<C>, V)>,
    {
        let row = row.ok_or_else(|| Error::absent_key("row"))?;
        let cells = collect_present(source, "column")?;
        Ok(self.put_all_to_row(cells, row))
    }

    /// Stores every `(row, value)` of `source` in `column`, one
    /// [`put`](Self::put) per entry.
    pub fn put_all_to_column<I>(&mut self, source: I, column: C) -> &mut Self
    where
        I: IntoIterator<Item = (R, V)>,
        C: Clone,
    {
        for (row, value) in source {
            self.put(row, column.clone(), value);
        }
        self
    }

    /// Checked variant of [`put_all_to_column`](Self::put_all_to_column).
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
    /// if `column` or any row key is `None`. The map is left unchanged.
    pub fn try_put_all_to_column<I>(
        &mut self,
        source: I,
        column: Option<C>,
    ) -> Result<&mut Self, Error>
    where
        I: IntoIterator<Item = (Option<R>, V)>,
        C: Clone,
    {
        let column = column.ok_or_else(|| Error::absent_key("column"))?;
        let cells = collect_present(source, "row")?;
        Ok(self.put_all_to_column(cells, column))
    }

    /// Returns the cells of `row`, creating the row if it does not exist.
    ///
    /// Callers must store at least one cell in a row this creates.
    pub(super) fn row_mut(&mut self, row: R) -> &mut HashMap<C, V, S> {
        let column_capacity = self.column_capacity;
        let hash_builder = &self.hash_builder;
        self.rows.entry(row).or_insert_with(|| {
            trace!("creating row");
            HashMap::with_capacity_and_hasher(column_capacity, hash_builder.clone())
        })
    }
}

/// Unwraps every key of `source`, failing on the first absent one.
fn collect_present<K, V, I>(source: I, which: &'static str) -> Result<Vec<(K, V)>, Error>
where
    I: IntoIterator<Item = (Option<K>, V)>,
{
    source
        .into_iter()
        .enumerate()
        .map(|(index, (key, value))| match key {
            Some(key) => Ok((key, value)),
            None => Err(Error::absent_key(which).with_context("index", index)),
        })
        .collect()
}

impl<R, C, V, S: Default + Clone> Default for Map2D<R, C, V, S> {
    fn default() -> Self {
        Self::with_hasher(S::default())
    }
}

impl<R: fmt::Debug, C: fmt::Debug, V: fmt::Debug, S> fmt::Debug for Map2D<R, C, V, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.rows.iter()).finish()
    }
}

impl<R, C, V, S> PartialEq for Map2D<R, C, V, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    V: PartialEq,
    S: BuildHasher,
{
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
    }
}

impl<R, C, V, S> Eq for Map2D<R, C, V, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    V: Eq,
    S: BuildHasher,
{
}

impl<R, C, V, S> Extend<(R, C, V)> for Map2D<R, C, V, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    S: BuildHasher + Clone,
{
    fn extend<I: IntoIterator<Item = (R, C, V)>>(&mut self, iter: I) {
        for (row, column, value) in iter {
            self.put(row, column, value);
        }
    }
}

impl<R, C, V, S> FromIterator<(R, C, V)> for Map2D<R, C, V, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    S: BuildHasher + Clone + Default,
{
    fn from_iter<I: IntoIterator<Item = (R, C, V)>>(iter: I) -> Self {
        let mut map = Self::default();
        map.extend(iter);
        map
    }
}

impl<'a, R, C, V, S> IntoIterator for &'a Map2D<R, C, V, S> {
    type Item = (&'a R, &'a C, &'a V);
    type IntoIter = Iter<'a, R, C, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<R: Clone, C, V, S> IntoIterator for Map2D<R, C, V, S> {
    type Item = (R, C, V);
    type IntoIter = IntoIter<R, C, V, S>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.rows.into_iter())
    }
}
