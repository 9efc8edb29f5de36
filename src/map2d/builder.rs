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


use std::fmt;
use std::marker::PhantomData;

use crate::hash::DEFAULT_SEED;
use crate::hash::MurmurHashBuilder;
use crate::map2d::Map2D;

/// Builder for creating [`Map2D`] instances.
///
/// # Examples
///
/// ```
/// use map2d::Map2D;
///
/// let mut map = Map2D::builder()
///     .row_capacity(64)
///     .column_capacity(8)
///     .seed(7)
///     .build();
/// map.put(1u32, 'a', "cell");
/// assert_eq!(map.get(&1, &'a'), Some(&"cell"));
/// ```
pub struct Map2DBuilder<R, C, V> {
    row_capacity: usize,
    column_capacity: usize,
    seed: u32,
    _marker: PhantomData<fn() -> (R, C, V)>,
}

impl<R, C, V> Default for Map2DBuilder<R, C, V> {
    fn default() -> Self {
        Self {
            row_capacity: 0,
            column_capacity: 0,
            seed: DEFAULT_SEED,
            _marker: PhantomData,
        }
    }
}

impl<R, C, V> Clone for Map2DBuilder<R, C, V> {
    fn clone(&self) -> Self {
        Self {
            row_capacity: self.row_capacity,
            column_capacity: self.column_capacity,
            seed: self.seed,
            _marker: PhantomData,
        }
    }
}

impl<R, C, V> fmt::Debug for Map2DBuilder<R, C, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Map2DBuilder")
            .field("row_capacity", &self.row_capacity)
            .field("column_capacity", &self.column_capacity)
            .field("seed", &self.seed)
            .finish()
    }
}

impl<R, C, V> Map2DBuilder<R, C, V> {
    /// Set the number of rows the outer map can hold without reallocating.
    pub fn row_capacity(mut self, capacity: usize) -> Self {
        self.row_capacity = capacity;
        self
    }

    /// Set the number of cells each newly created row can hold without
    /// reallocating.
    pub fn column_capacity(mut self, capacity: usize) -> Self {
        self.column_capacity = capacity;
        self
    }

    /// Set hash seed.
    ///
    /// Maps built with the same seed and filled the same way iterate in the
    /// same order.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Build the map.
    pub fn build(self) -> Map2D<R, C, V> {
        Map2D::with_capacity_and_hasher(
            self.row_capacity,
            self.column_capacity,
            MurmurHashBuilder::with_seed(self.seed),
        )
    }
}
