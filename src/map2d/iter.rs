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


use std::collections::HashMap;
use std::collections::hash_map;
use std::iter::FusedIterator;

/// An iterator over the cells of a [`Map2D`](super::Map2D).
///
/// Yields `(row, column, value)` triples, row by row, in arbitrary order.
#[derive(Debug, Clone)]
pub struct Iter<'a, R, C, V, S> {
    rows: hash_map::Iter<'a, R, HashMap<C, V, S>>,
    current: Option<(&'a R, hash_map::Iter<'a, C, V>)>,
    remaining: usize,
}

impl<'a, R, C, V, S> Iter<'a, R, C, V, S> {
    pub(super) fn new(
        rows: hash_map::Iter<'a, R, HashMap<C, V, S>>,
        remaining: usize,
    ) -> Self {
        Self {
            rows,
            current: None,
            remaining,
        }
    }
}

impl<'a, R, C, V, S> Iterator for Iter<'a, R, C, V, S> {
    type Item = (&'a R, &'a C, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((row, cells)) = &mut self.current {
                if let Some((column, value)) = cells.next() {
                    self.remaining -= 1;
                    return Some((*row, column, value));
                }
            }
            let (row, cells) = self.rows.next()?;
            self.current = Some((row, cells.iter()));
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R, C, V, S> ExactSizeIterator for Iter<'_, R, C, V, S> {}

impl<R, C, V, S> FusedIterator for Iter<'_, R, C, V, S> {}

/// An owning iterator over the cells of a [`Map2D`](super::Map2D).
///
/// The row key is cloned once per cell of its row.
#[derive(Debug)]
pub struct IntoIter<R, C, V, S> {
    rows: hash_map::IntoIter<R, HashMap<C, V, S>>,
    current: Option<(R, hash_map::IntoIter<C, V>)>,
}

impl<R, C, V, S> IntoIter<R, C, V, S> {
    pub(super) fn new(rows: hash_map::IntoIter<R, HashMap<C, V, S>>) -> Self {
        Self {
            rows,
            current: None,
        }
    }
}

impl<R: Clone, C, V, S> Iterator for IntoIter<R, C, V, S> {
    type Item = (R, C, V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((row, cells)) = &mut self.current {
                if let Some((column, value)) = cells.next() {
                    return Some((row.clone(), column, value));
                }
            }
            let (row, cells) = self.rows.next()?;
            self.current = Some((row, cells.into_iter()));
        }
    }
}

impl<R: Clone, C, V, S> FusedIterator for IntoIter<R, C, V, S> {}
