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


use std::convert::Infallible;
use std::hash::BuildHasher;
use std::hash::Hash;

use log::debug;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::map2d::Map2D;

impl<R, C, V, S> Map2D<R, C, V, S>
where
    R: Eq + Hash,
    C: Eq + Hash,
    S: BuildHasher + Clone,
{
    /// Builds a new, independent map by converting every row key, column key
    /// and value.
    ///
    /// Cells are visited row by row in the map's iteration order. When the
    /// conversions map two cells to the same address, the cell visited last
    /// wins. With the default hasher that order is fixed by the seed and the
    /// sequence of operations that filled the map, so the outcome is
    /// reproducible.
    ///
    /// # Examples
    ///
    /// ```
    /// # use map2d::Map2D;
    /// let mut map = Map2D::new();
    /// map.put(1, 'x', 10);
    /// let copy = map.copy_with_conversion(|r| r.to_string(), |c| *c as u32, |v| v * 2);
    /// assert_eq!(copy.get("1", &120), Some(&20));
    /// ```
    pub fn copy_with_conversion<R2, C2, V2, FR, FC, FV>(
        &self,
        mut row_fn: FR,
        mut column_fn: FC,
        mut value_fn: FV,
    ) -> Map2D<R2, C2, V2, S>
    where
        R2: Eq + Hash,
        C2: Eq + Hash,
        FR: FnMut(&R) -> R2,
        FC: FnMut(&C) -> C2,
        FV: FnMut(&V) -> V2,
    {
        let converted = self.convert(
            |row| Ok::<_, Infallible>(row_fn(row)),
            |column| Ok(column_fn(column)),
            |value| Ok(value_fn(value)),
        );
        match converted {
            Ok(map) => map,
            Err((_, never)) => match never {},
        }
    }

    /// Fallible variant of [`copy_with_conversion`](Self::copy_with_conversion).
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::ConversionFailed`] carrying the first conversion
    /// failure as its source. No partially converted map is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// # use map2d::Map2D;
    /// # use map2d::error::ErrorKind;
    /// let mut map = Map2D::new();
    /// map.put("1", "x", "2");
    /// map.put("2", "x", "oops");
    /// let err = map
    ///     .try_copy_with_conversion(|r| r.parse::<u8>(), |c| Ok(*c), |v| v.parse::<u8>())
    ///     .unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::ConversionFailed);
    /// ```
    pub fn try_copy_with_conversion<R2, C2, V2, E, FR, FC, FV>(
        &self,
        row_fn: FR,
        column_fn: FC,
        value_fn: FV,
    ) -> Result<Map2D<R2, C2, V2, S>, Error>
    where
        R2: Eq + Hash,
        C2: Eq + Hash,
        E: Into<anyhow::Error>,
        FR: FnMut(&R) -> Result<R2, E>,
        FC: FnMut(&C) -> Result<C2, E>,
        FV: FnMut(&V) -> Result<V2, E>,
    {
        self.convert(row_fn, column_fn, value_fn)
            .map_err(|(target, err)| {
                Error::new(
                    ErrorKind::ConversionFailed,
                    format!("failed to convert {target}"),
                )
                .set_source(err)
            })
    }

    fn convert<R2, C2, V2, E, FR, FC, FV>(
        &self,
        mut row_fn: FR,
        mut column_fn: FC,
        mut value_fn: FV,
    ) -> Result<Map2D<R2, C2, V2, S>, (&'static str, E)>
    where
        R2: Eq + Hash,
        C2: Eq + Hash,
        FR: FnMut(&R) -> Result<R2, E>,
        FC: FnMut(&C) -> Result<C2, E>,
        FV: FnMut(&V) -> Result<V2, E>,
    {
        let mut converted = Map2D::with_capacity_and_hasher(
            self.rows.len(),
            self.column_capacity,
            self.hash_builder.clone(),
        );
        let mut collisions = 0usize;

        for (row, cells) in &self.rows {
            let new_row = row_fn(row).map_err(|err| ("row key", err))?;
            // the source row is non-empty, so the target row gets at least one cell
            let target = converted.row_mut(new_row);
            for (column, value) in cells {
                let new_column = column_fn(column).map_err(|err| ("column key", err))?;
                let new_value = value_fn(value).map_err(|err| ("value", err))?;
                if target.insert(new_column, new_value).is_some() {
                    collisions += 1;
                }
            }
        }

        if collisions > 0 {
            debug!("key conversion merged {collisions} colliding cells");
        }
        Ok(converted)
    }
}
