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


//! A two-dimensional map keyed by `(row, column)` pairs.
//!
//! [`Map2D`] stores its cells as a map from row key to a map from column key
//! to value. A row exists only while it holds at least one cell: it is created
//! by the first write into it and dropped when its last cell is removed.
//!
//! # Row and column access
//!
//! There is no column index. Operations addressed by row (`row_view`,
//! `contains_row`, `fill_map_from_row`) cost one lookup plus the size of the
//! row; operations addressed by column (`column_view`, `contains_column`,
//! `fill_map_from_column`) visit every row. [`Map2D::column_map_view`]
//! transposes the whole map and is the most expensive read.
//!
//! # Views
//!
//! Every view is a [`MapView`]: an owned, read-only snapshot taken when the
//! view is requested. Changing the map afterwards does not change the view.
//!
//! # Usage
//!
//! ```rust
//! # use std::collections::HashMap;
//! # use map2d::Map2D;
//! let mut map = Map2D::new();
//! map.put("a", "x", 1);
//! map.put("a", "y", 2);
//! map.put("b", "x", 3);
//!
//! assert_eq!(map.len(), 3);
//! assert_eq!(map.get("a", "x"), Some(&1));
//! assert_eq!(map.column_view("x"), HashMap::from([("a", 1), ("b", 3)]));
//! assert_eq!(map.row_view("a"), HashMap::from([("x", 1), ("y", 2)]));
//!
//! assert_eq!(map.remove("a", "y"), Some(2));
//! map.remove("a", "x");
//! assert!(!map.contains_row("a"));
//! ```
//!
//! # Absent keys
//!
//! Reads return `Option`, an empty view or `false` for addresses that hold
//! nothing. Plain writes take owned keys. The `try_*` writes accept `Option`
//! keys and reject `None` with [`ErrorKind::InvalidArgument`](crate::error::ErrorKind::InvalidArgument)
//! before changing anything.

mod builder;
mod conversion;
mod iter;
mod map;
mod view;

pub use self::builder::Map2DBuilder;
pub use self::iter::IntoIter;
pub use self::iter::Iter;
pub use self::map::Map2D;
pub use self::view::MapView;
