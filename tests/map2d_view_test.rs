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

use googletest::assert_that;
use googletest::prelude::eq;
use map2d::Map2D;

fn grid() -> Map2D<u32, char, String> {
    let mut map = Map2D::new();
    for row in 0..5u32 {
        for (i, column) in ['a', 'b', 'c'].into_iter().enumerate() {
            if (row as usize + i) % 2 == 0 {
                map.put(row, column, format!("{row}{column}"));
            }
        }
    }
    map
}

#[test]
fn test_row_view_is_snapshot() {
    let mut map = grid();
    let view = map.row_view(&0);
    let before = view.clone().into_map();

    map.put(0, 'b', "new".to_string());
    map.remove(&0, &'a');
    map.clear();

    assert_eq!(view, before);
    assert_eq!(view.get(&'a').map(String::as_str), Some("0a"));
}

#[test]
fn test_column_view_is_snapshot() {
    let mut map = grid();
    let view = map.column_view(&'b');
    assert_eq!(
        view,
        HashMap::from([(1, "1b".to_string()), (3, "3b".to_string())])
    );
    map.put(0, 'b', "0b".to_string());
    assert_that!(view.len(), eq(2));
    assert_that!(map.column_view(&'b').len(), eq(3));
}

#[test]
fn test_mutating_detached_copy_leaves_map_alone() {
    let map = grid();
    let mut copy = map.row_view(&1).into_map();
    copy.insert('z', "zz".to_string());
    copy.clear();
    assert_eq!(map.row_view(&1).len(), 1);
    assert!(map.contains_key(&1, &'b'));
}

#[test]
fn test_row_map_view_matches_rows() {
    let map = grid();
    let rows = map.row_map_view();
    assert_eq!(rows.len(), 5);
    for (row, cells) in &rows {
        assert_eq!(*cells, map.row_view(row));
        assert!(!cells.is_empty());
    }
    let total: usize = rows.values().map(|cells| cells.len()).sum();
    assert_eq!(total, map.len());
}

#[test]
fn test_column_map_view_is_transpose() {
    let map = grid();
    let rows = map.row_map_view();
    let columns = map.column_map_view();

    for (row, cells) in &rows {
        for (column, value) in cells {
            assert_eq!(&columns[column][row], value);
        }
    }
    for (column, cells) in &columns {
        for (row, value) in cells {
            assert_eq!(&rows[row][column], value);
        }
    }

    let row_cells: usize = rows.values().map(|cells| cells.len()).sum();
    let column_cells: usize = columns.values().map(|cells| cells.len()).sum();
    assert_eq!(row_cells, column_cells);
    assert_eq!(columns.len(), map.column_keys().len());
}

#[test]
fn test_column_map_view_is_snapshot() {
    let mut map = grid();
    let columns = map.column_map_view();
    map.put(9, 'd', "9d".to_string());
    assert!(!columns.contains_key(&'d'));
    assert!(map.column_map_view().contains_key(&'d'));
}

#[test]
fn test_missing_row_and_column_views_are_empty() {
    let map = grid();
    assert!(map.row_view(&99).is_empty());
    assert!(map.column_view(&'q').is_empty());
    assert_eq!(map.row_view(&99), HashMap::new());
}

#[test]
fn test_view_debug_output() {
    let mut map = Map2D::new();
    map.put("a", "x", 1);
    assert_eq!(format!("{:?}", map.row_view("a")), r#"{"x": 1}"#);
    assert_eq!(format!("{:?}", map), r#"{"a": {"x": 1}}"#);
}
