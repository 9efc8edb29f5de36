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


use std::error::Error as _;

use googletest::assert_that;
use googletest::prelude::contains_substring;
use googletest::prelude::eq;
use map2d::Map2D;
use map2d::error::ErrorKind;

fn sample() -> Map2D<String, u32, i64> {
    let mut map = Map2D::new();
    map.put("r1".to_string(), 1, 10);
    map.put("r1".to_string(), 2, 20);
    map.put("r2".to_string(), 1, 30);
    map
}

#[test]
fn test_identity_copy_is_equal_and_independent() {
    let map = sample();
    let mut copy = map.copy_with_conversion(|r| r.clone(), |c| *c, |v| *v);
    assert_eq!(copy, map);

    copy.put("r3".to_string(), 3, 40);
    copy.remove("r1", &1);
    assert_eq!(map.len(), 3);
    assert_eq!(map.get("r1", &1), Some(&10));
    assert!(!map.contains_row("r3"));
}

#[test]
fn test_conversion_changes_types() {
    let map = sample();
    let copy = map.copy_with_conversion(
        |r| r.trim_start_matches('r').parse::<u8>().unwrap(),
        |c| format!("c{c}"),
        |v| *v as f64 / 10.0,
    );
    assert_eq!(copy.len(), 3);
    assert_eq!(copy.get(&1, "c2"), Some(&2.0));
    assert_eq!(copy.get(&2, "c1"), Some(&3.0));
}

#[test]
fn test_row_collision_merges_rows() {
    let map = sample();
    let copy = map.copy_with_conversion(|_| "all", |c| *c, |v| *v);
    assert_eq!(copy.row_keys().count(), 1);
    assert_eq!(copy.len(), 2);
    assert_eq!(copy.get("all", &2), Some(&20));
    let merged = *copy.get("all", &1).unwrap();
    assert!(merged == 10 || merged == 30);
}

#[test]
fn test_collision_resolution_is_reproducible() {
    let build = || {
        let mut map = Map2D::builder().seed(7).build();
        for row in 0..50 {
            for column in 0..5 {
                map.put(row, column, row * 100 + column);
            }
        }
        map
    };
    let first = build().copy_with_conversion(|r| r % 3, |c| c % 2, |v| *v);
    let second = build().copy_with_conversion(|r| r % 3, |c| c % 2, |v| *v);
    assert_eq!(first, second);
    assert_eq!(first.len(), 6);
}

#[test]
fn test_copy_keeps_hasher() {
    let mut map = Map2D::builder().seed(11).build();
    map.put(1, 1, 1);
    let copy = map.copy_with_conversion(|r| *r, |c| *c, |v| v + 1);
    assert_eq!(copy.hasher(), map.hasher());
}

#[test]
fn test_try_copy_success() {
    let mut map = Map2D::new();
    map.put("1", "a", "10");
    map.put("2", "b", "20");
    let copy = map
        .try_copy_with_conversion(|r| r.parse::<u32>(), |c| Ok(c.to_uppercase()), |v| {
            v.parse::<u32>()
        })
        .unwrap();
    assert_eq!(copy.get(&2, "B"), Some(&20));
}

#[test]
fn test_try_copy_failure() {
    let mut map = Map2D::new();
    map.put("1", "a", "10");
    map.put("2", "b", "not a number");
    let err = map
        .try_copy_with_conversion(|r| r.parse::<u32>(), |c| Ok(*c), |v| v.parse::<u32>())
        .unwrap_err();
    assert_that!(err.kind(), eq(ErrorKind::ConversionFailed));
    assert_that!(err.message(), contains_substring("failed to convert value"));
    assert!(err.source().is_some());
}

#[test]
fn test_try_copy_reports_failing_key() {
    let map = sample();
    let err = map
        .try_copy_with_conversion(
            |r| Ok::<_, anyhow::Error>(r.clone()),
            |c| {
                if *c == 2 {
                    Err(anyhow::anyhow!("column {c} is reserved"))
                } else {
                    Ok(*c)
                }
            },
            |v| Ok(*v),
        )
        .unwrap_err();
    assert_that!(err.message(), contains_substring("column key"));
    assert_that!(err.to_string().as_str(), contains_substring("column 2 is reserved"));
}
