//! Tests for reshaping tables into per-subject series

use circaview::dataset::{flatten, parse_table, transform, Sample};
use circaview::state::Sex;

use crate::common::series;

#[test]
fn test_one_series_per_column_in_header_order() {
    let table = parse_table("m1,m2\n1,4\n2,\n3,6\n").expect("valid table");
    let series = transform(&table, Sex::Male);

    assert_eq!(series.len(), 2);
    assert_eq!(series[0].id, "m1");
    assert_eq!(series[1].id, "m2");
    assert!(series.iter().all(|s| s.sex == Sex::Male));
    assert_eq!(
        series[1].samples,
        vec![
            Sample { time: 0, value: Some(4.0) },
            Sample { time: 1, value: None },
            Sample { time: 2, value: Some(6.0) },
        ]
    );
}

#[test]
fn test_time_is_the_row_index() {
    let table = parse_table("f1\n10\n20\n30\n40\n").expect("valid table");
    let series = transform(&table, Sex::Female);
    let times: Vec<u32> = series[0].samples.iter().map(|s| s.time).collect();
    assert_eq!(times, vec![0, 1, 2, 3]);
}

#[test]
fn test_flatten_inverts_transform() {
    let table = parse_table("f1,f2,f3\n37.1,,36.9\n,37.4,\n37.3,37.5,37.0\n").expect("valid table");
    let round_trip = flatten(&transform(&table, Sex::Female));
    assert_eq!(round_trip, table);
}

#[test]
fn test_values_skip_missing() {
    let s = series("m1", Sex::Male, &[Some(1.0), None, Some(3.0)]);
    assert_eq!(s.values().collect::<Vec<_>>(), vec![1.0, 3.0]);
}

#[test]
fn test_all_missing_series_has_no_segments() {
    let s = series("m1", Sex::Male, &[None, None]);
    assert!(s.segments().is_empty());
    assert_eq!(s.values().count(), 0);
}

#[test]
fn test_clip_outside_range_is_empty() {
    let s = series("m1", Sex::Male, &[Some(1.0), Some(2.0), Some(3.0)]);
    assert!(s.clipped(10, 20).samples.is_empty());
    assert_eq!(s.clipped(-5, 0).samples.len(), 1);
    assert_eq!(s.clipped(0, 2), s);
}
