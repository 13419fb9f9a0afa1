//! Tests for CSV table parsing

use circaview::dataset::table::parse_cell;
use circaview::dataset::{parse_table, Table};
use circaview::error::LoadError;

#[test]
fn test_header_becomes_subject_ids() {
    let table = parse_table("m1,m2,m3\n36.1,36.2,36.3\n").expect("valid table");
    assert_eq!(table.columns, vec!["m1", "m2", "m3"]);
    assert_eq!(table.column_count(), 3);
    assert_eq!(table.row_count(), 1);
}

#[test]
fn test_cells_that_are_not_numbers_are_missing() {
    for cell in ["", "  ", "NaN", "nan", "inf", "-", "abc", "\"\""] {
        assert_eq!(parse_cell(cell), None, "cell {:?}", cell);
    }
    assert_eq!(parse_cell(" 36.75 "), Some(36.75));
    assert_eq!(parse_cell("\"12\""), Some(12.0));
    assert_eq!(parse_cell("-3"), Some(-3.0));
}

#[test]
fn test_column_keeps_missing_positions() {
    let table = parse_table("m1,m2\n1,\n,2\n3,4\n").expect("valid table");
    assert_eq!(table.column(0), vec![Some(1.0), None, Some(3.0)]);
    assert_eq!(table.column(1), vec![None, Some(2.0), Some(4.0)]);
}

#[test]
fn test_ragged_rows_are_normalised() {
    let table = parse_table("a,b\n1\n1,2,3\n").expect("valid table");
    assert!(table.rows.iter().all(|row| row.len() == 2));
    assert_eq!(table.rows[0], vec![Some(1.0), None]);
    assert_eq!(table.rows[1], vec![Some(1.0), Some(2.0)]);
}

#[test]
fn test_bom_and_blank_lines() {
    let table = parse_table("\u{feff}f1,f2\r\n\r\n37,38\r\n\n").expect("valid table");
    assert_eq!(table.columns, vec!["f1", "f2"]);
    assert_eq!(table.rows, vec![vec![Some(37.0), Some(38.0)]]);
}

#[test]
fn test_header_only_table_has_no_rows() {
    let table = parse_table("m1,m2\n").expect("valid table");
    assert_eq!(
        table,
        Table {
            columns: vec!["m1".into(), "m2".into()],
            rows: vec![],
        }
    );
}

#[test]
fn test_empty_input_is_rejected() {
    assert!(matches!(parse_table(""), Err(LoadError::EmptyTable { .. })));
    assert!(matches!(parse_table("\n\n"), Err(LoadError::EmptyTable { .. })));
    assert!(matches!(parse_table(",,\n1,2,3"), Err(LoadError::EmptyTable { .. })));
}
