#![allow(missing_docs)]

use std::io::Write;

use mort_ingest::{IngestError, read_mortality_frame, read_mortality_records};
use mort_model::{Cell, SchemeTag};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

const HEADER: &str = "Country,Admin1,SubDiv,Year,List,Cause,Sex,Frmat,IM_Frmat,Deaths1,Deaths2";

#[test]
fn test_reads_required_columns_in_file_order() {
    let file = create_temp_csv(&format!(
        "{HEADER}\n\
         1010,,,2001,104,A009,1,0,8,4,0\n\
         4180,,,2002,UE1,UE64,2,0,8,7,1\n\
         4188,,,2002,101,1006,9,0,8,5,0\n"
    ));
    let records = read_mortality_records(file.path()).unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].country, 1010);
    assert_eq!(records[0].year, 2001);
    assert_eq!(records[0].cause, "A009");
    assert_eq!(records[0].sex, 1);
    assert_eq!(records[0].deaths, 4);
    assert_eq!(records[1].list, Cell::from("UE1"));
    assert_eq!(records[2].sex, 9);
    assert_eq!(records[2].cause, "1006");
}

#[test]
fn test_numeric_list_column_resolves_to_scheme() {
    let file = create_temp_csv(&format!(
        "{HEADER}\n1010,,,2001,103,A00,1,0,8,6,0\n1010,,,2001,104,A009,1,0,8,4,0\n"
    ));
    let records = read_mortality_records(file.path()).unwrap();
    let tags: Vec<_> = records.iter().map(|r| SchemeTag::from_cell(&r.list)).collect();
    assert_eq!(tags, vec![SchemeTag::ThreeChar103, SchemeTag::FourChar104]);
}

#[test]
fn test_numeric_cause_column_is_read_as_text() {
    let file = create_temp_csv(&format!(
        "{HEADER}\n1010,,,2001,101,1002,2,0,8,12,0\n4188,,,2002,101,1006,2,0,8,5,0\n"
    ));
    let records = read_mortality_records(file.path()).unwrap();
    assert_eq!(records[0].cause, "1002");
    assert_eq!(records[1].cause, "1006");
}

#[test]
fn test_header_with_bom() {
    let file = create_temp_csv(&format!("\u{feff}{HEADER}\n1010,,,2001,103,A00,1,0,8,6,0\n"));
    let df = read_mortality_frame(file.path()).unwrap();
    assert_eq!(df.height(), 1);
}

#[test]
fn test_missing_column_is_named() {
    let file = create_temp_csv("Country,Year,List,Cause,Sex\n1010,2001,103,A00,1\n");
    let err = read_mortality_records(file.path()).unwrap_err();
    match err {
        IngestError::MissingColumn { column, .. } => assert_eq!(column, "Deaths1"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_empty_file() {
    let file = create_temp_csv("");
    let err = read_mortality_records(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::EmptyCsv { .. }));
}

#[test]
fn test_file_not_found() {
    let err = read_mortality_records(std::path::Path::new("/nonexistent/Morticd10_part1"))
        .unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn test_blank_deaths_reports_row() {
    let file = create_temp_csv(&format!(
        "{HEADER}\n1010,,,2001,103,A00,1,0,8,6,0\n1010,,,2001,103,A01,1,0,8,,0\n"
    ));
    let err = read_mortality_records(file.path()).unwrap_err();
    match err {
        IngestError::MissingValue { column, row, .. } => {
            assert_eq!(column, "Deaths1");
            assert_eq!(row, 3);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_negative_deaths_rejected() {
    let file = create_temp_csv(&format!("{HEADER}\n1010,,,2001,103,A00,1,0,8,-3,0\n"));
    let err = read_mortality_records(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::InvalidValue { row: 2, .. }));
}

#[test]
fn test_mixed_list_and_cause_after_long_numeric_run() {
    let mut content = format!("{HEADER}\n");
    for _ in 0..150 {
        content.push_str("1010,,,2001,101,1002,1,0,8,1,0\n");
    }
    content.push_str("4080,,,2001,10M,A009,1,0,8,2,0\n");
    content.push_str("4080,,,2001,103,A00,2,0,8,3,0\n");
    let file = create_temp_csv(&content);

    let records = read_mortality_records(file.path()).unwrap();

    assert_eq!(records.len(), 152);
    assert_eq!(SchemeTag::from_cell(&records[0].list), SchemeTag::Condensed101);
    assert_eq!(records[0].cause, "1002");
    assert_eq!(SchemeTag::from_cell(&records[150].list), SchemeTag::TenM);
    assert_eq!(records[150].cause, "A009");
    assert_eq!(SchemeTag::from_cell(&records[151].list), SchemeTag::ThreeChar103);
    assert_eq!(records[151].cause, "A00");
}

#[test]
fn test_cause_codes_are_kept_verbatim() {
    let file = create_temp_csv(&format!("{HEADER}\n1010,,,2001,101,01002,1,0,8,1,0\n"));
    let records = read_mortality_records(file.path()).unwrap();
    assert_eq!(records[0].cause, "01002");
    assert_eq!(records[0].list, Cell::from("101"));
}
