#![allow(missing_docs)]

use std::fs;

use mort_model::{AggregateKey, AggregatedTable, Sex};
use mort_output::{CsvSink, MemorySink, OutputError, Sink};
use tempfile::TempDir;

fn table(rows: &[(Option<&str>, i32, Option<&str>, Option<Sex>, i64)]) -> AggregatedTable {
    rows.iter()
        .map(|&(country, year, cause, sex, deaths)| {
            (
                AggregateKey {
                    country: country.map(str::to_string),
                    year,
                    cause: cause.map(str::to_string),
                    sex,
                },
                deaths,
            )
        })
        .collect()
}

#[test]
fn test_new_file_gets_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out/mortality.csv");
    let mut sink = CsvSink::append_to(&path);

    let written = sink
        .append(&table(&[(Some("Algeria"), 2001, Some("Cholera"), Some(Sex::Female), 12)]))
        .unwrap();

    assert_eq!(written, 1);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "country,year,cause,sex,deaths\nAlgeria,2001,Cholera,f,12\n"
    );
}

#[test]
fn test_second_append_has_no_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mortality.csv");
    let mut sink = CsvSink::append_to(&path);

    sink.append(&table(&[(Some("Algeria"), 2001, Some("Cholera"), Some(Sex::Female), 12)]))
        .unwrap();
    sink.append(&table(&[(Some("Italy"), 2002, Some("Plague"), Some(Sex::Male), 4)]))
        .unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(contents.matches("country,year").count(), 1);
    assert!(contents.ends_with("Italy,2002,Plague,m,4\n"));
}

#[test]
fn test_existing_rows_are_kept() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mortality.csv");
    fs::write(&path, "country,year,cause,sex,deaths\nFrance,2001,Schistosomiasis,m,14\n").unwrap();

    CsvSink::append_to(&path)
        .append(&table(&[(Some("Italy"), 2002, Some("Plague"), Some(Sex::Male), 4)]))
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap().lines().count(), 3);
}

#[test]
fn test_replace_truncates_once() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mortality.csv");
    fs::write(&path, "country,year,cause,sex,deaths\nFrance,2001,Schistosomiasis,m,14\n").unwrap();

    let mut sink = CsvSink::replace(&path);
    sink.append(&table(&[(Some("Italy"), 2002, Some("Plague"), Some(Sex::Male), 4)]))
        .unwrap();
    sink.append(&table(&[(Some("Lithuania"), 2002, Some("Plague"), Some(Sex::Female), 5)]))
        .unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "country,year,cause,sex,deaths\nItaly,2002,Plague,m,4\nLithuania,2002,Plague,f,5\n"
    );
}

#[test]
fn test_nulls_are_empty_fields() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mortality.csv");

    CsvSink::append_to(&path)
        .append(&table(&[(None, 2001, None, None, 3)]))
        .unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap().lines().nth(1), Some(",2001,,,3"));
}

#[test]
fn test_header_mismatch_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("mortality.csv");
    fs::write(&path, "a,b\n1,2\n").unwrap();

    let err = CsvSink::append_to(&path)
        .append(&table(&[(Some("Italy"), 2002, Some("Plague"), Some(Sex::Male), 4)]))
        .unwrap_err();
    assert!(matches!(err, OutputError::HeaderMismatch { .. }));
    assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n1,2\n");
}

#[test]
fn test_memory_sink_collects_tables() {
    let mut sink = MemorySink::default();
    sink.append(&table(&[(Some("Italy"), 2002, Some("Plague"), Some(Sex::Male), 4)]))
        .unwrap();
    assert_eq!(sink.tables.len(), 1);
    assert_eq!(sink.tables[0].total_deaths(), 4);
}
