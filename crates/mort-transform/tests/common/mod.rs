#![allow(dead_code)]

use mort_model::{
    Cell, Code, CodeTables, CountryCode, ListNumber, PortugalCode, RawMortalityRecord, expand,
};

fn three_char(spec: &str, cause: &str) -> Vec<(Code, String)> {
    expand(spec)
        .unwrap()
        .into_iter()
        .map(|code| (code, cause.to_string()))
        .collect()
}

pub fn tables() -> CodeTables {
    CodeTables {
        condensed: [
            ("1002", "Cholera"),
            ("1006", "Plague"),
            ("1007", "Schistosomiasis"),
        ]
        .into_iter()
        .map(|(k, v)| (ListNumber::new(k), v.to_string()))
        .collect(),
        three_char: [
            three_char("A00", "Cholera"),
            three_char("A33-A35", "Tetanus"),
            three_char("A20", "Plague"),
            three_char("B65", "Schistosomiasis"),
            three_char("B00-B01", "Herpesviral infections"),
        ]
        .into_iter()
        .flatten()
        .collect(),
        portugal: [("UE64", "Plague")]
            .into_iter()
            .map(|(k, v)| (PortugalCode::new(k), v.to_string()))
            .collect(),
        countries: [
            (1010, "Algeria"),
            (4080, "France"),
            (4180, "Italy"),
            (4188, "Lithuania"),
        ]
        .into_iter()
        .map(|(k, v)| (CountryCode(k), v.to_string()))
        .collect(),
    }
}

pub fn raw(country: i64, year: i32, list: impl Into<Cell>, cause: &str, sex: i64, deaths: i64) -> RawMortalityRecord {
    RawMortalityRecord {
        country,
        year,
        list: list.into(),
        cause: cause.to_string(),
        sex,
        deaths,
    }
}
