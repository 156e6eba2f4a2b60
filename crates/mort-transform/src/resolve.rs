//! Scheme-directed lookup of cause, country and sex names.

use mort_model::{
    Code, CodeTables, CountryCode, RawMortalityRecord, ResolvedMortalityRecord, SchemeTag, Sex,
};

/// Length of a three-character ICD-10 code.
const THREE_CHAR_LEN: usize = 3;

/// Look up the cause name of `code` under the coding scheme `tag`.
///
/// Lookup misses and unknown schemes give `None`.
pub fn resolve_cause<'t>(tag: SchemeTag, code: &str, tables: &'t CodeTables) -> Option<&'t str> {
    match tag {
        SchemeTag::Condensed101 => tables.condensed.get(code),
        SchemeTag::ThreeChar103 => three_char(code, tables),
        SchemeTag::FourChar104 | SchemeTag::TenM => three_char(truncate(code), tables),
        SchemeTag::PortugalUE1 => tables.portugal.get(code),
        SchemeTag::Unknown => None,
    }
}

pub fn resolve_country(code: i64, tables: &CodeTables) -> Option<&str> {
    tables.countries.get(&CountryCode(code))
}

pub fn resolve_sex(code: i64) -> Option<Sex> {
    Sex::from_code(code)
}

/// Resolve every coded field of a raw record. The scheme tag is consumed.
pub fn resolve_record(record: &RawMortalityRecord, tables: &CodeTables) -> ResolvedMortalityRecord {
    let tag = SchemeTag::from_cell(&record.list);
    ResolvedMortalityRecord {
        country: resolve_country(record.country, tables).map(str::to_string),
        year: record.year,
        cause: resolve_cause(tag, &record.cause, tables).map(str::to_string),
        sex: resolve_sex(record.sex),
        deaths: record.deaths,
    }
}

fn three_char<'t>(code: &str, tables: &'t CodeTables) -> Option<&'t str> {
    let code: Code = code.parse().ok()?;
    tables.three_char.get(&code)
}

/// First three characters, or the whole string when shorter.
fn truncate(code: &str) -> &str {
    match code.char_indices().nth(THREE_CHAR_LEN) {
        Some((idx, _)) => &code[..idx],
        None => code,
    }
}
