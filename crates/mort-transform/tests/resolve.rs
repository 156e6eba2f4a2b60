#![allow(missing_docs)]

mod common;

use common::{raw, tables};
use mort_model::{Cell, SchemeTag, Sex};
use mort_transform::{resolve_cause, resolve_country, resolve_record, resolve_sex};

#[test]
fn test_condensed_lookup_is_verbatim() {
    let tables = tables();
    assert_eq!(resolve_cause(SchemeTag::Condensed101, "1002", &tables), Some("Cholera"));
    assert_eq!(resolve_cause(SchemeTag::Condensed101, "1002 ", &tables), None);
    assert_eq!(resolve_cause(SchemeTag::Condensed101, "9999", &tables), None);
}

#[test]
fn test_four_char_resolves_like_three_char_prefix() {
    let tables = tables();
    let four = resolve_cause(SchemeTag::FourChar104, "B001", &tables);
    let three = resolve_cause(SchemeTag::ThreeChar103, "B00", &tables);
    assert_eq!(four, three);
    assert_eq!(four, Some("Herpesviral infections"));
}

#[test]
fn test_ten_m_truncates() {
    let tables = tables();
    assert_eq!(resolve_cause(SchemeTag::TenM, "A33", &tables), Some("Tetanus"));
    assert_eq!(resolve_cause(SchemeTag::TenM, "A349", &tables), Some("Tetanus"));
}

#[test]
fn test_three_char_does_not_truncate() {
    let tables = tables();
    assert_eq!(resolve_cause(SchemeTag::ThreeChar103, "A009", &tables), None);
}

#[test]
fn test_portugal_lookup() {
    let tables = tables();
    assert_eq!(resolve_cause(SchemeTag::PortugalUE1, "UE64", &tables), Some("Plague"));
    assert_eq!(resolve_cause(SchemeTag::PortugalUE1, "A20", &tables), None);
}

#[test]
fn test_unknown_scheme_is_unresolved() {
    let tables = tables();
    assert_eq!(resolve_cause(SchemeTag::Unknown, "A00", &tables), None);
}

#[test]
fn test_country_and_sex() {
    let tables = tables();
    assert_eq!(resolve_country(1010, &tables), Some("Algeria"));
    assert_eq!(resolve_country(1, &tables), None);
    assert_eq!(resolve_sex(1), Some(Sex::Male));
    assert_eq!(resolve_sex(2), Some(Sex::Female));
    assert_eq!(resolve_sex(9), Some(Sex::Unknown));
    assert_eq!(resolve_sex(3), None);
}

#[test]
fn test_list_tag_number_and_text_agree() {
    let tables = tables();
    let as_number = resolve_record(&raw(1010, 2001, 104i64, "A009", 1, 4), &tables);
    let as_text = resolve_record(&raw(1010, 2001, "104", "A009", 1, 4), &tables);
    let as_float = resolve_record(&raw(1010, 2001, 104.0, "A009", 1, 4), &tables);
    assert_eq!(as_number, as_text);
    assert_eq!(as_number, as_float);
    assert_eq!(as_number.cause.as_deref(), Some("Cholera"));
}

#[test]
fn test_resolve_record_keeps_misses_as_none() {
    let tables = tables();
    let resolved = resolve_record(&raw(9999, 2003, Cell::Null, "A00", 3, 7), &tables);
    assert_eq!(resolved.country, None);
    assert_eq!(resolved.cause, None);
    assert_eq!(resolved.sex, None);
    assert_eq!(resolved.year, 2003);
    assert_eq!(resolved.deaths, 7);
}
