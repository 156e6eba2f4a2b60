//! Builders for the four reference tables.
//!
//! The ICD-10 cause code resource has the layout
//!
//! ```text
//! code,Detailed List Numbers,Cause
//! 1000,,All causes
//! 1002,A00,Cholera
//! 1005,"A33, A34, A35",Tetanus
//! ```
//!
//! The condensed table keys the first column; the three-character table
//! expands the `Detailed List Numbers` column and keys every resulting code.
//! The Portugal resource uses the same layout with special-list codes in the
//! first column. The country resource is `code,name`.

use std::path::Path;

use tracing::debug;

use mort_model::{
    Cell, Code, CodeTables, CondensedTable, CountryCode, CountryTable, ListNumber, PortugalCode,
    PortugalTable, ThreeCharTable, expand_detailed_cell,
};

use crate::csv_utils::{ResourceRows, integer_field, raw_field, read_resource, required_field};
use crate::error::{Result, StandardsError};
use crate::paths::ResourcePaths;

/// Header of the column holding the detailed code ranges.
pub const DETAILED_LIST_COLUMN: &str = "Detailed List Numbers";

/// Header of the cause name column.
pub const CAUSE_COLUMN: &str = "Cause";

const KEY_INDEX: usize = 0;
const CAUSE_INDEX: usize = 2;
const COUNTRY_NAME_INDEX: usize = 1;

/// Build all four tables from their resource files.
pub fn load_code_tables(paths: &ResourcePaths) -> Result<CodeTables> {
    let causes = read_resource(&paths.cause_codes)?;
    let tables = CodeTables {
        condensed: condensed_from_rows(&paths.cause_codes, &causes)?,
        three_char: three_char_from_rows(&paths.cause_codes, &causes)?,
        portugal: load_portugal_table(&paths.portugal_cause_codes)?,
        countries: load_country_table(&paths.country_codes)?,
    };
    debug!(
        condensed = tables.condensed.len(),
        three_char = tables.three_char.len(),
        portugal = tables.portugal.len(),
        countries = tables.countries.len(),
        "loaded code tables"
    );
    Ok(tables)
}

/// Condensed list number → cause name.
pub fn load_condensed_table(path: &Path) -> Result<CondensedTable> {
    condensed_from_rows(path, &read_resource(path)?)
}

/// Three-character code → cause name, from the detailed code ranges.
///
/// Rows without detailed codes add nothing; the condensed table covers them.
pub fn load_three_char_table(path: &Path) -> Result<ThreeCharTable> {
    three_char_from_rows(path, &read_resource(path)?)
}

/// Portugal special list code → cause name. Keys are taken verbatim.
pub fn load_portugal_table(path: &Path) -> Result<PortugalTable> {
    let resource = read_resource(path)?;
    let table = keyed_causes(path, &resource)
        .map(|entry| entry.map(|(key, cause)| (PortugalCode::new(key), cause)))
        .collect::<Result<PortugalTable>>()?;
    debug!(path = %path.display(), entries = table.len(), "loaded Portugal cause codes");
    Ok(table)
}

/// Country code → country name.
pub fn load_country_table(path: &Path) -> Result<CountryTable> {
    let resource = read_resource(path)?;
    let table = resource
        .numbered()
        .map(|(row, record)| {
            let code = integer_field(path, row, record, KEY_INDEX)?;
            let name = required_field(path, row, record, COUNTRY_NAME_INDEX)?;
            Ok((CountryCode(code), name.to_string()))
        })
        .collect::<Result<CountryTable>>()?;
    debug!(path = %path.display(), entries = table.len(), "loaded country codes");
    Ok(table)
}

fn condensed_from_rows(path: &Path, resource: &ResourceRows) -> Result<CondensedTable> {
    let table = keyed_causes(path, resource)
        .map(|entry| entry.map(|(key, cause)| (ListNumber::new(key), cause)))
        .collect::<Result<CondensedTable>>()?;
    debug!(path = %path.display(), entries = table.len(), "loaded condensed cause codes");
    Ok(table)
}

fn three_char_from_rows(path: &Path, resource: &ResourceRows) -> Result<ThreeCharTable> {
    let detailed_index =
        resource
            .column_index(DETAILED_LIST_COLUMN)
            .ok_or_else(|| StandardsError::MissingColumn {
                column: DETAILED_LIST_COLUMN.to_string(),
                path: path.to_path_buf(),
            })?;
    let cause_index = resource.column_index(CAUSE_COLUMN).unwrap_or(CAUSE_INDEX);

    let fanned = resource
        .numbered()
        .filter_map(|(row, record)| {
            let detailed = Cell::from_text(record.get(detailed_index).unwrap_or_default());
            if detailed.is_null() {
                return None;
            }
            Some(fan_out(path, row, record, &detailed, detailed_index, cause_index))
        })
        .collect::<Result<Vec<_>>>()?;

    let table: ThreeCharTable = fanned.into_iter().flatten().collect();
    debug!(path = %path.display(), entries = table.len(), "loaded three-character cause codes");
    Ok(table)
}

fn fan_out(
    path: &Path,
    row: usize,
    record: &csv::StringRecord,
    detailed: &Cell,
    detailed_index: usize,
    cause_index: usize,
) -> Result<Vec<(Code, String)>> {
    let cause = required_field(path, row, record, cause_index)?;
    let codes = expand_detailed_cell(detailed).map_err(|source| StandardsError::InvalidCodeSpec {
        path: path.to_path_buf(),
        row,
        column: detailed_index + 1,
        source,
    })?;
    Ok(codes
        .into_iter()
        .map(|code| (code, cause.to_string()))
        .collect())
}

/// `(column 1, column 3)` pairs, in file order. Keys are not trimmed: the
/// resolver matches them against mortality codes verbatim.
fn keyed_causes<'a>(
    path: &'a Path,
    resource: &'a ResourceRows,
) -> impl Iterator<Item = Result<(String, String)>> + 'a {
    resource.numbered().map(move |(row, record)| {
        let key = raw_field(path, row, record, KEY_INDEX)?;
        let cause = required_field(path, row, record, CAUSE_INDEX)?;
        Ok((key.to_string(), cause.to_string()))
    })
}
