//! Conversion of the aggregated table to a Polars DataFrame.

use polars::prelude::*;

use mort_model::{AggregatedTable, Sex};

pub const COUNTRY_COLUMN: &str = "country";
pub const YEAR_COLUMN: &str = "year";
pub const CAUSE_COLUMN: &str = "cause";
pub const SEX_COLUMN: &str = "sex";
pub const DEATHS_COLUMN: &str = "deaths";

/// Output columns, in order.
pub const OUTPUT_COLUMNS: [&str; 5] = [
    COUNTRY_COLUMN,
    YEAR_COLUMN,
    CAUSE_COLUMN,
    SEX_COLUMN,
    DEATHS_COLUMN,
];

/// Build a DataFrame with one row per group. Unresolved names are nulls.
pub fn to_dataframe(table: &AggregatedTable) -> PolarsResult<DataFrame> {
    let rows = table.rows();
    let countries: Vec<Option<&str>> = rows.iter().map(|r| r.country.as_deref()).collect();
    let years: Vec<i32> = rows.iter().map(|r| r.year).collect();
    let causes: Vec<Option<&str>> = rows.iter().map(|r| r.cause.as_deref()).collect();
    let sexes: Vec<Option<&str>> = rows.iter().map(|r| r.sex.map(Sex::as_str)).collect();
    let deaths: Vec<i64> = rows.iter().map(|r| r.deaths).collect();

    DataFrame::new(vec![
        Series::new(COUNTRY_COLUMN.into(), countries).into(),
        Series::new(YEAR_COLUMN.into(), years).into(),
        Series::new(CAUSE_COLUMN.into(), causes).into(),
        Series::new(SEX_COLUMN.into(), sexes).into(),
        Series::new(DEATHS_COLUMN.into(), deaths).into(),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use mort_model::AggregateKey;

    #[test]
    fn nulls_survive_conversion() {
        let table: AggregatedTable = [(
            AggregateKey {
                country: None,
                year: 2001,
                cause: Some("Cholera".to_string()),
                sex: Some(Sex::Male),
            },
            6,
        )]
        .into_iter()
        .collect();
        let df = to_dataframe(&table).unwrap();

        let names: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        assert_eq!(names, OUTPUT_COLUMNS.to_vec());
        assert_eq!(df.height(), 1);
        assert_eq!(df.column(COUNTRY_COLUMN).unwrap().null_count(), 1);
        assert_eq!(df.column(SEX_COLUMN).unwrap().str().unwrap().get(0), Some("m"));
        assert_eq!(df.column(DEATHS_COLUMN).unwrap().i64().unwrap().get(0), Some(6));
    }

    #[test]
    fn empty_table_has_all_columns() {
        let df = to_dataframe(&AggregatedTable::default()).unwrap();
        assert_eq!(df.width(), 5);
        assert_eq!(df.height(), 0);
    }
}
