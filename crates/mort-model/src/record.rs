//! Mortality records before and after cause resolution.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::scheme::Sex;

/// One row of a WHO mortality extract, as read from the source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMortalityRecord {
    pub country: i64,
    pub year: i32,
    /// Coding scheme of `cause`, kept as read (`101` may be a number or text).
    pub list: Cell,
    pub cause: String,
    pub sex: i64,
    pub deaths: i64,
}

/// A record with country, cause and sex mapped to names.
///
/// `None` marks a value that had no mapping; it is still a valid grouping key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedMortalityRecord {
    pub country: Option<String>,
    pub year: i32,
    pub cause: Option<String>,
    pub sex: Option<Sex>,
    pub deaths: i64,
}

impl ResolvedMortalityRecord {
    pub fn key(&self) -> AggregateKey {
        AggregateKey {
            country: self.country.clone(),
            year: self.year,
            cause: self.cause.clone(),
            sex: self.sex,
        }
    }
}

/// Grouping key of the aggregated table. `None` equals only `None`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AggregateKey {
    pub country: Option<String>,
    pub year: i32,
    pub cause: Option<String>,
    pub sex: Option<Sex>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AggregatedRow {
    pub country: Option<String>,
    pub year: i32,
    pub cause: Option<String>,
    pub sex: Option<Sex>,
    pub deaths: i64,
}

impl AggregatedRow {
    pub fn from_key(key: AggregateKey, deaths: i64) -> Self {
        Self {
            country: key.country,
            year: key.year,
            cause: key.cause,
            sex: key.sex,
            deaths,
        }
    }

    pub fn key(&self) -> AggregateKey {
        AggregateKey {
            country: self.country.clone(),
            year: self.year,
            cause: self.cause.clone(),
            sex: self.sex,
        }
    }
}

/// The aggregated output: one row per distinct key, in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregatedTable {
    rows: Vec<AggregatedRow>,
}

impl AggregatedTable {
    pub fn rows(&self) -> &[AggregatedRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<AggregatedRow> {
        self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AggregatedRow> {
        self.rows.iter()
    }

    pub fn total_deaths(&self) -> i64 {
        self.rows
            .iter()
            .fold(0, |total: i64, row| total.saturating_add(row.deaths))
    }

    /// Deaths of the group with `key`, if present.
    pub fn deaths_for(&self, key: &AggregateKey) -> Option<i64> {
        self.rows
            .binary_search_by(|row| row.key().cmp(key))
            .ok()
            .map(|idx| self.rows[idx].deaths)
    }
}

/// Rows are sorted by key; duplicate keys are summed, saturating at `i64::MAX`.
impl FromIterator<(AggregateKey, i64)> for AggregatedTable {
    fn from_iter<I: IntoIterator<Item = (AggregateKey, i64)>>(iter: I) -> Self {
        let mut groups = std::collections::BTreeMap::new();
        for (key, deaths) in iter {
            let total: &mut i64 = groups.entry(key).or_insert(0);
            *total = total.saturating_add(deaths);
        }
        Self {
            rows: groups
                .into_iter()
                .map(|(key, deaths)| AggregatedRow::from_key(key, deaths))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a AggregatedTable {
    type Item = &'a AggregatedRow;
    type IntoIter = std::slice::Iter<'a, AggregatedRow>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(country: Option<&str>, year: i32) -> AggregateKey {
        AggregateKey {
            country: country.map(str::to_string),
            year,
            cause: Some("Cholera".to_string()),
            sex: Some(Sex::Female),
        }
    }

    #[test]
    fn duplicate_keys_are_summed() {
        let table: AggregatedTable = [
            (key(Some("Algeria"), 2001), 12),
            (key(None, 2001), 1),
            (key(Some("Algeria"), 2001), 3),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.deaths_for(&key(Some("Algeria"), 2001)), Some(15));
        assert_eq!(table.deaths_for(&key(None, 2001)), Some(1));
        assert_eq!(table.deaths_for(&key(None, 2002)), None);
        assert_eq!(table.total_deaths(), 16);
    }

    #[test]
    fn sums_saturate_instead_of_wrapping() {
        let table: AggregatedTable = [
            (key(Some("Algeria"), 2001), i64::MAX),
            (key(Some("Algeria"), 2001), 1),
            (key(None, 2001), i64::MAX),
        ]
        .into_iter()
        .collect();
        assert_eq!(table.deaths_for(&key(Some("Algeria"), 2001)), Some(i64::MAX));
        assert_eq!(table.total_deaths(), i64::MAX);
    }

    #[test]
    fn null_keys_sort_first() {
        let table: AggregatedTable = [(key(Some("Algeria"), 2001), 1), (key(None, 2002), 1)]
            .into_iter()
            .collect();
        assert_eq!(table.rows()[0].country, None);
    }
}
