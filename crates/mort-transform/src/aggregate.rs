//! Grouping resolved records and summing their death counts.

use serde::Serialize;
use tracing::{info, warn};

use mort_model::{
    AggregatedTable, CodeTables, RawMortalityRecord, ResolvedMortalityRecord, SchemeTag,
};

use crate::resolve::resolve_record;

/// Counts collected while aggregating one batch of records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AggregationReport {
    pub records: usize,
    pub groups: usize,
    pub deaths: i64,
    pub unresolved_countries: usize,
    pub unresolved_causes: usize,
    pub unresolved_sexes: usize,
    pub unknown_schemes: usize,
}

impl AggregationReport {
    /// Fold another batch's counts into this one.
    pub fn merge(&mut self, other: &Self) {
        self.records += other.records;
        self.groups += other.groups;
        self.deaths = self.deaths.saturating_add(other.deaths);
        self.unresolved_countries += other.unresolved_countries;
        self.unresolved_causes += other.unresolved_causes;
        self.unresolved_sexes += other.unresolved_sexes;
        self.unknown_schemes += other.unknown_schemes;
    }

    fn count(&mut self, raw: &RawMortalityRecord, resolved: &ResolvedMortalityRecord) {
        self.records += 1;
        self.deaths = self.deaths.saturating_add(resolved.deaths);
        self.unresolved_countries += usize::from(resolved.country.is_none());
        self.unresolved_causes += usize::from(resolved.cause.is_none());
        self.unresolved_sexes += usize::from(resolved.sex.is_none());
        self.unknown_schemes += usize::from(SchemeTag::from_cell(&raw.list) == SchemeTag::Unknown);
    }
}

/// Resolve and aggregate raw records by (country, year, cause, sex).
pub fn aggregate(records: &[RawMortalityRecord], tables: &CodeTables) -> AggregatedTable {
    aggregate_with_report(records, tables).0
}

/// [`aggregate`], also returning the batch counts.
pub fn aggregate_with_report(
    records: &[RawMortalityRecord],
    tables: &CodeTables,
) -> (AggregatedTable, AggregationReport) {
    let mut report = AggregationReport::default();
    let table: AggregatedTable = records
        .iter()
        .map(|raw| {
            let resolved = resolve_record(raw, tables);
            report.count(raw, &resolved);
            (resolved.key(), resolved.deaths)
        })
        .collect();
    report.groups = table.len();

    info!(
        records = report.records,
        groups = report.groups,
        deaths = report.deaths,
        unresolved_countries = report.unresolved_countries,
        unresolved_causes = report.unresolved_causes,
        unresolved_sexes = report.unresolved_sexes,
        "aggregated mortality records"
    );
    if report.unknown_schemes > 0 {
        warn!(
            records = report.unknown_schemes,
            "records with an unknown List scheme left unresolved"
        );
    }
    (table, report)
}

/// Aggregate records whose names are already resolved.
pub fn aggregate_resolved<I>(records: I) -> AggregatedTable
where
    I: IntoIterator<Item = ResolvedMortalityRecord>,
{
    records
        .into_iter()
        .map(|record| (record.key(), record.deaths))
        .collect()
}
