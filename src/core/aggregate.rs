// TimeLog Viewer - core/aggregate.rs
//
// Hours per employee and hours per project for the charts view.
// Core layer: pure functions over the loaded entries. Nothing here is
// cached; callers recompute from the current collection on every render.

use crate::core::hours::entry_hours;
use crate::core::model::{AggregateRow, LogEntry};
use crate::util::error::HoursError;
use indexmap::IndexMap;

/// An entry left out of the aggregates because its hours are invalid.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedEntry {
    /// Position of the entry in the loaded collection.
    pub index: usize,
    pub reason: HoursError,
}

/// Both chart series plus the entries that could not contribute.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregates {
    pub by_employee: Vec<AggregateRow>,
    pub by_project: Vec<AggregateRow>,
    pub skipped: Vec<SkippedEntry>,
}

/// Compute both series in a single pass.
///
/// Rows are ordered by first occurrence of their key. Entries whose hours
/// are invalid are skipped from both series and reported in `skipped`.
pub fn aggregate(entries: &[LogEntry]) -> Aggregates {
    let mut by_employee: IndexMap<&str, f64> = IndexMap::new();
    let mut by_project: IndexMap<&str, f64> = IndexMap::new();
    let mut skipped = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        match entry_hours(entry) {
            Ok(hours) => {
                *by_employee.entry(entry.employee.as_str()).or_insert(0.0) += hours;
                *by_project.entry(entry.project.as_str()).or_insert(0.0) += hours;
            }
            Err(reason) => {
                tracing::debug!(index, error = %reason, "Entry skipped from aggregates");
                skipped.push(SkippedEntry { index, reason });
            }
        }
    }

    Aggregates {
        by_employee: into_rows(by_employee),
        by_project: into_rows(by_project),
        skipped,
    }
}

/// Total hours per distinct employee, in first-occurrence order.
pub fn hours_by_employee(entries: &[LogEntry]) -> Vec<AggregateRow> {
    group_hours(entries, |entry| entry.employee.as_str())
}

/// Total hours per distinct project, in first-occurrence order.
pub fn hours_by_project(entries: &[LogEntry]) -> Vec<AggregateRow> {
    group_hours(entries, |entry| entry.project.as_str())
}

fn group_hours<'a, F>(entries: &'a [LogEntry], key: F) -> Vec<AggregateRow>
where
    F: Fn(&'a LogEntry) -> &'a str,
{
    let mut totals: IndexMap<&str, f64> = IndexMap::new();
    for entry in entries {
        if let Ok(hours) = entry_hours(entry) {
            *totals.entry(key(entry)).or_insert(0.0) += hours;
        }
    }
    into_rows(totals)
}

fn into_rows(totals: IndexMap<&str, f64>) -> Vec<AggregateRow> {
    totals
        .into_iter()
        .map(|(name, hours)| AggregateRow {
            name: name.to_string(),
            hours,
        })
        .collect()
}

/// Bar lengths as fractions of the chart's own largest value.
///
/// Each chart scales independently. A chart whose maximum is not positive
/// gets all-zero bars.
pub fn bar_fractions(rows: &[AggregateRow]) -> Vec<f64> {
    let max = rows.iter().map(|row| row.hours).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return vec![0.0; rows.len()];
    }
    rows.iter().map(|row| row.hours / max).collect()
}
