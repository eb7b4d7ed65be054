// TimeLog Viewer - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use crate::util::constants;
use crate::util::error::FilterError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// =============================================================================
// Log Entry (one row of the backend response)
// =============================================================================

/// One recorded work interval for an employee on a project.
///
/// Read-only to the viewer. Field names follow the backend's camelCase JSON;
/// absent fields deserialise as empty strings and surface later as invalid
/// time values rather than failing the whole response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogEntry {
    pub employee: String,

    /// Calendar date as sent by the backend (normally `YYYY-MM-DD`).
    pub date: String,

    /// `HH:MM`.
    pub start_time: String,

    /// `HH:MM`.
    pub end_time: String,

    pub task: String,

    pub project: String,
}

impl LogEntry {
    /// Cell values in table column order (see `constants::TABLE_COLUMNS`).
    pub fn columns(&self) -> [&str; 6] {
        [
            self.employee.as_str(),
            self.date.as_str(),
            self.start_time.as_str(),
            self.end_time.as_str(),
            self.task.as_str(),
            self.project.as_str(),
        ]
    }
}

// =============================================================================
// Filter
// =============================================================================

/// The three optional query constraints. An empty string means "no
/// constraint" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogFilter {
    pub employee: String,
    pub project: String,
    /// ISO calendar date (`YYYY-MM-DD`) or empty.
    pub date: String,
}

impl LogFilter {
    /// Returns true if no constraint is set.
    pub fn is_empty(&self) -> bool {
        self.employee.is_empty() && self.project.is_empty() && self.date.is_empty()
    }

    /// Non-empty `(key, value)` pairs in the fixed order employee, project, date.
    pub fn active_pairs(&self) -> Vec<(&'static str, &str)> {
        [
            (constants::QUERY_KEY_EMPLOYEE, self.employee.as_str()),
            (constants::QUERY_KEY_PROJECT, self.project.as_str()),
            (constants::QUERY_KEY_DATE, self.date.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }

    /// Check that the filter can be sent. A non-empty date must be a real
    /// calendar date in `YYYY-MM-DD` form.
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.date.is_empty() {
            return Ok(());
        }
        NaiveDate::parse_from_str(&self.date, constants::DATE_FORMAT)
            .map(|_| ())
            .map_err(|source| FilterError::InvalidDate {
                value: self.date.clone(),
                source,
            })
    }
}

// =============================================================================
// Aggregates
// =============================================================================

/// Total hours for one distinct employee or project. Produced per render for
/// the charts; never stored.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateRow {
    pub name: String,
    pub hours: f64,
}

// =============================================================================
// View tab
// =============================================================================

/// Current display mode of the central panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewTab {
    #[default]
    Table,
    Charts,
}

impl ViewTab {
    /// Returns all variants in tab-bar order.
    pub fn all() -> &'static [ViewTab] {
        &[ViewTab::Table, ViewTab::Charts]
    }

    /// Human-readable label for the tab button.
    pub fn label(&self) -> &'static str {
        match self {
            ViewTab::Table => "Table",
            ViewTab::Charts => "Charts",
        }
    }
}

impl std::fmt::Display for ViewTab {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
