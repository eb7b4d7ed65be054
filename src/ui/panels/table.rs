// TimeLog Viewer - ui/panels/table.rs
//
// Raw log table: one row per loaded entry, columns in the fixed order
// Employee, Date, Start Time, End Time, Task, Project.

use crate::core::model::LogEntry;
use crate::util::constants::{EMPTY_STATE_MESSAGE, TABLE_COLUMNS};

/// What the table tab shows for a given collection.
#[derive(Debug, PartialEq)]
pub enum TableView<'a> {
    Empty(&'static str),
    Rows(Vec<[&'a str; 6]>),
}

/// Decide between the empty-state message and the row cells.
pub fn table_view(entries: &[LogEntry]) -> TableView<'_> {
    if entries.is_empty() {
        return TableView::Empty(EMPTY_STATE_MESSAGE);
    }
    TableView::Rows(entries.iter().map(LogEntry::columns).collect())
}

/// Render the table tab.
pub fn render(ui: &mut egui::Ui, entries: &[LogEntry]) {
    let rows = match table_view(entries) {
        TableView::Empty(message) => {
            ui.centered_and_justified(|ui| {
                ui.label(message);
            });
            return;
        }
        TableView::Rows(rows) => rows,
    };

    egui::ScrollArea::both()
        .id_salt("log_table_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            egui::Grid::new("log_table")
                .num_columns(TABLE_COLUMNS.len())
                .striped(true)
                .spacing([16.0, 4.0])
                .show(ui, |ui| {
                    for header in TABLE_COLUMNS {
                        ui.strong(header);
                    }
                    ui.end_row();

                    for cells in &rows {
                        for cell in cells {
                            ui.label(*cell);
                        }
                        ui.end_row();
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(employee: &str, task: &str) -> LogEntry {
        LogEntry {
            employee: employee.to_string(),
            date: "2024-01-01".to_string(),
            start_time: "09:00".to_string(),
            end_time: "17:00".to_string(),
            task: task.to_string(),
            project: "Apollo".to_string(),
        }
    }

    #[test]
    fn test_empty_collection_shows_message() {
        assert_eq!(table_view(&[]), TableView::Empty("No logs found."));
    }

    #[test]
    fn test_one_row_per_entry_in_order() {
        let entries = vec![entry("Sam", "Build"), entry("Ana", "Review")];
        assert_eq!(
            table_view(&entries),
            TableView::Rows(vec![
                ["Sam", "2024-01-01", "09:00", "17:00", "Build", "Apollo"],
                ["Ana", "2024-01-01", "09:00", "17:00", "Review", "Apollo"],
            ])
        );
    }

    #[test]
    fn test_rows_keep_duplicates() {
        let entries = vec![entry("Sam", "Build"), entry("Sam", "Build")];
        match table_view(&entries) {
            TableView::Rows(rows) => assert_eq!(rows.len(), 2),
            other => panic!("expected rows, got {other:?}"),
        }
    }
}
