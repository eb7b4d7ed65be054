// TimeLog Viewer - ui/panels/charts.rs
//
// Two horizontal bar charts: hours by employee and hours by project.
// Aggregates are recomputed from the loaded entries on every frame; each
// chart scales its bars to its own largest value.

use crate::core::aggregate::{self, Aggregates, SkippedEntry};
use crate::core::model::{AggregateRow, LogEntry};
use crate::ui::theme;
use crate::util::constants::EMPTY_STATE_MESSAGE;

/// What the charts tab shows for a given collection.
#[derive(Debug, PartialEq)]
pub enum ChartsView {
    Empty(&'static str),
    Charts(Aggregates),
}

/// Empty collections get the same message as the table; anything else is
/// aggregated.
pub fn charts_view(entries: &[LogEntry]) -> ChartsView {
    if entries.is_empty() {
        return ChartsView::Empty(EMPTY_STATE_MESSAGE);
    }
    ChartsView::Charts(aggregate::aggregate(entries))
}

/// Render the charts tab.
pub fn render(ui: &mut egui::Ui, entries: &[LogEntry]) {
    let aggregates = match charts_view(entries) {
        ChartsView::Empty(message) => {
            ui.centered_and_justified(|ui| {
                ui.label(message);
            });
            return;
        }
        ChartsView::Charts(aggregates) => aggregates,
    };

    egui::ScrollArea::vertical()
        .id_salt("charts_scroll")
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            bar_chart(
                ui,
                "Hours by Employee",
                &aggregates.by_employee,
                theme::EMPLOYEE_BAR,
            );
            ui.add_space(16.0);
            bar_chart(
                ui,
                "Hours by Project",
                &aggregates.by_project,
                theme::PROJECT_BAR,
            );

            if !aggregates.skipped.is_empty() {
                ui.add_space(12.0);
                ui.separator();
                skipped_list(ui, entries, &aggregates.skipped);
            }
        });
}

fn bar_chart(ui: &mut egui::Ui, title: &str, rows: &[AggregateRow], colour: egui::Color32) {
    ui.strong(title);
    ui.add_space(4.0);

    if rows.is_empty() {
        ui.weak("No entries with valid times.");
        return;
    }

    let track_colour = theme::bar_track_colour(ui.visuals().dark_mode);

    for (row, fraction) in rows.iter().zip(aggregate::bar_fractions(rows)) {
        ui.horizontal(|ui| {
            ui.add_sized(
                [theme::CHART_LABEL_WIDTH, theme::BAR_HEIGHT],
                egui::Label::new(row.name.as_str()).truncate(),
            );

            let track_width = (ui.available_width() - theme::CHART_VALUE_WIDTH).max(0.0);
            let (rect, response) = ui.allocate_exact_size(
                egui::vec2(track_width, theme::BAR_HEIGHT),
                egui::Sense::hover(),
            );
            let mut bar = rect;
            bar.set_width(rect.width() * fraction as f32);

            let painter = ui.painter();
            painter.rect_filled(rect, 2.0, track_colour);
            painter.rect_filled(bar, 2.0, colour);

            let value = format_hours(row.hours);
            response.on_hover_text(format!("{}: {value} h", row.name));
            ui.label(value);
        });
        ui.add_space(theme::BAR_SPACING);
    }
}

fn skipped_list(ui: &mut egui::Ui, entries: &[LogEntry], skipped: &[SkippedEntry]) {
    let noun = if skipped.len() == 1 { "entry" } else { "entries" };
    ui.colored_label(
        theme::WARNING_TEXT,
        format!("{} {noun} left out of the charts:", skipped.len()),
    );
    for item in skipped {
        let who = entries
            .get(item.index)
            .map(|e| format!("{} on {}", e.employee, e.date))
            .unwrap_or_default();
        ui.label(
            egui::RichText::new(format!("Row {}: {who}: {}", item.index + 1, item.reason))
                .color(theme::WARNING_TEXT)
                .size(11.5),
        );
    }
}

/// Hours for display: at most two decimals, no trailing zeros ("8", "8.5").
pub fn format_hours(hours: f64) -> String {
    let text = format!("{hours:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::error::HoursError;

    fn entry(employee: &str, project: &str, start: &str, end: &str) -> LogEntry {
        LogEntry {
            employee: employee.to_string(),
            date: "2024-01-01".to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
            task: "Work".to_string(),
            project: project.to_string(),
        }
    }

    fn row(name: &str, hours: f64) -> AggregateRow {
        AggregateRow {
            name: name.to_string(),
            hours,
        }
    }

    #[test]
    fn test_empty_collection_shows_message() {
        assert_eq!(charts_view(&[]), ChartsView::Empty("No logs found."));
    }

    #[test]
    fn test_entries_produce_both_series() {
        let entries = vec![
            entry("A", "X", "09:00", "11:00"),
            entry("A", "Y", "11:00", "12:00"),
        ];
        match charts_view(&entries) {
            ChartsView::Charts(aggregates) => {
                assert_eq!(aggregates.by_employee, vec![row("A", 3.0)]);
                assert_eq!(aggregates.by_project, vec![row("X", 2.0), row("Y", 1.0)]);
                assert!(aggregates.skipped.is_empty());
            }
            other => panic!("expected charts, got {other:?}"),
        }
    }

    #[test]
    fn test_only_invalid_entries_still_renders_charts() {
        let entries = vec![entry("A", "X", "10:00", "09:00")];
        match charts_view(&entries) {
            ChartsView::Charts(aggregates) => {
                assert!(aggregates.by_employee.is_empty());
                assert!(aggregates.by_project.is_empty());
                assert_eq!(aggregates.skipped.len(), 1);
                assert!(matches!(
                    aggregates.skipped[0].reason,
                    HoursError::EndBeforeStart { .. }
                ));
            }
            other => panic!("expected charts, got {other:?}"),
        }
    }

    #[test]
    fn test_format_hours() {
        assert_eq!(format_hours(8.0), "8");
        assert_eq!(format_hours(8.5), "8.5");
        assert_eq!(format_hours(2.25), "2.25");
        assert_eq!(format_hours(1.0 / 3.0), "0.33");
        assert_eq!(format_hours(0.0), "0");
        assert_eq!(format_hours(10.0), "10");
    }
}
