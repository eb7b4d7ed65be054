// TimeLog Viewer - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the panels, the fetch worker, and the view reducer.

use crate::app::fetch::FetchManager;
use crate::app::state::{ViewEvent, ViewState};
use crate::core::export;
use crate::core::model::{LogEntry, ViewTab};
use crate::ui::{self, UiAction};
use crate::util::constants;
use crate::util::error::{Result, TimeLogError};
use std::path::Path;

/// Export formats offered in the File menu.
#[derive(Debug, Clone, Copy)]
enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    fn label(self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }

    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// The TimeLog Viewer application.
pub struct TimeLogApp {
    view: ViewState,
    fetch_manager: FetchManager,
    /// Message shown in the status bar instead of the load status until the
    /// next state change (export results, startup config warnings).
    notice: Option<String>,
}

impl TimeLogApp {
    /// Create a new application instance.
    pub fn new(view: ViewState, fetch_manager: FetchManager, notice: Option<String>) -> Self {
        Self {
            view,
            fetch_manager,
            notice,
        }
    }

    fn dispatch(&mut self, event: ViewEvent) {
        self.notice = None;
        self.view = std::mem::take(&mut self.view).reduce(event);
    }

    /// Validate the filter and hand it to the fetch worker.
    fn load_logs(&mut self) {
        if let Err(e) = self.view.filter.validate() {
            tracing::debug!(error = %e, "Filter rejected");
            self.dispatch(ViewEvent::FilterRejected {
                message: e.to_string(),
            });
            return;
        }
        let request_id = self.fetch_manager.start_fetch(self.view.filter.clone());
        self.dispatch(ViewEvent::FetchIssued { request_id });
    }

    fn export(&mut self, format: ExportFormat) {
        let Some(dest) = rfd::FileDialog::new()
            .add_filter(format.label(), &[format.extension()])
            .set_file_name(format!("timelogs.{}", format.extension()))
            .save_file()
        else {
            return;
        };

        self.notice = Some(match export_to(&self.view.entries, &dest, format) {
            Ok(n) => {
                tracing::info!(entries = n, path = %dest.display(), "Export complete");
                format!("Exported {n} entries to {}.", format.label())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Export failed");
                format!("{} export failed: {e}", format.label())
            }
        });
    }
}

/// Write `entries` to a new file at `dest`.
fn export_to(entries: &[LogEntry], dest: &Path, format: ExportFormat) -> Result<usize> {
    let file = std::fs::File::create(dest).map_err(|source| TimeLogError::Io {
        path: dest.to_path_buf(),
        operation: "create export file",
        source,
    })?;
    let count = match format {
        ExportFormat::Csv => export::export_csv(entries, file, dest)?,
        ExportFormat::Json => export::export_json(entries, file, dest)?,
    };
    Ok(count)
}

impl eframe::App for TimeLogApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply finished fetches. Stale ones are dropped by the reducer.
        for outcome in self
            .fetch_manager
            .poll_outcomes(constants::MAX_FETCH_MESSAGES_PER_FRAME)
        {
            self.dispatch(outcome.into_event());
        }
        if self.view.is_loading() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        let mut actions: Vec<UiAction> = Vec::new();

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    let has_entries = !self.view.entries.is_empty();
                    ui.add_enabled_ui(has_entries, |ui| {
                        if ui.button("Export CSV\u{2026}").clicked() {
                            self.export(ExportFormat::Csv);
                            ui.close_menu();
                        }
                        if ui.button("Export JSON\u{2026}").clicked() {
                            self.export(ExportFormat::Json);
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Exit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
        });

        // Status bar
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                match &self.notice {
                    Some(notice) => {
                        ui.label(notice);
                    }
                    None => {
                        let line = self.view.status_line();
                        if self.view.has_error() {
                            ui.colored_label(ui::theme::ERROR_TEXT, line);
                        } else {
                            ui.label(line);
                        }
                    }
                }
                if self.view.is_loading() {
                    ui.spinner();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let total = self.view.entries.len();
                    if total > 0 {
                        ui.label(format!("{total} entries"));
                    }
                });
            });
        });

        // Left sidebar: filters
        egui::SidePanel::left("sidebar")
            .default_width(ui::theme::SIDEBAR_WIDTH)
            .resizable(true)
            .show(ctx, |ui| {
                ui::panels::filters::render(ui, &self.view, &mut actions);
            });

        // Central panel: tab bar plus the selected view
        egui::CentralPanel::default().show(ctx, |ui| {
            ui::panels::tabs::render(ui, &self.view, &mut actions);
            ui.separator();
            match self.view.tab {
                ViewTab::Table => ui::panels::table::render(ui, &self.view.entries),
                ViewTab::Charts => ui::panels::charts::render(ui, &self.view.entries),
            }
        });

        for action in actions {
            match action {
                UiAction::Dispatch(event) => self.dispatch(event),
                UiAction::LoadLogs => self.load_logs(),
            }
        }
    }
}
