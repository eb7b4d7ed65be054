// TimeLog Viewer - ui/panels/filters.rs
//
// Filter controls sidebar: employee, project, date, and the Load button.
// Editing a field never fetches; only Load Logs (or Enter in a field) does.

use crate::app::state::{ViewEvent, ViewState};
use crate::ui::UiAction;

/// Render the filter controls.
pub fn render(ui: &mut egui::Ui, state: &ViewState, actions: &mut Vec<UiAction>) {
    ui.heading("Filters");
    ui.separator();

    let mut submit = false;

    ui.label("Employee:");
    let mut employee = state.filter.employee.clone();
    let response = ui.add(egui::TextEdit::singleline(&mut employee).hint_text("Employee"));
    if response.changed() {
        actions.push(UiAction::Dispatch(ViewEvent::EmployeeEdited(employee)));
    }
    submit |= entered(ui, &response);

    ui.label("Project:");
    let mut project = state.filter.project.clone();
    let response = ui.add(egui::TextEdit::singleline(&mut project).hint_text("Project"));
    if response.changed() {
        actions.push(UiAction::Dispatch(ViewEvent::ProjectEdited(project)));
    }
    submit |= entered(ui, &response);

    ui.label("Date:");
    let mut date = state.filter.date.clone();
    let response = ui.add(egui::TextEdit::singleline(&mut date).hint_text("YYYY-MM-DD"));
    if response.changed() {
        actions.push(UiAction::Dispatch(ViewEvent::DateEdited(date)));
    }
    submit |= entered(ui, &response);

    ui.add_space(8.0);

    ui.horizontal(|ui| {
        if ui.button("Load Logs").clicked() {
            submit = true;
        }
        if state.is_loading() {
            ui.spinner();
        }
    });

    if !state.filter.is_empty() && ui.small_button("Clear Filters").clicked() {
        actions.push(UiAction::Dispatch(ViewEvent::EmployeeEdited(String::new())));
        actions.push(UiAction::Dispatch(ViewEvent::ProjectEdited(String::new())));
        actions.push(UiAction::Dispatch(ViewEvent::DateEdited(String::new())));
    }

    if submit {
        actions.push(UiAction::LoadLogs);
    }
}

/// Enter pressed while the field had focus.
fn entered(ui: &egui::Ui, response: &egui::Response) -> bool {
    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
}
