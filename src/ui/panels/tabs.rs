// TimeLog Viewer - ui/panels/tabs.rs
//
// Table / Charts selector. Selecting a tab only dispatches `TabSelected`.

use crate::app::state::{ViewEvent, ViewState};
use crate::core::model::ViewTab;
use crate::ui::UiAction;

/// Render the tab bar.
pub fn render(ui: &mut egui::Ui, state: &ViewState, actions: &mut Vec<UiAction>) {
    ui.horizontal(|ui| {
        for tab in ViewTab::all() {
            let selected = state.tab == *tab;
            if ui.selectable_label(selected, tab.label()).clicked() && !selected {
                actions.push(UiAction::Dispatch(ViewEvent::TabSelected(*tab)));
            }
        }
    });
}
