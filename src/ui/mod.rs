// TimeLog Viewer - ui/mod.rs
//
// UI layer: presentation only.
// Dependencies: app (state), core (read-only models), egui.
// Must NOT depend on: platform, direct I/O.
//
// Panels never change state themselves. They read `ViewState` and push
// `UiAction`s, which the app applies after the frame's panels have run.

use crate::app::state::ViewEvent;

pub mod panels;
pub mod theme;

/// Something a panel asks the app to do.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    /// Feed an event to the reducer.
    Dispatch(ViewEvent),

    /// Validate the current filter and start a fetch.
    LoadLogs,
}
