// TimeLog Viewer - app/mod.rs
//
// Application layer: view state, the reducer, and the fetch lifecycle.
// Dependencies: core layer, util.
// Must NOT depend on: ui, platform specifics.

pub mod client;
pub mod fetch;
pub mod state;
