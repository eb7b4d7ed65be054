// TimeLog Viewer - core/mod.rs
//
// Core business logic layer.
// Dependencies: util only.
// Must NOT depend on: ui, platform, app, or any network I/O.

pub mod aggregate;
pub mod export;
pub mod hours;
pub mod model;
pub mod query;
