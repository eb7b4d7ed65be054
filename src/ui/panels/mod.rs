// TimeLog Viewer - ui/panels/mod.rs

pub mod charts;
pub mod filters;
pub mod table;
pub mod tabs;
