pub mod charts;
pub mod dashboard;
pub mod details;
pub mod list;
