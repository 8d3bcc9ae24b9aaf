pub mod bar_chart;
pub mod ui;
