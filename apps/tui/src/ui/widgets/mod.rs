pub mod accident_map;
pub mod line_chart;
pub mod popup;
pub mod tables;
