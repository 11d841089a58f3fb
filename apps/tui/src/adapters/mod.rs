//! Reshape fetched records into what the chart and map widgets draw.

pub mod chart;
pub mod map;

pub use chart::{ChartData, ChartPoint, ChartSeries};
pub use map::{MapBounds, MapControls, MapMarker, MapMode, MapView, RoadviewPanel};
