use serde::Serialize;

use crate::domain::{AccidentRecord, Coordinate};

pub const DEFAULT_LEVEL: u8 = 7;
pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 14;
pub const ROADVIEW_RADIUS_M: u32 = 50;

/// Longitude span shown at level 1. Each level up doubles it, so level 7
/// covers roughly one district (~0.08°).
const LEVEL_ONE_SPAN_DEG: f64 = 0.001_25;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub position: Coordinate,
    pub title: String,
}

/// What the map widget needs: where to look, how far out, and the pins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    pub center: Option<Coordinate>,
    pub level: u8,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapBounds {
    pub x: [f64; 2],
    pub y: [f64; 2],
}

impl MapView {
    /// Centers on the first record, one marker per record.
    pub fn from_records(records: &[AccidentRecord], level: u8) -> Self {
        Self {
            center: records.first().map(AccidentRecord::coordinate),
            level: level.clamp(MIN_LEVEL, MAX_LEVEL),
            markers: records
                .iter()
                .map(|record| MapMarker {
                    position: record.coordinate(),
                    title: record.spot_name.clone(),
                })
                .collect(),
        }
    }

    /// Longitude/latitude window for the current level, `None` without a
    /// center.
    pub fn bounds(&self) -> Option<MapBounds> {
        let center = self.center?;
        let half_span = LEVEL_ONE_SPAN_DEG * f64::from(1_u32 << (self.level - 1)) / 2.0;

        Some(MapBounds {
            x: [center.lng - half_span, center.lng + half_span],
            y: [center.lat - half_span, center.lat + half_span],
        })
    }
}

/// One street-level panel per hotspot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoadviewPanel {
    pub position: Coordinate,
    pub radius_m: u32,
    pub title: String,
}

impl RoadviewPanel {
    pub fn from_records(records: &[AccidentRecord]) -> Vec<Self> {
        records
            .iter()
            .map(|record| Self {
                position: record.coordinate(),
                radius_m: ROADVIEW_RADIUS_M,
                title: record.spot_name.clone(),
            })
            .collect()
    }

    /// Link that opens the street-level imagery for this spot in a browser.
    pub fn link(&self) -> String {
        format!(
            "https://map.kakao.com/link/roadview/{:.6},{:.6}",
            self.position.lat, self.position.lng
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MapMode {
    #[default]
    Map,
    Roadview,
}

/// Interactive state of the map panel: which view, how far zoomed, and
/// which road-view panel is focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapControls {
    pub mode: MapMode,
    pub level: u8,
    pub selected: usize,
}

impl Default for MapControls {
    fn default() -> Self {
        Self {
            mode: MapMode::Map,
            level: DEFAULT_LEVEL,
            selected: 0,
        }
    }
}

impl MapControls {
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            MapMode::Map => MapMode::Roadview,
            MapMode::Roadview => MapMode::Map,
        };
    }

    pub fn zoom_in(&mut self) {
        self.level = self.level.saturating_sub(1).max(MIN_LEVEL);
    }

    pub fn zoom_out(&mut self) {
        self.level = (self.level + 1).min(MAX_LEVEL);
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_next(&mut self, panel_count: usize) {
        if panel_count > 0 {
            self.selected = (self.selected + 1).min(panel_count - 1);
        }
    }
}
