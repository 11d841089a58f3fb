use serde::{Deserialize, Serialize};

/// Year shown when the report view first mounts.
pub const DEFAULT_START_YEAR: i32 = 2015;

/// The query year. Moves by one per control press and is never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct YearSelection(i32);

impl YearSelection {
    pub const fn new(year: i32) -> Self {
        Self(year)
    }

    pub const fn value(self) -> i32 {
        self.0
    }

    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    #[must_use]
    pub const fn previous(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Default for YearSelection {
    fn default() -> Self {
        Self(DEFAULT_START_YEAR)
    }
}

impl std::fmt::Display for YearSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

/// One accident hotspot as reported by the statistics service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccidentRecord {
    #[serde(rename = "spot_nm")]
    pub spot_name: String,
    #[serde(rename = "la_crd")]
    pub latitude: f64,
    #[serde(rename = "lo_crd")]
    pub longitude: f64,
    #[serde(rename = "occrrnc_cnt")]
    pub occurrences: u32,
    #[serde(rename = "se_dnv_cnt")]
    pub severe_injuries: u32,
    #[serde(rename = "dth_dnv_cnt")]
    pub fatalities: u32,
    #[serde(rename = "caslt_cnt", default)]
    pub casualties: u32,
    #[serde(rename = "sl_dnv_cnt", default)]
    pub slight_injuries: u32,
    #[serde(rename = "wnd_dnv_cnt", default)]
    pub injury_reports: u32,
}

impl AccidentRecord {
    pub const fn coordinate(&self) -> Coordinate {
        Coordinate {
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

/// Result of one successful fetch: the service-side total plus the page of
/// records it returned.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccidentReport {
    pub total_count: u64,
    pub records: Vec<AccidentRecord>,
}

impl AccidentReport {
    pub const fn has_data(&self) -> bool {
        self.total_count > 0
    }
}
