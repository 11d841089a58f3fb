use serde::Serialize;

use crate::domain::AccidentRecord;

/// Spot names start with the city and district ("인천광역시 부평구"),
/// which is the same for every record and is dropped from axis labels.
/// The space left after the cut is trimmed.
pub const NAME_PREFIX_CHARS: usize = 9;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub occurrences: u32,
    pub severe_injuries: u32,
    pub fatalities: u32,
}

/// One line of the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSeries {
    pub label: &'static str,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartData {
    pub points: Vec<ChartPoint>,
}

impl ChartData {
    pub fn from_records(records: &[AccidentRecord]) -> Self {
        let points = records
            .iter()
            .map(|record| ChartPoint {
                name: short_spot_name(&record.spot_name),
                occurrences: record.occurrences,
                severe_injuries: record.severe_injuries,
                fatalities: record.fatalities,
            })
            .collect();

        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Occurrences, severe injuries and fatalities as x/y pairs, x being the
    /// record position.
    #[allow(clippy::cast_precision_loss)]
    pub fn series(&self) -> [ChartSeries; 3] {
        let line = |label, value: fn(&ChartPoint) -> u32| ChartSeries {
            label,
            points: self
                .points
                .iter()
                .enumerate()
                .map(|(index, point)| (index as f64, f64::from(value(point))))
                .collect(),
        };

        [
            line("Occurrences", |p| p.occurrences),
            line("Severe injuries", |p| p.severe_injuries),
            line("Fatalities", |p| p.fatalities),
        ]
    }

    pub fn max_value(&self) -> u32 {
        self.points
            .iter()
            .map(|p| p.occurrences.max(p.severe_injuries).max(p.fatalities))
            .max()
            .unwrap_or(0)
    }
}

pub fn short_spot_name(spot_name: &str) -> String {
    let rest: String = spot_name.chars().skip(NAME_PREFIX_CHARS).collect();
    rest.trim_start().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, occurrences: u32, severe: u32, deaths: u32) -> AccidentRecord {
        AccidentRecord {
            spot_name: name.to_string(),
            latitude: 37.49,
            longitude: 126.72,
            occurrences,
            severe_injuries: severe,
            fatalities: deaths,
            casualties: 0,
            slight_injuries: 0,
            injury_reports: 0,
        }
    }

    #[test]
    fn drops_city_and_district_prefix() {
        assert_eq!(
            short_spot_name("인천광역시 부평구 부평동(부평역 부근)"),
            "부평동(부평역 부근)"
        );
        assert_eq!(short_spot_name("short"), "");
    }

    #[test]
    fn one_point_per_record_in_order() {
        let records = vec![
            record("인천광역시 부평구 부평동(부평역 부근)", 6, 3, 1),
            record("인천광역시 부평구 십정동(동암역 부근)", 4, 2, 0),
        ];

        let chart = ChartData::from_records(&records);
        assert_eq!(chart.len(), 2);
        assert_eq!(chart.points[1].name, "십정동(동암역 부근)");
        assert_eq!(chart.max_value(), 6);

        let [occurrences, severe, deaths] = chart.series();
        assert_eq!(occurrences.points, vec![(0.0, 6.0), (1.0, 4.0)]);
        assert_eq!(severe.points, vec![(0.0, 3.0), (1.0, 2.0)]);
        assert_eq!(deaths.label, "Fatalities");
        assert_eq!(deaths.points, vec![(0.0, 1.0), (1.0, 0.0)]);
    }
}
