use chrono::{DateTime, Local};

use crate::adapters::{ChartData, MapControls, MapView, RoadviewPanel};
use crate::api::TransportFailure;
use crate::domain::{AccidentReport, YearSelection};

/// Hands out request generations. Shared by every report view the app
/// mounts, so a remounted view never accepts an answer meant for an older
/// one.
#[derive(Debug, Default)]
pub struct RequestSequence(u64);

impl RequestSequence {
    pub fn next(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }
}

/// Identifies one outbound request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub year: YearSelection,
}

#[derive(Debug)]
pub struct FetchOutcome {
    pub ticket: FetchTicket,
    pub result: Result<AccidentReport, TransportFailure>,
}

#[derive(Debug)]
pub enum ReportState {
    Loading,
    Error(TransportFailure),
    Ready {
        report: AccidentReport,
        received_at: DateTime<Local>,
    },
}

/// The year-scoped report screen.
///
/// Every year change is an explicit transition that returns the
/// [`FetchTicket`] the caller must dispatch; nothing is fetched as a side
/// effect of drawing. Only the outcome carrying the latest ticket is
/// applied, so the data on screen always belongs to the most recently
/// requested year.
#[derive(Debug)]
pub struct ReportView {
    year: YearSelection,
    state: ReportState,
    latest: FetchTicket,
    pub map: MapControls,
}

impl ReportView {
    pub fn mount(year: YearSelection, sequence: &mut RequestSequence) -> (Self, FetchTicket) {
        let ticket = FetchTicket {
            generation: sequence.next(),
            year,
        };
        let view = Self {
            year,
            state: ReportState::Loading,
            latest: ticket,
            map: MapControls::default(),
        };
        (view, ticket)
    }

    pub const fn year(&self) -> YearSelection {
        self.year
    }

    pub const fn state(&self) -> &ReportState {
        &self.state
    }

    pub const fn latest_ticket(&self) -> FetchTicket {
        self.latest
    }

    pub fn next_year(&mut self, sequence: &mut RequestSequence) -> FetchTicket {
        self.select_year(self.year.next(), sequence)
    }

    pub fn previous_year(&mut self, sequence: &mut RequestSequence) -> FetchTicket {
        self.select_year(self.year.previous(), sequence)
    }

    fn select_year(&mut self, year: YearSelection, sequence: &mut RequestSequence) -> FetchTicket {
        self.year = year;
        self.state = ReportState::Loading;
        self.map = MapControls::default();
        self.latest = FetchTicket {
            generation: sequence.next(),
            year,
        };
        self.latest
    }

    /// Applies a finished request. Returns false when the outcome was
    /// superseded and dropped.
    pub fn resolve(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.ticket != self.latest {
            log::debug!(
                "dropping stale result for {} (generation {}, latest {})",
                outcome.ticket.year,
                outcome.ticket.generation,
                self.latest.generation
            );
            return false;
        }

        self.state = match outcome.result {
            Ok(report) => {
                log::info!(
                    "{}: {} hotspots ({} records on page)",
                    self.year,
                    report.total_count,
                    report.records.len()
                );
                ReportState::Ready {
                    report,
                    received_at: Local::now(),
                }
            }
            Err(failure) => {
                log::warn!("fetch for {} failed: {failure}", self.year);
                ReportState::Error(failure)
            }
        };
        true
    }

    /// What the screen should show for the current state. The chart and map
    /// adapters only run when the report has data.
    pub fn display(&self) -> ReportDisplay {
        match &self.state {
            ReportState::Loading => ReportDisplay::Fetching { year: self.year },
            ReportState::Error(_) => ReportDisplay::Failed { year: self.year },
            ReportState::Ready {
                report,
                received_at,
            } => {
                let body = if report.has_data() {
                    ReportBody::Visuals {
                        chart: ChartData::from_records(&report.records),
                        map: MapView::from_records(&report.records, self.map.level),
                        roadview: RoadviewPanel::from_records(&report.records),
                    }
                } else {
                    ReportBody::NoData
                };

                ReportDisplay::Ready {
                    year: self.year,
                    summary: summary_sentence(self.year, report.total_count),
                    received_at: *received_at,
                    body,
                }
            }
        }
    }
}

pub fn summary_sentence(year: YearSelection, total_count: u64) -> String {
    let noun = if total_count == 1 {
        "accident"
    } else {
        "accidents"
    };
    format!("{year}, Bupyeong-gu: {total_count} {noun} involving elderly pedestrians")
}

#[derive(Debug)]
pub enum ReportDisplay {
    Fetching {
        year: YearSelection,
    },
    Failed {
        year: YearSelection,
    },
    Ready {
        year: YearSelection,
        summary: String,
        received_at: DateTime<Local>,
        body: ReportBody,
    },
}

#[derive(Debug)]
pub enum ReportBody {
    NoData,
    Visuals {
        chart: ChartData,
        map: MapView,
        roadview: Vec<RoadviewPanel>,
    },
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::AccidentRecord;

    pub(crate) fn sample_report(count: usize) -> AccidentReport {
        let spots = [
            ("인천광역시 부평구 부평동(부평역 부근)", 37.4895, 126.7245, 6),
            ("인천광역시 부평구 십정동(동암역 부근)", 37.4712, 126.7027, 4),
            ("인천광역시 부평구 산곡동(산곡사거리 부근)", 37.5031, 126.7089, 3),
        ];

        let records = spots
            .iter()
            .cycle()
            .take(count)
            .map(|(name, lat, lng, occurrences)| AccidentRecord {
                spot_name: (*name).to_string(),
                latitude: *lat,
                longitude: *lng,
                occurrences: *occurrences,
                severe_injuries: 1,
                fatalities: 0,
                casualties: 0,
                slight_injuries: 0,
                injury_reports: 0,
            })
            .collect();

        AccidentReport {
            total_count: count as u64,
            records,
        }
    }

    fn ok(ticket: FetchTicket, report: AccidentReport) -> FetchOutcome {
        FetchOutcome {
            ticket,
            result: Ok(report),
        }
    }

    #[test]
    fn mount_starts_loading_with_one_request() {
        let mut sequence = RequestSequence::default();
        let (view, ticket) = ReportView::mount(YearSelection::new(2015), &mut sequence);

        assert!(matches!(view.state(), ReportState::Loading));
        assert_eq!(ticket.year, YearSelection::new(2015));
        assert_eq!(view.latest_ticket(), ticket);
        assert!(matches!(view.display(), ReportDisplay::Fetching { .. }));
    }

    #[test]
    fn each_year_change_issues_one_request_in_order() {
        let mut sequence = RequestSequence::default();
        let (mut view, first) = ReportView::mount(YearSelection::new(2015), &mut sequence);
        let second = view.next_year(&mut sequence);
        let third = view.next_year(&mut sequence);

        let years: Vec<i32> = [first, second, third]
            .iter()
            .map(|t| t.year.value())
            .collect();
        assert_eq!(years, vec![2015, 2016, 2017]);
        assert!(first.generation < second.generation && second.generation < third.generation);

        let back = view.previous_year(&mut sequence);
        assert_eq!(back.year.value(), 2016);
    }

    #[test]
    fn zero_count_renders_no_data_without_adapters() {
        let mut sequence = RequestSequence::default();
        let (mut view, ticket) = ReportView::mount(YearSelection::new(2030), &mut sequence);

        assert!(view.resolve(ok(ticket, sample_report(0))));

        match view.display() {
            ReportDisplay::Ready { summary, body, .. } => {
                assert!(summary.contains(": 0 accidents"));
                assert!(matches!(body, ReportBody::NoData));
            }
            other => panic!("expected ready display, got {other:?}"),
        }
    }

    #[test]
    fn three_records_feed_both_adapters() {
        let mut sequence = RequestSequence::default();
        let (mut view, ticket) = ReportView::mount(YearSelection::new(2015), &mut sequence);

        assert!(view.resolve(ok(ticket, sample_report(3))));

        match view.display() {
            ReportDisplay::Ready { summary, body, .. } => {
                assert!(summary.contains(": 3 accidents"));
                match body {
                    ReportBody::Visuals {
                        chart,
                        map,
                        roadview,
                    } => {
                        assert_eq!(chart.len(), 3);
                        assert_eq!(map.markers.len(), 3);
                        assert_eq!(roadview.len(), 3);
                    }
                    ReportBody::NoData => panic!("expected visuals"),
                }
            }
            other => panic!("expected ready display, got {other:?}"),
        }
    }

    #[test]
    fn failure_renders_failed_placeholder() {
        let mut sequence = RequestSequence::default();
        let (mut view, ticket) = ReportView::mount(YearSelection::new(2015), &mut sequence);

        assert!(view.resolve(FetchOutcome {
            ticket,
            result: Err(TransportFailure::Status(503)),
        }));

        assert!(matches!(view.state(), ReportState::Error(_)));
        assert!(matches!(view.display(), ReportDisplay::Failed { .. }));
    }

    #[test]
    fn year_change_clears_error_and_data() {
        let mut sequence = RequestSequence::default();
        let (mut view, ticket) = ReportView::mount(YearSelection::new(2015), &mut sequence);
        view.resolve(FetchOutcome {
            ticket,
            result: Err(TransportFailure::Status(500)),
        });

        let retry = view.next_year(&mut sequence);
        assert!(matches!(view.state(), ReportState::Loading));

        view.resolve(ok(retry, sample_report(2)));
        assert!(matches!(view.state(), ReportState::Ready { .. }));

        view.map.toggle_mode();
        view.next_year(&mut sequence);
        assert!(matches!(view.state(), ReportState::Loading));
        assert_eq!(view.map, MapControls::default());
    }

    #[test]
    fn stale_results_never_replace_newer_ones() {
        let mut sequence = RequestSequence::default();
        let (mut view, old) = ReportView::mount(YearSelection::new(2015), &mut sequence);
        let fresh = view.next_year(&mut sequence);

        assert!(view.resolve(ok(fresh, sample_report(2))));
        assert!(!view.resolve(ok(old, sample_report(3))));

        match view.state() {
            ReportState::Ready { report, .. } => assert_eq!(report.total_count, 2),
            other => panic!("expected ready state, got {other:?}"),
        }
        assert_eq!(view.year().value(), 2016);
    }

    #[test]
    fn remounted_view_ignores_previous_mount() {
        let mut sequence = RequestSequence::default();
        let (_, abandoned) = ReportView::mount(YearSelection::new(2015), &mut sequence);
        let (mut view, _) = ReportView::mount(YearSelection::new(2015), &mut sequence);

        assert!(!view.resolve(ok(abandoned, sample_report(1))));
        assert!(matches!(view.state(), ReportState::Loading));
    }
}
